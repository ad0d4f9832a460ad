use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    analytics::{get_analytics, get_discovery, get_leaderboard},
    movies::{get_feature, get_genres, get_movie_info, get_stats, list_features, search_movies},
    recommendations::{get_prediction, get_recommendations},
    users::get_user_profile,
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/features", get(list_features))
        .route("/api/features/:slug", get(get_feature))
        .route("/api/stats", get(get_stats))
        .route("/api/genres", get(get_genres))
        .route("/api/movies/search", get(search_movies))
        .route("/api/movies/info", get(get_movie_info))
        .route("/api/recommendations", get(get_recommendations))
        .route("/api/leaderboard", get(get_leaderboard))
        .route("/api/analytics", get(get_analytics))
        .route("/api/users/:id", get(get_user_profile))
        .route("/api/discover", get(get_discovery))
        .route("/api/predict", get(get_prediction))
        .with_state(state)
}
