use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json, Response},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

use super::{error_response, AppState, DiscoverParams, LeaderboardParams};
use crate::analytics::{self, DiscoveryQuery, LeaderboardQuery, SortKey};
use crate::api::models::{AnalyticsResponse, DiscoverResponse, LeaderboardResponse};

pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LeaderboardParams>,
) -> Response {
    let sort_by = match params.sort_by.as_deref().map(str::parse::<SortKey>).transpose() {
        Ok(sort_by) => sort_by.unwrap_or_default(),
        Err(e) => return error_response(e.into()),
    };

    let mut query = LeaderboardQuery::from(&state.config.leaderboard);
    query.genre = params.genre.filter(|g| !g.is_empty() && g != "all");
    query.sort_by = sort_by;
    if let Some(min_ratings) = params.min_ratings {
        query.min_ratings = min_ratings;
    }
    if let Some(limit) = params.limit {
        query.limit = limit.clamp(1, 1000);
    }

    let top = analytics::top_movies(&state.dataset, &query);
    Json(LeaderboardResponse::new(query.genre, sort_by, top)).into_response()
}

pub async fn get_analytics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let settings = &state.config.analytics;
    let dataset = &state.dataset;

    Json(AnalyticsResponse {
        stats: analytics::system_stats(dataset),
        rating_distribution: analytics::rating_distribution(dataset),
        genre_distribution: analytics::genre_distribution(dataset, settings.top_genres),
        popular_movies: analytics::popular_movies(
            dataset,
            settings.popular_min_ratings,
            settings.popular_limit,
        ),
    })
}

pub async fn get_discovery(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DiscoverParams>,
) -> Response {
    let mut query = DiscoveryQuery::from(&state.config.discovery);
    if let Some(count) = params.count {
        query.count = count.clamp(1, 100);
    }
    if let Some(min_rating) = params.min_rating {
        query.min_rating = min_rating;
    }
    if let Some(min_reviews) = params.min_reviews {
        query.min_reviews = min_reviews;
    }

    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    Json(DiscoverResponse {
        discovery: analytics::discover(&state.dataset, &query, &mut rng),
        overview: analytics::catalog_overview(
            &state.dataset,
            state.config.analytics.high_rating_cutoff,
        ),
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use crate::api::handlers::test_support::get;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_leaderboard_by_genre() {
        let (status, body) = get("/api/leaderboard?genre=Drama&min_ratings=1&sort_by=count").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sortBy"], "ratingCount");
        assert_eq!(body["items"][0]["rank"], 1);
        assert_eq!(body["items"][0]["title"], "Babe (1995)");
    }

    #[tokio::test]
    async fn test_leaderboard_rejects_unknown_sort() {
        let (status, _) = get("/api/leaderboard?sort_by=title").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analytics_sections() {
        let (status, body) = get("/api/analytics").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stats"]["users"], 5);
        assert_eq!(body["genreDistribution"][0]["genre"], "Crime");
        // nothing reaches the default 100-rating popularity floor
        assert_eq!(body["popularMovies"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_discovery_seeded() {
        let (status, body) =
            get("/api/discover?count=2&min_rating=3.0&min_reviews=1&seed=3").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["picks"].as_array().unwrap().len(), 2);
        assert_eq!(body["shortfall"], false);
        assert_eq!(body["overview"]["totalTitles"], 5);
    }
}
