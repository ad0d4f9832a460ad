use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use super::{error_response, require, AppState, PredictParams, RecommendParams};
use crate::similarity::{self, RecommendationQuery};

pub async fn get_recommendations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RecommendParams>,
) -> Response {
    let title = match require(params.title, "title") {
        Ok(title) => title,
        Err(e) => return error_response(e.into()),
    };

    let mut query = RecommendationQuery::from(&state.config.recommendation);
    if let Some(top_n) = params.top_n {
        query.top_n = top_n.clamp(1, 100);
    }
    if let Some(min_ratings) = params.min_ratings {
        query.min_ratings = min_ratings;
    }
    if let Some(threshold) = params.threshold {
        query.similarity_threshold = threshold.clamp(-1.0, 1.0);
    }

    match similarity::recommend(&state.dataset, &title, &query) {
        Ok(recommendations) => Json(recommendations).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_prediction(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PredictParams>,
) -> Response {
    let inputs = require(params.user_id, "user_id")
        .and_then(|user_id| Ok((user_id, require(params.title, "title")?)));
    let (user_id, title) = match inputs {
        Ok(inputs) => inputs,
        Err(e) => return error_response(e.into()),
    };
    let genre_factor = params.genre_factor.unwrap_or(1.0);

    match similarity::predict_for(&state.dataset, user_id, &title, genre_factor) {
        Ok(prediction) => Json(prediction).into_response(),
        Err(e) => error_response(e),
    }
}
