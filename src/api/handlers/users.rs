use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use super::AppState;
use crate::analytics;
use crate::errors::DashboardError;

pub async fn get_user_profile(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<u32>,
) -> Response {
    match analytics::user_profile(&state.dataset, user_id, &state.config.user) {
        Some(profile) => Json(profile).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            DashboardError::UserNotFound(user_id).to_string(),
        )
            .into_response(),
    }
}
