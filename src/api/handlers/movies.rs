use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use super::{error_response, require, AppState, SearchParams, TitleParams};
use crate::analytics::{self, search::to_hit, SearchMode};
use crate::config::{find_feature, get_features};
use crate::pagination::paginate;

pub async fn list_features() -> impl IntoResponse {
    Json(get_features())
}

pub async fn get_feature(Path(slug): Path<String>) -> Response {
    match find_feature(&slug) {
        Some(feature) => Json(feature).into_response(),
        None => (StatusCode::NOT_FOUND, format!("Unknown feature '{}'", slug)).into_response(),
    }
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(analytics::system_stats(&state.dataset))
}

pub async fn get_genres(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.dataset.genre_list().to_vec())
}

pub async fn search_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let term = match require(params.q.filter(|q| !q.trim().is_empty()), "q") {
        Ok(term) => term,
        Err(e) => return error_response(e.into()),
    };
    let mode = match params.mode.as_deref().map(str::parse::<SearchMode>).transpose() {
        Ok(mode) => mode.unwrap_or_default(),
        Err(e) => return error_response(e.into()),
    };
    let page = params.page.unwrap_or(1);
    let page_size = params
        .page_size
        .unwrap_or(state.config.search.page_size)
        .clamp(1, 100);

    let matches = analytics::search(&state.dataset, term.trim(), mode);
    let result = paginate(&matches, page, page_size).map(|title| to_hit(&state.dataset, title));

    Json(result).into_response()
}

pub async fn get_movie_info(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TitleParams>,
) -> Response {
    let result = require(params.title, "title")
        .and_then(|title| analytics::movie_info(&state.dataset, &title, &state.years));

    match result {
        Ok(info) => Json(info).into_response(),
        Err(e) => error_response(anyhow::Error::from(e)),
    }
}
