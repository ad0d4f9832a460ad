use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::config::settings::AppConfig;
use crate::dataset::Dataset;
use crate::domain::ReleaseYearParser;
use crate::errors::{find_dashboard_error, DashboardError};

pub mod analytics;
pub mod movies;
pub mod recommendations;
pub mod users;

pub struct AppState {
    pub dataset: Dataset,
    pub config: AppConfig,
    pub years: ReleaseYearParser,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub mode: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[derive(Deserialize)]
pub struct TitleParams {
    pub title: Option<String>,
}

#[derive(Deserialize)]
pub struct RecommendParams {
    pub title: Option<String>,
    pub top_n: Option<usize>,
    pub min_ratings: Option<usize>,
    pub threshold: Option<f64>,
}

#[derive(Deserialize)]
pub struct LeaderboardParams {
    pub genre: Option<String>,
    pub min_ratings: Option<usize>,
    pub sort_by: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct DiscoverParams {
    pub count: Option<usize>,
    pub min_rating: Option<f64>,
    pub min_reviews: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Deserialize)]
pub struct PredictParams {
    pub user_id: Option<u32>,
    pub title: Option<String>,
    pub genre_factor: Option<f64>,
}

/// Lookup misses are 404, bad input is 400, the rest is 500
pub fn error_response(err: anyhow::Error) -> Response {
    match find_dashboard_error(&err) {
        Some(e) if e.is_not_found() => (StatusCode::NOT_FOUND, e.to_string()).into_response(),
        Some(e @ DashboardError::InvalidParameter(_)) => {
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
        _ => {
            log::error!("Request failed: {:?}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", err)).into_response()
        }
    }
}

pub fn require<T>(value: Option<T>, name: &str) -> Result<T, DashboardError> {
    value.ok_or_else(|| DashboardError::InvalidParameter(format!("'{}' is required", name)))
}
