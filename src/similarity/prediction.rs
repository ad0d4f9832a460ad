use anyhow::Result;
use serde::Serialize;

use crate::dataset::aggregates::mean_rating;
use crate::dataset::Dataset;
use crate::domain::{round2, UserId};
use crate::errors::DashboardError;

const MIN_RATING: f64 = 1.0;
const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingPrediction {
    pub user_id: UserId,
    pub title: String,
    pub user_avg: f64,
    pub movie_avg: f64,
    pub genre_factor: f64,
    pub predicted: f64,
}

/// Midpoint of the user's and the movie's average, scaled and clamped to the rating scale
pub fn predict_rating(user_avg: f64, movie_avg: f64, genre_factor: f64) -> f64 {
    let base_prediction = (user_avg + movie_avg) / 2.0;
    (base_prediction * genre_factor).clamp(MIN_RATING, MAX_RATING)
}

pub fn predict_for(
    dataset: &Dataset,
    user_id: UserId,
    title: &str,
    genre_factor: f64,
) -> Result<RatingPrediction> {
    if !genre_factor.is_finite() || genre_factor <= 0.0 {
        return Err(DashboardError::InvalidParameter(format!(
            "genre factor must be positive, got {}",
            genre_factor
        ))
        .into());
    }

    let user_avg = mean_rating(dataset.user_ratings(user_id))
        .map(round2)
        .ok_or(DashboardError::UserNotFound(user_id))?;
    let movie_avg = dataset
        .title_stats(title)
        .map(|s| s.avg_rating)
        .ok_or_else(|| DashboardError::MovieNotFound(title.to_string()))?;

    Ok(RatingPrediction {
        user_id,
        title: title.to_string(),
        user_avg,
        movie_avg,
        genre_factor,
        predicted: predict_rating(user_avg, movie_avg, genre_factor),
    })
}
