use std::cmp::Ordering;

use anyhow::Result;
use log::debug;

use super::pearson::pearson;
use super::types::{Correlation, Recommendation, RecommendationQuery, Recommendations};
use crate::dataset::{Dataset, RatingsMatrix};
use crate::errors::DashboardError;

/// Correlates the target title's column with every column of the matrix.
/// Columns without a defined correlation are left out; the target itself is kept.
pub fn correlate_with(
    matrix: &RatingsMatrix,
    title: &str,
    min_overlap: usize,
) -> Result<Vec<(String, Correlation)>, DashboardError> {
    let target = matrix
        .column(title)
        .ok_or_else(|| DashboardError::MovieNotFound(title.to_string()))?;

    let correlations = matrix
        .titles()
        .iter()
        .enumerate()
        .filter_map(|(idx, other)| {
            pearson(target, matrix.column_at(idx), min_overlap).map(|r| (other.clone(), r))
        })
        .collect();

    Ok(correlations)
}

/// Item-to-item collaborative filtering over the ratings matrix
pub fn recommend(
    dataset: &Dataset,
    title: &str,
    query: &RecommendationQuery,
) -> Result<Recommendations> {
    let correlations = correlate_with(dataset.matrix(), title, query.min_overlap)?;
    debug!("{} titles correlate with '{}'", correlations.len(), title);

    let mut candidates: Vec<(String, Correlation, usize, f64)> = correlations
        .into_iter()
        .filter(|(other, _)| other != title)
        .filter_map(|(other, r)| {
            let stats = dataset.title_stats(&other)?;
            Some((other, r, stats.rating_count, stats.avg_rating))
        })
        .filter(|(_, _, count, _)| *count >= query.min_ratings)
        .collect();
    let candidate_count = candidates.len();

    candidates.retain(|(_, r, _, _)| *r >= query.similarity_threshold);
    candidates.sort_by(|a, b| by_correlation_desc(a.1, b.1).then_with(|| a.0.cmp(&b.0)));
    candidates.truncate(query.top_n);

    let items = candidates
        .into_iter()
        .map(|(other, correlation, rating_count, avg_rating)| Recommendation {
            genres: dataset.genres_of(&other).unwrap_or_default().to_string(),
            title: other,
            correlation,
            rating_count,
            avg_rating,
        })
        .collect();

    Ok(Recommendations {
        target: title.to_string(),
        candidates: candidate_count,
        items,
    })
}

fn by_correlation_desc(a: Correlation, b: Correlation) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
