use serde::Serialize;

use crate::dataset::Dataset;
use crate::domain::ReleaseYearParser;
use crate::errors::DashboardError;

/// Rating count at which a title counts as 100% popular
const FULL_POPULARITY_RATINGS: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PopularityLevel {
    Blockbuster, // >= 80
    Popular,     // 50-79
    Average,     // 20-49
    Niche,       // < 20
}

impl PopularityLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            PopularityLevel::Blockbuster
        } else if score >= 50.0 {
            PopularityLevel::Popular
        } else if score >= 20.0 {
            PopularityLevel::Average
        } else {
            PopularityLevel::Niche
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PopularityLevel::Blockbuster => "blockbuster",
            PopularityLevel::Popular => "popular",
            PopularityLevel::Average => "average",
            PopularityLevel::Niche => "niche",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInfo {
    pub title: String,
    pub release_year: Option<i32>,
    pub genres: String,
    pub rating_count: usize,
    pub avg_rating: f64,
    /// 0-100
    pub popularity_score: f64,
    pub popularity_level: PopularityLevel,
    /// 0-100
    pub quality_score: f64,
    pub stars: u8,
}

pub fn movie_info(
    dataset: &Dataset,
    title: &str,
    years: &ReleaseYearParser,
) -> Result<MovieInfo, DashboardError> {
    let stats = dataset
        .title_stats(title)
        .ok_or_else(|| DashboardError::MovieNotFound(title.to_string()))?;

    let popularity_score = popularity(stats.rating_count, FULL_POPULARITY_RATINGS);

    Ok(MovieInfo {
        title: stats.title.clone(),
        release_year: years.parse(title),
        genres: dataset.genres_of(title).unwrap_or_default().to_string(),
        rating_count: stats.rating_count,
        avg_rating: stats.avg_rating,
        popularity_score,
        popularity_level: PopularityLevel::from_score(popularity_score),
        quality_score: stats.avg_rating / 5.0 * 100.0,
        stars: stars(stats.avg_rating),
    })
}

/// Share of `full_at` ratings reached, capped at 100
pub fn popularity(rating_count: usize, full_at: f64) -> f64 {
    (rating_count as f64 / full_at * 100.0).min(100.0)
}

pub fn stars(avg_rating: f64) -> u8 {
    avg_rating.floor().clamp(0.0, 5.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::store::fixtures::sample_dataset;

    #[test]
    fn test_movie_info_for_known_title() {
        let dataset = sample_dataset();
        let years = ReleaseYearParser::new().unwrap();

        let info = movie_info(&dataset, "Heat (1995)", &years).unwrap();

        assert_eq!(info.release_year, Some(1995));
        assert_eq!(info.rating_count, 5);
        assert_eq!(info.stars, 3);
        assert!((info.popularity_score - 0.5).abs() < 1e-9);
        assert_eq!(info.popularity_level, PopularityLevel::Niche);
        assert!((info.quality_score - 74.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_title() {
        let dataset = sample_dataset();
        let years = ReleaseYearParser::new().unwrap();
        assert!(matches!(
            movie_info(&dataset, "Vertigo (1958)", &years),
            Err(DashboardError::MovieNotFound(_))
        ));
    }

    #[test]
    fn test_popularity_levels() {
        assert_eq!(popularity(2500, 1000.0), 100.0);
        assert_eq!(PopularityLevel::from_score(80.0), PopularityLevel::Blockbuster);
        assert_eq!(PopularityLevel::from_score(50.0), PopularityLevel::Popular);
        assert_eq!(PopularityLevel::from_score(20.0), PopularityLevel::Average);
        assert_eq!(PopularityLevel::from_score(19.9), PopularityLevel::Niche);
    }
}
