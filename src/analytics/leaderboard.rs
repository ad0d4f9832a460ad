use std::cmp::Ordering;
use std::str::FromStr;

use serde::Serialize;

use crate::config::settings::LeaderboardSettings;
use crate::dataset::aggregates::title_stats;
use crate::dataset::Dataset;
use crate::domain::TitleStats;
use crate::errors::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    AvgRating,
    RatingCount,
}

impl FromStr for SortKey {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" | "avgRating" | "avg" => Ok(SortKey::AvgRating),
            "count" | "ratingCount" => Ok(SortKey::RatingCount),
            other => Err(DashboardError::InvalidParameter(format!(
                "unknown sort key '{}', expected 'rating' or 'count'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LeaderboardQuery {
    /// `None` ranks every genre together
    pub genre: Option<String>,
    pub min_ratings: usize,
    pub sort_by: SortKey,
    pub limit: usize,
}

impl From<&LeaderboardSettings> for LeaderboardQuery {
    fn from(settings: &LeaderboardSettings) -> Self {
        Self {
            genre: None,
            min_ratings: settings.min_ratings,
            sort_by: SortKey::default(),
            limit: settings.limit,
        }
    }
}

pub fn top_movies(dataset: &Dataset, query: &LeaderboardQuery) -> Vec<TitleStats> {
    let mut stats = match &query.genre {
        Some(genre) => title_stats(dataset.ratings().iter().filter(|r| r.has_genre(genre))),
        None => dataset.all_title_stats().to_vec(),
    };

    stats.retain(|s| s.rating_count >= query.min_ratings);
    stats.sort_by(|a, b| compare(a, b, query.sort_by).then_with(|| a.title.cmp(&b.title)));
    stats.truncate(query.limit);
    stats
}

fn compare(a: &TitleStats, b: &TitleStats, key: SortKey) -> Ordering {
    match key {
        SortKey::AvgRating => b.avg_rating.partial_cmp(&a.avg_rating).unwrap_or(Ordering::Equal),
        SortKey::RatingCount => b.rating_count.cmp(&a.rating_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::store::fixtures::sample_dataset;

    fn query(genre: Option<&str>, min_ratings: usize, sort_by: SortKey) -> LeaderboardQuery {
        LeaderboardQuery {
            genre: genre.map(str::to_string),
            min_ratings,
            sort_by,
            limit: 20,
        }
    }

    #[test]
    fn test_all_genres_by_average() {
        let dataset = sample_dataset();
        let top = top_movies(&dataset, &query(None, 4, SortKey::AvgRating));

        let titles: Vec<&str> = top.iter().map(|s| s.title.as_str()).collect();
        // Casino 4.0, Heat 3.7, Ronin 3.5, Babe 2.5; Jumanji has one rating
        assert_eq!(titles, vec!["Casino (1995)", "Heat (1995)", "Ronin (1998)", "Babe (1995)"]);
    }

    #[test]
    fn test_genre_filter_and_count_sort() {
        let dataset = sample_dataset();
        let top = top_movies(&dataset, &query(Some("Drama"), 1, SortKey::RatingCount));

        let titles: Vec<&str> = top.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Babe (1995)", "Casino (1995)"]);
        assert_eq!(top[0].rating_count, 5);
    }

    #[test]
    fn test_limit_and_unknown_genre() {
        let dataset = sample_dataset();

        let mut q = query(None, 1, SortKey::AvgRating);
        q.limit = 2;
        assert_eq!(top_movies(&dataset, &q).len(), 2);

        assert!(top_movies(&dataset, &query(Some("Western"), 1, SortKey::AvgRating)).is_empty());
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("count".parse::<SortKey>().unwrap(), SortKey::RatingCount);
        assert_eq!("rating".parse::<SortKey>().unwrap(), SortKey::AvgRating);
        assert!("title".parse::<SortKey>().is_err());
    }
}
