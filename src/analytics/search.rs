use std::collections::HashSet;
use std::str::FromStr;

use serde::Serialize;

use crate::dataset::Dataset;
use crate::errors::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchMode {
    #[default]
    Title,
    Genre,
}

impl FromStr for SearchMode {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SearchMode::Title),
            "genre" => Ok(SearchMode::Genre),
            other => Err(DashboardError::InvalidParameter(format!(
                "unknown search mode '{}', expected 'title' or 'genre'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub title: String,
    pub rating_count: usize,
    pub avg_rating: f64,
    pub genres: String,
}

pub fn search(dataset: &Dataset, term: &str, mode: SearchMode) -> Vec<String> {
    match mode {
        SearchMode::Title => search_titles(dataset, term),
        SearchMode::Genre => search_genres(dataset, term),
    }
}

/// Case-insensitive substring match over the matrix titles, in title order
pub fn search_titles(dataset: &Dataset, term: &str) -> Vec<String> {
    let needle = term.to_lowercase();
    dataset
        .matrix()
        .titles()
        .iter()
        .filter(|title| title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Case-insensitive substring match over genre strings, in first-seen order
pub fn search_genres(dataset: &Dataset, term: &str) -> Vec<String> {
    let needle = term.to_lowercase();
    let mut seen = HashSet::new();
    dataset
        .ratings()
        .iter()
        .filter(|r| r.genres.to_lowercase().contains(&needle))
        .filter(|r| seen.insert(r.title.as_str()))
        .map(|r| r.title.clone())
        .collect()
}

pub fn to_hit(dataset: &Dataset, title: String) -> SearchHit {
    let (rating_count, avg_rating) = dataset
        .title_stats(&title)
        .map(|s| (s.rating_count, s.avg_rating))
        .unwrap_or((0, 0.0));
    SearchHit {
        genres: dataset.genres_of(&title).unwrap_or_default().to_string(),
        title,
        rating_count,
        avg_rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::store::fixtures::sample_dataset;

    #[test]
    fn test_title_search_is_case_insensitive() {
        let dataset = sample_dataset();
        assert_eq!(search_titles(&dataset, "HEAT"), vec!["Heat (1995)"]);
        assert_eq!(search_titles(&dataset, "(1995)").len(), 4);
        assert!(search_titles(&dataset, "Vertigo").is_empty());
    }

    #[test]
    fn test_genre_search_unique_in_first_seen_order() {
        let dataset = sample_dataset();
        let hits = search(&dataset, "children", SearchMode::Genre);
        assert_eq!(hits, vec!["Babe (1995)", "Jumanji (1995)"]);
    }

    #[test]
    fn test_hit_carries_stats() {
        let dataset = sample_dataset();
        let hit = to_hit(&dataset, "Casino (1995)".to_string());
        assert_eq!(hit.rating_count, 4);
        assert_eq!(hit.avg_rating, 4.0);
        assert_eq!(hit.genres, "Crime|Drama");
    }

    #[test]
    fn test_search_mode_parsing() {
        assert_eq!("genre".parse::<SearchMode>().unwrap(), SearchMode::Genre);
        assert!("actor".parse::<SearchMode>().is_err());
    }
}
