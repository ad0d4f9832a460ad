use serde::Serialize;

use crate::dataset::Dataset;
use crate::domain::{count_genres, TitleStats};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStats {
    pub movies: usize,
    pub users: usize,
    pub ratings: usize,
    pub mean_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingBucket {
    pub rating: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreShare {
    pub genre: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogOverview {
    pub total_titles: usize,
    pub high_rated_titles: usize,
    pub mean_rating: f64,
}

pub fn system_stats(dataset: &Dataset) -> SystemStats {
    SystemStats {
        movies: dataset.matrix().n_titles(),
        users: dataset.matrix().n_users(),
        ratings: dataset.ratings().len(),
        mean_rating: dataset.global_mean(),
    }
}

/// Number of ratings per distinct rating value, lowest value first
pub fn rating_distribution(dataset: &Dataset) -> Vec<RatingBucket> {
    let mut values: Vec<f64> = dataset.ratings().iter().map(|r| r.rating).collect();
    values.sort_by(|a, b| a.total_cmp(b));

    let mut buckets: Vec<RatingBucket> = Vec::new();
    for value in values {
        match buckets.last_mut() {
            Some(bucket) if bucket.rating == value => bucket.count += 1,
            _ => buckets.push(RatingBucket {
                rating: value,
                count: 1,
            }),
        }
    }
    buckets
}

/// Genre occurrences counted once per rating, most common first
pub fn genre_distribution(dataset: &Dataset, top: usize) -> Vec<GenreShare> {
    count_genres(dataset.ratings().iter().map(|r| r.genres.as_str()))
        .into_iter()
        .take(top)
        .map(|(genre, count)| GenreShare { genre, count })
        .collect()
}

/// Titles with at least `min_ratings` ratings, in title order
pub fn popular_movies(dataset: &Dataset, min_ratings: usize, limit: usize) -> Vec<TitleStats> {
    dataset
        .all_title_stats()
        .iter()
        .filter(|s| s.rating_count >= min_ratings)
        .take(limit)
        .cloned()
        .collect()
}

pub fn catalog_overview(dataset: &Dataset, high_rating_cutoff: f64) -> CatalogOverview {
    let stats = dataset.all_title_stats();
    CatalogOverview {
        total_titles: stats.len(),
        high_rated_titles: stats
            .iter()
            .filter(|s| s.avg_rating >= high_rating_cutoff)
            .count(),
        mean_rating: dataset.global_mean(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::store::fixtures::sample_dataset;

    #[test]
    fn test_system_stats() {
        let stats = system_stats(&sample_dataset());
        assert_eq!(stats.movies, 5);
        assert_eq!(stats.users, 5);
        assert_eq!(stats.ratings, 19);
        assert!((stats.mean_rating - 64.0 / 19.0).abs() < 1e-9);
    }

    #[test]
    fn test_rating_distribution_ascending() {
        let buckets = rating_distribution(&sample_dataset());

        assert!(buckets.windows(2).all(|w| w[0].rating < w[1].rating));
        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), 19);
        assert_eq!(buckets.first(), Some(&RatingBucket { rating: 1.0, count: 1 }));
        let threes = buckets.iter().find(|b| b.rating == 3.0).unwrap();
        assert_eq!(threes.count, 4);
    }

    #[test]
    fn test_genre_distribution_counts_per_rating() {
        let shares = genre_distribution(&sample_dataset(), 2);

        // Crime: Heat 5 + Ronin 4 + Casino 4
        assert_eq!(shares[0], GenreShare { genre: "Crime".to_string(), count: 13 });
        assert_eq!(shares.len(), 2);
    }

    #[test]
    fn test_popular_movies_and_overview() {
        let dataset = sample_dataset();

        let popular = popular_movies(&dataset, 5, 20);
        let titles: Vec<&str> = popular.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Babe (1995)", "Heat (1995)"]);

        let overview = catalog_overview(&dataset, 4.0);
        assert_eq!(overview.total_titles, 5);
        assert_eq!(overview.high_rated_titles, 1);
    }
}
