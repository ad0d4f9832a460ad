use serde::Serialize;

use crate::analytics::leaderboard::SortKey;
use crate::analytics::summary::{CatalogOverview, GenreShare, RatingBucket, SystemStats};
use crate::analytics::Discovery;
use crate::domain::TitleStats;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub title: String,
    pub avg_rating: f64,
    pub rating_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub genre: Option<String>,
    pub sort_by: SortKey,
    pub items: Vec<LeaderboardEntry>,
}

impl LeaderboardResponse {
    pub fn new(genre: Option<String>, sort_by: SortKey, stats: Vec<TitleStats>) -> Self {
        let items = stats
            .into_iter()
            .enumerate()
            .map(|(i, s)| LeaderboardEntry {
                rank: i + 1,
                title: s.title,
                avg_rating: s.avg_rating,
                rating_count: s.rating_count,
            })
            .collect();
        Self {
            genre,
            sort_by,
            items,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub stats: SystemStats,
    pub rating_distribution: Vec<RatingBucket>,
    pub genre_distribution: Vec<GenreShare>,
    pub popular_movies: Vec<TitleStats>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverResponse {
    #[serde(flatten)]
    pub discovery: Discovery,
    pub overview: CatalogOverview,
}
