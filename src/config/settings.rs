use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DataSettings {
    pub ratings_path: PathBuf,
    pub movies_path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self::in_dir("data")
    }
}

impl DataSettings {
    pub fn in_dir<P: Into<PathBuf>>(dir: P) -> Self {
        let dir = dir.into();
        Self {
            ratings_path: dir.join("ratings.csv"),
            movies_path: dir.join("movies.csv"),
        }
    }

    /// Defaults, then `DATA_DIR`, then the per-file `RATINGS_PATH` / `MOVIES_PATH`.
    pub fn from_env() -> Self {
        let mut settings = std::env::var("DATA_DIR")
            .map(Self::in_dir)
            .unwrap_or_default();

        if let Ok(path) = std::env::var("RATINGS_PATH") {
            settings.ratings_path = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("MOVIES_PATH") {
            settings.movies_path = PathBuf::from(path);
        }
        settings
    }
}

#[derive(Debug, Clone)]
pub struct RecommendationSettings {
    pub top_n: usize,
    pub min_ratings: usize,
    pub similarity_threshold: f64,
    pub min_overlap: usize,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            top_n: 10,
            min_ratings: 100,
            similarity_threshold: 0.1,
            min_overlap: 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LeaderboardSettings {
    pub min_ratings: usize,
    pub limit: usize,
}

impl Default for LeaderboardSettings {
    fn default() -> Self {
        Self {
            min_ratings: 50,
            limit: 20,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DiscoverySettings {
    pub count: usize,
    pub min_rating: f64,
    pub min_reviews: usize,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            count: 5,
            min_rating: 4.0,
            min_reviews: 50,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub page_size: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}

#[derive(Debug, Clone)]
pub struct AnalyticsSettings {
    pub popular_min_ratings: usize,
    pub popular_limit: usize,
    pub top_genres: usize,
    pub high_rating_cutoff: f64,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            popular_min_ratings: 100,
            popular_limit: 20,
            top_genres: 10,
            high_rating_cutoff: 4.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserSettings {
    pub favorite_genres: usize,
    pub high_rated_limit: usize,
    pub high_rating_cutoff: f64,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            favorite_genres: 5,
            high_rated_limit: 10,
            high_rating_cutoff: 4.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data: DataSettings,
    pub recommendation: RecommendationSettings,
    pub leaderboard: LeaderboardSettings,
    pub discovery: DiscoverySettings,
    pub search: SearchSettings,
    pub analytics: AnalyticsSettings,
    pub user: UserSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            data: DataSettings::from_env(),
            recommendation: RecommendationSettings::default(),
            leaderboard: LeaderboardSettings::default(),
            discovery: DiscoverySettings::default(),
            search: SearchSettings::default(),
            analytics: AnalyticsSettings::default(),
            user: UserSettings::default(),
        }
    }

    pub fn with_data(mut self, data: DataSettings) -> Self {
        self.data = data;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_dir_points_at_both_files() {
        let data = DataSettings::in_dir("/srv/ml-latest-small");
        assert_eq!(data.ratings_path, PathBuf::from("/srv/ml-latest-small/ratings.csv"));
        assert_eq!(data.movies_path, PathBuf::from("/srv/ml-latest-small/movies.csv"));
    }

    #[test]
    fn test_defaults_match_dashboard_controls() {
        let recommendation = RecommendationSettings::default();
        assert_eq!(recommendation.top_n, 10);
        assert_eq!(recommendation.min_ratings, 100);
        assert!((recommendation.similarity_threshold - 0.1).abs() < f64::EPSILON);

        let discovery = DiscoverySettings::default();
        assert_eq!(discovery.count, 5);
        assert_eq!(discovery.min_reviews, 50);
    }
}
