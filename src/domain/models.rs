use serde::{Deserialize, Serialize};

pub type UserId = u32;
pub type MovieId = u32;

// --- CSV Row Structures ---

/// One row of `ratings.csv`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RatingRecord {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(rename = "movieId")]
    pub movie_id: MovieId,
    pub rating: f64,
    pub timestamp: i64,
}

/// One row of `movies.csv`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MovieRecord {
    #[serde(rename = "movieId")]
    pub movie_id: MovieId,
    pub title: String,
    /// Pipe-delimited, e.g. `Adventure|Animation|Children`
    pub genres: String,
}

// --- Derived Structures ---

/// A rating joined with its movie's metadata
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRating {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub title: String,
    pub genres: String,
    pub rating: f64,
    pub timestamp: i64,
}

impl JoinedRating {
    pub fn join(rating: &RatingRecord, movie: &MovieRecord) -> Self {
        Self {
            user_id: rating.user_id,
            movie_id: rating.movie_id,
            title: movie.title.clone(),
            genres: movie.genres.clone(),
            rating: rating.rating,
            timestamp: rating.timestamp,
        }
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        super::genres::split_genres(&self.genres).contains(&genre)
    }
}

/// Rating count and mean rating for one title
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleStats {
    pub title: String,
    pub rating_count: usize,
    /// Rounded to 2 decimals
    pub avg_rating: f64,
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
