use std::collections::{BTreeMap, HashMap};

use log::{info, warn};

use super::aggregates::{mean_rating, title_stats};
use super::matrix::RatingsMatrix;
use crate::domain::{
    collect_genres, JoinedRating, MovieId, MovieRecord, RatingRecord, TitleStats, UserId,
};

/// Joined ratings plus everything derived from them at load time.
/// Built once and shared read-only for the lifetime of the process.
pub struct Dataset {
    ratings: Vec<JoinedRating>,
    matrix: RatingsMatrix,
    stats: Vec<TitleStats>,
    stats_index: HashMap<String, usize>,
    genres_by_title: HashMap<String, String>,
    genre_list: Vec<String>,
    user_rows: BTreeMap<UserId, Vec<usize>>,
    global_mean: f64,
    dropped_ratings: usize,
}

impl Dataset {
    pub fn from_records(ratings: Vec<RatingRecord>, movies: Vec<MovieRecord>) -> Self {
        let movies_by_id: HashMap<MovieId, &MovieRecord> =
            movies.iter().map(|movie| (movie.movie_id, movie)).collect();
        let (joined, dropped_ratings) = inner_join(&ratings, &movies_by_id);

        if dropped_ratings > 0 {
            warn!("Dropped {} ratings referencing unknown movies", dropped_ratings);
        }
        info!(
            "  → Joined {} ratings against {} movies",
            joined.len(),
            movies_by_id.len()
        );

        Self::from_joined(joined, dropped_ratings)
    }

    fn from_joined(ratings: Vec<JoinedRating>, dropped_ratings: usize) -> Self {
        let matrix = RatingsMatrix::pivot(&ratings);
        info!(
            "  → Built ratings matrix: {} users × {} titles",
            matrix.n_users(),
            matrix.n_titles()
        );

        let stats = title_stats(&ratings);
        let stats_index = stats
            .iter()
            .enumerate()
            .map(|(idx, s)| (s.title.clone(), idx))
            .collect();

        let mut genres_by_title = HashMap::new();
        let mut user_rows: BTreeMap<UserId, Vec<usize>> = BTreeMap::new();
        for (idx, rating) in ratings.iter().enumerate() {
            genres_by_title
                .entry(rating.title.clone())
                .or_insert_with(|| rating.genres.clone());
            user_rows.entry(rating.user_id).or_default().push(idx);
        }

        let genre_list = collect_genres(ratings.iter().map(|r| r.genres.as_str()));
        let global_mean = mean_rating(&ratings).unwrap_or(0.0);

        Self {
            ratings,
            matrix,
            stats,
            stats_index,
            genres_by_title,
            genre_list,
            user_rows,
            global_mean,
            dropped_ratings,
        }
    }

    pub fn ratings(&self) -> &[JoinedRating] {
        &self.ratings
    }

    pub fn matrix(&self) -> &RatingsMatrix {
        &self.matrix
    }

    /// Per-title stats over every rating, in title order
    pub fn all_title_stats(&self) -> &[TitleStats] {
        &self.stats
    }

    pub fn title_stats(&self, title: &str) -> Option<&TitleStats> {
        self.stats_index.get(title).map(|&idx| &self.stats[idx])
    }

    /// Genre string of the first rating seen for `title`
    pub fn genres_of(&self, title: &str) -> Option<&str> {
        self.genres_by_title.get(title).map(String::as_str)
    }

    pub fn genre_list(&self) -> &[String] {
        &self.genre_list
    }

    pub fn user_ratings(&self, user_id: UserId) -> Vec<&JoinedRating> {
        self.user_rows
            .get(&user_id)
            .map(|rows| rows.iter().map(|&idx| &self.ratings[idx]).collect())
            .unwrap_or_default()
    }

    /// Ascending
    pub fn user_ids(&self) -> impl Iterator<Item = UserId> + '_ {
        self.user_rows.keys().copied()
    }

    pub fn max_user_id(&self) -> Option<UserId> {
        self.user_rows.keys().next_back().copied()
    }

    pub fn global_mean(&self) -> f64 {
        self.global_mean
    }

    pub fn dropped_ratings(&self) -> usize {
        self.dropped_ratings
    }
}

fn inner_join(
    ratings: &[RatingRecord],
    movies: &HashMap<MovieId, &MovieRecord>,
) -> (Vec<JoinedRating>, usize) {
    let mut joined = Vec::with_capacity(ratings.len());
    let mut dropped = 0;

    for rating in ratings {
        match movies.get(&rating.movie_id) {
            Some(movie) => joined.push(JoinedRating::join(rating, movie)),
            None => dropped += 1,
        }
    }

    (joined, dropped)
}
