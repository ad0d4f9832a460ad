use chrono::{DateTime, Utc};
use serde::Serialize;

use super::summary::GenreShare;
use crate::config::settings::UserSettings;
use crate::dataset::aggregates::mean_rating;
use crate::dataset::Dataset;
use crate::domain::{count_genres, round2, UserId};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRatedMovie {
    pub title: String,
    pub rating: f64,
    pub genres: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: UserId,
    pub total_rated: usize,
    pub avg_rating: f64,
    pub favorite_genres: Vec<GenreShare>,
    pub first_rated_at: Option<DateTime<Utc>>,
    pub last_rated_at: Option<DateTime<Utc>>,
    pub high_rated: Vec<UserRatedMovie>,
}

impl UserProfile {
    pub fn favorite_genre(&self) -> Option<&str> {
        self.favorite_genres.first().map(|g| g.genre.as_str())
    }
}

/// `None` when the user has not rated anything
pub fn user_profile(
    dataset: &Dataset,
    user_id: UserId,
    settings: &UserSettings,
) -> Option<UserProfile> {
    let ratings = dataset.user_ratings(user_id);
    let avg_rating = round2(mean_rating(ratings.iter().copied())?);

    let favorite_genres = count_genres(ratings.iter().map(|r| r.genres.as_str()))
        .into_iter()
        .take(settings.favorite_genres)
        .map(|(genre, count)| GenreShare { genre, count })
        .collect();

    let first_rated_at = ratings
        .iter()
        .map(|r| r.timestamp)
        .min()
        .and_then(to_datetime);
    let last_rated_at = ratings
        .iter()
        .map(|r| r.timestamp)
        .max()
        .and_then(to_datetime);

    let mut high_rated: Vec<UserRatedMovie> = ratings
        .iter()
        .filter(|r| r.rating >= settings.high_rating_cutoff)
        .map(|r| UserRatedMovie {
            title: r.title.clone(),
            rating: r.rating,
            genres: r.genres.clone(),
        })
        .collect();
    high_rated.sort_by(|a, b| b.rating.total_cmp(&a.rating).then_with(|| a.title.cmp(&b.title)));
    high_rated.truncate(settings.high_rated_limit);

    Some(UserProfile {
        user_id,
        total_rated: ratings.len(),
        avg_rating,
        favorite_genres,
        first_rated_at,
        last_rated_at,
        high_rated,
    })
}

fn to_datetime(timestamp: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::store::fixtures::sample_dataset;

    #[test]
    fn test_profile_for_known_user() {
        let dataset = sample_dataset();
        let profile = user_profile(&dataset, 1, &UserSettings::default()).unwrap();

        assert_eq!(profile.total_rated, 4);
        // 5.0 + 4.5 + 1.0 + 4.0
        assert_eq!(profile.avg_rating, 3.63);
        assert_eq!(profile.favorite_genre(), Some("Crime"));
        assert_eq!(profile.favorite_genres[0].count, 3);
        assert!(profile.first_rated_at <= profile.last_rated_at);
    }

    #[test]
    fn test_high_rated_sorted_and_cut_off() {
        let dataset = sample_dataset();
        let profile = user_profile(&dataset, 1, &UserSettings::default()).unwrap();

        let titles: Vec<(&str, f64)> = profile
            .high_rated
            .iter()
            .map(|m| (m.title.as_str(), m.rating))
            .collect();
        assert_eq!(
            titles,
            vec![("Heat (1995)", 5.0), ("Ronin (1998)", 4.5), ("Casino (1995)", 4.0)]
        );
    }

    #[test]
    fn test_favorite_genres_limited() {
        let dataset = sample_dataset();
        let settings = UserSettings {
            favorite_genres: 2,
            ..UserSettings::default()
        };
        let profile = user_profile(&dataset, 1, &settings).unwrap();
        assert_eq!(profile.favorite_genres.len(), 2);
    }

    #[test]
    fn test_unknown_user_has_no_profile() {
        let dataset = sample_dataset();
        assert!(user_profile(&dataset, 404, &UserSettings::default()).is_none());
    }
}
