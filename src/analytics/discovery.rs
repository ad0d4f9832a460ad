use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::movie_info::popularity;
use crate::config::settings::DiscoverySettings;
use crate::dataset::Dataset;
use crate::domain::TitleStats;

/// Rating count at which a discovery pick counts as 100% popular
const FULL_POPULARITY_RATINGS: f64 = 500.0;

#[derive(Debug, Clone)]
pub struct DiscoveryQuery {
    pub count: usize,
    pub min_rating: f64,
    pub min_reviews: usize,
}

impl From<&DiscoverySettings> for DiscoveryQuery {
    fn from(settings: &DiscoverySettings) -> Self {
        Self {
            count: settings.count,
            min_rating: settings.min_rating,
            min_reviews: settings.min_reviews,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PickReason {
    Classic,   // avg >= 4.5
    Acclaimed, // avg >= 4.0
    QualityPick,
}

impl PickReason {
    pub fn from_avg(avg_rating: f64) -> Self {
        if avg_rating >= 4.5 {
            PickReason::Classic
        } else if avg_rating >= 4.0 {
            PickReason::Acclaimed
        } else {
            PickReason::QualityPick
        }
    }

    pub fn describe(&self) -> &str {
        match self {
            PickReason::Classic => "Highly rated classic, worth keeping",
            PickReason::Acclaimed => "Critically acclaimed and widely liked",
            PickReason::QualityPick => "Solid pick you should not miss",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PopularityTag {
    Trending,  // >= 70
    HiddenGem, // < 30
}

impl PopularityTag {
    pub fn from_popularity(popularity: f64) -> Option<Self> {
        if popularity >= 70.0 {
            Some(PopularityTag::Trending)
        } else if popularity < 30.0 {
            Some(PopularityTag::HiddenGem)
        } else {
            None
        }
    }
}

/// Badge on the rating count itself, independent of the popularity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CountBadge {
    Hot,   // > 200 ratings
    Niche, // < 100 ratings
}

impl CountBadge {
    pub fn from_count(rating_count: usize) -> Option<Self> {
        if rating_count > 200 {
            Some(CountBadge::Hot)
        } else if rating_count < 100 {
            Some(CountBadge::Niche)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryPick {
    pub title: String,
    pub genres: String,
    pub avg_rating: f64,
    pub rating_count: usize,
    pub popularity: f64,
    pub reason: PickReason,
    pub popularity_tag: Option<PopularityTag>,
    pub count_badge: Option<CountBadge>,
    /// Average minus the mean of all ratings
    pub delta_vs_mean: f64,
    /// avg_rating scaled to 0-100
    pub recommendation_index: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Discovery {
    pub eligible: usize,
    /// Fewer titles qualified than were asked for; all of them are returned
    pub shortfall: bool,
    pub picks: Vec<DiscoveryPick>,
}

pub fn discover<R: Rng + ?Sized>(
    dataset: &Dataset,
    query: &DiscoveryQuery,
    rng: &mut R,
) -> Discovery {
    let eligible: Vec<&TitleStats> = dataset
        .all_title_stats()
        .iter()
        .filter(|s| s.avg_rating >= query.min_rating && s.rating_count >= query.min_reviews)
        .collect();

    let shortfall = eligible.len() < query.count;
    let chosen: Vec<&TitleStats> = if shortfall {
        warn!(
            "Only {} titles qualify for discovery, {} requested",
            eligible.len(),
            query.count
        );
        eligible.clone()
    } else {
        eligible.choose_multiple(rng, query.count).copied().collect()
    };

    let global_mean = dataset.global_mean();
    let picks = chosen
        .into_iter()
        .map(|stats| to_pick(dataset, stats, global_mean))
        .collect();

    Discovery {
        eligible: eligible.len(),
        shortfall,
        picks,
    }
}

fn to_pick(dataset: &Dataset, stats: &TitleStats, global_mean: f64) -> DiscoveryPick {
    let popularity = popularity(stats.rating_count, FULL_POPULARITY_RATINGS);
    DiscoveryPick {
        title: stats.title.clone(),
        genres: dataset.genres_of(&stats.title).unwrap_or_default().to_string(),
        avg_rating: stats.avg_rating,
        rating_count: stats.rating_count,
        popularity,
        reason: PickReason::from_avg(stats.avg_rating),
        popularity_tag: PopularityTag::from_popularity(popularity),
        count_badge: CountBadge::from_count(stats.rating_count),
        delta_vs_mean: stats.avg_rating - global_mean,
        recommendation_index: stats.avg_rating * 20.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::store::fixtures::sample_dataset;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn query(count: usize, min_rating: f64, min_reviews: usize) -> DiscoveryQuery {
        DiscoveryQuery {
            count,
            min_rating,
            min_reviews,
        }
    }

    #[test]
    fn test_sample_is_unique_and_sized() {
        let dataset = sample_dataset();
        let mut rng = StdRng::seed_from_u64(7);

        let discovery = discover(&dataset, &query(3, 2.0, 1), &mut rng);

        assert!(!discovery.shortfall);
        assert_eq!(discovery.eligible, 5);
        assert_eq!(discovery.picks.len(), 3);
        let unique: HashSet<&str> = discovery.picks.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(unique.len(), 3);
        assert!(discovery.picks.iter().all(|p| p.avg_rating >= 2.0));
    }

    #[test]
    fn test_shortfall_returns_every_candidate() {
        let dataset = sample_dataset();
        let mut rng = StdRng::seed_from_u64(7);

        let discovery = discover(&dataset, &query(5, 3.5, 4), &mut rng);

        assert!(discovery.shortfall);
        let titles: Vec<&str> = discovery.picks.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Casino (1995)", "Heat (1995)", "Ronin (1998)"]);
    }

    #[test]
    fn test_same_seed_same_picks() {
        let dataset = sample_dataset();
        let q = query(2, 0.0, 1);

        let first = discover(&dataset, &q, &mut StdRng::seed_from_u64(42));
        let second = discover(&dataset, &q, &mut StdRng::seed_from_u64(42));

        let titles = |d: &Discovery| d.picks.iter().map(|p| p.title.clone()).collect::<Vec<_>>();
        assert_eq!(titles(&first), titles(&second));
    }

    #[test]
    fn test_pick_annotations() {
        let dataset = sample_dataset();
        let discovery = discover(&dataset, &query(10, 4.0, 1), &mut StdRng::seed_from_u64(1));

        let casino = &discovery.picks[0];
        assert_eq!(casino.title, "Casino (1995)");
        assert_eq!(casino.reason, PickReason::Acclaimed);
        assert_eq!(casino.popularity_tag, Some(PopularityTag::HiddenGem));
        assert_eq!(casino.count_badge, Some(CountBadge::Niche));
        assert_eq!(casino.recommendation_index, 80.0);
        assert!(casino.delta_vs_mean > 0.0);
    }

    #[test]
    fn test_count_badge_boundaries() {
        assert_eq!(CountBadge::from_count(201), Some(CountBadge::Hot));
        assert_eq!(CountBadge::from_count(200), None);
        assert_eq!(CountBadge::from_count(100), None);
        assert_eq!(CountBadge::from_count(99), Some(CountBadge::Niche));
    }
}
