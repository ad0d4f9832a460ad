use serde::Serialize;

use crate::config::settings::RecommendationSettings;

pub type Correlation = f64;

#[derive(Debug, Clone)]
pub struct RecommendationQuery {
    pub top_n: usize,
    pub min_ratings: usize,
    pub similarity_threshold: Correlation,
    pub min_overlap: usize,
}

impl From<&RecommendationSettings> for RecommendationQuery {
    fn from(settings: &RecommendationSettings) -> Self {
        Self {
            top_n: settings.top_n,
            min_ratings: settings.min_ratings,
            similarity_threshold: settings.similarity_threshold,
            min_overlap: settings.min_overlap,
        }
    }
}

/// A title whose rating column correlates with the target's
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: String,
    pub correlation: Correlation,
    pub rating_count: usize,
    pub avg_rating: f64,
    pub genres: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub target: String,
    /// Titles that passed the rating-count filter, before the similarity threshold
    pub candidates: usize,
    pub items: Vec<Recommendation>,
}

impl Recommendations {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Everything was cut by the similarity threshold alone
    pub fn below_threshold(&self) -> bool {
        self.items.is_empty() && self.candidates > 0
    }
}
