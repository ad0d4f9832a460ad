use serde::Serialize;

/// The dashboard's tabs. Exactly one is selected at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    #[default]
    Recommend,
    Leaderboard,
    Search,
    Analytics,
    UserProfile,
    Discover,
}

/// Navigation entry for a dashboard feature
#[derive(Debug, Clone, Serialize)]
pub struct FeatureConfig {
    pub feature: Feature,
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl FeatureConfig {
    pub fn new(
        feature: Feature,
        slug: &'static str,
        title: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            feature,
            slug,
            title,
            description,
        }
    }
}

/// Get the navigation entries in display order
pub fn get_features() -> Vec<FeatureConfig> {
    vec![
        FeatureConfig::new(
            Feature::Recommend,
            "recommend",
            "Personalized Recommendations",
            "Movies rated like the one you pick",
        ),
        FeatureConfig::new(
            Feature::Leaderboard,
            "top",
            "Top Movies",
            "Best-rated titles, optionally per genre",
        ),
        FeatureConfig::new(
            Feature::Search,
            "search",
            "Movie Search",
            "Find titles by name or genre",
        ),
        FeatureConfig::new(
            Feature::Analytics,
            "analytics",
            "Data Analytics",
            "Rating and genre distributions",
        ),
        FeatureConfig::new(
            Feature::UserProfile,
            "user",
            "User Profile",
            "One user's viewing habits",
        ),
        FeatureConfig::new(
            Feature::Discover,
            "discover",
            "Random Discovery",
            "A random handful of well-rated movies",
        ),
    ]
}

pub fn find_feature(slug: &str) -> Option<FeatureConfig> {
    get_features().into_iter().find(|f| f.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_first_tab() {
        let features = get_features();
        assert_eq!(features.len(), 6);
        assert_eq!(features[0].feature, Feature::default());
    }

    #[test]
    fn test_find_feature_by_slug() {
        assert_eq!(find_feature("user").map(|f| f.feature), Some(Feature::UserProfile));
        assert!(find_feature("settings").is_none());
    }
}
