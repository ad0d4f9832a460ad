pub mod features;
pub mod settings;

pub use features::{find_feature, get_features, Feature, FeatureConfig};
pub use settings::AppConfig;
