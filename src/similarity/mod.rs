pub mod collaborative;
pub mod pearson;
pub mod prediction;
pub mod types;

pub use collaborative::{correlate_with, recommend};
pub use prediction::{predict_for, predict_rating, RatingPrediction};
pub use types::{Recommendation, RecommendationQuery, Recommendations};
