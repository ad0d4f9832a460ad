pub mod aggregates;
pub mod loader;
pub mod matrix;
pub mod store;

pub use loader::{load_movies, load_ratings};
pub use matrix::RatingsMatrix;
pub use store::Dataset;
