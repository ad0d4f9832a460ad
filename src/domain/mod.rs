pub mod genres;
pub mod models;

pub use genres::{collect_genres, count_genres, display_genres, split_genres, ReleaseYearParser};
pub use models::{round2, JoinedRating, MovieId, MovieRecord, RatingRecord, TitleStats, UserId};
