pub mod discovery;
pub mod leaderboard;
pub mod movie_info;
pub mod search;
pub mod summary;
pub mod user_profile;

pub use discovery::{discover, Discovery, DiscoveryQuery};
pub use leaderboard::{top_movies, LeaderboardQuery, SortKey};
pub use movie_info::{movie_info, MovieInfo};
pub use search::{search, SearchHit, SearchMode};
pub use summary::{
    catalog_overview, genre_distribution, popular_movies, rating_distribution, system_stats,
};
pub use user_profile::{user_profile, UserProfile};
