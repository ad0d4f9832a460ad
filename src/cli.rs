use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::analytics::{SearchMode, SortKey};
use crate::config::settings::DataSettings;

#[derive(Parser, Debug)]
#[command(author, version, about = "MovieLens recommendation dashboard")]
pub struct Cli {
    /// Directory holding ratings.csv and movies.csv (overrides DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Path to ratings.csv (overrides RATINGS_PATH)
    #[arg(long, global = true)]
    pub ratings: Option<PathBuf>,

    /// Path to movies.csv (overrides MOVIES_PATH)
    #[arg(long, global = true)]
    pub movies: Option<PathBuf>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Environment first, then command line flags
    pub fn data_settings(&self) -> DataSettings {
        let mut settings = match &self.data_dir {
            Some(dir) => DataSettings::in_dir(dir),
            None => DataSettings::from_env(),
        };
        if let Some(path) = &self.ratings {
            settings.ratings_path = path.clone();
        }
        if let Some(path) = &self.movies {
            settings.movies_path = path.clone();
        }
        settings
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Start the dashboard HTTP server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Recommend movies rated similarly to the given title
    Recommend {
        /// Exact title, e.g. "Toy Story (1995)"
        title: String,
        /// Number of recommendations
        #[arg(short = 'n', long)]
        top_n: Option<usize>,
        /// Minimum rating count for a recommended title
        #[arg(short, long)]
        min_ratings: Option<usize>,
        /// Minimum correlation (-1.0 to 1.0)
        #[arg(short, long, allow_hyphen_values = true)]
        threshold: Option<f64>,
    },
    /// Show rating statistics for one title
    Info {
        title: String,
    },
    /// Top-rated movies, optionally for one genre
    Top {
        #[arg(short, long)]
        genre: Option<String>,
        #[arg(short, long)]
        min_ratings: Option<usize>,
        /// "rating" or "count"
        #[arg(short, long)]
        sort_by: Option<SortKey>,
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Search titles or genres
    Search {
        query: String,
        /// "title" or "genre"
        #[arg(short, long, default_value = "title")]
        mode: SearchMode,
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Dataset-wide statistics and distributions
    Analytics,
    /// Viewing profile of one user
    User {
        user_id: u32,
    },
    /// A random handful of well-rated movies
    Discover {
        #[arg(short, long)]
        count: Option<usize>,
        #[arg(long)]
        min_rating: Option<f64>,
        #[arg(long)]
        min_reviews: Option<usize>,
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Predict a user's rating for a title
    Predict {
        user_id: u32,
        title: String,
        #[arg(short, long, default_value_t = 1.0)]
        genre_factor: f64,
    },
    /// List every genre in the dataset
    Genres,
    /// List the dashboard features
    Features,
    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recommend_with_negative_threshold() {
        let cli = Cli::parse_from([
            "movie_recommender",
            "recommend",
            "Heat (1995)",
            "-n",
            "5",
            "--threshold",
            "-0.5",
        ]);

        assert_eq!(
            cli.command,
            Command::Recommend {
                title: "Heat (1995)".to_string(),
                top_n: Some(5),
                min_ratings: None,
                threshold: Some(-0.5),
            }
        );
    }

    #[test]
    fn test_parse_top_sort_key() {
        let cli = Cli::parse_from([
            "movie_recommender",
            "top",
            "--sort-by",
            "count",
            "-g",
            "Drama",
        ]);

        match cli.command {
            Command::Top { genre, sort_by, .. } => {
                assert_eq!(genre.as_deref(), Some("Drama"));
                assert_eq!(sort_by, Some(SortKey::RatingCount));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_multi_word_flags_are_kebab_case() {
        let cli = Cli::parse_from([
            "movie_recommender",
            "recommend",
            "Heat (1995)",
            "--top-n",
            "3",
            "--min-ratings",
            "20",
        ]);
        assert_eq!(
            cli.command,
            Command::Recommend {
                title: "Heat (1995)".to_string(),
                top_n: Some(3),
                min_ratings: Some(20),
                threshold: None,
            }
        );

        let cli = Cli::parse_from([
            "movie_recommender",
            "discover",
            "--min-reviews",
            "10",
            "--min-rating",
            "3.5",
        ]);
        match cli.command {
            Command::Discover {
                min_reviews,
                min_rating,
                ..
            } => {
                assert_eq!(min_reviews, Some(10));
                assert_eq!(min_rating, Some(3.5));
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::parse_from([
            "movie_recommender",
            "predict",
            "4",
            "Heat (1995)",
            "--genre-factor",
            "1.2",
        ]);
        assert_eq!(
            cli.command,
            Command::Predict {
                user_id: 4,
                title: "Heat (1995)".to_string(),
                genre_factor: 1.2,
            }
        );
    }

    #[test]
    fn test_squashed_flags_are_rejected() {
        let result = Cli::try_parse_from(["movie_recommender", "top", "--sortby", "count"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_data_flags_override_paths() {
        let cli = Cli::parse_from([
            "movie_recommender",
            "--data-dir",
            "/srv/ml",
            "--movies",
            "/tmp/movies.csv",
            "genres",
        ]);

        let settings = cli.data_settings();
        assert_eq!(settings.ratings_path, PathBuf::from("/srv/ml/ratings.csv"));
        assert_eq!(settings.movies_path, PathBuf::from("/tmp/movies.csv"));
    }
}
