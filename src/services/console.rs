use anyhow::Result;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::analytics::discovery::{CountBadge, PickReason, PopularityTag};
use crate::analytics::movie_info::PopularityLevel;
use crate::analytics::search::{search_titles, to_hit};
use crate::analytics::{self, DiscoveryQuery, LeaderboardQuery, SearchMode, SortKey};
use crate::cli::Command;
use crate::config::get_features;
use crate::config::settings::AppConfig;
use crate::dataset::Dataset;
use crate::domain::{display_genres, ReleaseYearParser, UserId};
use crate::errors::{find_dashboard_error, DashboardError};
use crate::pagination::paginate;
use crate::services::ingestion::IngestionService;
use crate::similarity::{self, RecommendationQuery};

const BAR_WIDTH: usize = 30;
const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];
const MAX_SUGGESTIONS: usize = 5;

/// Renders dashboard features to the terminal
pub struct ConsoleService {
    dataset: Dataset,
    config: AppConfig,
    years: ReleaseYearParser,
}

impl ConsoleService {
    pub fn load(config: AppConfig) -> Result<Self> {
        let dataset = IngestionService::new(config.data.clone()).run()?;
        Self::with_dataset(dataset, config)
    }

    pub fn with_dataset(dataset: Dataset, config: AppConfig) -> Result<Self> {
        Ok(Self {
            dataset,
            config,
            years: ReleaseYearParser::new()?,
        })
    }

    /// Print the command's output. Lookup misses become warnings, anything else is an error.
    pub fn run(&self, command: &Command) -> Result<()> {
        match self.render(command) {
            Ok(text) => {
                println!("{}", text);
                Ok(())
            }
            Err(e) => match find_dashboard_error(&e) {
                Some(err) if err.is_not_found() => {
                    println!("{}", self.not_found_message(err));
                    Ok(())
                }
                _ => Err(e),
            },
        }
    }

    /// Warning for a lookup miss, with the closest titles or the valid user id range
    pub fn not_found_message(&self, err: &DashboardError) -> String {
        let mut lines = vec![warning(&err.to_string())];
        match err {
            DashboardError::MovieNotFound(title) => {
                let matches = search_titles(&self.dataset, title.trim());
                if !matches.is_empty() {
                    lines.push("Did you mean:".to_string());
                    lines.extend(
                        matches
                            .iter()
                            .take(MAX_SUGGESTIONS)
                            .map(|m| format!("  {} {}", "•".green(), m)),
                    );
                }
            }
            DashboardError::UserNotFound(_) => {
                let first = self.dataset.user_ids().next();
                if let (Some(first), Some(last)) = (first, self.dataset.max_user_id()) {
                    lines.push(format!("Rated users have ids {} to {}", first, last));
                }
            }
            _ => {}
        }
        lines.join("\n")
    }

    pub fn render(&self, command: &Command) -> Result<String> {
        match command {
            Command::Recommend {
                title,
                top_n,
                min_ratings,
                threshold,
            } => {
                let mut query = RecommendationQuery::from(&self.config.recommendation);
                if let Some(top_n) = top_n {
                    query.top_n = *top_n;
                }
                if let Some(min_ratings) = min_ratings {
                    query.min_ratings = *min_ratings;
                }
                if let Some(threshold) = threshold {
                    query.similarity_threshold = *threshold;
                }
                self.recommend(title, &query)
            }
            Command::Info { title } => self.info(title),
            Command::Top {
                genre,
                min_ratings,
                sort_by,
                limit,
            } => {
                let mut query = LeaderboardQuery::from(&self.config.leaderboard);
                query.genre = genre.clone().filter(|g| !g.is_empty() && g != "all");
                query.sort_by = sort_by.unwrap_or_default();
                if let Some(min_ratings) = min_ratings {
                    query.min_ratings = *min_ratings;
                }
                if let Some(limit) = limit {
                    query.limit = *limit;
                }
                Ok(self.top(&query))
            }
            Command::Search { query, mode, page } => self.search(query, *mode, *page),
            Command::Analytics => Ok(self.analytics()),
            Command::User { user_id } => self.user(*user_id),
            Command::Discover {
                count,
                min_rating,
                min_reviews,
                seed,
            } => {
                let mut query = DiscoveryQuery::from(&self.config.discovery);
                if let Some(count) = count {
                    if *count == 0 {
                        return Err(DashboardError::InvalidParameter(
                            "count must be at least 1".to_string(),
                        )
                        .into());
                    }
                    query.count = *count;
                }
                if let Some(min_rating) = min_rating {
                    query.min_rating = *min_rating;
                }
                if let Some(min_reviews) = min_reviews {
                    query.min_reviews = *min_reviews;
                }
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(*seed),
                    None => StdRng::from_entropy(),
                };
                Ok(self.discover(&query, &mut rng))
            }
            Command::Predict {
                user_id,
                title,
                genre_factor,
            } => self.predict(*user_id, title, *genre_factor),
            Command::Genres => Ok(self.genres()),
            Command::Features => Ok(render_features()),
            Command::Serve { .. } | Command::Completions { .. } => Err(
                DashboardError::InvalidParameter("not a dashboard query".to_string()).into(),
            ),
        }
    }

    fn recommend(&self, title: &str, query: &RecommendationQuery) -> Result<String> {
        // Header first so an unknown title fails before any correlation work
        let mut lines = vec![self.info(title)?, String::new()];
        let recommendations = similarity::recommend(&self.dataset, title, query)?;

        if recommendations.below_threshold() {
            lines.push(warning(&format!(
                "No recommendations above similarity {:.2}; try lowering the threshold",
                query.similarity_threshold
            )));
            return Ok(lines.join("\n"));
        }
        if recommendations.is_empty() {
            lines.push(warning(&format!(
                "No titles with at least {} ratings share raters with '{}'",
                query.min_ratings, title
            )));
            return Ok(lines.join("\n"));
        }

        lines.push(format!("Because you liked {}:", title).bold().blue().to_string());
        for (i, rec) in recommendations.items.iter().enumerate() {
            lines.push(format!("{:>3}. {}", i + 1, rec.title.bold()));
            lines.push(format!(
                "     {} similarity {:.1}%  avg {:.2} ⭐  {} ratings  {}",
                "•".green(),
                rec.correlation * 100.0,
                rec.avg_rating,
                rec.rating_count,
                display_genres(&rec.genres)
            ));
        }
        Ok(lines.join("\n"))
    }

    fn info(&self, title: &str) -> Result<String> {
        let info = analytics::movie_info(&self.dataset, title, &self.years)?;

        let mut lines = vec![info.title.bold().blue().to_string()];
        if let Some(year) = info.release_year {
            lines.push(format!("{} Released: {}", "•".green(), year));
        }
        lines.push(format!("{} Genres: {}", "•".green(), display_genres(&info.genres)));
        lines.push(format!(
            "{} Average rating: {:.2} {}",
            "•".green(),
            info.avg_rating,
            "⭐".repeat(info.stars as usize)
        ));
        lines.push(format!("{} Ratings: {}", "•".green(), info.rating_count));
        lines.push(format!(
            "{} Popularity: {:.0}% ({})",
            "•".cyan(),
            info.popularity_score,
            popularity_label(info.popularity_level)
        ));
        lines.push(format!("{} Quality: {:.0}%", "•".cyan(), info.quality_score));
        Ok(lines.join("\n"))
    }

    fn top(&self, query: &LeaderboardQuery) -> String {
        let top = analytics::top_movies(&self.dataset, query);
        let scope = query.genre.as_deref().unwrap_or("all genres");
        if top.is_empty() {
            return warning(&format!(
                "No movies in {} with at least {} ratings",
                scope, query.min_ratings
            ));
        }

        let sorted_by = match query.sort_by {
            SortKey::AvgRating => "average rating",
            SortKey::RatingCount => "rating count",
        };
        let mut lines = vec![format!("Top movies in {} by {}", scope, sorted_by)
            .bold()
            .blue()
            .to_string()];
        let podium = top.len() >= MEDALS.len();
        for (i, stats) in top.iter().enumerate() {
            let rank = match MEDALS.get(i) {
                Some(medal) if podium => medal.to_string(),
                _ => format!("#{}", i + 1),
            };
            lines.push(format!(
                "{:>4} {}  avg {:.2}  {} ratings",
                rank,
                stats.title.bold(),
                stats.avg_rating,
                stats.rating_count
            ));
        }
        lines.join("\n")
    }

    fn search(&self, term: &str, mode: SearchMode, page: usize) -> Result<String> {
        let term = term.trim();
        if term.is_empty() {
            return Err(
                DashboardError::InvalidParameter("search term is empty".to_string()).into(),
            );
        }
        let matches = analytics::search(&self.dataset, term, mode);
        if matches.is_empty() {
            return Ok(warning(&format!("No movies match '{}'", term)));
        }

        let page = paginate(&matches, page, self.config.search.page_size)
            .map(|title| to_hit(&self.dataset, title));
        let mut lines = vec![format!(
            "Found {} movies matching '{}' (page {} of {})",
            page.total, term, page.page, page.total_pages
        )
        .bold()
        .blue()
        .to_string()];
        for hit in &page.items {
            lines.push(format!(
                "{} {}  avg {:.2}  {} ratings  {}",
                "•".green(),
                hit.title,
                hit.avg_rating,
                hit.rating_count,
                display_genres(&hit.genres)
            ));
        }
        Ok(lines.join("\n"))
    }

    fn analytics(&self) -> String {
        let settings = &self.config.analytics;
        let stats = analytics::system_stats(&self.dataset);

        let mut lines = vec!["Dataset".bold().blue().to_string()];
        lines.push(format!("{} Movies: {}", "•".green(), stats.movies));
        match self.dataset.max_user_id() {
            Some(max_id) => lines.push(format!(
                "{} Users: {} (ids up to {})",
                "•".green(),
                stats.users,
                max_id
            )),
            None => lines.push(format!("{} Users: {}", "•".green(), stats.users)),
        }
        lines.push(format!("{} Ratings: {}", "•".green(), stats.ratings));
        lines.push(format!("{} Mean rating: {:.2}", "•".green(), stats.mean_rating));
        if self.dataset.dropped_ratings() > 0 {
            lines.push(warning(&format!(
                "{} ratings reference unknown movies and were ignored",
                self.dataset.dropped_ratings()
            )));
        }

        let distribution = analytics::rating_distribution(&self.dataset);
        let max = distribution.iter().map(|b| b.count).max().unwrap_or(0);
        lines.push(String::new());
        lines.push("Rating distribution".bold().blue().to_string());
        for bucket in &distribution {
            lines.push(format!(
                "{:>4.1} {} {}",
                bucket.rating,
                bar(bucket.count, max).cyan(),
                bucket.count
            ));
        }

        let genres = analytics::genre_distribution(&self.dataset, settings.top_genres);
        let max = genres.iter().map(|g| g.count).max().unwrap_or(0);
        lines.push(String::new());
        lines.push("Genres".bold().blue().to_string());
        for share in &genres {
            lines.push(format!(
                "{:<12} {} {}",
                share.genre,
                bar(share.count, max).green(),
                share.count
            ));
        }

        let popular = analytics::popular_movies(
            &self.dataset,
            settings.popular_min_ratings,
            settings.popular_limit,
        );
        lines.push(String::new());
        lines.push(
            format!("Most rated (at least {} ratings)", settings.popular_min_ratings)
                .bold()
                .blue()
                .to_string(),
        );
        if popular.is_empty() {
            lines.push(warning("No movie reaches that many ratings"));
        }
        for stats in &popular {
            lines.push(format!(
                "{} {}  {} ratings  avg {:.2}",
                "•".green(),
                stats.title,
                stats.rating_count,
                stats.avg_rating
            ));
        }
        lines.join("\n")
    }

    fn user(&self, user_id: UserId) -> Result<String> {
        let profile = analytics::user_profile(&self.dataset, user_id, &self.config.user)
            .ok_or(DashboardError::UserNotFound(user_id))?;

        let mut lines = vec![format!("User {}", profile.user_id).bold().blue().to_string()];
        lines.push(format!("{} Movies rated: {}", "•".green(), profile.total_rated));
        lines.push(format!("{} Average rating: {:.2}", "•".green(), profile.avg_rating));
        if let Some(genre) = profile.favorite_genre() {
            lines.push(format!("{} Favorite genre: {}", "•".green(), genre));
        }
        if let (Some(first), Some(last)) = (profile.first_rated_at, profile.last_rated_at) {
            lines.push(format!(
                "{} Active: {} to {}",
                "•".cyan(),
                first.format("%Y-%m-%d"),
                last.format("%Y-%m-%d")
            ));
        }

        lines.push("Genres watched:".to_string());
        for share in &profile.favorite_genres {
            lines.push(format!("  - {}: {}", share.genre, share.count));
        }

        if profile.high_rated.is_empty() {
            lines.push(warning("No highly rated movies yet"));
        } else {
            lines.push("Highly rated:".to_string());
            for movie in &profile.high_rated {
                lines.push(format!("  - {} ({:.1})", movie.title, movie.rating));
            }
        }
        Ok(lines.join("\n"))
    }

    fn discover(&self, query: &DiscoveryQuery, rng: &mut StdRng) -> String {
        let overview =
            analytics::catalog_overview(&self.dataset, self.config.analytics.high_rating_cutoff);
        let discovery = analytics::discover(&self.dataset, query, rng);

        let mut lines = vec![format!(
            "{} titles, {} rated {:.1}+, mean rating {:.2}",
            overview.total_titles,
            overview.high_rated_titles,
            self.config.analytics.high_rating_cutoff,
            overview.mean_rating
        )];
        if discovery.eligible == 0 {
            lines.push(warning(&format!(
                "No movies rated {:.1}+ with at least {} reviews",
                query.min_rating, query.min_reviews
            )));
            return lines.join("\n");
        }
        if discovery.shortfall {
            lines.push(warning(&format!(
                "Only {} movies qualify; showing all of them",
                discovery.eligible
            )));
        }

        lines.push("Discover something new".bold().blue().to_string());
        for pick in &discovery.picks {
            let tag = match pick.popularity_tag {
                Some(PopularityTag::Trending) => " 🔥 trending",
                Some(PopularityTag::HiddenGem) => " 💎 hidden gem",
                None => "",
            };
            let badge = match pick.count_badge {
                Some(CountBadge::Hot) => " (hot)",
                Some(CountBadge::Niche) => " (niche)",
                None => "",
            };
            lines.push(format!("{} {}{}", "•".green(), pick.title.bold(), tag));
            lines.push(format!(
                "    {}  avg {:.2} ({:+.2} vs mean)  {} ratings{}  index {:.0}",
                reason_label(pick.reason),
                pick.avg_rating,
                pick.delta_vs_mean,
                pick.rating_count,
                badge,
                pick.recommendation_index
            ));
            lines.push(format!("    {}", display_genres(&pick.genres)));
        }
        lines.join("\n")
    }

    fn predict(&self, user_id: UserId, title: &str, genre_factor: f64) -> Result<String> {
        let prediction = similarity::predict_for(&self.dataset, user_id, title, genre_factor)?;
        Ok([
            format!("User {} would rate {}", prediction.user_id, prediction.title)
                .bold()
                .blue()
                .to_string(),
            format!("{} Predicted: {:.2}", "•".green(), prediction.predicted),
            format!("{} User average: {:.2}", "•".cyan(), prediction.user_avg),
            format!("{} Movie average: {:.2}", "•".cyan(), prediction.movie_avg),
            format!("{} Genre factor: {:.2}", "•".cyan(), prediction.genre_factor),
        ]
        .join("\n"))
    }

    fn genres(&self) -> String {
        let genres = self.dataset.genre_list();
        let mut lines = vec![format!("{} genres", genres.len()).bold().blue().to_string()];
        lines.extend(genres.iter().map(|g| format!("{} {}", "•".green(), g)));
        lines.join("\n")
    }
}

pub fn render_features() -> String {
    get_features()
        .iter()
        .map(|f| format!("{:<10} {}  {}", f.slug.bold(), f.title, f.description.dimmed()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn warning(message: &str) -> String {
    format!("⚠ {}", message).yellow().to_string()
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let width = (count * BAR_WIDTH).div_ceil(max);
    "█".repeat(width)
}

fn popularity_label(level: PopularityLevel) -> String {
    let icon = match level {
        PopularityLevel::Blockbuster => "🔥",
        PopularityLevel::Popular => "⭐",
        PopularityLevel::Average => "👍",
        PopularityLevel::Niche => "💎",
    };
    format!("{} {}", icon, level.as_str())
}

fn reason_label(reason: PickReason) -> String {
    match reason {
        PickReason::Classic => format!("🏆 {}", reason.describe()),
        PickReason::Acclaimed => format!("⭐ {}", reason.describe()),
        PickReason::QualityPick => format!("👍 {}", reason.describe()),
    }
}
