use anyhow::Result;

use movie_recommender::cli::{Cli, Command};
use movie_recommender::config::settings::AppConfig;
use movie_recommender::{
    handle_completions, handle_features, handle_query, handle_serve, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = AppConfig::new().with_data(cli.data_settings());
    match &cli.command {
        Command::Serve { port } => handle_serve(*port, config),
        Command::Features => handle_features(),
        Command::Completions { shell } => handle_completions(*shell),
        query => handle_query(query, config),
    }
}
