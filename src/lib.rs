pub mod analytics;
pub mod api;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod errors;
pub mod pagination;
pub mod services;
pub mod similarity;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::console::{render_features, ConsoleService};
use crate::services::server::ServerService;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_serve(port: u16, config: AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_query(command: &Command, config: AppConfig) -> Result<()> {
    let service = ConsoleService::load(config)?;
    service.run(command)
}

pub fn handle_features() -> Result<()> {
    println!("{}", render_features());
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
