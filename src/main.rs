//! Idea Planner CLI Entry Point

mod cli;
mod commands;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use idea_planner_lib::{AppState, IdeaFilter, PlannerConfig};
use rolling_logger::LoggerConfig;
use std::process::ExitCode;

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = rolling_logger::error(&format!("{:#}", e));
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = PlannerConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    init_logging(&config);

    let filter = IdeaFilter::new(&cli.search, cli.category.as_deref());
    let mut state = AppState::open(config).await;

    let output = commands::execute(&mut state, cli.command, &filter).await?;
    println!("{}", output);
    Ok(())
}

/// File logging is best effort; the CLI keeps working without it
fn init_logging(config: &PlannerConfig) {
    let level = config.log_level.parse::<log::LevelFilter>().unwrap_or(log::LevelFilter::Info);
    let logger_config = LoggerConfig {
        level,
        max_bytes: config.log_max_bytes,
        max_files: config.log_max_files,
        ..LoggerConfig::default()
    };

    if let Err(e) = rolling_logger::init_logger_with(config.log_dir(), "idea-planner", logger_config) {
        eprintln!("warning: file logging disabled: {}", e);
    }
}
