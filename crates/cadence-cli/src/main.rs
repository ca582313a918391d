//! Cadence CLI Application
//!
//! Command-line interface for the Cadence fitness schedule store.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use cadence_core::CoachBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, command } = Args::parse();

    let coach = CoachBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize coach")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(coach, renderer);

    info!("Cadence started");

    match command {
        Schedule { command } => cli.handle_schedule_command(command).await,
        Plan { command } => cli.handle_plan_command(command).await,
        Feedback { command } => cli.handle_feedback_command(command).await,
        Profile { command } => cli.handle_profile_command(command).await,
        Stats(args) => cli.handle_stats(args).await,
    }
}
