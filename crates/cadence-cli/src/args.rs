use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    FeedbackCommands, PlanCommands, ProfileCommands, ScheduleCommands, StatsArgs,
};

/// Main command-line interface for the Cadence schedule manager
///
/// Cadence stores weekly workout schedules generated by an external
/// planning pipeline, together with the macro plans, user profiles, and
/// feedback that surround them. It provides a command-line interface for
/// importing, inspecting, and activating schedule documents.
#[derive(Parser)]
#[command(version, about, name = "cadence")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/cadence/cadence.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Cadence CLI
///
/// The CLI is organized into five command categories:
/// - `schedule`: Operations on weekly schedule documents (import, list, activate, etc.)
/// - `plan`: Operations on macro plans
/// - `feedback`: Recording and listing user feedback
/// - `profile`: Saving and showing user profiles
/// - `stats`: Per-user storage statistics
#[derive(Subcommand)]
pub enum Commands {
    /// Manage weekly schedules
    #[command(alias = "s")]
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },
    /// Manage macro plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Record and list feedback
    #[command(alias = "f")]
    Feedback {
        #[command(subcommand)]
        command: FeedbackCommands,
    },
    /// Manage user profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Show storage statistics for a user
    Stats(StatsArgs),
}
