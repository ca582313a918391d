//! Command-line interface definitions using clap
//!
//! This module defines the subcommand argument structures using clap's
//! derive API, implementing the parameter wrapper pattern for clean
//! separation between CLI framework concerns and core domain logic:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```
//!
//! Each command defines a CLI-specific argument structure with clap derives
//! and a `From` conversion into the framework-free core parameter type.
//! This keeps help text, aliases, and argument validation in the CLI layer
//! while the core types remain interface-agnostic, and makes the parameter
//! mapping verifiable at compile time.
//!
//! The [`Cli`] handler struct dispatches parsed commands against the
//! [`Coach`] and renders the display wrappers the handlers return.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use cadence_core::{params::*, Coach, OperationStatus};
use clap::Args;

use crate::renderer::TerminalRenderer;

/// Import a schedule document from a file
///
/// The file must contain a generated weekly schedule as JSON. The document
/// is validated against the schedule schema before anything is stored;
/// malformed documents are rejected with the offending field named.
#[derive(Args)]
pub struct ImportScheduleArgs {
    /// Identifier of the user the schedule belongs to
    pub user_id: String,
    /// Path to the schedule document (JSON)
    pub file: PathBuf,
}

/// List a user's schedules
#[derive(Args)]
pub struct ListSchedulesArgs {
    /// Identifier of the user
    pub user_id: String,
    /// Maximum number of schedules to show, newest first
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl From<ListSchedulesArgs> for ListSchedules {
    fn from(val: ListSchedulesArgs) -> Self {
        ListSchedules {
            user_id: val.user_id,
            limit: val.limit,
        }
    }
}

/// Show a specific schedule with its full week layout
#[derive(Args)]
pub struct ShowScheduleArgs {
    /// Identifier of the user
    pub user_id: String,
    /// Cycle identifier of the schedule (e.g. week_20250605_165340)
    pub schedule_id: String,
    /// Print the stored document as indented JSON instead of the week view
    #[arg(long)]
    pub json: bool,
}

impl From<ShowScheduleArgs> for ScheduleKey {
    fn from(val: ShowScheduleArgs) -> Self {
        ScheduleKey {
            user_id: val.user_id,
            schedule_id: val.schedule_id,
        }
    }
}

/// Show the user's active schedule
///
/// Falls back to the most recently created schedule when none has been
/// explicitly activated.
#[derive(Args)]
pub struct ActiveScheduleArgs {
    /// Identifier of the user
    pub user_id: String,
}

impl From<ActiveScheduleArgs> for UserId {
    fn from(val: ActiveScheduleArgs) -> Self {
        UserId {
            user_id: val.user_id,
        }
    }
}

/// Activate a schedule
///
/// Marks the named schedule as the user's active one; every other
/// schedule of the user is demoted to inactive.
#[derive(Args)]
pub struct ActivateScheduleArgs {
    /// Identifier of the user
    pub user_id: String,
    /// Cycle identifier of the schedule to activate
    pub schedule_id: String,
}

impl From<ActivateScheduleArgs> for ScheduleKey {
    fn from(val: ActivateScheduleArgs) -> Self {
        ScheduleKey {
            user_id: val.user_id,
            schedule_id: val.schedule_id,
        }
    }
}

/// Delete a schedule permanently
#[derive(Args)]
pub struct DeleteScheduleArgs {
    /// Identifier of the user
    pub user_id: String,
    /// Cycle identifier of the schedule to delete
    pub schedule_id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteScheduleArgs> for DeleteSchedule {
    fn from(val: DeleteScheduleArgs) -> Self {
        DeleteSchedule {
            user_id: val.user_id,
            schedule_id: val.schedule_id,
            confirmed: val.confirm,
        }
    }
}

#[derive(clap::Subcommand)]
pub enum ScheduleCommands {
    /// Import a schedule document from a file
    #[command(alias = "i")]
    Import(ImportScheduleArgs),
    /// List a user's schedules
    #[command(aliases = ["l", "ls"])]
    List(ListSchedulesArgs),
    /// Show a specific schedule
    #[command(alias = "s")]
    Show(ShowScheduleArgs),
    /// Show the user's active schedule
    Active(ActiveScheduleArgs),
    /// Activate a schedule
    #[command(alias = "a")]
    Activate(ActivateScheduleArgs),
    /// Delete a schedule permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteScheduleArgs),
}

/// Save a new macro plan
///
/// The new plan becomes the user's active one; previous plans are
/// deactivated. Subsequently imported schedules reference the active plan.
#[derive(Args)]
pub struct SavePlanArgs {
    /// Identifier of the user the plan belongs to
    pub user_id: String,
    /// The plan text
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,
    /// Read the plan text from a file instead
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Show the user's active macro plan
#[derive(Args)]
pub struct ActivePlanArgs {
    /// Identifier of the user
    pub user_id: String,
}

impl From<ActivePlanArgs> for UserId {
    fn from(val: ActivePlanArgs) -> Self {
        UserId {
            user_id: val.user_id,
        }
    }
}

#[derive(clap::Subcommand)]
pub enum PlanCommands {
    /// Save a new macro plan
    #[command(alias = "s")]
    Save(SavePlanArgs),
    /// Show the user's active macro plan
    #[command(alias = "a")]
    Active(ActivePlanArgs),
}

/// Record feedback about a schedule
#[derive(Args)]
pub struct AddFeedbackArgs {
    /// Identifier of the user giving feedback
    pub user_id: String,
    /// Cycle identifier of the schedule the feedback refers to
    pub schedule_id: String,
    /// Weekday the feedback targets (e.g. Monday), whole week when omitted
    #[arg(short, long)]
    pub day: Option<String>,
    /// Rating from 1 to 5
    #[arg(short, long)]
    pub rating: Option<u8>,
    /// Free-text comments
    #[arg(short, long)]
    pub comments: Option<String>,
}

impl From<AddFeedbackArgs> for RecordFeedback {
    fn from(val: AddFeedbackArgs) -> Self {
        RecordFeedback {
            user_id: val.user_id,
            schedule_id: val.schedule_id,
            day: val.day,
            rating: val.rating,
            comments: val.comments,
        }
    }
}

/// List a user's feedback entries
#[derive(Args)]
pub struct ListFeedbackArgs {
    /// Identifier of the user
    pub user_id: String,
}

impl From<ListFeedbackArgs> for UserId {
    fn from(val: ListFeedbackArgs) -> Self {
        UserId {
            user_id: val.user_id,
        }
    }
}

#[derive(clap::Subcommand)]
pub enum FeedbackCommands {
    /// Record feedback about a schedule
    #[command(alias = "a")]
    Add(AddFeedbackArgs),
    /// List a user's feedback entries
    #[command(aliases = ["l", "ls"])]
    List(ListFeedbackArgs),
}

/// Save (or replace) a user's profile document
#[derive(Args)]
pub struct SaveProfileArgs {
    /// Identifier of the user
    pub user_id: String,
    /// Path to the profile document (JSON)
    pub file: PathBuf,
}

/// Show a user's profile
#[derive(Args)]
pub struct ShowProfileArgs {
    /// Identifier of the user
    pub user_id: String,
}

impl From<ShowProfileArgs> for UserId {
    fn from(val: ShowProfileArgs) -> Self {
        UserId {
            user_id: val.user_id,
        }
    }
}

#[derive(clap::Subcommand)]
pub enum ProfileCommands {
    /// Save (or replace) a user's profile document
    #[command(alias = "s")]
    Save(SaveProfileArgs),
    /// Show a user's profile
    Show(ShowProfileArgs),
}

/// Show storage statistics for a user
#[derive(Args)]
pub struct StatsArgs {
    /// Identifier of the user
    pub user_id: String,
}

impl From<StatsArgs> for UserId {
    fn from(val: StatsArgs) -> Self {
        UserId {
            user_id: val.user_id,
        }
    }
}

/// Command dispatcher binding the coach to the terminal renderer.
pub struct Cli {
    coach: Coach,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(coach: Coach, renderer: TerminalRenderer) -> Self {
        Self { coach, renderer }
    }

    /// Handle schedule subcommands.
    pub async fn handle_schedule_command(&self, command: ScheduleCommands) -> Result<()> {
        match command {
            ScheduleCommands::Import(args) => {
                let document = std::fs::read_to_string(&args.file)
                    .with_context(|| format!("Failed to read {}", args.file.display()))?;
                let params = SaveSchedule {
                    user_id: args.user_id,
                    document,
                };
                let result = self.coach.import_schedule(&params).await?;
                self.renderer.render(&result.to_string())
            }
            ScheduleCommands::List(args) => {
                let summaries = self.coach.list_schedules_summary(&args.into()).await?;
                self.renderer.render(&format!("# Schedules\n\n{summaries}"))
            }
            ScheduleCommands::Show(args) => {
                let as_json = args.json;
                let params: ScheduleKey = args.into();
                match self.coach.show_schedule(&params).await? {
                    Some(record) if as_json => {
                        println!("{}", record.to_json_pretty()?);
                        Ok(())
                    }
                    Some(record) => self.renderer.render(&record.to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure(format!(
                            "Schedule '{}' not found for user '{}'",
                            params.schedule_id, params.user_id
                        ))
                        .to_string(),
                    ),
                }
            }
            ScheduleCommands::Active(args) => {
                let params: UserId = args.into();
                match self.coach.show_active_schedule(&params).await? {
                    Some(record) => self.renderer.render(&record.to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure(format!(
                            "No schedules stored for user '{}'",
                            params.user_id
                        ))
                        .to_string(),
                    ),
                }
            }
            ScheduleCommands::Activate(args) => {
                let result = self.coach.activate_schedule(&args.into()).await?;
                self.renderer.render(&result.to_string())
            }
            ScheduleCommands::Delete(args) => {
                let params: DeleteSchedule = args.into();
                match self.coach.delete_schedule(&params).await? {
                    Some(result) => self.renderer.render(&result.to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure(format!(
                            "Schedule '{}' not found for user '{}'",
                            params.schedule_id, params.user_id
                        ))
                        .to_string(),
                    ),
                }
            }
        }
    }

    /// Handle macro plan subcommands.
    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Save(args) => {
                let plan_text = match (args.text, args.file) {
                    (Some(text), None) => text,
                    (None, Some(file)) => std::fs::read_to_string(&file)
                        .with_context(|| format!("Failed to read {}", file.display()))?,
                    (None, None) => bail!("Provide the plan text or --file"),
                    (Some(_), Some(_)) => unreachable!("clap rejects conflicting arguments"),
                };
                let params = SaveMacroPlan {
                    user_id: args.user_id,
                    plan_text,
                };
                let result = self.coach.save_macro_plan_result(&params).await?;
                self.renderer.render(&result.to_string())
            }
            PlanCommands::Active(args) => {
                let params: UserId = args.into();
                match self.coach.active_macro_plan(&params).await? {
                    Some(plan) => self.renderer.render(&plan.to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure(format!(
                            "No active macro plan for user '{}'",
                            params.user_id
                        ))
                        .to_string(),
                    ),
                }
            }
        }
    }

    /// Handle feedback subcommands.
    pub async fn handle_feedback_command(&self, command: FeedbackCommands) -> Result<()> {
        match command {
            FeedbackCommands::Add(args) => {
                let status = self.coach.record_feedback(&args.into()).await?;
                self.renderer.render(&status.to_string())
            }
            FeedbackCommands::List(args) => {
                let entries = self.coach.list_feedback_entries(&args.into()).await?;
                self.renderer.render(&format!("# Feedback\n\n{entries}"))
            }
        }
    }

    /// Handle profile subcommands.
    pub async fn handle_profile_command(&self, command: ProfileCommands) -> Result<()> {
        match command {
            ProfileCommands::Save(args) => {
                let document = std::fs::read_to_string(&args.file)
                    .with_context(|| format!("Failed to read {}", args.file.display()))?;
                let params = SaveProfile {
                    user_id: args.user_id,
                    document,
                };
                let profile = self.coach.save_profile(&params).await?;
                self.renderer
                    .render(&format!("Saved profile for user '{}'\n", profile.user_id))
            }
            ProfileCommands::Show(args) => {
                let params: UserId = args.into();
                match self.coach.get_profile(&params).await? {
                    Some(profile) => {
                        let body = serde_json::to_string_pretty(&profile.profile)
                            .context("Failed to render profile")?;
                        self.renderer.render(&format!(
                            "# Profile for {}\n\n- Created: {}\n- Updated: {}\n\n```json\n{body}\n```\n",
                            profile.user_id,
                            cadence_core::LocalDateTime(&profile.created_at),
                            cadence_core::LocalDateTime(&profile.last_updated),
                        ))
                    }
                    None => self.renderer.render(
                        &OperationStatus::failure(format!(
                            "No profile stored for user '{}'",
                            params.user_id
                        ))
                        .to_string(),
                    ),
                }
            }
        }
    }

    /// Handle the stats command.
    pub async fn handle_stats(&self, args: StatsArgs) -> Result<()> {
        let stats = self.coach.user_stats(&args.into()).await?;
        self.renderer.render(&stats.to_string())
    }
}
