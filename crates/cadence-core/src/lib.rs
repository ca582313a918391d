//! Core library for the Cadence fitness schedule store.
//!
//! This crate provides the core business logic for managing weekly workout
//! schedules, macro plans, user profiles, and feedback, including schema
//! validation, database operations, data models, and error handling.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and specialized
//!   formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! This separation allows the same data to be formatted differently depending
//! on context (lists vs. individual items, creation results vs. updates, etc.)
//! while maintaining consistency across all output.
//!
//! # Quick Start
//!
//! ```rust
//! use cadence_core::{CoachBuilder, params::ListSchedules};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a coach instance
//! let coach = CoachBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! // List a user's schedules as summaries
//! let params = ListSchedules {
//!     user_id: "cf4caba2".to_string(),
//!     limit: None,
//! };
//! let summaries = coach.list_schedules_summary(&params).await?;
//! for summary in &summaries {
//!     println!("Schedule: {}", summary.schedule_id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod coach;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use coach::{Coach, CoachBuilder};
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, FeedbackEntries, LocalDateTime, OperationStatus,
    ScheduleSummaries, UpdateResult,
};
pub use error::{CoachError, Result};
pub use models::{
    Availability, CreatedAt, Feedback, MacroPlan, MacroPlanStatus, MicroPlan, ScheduleRecord,
    ScheduleStatus, ScheduleSummary, Session, SessionType, UserProfile, UserStats,
    WeekAvailability, Weekday,
};
pub use params::{
    DeleteSchedule, ListSchedules, RecordFeedback, SaveMacroPlan, SaveProfile, SaveSchedule,
    ScheduleKey, UserId,
};
