//! High-level coach API for managing schedule documents.
//!
//! This module provides the main [`Coach`] interface for interacting with
//! the Cadence schedule store. The coach acts as the central coordinator
//! between the application layers and the database, implementing the
//! business logic for schedule, macro plan, profile, and feedback
//! operations.
//!
//! All operations are async; the blocking rusqlite layer runs on the
//! tokio blocking pool via `spawn_blocking`. Handler methods (in
//! [`schedule_handlers`] and [`plan_handlers`]) return display wrapper
//! types for consumption by interface layers, while the ops modules
//! expose the raw domain types.

use std::path::PathBuf;

// Module declarations
pub mod builder;
pub mod plan_ops;
pub mod schedule_ops;
pub mod plan_handlers;
pub mod schedule_handlers;


// Re-export the main types
pub use builder::CoachBuilder;

/// Main coach interface for managing schedules and related records.
pub struct Coach {
    pub(crate) db_path: PathBuf,
}

impl Coach {
    /// Creates a new coach with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
