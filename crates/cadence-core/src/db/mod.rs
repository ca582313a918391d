//! Database operations and SQLite management for schedule documents.
//!
//! This module provides low-level database operations for the Cadence
//! schedule store. It handles SQLite database connections, schema
//! management, and provides specialized query interfaces for schedules,
//! macro plans, profiles, and feedback.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod feedback_queries;
pub mod macro_queries;
pub mod migrations;
pub mod profile_queries;
pub mod schedule_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
