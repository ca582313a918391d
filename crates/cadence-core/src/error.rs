//! Error types for the schedule store.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all schedule store operations.
#[derive(Error, Debug)]
pub enum CoachError {
    /// A schedule document failed schema validation
    #[error("Schema violation in field '{field}': {reason}")]
    SchemaViolation { field: String, reason: String },
    /// Schedule not found for the given storage key
    #[error("Schedule '{key}' not found")]
    ScheduleNotFound { key: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl CoachError {
    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }

    /// Creates a schema violation error for the given field path.
    pub fn schema_violation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SchemaViolation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Converts a serde_json decoding error into a `SchemaViolation` naming
    /// the offending field where the message identifies one.
    ///
    /// serde reports missing, duplicate, and unknown fields with the field
    /// name in backticks (e.g. ``missing field `Monday` ``); that name is
    /// lifted into the `field` slot so callers can report which part of the
    /// document was malformed.
    pub fn schema_violation_from_json(err: &serde_json::Error) -> Self {
        let message = err.to_string();
        let field = message
            .split('`')
            .nth(1)
            .filter(|name| !name.is_empty())
            .unwrap_or("document")
            .to_string();
        Self::SchemaViolation {
            field,
            reason: message,
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CoachError::database_error(message, e))
    }
}

/// Result type alias for schedule store operations
pub type Result<T> = std::result::Result<T, CoachError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_violation_from_json_names_field() {
        let err = serde_json::from_str::<std::collections::HashMap<String, u32>>("not json")
            .expect_err("must fail");
        let converted = CoachError::schema_violation_from_json(&err);
        match converted {
            CoachError::SchemaViolation { field, .. } => assert_eq!(field, "document"),
            other => panic!("Expected SchemaViolation, got {other:?}"),
        }
    }

    #[test]
    fn test_schema_violation_display_names_field() {
        let err = CoachError::schema_violation("micro_plan.Tuesday.duration", "must be empty");
        assert_eq!(
            err.to_string(),
            "Schema violation in field 'micro_plan.Tuesday.duration': must be empty"
        );
    }
}
