//! Feedback persistence and queries.

use rusqlite::params;

use crate::{
    error::{CoachError, DatabaseResultExt, Result},
    models::Feedback,
};

const INSERT_FEEDBACK_SQL: &str = "INSERT INTO feedback (user_id, schedule_id, document, created_at) VALUES (?1, ?2, ?3, ?4)";
const LIST_FEEDBACK_SQL: &str =
    "SELECT document FROM feedback WHERE user_id = ?1 ORDER BY created_at DESC";
const COUNT_FEEDBACK_SQL: &str = "SELECT COUNT(*) FROM feedback WHERE user_id = ?1";

impl super::Database {
    /// Records one feedback entry. Feedback is retained indefinitely.
    pub fn insert_feedback(&mut self, feedback: &Feedback) -> Result<()> {
        let document = serde_json::to_string(feedback)?;
        self.connection
            .execute(
                INSERT_FEEDBACK_SQL,
                params![
                    &feedback.user_id,
                    &feedback.schedule_id,
                    &document,
                    feedback.created_at.to_string(),
                ],
            )
            .map_err(|e| CoachError::database_error("Failed to insert feedback", e))?;
        Ok(())
    }

    /// Lists a user's feedback entries, newest first.
    pub fn list_feedback(&self, user_id: &str) -> Result<Vec<Feedback>> {
        let mut stmt = self
            .connection
            .prepare(LIST_FEEDBACK_SQL)
            .map_err(|e| CoachError::database_error("Failed to prepare query", e))?;

        let documents: Vec<String> = stmt
            .query_map(params![user_id], |row| row.get(0))
            .map_err(|e| CoachError::database_error("Failed to query feedback", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| CoachError::database_error("Failed to fetch feedback", e))?;

        documents
            .iter()
            .map(|d| serde_json::from_str(d).map_err(CoachError::from))
            .collect()
    }

    /// Counts the feedback entries stored for a user.
    pub fn count_feedback(&self, user_id: &str) -> Result<u32> {
        let count: i64 = self
            .connection
            .query_row(COUNT_FEEDBACK_SQL, params![user_id], |row| row.get(0))
            .db_context("Failed to count feedback")?;
        Ok(count as u32)
    }
}
