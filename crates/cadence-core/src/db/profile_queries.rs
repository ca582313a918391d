//! User profile queries and per-user statistics.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{CoachError, DatabaseResultExt, Result},
    models::{UserProfile, UserStats},
};

const UPSERT_PROFILE_SQL: &str = "INSERT INTO profiles (user_id, document, created_at, updated_at) VALUES (?1, ?2, ?3, ?3) ON CONFLICT(user_id) DO UPDATE SET document = ?2, updated_at = ?3";
const SELECT_PROFILE_SQL: &str =
    "SELECT user_id, document, created_at, updated_at FROM profiles WHERE user_id = ?1";
const CHECK_PROFILE_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM profiles WHERE user_id = ?1)";

impl super::Database {
    /// Saves (or replaces) the user's profile document, preserving the
    /// original creation stamp on update.
    pub fn save_profile(
        &mut self,
        user_id: &str,
        profile: &serde_json::Value,
    ) -> Result<UserProfile> {
        let now = Timestamp::now();
        let document = serde_json::to_string(profile)?;

        self.connection
            .execute(
                UPSERT_PROFILE_SQL,
                params![user_id, &document, now.to_string()],
            )
            .map_err(|e| CoachError::database_error("Failed to save profile", e))?;

        // Read back to pick up the preserved created_at on updates.
        self.get_profile(user_id)?
            .ok_or_else(|| CoachError::Configuration {
                message: format!("Profile for user '{user_id}' missing after save"),
            })
    }

    /// Retrieves the user's profile document, if any.
    pub fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        self.connection
            .query_row(SELECT_PROFILE_SQL, params![user_id], |row| {
                let document: String = row.get(1)?;
                let profile = serde_json::from_str(&document).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e))
                })?;

                Ok(UserProfile {
                    user_id: row.get(0)?,
                    profile,
                    created_at: row.get::<_, String>(2)?.parse::<Timestamp>().map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
                    })?,
                    last_updated: row.get::<_, String>(3)?.parse::<Timestamp>().map_err(
                        |e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)),
                    )?,
                })
            })
            .optional()
            .db_context("Failed to query profile")
    }

    /// Returns basic statistics about the data stored for a user.
    pub fn user_stats(&self, user_id: &str) -> Result<UserStats> {
        let has_profile: bool = self
            .connection
            .query_row(CHECK_PROFILE_EXISTS_SQL, params![user_id], |row| row.get(0))
            .db_context("Failed to check profile existence")?;

        Ok(UserStats {
            user_id: user_id.to_string(),
            has_profile,
            total_schedules: self.count_schedules(user_id)?,
            total_feedback: self.count_feedback(user_id)?,
        })
    }
}
