//! Schedule document CRUD operations and queries.

use rusqlite::{params, OptionalExtension};

use crate::{
    error::{CoachError, DatabaseResultExt, Result},
    models::{ScheduleRecord, ScheduleStatus},
};

// Optimized SQL queries as const strings for compile-time optimization
const INSERT_SCHEDULE_SQL: &str = "INSERT INTO schedules (key, user_id, schedule_id, status, created_at, macro_plan_id, document) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_SCHEDULE_SQL: &str =
    "SELECT document FROM schedules WHERE user_id = ?1 AND schedule_id = ?2";
const LIST_SCHEDULES_SQL: &str =
    "SELECT document FROM schedules WHERE user_id = ?1 ORDER BY created_at DESC";
const SELECT_ACTIVE_SCHEDULE_SQL: &str = "SELECT document FROM schedules WHERE user_id = ?1 AND status = 'active' ORDER BY created_at DESC LIMIT 1";
const SELECT_LATEST_SCHEDULE_SQL: &str =
    "SELECT document FROM schedules WHERE user_id = ?1 ORDER BY created_at DESC LIMIT 1";
const CHECK_SCHEDULE_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM schedules WHERE user_id = ?1 AND schedule_id = ?2)";
const UPDATE_SCHEDULE_STATUS_SQL: &str =
    "UPDATE schedules SET status = ?1, document = ?2 WHERE key = ?3";
const LIST_USER_KEYS_SQL: &str =
    "SELECT key, document FROM schedules WHERE user_id = ?1 ORDER BY created_at DESC";
const DELETE_SCHEDULE_SQL: &str =
    "DELETE FROM schedules WHERE user_id = ?1 AND schedule_id = ?2";
const PRUNE_SCHEDULES_SQL: &str = "DELETE FROM schedules WHERE user_id = ?1 AND key NOT IN (SELECT key FROM schedules WHERE user_id = ?1 ORDER BY created_at DESC LIMIT ?2)";
const COUNT_SCHEDULES_SQL: &str = "SELECT COUNT(*) FROM schedules WHERE user_id = ?1";

/// Number of schedules retained per user; older cycles are pruned on save.
pub const RETAINED_SCHEDULES: usize = 4;

impl super::Database {
    /// Saves a validated schedule document under its storage key.
    ///
    /// When the record carries no macro plan reference and the user has an
    /// active macro plan, the plan's id and text are attached before the
    /// record is persisted. After the insert, schedules beyond the
    /// [`RETAINED_SCHEDULES`] most recent ones are pruned.
    ///
    /// Returns the record as persisted (with any attached macro plan).
    pub fn save_schedule(&mut self, record: &ScheduleRecord) -> Result<ScheduleRecord> {
        record.validate()?;

        let mut record = record.clone();
        if record.macro_plan_id.is_none() {
            if let Some(plan) = self.get_active_macro_plan(&record.user_id)? {
                record.macro_plan_id = Some(plan.plan_id);
                record.macro_plan = plan.macro_plan;
            }
        }

        let exists: bool = self
            .connection
            .query_row(
                CHECK_SCHEDULE_EXISTS_SQL,
                params![&record.user_id, &record.schedule_id],
                |row| row.get(0),
            )
            .db_context("Failed to check schedule existence")?;
        if exists {
            return Err(CoachError::InvalidInput {
                field: "schedule_id".to_string(),
                reason: format!(
                    "Schedule '{}' already exists for user '{}'; adaptation creates a new cycle id",
                    record.schedule_id, record.user_id
                ),
            });
        }

        let document = record.to_json()?;
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_SCHEDULE_SQL,
            params![
                record.storage_key(),
                &record.user_id,
                &record.schedule_id,
                record.status.as_str(),
                record.created_at.get().to_string(),
                record.macro_plan_id.as_deref(),
                &document,
            ],
        )
        .map_err(|e| CoachError::database_error("Failed to insert schedule", e))?;

        tx.execute(
            PRUNE_SCHEDULES_SQL,
            params![&record.user_id, RETAINED_SCHEDULES as i64],
        )
        .map_err(|e| CoachError::database_error("Failed to prune old schedules", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(record)
    }

    /// Retrieves a schedule by its user and cycle identifiers.
    pub fn get_schedule(
        &self,
        user_id: &str,
        schedule_id: &str,
    ) -> Result<Option<ScheduleRecord>> {
        let document: Option<String> = self
            .connection
            .query_row(SELECT_SCHEDULE_SQL, params![user_id, schedule_id], |row| {
                row.get(0)
            })
            .optional()
            .db_context("Failed to query schedule")?;

        document.map(|d| ScheduleRecord::from_json(&d)).transpose()
    }

    /// Lists a user's schedules, newest first, optionally limited.
    pub fn list_schedules(
        &self,
        user_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<ScheduleRecord>> {
        let mut stmt = self
            .connection
            .prepare(LIST_SCHEDULES_SQL)
            .map_err(|e| CoachError::database_error("Failed to prepare query", e))?;

        let documents: Vec<String> = stmt
            .query_map(params![user_id], |row| row.get(0))
            .map_err(|e| CoachError::database_error("Failed to query schedules", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| CoachError::database_error("Failed to fetch schedules", e))?;

        documents
            .iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|d| ScheduleRecord::from_json(d))
            .collect()
    }

    /// Returns the user's active schedule: the most recent record marked
    /// `active`, falling back to the most recent record of any status.
    pub fn get_active_schedule(&self, user_id: &str) -> Result<Option<ScheduleRecord>> {
        let active: Option<String> = self
            .connection
            .query_row(SELECT_ACTIVE_SCHEDULE_SQL, params![user_id], |row| {
                row.get(0)
            })
            .optional()
            .db_context("Failed to query active schedule")?;

        let document = match active {
            Some(d) => Some(d),
            None => self
                .connection
                .query_row(SELECT_LATEST_SCHEDULE_SQL, params![user_id], |row| {
                    row.get(0)
                })
                .optional()
                .db_context("Failed to query latest schedule")?,
        };

        document.map(|d| ScheduleRecord::from_json(&d)).transpose()
    }

    /// Marks one schedule as the user's active one, demoting every sibling
    /// to `inactive`. The stored documents are rewritten so their `status`
    /// field matches the column.
    ///
    /// Returns the activated record.
    pub fn set_schedule_active(
        &mut self,
        user_id: &str,
        schedule_id: &str,
    ) -> Result<ScheduleRecord> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(
                CHECK_SCHEDULE_EXISTS_SQL,
                params![user_id, schedule_id],
                |row| row.get(0),
            )
            .db_context("Failed to check schedule existence")?;
        if !exists {
            return Err(CoachError::ScheduleNotFound {
                key: ScheduleRecord::key_for(user_id, schedule_id),
            });
        }

        let rows: Vec<(String, String)> = {
            let mut stmt = tx
                .prepare(LIST_USER_KEYS_SQL)
                .map_err(|e| CoachError::database_error("Failed to prepare query", e))?;
            let rows = stmt
                .query_map(params![user_id], |row| Ok((row.get(0)?, row.get(1)?)))
                .map_err(|e| CoachError::database_error("Failed to query schedules", e))?
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| CoachError::database_error("Failed to fetch schedules", e))?;
            rows
        };

        let mut activated = None;
        for (key, document) in rows {
            let mut record = ScheduleRecord::from_json(&document)?;
            record.status = if record.schedule_id == schedule_id {
                ScheduleStatus::Active
            } else {
                ScheduleStatus::Inactive
            };
            tx.execute(
                UPDATE_SCHEDULE_STATUS_SQL,
                params![record.status.as_str(), record.to_json()?, key],
            )
            .map_err(|e| CoachError::database_error("Failed to update schedule status", e))?;
            if record.status == ScheduleStatus::Active {
                activated = Some(record);
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;

        // The existence check above guarantees the target was seen.
        activated.ok_or_else(|| CoachError::ScheduleNotFound {
            key: ScheduleRecord::key_for(user_id, schedule_id),
        })
    }

    /// Permanently deletes a schedule. This operation cannot be undone.
    pub fn delete_schedule(&mut self, user_id: &str, schedule_id: &str) -> Result<()> {
        let rows_affected = self
            .connection
            .execute(DELETE_SCHEDULE_SQL, params![user_id, schedule_id])
            .map_err(|e| CoachError::database_error("Failed to delete schedule", e))?;

        if rows_affected == 0 {
            return Err(CoachError::ScheduleNotFound {
                key: ScheduleRecord::key_for(user_id, schedule_id),
            });
        }

        Ok(())
    }

    /// Counts the schedules stored for a user.
    pub fn count_schedules(&self, user_id: &str) -> Result<u32> {
        let count: i64 = self
            .connection
            .query_row(COUNT_SCHEDULES_SQL, params![user_id], |row| row.get(0))
            .db_context("Failed to count schedules")?;
        Ok(count as u32)
    }
}
