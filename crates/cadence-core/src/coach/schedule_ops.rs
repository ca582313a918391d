//! Schedule operations for the Coach.

use tokio::task;

use super::Coach;
use crate::{
    db::Database,
    error::{CoachError, Result},
    models::ScheduleRecord,
    params::{ListSchedules, ScheduleKey, UserId},
};

impl Coach {
    /// Persists a validated schedule record under its storage key.
    ///
    /// The user's active macro plan (if any) is attached when the record
    /// carries no macro plan reference, and schedules older than the
    /// retention window are pruned. Returns the record as persisted.
    pub async fn save_schedule(&self, record: &ScheduleRecord) -> Result<ScheduleRecord> {
        let db_path = self.db_path.clone();
        let record = record.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.save_schedule(&record)
        })
        .await
        .map_err(|e| CoachError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a schedule by user and cycle identifiers.
    pub async fn get_schedule(&self, params: &ScheduleKey) -> Result<Option<ScheduleRecord>> {
        let db_path = self.db_path.clone();
        let user_id = params.user_id.clone();
        let schedule_id = params.schedule_id.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_schedule(&user_id, &schedule_id)
        })
        .await
        .map_err(|e| CoachError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists a user's schedules, newest first, optionally limited.
    pub async fn list_schedules(&self, params: &ListSchedules) -> Result<Vec<ScheduleRecord>> {
        let db_path = self.db_path.clone();
        let user_id = params.user_id.clone();
        let limit = params.limit;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_schedules(&user_id, limit)
        })
        .await
        .map_err(|e| CoachError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Returns the user's active schedule, falling back to the most recent
    /// one when none is marked active.
    pub async fn active_schedule(&self, params: &UserId) -> Result<Option<ScheduleRecord>> {
        let db_path = self.db_path.clone();
        let user_id = params.user_id.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_active_schedule(&user_id)
        })
        .await
        .map_err(|e| CoachError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Marks one schedule as active, demoting the user's other schedules
    /// to inactive. Returns the activated record.
    pub async fn set_schedule_active(&self, params: &ScheduleKey) -> Result<ScheduleRecord> {
        let db_path = self.db_path.clone();
        let user_id = params.user_id.clone();
        let schedule_id = params.schedule_id.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.set_schedule_active(&user_id, &schedule_id)
        })
        .await
        .map_err(|e| CoachError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes a schedule. This operation cannot be undone.
    pub(crate) async fn delete_schedule_by_key(&self, params: &ScheduleKey) -> Result<()> {
        let db_path = self.db_path.clone();
        let user_id = params.user_id.clone();
        let schedule_id = params.schedule_id.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_schedule(&user_id, &schedule_id)
        })
        .await
        .map_err(|e| CoachError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
