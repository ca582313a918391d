//! Schedule handler operations that return formatted wrapper types for the Coach.

use super::Coach;
use crate::{
    display::{CreateResult, DeleteResult, ScheduleSummaries, UpdateResult},
    error::Result,
    models::{ScheduleRecord, ScheduleSummary},
    params::{DeleteSchedule, ListSchedules, SaveSchedule, ScheduleKey, UserId},
};

impl Coach {
    /// Handle importing a schedule document.
    ///
    /// Validates the document against the weekly schedule schema and
    /// persists it, returning a creation result for display.
    ///
    /// # Errors
    ///
    /// Returns `CoachError::SchemaViolation` if the document does not
    /// conform to the schema, or `CoachError::InvalidInput` if a schedule
    /// with the same identifiers already exists.
    pub async fn import_schedule(
        &self,
        params: &SaveSchedule,
    ) -> Result<CreateResult<ScheduleRecord>> {
        let record = params.validate()?;
        let saved = self.save_schedule(&record).await?;
        Ok(CreateResult::new(saved))
    }

    /// Handle listing a user's schedules as summaries.
    ///
    /// Converts full records to summaries with session and rest day counts
    /// for consistent list display across interfaces.
    pub async fn list_schedules_summary(
        &self,
        params: &ListSchedules,
    ) -> Result<ScheduleSummaries> {
        let records = self.list_schedules(params).await?;
        let summaries: Vec<ScheduleSummary> = records.iter().map(Into::into).collect();
        Ok(ScheduleSummaries(summaries))
    }

    /// Handle showing a complete schedule with its full week layout.
    pub async fn show_schedule(&self, params: &ScheduleKey) -> Result<Option<ScheduleRecord>> {
        self.get_schedule(params).await
    }

    /// Handle showing the user's active schedule.
    ///
    /// Falls back to the most recently created schedule when none is
    /// marked active, or None when the user has no schedules at all.
    pub async fn show_active_schedule(&self, params: &UserId) -> Result<Option<ScheduleRecord>> {
        self.active_schedule(params).await
    }

    /// Handle activating a schedule.
    ///
    /// Marks the named schedule active and demotes the user's remaining
    /// schedules to inactive, returning the activated record for display.
    pub async fn activate_schedule(
        &self,
        params: &ScheduleKey,
    ) -> Result<UpdateResult<ScheduleRecord>> {
        let record = self.set_schedule_active(params).await?;
        Ok(UpdateResult::with_changes(
            record,
            vec!["Status set to active".to_string()],
        ))
    }

    /// Handle permanently deleting a schedule with confirmation.
    ///
    /// Uses get-before-delete to return the deleted record for
    /// confirmation, or None if the schedule doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `CoachError::InvalidInput` if `confirmed` field is false
    pub async fn delete_schedule(
        &self,
        params: &DeleteSchedule,
    ) -> Result<Option<DeleteResult<ScheduleRecord>>> {
        if !params.confirmed {
            return Err(crate::CoachError::InvalidInput {
                field: "confirmed".to_string(),
                reason: "Schedule deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.".to_string(),
            });
        }

        let key = ScheduleKey {
            user_id: params.user_id.clone(),
            schedule_id: params.schedule_id.clone(),
        };
        let record = self.get_schedule(&key).await?;

        if record.is_some() {
            self.delete_schedule_by_key(&key).await?;
        }

        Ok(record.map(DeleteResult::new))
    }
}
