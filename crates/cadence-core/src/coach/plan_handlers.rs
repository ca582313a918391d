//! Macro plan and feedback handlers that return formatted wrapper types.

use jiff::Timestamp;

use super::Coach;
use crate::{
    display::{CreateResult, FeedbackEntries, OperationStatus},
    error::Result,
    models::{Feedback, MacroPlan},
    params::{RecordFeedback, SaveMacroPlan, UserId},
};

impl Coach {
    /// Handle saving a new macro plan.
    ///
    /// Previous active plans for the user are deactivated; the new plan
    /// becomes the one attached to subsequently imported schedules.
    pub async fn save_macro_plan_result(
        &self,
        params: &SaveMacroPlan,
    ) -> Result<CreateResult<MacroPlan>> {
        let plan = self.save_macro_plan(params).await?;
        Ok(CreateResult::new(plan))
    }

    /// Handle recording feedback for a schedule.
    ///
    /// # Errors
    ///
    /// Returns `CoachError::InvalidInput` if the day is not a weekday name
    /// or the rating falls outside 1 to 5.
    pub async fn record_feedback(&self, params: &RecordFeedback) -> Result<OperationStatus> {
        let day = params.validate()?;
        let feedback = Feedback {
            user_id: params.user_id.clone(),
            schedule_id: params.schedule_id.clone(),
            day,
            rating: params.rating,
            comments: params.comments.clone().unwrap_or_default(),
            created_at: Timestamp::now(),
        };
        self.insert_feedback(feedback).await?;
        Ok(OperationStatus::success(format!(
            "Recorded feedback for schedule '{}'",
            params.schedule_id
        )))
    }

    /// Handle listing a user's feedback entries for display.
    pub async fn list_feedback_entries(&self, params: &UserId) -> Result<FeedbackEntries> {
        let entries = self.list_feedback(params).await?;
        Ok(FeedbackEntries(entries))
    }
}
