//! Parameter structures for Cadence operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI today, others later) without framework-specific
//! derives or dependencies. Interface layers wrap these structures with
//! their own derives (clap `Args`, etc.) and convert via `From` impls,
//! keeping the core interface-agnostic.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoachError, Result},
    models::{ScheduleRecord, Weekday},
};

/// Generic parameters for operations scoped to a single user.
///
/// Used for operations like active_schedule, active_macro_plan,
/// list_feedback, and user_stats.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserId {
    /// Opaque identifier of the user to operate on
    pub user_id: String,
}

/// Parameters identifying one schedule of one user.
///
/// Used for operations like show_schedule and set_schedule_active.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleKey {
    /// Opaque identifier of the owning user
    pub user_id: String,
    /// Cycle identifier of the schedule
    pub schedule_id: String,
}

/// Parameters for saving a generated schedule document.
///
/// The document is the raw JSON emitted by the planning pipeline; it is
/// parsed and validated before anything touches the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveSchedule {
    /// Opaque identifier of the user the schedule belongs to
    pub user_id: String,
    /// The schedule document as JSON text
    pub document: String,
}

impl SaveSchedule {
    /// Parse and validate the document, checking that it belongs to the
    /// user named in the parameters.
    ///
    /// # Errors
    ///
    /// * `CoachError::SchemaViolation` - When the document is malformed or
    ///   violates a schema invariant
    /// * `CoachError::InvalidInput` - When the document names a different
    ///   user than the parameters
    pub fn validate(&self) -> Result<ScheduleRecord> {
        let record = ScheduleRecord::from_json(&self.document)?;
        if record.user_id != self.user_id {
            return Err(CoachError::InvalidInput {
                field: "user_id".to_string(),
                reason: format!(
                    "Document belongs to user '{}', not '{}'",
                    record.user_id, self.user_id
                ),
            });
        }
        Ok(record)
    }
}

/// Parameters for listing a user's schedules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListSchedules {
    /// Opaque identifier of the user
    pub user_id: String,
    /// Maximum number of schedules to return (newest first); all when unset
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Parameters for permanently deleting a schedule.
///
/// Requires explicit confirmation to prevent accidental deletion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteSchedule {
    /// Opaque identifier of the owning user
    pub user_id: String,
    /// Cycle identifier of the schedule to delete
    pub schedule_id: String,
    /// Must be true for the deletion to proceed
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for saving a new macro plan.
///
/// Saving deactivates the user's previous macro plans; the new plan
/// becomes the active one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveMacroPlan {
    /// Opaque identifier of the user the plan belongs to
    pub user_id: String,
    /// The narrative plan text, stored verbatim
    pub plan_text: String,
}

/// Parameters for recording feedback about a schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordFeedback {
    /// Opaque identifier of the user giving feedback
    pub user_id: String,
    /// The schedule the feedback refers to
    pub schedule_id: String,
    /// Weekday name when the feedback targets a single day
    #[serde(default)]
    pub day: Option<String>,
    /// Optional 1-5 rating
    #[serde(default)]
    pub rating: Option<u8>,
    /// Free-text comments
    #[serde(default)]
    pub comments: Option<String>,
}

impl RecordFeedback {
    /// Validate feedback parameters and return the parsed weekday.
    ///
    /// # Errors
    ///
    /// * `CoachError::InvalidInput` - When the day is not a weekday name
    /// * `CoachError::InvalidInput` - When the rating is outside 1-5
    pub fn validate(&self) -> Result<Option<Weekday>> {
        let day = match &self.day {
            Some(name) => Some(Weekday::from_str(name).map_err(|_| {
                CoachError::InvalidInput {
                    field: "day".to_string(),
                    reason: format!("Invalid weekday: {name}. Use Monday through Sunday"),
                }
            })?),
            None => None,
        };

        if let Some(rating) = self.rating {
            if !(1..=5).contains(&rating) {
                return Err(CoachError::InvalidInput {
                    field: "rating".to_string(),
                    reason: format!("Rating must be between 1 and 5, got {rating}"),
                });
            }
        }

        Ok(day)
    }
}

/// Parameters for saving a user profile document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveProfile {
    /// Opaque identifier of the user
    pub user_id: String,
    /// The profile body as JSON text, stored verbatim
    pub document: String,
}

impl SaveProfile {
    /// Parse the profile body, rejecting documents that are not JSON.
    pub fn validate(&self) -> Result<serde_json::Value> {
        serde_json::from_str(&self.document)
            .map_err(|e| CoachError::schema_violation_from_json(&e))
    }
}
