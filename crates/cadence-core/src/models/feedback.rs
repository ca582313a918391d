//! Feedback model: one user reaction to a saved schedule.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Weekday;

/// One piece of user feedback about a schedule.
///
/// Feedback may target the whole week or a single day, and is retained
/// indefinitely as input for future replanning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feedback {
    /// Opaque identifier of the user giving feedback
    pub user_id: String,

    /// The schedule the feedback refers to
    pub schedule_id: String,

    /// The specific day the feedback targets, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<Weekday>,

    /// Optional 1-5 rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,

    /// Free-text comments, stored verbatim
    #[serde(default)]
    pub comments: String,

    /// Timestamp when the feedback was recorded (UTC)
    pub created_at: Timestamp,
}
