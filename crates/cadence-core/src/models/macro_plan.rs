//! Macro plan model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::MacroPlanStatus;

/// A multi-week narrative periodization plan for one user.
///
/// The plan text is produced externally and stored verbatim; micro
/// schedules reference the plan they were derived from via
/// [`crate::models::ScheduleRecord::macro_plan_id`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroPlan {
    /// Opaque identifier of the owning user
    pub user_id: String,

    /// Unique plan identifier, convention `macro_<timestamp>`
    pub plan_id: String,

    /// The narrative plan text, stored verbatim
    pub macro_plan: String,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Lifecycle status (active or inactive)
    #[serde(default)]
    pub status: MacroPlanStatus,
}

impl MacroPlan {
    /// The storage key the plan is persisted under:
    /// `macro_<user_id>_<plan_id>`.
    pub fn storage_key(&self) -> String {
        format!("macro_{}_{}", self.user_id, self.plan_id)
    }

    /// Generates a plan identifier in the `macro_<timestamp>` convention.
    ///
    /// Microseconds are appended so plans saved within the same second
    /// still get distinct identifiers.
    pub fn new_plan_id(at: Timestamp) -> String {
        format!(
            "macro_{}_{:06}",
            at.strftime("%Y%m%d_%H%M%S"),
            at.subsec_nanosecond() / 1_000
        )
    }
}
