//! Availability model: the user-declared window for one weekday.

use serde::{Deserialize, Serialize};

use crate::error::{CoachError, Result};

/// The user's declared availability for a single weekday.
///
/// The time fields are present only when the day is available; an
/// unavailable day serializes as `{"available": false}` with no time
/// fields at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Availability {
    /// Whether the user can train on this day
    pub available: bool,

    /// Preferred start time (e.g. "07:00"), only on available days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<String>,

    /// Available duration (e.g. "1 hour"), only on available days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl Availability {
    /// An available day with the given time window.
    pub fn open(preferred_time: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            available: true,
            preferred_time: Some(preferred_time.into()),
            duration: Some(duration.into()),
        }
    }

    /// An unavailable day, carrying no time fields.
    pub fn closed() -> Self {
        Self {
            available: false,
            preferred_time: None,
            duration: None,
        }
    }

    /// Enforces the unavailable-day invariant, reporting violations against
    /// the given dotted field path prefix (e.g. `user_availability.Sunday`).
    pub(crate) fn validate(&self, path: &str) -> Result<()> {
        if self.available {
            return Ok(());
        }
        if self.preferred_time.is_some() {
            return Err(CoachError::schema_violation(
                format!("{path}.preferred_time"),
                "an unavailable day carries no time fields",
            ));
        }
        if self.duration.is_some() {
            return Err(CoachError::schema_violation(
                format!("{path}.duration"),
                "an unavailable day carries no time fields",
            ));
        }
        Ok(())
    }
}
