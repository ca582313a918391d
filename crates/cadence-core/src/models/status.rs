//! Status enumerations for schedules and macro plans.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of schedule lifecycle statuses.
///
/// A schedule is saved as a draft, may later be promoted to the user's
/// single active schedule, and is demoted to inactive when a sibling is
/// activated in its place.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    /// Freshly generated, not yet adopted by the user
    #[default]
    Draft,

    /// The schedule the user is currently following
    Active,

    /// Superseded by a more recent activation
    Inactive,
}

impl FromStr for ScheduleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(ScheduleStatus::Draft),
            "active" => Ok(ScheduleStatus::Active),
            "inactive" => Ok(ScheduleStatus::Inactive),
            _ => Err(format!("Invalid schedule status: {s}")),
        }
    }
}

impl ScheduleStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Draft => "draft",
            ScheduleStatus::Active => "active",
            ScheduleStatus::Inactive => "inactive",
        }
    }
}

/// Type-safe enumeration of macro plan statuses.
///
/// Saving a new macro plan deactivates every older one, so a user has at
/// most one active macro plan at any time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MacroPlanStatus {
    /// The plan current micro schedules are derived from
    #[default]
    Active,

    /// Replaced by a newer plan
    Inactive,
}

impl FromStr for MacroPlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(MacroPlanStatus::Active),
            "inactive" => Ok(MacroPlanStatus::Inactive),
            _ => Err(format!("Invalid macro plan status: {s}")),
        }
    }
}

impl MacroPlanStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            MacroPlanStatus::Active => "active",
            MacroPlanStatus::Inactive => "inactive",
        }
    }
}
