//! Schedule summary types and functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{ScheduleRecord, ScheduleStatus};

/// Summary information about a schedule with session statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Opaque identifier of the owning user
    pub user_id: String,
    /// Cycle identifier of the schedule
    pub schedule_id: String,
    /// Lifecycle status
    pub status: ScheduleStatus,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Identifier of the macro plan the schedule derives from
    pub macro_plan_id: Option<String>,
    /// Number of days with a planned session
    pub session_days: u32,
    /// Number of rest days
    pub rest_days: u32,
}

impl From<&ScheduleRecord> for ScheduleSummary {
    fn from(record: &ScheduleRecord) -> Self {
        let rest_days = record
            .micro_plan
            .iter()
            .filter(|(_, session)| session.is_rest())
            .count() as u32;

        Self {
            user_id: record.user_id.clone(),
            schedule_id: record.schedule_id.clone(),
            status: record.status,
            created_at: record.created_at.get(),
            macro_plan_id: record.macro_plan_id.clone(),
            session_days: 7 - rest_days,
            rest_days,
        }
    }
}
