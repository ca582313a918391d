//! Schedule record definition: the persisted document for one cycle.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Availability, CreatedAt, ScheduleStatus, Session, Weekday};
use crate::error::{CoachError, Result};

/// One week of planned sessions, keyed by weekday.
///
/// The seven weekdays are fixed struct fields rather than a map, so a
/// well-typed value always carries exactly the canonical key set and
/// deserialization rejects missing, duplicate, and unknown day names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MicroPlan {
    #[serde(rename = "Monday")]
    pub monday: Session,
    #[serde(rename = "Tuesday")]
    pub tuesday: Session,
    #[serde(rename = "Wednesday")]
    pub wednesday: Session,
    #[serde(rename = "Thursday")]
    pub thursday: Session,
    #[serde(rename = "Friday")]
    pub friday: Session,
    #[serde(rename = "Saturday")]
    pub saturday: Session,
    #[serde(rename = "Sunday")]
    pub sunday: Session,
}

impl MicroPlan {
    /// The session planned for the given weekday.
    pub fn get(&self, day: Weekday) -> &Session {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    /// Iterate the week in order, Monday through Sunday.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &Session)> {
        Weekday::ALL.into_iter().map(move |day| (day, self.get(day)))
    }

    fn validate(&self) -> Result<()> {
        for (day, session) in self.iter() {
            session.validate(&format!("micro_plan.{}", day.as_str()))?;
        }
        Ok(())
    }
}

/// One week of user availability, keyed by weekday.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WeekAvailability {
    #[serde(rename = "Monday")]
    pub monday: Availability,
    #[serde(rename = "Tuesday")]
    pub tuesday: Availability,
    #[serde(rename = "Wednesday")]
    pub wednesday: Availability,
    #[serde(rename = "Thursday")]
    pub thursday: Availability,
    #[serde(rename = "Friday")]
    pub friday: Availability,
    #[serde(rename = "Saturday")]
    pub saturday: Availability,
    #[serde(rename = "Sunday")]
    pub sunday: Availability,
}

impl WeekAvailability {
    /// The availability declared for the given weekday.
    pub fn get(&self, day: Weekday) -> &Availability {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    /// Iterate the week in order, Monday through Sunday.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &Availability)> {
        Weekday::ALL.into_iter().map(move |day| (day, self.get(day)))
    }

    fn validate(&self) -> Result<()> {
        for (day, availability) in self.iter() {
            availability.validate(&format!("user_availability.{}", day.as_str()))?;
        }
        Ok(())
    }
}

/// The persisted schedule document for one user and one planning cycle.
///
/// Created once per cycle and retained as a historical artifact;
/// adaptation produces a new record under a fresh `schedule_id` rather
/// than mutating an existing one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScheduleRecord {
    /// Opaque identifier of the owning user
    pub user_id: String,

    /// Unique identifier per cycle, convention `<cadence>_<timestamp>`
    pub schedule_id: String,

    /// Multi-week narrative periodization text, stored verbatim
    pub macro_plan: String,

    /// Per-day session breakdown for the week
    pub micro_plan: MicroPlan,

    /// The availability the week was scheduled against
    pub user_availability: WeekAvailability,

    /// Timestamp when the record was created (UTC; offset-less stamps from
    /// earlier tooling are accepted and preserved)
    pub created_at: CreatedAt,

    /// Lifecycle status (draft, active, or inactive)
    #[serde(default)]
    pub status: ScheduleStatus,

    /// Identifier of the macro plan this micro schedule derives from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macro_plan_id: Option<String>,
}

impl ScheduleRecord {
    /// The storage key the record is persisted under:
    /// `schedule_<user_id>_<schedule_id>`.
    pub fn storage_key(&self) -> String {
        Self::key_for(&self.user_id, &self.schedule_id)
    }

    /// Builds the storage key for the given user and cycle identifiers.
    pub fn key_for(user_id: &str, schedule_id: &str) -> String {
        format!("schedule_{user_id}_{schedule_id}")
    }

    /// Generates a cycle identifier in the `<cadence>_<timestamp>`
    /// convention, e.g. `week_20250605_165340`.
    pub fn new_cycle_id(cadence: &str, at: Timestamp) -> String {
        format!("{cadence}_{}", at.strftime("%Y%m%d_%H%M%S"))
    }

    /// Parses a schedule document, producing the typed record or a
    /// [`CoachError::SchemaViolation`] naming the missing or malformed
    /// field. The parsed record is validated against the schema invariants
    /// before being returned.
    pub fn from_json(document: &str) -> Result<Self> {
        let record: ScheduleRecord = serde_json::from_str(document)
            .map_err(|e| CoachError::schema_violation_from_json(&e))?;
        record.validate()?;
        Ok(record)
    }

    /// Serializes the record back to its document form. The inverse of
    /// [`ScheduleRecord::from_json`]: parsing and re-serializing a
    /// well-formed document yields a value-equal document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the record with two-space indentation, the layout the
    /// generated artifacts are stored in on disk.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Enforces the schema invariants: non-empty identifiers, empty
    /// descriptive fields on `Rest` sessions, and no time fields on
    /// unavailable days. The weekday key-set invariant is structural and
    /// needs no runtime check.
    pub fn validate(&self) -> Result<()> {
        if self.user_id.is_empty() {
            return Err(CoachError::schema_violation(
                "user_id",
                "must not be empty",
            ));
        }
        if self.schedule_id.is_empty() {
            return Err(CoachError::schema_violation(
                "schedule_id",
                "must not be empty",
            ));
        }
        self.micro_plan.validate()?;
        self.user_availability.validate()?;
        Ok(())
    }
}
