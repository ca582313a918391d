//! Session model: one planned activity (or rest) for a weekday.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoachError, Result};

/// Type-safe enumeration of session types.
///
/// Serialized with the capitalized names the schedule documents use
/// (`"Strength"`, `"Cardio"`, ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SessionType {
    Strength,
    Cardio,
    Yoga,
    Flexibility,
    Rest,
}

impl FromStr for SessionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strength" => Ok(SessionType::Strength),
            "cardio" => Ok(SessionType::Cardio),
            "yoga" => Ok(SessionType::Yoga),
            "flexibility" => Ok(SessionType::Flexibility),
            "rest" => Ok(SessionType::Rest),
            _ => Err(format!("Invalid session type: {s}")),
        }
    }
}

impl SessionType {
    /// The capitalized type name as it appears in schedule documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::Strength => "Strength",
            SessionType::Cardio => "Cardio",
            SessionType::Yoga => "Yoga",
            SessionType::Flexibility => "Flexibility",
            SessionType::Rest => "Rest",
        }
    }
}

/// One planned session for a single weekday.
///
/// The descriptive fields are free text produced externally and stored
/// verbatim. A `Rest` session carries no description: all five descriptive
/// fields must be empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Session {
    /// Kind of session planned for the day
    #[serde(rename = "type")]
    pub kind: SessionType,

    /// Planned duration (e.g. "45 min")
    pub duration: String,

    /// Main focus area (e.g. "Upper body")
    pub focus: String,

    /// Intensity level (e.g. "Moderate")
    pub intensity: String,

    /// Specific exercises or activities
    pub details: String,

    /// Where the session takes place (e.g. "Gym", "Home")
    pub location: String,
}

impl Session {
    /// A rest day: `Rest` type with every descriptive field empty.
    pub fn rest() -> Self {
        Self {
            kind: SessionType::Rest,
            duration: String::new(),
            focus: String::new(),
            intensity: String::new(),
            details: String::new(),
            location: String::new(),
        }
    }

    /// Whether this is a rest day.
    pub fn is_rest(&self) -> bool {
        self.kind == SessionType::Rest
    }

    /// Enforces the rest invariant, reporting violations against the given
    /// dotted field path prefix (e.g. `micro_plan.Tuesday`).
    pub(crate) fn validate(&self, path: &str) -> Result<()> {
        if !self.is_rest() {
            return Ok(());
        }
        let fields = [
            ("duration", &self.duration),
            ("focus", &self.focus),
            ("intensity", &self.intensity),
            ("details", &self.details),
            ("location", &self.location),
        ];
        for (name, value) in fields {
            if !value.is_empty() {
                return Err(CoachError::schema_violation(
                    format!("{path}.{name}"),
                    "descriptive fields of a Rest session must be empty",
                ));
            }
        }
        Ok(())
    }
}
