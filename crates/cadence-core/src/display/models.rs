//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions to maintain clean separation of
//! concerns.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - A full week view for schedule records, one section per weekday
//! - Context-aware display behavior for different use cases

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    Availability, Feedback, MacroPlan, MacroPlanStatus, ScheduleRecord, ScheduleStatus,
    ScheduleSummary, Session, SessionType, UserStats, Weekday,
};

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for MacroPlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ScheduleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Schedule {} ({})", self.schedule_id, self.user_id)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Status: {}", self.status)?;
        if let Some(plan_id) = &self.macro_plan_id {
            writeln!(f, "- Macro plan: {plan_id}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at.get()))?;

        writeln!(f, "\n## Week")?;
        writeln!(f)?;
        for day in Weekday::ALL {
            fmt_day(f, day, self.micro_plan.get(day), self.user_availability.get(day))?;
        }

        if !self.macro_plan.is_empty() {
            writeln!(f, "## Macro Plan Context")?;
            writeln!(f)?;
            writeln!(f, "{}", self.macro_plan)?;
        }

        Ok(())
    }
}

/// Format one weekday section of the week view.
///
/// Rest days collapse to a single header line; session days list the
/// non-empty descriptive fields and the user's declared window.
fn fmt_day(
    f: &mut fmt::Formatter<'_>,
    day: Weekday,
    session: &Session,
    slot: &Availability,
) -> fmt::Result {
    if session.is_rest() {
        writeln!(f, "### {day}: Rest")?;
        writeln!(f)?;
        return Ok(());
    }

    writeln!(f, "### {day}: {} ({})", session.kind, session.duration)?;
    writeln!(f)?;

    if !session.focus.is_empty() {
        writeln!(f, "- Focus: {}", session.focus)?;
    }
    if !session.intensity.is_empty() {
        writeln!(f, "- Intensity: {}", session.intensity)?;
    }
    if !session.location.is_empty() {
        writeln!(f, "- Location: {}", session.location)?;
    }
    if slot.available {
        match (&slot.preferred_time, &slot.duration) {
            (Some(time), Some(window)) => writeln!(f, "- Window: {time} ({window})")?,
            (Some(time), None) => writeln!(f, "- Window: {time}")?,
            (None, Some(window)) => writeln!(f, "- Window: {window}")?,
            (None, None) => {}
        }
    }

    if !session.details.is_empty() {
        writeln!(f)?;
        writeln!(f, "{}", session.details)?;
    }
    writeln!(f)?;

    Ok(())
}

impl fmt::Display for ScheduleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} [{}] ({} sessions, {} rest days)",
            self.schedule_id, self.status, self.session_days, self.rest_days
        )?;
        writeln!(f)?;

        if let Some(plan_id) = &self.macro_plan_id {
            writeln!(f, "- **Macro plan**: {plan_id}")?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?; // Add blank line after each schedule

        Ok(())
    }
}

impl fmt::Display for MacroPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Macro Plan {} ({})", self.plan_id, self.user_id)?;
        writeln!(f)?;
        writeln!(f, "- Status: {}", self.status)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;
        writeln!(f, "{}", self.macro_plan)?;
        Ok(())
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = match self.day {
            Some(day) => format!(" ({day})"),
            None => String::new(),
        };
        writeln!(f, "### {}{day}", self.schedule_id)?;
        writeln!(f)?;

        if let Some(rating) = self.rating {
            writeln!(f, "- Rating: {rating}/5")?;
        }
        writeln!(f, "- Recorded: {}", LocalDateTime(&self.created_at))?;

        if !self.comments.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.comments)?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Stats for {}", self.user_id)?;
        writeln!(f)?;
        writeln!(f, "- Profile: {}", if self.has_profile { "yes" } else { "no" })?;
        writeln!(f, "- Schedules: {}", self.total_schedules)?;
        writeln!(f, "- Feedback entries: {}", self.total_feedback)?;
        Ok(())
    }
}
