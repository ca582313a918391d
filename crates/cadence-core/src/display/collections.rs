//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{Feedback, ScheduleSummary};

/// Newtype wrapper for displaying collections of schedule summaries.
///
/// This provides clean Display formatting for schedule collections without
/// title handling, allowing consumers to handle titles separately. Handles
/// empty collections gracefully.
pub struct ScheduleSummaries(pub Vec<ScheduleSummary>);

impl ScheduleSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the summary at the given index.
    pub fn get(&self, index: usize) -> Option<&ScheduleSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleSummary> {
        self.0.iter()
    }
}

impl Index<usize> for ScheduleSummaries {
    type Output = ScheduleSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for ScheduleSummaries {
    type Item = ScheduleSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ScheduleSummaries {
    type Item = &'a ScheduleSummary;
    type IntoIter = std::slice::Iter<'a, ScheduleSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ScheduleSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No schedules found.")
        } else {
            for summary in &self.0 {
                write!(f, "{}", summary)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of feedback entries.
///
/// Formats each entry using the Feedback Display trait and handles empty
/// collections gracefully.
pub struct FeedbackEntries(pub Vec<Feedback>);

impl FeedbackEntries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of entries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the entry at the given index.
    pub fn get(&self, index: usize) -> Option<&Feedback> {
        self.0.get(index)
    }

    /// Get an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, Feedback> {
        self.0.iter()
    }
}

impl Index<usize> for FeedbackEntries {
    type Output = Feedback;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for FeedbackEntries {
    type Item = Feedback;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FeedbackEntries {
    type Item = &'a Feedback;
    type IntoIter = std::slice::Iter<'a, Feedback>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for FeedbackEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No feedback recorded.")
        } else {
            for entry in &self.0 {
                write!(f, "{}", entry)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::ScheduleStatus;

    fn create_test_summary() -> ScheduleSummary {
        ScheduleSummary {
            user_id: "cf4caba2".to_string(),
            schedule_id: "week_20250605_165340".to_string(),
            status: ScheduleStatus::Draft,
            created_at: Timestamp::from_second(1749142420).unwrap(),
            macro_plan_id: None,
            session_days: 3,
            rest_days: 4,
        }
    }

    fn create_test_feedback() -> Feedback {
        Feedback {
            user_id: "cf4caba2".to_string(),
            schedule_id: "week_20250605_165340".to_string(),
            day: Some(crate::models::Weekday::Monday),
            rating: Some(4),
            comments: "Felt strong on the bench".to_string(),
            created_at: Timestamp::from_second(1749142420).unwrap(),
        }
    }

    #[test]
    fn test_schedule_summaries_display() {
        let summaries = ScheduleSummaries(vec![create_test_summary()]);
        let output = format!("{}", summaries);
        assert!(output.contains("week_20250605_165340"));
        assert!(output.contains("3 sessions"));
        assert!(output.contains("4 rest days"));

        let empty = ScheduleSummaries(vec![]);
        assert_eq!(format!("{}", empty), "No schedules found.\n");

        let mut second = create_test_summary();
        second.schedule_id = "week_20250612_080000".to_string();
        second.status = ScheduleStatus::Active;
        let summaries = ScheduleSummaries(vec![create_test_summary(), second]);
        let output = format!("{}", summaries);
        assert!(output.contains("week_20250605_165340"));
        assert!(output.contains("week_20250612_080000"));
        assert!(output.contains("[active]"));
        // Each entry formats with its own ## header, no outer title
        assert!(output.contains("## week_20250605_165340"));
        assert!(!output.starts_with("# "));
    }

    #[test]
    fn test_feedback_entries_display_empty() {
        let entries = FeedbackEntries(vec![]);
        assert_eq!(format!("{}", entries), "No feedback recorded.\n");
    }

    #[test]
    fn test_feedback_entries_display() {
        let entries = FeedbackEntries(vec![create_test_feedback()]);
        let output = format!("{}", entries);
        assert!(output.contains("week_20250605_165340"));
        assert!(output.contains("(Monday)"));
        assert!(output.contains("Rating: 4/5"));
        assert!(output.contains("Felt strong on the bench"));
    }
}
