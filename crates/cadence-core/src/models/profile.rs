//! User profile model: free-form profile data with bookkeeping stamps.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A user's profile document.
///
/// The profile body is produced externally (intake questionnaire) and
/// stored verbatim as JSON; this crate only keys and timestamps it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Opaque identifier of the user
    pub user_id: String,

    /// The profile body, stored verbatim
    pub profile: serde_json::Value,

    /// Timestamp when the profile was first saved (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the profile was last updated (UTC)
    pub last_updated: Timestamp,
}

/// Basic statistics about the data stored for one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserStats {
    /// Opaque identifier of the user
    pub user_id: String,

    /// Whether a profile document exists
    pub has_profile: bool,

    /// Number of stored schedules
    pub total_schedules: u32,

    /// Number of stored feedback entries
    pub total_feedback: u32,
}
