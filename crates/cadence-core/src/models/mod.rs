//! Data models for schedules, macro plans, and user records.
//!
//! This module contains the core domain models of the Cadence schedule
//! store. Display implementations for these models are located in
//! [`crate::display::models`] to maintain clean separation of concerns
//! between data structures and presentation logic.
//!
//! The central type is [`ScheduleRecord`], the persisted document for one
//! user and one planning cycle. Its weekly maps ([`MicroPlan`] and
//! [`WeekAvailability`]) carry exactly the seven canonical weekday keys by
//! construction, and [`ScheduleRecord::from_json`] /
//! [`ScheduleRecord::to_json`] round-trip any well-formed document.

pub mod availability;
pub mod created_at;
pub mod feedback;
pub mod macro_plan;
pub mod profile;
pub mod schedule;
pub mod session;
pub mod status;
pub mod summary;
pub mod weekday;


// Re-export all public types at the models level
pub use availability::Availability;
pub use created_at::CreatedAt;
pub use feedback::Feedback;
pub use macro_plan::MacroPlan;
pub use profile::{UserProfile, UserStats};
pub use schedule::{MicroPlan, ScheduleRecord, WeekAvailability};
pub use session::{Session, SessionType};
pub use status::{MacroPlanStatus, ScheduleStatus};
pub use summary::ScheduleSummary;
pub use weekday::Weekday;
