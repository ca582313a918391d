//! Display formatting functions and result types.
//!
//! This module provides wrapper types for operation results and collections,
//! enabling consistent markdown formatting across different output contexts
//! (lists, operations, etc.).
//!
//! The Display architecture combines direct Display implementations on domain
//! models with newtype wrappers for collections and operation results.
//! Business logic stays in [`crate::models`]; presentation lives here.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (ScheduleSummaries, FeedbackEntries)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{FeedbackEntries, ScheduleSummaries};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
