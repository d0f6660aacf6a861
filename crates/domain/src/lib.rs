//! # Kontor Domain
//!
//! Business domain types and models for Kontor.
//!
//! This crate contains:
//! - Source record types (Task, TimeEntry, Project, Invoice, activity streams)
//! - The normalized `CalendarEvent` the calendar views consume
//! - View preferences, filters, and their update patches
//! - Domain error types and Result definitions
//! - Domain constants and pure value utilities
//!
//! ## Architecture
//! - No dependencies on other Kontor crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
