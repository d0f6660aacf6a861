//! # Kontor Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The calendar engine: normalization, filtering, grid math, layout,
//!   view state, and aggregation
//! - The clock seam the engine reads time through
//!
//! ## Architecture Principles
//! - Only depends on `kontor-domain`
//! - No database, HTTP, or platform code
//! - Pure, testable business logic; the host shell owns all I/O

pub mod calendar;
pub mod clock;

// Re-export specific items to avoid ambiguity
pub use calendar::layout::{assign_columns, day_columns, ColumnSlot};
pub use calendar::normalize::{EventNormalizer, NormalizerConfig};
pub use calendar::service::{CalendarService, CalendarView};
pub use calendar::store::CalendarViewState;
pub use clock::{Clock, MockClock, SystemClock};
