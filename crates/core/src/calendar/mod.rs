//! Calendar engine
//!
//! The pipeline the views consume: normalize source records into events,
//! filter them, clip them to the visible window, sort, group, and lay out
//! overlapping blocks on the time grid. [`store`] holds the view state the
//! pipeline is parameterized by; [`service`] composes the stages.

pub mod grid;
pub mod layout;
pub mod normalize;
pub mod query;
pub mod range;
pub mod service;
pub mod store;

pub use layout::{assign_columns, day_columns, ColumnSlot};
pub use normalize::{EventNormalizer, NormalizerConfig};
pub use service::{CalendarService, CalendarView};
pub use store::CalendarViewState;
