//! Domain types and models
//!
//! Source records come in per business area (tasks, time tracking, projects,
//! invoicing, activity streams); the calendar engine turns them into the
//! normalized [`CalendarEvent`] defined in [`event`].

pub mod event;
pub mod invoice;
pub mod preferences;
pub mod project;
pub mod range;
pub mod streams;
pub mod task;
pub mod time_entry;

// Re-export the types the rest of the workspace touches constantly
pub use event::{CalendarEvent, EventKind, EventSource, Priority};
pub use invoice::{Invoice, InvoiceStatus};
pub use preferences::{
    CalendarFilters, CalendarPreferences, FilterUpdate, PreferenceUpdate, ViewMode,
};
pub use project::{Project, ProjectStatus};
pub use range::{DateRange, WeekStart};
pub use streams::{
    AgentActivity, AgentStatus, CronJob, ExternalEvent, ExternalProvider, LoadState, PostStatus,
    SocialPost, SourceBatch,
};
pub use task::{Task, TaskStatus};
pub use time_entry::TimeEntry;
