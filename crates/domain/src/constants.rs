//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! calendar engine. Normalization defaults live here so that the normalizer,
//! the layout pass, and the preference defaults agree on the same numbers.

// Normalization defaults
pub const DEFAULT_EVENT_DURATION_MINUTES: i64 = 30;
pub const DEFAULT_TASK_WORKLOAD_MINUTES: i64 = 30;

// Opacity levels applied by the normalizer
pub const FULL_OPACITY: f32 = 1.0;
pub const COMPLETED_OPACITY: f32 = 0.5;
pub const PROJECT_RANGE_OPACITY: f32 = 0.8;

// View configuration defaults
pub const DEFAULT_WORKING_HOURS_START: u32 = 8;
pub const DEFAULT_WORKING_HOURS_END: u32 = 18;
pub const AGENDA_WINDOW_DAYS: u64 = 14;

// Normalized event id prefixes (keep ids unique across sources)
pub const EVENT_ID_TASK_PREFIX: &str = "cal-task-";
pub const EVENT_ID_TIME_ENTRY_PREFIX: &str = "cal-time-";
pub const EVENT_ID_PROJECT_PREFIX: &str = "cal-project-";
pub const EVENT_ID_INVOICE_PREFIX: &str = "cal-invoice-";
pub const EVENT_ID_SOCIAL_PREFIX: &str = "cal-social-";
pub const EVENT_ID_CRON_PREFIX: &str = "cal-cron-";
pub const EVENT_ID_AGENT_PREFIX: &str = "cal-agent-";
pub const EVENT_ID_EXTERNAL_PREFIX: &str = "cal-ext-";

// Project event id suffixes
pub const PROJECT_EVENT_START_SUFFIX: &str = "-start";
pub const PROJECT_EVENT_END_SUFFIX: &str = "-end";
pub const PROJECT_EVENT_RANGE_SUFFIX: &str = "-range";

// Per-source presentation hints applied by the normalizer
pub const TASK_COLOR: &str = "#f59e0b";
pub const TASK_ICON: &str = "check-circle";
pub const TIME_ENTRY_COLOR: &str = "#10b981";
pub const TIME_ENTRY_ICON: &str = "timer";
pub const PROJECT_COLOR: &str = "#6366f1";
pub const PROJECT_ICON: &str = "folder";
pub const INVOICE_COLOR: &str = "#ef4444";
pub const INVOICE_ICON: &str = "receipt";
pub const SOCIAL_POST_COLOR: &str = "#8b5cf6";
pub const SOCIAL_POST_ICON: &str = "megaphone";
pub const CRON_JOB_COLOR: &str = "#64748b";
pub const CRON_JOB_ICON: &str = "repeat";
pub const AGENT_ACTIVITY_COLOR: &str = "#0ea5e9";
pub const AGENT_ACTIVITY_ICON: &str = "bot";
pub const EXTERNAL_EVENT_COLOR: &str = "#94a3b8";
pub const EXTERNAL_EVENT_ICON: &str = "calendar";

// Fallback title for time entries with neither description nor category
pub const TIME_ENTRY_FALLBACK_TITLE: &str = "Tracked time";
