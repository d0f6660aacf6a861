//! Activity stream records and the batch container
//!
//! Everything here is a feed the calendar merely mirrors: scheduled social
//! posts, automation runs, simulated office agents, and events synced from
//! external calendars. [`SourceBatch`] bundles one fetch snapshot of every
//! collection; [`LoadState`] tracks which collections have reported in.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::types::invoice::Invoice;
use crate::types::project::Project;
use crate::types::task::Task;
use crate::types::time_entry::TimeEntry;

// ============================================================================
// Social posts
// ============================================================================

/// Publication state of a social post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    Draft,
    Scheduled,
    Published,
}

impl PostStatus {
    /// Wire tag, also carried onto normalized events verbatim.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Scheduled => "scheduled",
            Self::Published => "published",
        }
    }
}

/// A social media post; only scheduled ones reach the calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPost {
    pub id: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    pub status: PostStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<NaiveDateTime>,
}

// ============================================================================
// Cron jobs
// ============================================================================

/// A recurring automation job; the calendar shows the next firing only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CronJob {
    pub id: String,
    pub name: String,
    /// Cron expression, shown verbatim in the event description.
    pub schedule: String,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_run_at: Option<NaiveDateTime>,
}

// ============================================================================
// Office agents
// ============================================================================

/// State of a simulated office agent session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    Working,
    Done,
}

impl AgentStatus {
    /// Wire tag, also carried onto normalized events verbatim.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Working => "working",
            Self::Done => "done",
        }
    }
}

/// One work session of a simulated office agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentActivity {
    pub id: String,
    pub agent_name: String,
    pub summary: String,
    pub status: AgentStatus,
    pub started_at: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<NaiveDateTime>,
}

// ============================================================================
// External calendars
// ============================================================================

/// Which external calendar an event was synced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalProvider {
    #[serde(rename = "icloud")]
    ICloud,
    Native,
}

/// An event synced from an external calendar, passed through nearly as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalEvent {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub provider: ExternalProvider,
    pub starts_at: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub all_day: bool,
}

// ============================================================================
// Batch container
// ============================================================================

/// One snapshot of every source collection, in normalization order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceBatch {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub time_entries: Vec<TimeEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    #[serde(default)]
    pub social_posts: Vec<SocialPost>,
    #[serde(default)]
    pub cron_jobs: Vec<CronJob>,
    #[serde(default)]
    pub agent_activities: Vec<AgentActivity>,
    #[serde(default)]
    pub external_events: Vec<ExternalEvent>,
}

/// Which source collections have finished loading. The aggregate view stays
/// in its loading state until every flag is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadState {
    #[serde(default)]
    pub tasks: bool,
    #[serde(default)]
    pub time_entries: bool,
    #[serde(default)]
    pub projects: bool,
    #[serde(default)]
    pub invoices: bool,
    #[serde(default)]
    pub social_posts: bool,
    #[serde(default)]
    pub cron_jobs: bool,
    #[serde(default)]
    pub agent_activities: bool,
    #[serde(default)]
    pub external_events: bool,
}

impl LoadState {
    /// Every collection loaded; what tests and warm restarts start from.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            tasks: true,
            time_entries: true,
            projects: true,
            invoices: true,
            social_posts: true,
            cron_jobs: true,
            agent_activities: true,
            external_events: true,
        }
    }

    #[must_use]
    pub const fn all_loaded(self) -> bool {
        self.tasks
            && self.time_entries
            && self.projects
            && self.invoices
            && self.social_posts
            && self.cron_jobs
            && self.agent_activities
            && self.external_events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_state_requires_every_collection() {
        assert!(LoadState::all().all_loaded());
        assert!(!LoadState::default().all_loaded());

        let missing_one = LoadState { cron_jobs: false, ..LoadState::all() };
        assert!(!missing_one.all_loaded());
    }

    #[test]
    fn external_provider_uses_icloud_tag() {
        let json = serde_json::to_string(&ExternalProvider::ICloud).unwrap();
        assert_eq!(json, "\"icloud\"");
    }
}
