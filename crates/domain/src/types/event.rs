//! Normalized calendar event model
//!
//! Every record the calendar shows (a task deadline, a tracked time block, a
//! project milestone, an invoice due date, a scheduled post, an agent work
//! session, an external calendar entry) is converted into one canonical
//! [`CalendarEvent`] shape. Events are rebuilt from scratch on every
//! normalization pass; there is no identity beyond the derived id and no
//! update-in-place semantics.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EVENT_DURATION_MINUTES, FULL_OPACITY};

// ============================================================================
// Enums
// ============================================================================

/// The originating domain entity type an event was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSource {
    Task,
    TimeEntry,
    Project,
    Invoice,
    SocialPost,
    /// External events synced from an iCloud calendar.
    #[serde(rename = "icloud")]
    ICloud,
    CronJob,
    AgentActivity,
    /// External events from the native calendar store.
    CalendarEvent,
}

impl EventSource {
    /// All sources, in normalization order.
    #[must_use]
    pub const fn all() -> [Self; 9] {
        [
            Self::Task,
            Self::TimeEntry,
            Self::Project,
            Self::Invoice,
            Self::SocialPost,
            Self::ICloud,
            Self::CronJob,
            Self::AgentActivity,
            Self::CalendarEvent,
        ]
    }
}

/// How an event renders on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// All-day marker for something due on a date (tasks, invoices).
    Deadline,
    /// Timed block with a measured duration (time entries).
    TimeBlock,
    /// All-day project start/end marker.
    Milestone,
    /// Timed one-off appointment (social posts, external timed events).
    Scheduled,
    /// All-day external event.
    AllDay,
    /// Multi-day span (project running range).
    Range,
    /// Next firing of a recurring job.
    Recurring,
    /// Simulated office agent work session.
    AgentWork,
}

/// Priority carried over from the source record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

// ============================================================================
// CalendarEvent
// ============================================================================

fn default_opacity() -> f32 {
    FULL_OPACITY
}

/// The canonical, source-agnostic representation of anything placed on the
/// calendar.
///
/// Field names serialize in camelCase for the view layer; `kind` serializes
/// as `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Derived deterministically from source type and source record id
    /// (e.g. `cal-task-<taskId>`); stable across re-normalization runs.
    pub id: String,
    /// The originating record's identifier.
    pub source_id: String,
    pub source: EventSource,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Timezone-naive; all-day events start at midnight.
    pub start_date: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub is_all_day: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Rendering opacity; completed work fades to 0.5.
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Source status string carried over verbatim (`"done"`, `"running"`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub is_overdue: bool,
    /// True for a time entry or agent session still in progress.
    #[serde(default)]
    pub is_running: bool,
    /// Planned capacity in minutes (tasks only); feeds the workload heatmap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload_minutes: Option<i64>,
}

impl CalendarEvent {
    /// Creates an event with neutral defaults; callers layer the optional
    /// fields on top with the `with_*` builders.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        source: EventSource,
        kind: EventKind,
        title: impl Into<String>,
        start_date: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            source_id: String::new(),
            source,
            kind,
            title: title.into(),
            description: None,
            start_date,
            end_date: None,
            is_all_day: false,
            duration_minutes: None,
            color: None,
            icon: None,
            opacity: FULL_OPACITY,
            area: None,
            project_id: None,
            client_id: None,
            priority: None,
            status: None,
            is_completed: false,
            is_overdue: false,
            is_running: false,
            workload_minutes: None,
        }
    }

    #[must_use]
    pub fn with_source_id(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = source_id.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn with_end(mut self, end_date: NaiveDateTime) -> Self {
        self.end_date = Some(end_date);
        self
    }

    #[must_use]
    pub const fn all_day(mut self) -> Self {
        self.is_all_day = true;
        self
    }

    #[must_use]
    pub const fn with_duration(mut self, minutes: i64) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    #[must_use]
    pub fn with_appearance(mut self, color: impl Into<String>, icon: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    #[must_use]
    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    #[must_use]
    pub fn with_client(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub const fn completed(mut self, completed: bool) -> Self {
        self.is_completed = completed;
        self
    }

    #[must_use]
    pub const fn overdue(mut self, overdue: bool) -> Self {
        self.is_overdue = overdue;
        self
    }

    #[must_use]
    pub const fn running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    #[must_use]
    pub const fn with_workload(mut self, minutes: i64) -> Self {
        self.workload_minutes = Some(minutes);
        self
    }

    // ========================================================================
    // Derived values
    // ========================================================================

    /// The end timestamp layout and clipping work with: the stored end, else
    /// the start plus the stored duration, else the start plus the default
    /// event duration.
    #[must_use]
    pub fn effective_end(&self) -> NaiveDateTime {
        self.end_date.unwrap_or_else(|| {
            let minutes = self.duration_minutes.unwrap_or(DEFAULT_EVENT_DURATION_MINUTES);
            self.start_date + Duration::minutes(minutes)
        })
    }

    /// Duration in minutes: stored value first, else derived from the end
    /// timestamp, else 0.
    #[must_use]
    pub fn effective_duration_minutes(&self) -> i64 {
        self.duration_minutes
            .or_else(|| self.end_date.map(|end| (end - self.start_date).num_minutes()))
            .unwrap_or(0)
    }

    /// Whether the event belongs on the given date: its start falls on that
    /// date, or the date lies within its `[start, end]` span.
    #[must_use]
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        if self.start_date.date() == date {
            return true;
        }
        self.end_date
            .is_some_and(|end| self.start_date.date() <= date && date <= end.date())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    fn timed_event(start: NaiveDateTime) -> CalendarEvent {
        CalendarEvent::new("cal-test-1", EventSource::Task, EventKind::Scheduled, "Test", start)
    }

    #[test]
    fn effective_end_prefers_stored_end() {
        let event = timed_event(dt(2025, 7, 15, 9, 0)).with_end(dt(2025, 7, 15, 11, 0));
        assert_eq!(event.effective_end(), dt(2025, 7, 15, 11, 0));
    }

    #[test]
    fn effective_end_falls_back_to_duration_then_default() {
        let with_duration = timed_event(dt(2025, 7, 15, 9, 0)).with_duration(45);
        assert_eq!(with_duration.effective_end(), dt(2025, 7, 15, 9, 45));

        let bare = timed_event(dt(2025, 7, 15, 9, 0));
        assert_eq!(bare.effective_end(), dt(2025, 7, 15, 9, 30));
    }

    #[test]
    fn effective_duration_derives_from_end_when_not_stored() {
        let event = timed_event(dt(2025, 7, 15, 9, 0)).with_end(dt(2025, 7, 15, 10, 30));
        assert_eq!(event.effective_duration_minutes(), 90);

        let bare = timed_event(dt(2025, 7, 15, 9, 0));
        assert_eq!(bare.effective_duration_minutes(), 0);
    }

    #[test]
    fn occurs_on_covers_multi_day_spans() {
        let event = timed_event(dt(2025, 7, 10, 0, 0)).with_end(dt(2025, 7, 12, 0, 0));
        assert!(event.occurs_on(NaiveDate::from_ymd_opt(2025, 7, 10).unwrap()));
        assert!(event.occurs_on(NaiveDate::from_ymd_opt(2025, 7, 11).unwrap()));
        assert!(event.occurs_on(NaiveDate::from_ymd_opt(2025, 7, 12).unwrap()));
        assert!(!event.occurs_on(NaiveDate::from_ymd_opt(2025, 7, 13).unwrap()));
    }

    #[test]
    fn occurs_on_without_end_matches_start_date_only() {
        let event = timed_event(dt(2025, 7, 10, 14, 0));
        assert!(event.occurs_on(NaiveDate::from_ymd_opt(2025, 7, 10).unwrap()));
        assert!(!event.occurs_on(NaiveDate::from_ymd_opt(2025, 7, 11).unwrap()));
    }

    #[test]
    fn source_tags_match_wire_format() {
        let icloud = serde_json::to_string(&EventSource::ICloud).unwrap();
        assert_eq!(icloud, "\"icloud\"");
        let native = serde_json::to_string(&EventSource::CalendarEvent).unwrap();
        assert_eq!(native, "\"calendar_event\"");
    }

    #[test]
    fn event_serializes_kind_as_type_in_camel_case() {
        let event = timed_event(dt(2025, 7, 15, 9, 0)).with_source_id("t1");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "scheduled");
        assert_eq!(json["sourceId"], "t1");
        assert_eq!(json["startDate"], "2025-07-15T09:00:00");
        assert!(json.get("endDate").is_none());
    }
}
