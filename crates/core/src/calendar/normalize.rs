//! Source-record normalization
//!
//! Maps every supported record type into zero or more [`CalendarEvent`]s,
//! deterministically. Records that cannot be placed (no due date, disabled
//! job, cancelled invoice) are dropped silently; the views only ever see the
//! normalized stream. Batch normalization processes sources in a fixed
//! order: tasks, time entries, projects, then the remaining feeds.

use chrono::{NaiveDateTime, NaiveTime};
use kontor_domain::constants::{
    AGENT_ACTIVITY_COLOR, AGENT_ACTIVITY_ICON, COMPLETED_OPACITY, CRON_JOB_COLOR, CRON_JOB_ICON,
    DEFAULT_TASK_WORKLOAD_MINUTES, EVENT_ID_AGENT_PREFIX, EVENT_ID_CRON_PREFIX,
    EVENT_ID_EXTERNAL_PREFIX, EVENT_ID_INVOICE_PREFIX, EVENT_ID_PROJECT_PREFIX,
    EVENT_ID_SOCIAL_PREFIX, EVENT_ID_TASK_PREFIX, EVENT_ID_TIME_ENTRY_PREFIX,
    EXTERNAL_EVENT_COLOR, EXTERNAL_EVENT_ICON, FULL_OPACITY, INVOICE_COLOR, INVOICE_ICON,
    PROJECT_COLOR, PROJECT_EVENT_END_SUFFIX, PROJECT_EVENT_RANGE_SUFFIX,
    PROJECT_EVENT_START_SUFFIX, PROJECT_ICON, PROJECT_RANGE_OPACITY, SOCIAL_POST_COLOR,
    SOCIAL_POST_ICON, TASK_COLOR, TASK_ICON, TIME_ENTRY_COLOR, TIME_ENTRY_FALLBACK_TITLE,
    TIME_ENTRY_ICON,
};
use kontor_domain::{
    AgentActivity, AgentStatus, CalendarEvent, CronJob, EventKind, EventSource, ExternalEvent,
    ExternalProvider, Invoice, InvoiceStatus, PostStatus, Project, SocialPost, SourceBatch, Task,
    TimeEntry,
};
use tracing::trace;

use crate::calendar::range::is_overdue;

/// Normalization fallbacks.
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    /// Workload assumed for tasks without an estimate (default: 30 minutes).
    pub default_task_workload_minutes: i64,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self { default_task_workload_minutes: DEFAULT_TASK_WORKLOAD_MINUTES }
    }
}

/// Converts source records into calendar events.
#[derive(Debug, Clone, Default)]
pub struct EventNormalizer {
    config: NormalizerConfig,
}

impl EventNormalizer {
    #[must_use]
    pub const fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Normalizes one batch snapshot against the given instant.
    ///
    /// Sources are processed in a fixed order (tasks, time entries,
    /// projects, invoices, social posts, cron jobs, agent activity,
    /// external events), order-preserving within each collection. That is
    /// the only ordering guarantee before explicit sorting.
    #[must_use]
    pub fn normalize(&self, batch: &SourceBatch, now: NaiveDateTime) -> Vec<CalendarEvent> {
        let mut events = Vec::new();
        events.extend(batch.tasks.iter().filter_map(|task| self.task_event(task, now)));
        events.extend(batch.time_entries.iter().map(|entry| self.time_entry_event(entry, now)));
        for project in &batch.projects {
            events.extend(self.project_events(project, now));
        }
        events.extend(batch.invoices.iter().filter_map(|inv| self.invoice_event(inv, now)));
        events.extend(batch.social_posts.iter().filter_map(|post| self.social_post_event(post)));
        events.extend(batch.cron_jobs.iter().filter_map(|job| self.cron_job_event(job)));
        events.extend(
            batch.agent_activities.iter().map(|activity| self.agent_activity_event(activity, now)),
        );
        events.extend(batch.external_events.iter().map(|event| self.external_event(event)));
        events
    }

    /// A task becomes an all-day deadline on its due date; tasks without a
    /// due date have no place on a calendar and are skipped.
    #[must_use]
    pub fn task_event(&self, task: &Task, now: NaiveDateTime) -> Option<CalendarEvent> {
        let Some(due) = task.due_date else {
            trace!(task_id = %task.id, "task has no due date, skipping");
            return None;
        };
        let completed = task.status.is_done();
        let overdue = is_overdue(Some(due), completed, now.date());
        let workload =
            task.estimated_minutes.unwrap_or(self.config.default_task_workload_minutes);

        Some(CalendarEvent {
            id: format!("{EVENT_ID_TASK_PREFIX}{}", task.id),
            source_id: task.id.clone(),
            source: EventSource::Task,
            kind: EventKind::Deadline,
            title: task.title.clone(),
            description: task.description.clone(),
            start_date: due.and_time(NaiveTime::MIN),
            end_date: None,
            is_all_day: true,
            duration_minutes: None,
            color: Some(TASK_COLOR.to_string()),
            icon: Some(TASK_ICON.to_string()),
            opacity: if completed { COMPLETED_OPACITY } else { FULL_OPACITY },
            area: task.area.clone(),
            project_id: task.project_id.clone(),
            client_id: task.client_id.clone(),
            priority: task.priority,
            status: Some(task.status.as_str().to_string()),
            is_completed: completed,
            is_overdue: overdue,
            is_running: false,
            workload_minutes: Some(workload),
        })
    }

    /// Every time entry is emitted. Duration: stored value, else the
    /// timestamp difference, else measured up to `now` for a running entry;
    /// never negative.
    #[must_use]
    pub fn time_entry_event(&self, entry: &TimeEntry, now: NaiveDateTime) -> CalendarEvent {
        let running = entry.ended_at.is_none();
        let duration = entry
            .duration_minutes
            .or_else(|| entry.ended_at.map(|end| (end - entry.started_at).num_minutes()))
            .unwrap_or_else(|| (now - entry.started_at).num_minutes())
            .max(0);
        let title = entry
            .description
            .clone()
            .or_else(|| entry.category.as_ref().map(|category| format!("{category} time")))
            .unwrap_or_else(|| TIME_ENTRY_FALLBACK_TITLE.to_string());

        CalendarEvent {
            id: format!("{EVENT_ID_TIME_ENTRY_PREFIX}{}", entry.id),
            source_id: entry.id.clone(),
            source: EventSource::TimeEntry,
            kind: EventKind::TimeBlock,
            title,
            description: None,
            start_date: entry.started_at,
            end_date: entry.ended_at,
            is_all_day: false,
            duration_minutes: Some(duration),
            color: Some(TIME_ENTRY_COLOR.to_string()),
            icon: Some(TIME_ENTRY_ICON.to_string()),
            opacity: FULL_OPACITY,
            area: None,
            project_id: entry.project_id.clone(),
            client_id: entry.client_id.clone(),
            priority: None,
            status: Some(if running { "running" } else { "completed" }.to_string()),
            is_completed: false,
            is_overdue: false,
            is_running: running,
            workload_minutes: None,
        }
    }

    /// A project yields up to three events: a start milestone, an end
    /// milestone (subject to the overdue rule), and a running range when
    /// both dates are present.
    #[must_use]
    pub fn project_events(&self, project: &Project, now: NaiveDateTime) -> Vec<CalendarEvent> {
        let completed = project.status.is_completed();
        let color = project.color.clone().unwrap_or_else(|| PROJECT_COLOR.to_string());
        let milestone_opacity = if completed { COMPLETED_OPACITY } else { FULL_OPACITY };
        let mut events = Vec::with_capacity(3);

        let base = |id: String, kind: EventKind, start: NaiveDateTime| CalendarEvent {
            id,
            source_id: project.id.clone(),
            source: EventSource::Project,
            kind,
            title: project.name.clone(),
            description: None,
            start_date: start,
            end_date: None,
            is_all_day: true,
            duration_minutes: None,
            color: Some(color.clone()),
            icon: Some(PROJECT_ICON.to_string()),
            opacity: milestone_opacity,
            area: project.area.clone(),
            project_id: Some(project.id.clone()),
            client_id: project.client_id.clone(),
            priority: None,
            status: Some(project.status.as_str().to_string()),
            is_completed: completed,
            is_overdue: false,
            is_running: false,
            workload_minutes: None,
        };

        if let Some(start) = project.start_date {
            let id = format!("{EVENT_ID_PROJECT_PREFIX}{}{PROJECT_EVENT_START_SUFFIX}", project.id);
            let mut event = base(id, EventKind::Milestone, start.and_time(NaiveTime::MIN));
            event.description = Some("Project start".to_string());
            events.push(event);
        }

        if let Some(end) = project.end_date {
            let id = format!("{EVENT_ID_PROJECT_PREFIX}{}{PROJECT_EVENT_END_SUFFIX}", project.id);
            let mut event = base(id, EventKind::Milestone, end.and_time(NaiveTime::MIN));
            event.description = Some("Project deadline".to_string());
            event.is_overdue = is_overdue(Some(end), completed, now.date());
            events.push(event);
        }

        if let (Some(start), Some(end)) = (project.start_date, project.end_date) {
            let id = format!("{EVENT_ID_PROJECT_PREFIX}{}{PROJECT_EVENT_RANGE_SUFFIX}", project.id);
            let mut event = base(id, EventKind::Range, start.and_time(NaiveTime::MIN));
            event.end_date = Some(end.and_time(NaiveTime::MIN));
            event.opacity = if completed { COMPLETED_OPACITY } else { PROJECT_RANGE_OPACITY };
            events.push(event);
        }

        events
    }

    /// An invoice becomes an all-day deadline on its due date. Cancelled
    /// invoices and invoices without a due date are skipped.
    #[must_use]
    pub fn invoice_event(&self, invoice: &Invoice, now: NaiveDateTime) -> Option<CalendarEvent> {
        if invoice.status == InvoiceStatus::Cancelled {
            trace!(invoice_id = %invoice.id, "invoice cancelled, skipping");
            return None;
        }
        let Some(due) = invoice.due_date else {
            trace!(invoice_id = %invoice.id, "invoice has no due date, skipping");
            return None;
        };
        let completed = invoice.status.is_paid();
        let overdue = is_overdue(Some(due), completed, now.date());

        Some(CalendarEvent {
            id: format!("{EVENT_ID_INVOICE_PREFIX}{}", invoice.id),
            source_id: invoice.id.clone(),
            source: EventSource::Invoice,
            kind: EventKind::Deadline,
            title: format!("Invoice {} due", invoice.number),
            description: None,
            start_date: due.and_time(NaiveTime::MIN),
            end_date: None,
            is_all_day: true,
            duration_minutes: None,
            color: Some(INVOICE_COLOR.to_string()),
            icon: Some(INVOICE_ICON.to_string()),
            opacity: if completed { COMPLETED_OPACITY } else { FULL_OPACITY },
            area: None,
            project_id: None,
            client_id: invoice.client_id.clone(),
            priority: None,
            status: Some(invoice.status.as_str().to_string()),
            is_completed: completed,
            is_overdue: overdue,
            is_running: false,
            workload_minutes: None,
        })
    }

    /// A social post appears at its scheduled minute; unscheduled drafts
    /// are skipped.
    #[must_use]
    pub fn social_post_event(&self, post: &SocialPost) -> Option<CalendarEvent> {
        let Some(scheduled_at) = post.scheduled_at else {
            trace!(post_id = %post.id, "social post not scheduled, skipping");
            return None;
        };
        let completed = post.status == PostStatus::Published;

        Some(CalendarEvent {
            id: format!("{EVENT_ID_SOCIAL_PREFIX}{}", post.id),
            source_id: post.id.clone(),
            source: EventSource::SocialPost,
            kind: EventKind::Scheduled,
            title: post.content.clone(),
            description: post.platform.clone(),
            start_date: scheduled_at,
            end_date: None,
            is_all_day: false,
            duration_minutes: None,
            color: Some(SOCIAL_POST_COLOR.to_string()),
            icon: Some(SOCIAL_POST_ICON.to_string()),
            opacity: if completed { COMPLETED_OPACITY } else { FULL_OPACITY },
            area: None,
            project_id: None,
            client_id: None,
            priority: None,
            status: Some(post.status.as_str().to_string()),
            is_completed: completed,
            is_overdue: false,
            is_running: false,
            workload_minutes: None,
        })
    }

    /// An enabled cron job shows its next firing; disabled jobs and jobs
    /// without a computed next run are skipped.
    #[must_use]
    pub fn cron_job_event(&self, job: &CronJob) -> Option<CalendarEvent> {
        if !job.enabled {
            trace!(job_id = %job.id, "cron job disabled, skipping");
            return None;
        }
        let Some(next_run_at) = job.next_run_at else {
            trace!(job_id = %job.id, "cron job has no next run, skipping");
            return None;
        };

        Some(CalendarEvent {
            id: format!("{EVENT_ID_CRON_PREFIX}{}", job.id),
            source_id: job.id.clone(),
            source: EventSource::CronJob,
            kind: EventKind::Recurring,
            title: job.name.clone(),
            description: Some(job.schedule.clone()),
            start_date: next_run_at,
            end_date: None,
            is_all_day: false,
            duration_minutes: None,
            color: Some(CRON_JOB_COLOR.to_string()),
            icon: Some(CRON_JOB_ICON.to_string()),
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
        })
    }

    /// An agent session is always emitted; duration semantics match time
    /// entries (a session without an end is running and measured up to
    /// `now`).
    #[must_use]
    pub fn agent_activity_event(
        &self,
        activity: &AgentActivity,
        now: NaiveDateTime,
    ) -> CalendarEvent {
        let running = activity.ended_at.is_none();
        let completed = activity.status == AgentStatus::Done;
        let duration = activity
            .ended_at
            .map_or_else(|| now - activity.started_at, |end| end - activity.started_at)
            .num_minutes()
            .max(0);

        CalendarEvent {
            id: format!("{EVENT_ID_AGENT_PREFIX}{}", activity.id),
            source_id: activity.id.clone(),
            source: EventSource::AgentActivity,
            kind: EventKind::AgentWork,
            title: format!("{}: {}", activity.agent_name, activity.summary),
            description: None,
            start_date: activity.started_at,
            end_date: activity.ended_at,
            is_all_day: false,
            duration_minutes: Some(duration),
            color: Some(AGENT_ACTIVITY_COLOR.to_string()),
            icon: Some(AGENT_ACTIVITY_ICON.to_string()),
            opacity: if completed { COMPLETED_OPACITY } else { FULL_OPACITY },
            area: None,
            project_id: None,
            client_id: None,
            priority: None,
            status: Some(activity.status.as_str().to_string()),
            is_completed: completed,
            is_overdue: false,
            is_running: running,
            workload_minutes: None,
        }
    }

    /// External events pass through nearly unchanged; the provider decides
    /// the source tag.
    #[must_use]
    pub fn external_event(&self, event: &ExternalEvent) -> CalendarEvent {
        let source = match event.provider {
            ExternalProvider::ICloud => EventSource::ICloud,
            ExternalProvider::Native => EventSource::CalendarEvent,
        };
        let kind = if event.all_day { EventKind::AllDay } else { EventKind::Scheduled };
        let duration = if event.all_day {
            None
        } else {
            event.ends_at.map(|end| (end - event.starts_at).num_minutes())
        };

        CalendarEvent {
            id: format!("{EVENT_ID_EXTERNAL_PREFIX}{}", event.id),
            source_id: event.id.clone(),
            source,
            kind,
            title: event.title.clone(),
            description: event.description.clone(),
            start_date: event.starts_at,
            end_date: event.ends_at,
            is_all_day: event.all_day,
            duration_minutes: duration,
            color: Some(EXTERNAL_EVENT_COLOR.to_string()),
            icon: Some(EXTERNAL_EVENT_ICON.to_string()),
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
}
