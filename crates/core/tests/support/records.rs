//! Source-record fixtures for calendar pipeline tests.
//!
//! The builders take explicit ids so assertions can name the derived event
//! ids; [`july_batch`] assembles the standing scenario used across the
//! integration tests: mid-July 2025, "now" pinned to the 15th at noon.

use chrono::{NaiveDate, NaiveDateTime};
use kontor_domain::{
    AgentActivity, AgentStatus, CronJob, ExternalEvent, ExternalProvider, Invoice, InvoiceStatus,
    PostStatus, Project, ProjectStatus, SocialPost, SourceBatch, Task, TaskStatus, TimeEntry,
};

pub fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The pinned "now" every pipeline test runs against.
pub fn test_now() -> NaiveDateTime {
    dt(2025, 7, 15, 12, 0)
}

pub fn task(id: &str, due: Option<NaiveDate>, status: TaskStatus) -> Task {
    Task {
        id: id.to_string(),
        title: format!("Task {id}"),
        description: None,
        status,
        priority: None,
        due_date: due,
        estimated_minutes: None,
        area: None,
        project_id: None,
        client_id: None,
    }
}

pub fn time_entry(id: &str, start: NaiveDateTime, end: Option<NaiveDateTime>) -> TimeEntry {
    TimeEntry {
        id: id.to_string(),
        description: Some(format!("Entry {id}")),
        category: None,
        started_at: start,
        ended_at: end,
        duration_minutes: None,
        project_id: None,
        client_id: None,
    }
}

pub fn project(
    id: &str,
    name: &str,
    span: (Option<NaiveDate>, Option<NaiveDate>),
    status: ProjectStatus,
) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        status,
        start_date: span.0,
        end_date: span.1,
        area: None,
        client_id: None,
        color: None,
    }
}

pub fn invoice(id: &str, number: &str, due: Option<NaiveDate>, status: InvoiceStatus) -> Invoice {
    Invoice {
        id: id.to_string(),
        number: number.to_string(),
        client_id: Some("client-acme".to_string()),
        amount_cents: 250_000,
        status,
        issued_on: due.and_then(|d| d.checked_sub_days(chrono::Days::new(14))),
        due_date: due,
    }
}

pub fn social_post(
    id: &str,
    scheduled_at: Option<NaiveDateTime>,
    status: PostStatus,
) -> SocialPost {
    SocialPost {
        id: id.to_string(),
        content: format!("Post {id}"),
        platform: Some("mastodon".to_string()),
        status,
        scheduled_at,
    }
}

pub fn cron_job(id: &str, enabled: bool, next_run_at: Option<NaiveDateTime>) -> CronJob {
    CronJob {
        id: id.to_string(),
        name: format!("Job {id}"),
        schedule: "0 3 * * *".to_string(),
        enabled,
        next_run_at,
    }
}

pub fn agent_activity(
    id: &str,
    start: NaiveDateTime,
    end: Option<NaiveDateTime>,
    status: AgentStatus,
) -> AgentActivity {
    AgentActivity {
        id: id.to_string(),
        agent_name: "Scout".to_string(),
        summary: format!("session {id}"),
        status,
        started_at: start,
        ended_at: end,
    }
}

pub fn external_event(
    id: &str,
    provider: ExternalProvider,
    start: NaiveDateTime,
    end: Option<NaiveDateTime>,
    all_day: bool,
) -> ExternalEvent {
    ExternalEvent {
        id: id.to_string(),
        title: format!("External {id}"),
        description: None,
        provider,
        starts_at: start,
        ends_at: end,
        all_day,
    }
}

/// One plausible freelancer month, seen from 2025-07-15 12:00.
///
/// Contains, deliberately: a finished task, an overdue task, a task due
/// today, an undated task (never placed), three time entries on the 15th
/// (two overlapping, one still running), an active project spanning the
/// month, a completed project entirely before the window, an overdue
/// invoice, a cancelled invoice (never placed), and one record of every
/// feed.
pub fn july_batch() -> SourceBatch {
    SourceBatch {
        tasks: vec![
            task("logo", Some(date(2025, 7, 10)), TaskStatus::Done),
            task("pitch", Some(date(2025, 7, 14)), TaskStatus::InProgress),
            Task {
                estimated_minutes: Some(60),
                ..task("billing", Some(date(2025, 7, 15)), TaskStatus::Todo)
            },
            task("someday", None, TaskStatus::Todo),
        ],
        time_entries: vec![
            time_entry("morning", dt(2025, 7, 15, 9, 0), Some(dt(2025, 7, 15, 10, 30))),
            time_entry("overlap", dt(2025, 7, 15, 9, 45), Some(dt(2025, 7, 15, 10, 15))),
            time_entry("running", dt(2025, 7, 15, 11, 0), None),
        ],
        projects: vec![
            project(
                "website",
                "Website relaunch",
                (Some(date(2025, 7, 1)), Some(date(2025, 7, 25))),
                ProjectStatus::Active,
            ),
            project(
                "legacy",
                "Legacy migration",
                (Some(date(2025, 5, 1)), Some(date(2025, 6, 20))),
                ProjectStatus::Completed,
            ),
        ],
        invoices: vec![
            invoice("007", "2025-007", Some(date(2025, 7, 12)), InvoiceStatus::Sent),
            invoice("008", "2025-008", Some(date(2025, 7, 20)), InvoiceStatus::Cancelled),
        ],
        social_posts: vec![social_post(
            "launch",
            Some(dt(2025, 7, 16, 9, 30)),
            PostStatus::Scheduled,
        )],
        cron_jobs: vec![cron_job("backup", true, Some(dt(2025, 7, 16, 3, 0)))],
        agent_activities: vec![agent_activity(
            "scout",
            dt(2025, 7, 15, 8, 0),
            Some(dt(2025, 7, 15, 8, 40)),
            AgentStatus::Done,
        )],
        external_events: vec![external_event(
            "dentist",
            ExternalProvider::ICloud,
            dt(2025, 7, 17, 14, 0),
            Some(dt(2025, 7, 17, 15, 0)),
            false,
        )],
    }
}
