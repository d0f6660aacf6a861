//! Event querying: filtering, ordering, grouping, aggregation
//!
//! Pure functions over normalized event slices. The service composes them
//! into the view pipeline; callers can also use them directly for one-off
//! lookups.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use kontor_domain::{CalendarEvent, CalendarFilters, DateRange, EventSource};

/// Whether the event survives every active filter.
///
/// Allowlists (`areas`, `projects`) only restrict when non-empty, and an
/// event without the corresponding field never matches a non-empty
/// allowlist.
#[must_use]
pub fn passes_filters(event: &CalendarEvent, filters: &CalendarFilters) -> bool {
    if !filters.sources.contains(&event.source) {
        return false;
    }
    if !filters.show_completed && event.is_completed {
        return false;
    }
    let quick_toggle = match event.source {
        EventSource::TimeEntry => filters.show_time_entries,
        EventSource::SocialPost => filters.show_social_posts,
        EventSource::CronJob => filters.show_cron_jobs,
        EventSource::AgentActivity => filters.show_agent_activity,
        _ => true,
    };
    if !quick_toggle {
        return false;
    }
    if !filters.areas.is_empty()
        && !event.area.as_ref().is_some_and(|area| filters.areas.contains(area))
    {
        return false;
    }
    if !filters.projects.is_empty()
        && !event.project_id.as_ref().is_some_and(|id| filters.projects.contains(id))
    {
        return false;
    }
    true
}

/// Applies [`passes_filters`] over a slice, preserving order.
#[must_use]
pub fn filter_events(events: &[CalendarEvent], filters: &CalendarFilters) -> Vec<CalendarEvent> {
    events.iter().filter(|event| passes_filters(event, filters)).cloned().collect()
}

/// Display order: all-day events first, then start time, then longer
/// duration first (through [`CalendarEvent::effective_duration_minutes`],
/// so ranges with only an end timestamp sort by their real length).
///
/// [`sorted_by_time`] uses a stable sort, so full ties keep their incoming
/// normalization order.
#[must_use]
pub fn compare_events(a: &CalendarEvent, b: &CalendarEvent) -> Ordering {
    b.is_all_day
        .cmp(&a.is_all_day)
        .then_with(|| a.start_date.cmp(&b.start_date))
        .then_with(|| b.effective_duration_minutes().cmp(&a.effective_duration_minutes()))
}

/// Sorts events into display order.
#[must_use]
pub fn sorted_by_time(mut events: Vec<CalendarEvent>) -> Vec<CalendarEvent> {
    events.sort_by(compare_events);
    events
}

/// Events visible on one day, in display order. Multi-day spans show up on
/// every day they touch.
#[must_use]
pub fn events_for_date(events: &[CalendarEvent], date: NaiveDate) -> Vec<CalendarEvent> {
    sorted_by_time(events.iter().filter(|event| event.occurs_on(date)).cloned().collect())
}

/// Groups events under the day they start; each bucket comes back in
/// display order. A multi-day span lands only under its start day, so the
/// map partitions its input; per-day occupancy goes through
/// [`events_for_date`].
#[must_use]
pub fn group_by_date(events: &[CalendarEvent]) -> BTreeMap<NaiveDate, Vec<CalendarEvent>> {
    let mut by_date: BTreeMap<NaiveDate, Vec<CalendarEvent>> = BTreeMap::new();
    for event in events {
        by_date.entry(event.start_date.date()).or_default().push(event.clone());
    }
    for bucket in by_date.values_mut() {
        bucket.sort_by(compare_events);
    }
    by_date
}

/// Keeps events with an endpoint (start, or stored end) inside the range.
///
/// A span reaching past both edges is dropped even though it overlaps;
/// callers that need true intersection use [`DateRange::overlaps_event`].
#[must_use]
pub fn clip_to_range(events: &[CalendarEvent], range: DateRange) -> Vec<CalendarEvent> {
    events
        .iter()
        .filter(|event| {
            range.contains(event.start_date.date())
                || event.end_date.is_some_and(|end| range.contains(end.date()))
        })
        .cloned()
        .collect()
}

/// Sums planned workload per day inside the range, keyed by each event's
/// start date. Days without planned minutes are omitted.
#[must_use]
pub fn workload_by_date(events: &[CalendarEvent], range: DateRange) -> BTreeMap<NaiveDate, i64> {
    let mut workload = BTreeMap::new();
    for event in events {
        let Some(minutes) = event.workload_minutes else { continue };
        let day = event.start_date.date();
        if range.contains(day) {
            *workload.entry(day).or_insert(0) += minutes;
        }
    }
    workload
}
