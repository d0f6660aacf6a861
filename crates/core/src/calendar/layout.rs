//! Column layout for overlapping timed events
//!
//! The day and week grids render concurrent events side by side. Each timed
//! event gets a column index and the width of its overlap group; groups are
//! found with a single sweep over start-sorted events, carrying the group's
//! latest end as a watermark. Touching endpoints do not overlap, so
//! back-to-back bookings stay full width.

use chrono::{NaiveDate, NaiveDateTime};
use kontor_domain::CalendarEvent;
use serde::Serialize;

/// A laid-out timed event: the column it renders in and how many columns
/// its overlap group spans.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSlot<'a> {
    #[serde(flatten)]
    pub event: &'a CalendarEvent,
    /// Zero-based column within the overlap group, in arrival order.
    pub column: usize,
    /// Total columns the group needs; every member agrees on this.
    pub columns: usize,
}

/// Assigns columns to the timed events in the input.
///
/// All-day events are skipped; they render in the header lane and never
/// compete for grid width. Events are grouped transitively: an event joins
/// the open group while its start lies strictly before the group's
/// watermark (the latest [`CalendarEvent::effective_end`] seen so far).
/// Output order is by start time, id as tiebreak.
#[must_use]
pub fn assign_columns<'a, I>(events: I) -> Vec<ColumnSlot<'a>>
where
    I: IntoIterator<Item = &'a CalendarEvent>,
{
    let mut timed: Vec<&CalendarEvent> =
        events.into_iter().filter(|event| !event.is_all_day).collect();
    timed.sort_by(|a, b| a.start_date.cmp(&b.start_date).then_with(|| a.id.cmp(&b.id)));

    let mut slots: Vec<ColumnSlot<'a>> = Vec::with_capacity(timed.len());
    let mut group_start = 0usize;
    let mut watermark: Option<NaiveDateTime> = None;

    for event in timed {
        match watermark {
            Some(end) if event.start_date < end => {
                let column = slots.len() - group_start;
                slots.push(ColumnSlot { event, column, columns: 0 });
                watermark = Some(end.max(event.effective_end()));
            }
            _ => {
                close_group(&mut slots, group_start);
                group_start = slots.len();
                slots.push(ColumnSlot { event, column: 0, columns: 0 });
                watermark = Some(event.effective_end());
            }
        }
    }
    close_group(&mut slots, group_start);
    slots
}

/// Column layout for one day of the grid.
#[must_use]
pub fn day_columns<'a>(events: &'a [CalendarEvent], date: NaiveDate) -> Vec<ColumnSlot<'a>> {
    assign_columns(events.iter().filter(|event| event.occurs_on(date)))
}

fn close_group(slots: &mut [ColumnSlot<'_>], group_start: usize) {
    let size = slots.len() - group_start;
    for slot in &mut slots[group_start..] {
        slot.columns = size;
    }
}
