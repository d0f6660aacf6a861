//! Date ranges and week alignment
//!
//! The visible window of every calendar view is an inclusive [`DateRange`];
//! all membership and overlap checks compare date portions only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::KontorError;
use crate::types::event::CalendarEvent;

/// Inclusive date span (both endpoints belong to the range).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Builds a range, swapping the endpoints when they arrive inverted.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if end < start {
            Self { start: end, end: start }
        } else {
            Self { start, end }
        }
    }

    /// Single-day range (the day view window).
    #[must_use]
    pub const fn single(date: NaiveDate) -> Self {
        Self { start: date, end: date }
    }

    /// Inclusive membership test.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether an event's `[start, end]` span intersects this range.
    ///
    /// An event without an end is treated as ending at its start. Touching a
    /// boundary counts as overlap on both sides.
    #[must_use]
    pub fn overlaps_event(&self, event: &CalendarEvent) -> bool {
        let event_start = event.start_date.date();
        let event_end = event.end_date.map_or(event_start, |end| end.date());
        event_end >= self.start && event_start <= self.end
    }

    /// Iterates every date in the range, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date <= end)
    }

    /// Number of dates in the range (always >= 1).
    #[must_use]
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// First day of the week for grid alignment.
///
/// Serializes as `0` (Sunday) or `1` (Monday), matching the stored
/// preference format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WeekStart {
    Sunday,
    #[default]
    Monday,
}

impl From<WeekStart> for u8 {
    fn from(week_start: WeekStart) -> Self {
        match week_start {
            WeekStart::Sunday => 0,
            WeekStart::Monday => 1,
        }
    }
}

impl TryFrom<u8> for WeekStart {
    type Error = KontorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Sunday),
            1 => Ok(Self::Monday),
            other => Err(KontorError::InvalidInput(format!(
                "weekStartsOn must be 0 or 1, got {other}"
            ))),
        }
    }
}
