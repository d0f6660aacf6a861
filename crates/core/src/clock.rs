//! Time source abstraction
//!
//! The engine never reads the wall clock directly; everything that needs the
//! current time goes through [`Clock`], so tests and the office simulation's
//! replays can pin it.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of "now" for the calendar engine.
pub trait Clock: Send + Sync {
    /// Current local date and time, timezone-naive.
    fn now(&self) -> NaiveDateTime;

    /// Current local date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Wall clock in the user's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct MockClock {
    now: NaiveDateTime,
}

impl MockClock {
    /// Creates a clock frozen at the given instant.
    #[must_use]
    pub const fn at(now: NaiveDateTime) -> Self {
        Self { now }
    }
}

impl Clock for MockClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}
