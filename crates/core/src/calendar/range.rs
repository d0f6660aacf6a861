//! Date and grid math for the calendar views
//!
//! Everything here is pure: given a reference date, a view mode, and the
//! configured week start, these functions produce the grids and windows the
//! views render. Month grids are always whole weeks (28 to 42 cells), week
//! strips are exactly 7 days, and the agenda looks two weeks ahead.

use chrono::{Datelike, Days, Months, NaiveDate};
use kontor_domain::constants::AGENDA_WINDOW_DAYS;
use kontor_domain::{DateRange, ViewMode, WeekStart};

/// First day of the week containing `date`, per the configured week start.
#[must_use]
pub fn start_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let days_back = match week_start {
        WeekStart::Sunday => date.weekday().num_days_from_sunday(),
        WeekStart::Monday => date.weekday().num_days_from_monday(),
    };
    date.checked_sub_days(Days::new(u64::from(days_back))).unwrap_or(date)
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let first = date.with_day(1).unwrap_or(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.checked_sub_days(Days::new(1)))
        .unwrap_or(date)
}

/// All cells of the month grid containing `date`: consecutive dates from the
/// week of the 1st through the week of the month's last day.
///
/// The result length is always a multiple of 7 between 28 and 42.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use kontor_core::calendar::range::month_grid_dates;
/// use kontor_domain::WeekStart;
///
/// let date = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
/// let grid = month_grid_dates(date, WeekStart::Monday);
/// assert_eq!(grid[0], NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
/// assert_eq!(grid.len() % 7, 0);
/// ```
#[must_use]
pub fn month_grid_dates(date: NaiveDate, week_start: WeekStart) -> Vec<NaiveDate> {
    let first_of_month = date.with_day(1).unwrap_or(date);
    let grid_start = start_of_week(first_of_month, week_start);
    let last_of_month = last_day_of_month(date);
    let grid_end = start_of_week(last_of_month, week_start)
        .checked_add_days(Days::new(6))
        .unwrap_or(last_of_month);

    grid_start.iter_days().take_while(|day| *day <= grid_end).collect()
}

/// The 7 consecutive dates of the week containing `date`.
#[must_use]
pub fn week_dates(date: NaiveDate, week_start: WeekStart) -> Vec<NaiveDate> {
    start_of_week(date, week_start).iter_days().take(7).collect()
}

/// The inclusive window a view renders for the given date and mode.
#[must_use]
pub fn visible_range(date: NaiveDate, mode: ViewMode, week_start: WeekStart) -> DateRange {
    match mode {
        ViewMode::Month => {
            let grid = month_grid_dates(date, week_start);
            match (grid.first(), grid.last()) {
                (Some(first), Some(last)) => DateRange::new(*first, *last),
                _ => DateRange::single(date),
            }
        }
        ViewMode::Week => {
            let start = start_of_week(date, week_start);
            let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
            DateRange::new(start, end)
        }
        ViewMode::Day => DateRange::single(date),
        ViewMode::Agenda => {
            let end = date.checked_add_days(Days::new(AGENDA_WINDOW_DAYS - 1)).unwrap_or(date);
            DateRange::new(date, end)
        }
    }
}

/// One navigation step forward: a calendar month, a week, a day, or an
/// agenda window depending on the mode. Month steps clamp the day of month
/// (Jan 31 lands on Feb 28).
#[must_use]
pub fn navigate_forward(date: NaiveDate, mode: ViewMode) -> NaiveDate {
    match mode {
        ViewMode::Month => date.checked_add_months(Months::new(1)).unwrap_or(date),
        ViewMode::Week => date.checked_add_days(Days::new(7)).unwrap_or(date),
        ViewMode::Day => date.checked_add_days(Days::new(1)).unwrap_or(date),
        ViewMode::Agenda => date.checked_add_days(Days::new(AGENDA_WINDOW_DAYS)).unwrap_or(date),
    }
}

/// One navigation step backward; mirror of [`navigate_forward`].
#[must_use]
pub fn navigate_backward(date: NaiveDate, mode: ViewMode) -> NaiveDate {
    match mode {
        ViewMode::Month => date.checked_sub_months(Months::new(1)).unwrap_or(date),
        ViewMode::Week => date.checked_sub_days(Days::new(7)).unwrap_or(date),
        ViewMode::Day => date.checked_sub_days(Days::new(1)).unwrap_or(date),
        ViewMode::Agenda => date.checked_sub_days(Days::new(AGENDA_WINDOW_DAYS)).unwrap_or(date),
    }
}

/// Whether something due on `due_date` counts as overdue right now.
///
/// Completed items are never overdue, and neither is anything due today;
/// only a due date strictly before the current day qualifies.
#[must_use]
pub fn is_overdue(due_date: Option<NaiveDate>, completed: bool, today: NaiveDate) -> bool {
    if completed {
        return false;
    }
    due_date.is_some_and(|due| due < today)
}

/// ISO-8601 week number (1 to 53).
#[must_use]
pub fn week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}
