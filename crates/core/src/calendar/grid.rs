//! Time grid positioning for the day and week views
//!
//! The vertical axis of the time grid covers the configured working hours.
//! Positions and heights are percentages of that axis, clamped so events
//! outside the window pin to its edges instead of escaping the grid.

use chrono::{NaiveTime, Timelike};

/// Vertical position of a time as a percent of the working-hours axis.
///
/// Linear in hours since midnight, clamped to `0..=100`. A degenerate
/// configuration (`work_end <= work_start`) pins everything to 0.
#[must_use]
pub fn time_position(time: NaiveTime, work_start: u32, work_end: u32) -> f64 {
    let span_hours = f64::from(work_end.saturating_sub(work_start));
    if span_hours <= 0.0 {
        return 0.0;
    }
    let hour = f64::from(time.hour()) + f64::from(time.minute()) / 60.0;
    let percent = (hour - f64::from(work_start)) / span_hours * 100.0;
    percent.clamp(0.0, 100.0)
}

/// Height of a block as a percent of the working-hours axis, clamped to
/// `0..=100`.
#[must_use]
pub fn time_block_height(duration_minutes: i64, work_start: u32, work_end: u32) -> f64 {
    let span_minutes = f64::from(work_end.saturating_sub(work_start)) * 60.0;
    if span_minutes <= 0.0 {
        return 0.0;
    }
    let percent = duration_minutes as f64 / span_minutes * 100.0;
    percent.clamp(0.0, 100.0)
}

/// Hour labels for the grid gutter: `"HH:00"` for each whole hour in
/// `[work_start, work_end)`.
#[must_use]
pub fn hour_slots(work_start: u32, work_end: u32) -> Vec<String> {
    (work_start..work_end).map(|hour| format!("{hour:02}:00")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn position_is_linear_within_working_hours() {
        assert!((time_position(time(9, 0), 9, 17) - 0.0).abs() < f64::EPSILON);
        assert!((time_position(time(13, 0), 9, 17) - 50.0).abs() < f64::EPSILON);
        assert!((time_position(time(17, 0), 9, 17) - 100.0).abs() < f64::EPSILON);
        assert!((time_position(time(9, 30), 9, 17) - 6.25).abs() < 1e-9);
    }

    #[test]
    fn position_clamps_outside_the_window() {
        assert!((time_position(time(7, 0), 9, 17) - 0.0).abs() < f64::EPSILON);
        assert!((time_position(time(22, 30), 9, 17) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn degenerate_working_hours_pin_to_zero() {
        assert!((time_position(time(12, 0), 17, 9) - 0.0).abs() < f64::EPSILON);
        assert!((time_block_height(60, 9, 9) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn block_height_is_duration_over_working_minutes() {
        // 60 minutes out of an 8 hour day
        assert!((time_block_height(60, 8, 16) - 12.5).abs() < 1e-9);
        // Oversized and negative durations clamp
        assert!((time_block_height(10_000, 8, 16) - 100.0).abs() < f64::EPSILON);
        assert!((time_block_height(-30, 8, 16) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn hour_slots_cover_start_inclusive_end_exclusive() {
        let slots = hour_slots(8, 18);
        assert_eq!(slots.len(), 10);
        assert_eq!(slots[0], "08:00");
        assert_eq!(slots[9], "17:00");

        assert!(hour_slots(17, 9).is_empty());
    }
}
