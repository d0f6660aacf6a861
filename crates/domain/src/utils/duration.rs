//! Human-readable duration formatting
//!
//! The calendar labels event durations and workload sums in whole minutes;
//! these helpers render them the way the views display them.

/// Formats a minute count as hours and minutes, omitting zero components.
///
/// Zero and negative inputs render as `"0m"`.
///
/// # Examples
///
/// ```
/// use kontor_domain::utils::duration::format_duration;
///
/// assert_eq!(format_duration(90), "1h 30m");
/// assert_eq!(format_duration(60), "1h");
/// assert_eq!(format_duration(30), "30m");
/// ```
#[must_use]
pub fn format_duration(minutes: i64) -> String {
    if minutes <= 0 {
        return "0m".to_string();
    }

    let hours = minutes / 60;
    let rest = minutes % 60;

    match (hours, rest) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Formats a minute count as decimal hours for compact workload labels.
///
/// Whole hours drop the fraction digit.
///
/// # Examples
///
/// ```
/// use kontor_domain::utils::duration::format_hours;
///
/// assert_eq!(format_hours(90), "1.5h");
/// assert_eq!(format_hours(120), "2h");
/// ```
#[must_use]
pub fn format_hours(minutes: i64) -> String {
    let minutes = minutes.max(0);
    if minutes % 60 == 0 {
        return format!("{}h", minutes / 60);
    }
    let hours = minutes as f64 / 60.0;
    format!("{hours:.1}h")
}
