//! Display helpers for estimated durations.

/// Render seconds as `m:ss`, rounded to the nearest second.
///
/// Negative and non-finite values render as `0:00`. Minutes are not wrapped
/// into hours.
pub fn format_duration(seconds: f64) -> String {
    let total = whole_seconds(seconds);
    format!("{}:{:02}", total / 60, total % 60)
}

/// Render seconds as a rounded-up minute label, e.g. `11 min`.
pub fn format_minutes(seconds: f64) -> String {
    let total = whole_seconds(seconds);
    format!("{} min", total.div_ceil(60))
}

fn whole_seconds(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds.round() as u64
    } else {
        0
    }
}
