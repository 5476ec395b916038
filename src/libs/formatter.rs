//! Display formatting helpers.
//!
//! Small pure functions shared by the table views and notification
//! bodies. Timestamps render as local "YYYY-MM-DD HH:MM"; durations as
//! "HH:MM" with negatives clamped to zero.

use chrono::{DateTime, Duration, Local};

/// Formats a duration as "HH:MM". Negative durations render as "00:00".
pub fn format_duration(duration: &Duration) -> String {
    let total_minutes = duration.num_minutes().max(0);
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Formats an optional local timestamp, with a dash for "never".
pub fn format_optional_timestamp(timestamp: &Option<DateTime<Local>>) -> String {
    match timestamp {
        Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}

/// Formats a cycle progress percentage, with a dash when unknown.
pub fn format_progress(progress: Option<u8>) -> String {
    match progress {
        Some(percent) => format!("{}%", percent),
        None => "-".to_string(),
    }
}
