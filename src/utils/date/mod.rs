// Date utility functions
// Formatting of the timestamps the main application publishes

use chrono::{NaiveDate, NaiveDateTime};

/// Placeholder shown when no clock time is available.
pub const NO_TIME: &str = "--:--";

const ISO_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse an ISO-8601 local timestamp (`YYYY-MM-DDTHH:MM:SS[.fff]`).
pub fn parse_local_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), ISO_LOCAL_FORMAT).ok()
}

/// `HH:MM` of a published timestamp, or `--:--` when absent or unreadable.
pub fn format_clock_time(value: Option<&str>) -> String {
    match value.map(|v| (v, parse_local_timestamp(v))) {
        Some((_, Some(timestamp))) => timestamp.format("%H:%M").to_string(),
        Some((raw, None)) => {
            log::warn!("Unparsable clock timestamp '{}'", raw);
            NO_TIME.to_string()
        }
        None => NO_TIME.to_string(),
    }
}

/// Calendar header such as `Mar 2024`.
pub fn month_header(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}
