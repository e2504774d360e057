use chrono::{Local, NaiveDateTime};

/// Layout of the `date` stamped onto leaderboard entries.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a wall-clock time as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(DATE_FORMAT).to_string()
}

/// Current server local time as `YYYY-MM-DD HH:MM:SS`.
pub fn timestamp_now() -> String {
    format_timestamp(Local::now().naive_local())
}
