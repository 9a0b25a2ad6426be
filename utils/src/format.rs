//! Time and size formatting.
//!
//! # Design
//! `format_time` is a token-substitution formatter over `YYYY MM DD HH mm
//! ss`, matching the wire format used by fixture timestamps. Relative time
//! buckets elapsed milliseconds with fixed ratios (30-day months, 365-day
//! years) — approximate on purpose, not calendar-aware.

use chrono::{Datelike, Local, NaiveDateTime, Timelike};

/// The wire/default timestamp layout.
pub const DEFAULT_TIME_FORMAT: &str = "YYYY-MM-DD HH:mm:ss";

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const MONTH_MS: i64 = 30 * DAY_MS;
const YEAR_MS: i64 = 365 * DAY_MS;

/// Parse a wire timestamp (`2024-01-15 10:30:00`). `None` on malformed input.
pub fn parse_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").ok()
}

/// Substitute `YYYY`, `MM`, `DD`, `HH`, `mm`, `ss` tokens with zero-padded
/// date components. Empty string when there is no date.
pub fn format_time(time: Option<NaiveDateTime>, format: &str) -> String {
    let Some(date) = time else {
        return String::new();
    };
    format
        .replace("YYYY", &format!("{:04}", date.year()))
        .replace("MM", &format!("{:02}", date.month()))
        .replace("DD", &format!("{:02}", date.day()))
        .replace("HH", &format!("{:02}", date.hour()))
        .replace("mm", &format!("{:02}", date.minute()))
        .replace("ss", &format!("{:02}", date.second()))
}

/// Bucket the elapsed time between `time` and `now` into a human string:
/// "just now", minutes, hours, days, months, years. Sub-minute gaps and
/// future timestamps both read "just now".
pub fn relative_time(time: NaiveDateTime, now: NaiveDateTime) -> String {
    let diff = (now - time).num_milliseconds();
    if diff < MINUTE_MS {
        "just now".to_string()
    } else if diff < HOUR_MS {
        ago(diff / MINUTE_MS, "minute")
    } else if diff < DAY_MS {
        ago(diff / HOUR_MS, "hour")
    } else if diff < MONTH_MS {
        ago(diff / DAY_MS, "day")
    } else if diff < YEAR_MS {
        ago(diff / MONTH_MS, "month")
    } else {
        ago(diff / YEAR_MS, "year")
    }
}

/// `relative_time` against the local clock.
pub fn get_relative_time(time: NaiveDateTime) -> String {
    relative_time(time, Local::now().naive_local())
}

fn ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Format a byte count by repeated division by 1024 across B/KB/MB/GB/TB,
/// one decimal place, capped at TB.
pub fn format_file_size(size: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    if size == 0 {
        return "0 B".to_string();
    }
    let mut value = size as f64;
    let mut index = 0;
    while value >= 1024.0 && index < UNITS.len() - 1 {
        value /= 1024.0;
        index += 1;
    }
    format!("{value:.1} {}", UNITS[index])
}
