//! Keystroke-level validation and time-of-day normalization.
//!
//! Editor inputs arrive as free text. Anything that fails these checks is
//! dropped without an error, leaving the edited value untouched.

use std::sync::LazyLock;

use jiff::{
    Zoned,
    civil::{Time, time},
};
use regex::Regex;

/// Time assigned to tasks created by growing a channel.
pub const DEFAULT_TIME: &str = "09:00";

/// Upper bound on tasks per channel and day.
pub const MAX_TASKS_PER_CHANNEL: usize = 50;

/// Upper bound on day numbers, roughly ten years of follow-ups.
pub const MAX_DAY_NUMBER: u32 = 3650;

static COUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("count pattern is valid"));

static PARTIAL_TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{0,2}:?\d{0,2}$").expect("partial time pattern is valid"));

static HOUR_PREFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{0,2}$").expect("hour prefix pattern is valid"));

static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{1,2})$").expect("time pattern is valid"));

/// Parses a task count. Empty input counts as zero.
pub fn parse_count(input: &str) -> Option<usize> {
    if input.is_empty() {
        return Some(0);
    }
    if !COUNT_PATTERN.is_match(input) {
        return None;
    }
    input
        .parse::<usize>()
        .ok()
        .filter(|count| *count <= MAX_TASKS_PER_CHANNEL)
}

/// Parses a pending day number.
///
/// Returns `Some(None)` for empty input (keep the original number),
/// `Some(Some(n))` for a valid number and `None` when the input is rejected.
pub fn parse_day_number(input: &str) -> Option<Option<u32>> {
    if input.is_empty() {
        return Some(None);
    }
    if !COUNT_PATTERN.is_match(input) {
        return None;
    }
    match input.parse::<u32>() {
        Ok(day) if (1..=MAX_DAY_NUMBER).contains(&day) => Some(Some(day)),
        _ => None,
    }
}

/// Whether `input` is an acceptable, possibly incomplete, `HH:MM` entry.
pub fn is_time_fragment(input: &str) -> bool {
    PARTIAL_TIME_PATTERN.is_match(input) || HOUR_PREFIX_PATTERN.is_match(input)
}

/// Parses a complete `H:MM` / `HH:MM` time of day.
pub fn parse_time_of_day(input: &str) -> Option<Time> {
    let caps = TIME_PATTERN.captures(input)?;
    let hour: i8 = caps[1].parse().ok()?;
    let minute: i8 = caps[2].parse().ok()?;
    Time::new(hour, minute, 0, 0).ok()
}

/// Parses a time of day, falling back to 09:00.
pub fn time_or_default(input: &str) -> Time {
    parse_time_of_day(input).unwrap_or(time(9, 0, 0, 0))
}

/// Zero-padded `HH:MM` of a zoned instant.
pub fn format_time_of_day(zoned: &Zoned) -> String {
    format!("{:02}:{:02}", zoned.hour(), zoned.minute())
}
