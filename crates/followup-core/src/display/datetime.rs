//! DateTime display utilities.
//!
//! Wrapper types that format timestamps in the editor's time zone rather
//! than UTC.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

/// A timestamp formatted as `YYYY-MM-DD HH:MM TZ` in a given zone.
pub struct LocalDateTime<'a>(pub &'a Timestamp, pub &'a TimeZone);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0.to_zoned(self.1.clone()).strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}

/// A timestamp formatted as `HH:MM` in a given zone.
pub struct LocalTime<'a>(pub &'a Timestamp, pub &'a TimeZone);

impl fmt::Display for LocalTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_zoned(self.1.clone()).strftime("%H:%M"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_time_uses_zone() {
        let ts: Timestamp = "2024-03-04T07:05:00Z".parse().unwrap();
        let tz = TimeZone::fixed(jiff::tz::offset(2));
        assert_eq!(LocalTime(&ts, &tz).to_string(), "09:05");
        assert!(LocalDateTime(&ts, &TimeZone::UTC).to_string().starts_with("2024-03-04 07:05"));
    }
}
