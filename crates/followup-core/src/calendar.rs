//! Calendar arithmetic relative to a reference ("day 0") instant.
//!
//! Day `N` of a schedule falls on the local date of the anchor advanced by
//! `N - 1` days. All wall-clock conversions go through the editor's time zone.

use jiff::{
    Timestamp, ToSpan, Zoned,
    civil::{Date, Time},
    tz::TimeZone,
};

use crate::error::{DateResultExt, Result};

/// Local calendar date of day `day` (1-based) counted from the anchor.
pub fn day_date(anchor: &Zoned, day: u32) -> Result<Date> {
    let offset = i64::from(day) - 1;
    anchor
        .date()
        .checked_add(offset.days())
        .date_context("advancing anchor date")
}

/// Day number (1-based) of a local date counted from the anchor.
///
/// Dates on or before the anchor's date map to day 1.
pub fn day_number(anchor: &Zoned, date: Date) -> Result<u32> {
    let days = anchor
        .date()
        .until(date)
        .date_context("measuring distance from anchor date")?
        .get_days();
    Ok(u32::try_from(days).map_or(1, |d| d + 1))
}

/// Instant at which `date` reaches `time` in the given zone.
pub fn at_time_of_day(date: Date, time: Time, tz: &TimeZone) -> Result<Timestamp> {
    date.to_datetime(time)
        .to_zoned(tz.clone())
        .map(|zoned| zoned.timestamp())
        .date_context("resolving local time")
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use super::*;

    fn anchor() -> Zoned {
        "2024-03-04T15:20:00Z"
            .parse::<Timestamp>()
            .unwrap()
            .to_zoned(TimeZone::UTC)
    }

    #[test]
    fn test_day_one_is_anchor_date() {
        assert_eq!(day_date(&anchor(), 1).unwrap(), date(2024, 3, 4));
        assert_eq!(day_date(&anchor(), 3).unwrap(), date(2024, 3, 6));
    }

    #[test]
    fn test_day_number_inverts_day_date() {
        let anchor = anchor();
        for day in [1, 2, 9, 31] {
            let d = day_date(&anchor, day).unwrap();
            assert_eq!(day_number(&anchor, d).unwrap(), day);
        }
        assert_eq!(day_number(&anchor, date(2024, 3, 1)).unwrap(), 1);
    }

    #[test]
    fn test_at_time_of_day_in_fixed_zone() {
        let tz = TimeZone::fixed(jiff::tz::offset(2));
        let at = at_time_of_day(date(2024, 3, 4), time(9, 0, 0, 0), &tz).unwrap();
        assert_eq!(at.to_string(), "2024-03-04T07:00:00Z");
    }
}
