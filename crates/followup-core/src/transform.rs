//! Conversion of suggested touchpoints into a day-bucketed schedule.

use std::collections::BTreeMap;

use jiff::{RoundMode, Timestamp, TimestampRound, ToSpan, Unit, tz::TimeZone};

use crate::{
    calendar,
    editor::input::MAX_DAY_NUMBER,
    error::{DateResultExt, Result, ScheduleError},
    models::{ScheduleDay, Task, Touchpoint},
};

/// Groups touchpoints into schedule days relative to the end of a call.
///
/// Each touchpoint is placed at `call_end + offset_hours` (missing offsets
/// mean "right away"), truncated to the minute. Its day number is the number
/// of local calendar days between the call and that instant, plus one. Tasks
/// within a day are ordered by time; days are ordered by number.
///
/// # Errors
///
/// Returns `ScheduleError::InvalidInput` for negative, non-finite or
/// out-of-range offsets.
pub fn transform_touchpoints_to_schedule(
    touchpoints: &[Touchpoint],
    call_end: Timestamp,
    tz: &TimeZone,
) -> Result<Vec<ScheduleDay>> {
    let anchor = call_end.to_zoned(tz.clone());
    let mut buckets: BTreeMap<u32, Vec<Task>> = BTreeMap::new();

    for (index, touchpoint) in touchpoints.iter().enumerate() {
        let minutes = offset_minutes(touchpoint.offset_hours, index)?;
        let at = call_end
            .checked_add(minutes.minutes())
            .date_context("applying touchpoint offset")?
            .round(
                TimestampRound::new()
                    .smallest(Unit::Minute)
                    .mode(RoundMode::Trunc),
            )
            .date_context("truncating touchpoint time")?;
        let day = calendar::day_number(&anchor, at.to_zoned(tz.clone()).date())?;

        buckets.entry(day).or_default().push(Task {
            kind: touchpoint.task_type(),
            scheduled_for: at,
            notes: touchpoint.message.clone().unwrap_or_default(),
        });
    }

    buckets
        .into_iter()
        .map(|(day, mut tasks)| {
            tasks.sort_by_key(|t| t.scheduled_for);
            Ok(ScheduleDay {
                day,
                date: calendar::day_date(&anchor, day)?,
                tasks,
            })
        })
        .collect()
}

fn offset_minutes(offset_hours: Option<f64>, index: usize) -> Result<i64> {
    let hours = offset_hours.unwrap_or(0.0);
    let max_hours = f64::from(MAX_DAY_NUMBER) * 24.0;
    if !hours.is_finite() || hours < 0.0 || hours > max_hours {
        return Err(ScheduleError::invalid_input(format!("touchpoints[{index}].offset_hours"))
            .with_reason(format!("expected hours between 0 and {max_hours}, got {hours}")));
    }
    Ok((hours * 60.0).round() as i64)
}
