//! Builder for creating and configuring editor instances.

use jiff::{Timestamp, tz::TimeZone};
use log::info;

use super::EditorState;
use crate::{error::Result, models::Touchpoint};

/// Builder for creating and configuring [`EditorState`] instances.
#[derive(Debug, Clone)]
pub struct EditorBuilder {
    lead_id: String,
    call_end: Timestamp,
    touchpoints: Vec<Touchpoint>,
    summary: Option<String>,
    time_zone: Option<TimeZone>,
    executed_plan_id: Option<String>,
}

impl EditorBuilder {
    /// Creates a builder for the given lead, anchored at the end of the call.
    pub fn new(lead_id: impl Into<String>, call_end: Timestamp) -> Self {
        Self {
            lead_id: lead_id.into(),
            call_end,
            touchpoints: Vec::new(),
            summary: None,
            time_zone: None,
            executed_plan_id: None,
        }
    }

    /// Sets the suggested touchpoints to derive the schedule from.
    pub fn with_touchpoints(mut self, touchpoints: Vec<Touchpoint>) -> Self {
        self.touchpoints = touchpoints;
        self
    }

    /// Sets a summary shown alongside the schedule.
    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        self.summary = summary;
        self
    }

    /// Sets the time zone used for dates and times of day.
    ///
    /// If not specified, the system time zone is used.
    pub fn with_time_zone(mut self, tz: TimeZone) -> Self {
        self.time_zone = Some(tz);
        self
    }

    /// Seeds the plan id of a plan that is already active.
    pub fn with_executed_plan_id(mut self, plan_id: Option<String>) -> Self {
        self.executed_plan_id = plan_id;
        self
    }

    /// Builds the editor, deriving the schedule from the touchpoints.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidInput` for unusable touchpoint offsets
    /// Returns `ScheduleError::DateTime` if a date leaves the supported range
    pub fn build(self) -> Result<EditorState> {
        let tz = self.time_zone.unwrap_or_else(TimeZone::system);
        let mut state = EditorState::new(
            self.call_end,
            tz,
            self.lead_id,
            self.summary,
            self.executed_plan_id,
        );
        state.resync(&self.touchpoints, self.call_end)?;
        info!(
            "Schedule editor ready for lead {} with {} days",
            state.lead_id(),
            state.days().len()
        );
        Ok(state)
    }
}
