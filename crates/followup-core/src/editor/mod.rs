//! Touchpoint schedule editor.
//!
//! The editor turns suggested touchpoints into a per-day schedule and lets a
//! user reshape it before handing the result to a [`PlanExecutor`].
//!
//! # State Model
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Touchpoints   │    │   Saved days    │    │     Drafts      │
//! │ (offset, chan.) │───▶│ (ScheduleDay[]) │◀──▶│ (one per day)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!      transform           save / cancel          set_count, ...
//! ```
//!
//! [`EditorState`] is the single source of truth. Edits land in the day's
//! [`DayDraft`]; [`EditorState::save_day`] commits a draft into the saved day
//! list and rebuilds every draft from it, so drafts and saved days never
//! diverge. Executing flattens the live drafts, including unsaved edits, into
//! [`TodoItem`](crate::models::TodoItem)s.
//!
//! ## Submodules
//!
//! - [`builder`]: configuration of a new editor
//! - [`draft`]: per-day draft entries with synthetic ids
//! - [`input`]: keystroke validation and time-of-day parsing
//! - [`transitions`]: the [`Action`] reducer and individual edit operations
//! - [`save`]: committing a draft, including day merges
//! - [`execute`]: flattening, the executor seam and re-execution gating
//!
//! # Examples
//!
//! ```rust
//! use followup_core::{
//!     editor::{Action, EditorBuilder},
//!     models::{TaskType, Touchpoint},
//! };
//! use jiff::tz::TimeZone;
//!
//! # fn main() -> followup_core::Result<()> {
//! let touchpoints = vec![Touchpoint {
//!     offset_hours: Some(20.0),
//!     channel: Some("email".to_string()),
//!     message: Some("Send recap".to_string()),
//! }];
//!
//! let editor = EditorBuilder::new("lead-1", "2024-03-04T15:00:00Z".parse().unwrap())
//!     .with_touchpoints(touchpoints)
//!     .with_time_zone(TimeZone::UTC)
//!     .build()?;
//!
//! let next = editor.reduce(Action::SetCount {
//!     day: 2,
//!     kind: TaskType::Call,
//!     value: "1".to_string(),
//! });
//! assert!(next.state.day_has_changes(2));
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

use jiff::{Timestamp, Zoned, tz::TimeZone};
use log::debug;

use crate::{
    error::Result,
    models::{ScheduleDay, TaskType, Touchpoint},
    transform::transform_touchpoints_to_schedule,
};

pub mod builder;
pub mod draft;
pub mod execute;
pub mod input;
pub mod save;
pub mod transitions;


pub use builder::EditorBuilder;
pub use draft::{DayDraft, DraftContent, DraftEntry, DraftTask, TaskId};
pub use execute::{
    EXECUTED_SENTINEL, ExecuteControl, ExecuteOutcome, ExecutionSnapshot, PlanExecutor,
};
pub use transitions::{Action, Transition};

use draft::TaskIds;

/// Complete state of a schedule editor.
#[derive(Debug, Clone)]
pub struct EditorState {
    call_end: Timestamp,
    tz: TimeZone,
    lead_id: String,
    summary: Option<String>,
    days: Vec<ScheduleDay>,
    drafts: BTreeMap<u32, DayDraft>,
    editing_day: Option<u32>,
    executed_plan_id: Option<String>,
    last_executed: Option<ExecutionSnapshot>,
    ids: TaskIds,
}

impl EditorState {
    pub(crate) fn new(
        call_end: Timestamp,
        tz: TimeZone,
        lead_id: String,
        summary: Option<String>,
        executed_plan_id: Option<String>,
    ) -> Self {
        Self {
            call_end,
            tz,
            lead_id,
            summary,
            days: Vec::new(),
            drafts: BTreeMap::new(),
            editing_day: None,
            executed_plan_id,
            last_executed: None,
            ids: TaskIds::default(),
        }
    }

    /// Replaces the schedule with one derived from new touchpoints.
    ///
    /// Every draft is rebuilt and the edit mode is left, discarding any
    /// uncommitted edits.
    pub fn resync(&mut self, touchpoints: &[Touchpoint], call_end: Timestamp) -> Result<()> {
        let days = transform_touchpoints_to_schedule(touchpoints, call_end, &self.tz)?;
        debug!(
            "Resynced schedule: {} touchpoints into {} days",
            touchpoints.len(),
            days.len()
        );
        self.call_end = call_end;
        self.days = days;
        self.editing_day = None;
        self.rebuild_drafts();
        Ok(())
    }

    /// Rebuilds every draft from the saved day list.
    pub(crate) fn rebuild_drafts(&mut self) {
        let mut drafts = BTreeMap::new();
        for day in &self.days {
            drafts.insert(day.day, DayDraft::from_day(day, &self.tz, &mut self.ids));
        }
        self.drafts = drafts;
    }

    /// Reference instant the schedule is anchored to, in the editor's zone.
    pub(crate) fn anchor(&self) -> Zoned {
        self.call_end.to_zoned(self.tz.clone())
    }

    pub fn call_end(&self) -> Timestamp {
        self.call_end
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.tz
    }

    pub fn lead_id(&self) -> &str {
        &self.lead_id
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Saved days, sorted by day number.
    pub fn days(&self) -> &[ScheduleDay] {
        &self.days
    }

    /// Saved day with the given number.
    pub fn day(&self, day: u32) -> Option<&ScheduleDay> {
        self.days.iter().find(|d| d.day == day)
    }

    /// Draft of the day with the given original number.
    pub fn draft(&self, day: u32) -> Option<&DayDraft> {
        self.drafts.get(&day)
    }

    /// Day currently in edit mode.
    pub fn editing_day(&self) -> Option<u32> {
        self.editing_day
    }

    /// Plan id of the last execution, or [`EXECUTED_SENTINEL`].
    pub fn executed_plan_id(&self) -> Option<&str> {
        self.executed_plan_id.as_deref()
    }

    /// Snapshot recorded by the last execute call.
    pub fn last_executed(&self) -> Option<&ExecutionSnapshot> {
        self.last_executed.as_ref()
    }

    /// Days to display: those with at least one task, plus the day being
    /// edited even when it is empty.
    pub fn visible_days(&self) -> Vec<&ScheduleDay> {
        self.days
            .iter()
            .filter(|day| {
                let total = self
                    .drafts
                    .get(&day.day)
                    .map_or(day.tasks.len(), |draft| draft.tasks.len());
                total > 0 || self.editing_day == Some(day.day)
            })
            .collect()
    }

    /// Whether the draft of `day` differs from the saved day.
    ///
    /// Compares per-channel counts, the pending day number, and the
    /// per-channel times and notes element by element.
    pub fn day_has_changes(&self, day: u32) -> bool {
        let Some(draft) = self.drafts.get(&day) else {
            return false;
        };
        let empty = ScheduleDay::empty(day, self.anchor().date());
        let stored = self.day(day).unwrap_or(&empty);

        if draft.counts() != stored.counts() {
            return true;
        }
        if let Some(pending) = draft.day_number
            && pending != day
        {
            return true;
        }
        TaskType::ALL.iter().any(|&kind| {
            !same_values(&draft.times(kind), &stored.times(kind, &self.tz))
                || !same_values(&draft.notes(kind), &stored.notes(kind))
        })
    }
}

fn same_values(current: &[&str], original: &[String]) -> bool {
    current.len() == original.len() && current.iter().zip(original).all(|(a, b)| *a == b)
}
