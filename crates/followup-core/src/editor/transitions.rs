//! Editor transitions.
//!
//! Every user interaction is an [`Action`]. [`EditorState::reduce`] applies
//! one to a copy of the state and returns the new state together with any
//! notice to show. The named methods (`set_count`, `set_time`, ...) are the
//! in-place equivalents used by the reducer.

use log::{debug, warn};

use super::{
    DayDraft, EditorState,
    input::{MAX_DAY_NUMBER, is_time_fragment, parse_count, parse_day_number},
};
use crate::{
    calendar,
    display::Notice,
    error::{Result, ScheduleError},
    models::{ScheduleDay, TaskType},
};

/// A single interaction with the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Set the number of tasks of a channel for a day
    SetCount {
        day: u32,
        kind: TaskType,
        value: String,
    },
    /// Set the time of the `index`-th task of a channel
    SetTime {
        day: u32,
        kind: TaskType,
        index: usize,
        value: String,
    },
    /// Set the notes of the `index`-th task of a channel
    SetNote {
        day: u32,
        kind: TaskType,
        index: usize,
        value: String,
    },
    /// Set the pending day number of a day
    ReassignDay { day: u32, value: String },
    /// Put a day in edit mode
    BeginEdit { day: u32 },
    /// Commit the draft of a day
    SaveDay { day: u32 },
    /// Discard all uncommitted edits
    CancelEdit,
    /// Append an empty day after the last one
    AddDay,
}

/// Outcome of applying an [`Action`].
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: EditorState,
    pub notice: Option<Notice>,
}

impl EditorState {
    /// Applies an action to a copy of the state.
    pub fn reduce(&self, action: Action) -> Transition {
        let mut state = self.clone();
        let notice = state.apply(action);
        Transition { state, notice }
    }

    /// Applies an action in place, returning the notice to show, if any.
    pub fn apply(&mut self, action: Action) -> Option<Notice> {
        debug!("Applying {action:?}");
        match action {
            Action::SetCount { day, kind, value } => {
                self.set_count(day, kind, &value);
                None
            }
            Action::SetTime {
                day,
                kind,
                index,
                value,
            } => {
                self.set_time(day, kind, index, &value);
                None
            }
            Action::SetNote {
                day,
                kind,
                index,
                value,
            } => {
                self.set_note(day, kind, index, &value);
                None
            }
            Action::ReassignDay { day, value } => {
                self.reassign_day(day, &value);
                None
            }
            Action::BeginEdit { day } => self.begin_edit(day).err().map(notice_for),
            Action::SaveDay { day } => Some(self.save_day(day)),
            Action::CancelEdit => {
                self.cancel_edit();
                None
            }
            Action::AddDay => self.add_day().err().map(notice_for),
        }
    }

    /// Sets the task count of a channel, resizing its entries.
    ///
    /// Accepts empty input (zero) or digits up to
    /// [`MAX_TASKS_PER_CHANNEL`](super::input::MAX_TASKS_PER_CHANNEL);
    /// larger counts are rejected like any other invalid input. Returns
    /// `false` when the input is rejected and nothing changed.
    pub fn set_count(&mut self, day: u32, kind: TaskType, value: &str) -> bool {
        let Some(count) = parse_count(value) else {
            return false;
        };
        let Some(draft) = self.drafts.get_mut(&day) else {
            return false;
        };
        draft.resize_channel(kind, count, &mut self.ids);
        true
    }

    /// Sets the time of one task.
    ///
    /// Accepts partial entries such as `"9"` or `"14:"`; a later save or
    /// execute falls back to 09:00 for anything incomplete. Indices past the
    /// channel's count are rejected.
    pub fn set_time(&mut self, day: u32, kind: TaskType, index: usize, value: &str) -> bool {
        if !is_time_fragment(value) {
            return false;
        }
        let Some(draft) = self.drafts.get_mut(&day) else {
            return false;
        };
        match draft.entry_mut(kind, index) {
            Some(entry) => {
                entry.time = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Sets the notes of one task. Indices past the channel's count are
    /// rejected.
    pub fn set_note(&mut self, day: u32, kind: TaskType, index: usize, value: &str) -> bool {
        let Some(draft) = self.drafts.get_mut(&day) else {
            return false;
        };
        match draft.entry_mut(kind, index) {
            Some(entry) => {
                entry.notes = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Sets the pending day number; tasks move on save.
    pub fn reassign_day(&mut self, day: u32, value: &str) -> bool {
        let Some(pending) = parse_day_number(value) else {
            return false;
        };
        let Some(draft) = self.drafts.get_mut(&day) else {
            return false;
        };
        draft.day_number = pending;
        true
    }

    /// Puts a day in edit mode, leaving any other day's edit mode.
    pub fn begin_edit(&mut self, day: u32) -> Result<()> {
        if !self.drafts.contains_key(&day) {
            return Err(ScheduleError::DayNotFound { day });
        }
        self.editing_day = Some(day);
        Ok(())
    }

    /// Leaves edit mode and rebuilds every draft from the saved days.
    pub fn cancel_edit(&mut self) {
        self.editing_day = None;
        self.rebuild_drafts();
    }

    /// Appends an empty day after the highest day number and edits it.
    ///
    /// Returns the new day number.
    pub fn add_day(&mut self) -> Result<u32> {
        let last = self.days.iter().map(|d| d.day).max().unwrap_or(0);
        let day = last + 1;
        if day > MAX_DAY_NUMBER {
            return Err(ScheduleError::invalid_input("day")
                .with_reason(format!("schedules end at day {MAX_DAY_NUMBER}")));
        }
        let date = calendar::day_date(&self.anchor(), day)?;

        self.days.push(ScheduleDay::empty(day, date));
        self.drafts.insert(day, DayDraft::empty(day));
        self.editing_day = Some(day);
        debug!("Added day {day} ({date})");
        Ok(day)
    }
}

pub(crate) fn notice_for(err: ScheduleError) -> Notice {
    warn!("Rejected editor action: {err}");
    match err {
        ScheduleError::DayNotFound { day } => Notice::info(format!("Day {day} does not exist")),
        other => Notice::validation(other.to_string()),
    }
}
