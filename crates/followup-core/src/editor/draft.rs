//! Per-day edit drafts.
//!
//! A [`DayDraft`] holds the uncommitted state of one day: an optional pending
//! day number and one ordered list of task entries. Per-channel counts, times
//! and notes are views over that list; the i-th entry of a channel is the
//! i-th entry of that type in list order.

use jiff::tz::TimeZone;

use super::input::{DEFAULT_TIME, format_time_of_day};
use crate::models::{ChannelCounts, ScheduleDay, TaskType};

/// Synthetic identity of a draft entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// Monotonic source of [`TaskId`]s.
#[derive(Debug, Clone, Default)]
pub(crate) struct TaskIds {
    next: u64,
}

impl TaskIds {
    pub(crate) fn mint(&mut self) -> TaskId {
        self.next += 1;
        TaskId(self.next)
    }
}

/// One task being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftTask {
    pub id: TaskId,
    pub kind: TaskType,
    /// `HH:MM`, possibly incomplete while typing
    pub time: String,
    pub notes: String,
}

/// Content of a draft entry without its identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftEntry {
    pub kind: TaskType,
    pub time: String,
    pub notes: String,
}

/// Identity-free value of a whole draft, used for snapshot comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftContent {
    pub day_number: Option<u32>,
    pub entries: Vec<DraftEntry>,
}

/// Uncommitted edit state of a single day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayDraft {
    /// Pending day number; `None` keeps the original number
    pub day_number: Option<u32>,
    pub tasks: Vec<DraftTask>,
}

impl DayDraft {
    /// Empty draft for a freshly added day.
    pub(crate) fn empty(day: u32) -> Self {
        Self {
            day_number: Some(day),
            tasks: Vec::new(),
        }
    }

    /// Draft mirroring a stored day.
    pub(crate) fn from_day(day: &ScheduleDay, tz: &TimeZone, ids: &mut TaskIds) -> Self {
        let tasks = day
            .tasks
            .iter()
            .map(|task| DraftTask {
                id: ids.mint(),
                kind: task.kind,
                time: format_time_of_day(&task.scheduled_for.to_zoned(tz.clone())),
                notes: task.notes.clone(),
            })
            .collect();
        Self {
            day_number: Some(day.day),
            tasks,
        }
    }

    /// Day number the draft commits to.
    pub fn final_day(&self, original: u32) -> u32 {
        self.day_number.unwrap_or(original)
    }

    /// Number of entries per channel.
    pub fn counts(&self) -> ChannelCounts {
        ChannelCounts::tally(self.tasks.iter().map(|t| t.kind))
    }

    /// Entries of one channel in occurrence order.
    pub fn channel(&self, kind: TaskType) -> impl Iterator<Item = &DraftTask> {
        self.tasks.iter().filter(move |t| t.kind == kind)
    }

    /// Times of one channel in occurrence order.
    pub fn times(&self, kind: TaskType) -> Vec<&str> {
        self.channel(kind).map(|t| t.time.as_str()).collect()
    }

    /// Notes of one channel in occurrence order.
    pub fn notes(&self, kind: TaskType) -> Vec<&str> {
        self.channel(kind).map(|t| t.notes.as_str()).collect()
    }

    /// Grows or truncates one channel to exactly `len` entries.
    ///
    /// Growth appends default entries; truncation drops the channel's last
    /// entries and leaves every other entry in place.
    pub(crate) fn resize_channel(&mut self, kind: TaskType, len: usize, ids: &mut TaskIds) {
        let current = self.channel(kind).count();
        if len < current {
            let mut seen = 0;
            self.tasks.retain(|t| {
                if t.kind != kind {
                    return true;
                }
                seen += 1;
                seen <= len
            });
        } else {
            for _ in current..len {
                self.tasks.push(DraftTask {
                    id: ids.mint(),
                    kind,
                    time: DEFAULT_TIME.to_string(),
                    notes: String::new(),
                });
            }
        }
    }

    /// Mutable access to the `index`-th entry of a channel.
    ///
    /// Returns `None` past the end of the channel; only
    /// [`DayDraft::resize_channel`] changes how many entries a channel has.
    pub(crate) fn entry_mut(&mut self, kind: TaskType, index: usize) -> Option<&mut DraftTask> {
        self.tasks.iter_mut().filter(|t| t.kind == kind).nth(index)
    }

    /// Identity-free content of the draft.
    pub fn content(&self) -> DraftContent {
        DraftContent {
            day_number: self.day_number,
            entries: self
                .tasks
                .iter()
                .map(|t| DraftEntry {
                    kind: t.kind,
                    time: t.time.clone(),
                    notes: t.notes.clone(),
                })
                .collect(),
        }
    }
}
