//! Day-bucketed schedule model.

use jiff::{Timestamp, civil::Date, tz::TimeZone};
use serde::{Deserialize, Serialize};

use super::{ChannelCounts, TaskType};
use crate::editor::input::format_time_of_day;

/// One concrete scheduled outreach action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Channel used for the action
    #[serde(rename = "type")]
    pub kind: TaskType,

    /// When the action is due
    pub scheduled_for: Timestamp,

    /// Free-text notes
    #[serde(default)]
    pub notes: String,
}

/// A group of tasks sharing one day number and calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleDay {
    /// Day number, 1-based, unique within a schedule
    pub day: u32,

    /// Calendar date of the day
    pub date: Date,

    /// Tasks owned by this day
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl ScheduleDay {
    /// Creates a day with no tasks.
    pub fn empty(day: u32, date: Date) -> Self {
        Self {
            day,
            date,
            tasks: Vec::new(),
        }
    }

    /// Number of tasks per channel.
    pub fn counts(&self) -> ChannelCounts {
        ChannelCounts::tally(self.tasks.iter().map(|t| t.kind))
    }

    /// Local `HH:MM` times of the tasks of one channel, in occurrence order.
    pub fn times(&self, kind: TaskType, tz: &TimeZone) -> Vec<String> {
        self.tasks_of(kind)
            .map(|t| format_time_of_day(&t.scheduled_for.to_zoned(tz.clone())))
            .collect()
    }

    /// Notes of the tasks of one channel, in occurrence order.
    pub fn notes(&self, kind: TaskType) -> Vec<String> {
        self.tasks_of(kind).map(|t| t.notes.clone()).collect()
    }

    fn tasks_of(&self, kind: TaskType) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| t.kind == kind)
    }
}
