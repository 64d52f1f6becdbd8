//! Committing a day's draft into the saved schedule.

use log::info;

use super::{EditorState, input::time_or_default, transitions::notice_for};
use crate::{
    calendar,
    display::Notice,
    error::{Result, ScheduleError},
    models::{ScheduleDay, Task},
};

impl EditorState {
    /// Saves the draft of `day`.
    ///
    /// Without pending changes nothing is persisted and an informational
    /// notice is returned. Otherwise the draft is committed (see
    /// [`EditorState::commit_day`]), edit mode is left and a success notice
    /// names the day the tasks landed on.
    pub fn save_day(&mut self, day: u32) -> Notice {
        if !self.day_has_changes(day) {
            return Notice::info(format!("No changes to save for day {day}"));
        }
        match self.commit_day(day) {
            Ok(final_day) => Notice::success(format!("Day {final_day} saved")),
            Err(err) => notice_for(err),
        }
    }

    /// Commits the draft of `original` regardless of pending changes.
    ///
    /// The tasks are regenerated from the draft on the date of the final day
    /// number. When that number belongs to another existing day the two are
    /// merged: the existing tasks come first, the result is stably sorted by
    /// time and keeps the existing day's date. Every draft is then rebuilt
    /// from the new day list.
    pub(crate) fn commit_day(&mut self, original: u32) -> Result<u32> {
        let draft = self
            .drafts
            .get(&original)
            .filter(|_| self.day(original).is_some())
            .cloned()
            .ok_or(ScheduleError::DayNotFound { day: original })?;

        let final_day = draft.final_day(original);
        let date = calendar::day_date(&self.anchor(), final_day)?;
        let generated = draft
            .tasks
            .iter()
            .map(|entry| {
                Ok(Task {
                    kind: entry.kind,
                    scheduled_for: calendar::at_time_of_day(
                        date,
                        time_or_default(&entry.time),
                        &self.tz,
                    )?,
                    notes: entry.notes.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let target = if final_day == original {
            None
        } else {
            self.days
                .iter()
                .position(|d| d.day == final_day)
                .map(|index| self.days.remove(index))
        };
        self.days.retain(|d| d.day != original);

        let saved = match target {
            Some(mut existing) => {
                info!(
                    "Merging day {original} into day {final_day} ({} + {} tasks)",
                    existing.tasks.len(),
                    generated.len()
                );
                existing.tasks.extend(generated);
                existing.tasks.sort_by_key(|t| t.scheduled_for);
                existing
            }
            None => ScheduleDay {
                day: final_day,
                date,
                tasks: generated,
            },
        };
        self.days.push(saved);
        self.days.sort_by_key(|d| d.day);

        self.rebuild_drafts();
        self.editing_day = None;
        Ok(final_day)
    }
}
