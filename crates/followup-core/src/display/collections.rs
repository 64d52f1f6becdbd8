//! Wrapper types for displaying schedules and plans.
//!
//! These wrappers carry the time zone (and for schedules, the editor state)
//! needed to render times of day, and handle empty collections gracefully.

use std::fmt;

use jiff::tz::TimeZone;

use super::datetime::{LocalDateTime, LocalTime};
use crate::{
    editor::{DayDraft, EditorState},
    models::{ScheduleDay, TaskType, TodoItem},
    store::StoredPlan,
};

/// Markdown view of an editor's visible days.
///
/// The day being edited is rendered from its draft, including unsaved
/// entries and a pending day number; every other day from its saved tasks.
///
/// # Examples
///
/// ```rust
/// use followup_core::{display::ScheduleView, editor::EditorBuilder, models::Touchpoint};
/// use jiff::tz::TimeZone;
///
/// let editor = EditorBuilder::new("lead-1", "2024-03-04T15:00:00Z".parse().unwrap())
///     .with_touchpoints(vec![Touchpoint {
///         offset_hours: Some(1.0),
///         channel: Some("call".to_string()),
///         message: Some("Intro".to_string()),
///     }])
///     .with_time_zone(TimeZone::UTC)
///     .build()
///     .unwrap();
///
/// let output = ScheduleView(&editor).to_string();
/// assert!(output.contains("## Day 1 (2024-03-04)"));
/// assert!(output.contains("16:00 ☎ Call: Intro"));
/// ```
pub struct ScheduleView<'a>(pub &'a EditorState);

impl fmt::Display for ScheduleView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        if let Some(summary) = state.summary() {
            writeln!(f, "{summary}")?;
            writeln!(f)?;
        }

        let days = state.visible_days();
        if days.is_empty() {
            return writeln!(f, "No touchpoints scheduled.");
        }

        for day in days {
            let editing = state.editing_day() == Some(day.day);
            match state.draft(day.day) {
                Some(draft) if editing => {
                    fmt_draft(f, day, draft, state.day_has_changes(day.day))?;
                }
                _ => fmt_day(f, day, state.time_zone())?,
            }
        }
        Ok(())
    }
}

fn fmt_day(f: &mut fmt::Formatter<'_>, day: &ScheduleDay, tz: &TimeZone) -> fmt::Result {
    writeln!(f, "## Day {} ({})", day.day, day.date)?;
    writeln!(f)?;
    if day.tasks.is_empty() {
        writeln!(f, "No tasks on this day.")?;
    }
    for task in &day.tasks {
        write!(f, "- {} {}", LocalTime(&task.scheduled_for, tz), task.kind.with_icon())?;
        if task.notes.is_empty() {
            writeln!(f)?;
        } else {
            writeln!(f, ": {}", task.notes)?;
        }
    }
    writeln!(f)
}

fn fmt_draft(
    f: &mut fmt::Formatter<'_>,
    day: &ScheduleDay,
    draft: &DayDraft,
    changed: bool,
) -> fmt::Result {
    writeln!(f, "## Day {} ({}) - editing", day.day, day.date)?;
    writeln!(f)?;
    match draft.day_number {
        Some(n) if n != day.day => writeln!(f, "- **Move to day**: {n}")?,
        None => writeln!(f, "- **Move to day**: (unset)")?,
        Some(_) => {}
    }
    writeln!(f, "- **Counts**: {}", draft.counts())?;
    if changed {
        writeln!(f, "- *Unsaved changes*")?;
    }
    writeln!(f)?;
    for kind in TaskType::ALL {
        for (index, entry) in draft.channel(kind).enumerate() {
            write!(f, "{index}. {} {}", entry.time, kind.with_icon())?;
            if entry.notes.is_empty() {
                writeln!(f)?;
            } else {
                writeln!(f, ": {}", entry.notes)?;
            }
        }
    }
    writeln!(f)
}

/// Markdown list of flattened plan tasks.
pub struct TodoList<'a>(pub &'a [TodoItem], pub &'a TimeZone);

impl fmt::Display for TodoList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks.");
        }
        for item in self.0 {
            write!(
                f,
                "- Day {}: {} {}",
                item.day,
                LocalDateTime(&item.scheduled_for, self.1),
                item.kind.with_icon()
            )?;
            if item.notes.is_empty() {
                writeln!(f)?;
            } else {
                writeln!(f, ": {}", item.notes)?;
            }
        }
        Ok(())
    }
}

/// Markdown listing of stored plans.
pub struct StoredPlans<'a>(pub &'a [StoredPlan], pub &'a TimeZone);

impl fmt::Display for StoredPlans<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans found.");
        }
        for plan in self.0 {
            writeln!(f, "## {} ({} tasks)", plan.plan_id, plan.tasks.len())?;
            writeln!(f)?;
            if let Some(lead) = plan.tasks.first().map(|t| t.person_id.as_str()) {
                writeln!(f, "- **Lead**: {lead}")?;
            }
            writeln!(f, "- **Starts**: {}", LocalDateTime(&plan.start_date, self.1))?;
            writeln!(f, "- **Stored**: {}", LocalDateTime(&plan.stored_at, self.1))?;
            writeln!(f)?;
            write!(f, "{}", TodoList(&plan.tasks, self.1))?;
            writeln!(f)?;
        }
        Ok(())
    }
}
