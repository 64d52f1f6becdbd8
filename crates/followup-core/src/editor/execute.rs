//! Executing a schedule and gating re-execution.

use jiff::{Timestamp, civil::time};
use log::{info, warn};

use super::{DraftContent, EditorState, input::time_or_default};
use crate::{
    calendar,
    display::Notice,
    error::{Result, ScheduleError},
    models::{ExecuteResponse, Task, TaskType, TodoItem},
};

/// Plan id recorded when an executor accepts a plan without naming it.
pub const EXECUTED_SENTINEL: &str = "executed";

/// Destination of executed schedules.
///
/// Implementations persist the plan and report its id. Validation beyond the
/// editor's emptiness check, retries and error recovery belong to the
/// implementation.
pub trait PlanExecutor {
    /// Accepts a flattened task list.
    ///
    /// `executed_plan_id` is the id of the previously executed plan, if any,
    /// so implementations can replace it instead of creating a new one.
    fn execute(
        &self,
        todo: &[TodoItem],
        start_date: Timestamp,
        executed_plan_id: Option<&str>,
    ) -> impl Future<Output = Result<ExecuteResponse>> + Send;
}

/// Result of [`EditorState::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecuteOutcome {
    /// Nothing was sent to the executor
    Skipped(Notice),
    /// The executor accepted the plan
    Executed { plan_id: String, tasks: usize },
}

/// State of the execute control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteControl {
    /// An execution is in flight
    Executing,
    /// The executed plan matches the current schedule
    Active,
    /// The schedule can be (re-)executed
    Execute,
}

impl ExecuteControl {
    /// Button label for the control.
    pub fn label(&self) -> &'static str {
        match self {
            ExecuteControl::Executing => "Executing...",
            ExecuteControl::Active => "Active",
            ExecuteControl::Execute => "Execute",
        }
    }

    /// Whether the control accepts a click.
    pub fn is_enabled(&self) -> bool {
        matches!(self, ExecuteControl::Execute)
    }
}

/// Value of the editor state at the moment of an execution.
///
/// Synthetic task ids are left out so that rebuilding drafts without
/// changing their content compares equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSnapshot {
    pub days: Vec<(u32, Vec<Task>)>,
    pub drafts: Vec<(u32, DraftContent)>,
}

impl EditorState {
    /// Start date of an executed plan: local midnight of the day after the
    /// reference instant.
    pub fn execution_start(&self) -> Result<Timestamp> {
        let date = calendar::day_date(&self.anchor(), 2)?;
        calendar::at_time_of_day(date, time(0, 0, 0, 0), &self.tz)
    }

    /// Flattens the live drafts into executor payload items.
    ///
    /// Unsaved edits are included. Items are emitted day by day; within a
    /// day by channel (email, call, WhatsApp) in occurrence order. Each
    /// item lands on the start date advanced by its final day number minus
    /// one, at its time of day or 09:00.
    pub fn todo_items(&self) -> Result<Vec<TodoItem>> {
        let anchor = self.anchor();
        let mut todo = Vec::new();
        for day in &self.days {
            let draft = self
                .drafts
                .get(&day.day)
                .ok_or(ScheduleError::DayNotFound { day: day.day })?;
            let final_day = draft.final_day(day.day);
            let date = calendar::day_date(&anchor, final_day + 1)?;
            for kind in TaskType::ALL {
                for entry in draft.channel(kind) {
                    todo.push(TodoItem {
                        kind,
                        person_id: self.lead_id.clone(),
                        day: final_day,
                        scheduled_for: calendar::at_time_of_day(
                            date,
                            time_or_default(&entry.time),
                            &self.tz,
                        )?,
                        notes: entry.notes.clone(),
                    });
                }
            }
        }
        Ok(todo)
    }

    /// Sends the current schedule to an executor.
    ///
    /// An empty schedule is skipped with a validation notice and leaves the
    /// state untouched. Otherwise the executor is awaited, the returned plan
    /// id is stored (or [`EXECUTED_SENTINEL`] when none is known) and the
    /// state is snapshotted for [`EditorState::has_changes_since_execution`].
    ///
    /// # Errors
    ///
    /// Executor errors are returned unchanged. The snapshot is recorded
    /// before the error is returned, so a failed execution is gated like a
    /// successful one.
    pub async fn execute<E: PlanExecutor>(&mut self, executor: &E) -> Result<ExecuteOutcome> {
        let todo = self.todo_items()?;
        if todo.is_empty() {
            return Ok(ExecuteOutcome::Skipped(Notice::validation(
                "Add at least one task before executing",
            )));
        }
        let start_date = self.execution_start()?;

        info!(
            "Executing {} tasks for lead {} starting {start_date}",
            todo.len(),
            self.lead_id
        );
        let response = executor
            .execute(&todo, start_date, self.executed_plan_id.as_deref())
            .await;
        self.last_executed = Some(self.snapshot());

        let response = response.inspect_err(|err| warn!("Execution failed: {err}"))?;
        match response.plan_id {
            Some(plan_id) => self.executed_plan_id = Some(plan_id),
            None if self.executed_plan_id.is_none() => {
                self.executed_plan_id = Some(EXECUTED_SENTINEL.to_string());
            }
            None => {}
        }

        Ok(ExecuteOutcome::Executed {
            plan_id: self.executed_plan_id.clone().unwrap_or_default(),
            tasks: todo.len(),
        })
    }

    /// Identity-free value of the saved days and all drafts.
    pub fn snapshot(&self) -> ExecutionSnapshot {
        ExecutionSnapshot {
            days: self
                .days
                .iter()
                .map(|d| (d.day, d.tasks.clone()))
                .collect(),
            drafts: self
                .drafts
                .iter()
                .map(|(day, draft)| (*day, draft.content()))
                .collect(),
        }
    }

    /// Whether anything changed since the last execute call.
    ///
    /// Always `false` before the first execution.
    pub fn has_changes_since_execution(&self) -> bool {
        self.last_executed
            .as_ref()
            .is_some_and(|last| *last != self.snapshot())
    }

    /// State of the execute control given whether a call is in flight.
    pub fn execute_control(&self, is_executing: bool) -> ExecuteControl {
        if is_executing {
            ExecuteControl::Executing
        } else if self.executed_plan_id.is_some() && !self.has_changes_since_execution() {
            ExecuteControl::Active
        } else {
            ExecuteControl::Execute
        }
    }
}
