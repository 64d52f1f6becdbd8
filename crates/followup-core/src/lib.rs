//! Core library for the Followup touchpoint scheduling tool.
//!
//! This crate turns suggested follow-up touchpoints (an offset in hours from
//! the end of a sales call, a channel and a message) into a per-day schedule,
//! lets a user edit that schedule day by day, and hands the final task list
//! to a plan executor.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Transform    │    │     Editor      │    │    Executor     │
//! │ (touchpoints →  │───▶│ (drafts, save,  │───▶│ (FilePlanStore  │
//! │  ScheduleDay[]) │    │  merge, gate)   │    │  or your own)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`transform`]: groups touchpoints into calendar days
//! - [`editor`]: the [`EditorState`] state machine and [`PlanExecutor`] seam
//! - [`store`]: a JSON file-backed executor
//! - [`display`]: markdown formatting of schedules, plans and notices
//!
//! # Quick Start
//!
//! ```rust
//! use followup_core::{EditorBuilder, ExecuteOutcome, FilePlanStore, Touchpoint};
//! use jiff::tz::TimeZone;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut editor = EditorBuilder::new("lead-42", "2024-03-04T15:00:00Z".parse()?)
//!     .with_touchpoints(vec![Touchpoint {
//!         offset_hours: Some(24.0),
//!         channel: Some("call".to_string()),
//!         message: Some("Check in".to_string()),
//!     }])
//!     .with_time_zone(TimeZone::UTC)
//!     .build()?;
//!
//! editor.set_time(2, followup_core::TaskType::Call, 0, "10:30");
//! let notice = editor.save_day(2);
//! println!("{notice}");
//!
//! let store = FilePlanStore::builder()
//!     .with_directory(Some("/tmp/followup-plans"))
//!     .build()?;
//! if let ExecuteOutcome::Executed { plan_id, .. } = editor.execute(&store).await? {
//!     println!("Stored plan {plan_id}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod display;
pub mod editor;
pub mod error;
pub mod models;
pub mod store;
pub mod transform;

// Re-export commonly used types
pub use display::{Notice, NoticeKind, ScheduleView, StoredPlans, TodoList};
pub use editor::{
    Action, EditorBuilder, EditorState, ExecuteControl, ExecuteOutcome, PlanExecutor, Transition,
};
pub use error::{Result, ScheduleError};
pub use models::{ChannelCounts, ExecuteResponse, ScheduleDay, Task, TaskType, TodoItem, Touchpoint};
pub use store::{FilePlanStore, FilePlanStoreBuilder, StoredPlan};
pub use transform::transform_touchpoints_to_schedule;
