//! Data models for touchpoints, schedules and executed plans.
//!
//! This module contains the core domain models of the follow-up scheduling
//! system. Display implementations for these models are located in
//! [`crate::display::models`] to keep data structures separate from
//! presentation.
//!
//! ## Model Overview
//!
//! - [`Touchpoint`]: an upstream suggestion, an offset in hours from a
//!   reference time plus a channel and message
//! - [`ScheduleDay`]: a day number, its calendar date and the [`Task`]s it owns
//! - [`TodoItem`]: a flattened task addressed to a lead, the unit handed to a
//!   plan executor
//! - [`TaskType`] / [`ChannelCounts`]: the three outreach channels and
//!   per-channel tallies
//!
//! # Examples
//!
//! ```rust
//! use followup_core::models::{ScheduleDay, Task, TaskType};
//! use jiff::{civil::date, Timestamp};
//!
//! let day = ScheduleDay {
//!     day: 1,
//!     date: date(2024, 3, 4),
//!     tasks: vec![Task {
//!         kind: TaskType::Call,
//!         scheduled_for: "2024-03-04T10:30:00Z".parse::<Timestamp>().unwrap(),
//!         notes: "Intro call".to_string(),
//!     }],
//! };
//! assert_eq!(day.counts().calls, 1);
//! ```

pub mod channel;
pub mod schedule;
pub mod todo;
pub mod touchpoint;

#[cfg(test)]
mod tests;

pub use channel::{ChannelCounts, TaskType};
pub use schedule::{ScheduleDay, Task};
pub use todo::{ExecuteResponse, TodoItem};
pub use touchpoint::Touchpoint;
