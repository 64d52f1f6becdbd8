//! Display formatting for schedules, plans and notices.
//!
//! Domain models implement [`std::fmt::Display`] directly where no context is
//! needed ([`models`]). Anything showing a time of day goes through a wrapper
//! that carries the time zone ([`collections`], [`datetime`]). All output is
//! markdown, rendered by the CLI's terminal renderer.
//!
//! ## Module Organization
//!
//! - [`collections`]: schedule, todo and plan list wrappers
//! - [`datetime`]: zone-aware timestamp formatting
//! - [`models`]: Display implementations for value types
//! - [`notice`]: toast-style notices returned by editor transitions

pub mod collections;
pub mod datetime;
pub mod models;
pub mod notice;

pub use collections::{ScheduleView, StoredPlans, TodoList};
pub use datetime::{LocalDateTime, LocalTime};
pub use notice::{Notice, NoticeKind};
