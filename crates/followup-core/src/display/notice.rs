//! Toast-style notices produced by editor transitions.

use std::fmt;

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Validation,
}

/// A short message for the user about the outcome of an action.
///
/// Notices never signal errors; rejected input is dropped silently and real
/// failures surface as [`crate::ScheduleError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    /// Create a new success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    /// Create a new informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    /// Create a new validation notice.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Validation,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            NoticeKind::Success => "Success:",
            NoticeKind::Info => "Info:",
            NoticeKind::Validation => "Validation:",
        };
        writeln!(f, "{prefix} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_display() {
        let saved = Notice::success("Day 2 saved");
        assert_eq!(format!("{saved}"), "Success: Day 2 saved\n");

        let empty = Notice::validation("Add at least one task before executing");
        assert!(format!("{empty}").starts_with("Validation:"));

        assert_eq!(Notice::info("x").kind, NoticeKind::Info);
    }
}
