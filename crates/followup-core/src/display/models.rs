//! Display implementations for domain models.
//!
//! Markdown-friendly `Display` impls for the small value types. Types whose
//! rendering depends on a time zone are formatted through the wrappers in
//! [`super::collections`].

use std::fmt;

use crate::{
    editor::{ExecuteControl, ExecuteOutcome},
    models::{ChannelCounts, TaskType},
};

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ChannelCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} email{}, {} call{}, {} WhatsApp",
            self.emails,
            if self.emails == 1 { "" } else { "s" },
            self.calls,
            if self.calls == 1 { "" } else { "s" },
            self.whatsapp
        )
    }
}

impl fmt::Display for ExecuteControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for ExecuteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecuteOutcome::Skipped(notice) => write!(f, "{notice}"),
            ExecuteOutcome::Executed { plan_id, tasks } => {
                writeln!(f, "Success: Executed {tasks} tasks as plan {plan_id}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Notice;

    #[test]
    fn test_channel_counts_display() {
        let counts = ChannelCounts {
            emails: 1,
            calls: 2,
            whatsapp: 0,
        };
        assert_eq!(counts.to_string(), "1 email, 2 calls, 0 WhatsApp");
    }

    #[test]
    fn test_execute_outcome_display() {
        let executed = ExecuteOutcome::Executed {
            plan_id: "plan-1".to_string(),
            tasks: 3,
        };
        assert!(executed.to_string().contains("Executed 3 tasks as plan plan-1"));

        let skipped = ExecuteOutcome::Skipped(Notice::validation("Nothing to do"));
        assert_eq!(skipped.to_string(), "Validation: Nothing to do\n");
    }

    #[test]
    fn test_task_type_display_matches_wire_name() {
        assert_eq!(TaskType::WhatsappMessage.to_string(), "whatsapp_message");
        assert_eq!(ExecuteControl::Active.to_string(), "Active");
    }
}
