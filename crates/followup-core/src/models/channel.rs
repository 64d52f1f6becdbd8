//! Outreach channel enumeration and per-channel counts.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of outreach channels a task can use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// Outbound email
    Email,

    /// Phone call
    Call,

    /// WhatsApp message
    WhatsappMessage,
}

impl TaskType {
    /// All channels in the order tasks are emitted within a day.
    pub const ALL: [TaskType; 3] = [TaskType::Email, TaskType::Call, TaskType::WhatsappMessage];

    /// Wire representation used in task payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Email => "email",
            TaskType::Call => "call",
            TaskType::WhatsappMessage => "whatsapp_message",
        }
    }

    /// Channel name with a consistent icon for display.
    ///
    /// ```rust
    /// use followup_core::models::TaskType;
    ///
    /// assert_eq!(TaskType::Call.with_icon(), "☎ Call");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskType::Email => "✉ Email",
            TaskType::Call => "☎ Call",
            TaskType::WhatsappMessage => "✆ WhatsApp",
        }
    }

    /// Maps a free-form touchpoint channel to a task type.
    ///
    /// Missing or unrecognized channels fall back to email.
    pub fn from_channel(channel: Option<&str>) -> Self {
        channel
            .and_then(|c| c.parse().ok())
            .unwrap_or(TaskType::Email)
    }
}

impl FromStr for TaskType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "email" | "emails" => Ok(TaskType::Email),
            "call" | "calls" | "phone" => Ok(TaskType::Call),
            "whatsapp" | "whatsapp_message" => Ok(TaskType::WhatsappMessage),
            _ => Err(format!("Invalid channel: {s}")),
        }
    }
}

/// Desired number of tasks per channel for one day.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelCounts {
    pub emails: usize,
    pub calls: usize,
    pub whatsapp: usize,
}

impl ChannelCounts {
    /// Count for a single channel.
    pub fn get(&self, kind: TaskType) -> usize {
        match kind {
            TaskType::Email => self.emails,
            TaskType::Call => self.calls,
            TaskType::WhatsappMessage => self.whatsapp,
        }
    }

    /// Total tasks across all channels.
    pub fn total(&self) -> usize {
        self.emails + self.calls + self.whatsapp
    }

    /// Tallies the channels of an iterator of task types.
    pub fn tally(kinds: impl IntoIterator<Item = TaskType>) -> Self {
        let mut counts = Self::default();
        for kind in kinds {
            match kind {
                TaskType::Email => counts.emails += 1,
                TaskType::Call => counts.calls += 1,
                TaskType::WhatsappMessage => counts.whatsapp += 1,
            }
        }
        counts
    }
}
