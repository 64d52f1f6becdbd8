//! Suggested touchpoints as supplied by the caller.

use serde::{Deserialize, Serialize};

use super::TaskType;

/// A suggested contact action relative to a reference time.
///
/// Every field is optional because suggestions arrive from an upstream
/// generator that does not guarantee completeness.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Touchpoint {
    /// Hours after the reference time at which to reach out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_hours: Option<f64>,

    /// Channel name (`email`, `call`, `whatsapp`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    /// Suggested message, becomes the task notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Touchpoint {
    /// Task type this touchpoint maps onto.
    pub fn task_type(&self) -> TaskType {
        TaskType::from_channel(self.channel.as_deref())
    }
}
