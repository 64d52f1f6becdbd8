//! Payload types exchanged with a plan executor.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::TaskType;

/// One task of an executed plan, addressed to a lead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Channel used for the action
    #[serde(rename = "type")]
    pub kind: TaskType,

    /// Lead the task is addressed to
    pub person_id: String,

    /// Final day number of the task
    pub day: u32,

    /// When the action is due
    pub scheduled_for: Timestamp,

    /// Free-text notes
    pub notes: String,
}

/// Result reported by an executor after a plan was accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteResponse {
    /// Identifier of the stored plan, when the executor assigns one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
}

impl ExecuteResponse {
    /// Response carrying a plan id.
    pub fn with_plan_id(plan_id: impl Into<String>) -> Self {
        Self {
            plan_id: Some(plan_id.into()),
        }
    }
}
