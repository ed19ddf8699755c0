//! Run condition model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason reported while a pipeline run still has work left
pub const REASON_RUNNING: &str = "Running";

/// Reason reported once every step run has succeeded
pub const REASON_SUCCEEDED: &str = "Succeeded";

/// Reason reported when a step run has failed
pub const REASON_FAILED: &str = "Failed";

/// Three-valued status of a condition
///
/// A step that has no run object at all is "not started"; that state is
/// modelled as an absent run, never as a `ConditionStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ConditionStatus {
    /// In progress or not yet resolved
    #[default]
    Unknown,
    /// Succeeded
    True,
    /// Failed
    False,
}

impl fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConditionStatus::Unknown => "Unknown",
            ConditionStatus::True => "True",
            ConditionStatus::False => "False",
        };
        f.write_str(s)
    }
}

/// Kind of condition attached to a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ConditionType {
    #[default]
    Succeeded,
}

/// A condition as carried by run objects and reported for a pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// What this condition describes
    #[serde(rename = "type", default)]
    pub condition_type: ConditionType,

    /// Current status
    #[serde(default)]
    pub status: ConditionStatus,

    /// Machine-readable reason for the status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Human-readable detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Condition {
    /// Create a `Succeeded` condition with the given status
    pub fn succeeded(status: ConditionStatus) -> Self {
        Self {
            condition_type: ConditionType::Succeeded,
            status,
            reason: None,
            message: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
