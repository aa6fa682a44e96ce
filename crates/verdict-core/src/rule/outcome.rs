//! Decision categories and resolved outcomes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default message for an application no rule objected to
pub const DEFAULT_APPROVED_MESSAGE: &str = "Application approved";

/// Final decision category
///
/// Severity is strictly `Declined > Pending > Approved`; within one
/// resolution pass the decision only ever moves toward higher severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Pending,
    Declined,
}

impl Decision {
    /// Severity rank used by the resolver's ratchet
    pub fn severity(&self) -> u8 {
        match self {
            Decision::Approved => 0,
            Decision::Pending => 1,
            Decision::Declined => 2,
        }
    }

    /// Wire spelling of the decision
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Approved => "approved",
            Decision::Pending => "pending",
            Decision::Declined => "declined",
        }
    }
}

impl FromStr for Decision {
    type Err = crate::error::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(Decision::Approved),
            "pending" => Ok(Decision::Pending),
            "declined" => Ok(Decision::Declined),
            other => Err(crate::error::CoreError::InvalidValue(format!(
                "unknown decision category: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single resolved result of one evaluation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Final decision
    pub decision: Decision,
    /// Explanatory message for the decision
    pub message: String,
}

impl Outcome {
    /// Create an outcome
    pub fn new(decision: Decision, message: impl Into<String>) -> Self {
        Outcome {
            decision,
            message: message.into(),
        }
    }

    /// The default outcome when no rule objects
    pub fn approved_default() -> Self {
        Outcome::new(Decision::Approved, DEFAULT_APPROVED_MESSAGE)
    }
}
