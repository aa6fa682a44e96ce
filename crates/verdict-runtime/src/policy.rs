//! Engine-boundary failure policy
//!
//! When a whole evaluation run fails, the caller still owes the applicant
//! an answer. Fail-open reports the approved default and is opt-in.
//! The default is fail-closed: route the application to manual review
//! instead of approving it.

use serde::{Deserialize, Serialize};
use verdict_core::{Decision, Outcome};

/// Message for applications parked by a fail-closed engine failure
pub const MANUAL_REVIEW_MESSAGE: &str = "Application pending manual review";

/// What to answer when the evaluation run itself fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Report the approved default, as the reference behavior did
    FailOpen,
    /// Park the application as pending manual review
    FailClosed,
}

impl FailurePolicy {
    /// The outcome reported when a run fails under this policy
    pub fn fallback_outcome(&self) -> Outcome {
        match self {
            FailurePolicy::FailOpen => Outcome::approved_default(),
            FailurePolicy::FailClosed => Outcome::new(Decision::Pending, MANUAL_REVIEW_MESSAGE),
        }
    }
}

impl Default for FailurePolicy {
    fn default() -> Self {
        FailurePolicy::FailClosed
    }
}
