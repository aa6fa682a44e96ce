//! Verdict Runtime - rule evaluation and decision resolution
//!
//! This crate holds the evaluation core of the Verdict eligibility engine:
//! - `ConditionMatcher`: walks a condition tree against a fact set
//! - `RuleEngine`: runs every registered rule and collects fired events
//! - `DecisionResolver`: folds the event sequence into one outcome
//! - `FailurePolicy`: what to answer when a whole run fails
//!
//! Everything here is synchronous and pure; all I/O (loading rule
//! definitions) happens in collaborator crates before the core is invoked.

pub mod engine;
pub mod error;
pub mod policy;
pub mod resolver;

pub use engine::matcher::ConditionMatcher;
pub use engine::RuleEngine;
pub use error::{Result, RuntimeError};
pub use policy::FailurePolicy;
pub use resolver::DecisionResolver;
