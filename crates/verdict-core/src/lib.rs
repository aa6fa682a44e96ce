//! Verdict Core - Core types and definitions for the Verdict eligibility engine
//!
//! This crate provides the fundamental types shared across the Verdict
//! workspace:
//! - Value and fact types for runtime data
//! - Rule, condition and operator definitions
//! - Event and decision outcome types
//! - Error types

pub mod error;
pub mod rule;
pub mod types;

// Re-export commonly used types
pub use error::CoreError;
pub use rule::{
    Comparison, Condition, Decision, Event, EventParams, Operator, Outcome, Rule, Ruleset,
    DEFAULT_APPROVED_MESSAGE,
};
pub use types::{FactSet, Value};
