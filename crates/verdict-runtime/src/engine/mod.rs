//! Rule evaluation engine
//!
//! Runs every registered rule against a fact set and collects the events
//! of the rules whose conditions hold. Rules are evaluated in registration
//! order and there is no early exit: a declined event does not stop later
//! rules from contributing, so the resolver sees every triggered concern.

pub mod matcher;
pub(crate) mod operators;
pub(crate) mod template;

use crate::error::Result;
use matcher::ConditionMatcher;
use std::sync::Arc;
use verdict_core::{Event, FactSet, Ruleset};

/// Evaluates an immutable ruleset against per-run fact sets
///
/// The ruleset is fixed at construction and shared behind an `Arc`, so one
/// engine can serve concurrent runs with different fact sets; all per-run
/// state is local to `run`.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    ruleset: Arc<Ruleset>,
}

impl RuleEngine {
    /// Create an engine over a ruleset
    pub fn new(ruleset: Ruleset) -> Self {
        Self {
            ruleset: Arc::new(ruleset),
        }
    }

    /// Create an engine over an already-shared ruleset
    pub fn from_shared(ruleset: Arc<Ruleset>) -> Self {
        Self { ruleset }
    }

    /// The rules this engine evaluates
    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    /// Evaluate every rule against `facts` and collect fired events in
    /// registration order
    ///
    /// A rule whose evaluation fails (malformed condition node) is logged
    /// and treated as condition-false; it never aborts the remaining rules.
    /// Fired event messages have `{factName}` placeholders substituted at
    /// emission time.
    pub fn run(&self, facts: &FactSet) -> Result<Vec<Event>> {
        let mut events = Vec::new();

        for rule in self.ruleset.rules() {
            let matched = match ConditionMatcher::matches(&rule.conditions, facts) {
                Ok(matched) => matched,
                Err(e) => {
                    tracing::warn!(
                        rule = rule.label(),
                        error = %e,
                        "rule evaluation failed, treating condition as false"
                    );
                    false
                }
            };

            if matched {
                let mut event = rule.event.clone();
                event.params.message = template::render(&event.params.message, facts);
                tracing::debug!(
                    rule = rule.label(),
                    event_type = %event.event_type,
                    "rule fired"
                );
                events.push(event);
            }
        }

        Ok(events)
    }
}
