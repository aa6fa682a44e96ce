//! Core DecisionEngine facade
//!
//! Owns the rule engine and resolver built from configuration and exposes
//! one call: `decide`. The fail-safe boundary of the system lives here —
//! a run-level failure is answered according to the configured
//! `FailurePolicy` instead of propagating to the caller.

use crate::config::EngineConfig;
use crate::error::Result;
use verdict_core::{Event, FactSet, Outcome, Ruleset};
use verdict_runtime::{DecisionResolver, RuleEngine};

/// High-level eligibility decision engine
pub struct DecisionEngine {
    engine: RuleEngine,
    resolver: DecisionResolver,
    config: EngineConfig,
}

impl DecisionEngine {
    /// Construct from an already-loaded ruleset and configuration
    ///
    /// Most callers go through `DecisionEngineBuilder` instead.
    pub fn new(ruleset: Ruleset, config: EngineConfig) -> Self {
        let mut resolver = DecisionResolver::new();
        if let Some(ref message) = config.default_message {
            resolver = resolver.with_default_message(message.clone());
        }

        Self {
            engine: RuleEngine::new(ruleset),
            resolver,
            config,
        }
    }

    /// Evaluate one applicant's facts into a decision outcome
    ///
    /// Never fails: if the evaluation run errors as a whole, the outcome
    /// is the configured failure policy's fallback.
    pub async fn decide(&self, facts: &FactSet) -> Outcome {
        match self.engine.run(facts) {
            Ok(events) => {
                tracing::debug!(fired = events.len(), "evaluation run complete");
                self.resolver.resolve(&events)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    policy = ?self.config.failure_policy,
                    "evaluation run failed, applying failure policy"
                );
                self.config.failure_policy.fallback_outcome()
            }
        }
    }

    /// Run the rules and return the raw fired events without resolving
    pub async fn run(&self, facts: &FactSet) -> Result<Vec<Event>> {
        Ok(self.engine.run(facts)?)
    }

    /// The rules this engine evaluates
    pub fn ruleset(&self) -> &Ruleset {
        self.engine.ruleset()
    }

    /// Get configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
