//! Verdict SDK - high-level API for eligibility decisions
//!
//! Wires rule loading, the evaluation engine and the decision resolver
//! into one facade:
//!
//! ```rust,ignore
//! use verdict_sdk::DecisionEngineBuilder;
//! use verdict_core::FactSet;
//!
//! let engine = DecisionEngineBuilder::new()
//!     .add_rule_file("rules/intake.yaml")
//!     .build()
//!     .await?;
//!
//! let facts = FactSet::new()
//!     .with_fact("isAIAAgent", true)
//!     .with_fact("productAvailed", "Health")
//!     .with_fact("age", 30i64);
//!
//! let outcome = engine.decide(&facts).await;
//! println!("{}: {}", outcome.decision, outcome.message);
//! ```

pub mod builder;
pub mod config;
pub mod decision_engine;
pub mod error;

pub use builder::DecisionEngineBuilder;
pub use config::EngineConfig;
pub use decision_engine::DecisionEngine;
pub use error::{Result, SdkError};

// Re-export the types callers need to build facts and read outcomes
pub use verdict_core::{Decision, Event, FactSet, Outcome, Rule, Ruleset, Value};
pub use verdict_runtime::FailurePolicy;
