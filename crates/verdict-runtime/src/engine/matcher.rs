//! Condition tree matching
//!
//! Structural recursion over the condition tree with short-circuit
//! combinators. Pure: no side effects, deterministic for fixed inputs.

use super::operators;
use crate::error::Result;
use verdict_core::{Condition, FactSet};

/// Matches condition trees against a fact set
pub struct ConditionMatcher;

impl ConditionMatcher {
    /// Evaluate a condition tree against one fact set
    ///
    /// `all` is true iff every child is true and short-circuits at the
    /// first false child; `any` short-circuits at the first true child.
    /// An empty `all` is vacuously true, an empty `any` vacuously false.
    pub fn matches(condition: &Condition, facts: &FactSet) -> Result<bool> {
        match condition {
            Condition::All { all } => {
                for child in all {
                    if !Self::matches(child, facts)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Condition::Any { any } => {
                for child in any {
                    if Self::matches(child, facts)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Condition::Comparison(cmp) => {
                let satisfied = operators::apply(facts.get(&cmp.fact), cmp.operator, &cmp.value)?;
                tracing::trace!(
                    fact = %cmp.fact,
                    operator = ?cmp.operator,
                    satisfied,
                    "evaluated atomic condition"
                );
                Ok(satisfied)
            }
        }
    }
}
