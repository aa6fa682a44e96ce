//! Condition trees
//!
//! A condition is either an atomic comparison against one fact, or a
//! boolean combinator over child conditions. Nesting is unbounded, so
//! `all`-of-`any` and `any`-of-`all` compose to arbitrary depth.

use super::Operator;
use crate::types::Value;
use serde::{Deserialize, Serialize};

/// Recursive condition tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Condition {
    /// Logical AND over children; an empty list is vacuously true
    All {
        all: Vec<Condition>,
    },
    /// Logical OR over children; an empty list is vacuously false
    Any {
        any: Vec<Condition>,
    },
    /// Atomic comparison against a single fact
    Comparison(Comparison),
}

/// Atomic comparison: look up `fact` and apply `operator` against `value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Name of the fact to look up
    pub fact: String,
    /// Comparison operator
    pub operator: Operator,
    /// Operand the fact value is compared against
    pub value: Value,
}

impl Condition {
    /// Build an `all` combinator
    pub fn all(children: Vec<Condition>) -> Self {
        Condition::All { all: children }
    }

    /// Build an `any` combinator
    pub fn any(children: Vec<Condition>) -> Self {
        Condition::Any { any: children }
    }

    /// Build an atomic comparison
    pub fn comparison(fact: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Condition::Comparison(Comparison {
            fact: fact.into(),
            operator,
            value: value.into(),
        })
    }

    /// Depth of the tree; an atomic node has depth 1
    pub fn depth(&self) -> usize {
        match self {
            Condition::Comparison(_) => 1,
            Condition::All { all: children } | Condition::Any { any: children } => {
                1 + children.iter().map(Condition::depth).max().unwrap_or(0)
            }
        }
    }
}
