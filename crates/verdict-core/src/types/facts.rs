//! Fact sets supplied per evaluation run
//!
//! A `FactSet` is the flat name → value mapping an applicant's data arrives
//! in. It is constructed by the caller, consumed by exactly one evaluation
//! run and never mutated by the engine.

use super::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Immutable mapping of fact name to scalar value for one evaluation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactSet {
    facts: HashMap<String, Value>,
}

impl FactSet {
    /// Create an empty fact set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fact, replacing any previous value under the same name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.facts.insert(name.into(), value.into());
    }

    /// Builder-style insert
    pub fn with_fact(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a fact by name; absence is not an error
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.facts.get(name)
    }

    /// Whether a fact with this name is present
    pub fn contains(&self, name: &str) -> bool {
        self.facts.contains_key(name)
    }

    /// Number of facts in the set
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Whether the set holds no facts
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Iterate over fact name/value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.facts.iter()
    }
}

impl From<HashMap<String, Value>> for FactSet {
    fn from(facts: HashMap<String, Value>) -> Self {
        Self { facts }
    }
}

impl FromIterator<(String, Value)> for FactSet {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            facts: iter.into_iter().collect(),
        }
    }
}
