//! Events fired by triggered rules
//!
//! Events are ephemeral: created during one evaluation run and consumed
//! immediately by the decision resolver.

use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Event emitted when a rule's conditions evaluate true
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Decision category, e.g. "approved", "pending", "declined"
    #[serde(rename = "type")]
    pub event_type: String,

    /// Event parameters, at minimum the explanatory message
    pub params: EventParams,
}

/// Parameters carried by an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventParams {
    /// Explanatory message; may reference facts as `{factName}` placeholders
    /// that are substituted at emission time
    pub message: String,

    /// Any additional rule-defined parameters
    #[serde(flatten, default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, Value>,
}

impl Event {
    /// Create an event with just a type and message
    pub fn new(event_type: impl Into<String>, message: impl Into<String>) -> Self {
        Event {
            event_type: event_type.into(),
            params: EventParams {
                message: message.into(),
                extra: HashMap::new(),
            },
        }
    }

    /// Add an extra parameter
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.extra.insert(name.into(), value.into());
        self
    }
}
