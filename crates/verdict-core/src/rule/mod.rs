//! Rule definitions
//!
//! A `Rule` couples a condition tree with the event it fires; a `Ruleset`
//! is the ordered, read-only collection the engine evaluates against.

pub mod condition;
pub mod event;
pub mod operator;
pub mod outcome;

pub use condition::{Comparison, Condition};
pub use event::{Event, EventParams};
pub use operator::Operator;
pub use outcome::{Decision, Outcome, DEFAULT_APPROVED_MESSAGE};

use serde::{Deserialize, Serialize};

/// A single eligibility rule: a condition tree plus the event it emits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Optional identifier, used only in diagnostics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Condition tree that must evaluate true for the event to fire
    pub conditions: Condition,

    /// Event emitted when the conditions hold
    pub event: Event,
}

impl Rule {
    /// Create a new rule
    pub fn new(conditions: Condition, event: Event) -> Self {
        Rule {
            id: None,
            conditions,
            event,
        }
    }

    /// Set the rule id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Diagnostic label: the id if present, otherwise the event type
    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.event.event_type)
    }
}

/// Ordered, immutable collection of rules
///
/// Registration order is significant: it determines event emission order,
/// which the decision resolver's message tie-break depends on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ruleset {
    rules: Vec<Rule>,
}

impl Ruleset {
    /// Create an empty ruleset
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule, preserving registration order
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Builder-style append
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.add_rule(rule);
        self
    }

    /// The rules in registration order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl From<Vec<Rule>> for Ruleset {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl FromIterator<Rule> for Ruleset {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
