//! Decision resolution
//!
//! Folds the ordered event sequence of one run into a single outcome via
//! the precedence policy `declined > pending > approved`. The decision is
//! a one-way severity ratchet: it never moves back down within a pass.

use verdict_core::{Decision, Event, Outcome};

/// Resolves fired events into one decision outcome
#[derive(Debug, Clone)]
pub struct DecisionResolver {
    default_outcome: Outcome,
}

impl DecisionResolver {
    /// Create a resolver with the standard approved default
    pub fn new() -> Self {
        Self {
            default_outcome: Outcome::approved_default(),
        }
    }

    /// Override the message returned when no event escalates the decision
    pub fn with_default_message(mut self, message: impl Into<String>) -> Self {
        self.default_outcome.message = message.into();
        self
    }

    /// Resolve an event sequence into the final outcome
    ///
    /// Events are consumed in emission order. A declined event fixes the
    /// decision and takes the message (a later declined overwrites an
    /// earlier one's message). A pending event escalates only while the
    /// decision is not declined. Approved and unrecognized event types are
    /// no-ops: they can neither de-escalate nor replace the message.
    pub fn resolve(&self, events: &[Event]) -> Outcome {
        let mut outcome = self.default_outcome.clone();

        for event in events {
            match event.event_type.parse::<Decision>() {
                Ok(Decision::Declined) => {
                    outcome.decision = Decision::Declined;
                    outcome.message = event.params.message.clone();
                }
                Ok(Decision::Pending) => {
                    if outcome.decision != Decision::Declined {
                        outcome.decision = Decision::Pending;
                        outcome.message = event.params.message.clone();
                    }
                }
                Ok(Decision::Approved) => {}
                Err(_) => {
                    tracing::debug!(
                        event_type = %event.event_type,
                        "ignoring event with unrecognized decision category"
                    );
                }
            }
        }

        outcome
    }
}

impl Default for DecisionResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_core::DEFAULT_APPROVED_MESSAGE;

    fn declined(message: &str) -> Event {
        Event::new("declined", message)
    }

    fn pending(message: &str) -> Event {
        Event::new("pending", message)
    }

    fn approved(message: &str) -> Event {
        Event::new("approved", message)
    }

    #[test]
    fn test_empty_events_yield_default() {
        let outcome = DecisionResolver::new().resolve(&[]);
        assert_eq!(outcome.decision, Decision::Approved);
        assert_eq!(outcome.message, DEFAULT_APPROVED_MESSAGE);
    }

    #[test]
    fn test_declined_wins_over_pending_regardless_of_order() {
        let resolver = DecisionResolver::new();

        let outcome = resolver.resolve(&[pending("deps"), declined("ivf"), pending("medical")]);
        assert_eq!(outcome.decision, Decision::Declined);
        assert_eq!(outcome.message, "ivf");

        let outcome = resolver.resolve(&[declined("ivf"), pending("deps")]);
        assert_eq!(outcome.decision, Decision::Declined);
        assert_eq!(outcome.message, "ivf");
    }

    #[test]
    fn test_last_declined_wins_for_message() {
        let outcome =
            DecisionResolver::new().resolve(&[declined("first reason"), declined("second reason")]);
        assert_eq!(outcome.decision, Decision::Declined);
        assert_eq!(outcome.message, "second reason");
    }

    #[test]
    fn test_pending_escalates_from_approved() {
        let outcome = DecisionResolver::new().resolve(&[approved("ok"), pending("deps")]);
        assert_eq!(outcome.decision, Decision::Pending);
        assert_eq!(outcome.message, "deps");
    }

    #[test]
    fn test_pending_updates_message_while_not_declined() {
        let outcome = DecisionResolver::new().resolve(&[pending("deps"), pending("medical")]);
        assert_eq!(outcome.decision, Decision::Pending);
        assert_eq!(outcome.message, "medical");
    }

    #[test]
    fn test_approved_events_are_non_destructive() {
        let resolver = DecisionResolver::new();

        let outcome = resolver.resolve(&[pending("deps"), approved("looks fine")]);
        assert_eq!(outcome.decision, Decision::Pending);
        assert_eq!(outcome.message, "deps");

        let outcome = resolver.resolve(&[approved("looks fine")]);
        assert_eq!(outcome.decision, Decision::Approved);
        assert_eq!(outcome.message, DEFAULT_APPROVED_MESSAGE);
    }

    #[test]
    fn test_unknown_event_type_is_ignored() {
        let outcome = DecisionResolver::new().resolve(&[
            Event::new("escalated", "??"),
            pending("deps"),
        ]);
        assert_eq!(outcome.decision, Decision::Pending);
        assert_eq!(outcome.message, "deps");
    }

    #[test]
    fn test_monotonicity_appending_lower_severity_never_changes_decision() {
        let resolver = DecisionResolver::new();
        let base = vec![declined("ivf")];
        let resolved_base = resolver.resolve(&base);

        for tail in [pending("deps"), approved("ok")] {
            let mut extended = base.clone();
            extended.push(tail);
            assert_eq!(resolver.resolve(&extended).decision, resolved_base.decision);
        }
    }

    #[test]
    fn test_custom_default_message() {
        let resolver = DecisionResolver::new().with_default_message("No objections raised");
        let outcome = resolver.resolve(&[]);
        assert_eq!(outcome.message, "No objections raised");
    }
}
