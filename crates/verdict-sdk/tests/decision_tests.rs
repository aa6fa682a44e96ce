//! Integration tests for the SDK facade
//!
//! Runs the sample insurance ruleset end-to-end through the builder,
//! parser, engine and resolver.

mod common;

use common::{applicant, insurance_engine, INSURANCE_RULES_YAML};
use std::io::Write;
use verdict_core::{Decision, FactSet, DEFAULT_APPROVED_MESSAGE};
use verdict_sdk::{DecisionEngineBuilder, FailurePolicy, SdkError};

#[tokio::test]
async fn ivf_applicant_is_declined() {
    let engine = insurance_engine().await;
    let outcome = engine.decide(&applicant(true, "IVF", 30, false, false)).await;

    assert_eq!(outcome.decision, Decision::Declined);
    assert_eq!(outcome.message, "Application declined due to IVF product");
}

#[tokio::test]
async fn over_age_applicant_is_declined() {
    let engine = insurance_engine().await;
    let outcome = engine.decide(&applicant(true, "Health", 90, false, false)).await;

    assert_eq!(outcome.decision, Decision::Declined);
    assert_eq!(
        outcome.message,
        "Application declined due to age greater than 65"
    );
}

#[tokio::test]
async fn applicant_with_dependents_is_pending() {
    let engine = insurance_engine().await;
    let outcome = engine.decide(&applicant(true, "Health", 30, true, false)).await;

    assert_eq!(outcome.decision, Decision::Pending);
    assert_eq!(outcome.message, "Application pending due to dependents");
}

#[tokio::test]
async fn declined_wins_over_pending_events() {
    let engine = insurance_engine().await;
    let facts = applicant(true, "Health", 17, true, true);

    let events = engine.run(&facts).await.unwrap();
    let pending_count = events.iter().filter(|e| e.event_type == "pending").count();
    assert_eq!(pending_count, 2);

    let outcome = engine.decide(&facts).await;
    assert_eq!(outcome.decision, Decision::Declined);
    assert_eq!(outcome.message, "Application declined due to age less than 18");
}

#[tokio::test]
async fn non_agent_applicant_gets_the_default_approval() {
    let engine = insurance_engine().await;
    let outcome = engine.decide(&applicant(false, "Health", 30, false, false)).await;

    assert_eq!(outcome.decision, Decision::Approved);
    assert_eq!(outcome.message, DEFAULT_APPROVED_MESSAGE);
}

#[tokio::test]
async fn rules_load_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(INSURANCE_RULES_YAML.as_bytes()).unwrap();

    let engine = DecisionEngineBuilder::new()
        .add_rule_file(file.path())
        .build()
        .await
        .unwrap();

    assert_eq!(engine.ruleset().len(), 6);
    let outcome = engine.decide(&applicant(true, "IVF", 30, false, false)).await;
    assert_eq!(outcome.decision, Decision::Declined);
}

#[tokio::test]
async fn missing_rule_file_is_an_io_error() {
    let result = DecisionEngineBuilder::new()
        .add_rule_file("/nonexistent/rules.yaml")
        .build()
        .await;

    assert!(matches!(result, Err(SdkError::Io(_))));
}

#[tokio::test]
async fn empty_sources_are_rejected() {
    let result = DecisionEngineBuilder::new().build().await;
    assert!(matches!(result, Err(SdkError::EmptyRuleset)));
}

#[tokio::test]
async fn lenient_build_skips_a_malformed_rule() {
    let yaml = r#"
rules:
  - conditions:
      all:
        - fact: age
          operator: fuzzyMatch
          value: 65
    event:
      type: declined
      params:
        message: bad operator
  - id: dependents
    conditions:
      all:
        - fact: hasDependents
          operator: equal
          value: true
    event:
      type: pending
      params:
        message: Application pending due to dependents
"#;

    let engine = DecisionEngineBuilder::new()
        .add_rule_content("partial", yaml)
        .build()
        .await
        .unwrap();

    assert_eq!(engine.ruleset().len(), 1);
    let outcome = engine
        .decide(&FactSet::new().with_fact("hasDependents", true))
        .await;
    assert_eq!(outcome.decision, Decision::Pending);
}

#[tokio::test]
async fn strict_build_fails_on_a_malformed_rule() {
    let yaml = r#"
rules:
  - conditions:
      all:
        - fact: age
          operator: fuzzyMatch
          value: 65
    event:
      type: declined
      params:
        message: bad operator
"#;

    let result = DecisionEngineBuilder::new()
        .add_rule_content("broken", yaml)
        .strict_parsing(true)
        .build()
        .await;

    assert!(matches!(result, Err(SdkError::Parse(_))));
}

#[tokio::test]
async fn json_rule_content_loads_through_the_same_path() {
    let json = r#"{
        "rules": [
            {
                "conditions": {"all": [{"fact": "productAvailed", "operator": "in", "value": ["IVF", "Experimental"]}]},
                "event": {"type": "declined", "params": {"message": "Application declined due to {productAvailed} product"}}
            }
        ]
    }"#;

    let engine = DecisionEngineBuilder::new()
        .add_rule_content("products", json)
        .build()
        .await
        .unwrap();

    let outcome = engine
        .decide(&FactSet::new().with_fact("productAvailed", "Experimental"))
        .await;
    assert_eq!(outcome.decision, Decision::Declined);
    assert_eq!(
        outcome.message,
        "Application declined due to Experimental product"
    );
}

#[tokio::test]
async fn custom_default_message_is_reported_when_nothing_fires() {
    let engine = DecisionEngineBuilder::new()
        .add_rule_content("insurance_intake", INSURANCE_RULES_YAML)
        .with_default_message("No objections raised")
        .build()
        .await
        .unwrap();

    let outcome = engine.decide(&applicant(false, "Health", 30, false, false)).await;
    assert_eq!(outcome.decision, Decision::Approved);
    assert_eq!(outcome.message, "No objections raised");
}

#[tokio::test]
async fn sources_register_in_files_then_contents_then_rules_order() {
    use verdict_core::{Condition, Event, Operator, Rule};

    let engine = DecisionEngineBuilder::new()
        .add_rule_content("insurance_intake", INSURANCE_RULES_YAML)
        .add_rule(
            Rule::new(
                Condition::all(vec![]),
                Event::new("approved", "catch-all"),
            )
            .with_id("appended"),
        )
        .build()
        .await
        .unwrap();

    let labels: Vec<&str> = engine.ruleset().rules().iter().map(|r| r.label()).collect();
    assert_eq!(labels.first(), Some(&"agent_check"));
    assert_eq!(labels.last(), Some(&"appended"));
}

#[tokio::test]
async fn failure_policy_is_carried_in_config() {
    let engine = DecisionEngineBuilder::new()
        .add_rule_content("insurance_intake", INSURANCE_RULES_YAML)
        .with_failure_policy(FailurePolicy::FailOpen)
        .build()
        .await
        .unwrap();

    assert_eq!(engine.config().failure_policy, FailurePolicy::FailOpen);

    // Default stays fail-closed
    let engine = insurance_engine().await;
    assert_eq!(engine.config().failure_policy, FailurePolicy::FailClosed);
}

#[tokio::test]
async fn concurrent_decisions_share_one_engine() {
    let engine = std::sync::Arc::new(insurance_engine().await);

    let mut handles = Vec::new();
    for (facts, expected) in [
        (applicant(true, "IVF", 30, false, false), Decision::Declined),
        (applicant(true, "Health", 30, true, false), Decision::Pending),
        (applicant(false, "Health", 30, false, false), Decision::Approved),
    ] {
        let engine = engine.clone();
        handles.push(tokio::spawn(async move {
            let outcome = engine.decide(&facts).await;
            assert_eq!(outcome.decision, expected);
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }
}
