//! Shared test fixtures for SDK integration tests

use verdict_core::FactSet;
use verdict_sdk::{DecisionEngine, DecisionEngineBuilder};

/// The sample insurance intake ruleset as a YAML document
pub const INSURANCE_RULES_YAML: &str = r#"
rules:
  - id: agent_check
    conditions:
      all:
        - fact: isAIAAgent
          operator: equal
          value: true
    event:
      type: approved
      params:
        message: Proceed to next check
  - id: ivf_product
    conditions:
      all:
        - fact: productAvailed
          operator: equal
          value: IVF
    event:
      type: declined
      params:
        message: Application declined due to IVF product
  - id: maximum_age
    conditions:
      all:
        - fact: age
          operator: greaterThanInclusive
          value: 65
    event:
      type: declined
      params:
        message: Application declined due to age greater than 65
  - id: minimum_age
    conditions:
      all:
        - fact: age
          operator: lessThan
          value: 18
    event:
      type: declined
      params:
        message: Application declined due to age less than 18
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
  - id: medical_condition
    conditions:
      all:
        - fact: hasMedicalCondition
          operator: equal
          value: true
    event:
      type: pending
      params:
        message: Application pending due to medical condition
"#;

/// Build an engine over the sample insurance ruleset
pub async fn insurance_engine() -> DecisionEngine {
    DecisionEngineBuilder::new()
        .add_rule_content("insurance_intake", INSURANCE_RULES_YAML)
        .build()
        .await
        .expect("sample ruleset must build")
}

/// An applicant fact set in the shape the intake process supplies
pub fn applicant(
    is_agent: bool,
    product: &str,
    age: i64,
    dependents: bool,
    medical: bool,
) -> FactSet {
    FactSet::new()
        .with_fact("isAIAAgent", is_agent)
        .with_fact("productAvailed", product)
        .with_fact("age", age)
        .with_fact("hasDependents", dependents)
        .with_fact("hasMedicalCondition", medical)
}
