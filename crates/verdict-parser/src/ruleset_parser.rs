//! Ruleset parser
//!
//! Parses rule documents into a `Ruleset`. A document is either a
//! top-level sequence of rules or a mapping with a `rules` key:
//!
//! ```yaml
//! rules:
//!   - conditions:
//!       all:
//!         - fact: productAvailed
//!           operator: equal
//!           value: IVF
//!     event:
//!       type: declined
//!       params:
//!         message: Application declined due to IVF product
//! ```
//!
//! YAML is parsed as a superset of JSON, so `.json` rule files load
//! through the same path.

use crate::error::{ParseError, Result};
use serde_yaml::Value as YamlValue;
use verdict_core::{Rule, Ruleset};

/// Rule document parser
pub struct RulesetParser;

impl RulesetParser {
    /// Parse a rule document leniently
    ///
    /// A malformed rule entry (unknown operator, missing field, wrong
    /// shape) is logged and skipped so one bad rule never takes down the
    /// whole ruleset; the skipped entries are returned as diagnostics.
    pub fn parse(content: &str) -> Result<(Ruleset, Vec<ParseError>)> {
        let entries = Self::rule_entries(content)?;

        let mut ruleset = Ruleset::new();
        let mut diagnostics = Vec::new();

        for (index, entry) in entries.into_iter().enumerate() {
            match serde_yaml::from_value::<Rule>(entry) {
                Ok(rule) => ruleset.add_rule(rule),
                Err(e) => {
                    log::warn!("skipping invalid rule at index {}: {}", index, e);
                    diagnostics.push(ParseError::InvalidRule {
                        index,
                        message: e.to_string(),
                    });
                }
            }
        }

        Ok((ruleset, diagnostics))
    }

    /// Parse a rule document, failing on the first malformed rule entry
    pub fn parse_strict(content: &str) -> Result<Ruleset> {
        let entries = Self::rule_entries(content)?;

        let mut ruleset = Ruleset::new();
        for (index, entry) in entries.into_iter().enumerate() {
            let rule =
                serde_yaml::from_value::<Rule>(entry).map_err(|e| ParseError::InvalidRule {
                    index,
                    message: e.to_string(),
                })?;
            ruleset.add_rule(rule);
        }

        Ok(ruleset)
    }

    /// Extract the rule entry sequence from the document
    fn rule_entries(content: &str) -> Result<Vec<YamlValue>> {
        let document: YamlValue = serde_yaml::from_str(content)?;

        match document {
            YamlValue::Sequence(entries) => Ok(entries),
            YamlValue::Mapping(_) => match document.get("rules") {
                Some(YamlValue::Sequence(entries)) => Ok(entries.clone()),
                Some(other) => Err(ParseError::InvalidDocument(format!(
                    "'rules' must be a sequence, got {:?}",
                    other
                ))),
                None => Err(ParseError::MissingField {
                    field: "rules".to_string(),
                }),
            },
            other => Err(ParseError::InvalidDocument(format!(
                "expected a sequence of rules or a mapping with a 'rules' key, got {:?}",
                other
            ))),
        }
    }
}
