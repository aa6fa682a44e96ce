//! Builder pattern for DecisionEngine

use crate::config::EngineConfig;
use crate::decision_engine::DecisionEngine;
use crate::error::{Result, SdkError};
use std::path::PathBuf;
use verdict_core::{Rule, Ruleset};
use verdict_parser::RulesetParser;
use verdict_runtime::FailurePolicy;

/// Builder for DecisionEngine
///
/// Rule sources are loaded in a fixed order: files (in the order added),
/// then inline contents, then programmatic rules. That order is the
/// registration order the engine evaluates in.
///
/// # Example
///
/// ```rust,ignore
/// use verdict_sdk::{DecisionEngineBuilder, FailurePolicy};
///
/// let engine = DecisionEngineBuilder::new()
///     .add_rule_file("rules/intake.yaml")
///     .with_failure_policy(FailurePolicy::FailClosed)
///     .build()
///     .await?;
/// ```
pub struct DecisionEngineBuilder {
    config: EngineConfig,
    rules: Vec<Rule>,
}

impl DecisionEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
            rules: Vec::new(),
        }
    }

    /// Add a rule file (YAML or JSON)
    pub fn add_rule_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.rule_files.push(path.into());
        self
    }

    /// Add multiple rule files
    pub fn add_rule_files(mut self, paths: Vec<PathBuf>) -> Self {
        self.config.rule_files.extend(paths);
        self
    }

    /// Add rule content directly (alternative to a file path)
    ///
    /// # Arguments
    /// * `id` - Identifier for the document, used in diagnostics
    /// * `content` - YAML or JSON rule document
    pub fn add_rule_content(mut self, id: impl Into<String>, content: impl Into<String>) -> Self {
        self.config.rule_contents.push((id.into(), content.into()));
        self
    }

    /// Add a programmatically constructed rule
    pub fn add_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Set the failure policy applied when a whole run fails
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.config.failure_policy = policy;
        self
    }

    /// Override the default approved message
    pub fn with_default_message(mut self, message: impl Into<String>) -> Self {
        self.config.default_message = Some(message.into());
        self
    }

    /// Fail construction on the first malformed rule instead of skipping
    /// it with a warning
    pub fn strict_parsing(mut self, strict: bool) -> Self {
        self.config.strict_parsing = strict;
        self
    }

    /// Load all configured sources and construct the engine
    pub async fn build(self) -> Result<DecisionEngine> {
        let mut ruleset = Ruleset::new();

        for path in &self.config.rule_files {
            let content = tokio::fs::read_to_string(path).await?;
            let label = path.display().to_string();
            Self::parse_into(&label, &content, self.config.strict_parsing, &mut ruleset)?;
        }

        for (id, content) in &self.config.rule_contents {
            Self::parse_into(id, content, self.config.strict_parsing, &mut ruleset)?;
        }

        for rule in self.rules {
            ruleset.add_rule(rule);
        }

        if ruleset.is_empty() {
            return Err(SdkError::EmptyRuleset);
        }

        tracing::info!(rules = ruleset.len(), "decision engine ready");
        Ok(DecisionEngine::new(ruleset, self.config))
    }

    fn parse_into(
        source: &str,
        content: &str,
        strict: bool,
        ruleset: &mut Ruleset,
    ) -> Result<()> {
        if strict {
            let parsed = RulesetParser::parse_strict(content)?;
            for rule in parsed.rules() {
                ruleset.add_rule(rule.clone());
            }
        } else {
            let (parsed, diagnostics) = RulesetParser::parse(content)?;
            for diagnostic in &diagnostics {
                tracing::warn!(source, "skipped rule: {}", diagnostic);
            }
            for rule in parsed.rules() {
                ruleset.add_rule(rule.clone());
            }
        }
        Ok(())
    }
}

impl Default for DecisionEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
