//! Configuration types for DecisionEngine

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use verdict_runtime::FailurePolicy;

/// Main engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Rule file path(s), loaded in order
    pub rule_files: Vec<PathBuf>,

    /// Inline rule documents (id, content) - alternative to file paths
    #[serde(skip)]
    pub rule_contents: Vec<(String, String)>,

    /// What to answer when a whole evaluation run fails
    pub failure_policy: FailurePolicy,

    /// Override for the default approved message
    pub default_message: Option<String>,

    /// Fail engine construction on the first malformed rule instead of
    /// skipping it with a warning
    pub strict_parsing: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            rule_files: Vec::new(),
            rule_contents: Vec::new(),
            failure_policy: FailurePolicy::default(),
            default_message: None,
            strict_parsing: false,
        }
    }

    /// Add a rule file
    pub fn with_rule_file(mut self, path: PathBuf) -> Self {
        self.rule_files.push(path);
        self
    }

    /// Set the failure policy
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Override the default approved message
    pub fn with_default_message(mut self, message: impl Into<String>) -> Self {
        self.default_message = Some(message.into());
        self
    }

    /// Enable strict parsing
    pub fn strict_parsing(mut self, strict: bool) -> Self {
        self.strict_parsing = strict;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
