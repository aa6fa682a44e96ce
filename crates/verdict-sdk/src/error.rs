//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Parser error
    #[error("Parser error: {0}")]
    Parse(#[from] verdict_parser::ParseError),

    /// Runtime error
    #[error("Runtime error: {0}")]
    Runtime(#[from] verdict_runtime::RuntimeError),

    /// I/O error reading a rule file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured sources produced no rules at all
    #[error("No rules loaded from the configured sources")]
    EmptyRuleset,
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
