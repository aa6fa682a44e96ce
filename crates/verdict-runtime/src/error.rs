//! Runtime error types

use thiserror::Error;

/// Runtime error type
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// A condition node is structurally unusable, e.g. a membership
    /// operator applied against a non-array operand
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Error bubbled up from core types
    #[error("Core error: {0}")]
    Core(#[from] verdict_core::CoreError),
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
