//! Verdict Parser - rule definition loading
//!
//! Converts YAML or JSON rule documents into a `Ruleset` before the
//! engine is constructed. This is the external-collaborator half of the
//! system: all file-format concerns live here, none in the runtime.

pub mod error;
pub mod ruleset_parser;

pub use error::{ParseError, Result};
pub use ruleset_parser::RulesetParser;
