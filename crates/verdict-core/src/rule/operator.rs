//! Comparison operators for atomic conditions
//!
//! Operators form a closed enumeration bound at rule-load time: an unknown
//! operator spelling fails deserialization of the owning rule instead of
//! surviving as a free string.

use serde::{Deserialize, Serialize};

/// Comparison operators usable in atomic conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Value equality (==)
    #[serde(rename = "equal")]
    Equal,
    /// Value inequality (!=)
    #[serde(rename = "notEqual")]
    NotEqual,
    /// Numeric less than (<)
    #[serde(rename = "lessThan")]
    LessThan,
    /// Numeric less than or equal (<=)
    #[serde(rename = "lessThanInclusive")]
    LessThanInclusive,
    /// Numeric greater than (>)
    #[serde(rename = "greaterThan")]
    GreaterThan,
    /// Numeric greater than or equal (>=)
    #[serde(rename = "greaterThanInclusive")]
    GreaterThanInclusive,
    /// Fact value is a member of the operand array
    #[serde(rename = "in")]
    In,
    /// Fact value is not a member of the operand array
    #[serde(rename = "notIn")]
    NotIn,
    /// Array-valued fact contains the operand
    #[serde(rename = "contains")]
    Contains,
    /// Array-valued fact does not contain the operand
    #[serde(rename = "doesNotContain")]
    DoesNotContain,
}

impl Operator {
    /// Returns true for the numeric ordering operators
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            Operator::LessThan
                | Operator::LessThanInclusive
                | Operator::GreaterThan
                | Operator::GreaterThanInclusive
        )
    }

    /// Returns true for the equality operators
    pub fn is_equality(&self) -> bool {
        matches!(self, Operator::Equal | Operator::NotEqual)
    }

    /// Returns true for the membership operators
    pub fn is_membership(&self) -> bool {
        matches!(
            self,
            Operator::In | Operator::NotIn | Operator::Contains | Operator::DoesNotContain
        )
    }
}
