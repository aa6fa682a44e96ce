//! Operator application against fact values
//!
//! The operator table follows a fail-soft contract: a missing fact or a
//! type-incompatible comparison evaluates to `Ok(false)`, while a
//! structurally malformed operand (a membership operator pointed at a
//! non-array value) is an error the engine neutralizes per rule.

use crate::error::{Result, RuntimeError};
use verdict_core::{Operator, Value};

/// Apply an operator to a (possibly absent) fact value and an operand
pub(crate) fn apply(fact: Option<&Value>, op: Operator, operand: &Value) -> Result<bool> {
    // A rule referencing a missing fact is not satisfied, never an error
    let fact = match fact {
        Some(v) => v,
        None => return Ok(false),
    };

    match op {
        Operator::Equal => Ok(loose_eq(fact, operand)),
        Operator::NotEqual => Ok(!loose_eq(fact, operand)),
        Operator::LessThan => Ok(compare(fact, operand, |a, b| a < b)),
        Operator::LessThanInclusive => Ok(compare(fact, operand, |a, b| a <= b)),
        Operator::GreaterThan => Ok(compare(fact, operand, |a, b| a > b)),
        Operator::GreaterThanInclusive => Ok(compare(fact, operand, |a, b| a >= b)),
        Operator::In => in_list(fact, operand),
        Operator::NotIn => in_list(fact, operand).map(|r| !r),
        Operator::Contains => Ok(contains(fact, operand)),
        Operator::DoesNotContain => Ok(!contains(fact, operand)),
    }
}

/// Value equality: numbers compare numerically, other kinds compare only
/// with their own kind; cross-type comparisons are false, not errors
fn loose_eq(fact: &Value, operand: &Value) -> bool {
    match (fact, operand) {
        (Value::Number(l), Value::Number(r)) => l == r,
        (Value::Bool(l), Value::Bool(r)) => l == r,
        (Value::String(l), Value::String(r)) => l == r,
        (Value::Array(l), Value::Array(r)) => l == r,
        (Value::Null, Value::Null) => true,
        _ => false,
    }
}

/// Numeric ordering; non-numeric operands fail the comparison
fn compare<F>(fact: &Value, operand: &Value, cmp: F) -> bool
where
    F: Fn(f64, f64) -> bool,
{
    match (fact.as_number(), operand.as_number()) {
        (Some(l), Some(r)) => cmp(l, r),
        _ => {
            tracing::debug!(
                fact_type = fact.type_name(),
                operand_type = operand.type_name(),
                "ordering comparison on non-numeric operand, not satisfied"
            );
            false
        }
    }
}

/// Membership of the fact value in the operand array
fn in_list(fact: &Value, operand: &Value) -> Result<bool> {
    let items = operand.as_array().ok_or_else(|| {
        RuntimeError::InvalidOperation(format!(
            "'in'/'notIn' requires an array operand, got {}",
            operand.type_name()
        ))
    })?;

    Ok(items.iter().any(|item| loose_eq(fact, item)))
}

/// Membership of the operand in an array-valued fact
fn contains(fact: &Value, operand: &Value) -> bool {
    match fact.as_array() {
        Some(items) => items.iter().any(|item| loose_eq(item, operand)),
        None => false,
    }
}
