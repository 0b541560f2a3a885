//! Operand validation: accepted-type checks and category constraints

use serde::Serialize;

use crate::error::{OperationError, OperationResult};
use crate::model::{Operand, OperandTypes};

/// Extra rule an operator applies after type checking and normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    /// The right operand must not be a numeric zero
    NonZeroDivisor,
    /// Text may only be paired with text
    MatchingText,
}

impl Constraint {
    /// Check normalized operands against this constraint
    pub fn check(&self, operation: &str, operands: &[Operand]) -> OperationResult<()> {
        match (self, operands) {
            (Self::NonZeroDivisor, [_, right]) if right.is_zero() => {
                Err(OperationError::ZeroDivision {
                    operation: operation.to_string(),
                })
            }
            (Self::MatchingText, [left, right]) if left.is_text() != right.is_text() => {
                Err(OperationError::ArgumentMismatch {
                    operation: operation.to_string(),
                    left: left.operand_type(),
                    right: right.operand_type(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Reject the first operand, left to right, whose type is not accepted
///
/// Non-finite floats and complex numbers are rejected even by an operator
/// that accepts any type.
pub fn check_types(
    operation: &str,
    accepted: &OperandTypes,
    operands: &[Operand],
) -> OperationResult<()> {
    match operands
        .iter()
        .find(|operand| !operand.is_finite() || !accepted.accepts(operand.operand_type()))
    {
        Some(operand) => Err(OperationError::ArgumentType {
            operation: operation.to_string(),
            found: operand.operand_type(),
            accepted: accepted.clone(),
        }),
        None => Ok(()),
    }
}
