//! Error types for operation invocation and catalog construction

use thiserror::Error;

use crate::model::{OperandType, OperandTypes};

/// Result type for operation building, lookup and invocation
pub type OperationResult<T> = Result<T, OperationError>;

/// Errors raised while building the catalog or invoking an operation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperationError {
    /// Malformed operator definition (empty name or symbol, bad arity)
    #[error("operation {operation}: {cause}")]
    Initialization {
        /// Name of the operation being built (may be empty)
        operation: String,
        /// What was wrong with the definition
        cause: String,
    },

    /// The operator has no rendering rule for the arity it was invoked with
    #[error("operation {operation} method {method} is not implemented")]
    Implementation {
        /// Operation name
        operation: String,
        /// Rendering hook that is missing
        method: &'static str,
    },

    /// Wrong number of operands for the operator
    #[error("operation {operation} with arity {expected} given invalid arity of {given}")]
    Arity {
        /// Operation name
        operation: String,
        /// Declared arity of the operator
        expected: usize,
        /// Number of operands supplied
        given: usize,
    },

    /// Operand type outside the operator's accepted set
    #[error("operation {operation} argument of type {found} not in types: {accepted}")]
    ArgumentType {
        /// Operation name
        operation: String,
        /// Observed type of the offending operand
        found: OperandType,
        /// Types the operator accepts
        accepted: OperandTypes,
    },

    /// Operand pairing forbidden by a category rule
    #[error(
        "operation {operation} with arguments of type {left} and {right} are not allowed together"
    )]
    ArgumentMismatch {
        /// Operation name
        operation: String,
        /// Type of the left operand
        left: OperandType,
        /// Type of the right operand
        right: OperandType,
    },

    /// Division with a zero right operand
    #[error("operation {operation} division by zero")]
    ZeroDivision {
        /// Operation name
        operation: String,
    },

    /// No category with this name or alias
    #[error("unknown operation category: {name}")]
    UnknownCategory {
        /// Requested name
        name: String,
    },

    /// No operator with this name or alias in the category
    #[error("unknown operation '{name}' in category {category}")]
    UnknownOperator {
        /// Category that was searched
        category: String,
        /// Requested name
        name: String,
    },
}

impl OperationError {
    /// Create an initialization error
    pub fn initialization(operation: impl Into<String>, cause: impl Into<String>) -> Self {
        Self::Initialization {
            operation: operation.into(),
            cause: cause.into(),
        }
    }

    /// Whether this error comes from a failed registry lookup
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            Self::UnknownCategory { .. } | Self::UnknownOperator { .. }
        )
    }

    /// Whether the caller can fix this error by changing its operands
    ///
    /// Initialization and implementation errors point at the catalog itself.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::Arity { .. }
                | Self::ArgumentType { .. }
                | Self::ArgumentMismatch { .. }
                | Self::ZeroDivision { .. }
        )
    }
}
