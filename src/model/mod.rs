//! Operand model: values handed to operations and their semantic types

pub mod types;
pub mod value;

pub use types::{OperandType, OperandTypes};
pub use value::Operand;
