//! Cypher operation registry
//!
//! Typed operators that validate one or two operands and render them into
//! Cypher query fragments such as `a+b`, `"x" CONTAINS "y"` or `n IS NULL`.
//!
//! ```
//! use cypher_ops::Registry;
//!
//! let registry = Registry::global()?;
//! let add = registry.operator("math", "add")?;
//! assert_eq!(add.binary(1, 2)?, "1+2");
//!
//! let is_in = registry.operator("c", "is_in")?;
//! assert_eq!(is_in.binary(1, 2)?, "2 CONTAINS 1");
//! # Ok::<(), cypher_ops::OperationError>(())
//! ```

pub mod error;
pub mod model;
pub mod registry;

// Re-export main types
pub use error::{OperationError, OperationResult};
pub use model::{Operand, OperandType, OperandTypes};
pub use registry::{
    Arity, Category, CategoryKind, Constraint, Operator, OperatorDefinition, Registry,
    RenderConfig, Rendering,
};
