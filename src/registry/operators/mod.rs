//! Built-in operator catalogs
//!
//! Boolean, string, collection and regex categories are reserved: the registry
//! creates them empty and no catalog registers into them yet.

mod comparison;
mod mathematical;

pub use comparison::COMPARISON_OPERATORS;
pub use mathematical::MATHEMATICAL_OPERATORS;

use crate::error::OperationResult;
use crate::registry::Registry;

/// Register all built-in operators
pub(crate) fn register_builtin_operators(registry: &mut Registry) -> OperationResult<()> {
    // Arithmetic operators
    mathematical::register_mathematical_operators(registry)?;

    // Comparison operators
    comparison::register_comparison_operators(registry)?;

    Ok(())
}
