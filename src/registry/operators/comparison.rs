//! Comparison operators for Cypher fragments
//!
//! Every comparison accepts numbers, text and `NULL`. Binary comparisons refuse
//! to pair text with anything but text.

use crate::error::OperationResult;
use crate::model::OperandType;
use crate::registry::{CategoryKind, Constraint, OperatorDefinition, Registry, Rendering};

/// Canonical names and symbols of the comparison operators, in catalog order
pub const COMPARISON_OPERATORS: [(&str, &str); 12] = [
    ("equal_to", "="),
    ("not_equal_to", "<>"),
    ("greater_than", ">"),
    ("greater_than_or_equal_to", ">="),
    ("less_than", "<"),
    ("less_than_or_equal_to", "<="),
    ("is_null", " IS NULL"),
    ("is_not_null", " IS NOT NULL"),
    ("starts_with", " STARTS WITH "),
    ("ends_with", " ENDS WITH "),
    ("contains", " CONTAINS "),
    ("is_in", " CONTAINS "),
];

fn binary(name: &str, symbol: &str) -> OperatorDefinition {
    OperatorDefinition::binary(CategoryKind::Comparison, name, symbol)
        .accepts(OperandType::COMPARABLE)
        .constraint(Constraint::MatchingText)
}

fn unary(name: &str, symbol: &str) -> OperatorDefinition {
    OperatorDefinition::unary(CategoryKind::Comparison, name, symbol)
        .accepts(OperandType::COMPARABLE)
}

fn definition(name: &str, symbol: &str) -> OperatorDefinition {
    match name {
        "equal_to" => binary(name, symbol).alias("eq"),
        "not_equal_to" => binary(name, symbol).alias("ne"),
        "greater_than" => binary(name, symbol).alias("gt"),
        "greater_than_or_equal_to" => binary(name, symbol).alias("gte"),
        "less_than" => binary(name, symbol).alias("lt"),
        "less_than_or_equal_to" => binary(name, symbol).alias("lte"),
        "is_null" => unary(name, symbol).alias("z"),
        "is_not_null" => unary(name, symbol).alias("n"),
        // `a is in b` reads as `b CONTAINS a`
        "is_in" => binary(name, symbol).rendering(Rendering::SwappedInfix),
        _ => binary(name, symbol),
    }
}

/// Register all comparison operators
pub(crate) fn register_comparison_operators(registry: &mut Registry) -> OperationResult<()> {
    for (name, symbol) in COMPARISON_OPERATORS {
        registry.register(definition(name, symbol))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OperationError;
    use crate::model::Operand;
    use crate::registry::{Arity, RenderConfig};

    fn registry() -> Registry {
        let mut registry = Registry::empty(RenderConfig::default());
        register_comparison_operators(&mut registry).unwrap();
        registry
    }

    #[test]
    fn test_catalog_shape() {
        let registry = registry();
        let comparison = registry.category("comparison").unwrap();
        assert_eq!(comparison.len(), COMPARISON_OPERATORS.len());

        for op in comparison.operators() {
            assert_eq!(
                op.accepted_operand_types().iter().collect::<Vec<_>>(),
                OperandType::COMPARABLE.to_vec()
            );
            match op.name() {
                "is_null" | "is_not_null" => {
                    assert_eq!(op.arity(), Arity::Unary);
                    assert_eq!(op.rendering(), Rendering::Postfix);
                    assert!(op.constraints().is_empty());
                }
                _ => {
                    assert_eq!(op.arity(), Arity::Binary);
                    assert_eq!(op.constraints(), &[Constraint::MatchingText]);
                }
            }
        }
    }

    #[test]
    fn test_aliases() {
        let registry = registry();
        let comparison = registry.category("c").unwrap();
        for (alias, name) in [
            ("eq", "equal_to"),
            ("ne", "not_equal_to"),
            ("gt", "greater_than"),
            ("gte", "greater_than_or_equal_to"),
            ("lt", "less_than"),
            ("lte", "less_than_or_equal_to"),
            ("z", "is_null"),
            ("n", "is_not_null"),
        ] {
            assert_eq!(comparison.operator(alias).unwrap().name(), name);
        }
    }

    #[test]
    fn test_is_in_swaps_operands() {
        let registry = registry();
        let is_in = registry.operator("compare", "is_in").unwrap();
        assert_eq!(is_in.binary(1, 2).unwrap(), "2 CONTAINS 1");
        assert_eq!(is_in.binary("a", "abc").unwrap(), r#""abc" CONTAINS "a""#);
    }

    #[test]
    fn test_null_compares_with_numbers_not_text() {
        let registry = registry();
        let eq = registry.operator("c", "eq").unwrap();
        assert_eq!(eq.binary(Operand::Null, 1).unwrap(), "NULL=1");
        assert_eq!(
            eq.binary(Operand::Null, "x"),
            Err(OperationError::ArgumentMismatch {
                operation: "equal to".to_string(),
                left: OperandType::Null,
                right: OperandType::Text,
            })
        );
    }

    #[test]
    fn test_predicates_render_postfix() {
        let registry = registry();
        let is_not_null = registry.operator("c", "n").unwrap();
        assert_eq!(is_not_null.unary("abc").unwrap(), r#""abc" IS NOT NULL"#);
        assert_eq!(is_not_null.unary(Operand::Null).unwrap(), "NULL IS NOT NULL");
    }
}
