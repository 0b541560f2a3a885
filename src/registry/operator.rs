// Copyright 2024 OctoFHIR Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Operator definitions and the invocation pipeline
//!
//! An [`Operator`] is built once from an [`OperatorDefinition`] and never
//! changes afterwards. Invoking it runs, in order: arity check, type check,
//! normalization, constraint checks and rendering.

use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

use super::category::CategoryKind;
use super::config::RenderConfig;
use super::render::{self, Rendering};
use super::validation::{self, Constraint};
use crate::error::{OperationError, OperationResult};
use crate::model::{Operand, OperandTypes};

/// Number of operands an operator takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arity {
    /// One operand
    Unary,
    /// Two operands
    Binary,
}

impl Arity {
    /// Convert a raw operand count, returning None for anything but 1 or 2
    pub fn from_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(Self::Unary),
            2 => Some(Self::Binary),
            _ => None,
        }
    }

    /// Number of operands
    pub fn count(&self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }

    /// Get the name of this arity
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unary => "unary",
            Self::Binary => "binary",
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unchecked description of an operator
///
/// Turned into an [`Operator`] by [`Operator::new`], which validates it.
#[derive(Debug, Clone)]
pub struct OperatorDefinition {
    /// Category the operator belongs to
    pub category: CategoryKind,
    /// Canonical name, unique within the category
    pub name: String,
    /// Human-readable name; derived from `name` when absent
    pub display_name: Option<String>,
    /// Short lookup names
    pub aliases: Vec<String>,
    /// Token inserted into the fragment
    pub symbol: String,
    /// Raw operand count; must be 1 or 2
    pub arity: u8,
    /// Accepted operand types; empty accepts any
    pub accepted: OperandTypes,
    /// Extra rules checked after normalization
    pub constraints: Vec<Constraint>,
    /// Rendering rule
    pub rendering: Rendering,
}

impl OperatorDefinition {
    /// Binary definition with no type restriction and no rendering rule
    pub fn new(
        category: CategoryKind,
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            category,
            name: name.into(),
            display_name: None,
            aliases: Vec::new(),
            symbol: symbol.into(),
            arity: 2,
            accepted: OperandTypes::any(),
            constraints: Vec::new(),
            rendering: Rendering::Unspecified,
        }
    }

    /// Binary infix definition
    pub fn binary(
        category: CategoryKind,
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        Self::new(category, name, symbol).rendering(Rendering::Infix)
    }

    /// Unary postfix definition
    pub fn unary(
        category: CategoryKind,
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        Self::new(category, name, symbol)
            .arity(1)
            .rendering(Rendering::Postfix)
    }

    /// Set the raw arity
    pub fn arity(mut self, arity: u8) -> Self {
        self.arity = arity;
        self
    }

    /// Add a lookup alias
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Set the human-readable name
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Restrict accepted operand types
    pub fn accepts(mut self, accepted: impl Into<OperandTypes>) -> Self {
        self.accepted = accepted.into();
        self
    }

    /// Add an extra validation rule
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        if !self.constraints.contains(&constraint) {
            self.constraints.push(constraint);
        }
        self
    }

    /// Set the rendering rule
    pub fn rendering(mut self, rendering: Rendering) -> Self {
        self.rendering = rendering;
        self
    }
}

/// An immutable, validated operation
///
/// Serializes to its introspection fields for catalog export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operator {
    category: CategoryKind,
    name: String,
    display_name: String,
    aliases: SmallVec<[String; 2]>,
    symbol: String,
    arity: Arity,
    accepted: OperandTypes,
    constraints: SmallVec<[Constraint; 2]>,
    rendering: Rendering,
    config: RenderConfig,
}

impl Operator {
    /// Build an operator with the default render configuration
    pub fn new(definition: OperatorDefinition) -> OperationResult<Self> {
        Self::with_config(definition, RenderConfig::default())
    }

    /// Build an operator, validating name, symbol and arity
    pub fn with_config(
        definition: OperatorDefinition,
        config: RenderConfig,
    ) -> OperationResult<Self> {
        let OperatorDefinition {
            category,
            name,
            display_name,
            aliases,
            symbol,
            arity,
            accepted,
            constraints,
            rendering,
        } = definition;

        if name.is_empty() {
            return Err(OperationError::initialization(name, "name must be set"));
        }
        if symbol.is_empty() {
            return Err(OperationError::initialization(name, "symbol must be set"));
        }
        let Some(arity) = Arity::from_count(arity) else {
            return Err(OperationError::initialization(
                name,
                "arity may only be 1 or 2",
            ));
        };
        if aliases.iter().any(|alias| alias.is_empty()) {
            return Err(OperationError::initialization(name, "alias must not be empty"));
        }

        let display_name = display_name.unwrap_or_else(|| name.replace('_', " "));

        Ok(Self {
            category,
            name,
            display_name,
            aliases: aliases.into_iter().collect(),
            symbol,
            arity,
            accepted,
            constraints: constraints.into_iter().collect(),
            rendering,
            config,
        })
    }

    /// Category this operator belongs to
    pub fn category(&self) -> CategoryKind {
        self.category
    }

    /// Canonical name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable name used in error messages
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Short lookup names
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Token inserted into rendered fragments
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Declared arity
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// `"unary"` or `"binary"`
    pub fn arity_name(&self) -> &'static str {
        self.arity.name()
    }

    /// Whether the operator takes one operand
    pub fn is_unary(&self) -> bool {
        self.arity == Arity::Unary
    }

    /// Whether the operator takes two operands
    pub fn is_binary(&self) -> bool {
        self.arity == Arity::Binary
    }

    /// Accepted operand types; empty accepts any
    pub fn accepted_operand_types(&self) -> &OperandTypes {
        &self.accepted
    }

    /// Extra validation rules
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Rendering rule
    pub fn rendering(&self) -> Rendering {
        self.rendering
    }

    /// Render configuration fixed at build time
    pub fn render_config(&self) -> &RenderConfig {
        &self.config
    }

    /// Canonical name followed by the aliases
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Check whether `name` is the canonical name or one of the aliases
    pub fn answers_to(&self, name: &str) -> bool {
        self.names().any(|n| n == name)
    }

    /// Invoke the operator and return the rendered fragment
    ///
    /// Text operands are wrapped in the configured quote character. With the
    /// default [`RenderConfig`], backslashes and quote characters inside the
    /// text are escaped, so `a\b` renders as `"a\\b"`. Build the registry with
    /// [`RenderConfig::verbatim`] to wrap text exactly as given.
    pub fn invoke(&self, operands: &[Operand]) -> OperationResult<String> {
        log::trace!("invoking {} with {} operand(s)", self, operands.len());

        let result = self.run(operands);
        match &result {
            Ok(fragment) => log::trace!("{} rendered {:?}", self, fragment),
            Err(err) => log::debug!("{} rejected invocation: {}", self, err),
        }
        result
    }

    /// Invoke with a single operand
    pub fn unary(&self, a: impl Into<Operand>) -> OperationResult<String> {
        self.invoke(&[a.into()])
    }

    /// Invoke with two operands
    pub fn binary(&self, a: impl Into<Operand>, b: impl Into<Operand>) -> OperationResult<String> {
        self.invoke(&[a.into(), b.into()])
    }

    fn run(&self, operands: &[Operand]) -> OperationResult<String> {
        if operands.len() != self.arity.count() {
            return Err(OperationError::Arity {
                operation: self.display_name.clone(),
                expected: self.arity.count(),
                given: operands.len(),
            });
        }

        validation::check_types(&self.display_name, &self.accepted, operands)?;

        let operands: SmallVec<[Operand; 2]> =
            operands.iter().cloned().map(Operand::normalize).collect();

        for constraint in &self.constraints {
            constraint.check(&self.display_name, &operands)?;
        }

        match operands.as_slice() {
            [a] => self.render_unary(a),
            [a, b] => self.render_binary(a, b),
            _ => Err(OperationError::Arity {
                operation: self.display_name.clone(),
                expected: self.arity.count(),
                given: operands.len(),
            }),
        }
    }

    // Only reachable through `run`, after validation
    fn render_unary(&self, a: &Operand) -> OperationResult<String> {
        match self.rendering {
            Rendering::Postfix => Ok(render::render_postfix(&self.symbol, a, &self.config)),
            _ => Err(self.not_implemented("render_unary")),
        }
    }

    fn render_binary(&self, a: &Operand, b: &Operand) -> OperationResult<String> {
        match self.rendering {
            Rendering::Infix => Ok(render::render_infix(&self.symbol, a, b, &self.config)),
            Rendering::SwappedInfix => Ok(render::render_infix(&self.symbol, b, a, &self.config)),
            _ => Err(self.not_implemented("render_binary")),
        }
    }

    fn not_implemented(&self, method: &'static str) -> OperationError {
        OperationError::Implementation {
            operation: self.display_name.clone(),
            method,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OperandType;

    fn plus() -> OperatorDefinition {
        OperatorDefinition::binary(CategoryKind::Mathematical, "add", "+")
            .accepts(OperandType::NUMERIC)
    }

    #[test]
    fn test_construction_rejects_empty_name() {
        let def = OperatorDefinition::binary(CategoryKind::Mathematical, "", "+");
        assert_eq!(
            Operator::new(def),
            Err(OperationError::initialization("", "name must be set"))
        );
    }

    #[test]
    fn test_construction_rejects_empty_symbol() {
        let def = OperatorDefinition::binary(CategoryKind::Mathematical, "add", "");
        assert_eq!(
            Operator::new(def),
            Err(OperationError::initialization("add", "symbol must be set"))
        );
    }

    #[test]
    fn test_construction_rejects_bad_arity() {
        for arity in [0, 3, 255] {
            let def = plus().arity(arity);
            assert_eq!(
                Operator::new(def),
                Err(OperationError::initialization(
                    "add",
                    "arity may only be 1 or 2"
                ))
            );
        }
    }

    #[test]
    fn test_construction_rejects_empty_alias() {
        let err = Operator::new(plus().alias("")).unwrap_err();
        assert!(matches!(err, OperationError::Initialization { .. }));
    }

    #[test]
    fn test_introspection() {
        let op = Operator::new(
            OperatorDefinition::unary(CategoryKind::Comparison, "is_not_null", " IS NOT NULL")
                .alias("n"),
        )
        .unwrap();
        assert_eq!(op.name(), "is_not_null");
        assert_eq!(op.display_name(), "is not null");
        assert_eq!(op.symbol(), " IS NOT NULL");
        assert_eq!(op.arity(), Arity::Unary);
        assert_eq!(op.arity_name(), "unary");
        assert!(op.is_unary());
        assert!(!op.is_binary());
        assert!(op.accepted_operand_types().is_any());
        assert!(op.answers_to("n"));
        assert!(op.answers_to("is_not_null"));
        assert!(!op.answers_to("N"));
        assert_eq!(op.to_string(), "comparison.is_not_null");
    }

    #[test]
    fn test_arity_error() {
        let op = Operator::new(plus()).unwrap();
        assert_eq!(
            op.invoke(&[Operand::from(1)]),
            Err(OperationError::Arity {
                operation: "add".to_string(),
                expected: 2,
                given: 1,
            })
        );
        assert!(matches!(
            op.invoke(&[]),
            Err(OperationError::Arity { given: 0, .. })
        ));
    }

    #[test]
    fn test_missing_rendering_rule() {
        let op = Operator::new(OperatorDefinition::new(
            CategoryKind::Boolean,
            "and",
            " AND ",
        ))
        .unwrap();
        assert_eq!(
            op.binary(true, false),
            Err(OperationError::Implementation {
                operation: "and".to_string(),
                method: "render_binary",
            })
        );

        let op = Operator::new(
            OperatorDefinition::new(CategoryKind::Boolean, "not", "NOT ").arity(1),
        )
        .unwrap();
        assert!(matches!(
            op.unary(true),
            Err(OperationError::Implementation {
                method: "render_unary",
                ..
            })
        ));
    }

    #[test]
    fn test_mismatched_rendering_rule() {
        // a binary rule on a unary operator is a catalog bug
        let op = Operator::new(
            OperatorDefinition::unary(CategoryKind::Comparison, "odd", " ODD")
                .rendering(Rendering::Infix),
        )
        .unwrap();
        assert!(matches!(
            op.unary(1),
            Err(OperationError::Implementation { .. })
        ));
    }

    #[test]
    fn test_pipeline_normalizes_before_constraints() {
        let op = Operator::new(
            OperatorDefinition::binary(CategoryKind::Comparison, "equal_to", "=")
                .accepts(OperandType::COMPARABLE)
                .constraint(Constraint::MatchingText),
        )
        .unwrap();
        assert_eq!(
            op.invoke(&[Operand::from(b"abc".as_slice()), Operand::from("def")]),
            Ok(r#""abc"="def""#.to_string())
        );
    }

    #[test]
    fn test_unrestricted_operator_accepts_any_type() {
        let op = Operator::new(OperatorDefinition::binary(
            CategoryKind::Collection,
            "append",
            " + ",
        ))
        .unwrap();
        assert_eq!(
            op.binary(true, Operand::complex(1.0, 2.0)),
            Ok("true + (1.0+2.0j)".to_string())
        );
    }
}
