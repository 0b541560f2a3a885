//! Operator registry for Cypher fragment rendering
//!
//! The registry groups immutable [`Operator`]s into the fixed set of
//! [`CategoryKind`]s. It is built once and only read afterwards, so any number
//! of callers may share it without locking.

#![warn(missing_docs)]

pub mod category;
pub mod config;
pub mod operator;
pub mod operators;
pub mod render;
pub mod validation;

pub use category::{Category, CategoryKind};
pub use config::RenderConfig;
pub use operator::{Arity, Operator, OperatorDefinition};
pub use render::Rendering;
pub use validation::Constraint;

use indexmap::IndexMap;
use std::sync::LazyLock;

use crate::error::{OperationError, OperationResult};

static GLOBAL: LazyLock<OperationResult<Registry>> = LazyLock::new(Registry::standard);

/// Catalog of all categories and their operators
#[derive(Debug, Clone)]
pub struct Registry {
    categories: IndexMap<CategoryKind, Category>,
    config: RenderConfig,
}

impl Registry {
    /// Process-wide registry, built on first access
    ///
    /// A catalog error is kept and returned on every call.
    pub fn global() -> OperationResult<&'static Registry> {
        GLOBAL.as_ref().map_err(Clone::clone)
    }

    /// Build a registry with all built-in operators and default rendering
    pub fn standard() -> OperationResult<Self> {
        Self::with_config(RenderConfig::default())
    }

    /// Build a registry with all built-in operators
    pub fn with_config(config: RenderConfig) -> OperationResult<Self> {
        let mut registry = Self::empty(config);
        operators::register_builtin_operators(&mut registry)?;
        log::debug!(
            "built operator registry: {} categories, {} operators",
            registry.categories.len(),
            registry.operator_count()
        );
        Ok(registry)
    }

    /// Registry holding every category but no operators
    pub(crate) fn empty(config: RenderConfig) -> Self {
        let categories = CategoryKind::ALL
            .into_iter()
            .map(|kind| (kind, Category::new(kind)))
            .collect();
        Self { categories, config }
    }

    /// Build an operator from `definition` and add it to its category
    pub(crate) fn register(&mut self, definition: OperatorDefinition) -> OperationResult<()> {
        let operator = Operator::with_config(definition, self.config)?;
        let kind = operator.category();
        match self.categories.get_mut(&kind) {
            Some(category) => category.insert(operator),
            None => Err(OperationError::initialization(
                operator.name(),
                format!("category {kind} is not part of the registry"),
            )),
        }
    }

    /// Look up a category by canonical name or alias
    pub fn category(&self, name: &str) -> OperationResult<&Category> {
        CategoryKind::from_name(name)
            .and_then(|kind| self.categories.get(&kind))
            .ok_or_else(|| OperationError::UnknownCategory {
                name: name.to_string(),
            })
    }

    /// Get a category by kind
    pub fn category_of(&self, kind: CategoryKind) -> Option<&Category> {
        self.categories.get(&kind)
    }

    /// Look up an operator by category and operator name or alias
    pub fn operator(&self, category: &str, name: &str) -> OperationResult<&Operator> {
        self.category(category)?.operator(name)
    }

    /// Categories in catalog order
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// Total number of operators across all categories
    pub fn operator_count(&self) -> usize {
        self.categories.values().map(Category::len).sum()
    }

    /// Render configuration shared by all operators
    pub fn render_config(&self) -> &RenderConfig {
        &self.config
    }
}
