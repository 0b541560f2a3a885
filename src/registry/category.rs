//! Operator categories

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::fmt;

use super::operator::Operator;
use crate::error::{OperationError, OperationResult};

/// The fixed set of operator categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Arithmetic operators
    Mathematical,
    /// Comparison and predicate operators
    Comparison,
    /// Boolean connectives
    Boolean,
    /// String operators
    String,
    /// Collection operators
    Collection,
    /// Regular-expression matching
    Regex,
}

impl CategoryKind {
    /// All categories in catalog order
    pub const ALL: [CategoryKind; 6] = [
        Self::Mathematical,
        Self::Comparison,
        Self::Boolean,
        Self::String,
        Self::Collection,
        Self::Regex,
    ];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mathematical => "mathematical",
            Self::Comparison => "comparison",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Collection => "collection",
            Self::Regex => "regex",
        }
    }

    /// Short names the category also answers to
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Mathematical => &["math", "m"],
            Self::Comparison => &["compare", "c"],
            Self::Boolean => &["b"],
            Self::String => &["s"],
            Self::Collection => &["collect", "C"],
            Self::Regex => &["r"],
        }
    }

    /// Resolve a canonical name or alias; matching is case-sensitive
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name || kind.aliases().contains(&name))
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named group of operators
///
/// Reserved categories hold no operators but are otherwise fully usable.
#[derive(Debug, Clone)]
pub struct Category {
    kind: CategoryKind,
    operators: IndexMap<String, Operator>,
    aliases: FxHashMap<String, String>,
}

impl Category {
    /// Create an empty category
    pub fn new(kind: CategoryKind) -> Self {
        Self {
            kind,
            operators: IndexMap::new(),
            aliases: FxHashMap::default(),
        }
    }

    /// Which category this is
    pub fn kind(&self) -> CategoryKind {
        self.kind
    }

    /// Canonical category name
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Add an operator; its name and aliases must not be taken yet
    pub(crate) fn insert(&mut self, operator: Operator) -> OperationResult<()> {
        if operator.category() != self.kind {
            return Err(OperationError::initialization(
                operator.name(),
                format!(
                    "belongs to category {} but was registered in {}",
                    operator.category(),
                    self.kind
                ),
            ));
        }

        let mut seen = FxHashSet::default();
        for name in operator.names() {
            if !seen.insert(name) {
                return Err(OperationError::initialization(
                    operator.name(),
                    format!("name '{name}' listed twice"),
                ));
            }
            if self.resolve(name).is_some() {
                return Err(OperationError::initialization(
                    operator.name(),
                    format!("name '{name}' already used in category {}", self.kind),
                ));
            }
        }

        for alias in operator.aliases() {
            self.aliases.insert(alias.clone(), operator.name().to_string());
        }
        self.operators.insert(operator.name().to_string(), operator);
        Ok(())
    }

    fn resolve(&self, name: &str) -> Option<&Operator> {
        self.operators.get(name).or_else(|| {
            self.aliases
                .get(name)
                .and_then(|canonical| self.operators.get(canonical))
        })
    }

    /// Look up an operator by canonical name or alias
    pub fn operator(&self, name: &str) -> OperationResult<&Operator> {
        self.resolve(name)
            .ok_or_else(|| OperationError::UnknownOperator {
                category: self.kind.name().to_string(),
                name: name.to_string(),
            })
    }

    /// Check if an operator with this name or alias exists
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Operators in catalog order
    pub fn operators(&self) -> impl Iterator<Item = &Operator> {
        self.operators.values()
    }

    /// Canonical operator names in catalog order
    pub fn operator_names(&self) -> Vec<&str> {
        self.operators.keys().map(|s| s.as_str()).collect()
    }

    /// Number of operators
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Whether the category defines no operators
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}
