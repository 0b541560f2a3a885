//! Semantic operand types

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Semantic type of an operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperandType {
    /// Signed integer
    Integer,
    /// Floating point number
    Float,
    /// Fixed-point decimal
    Decimal,
    /// Text, whatever its source encoding
    Text,
    /// The Cypher `NULL` marker
    Null,
    /// Boolean value
    Boolean,
    /// Complex number
    Complex,
}

impl OperandType {
    /// Numeric types accepted by arithmetic operators
    pub const NUMERIC: [OperandType; 3] = [Self::Integer, Self::Float, Self::Decimal];

    /// Types accepted by comparison operators
    pub const COMPARABLE: [OperandType; 5] = [
        Self::Integer,
        Self::Float,
        Self::Decimal,
        Self::Text,
        Self::Null,
    ];

    /// Get the lowercase name of this type
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Text => "text",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Complex => "complex",
        }
    }

    /// Check if this type is numeric
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Float | Self::Decimal)
    }
}

impl fmt::Display for OperandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Ordered set of operand types accepted by an operator
///
/// An empty set accepts every type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<OperandType>")]
pub struct OperandTypes(SmallVec<[OperandType; 8]>);

impl OperandTypes {
    /// Set that accepts any type
    pub fn any() -> Self {
        Self::default()
    }

    /// Build a set from a list, dropping duplicates but keeping first-seen order
    pub fn from_slice(types: &[OperandType]) -> Self {
        let mut set = SmallVec::new();
        for ty in types {
            if !set.contains(ty) {
                set.push(*ty);
            }
        }
        Self(set)
    }

    /// Whether an operand of `ty` passes this set
    pub fn accepts(&self, ty: OperandType) -> bool {
        self.0.is_empty() || self.0.contains(&ty)
    }

    /// Whether this set places no restriction on operand types
    pub fn is_any(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of listed types
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no type is listed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the listed types in declaration order
    pub fn iter(&self) -> impl Iterator<Item = OperandType> + '_ {
        self.0.iter().copied()
    }
}

impl From<&[OperandType]> for OperandTypes {
    fn from(types: &[OperandType]) -> Self {
        Self::from_slice(types)
    }
}

impl From<Vec<OperandType>> for OperandTypes {
    fn from(types: Vec<OperandType>) -> Self {
        Self::from_slice(&types)
    }
}

impl<const N: usize> From<[OperandType; N]> for OperandTypes {
    fn from(types: [OperandType; N]) -> Self {
        Self::from_slice(&types)
    }
}

impl fmt::Display for OperandTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(any)");
        }
        f.write_str("(")?;
        for (i, ty) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{ty}")?;
        }
        f.write_str(")")
    }
}
