//! Operand values passed to operations

use rust_decimal::Decimal;
use std::fmt;

use super::types::OperandType;

/// A typed value supplied to an operation invocation
///
/// Operands are never owned by an operator; they live only for the duration of
/// one call. The [`fmt::Display`] form is the raw value: text is neither quoted
/// nor escaped here. Quoting, and escaping under the default render
/// configuration, happens when an operator renders the operand.
///
/// Non-finite floats (`NaN`, infinities) have no Cypher literal and are
/// rejected by every operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Integer value (64-bit signed)
    Integer(i64),

    /// Floating point value
    Float(f64),

    /// Decimal value, scale preserved as given
    Decimal(Decimal),

    /// Text value
    Text(String),

    /// Text still held as raw bytes; normalized to [`Operand::Text`]
    ByteText(Vec<u8>),

    /// The Cypher `NULL` marker
    Null,

    /// Boolean value
    Boolean(bool),

    /// Complex number
    Complex {
        /// Real part
        re: f64,
        /// Imaginary part
        im: f64,
    },
}

impl Operand {
    /// Create a complex operand
    pub fn complex(re: f64, im: f64) -> Self {
        Self::Complex { re, im }
    }

    /// Create a text operand
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Get the semantic type of this operand
    ///
    /// Byte text and text share the `Text` type.
    pub fn operand_type(&self) -> OperandType {
        match self {
            Self::Integer(_) => OperandType::Integer,
            Self::Float(_) => OperandType::Float,
            Self::Decimal(_) => OperandType::Decimal,
            Self::Text(_) | Self::ByteText(_) => OperandType::Text,
            Self::Null => OperandType::Null,
            Self::Boolean(_) => OperandType::Boolean,
            Self::Complex { .. } => OperandType::Complex,
        }
    }

    /// Check if this operand is text
    pub fn is_text(&self) -> bool {
        self.operand_type() == OperandType::Text
    }

    /// Check if this operand is a numeric zero
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(i) => *i == 0,
            Self::Float(f) => *f == 0.0,
            Self::Decimal(d) => d.is_zero(),
            _ => false,
        }
    }

    /// Canonicalize the representation of this operand
    ///
    /// Byte text becomes UTF-8 text, replacing invalid sequences with U+FFFD.
    /// All other operands are returned unchanged.
    pub fn normalize(self) -> Self {
        match self {
            Self::ByteText(bytes) => match String::from_utf8(bytes) {
                Ok(text) => Self::Text(text),
                Err(err) => Self::Text(String::from_utf8_lossy(err.as_bytes()).into_owned()),
            },
            other => other,
        }
    }

    /// Check that no floating point component is `NaN` or infinite
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Float(x) => x.is_finite(),
            Self::Complex { re, im } => re.is_finite() && im.is_finite(),
            _ => true,
        }
    }

    /// Get the text content if this operand is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            // Debug keeps the trailing `.0` of integral floats
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Text(s) => f.write_str(s),
            Self::ByteText(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
            Self::Null => f.write_str("NULL"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Complex { re, im } => {
                if *im < 0.0 {
                    write!(f, "({re:?}{im:?}j)")
                } else {
                    write!(f, "({re:?}+{im:?}j)")
                }
            }
        }
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Decimal> for Operand {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<u8>> for Operand {
    fn from(value: Vec<u8>) -> Self {
        Self::ByteText(value)
    }
}

impl From<&[u8]> for Operand {
    fn from(value: &[u8]) -> Self {
        Self::ByteText(value.to_vec())
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_operand_types() {
        assert_eq!(Operand::from(1).operand_type(), OperandType::Integer);
        assert_eq!(Operand::from(1.5).operand_type(), OperandType::Float);
        assert_eq!(
            Operand::from(Decimal::from_str("1.2").unwrap()).operand_type(),
            OperandType::Decimal
        );
        assert_eq!(Operand::from("abc").operand_type(), OperandType::Text);
        assert_eq!(
            Operand::from(b"abc".as_slice()).operand_type(),
            OperandType::Text
        );
        assert_eq!(Operand::Null.operand_type(), OperandType::Null);
        assert_eq!(
            Operand::complex(1.0, 0.0).operand_type(),
            OperandType::Complex
        );
    }

    #[test]
    fn test_default_textual_form() {
        assert_eq!(Operand::from(-1).to_string(), "-1");
        assert_eq!(Operand::from(1.2).to_string(), "1.2");
        assert_eq!(Operand::from(-2.2).to_string(), "-2.2");
        assert_eq!(Operand::from(1.0).to_string(), "1.0");
        assert_eq!(
            Operand::from(Decimal::from_str("1.20").unwrap()).to_string(),
            "1.20"
        );
        assert_eq!(Operand::Null.to_string(), "NULL");
        assert_eq!(Operand::from(true).to_string(), "true");
        assert_eq!(Operand::complex(1.0, 0.0).to_string(), "(1.0+0.0j)");
        assert_eq!(Operand::complex(1.0, -2.0).to_string(), "(1.0-2.0j)");
    }

    #[test]
    fn test_normalize_byte_text() {
        let normalized = Operand::from(b"abc".to_vec()).normalize();
        assert_eq!(normalized, Operand::Text("abc".to_string()));

        let lossy = Operand::from(vec![b'a', 0xff]).normalize();
        assert_eq!(lossy, Operand::Text("a\u{fffd}".to_string()));

        // idempotent
        assert_eq!(normalized.clone().normalize(), normalized);
        assert_eq!(Operand::from(3).normalize(), Operand::Integer(3));
    }

    #[test]
    fn test_is_zero() {
        assert!(Operand::from(0).is_zero());
        assert!(Operand::from(0.0).is_zero());
        assert!(Operand::from(-0.0).is_zero());
        assert!(Operand::from(Decimal::from_str("0.00").unwrap()).is_zero());
        assert!(!Operand::from(1).is_zero());
        assert!(!Operand::from("0").is_zero());
        assert!(!Operand::Null.is_zero());
    }

    #[test]
    fn test_is_finite() {
        assert!(Operand::from(1.5).is_finite());
        assert!(Operand::from(i64::MAX).is_finite());
        assert!(Operand::complex(1.0, -2.0).is_finite());
        assert!(!Operand::from(f64::NAN).is_finite());
        assert!(!Operand::from(f64::NEG_INFINITY).is_finite());
        assert!(!Operand::complex(f64::NAN, f64::INFINITY).is_finite());
    }
}
