//! Rendering configuration options

use serde::{Deserialize, Serialize};

use crate::error::{OperationError, OperationResult};

/// Configuration for how operands are written into fragments
///
/// Fixed when a registry is built and copied into every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Delimiter wrapped around text operands
    pub quote: char,

    /// Whether backslashes and the delimiter inside text are escaped
    pub escape_text: bool,
}

impl RenderConfig {
    /// Create a new render configuration with custom settings
    pub fn new(quote: char, escape_text: bool) -> Self {
        Self { quote, escape_text }
    }

    /// Wrap text in quotes exactly as given, without escaping
    pub fn verbatim() -> Self {
        Self {
            quote: '"',
            escape_text: false,
        }
    }

    /// Parse a configuration from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> OperationResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| OperationError::initialization("render config", e.to_string()))
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            quote: '"',
            escape_text: true,
        }
    }
}
