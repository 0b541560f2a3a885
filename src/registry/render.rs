//! Fragment rendering and text quoting

use serde::Serialize;
use std::fmt::Write;

use super::config::RenderConfig;
use crate::model::Operand;

/// How an operator places its symbol relative to its operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rendering {
    /// No rendering rule; every render attempt fails
    #[default]
    Unspecified,
    /// `{a}{symbol}{b}`
    Infix,
    /// `{b}{symbol}{a}`
    SwappedInfix,
    /// `{a}{symbol}`
    Postfix,
}

impl Rendering {
    /// Whether this rule can render a single operand
    pub fn supports_unary(&self) -> bool {
        matches!(self, Self::Postfix)
    }

    /// Whether this rule can render two operands
    pub fn supports_binary(&self) -> bool {
        matches!(self, Self::Infix | Self::SwappedInfix)
    }
}

/// Write an operand in its fragment form
///
/// Text is quoted; everything else uses its default textual form.
pub fn write_operand(out: &mut String, operand: &Operand, config: &RenderConfig) {
    match operand {
        Operand::Text(text) => write_quoted(out, text, config),
        Operand::ByteText(bytes) => write_quoted(out, &String::from_utf8_lossy(bytes), config),
        other => {
            let _ = write!(out, "{other}");
        }
    }
}

fn write_quoted(out: &mut String, text: &str, config: &RenderConfig) {
    out.push(config.quote);
    if config.escape_text {
        for c in text.chars() {
            if c == '\\' || c == config.quote {
                out.push('\\');
            }
            out.push(c);
        }
    } else {
        out.push_str(text);
    }
    out.push(config.quote);
}

/// Render `{a}{symbol}`
pub fn render_postfix(symbol: &str, a: &Operand, config: &RenderConfig) -> String {
    let mut out = String::with_capacity(symbol.len() + 16);
    write_operand(&mut out, a, config);
    out.push_str(symbol);
    out
}

/// Render `{a}{symbol}{b}`
pub fn render_infix(symbol: &str, a: &Operand, b: &Operand, config: &RenderConfig) -> String {
    let mut out = String::with_capacity(symbol.len() + 32);
    write_operand(&mut out, a, config);
    out.push_str(symbol);
    write_operand(&mut out, b, config);
    out
}
