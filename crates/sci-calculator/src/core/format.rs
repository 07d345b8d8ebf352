//! Display formatting for the two-line calculator display
//!
//! The integer part of an operand is grouped with a thousands separator;
//! the decimal part is shown verbatim so partially typed input like `"12."`
//! or `"0.50"` is displayed exactly as typed.

use super::engine::CalculatorEngine;
use super::operand::Operand;
use crate::config::{EngineConfig, DEFAULT_GROUP_SEPARATOR};

/// Display text for NaN results
pub const NAN_TEXT: &str = "NaN";
/// Display text for positive infinity
pub const INFINITY_TEXT: &str = "∞";
/// Display text for negative infinity
pub const NEG_INFINITY_TEXT: &str = "-∞";

/// Renders operands into display text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFormatter {
    group_separator: char,
}

impl Default for DisplayFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_GROUP_SEPARATOR)
    }
}

impl DisplayFormatter {
    /// Creates a formatter with the given thousands separator
    #[must_use]
    pub const fn new(group_separator: char) -> Self {
        Self { group_separator }
    }

    /// Creates a formatter using the configured separator
    #[must_use]
    pub const fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.group_separator)
    }

    /// Returns the thousands separator
    #[must_use]
    pub const fn group_separator(&self) -> char {
        self.group_separator
    }

    /// Formats an operand for display
    #[must_use]
    pub fn format_operand(&self, operand: &Operand) -> String {
        if let Operand::Value(v) = operand {
            if v.is_nan() {
                return NAN_TEXT.to_string();
            }
            if v.is_infinite() {
                let text = if *v > 0.0 { INFINITY_TEXT } else { NEG_INFINITY_TEXT };
                return text.to_string();
            }
        }

        let text = operand.to_text();
        let (integer, decimals) = match text.split_once('.') {
            Some((integer, decimals)) => (integer, Some(decimals)),
            None => (text.as_str(), None),
        };

        let (sign, digits) = match integer.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", integer),
        };
        let integer_display = if digits.is_empty() {
            String::new()
        } else {
            format!("{sign}{}", self.group_digits(digits))
        };

        match decimals {
            Some(decimals) => format!("{integer_display}.{decimals}"),
            None => integer_display,
        }
    }

    /// Formats the pending line: `"<previous> <symbol>"`, or empty
    #[must_use]
    pub fn pending_line(&self, engine: &CalculatorEngine) -> String {
        match (engine.previous(), engine.pending()) {
            (Some(previous), Some(op)) => {
                format!("{} {}", self.format_operand(previous), op.symbol())
            }
            _ => String::new(),
        }
    }

    /// Formats the current entry line
    #[must_use]
    pub fn current_line(&self, engine: &CalculatorEngine) -> String {
        self.format_operand(engine.current())
    }

    fn group_digits(&self, digits: &str) -> String {
        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(c);
        }
        grouped
    }
}

/// The two display lines, as last rendered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayLines {
    /// Pending expression, e.g. `"1,234 +"`
    pub pending: String,
    /// Current entry, e.g. `"5.0"`
    pub current: String,
}

impl DisplayLines {
    /// Renders both lines from the engine state
    #[must_use]
    pub fn render(engine: &CalculatorEngine, formatter: &DisplayFormatter) -> Self {
        Self {
            pending: formatter.pending_line(engine),
            current: formatter.current_line(engine),
        }
    }
}
