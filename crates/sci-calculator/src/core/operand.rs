//! Operand representation: raw text mid-entry, or a computed value

use std::fmt;

/// An operand on the calculator display
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Partially typed input, kept verbatim (`"0"`, `"12."`, `""`)
    Typing(String),
    /// A computed result or constant
    Value(f64),
}

impl Default for Operand {
    fn default() -> Self {
        Self::zero()
    }
}

impl Operand {
    /// The canonical zero entry
    #[must_use]
    pub fn zero() -> Self {
        Self::Typing("0".to_string())
    }

    /// The empty entry left behind after choosing an operation
    #[must_use]
    pub fn empty() -> Self {
        Self::Typing(String::new())
    }

    /// Returns true for the empty entry
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Typing(text) if text.is_empty())
    }

    /// Returns true if this is a computed value that is NaN or infinite
    #[must_use]
    pub fn is_non_finite(&self) -> bool {
        matches!(self, Self::Value(v) if !v.is_finite())
    }

    /// Parses the operand as a number.
    ///
    /// Returns `None` for empty or partial text such as `"."` and for NaN.
    #[must_use]
    pub fn number(&self) -> Option<f64> {
        let value = match self {
            Self::Typing(text) => text.parse::<f64>().ok()?,
            Self::Value(v) => *v,
        };
        (!value.is_nan()).then_some(value)
    }

    /// Returns the textual form of the operand
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Typing(text) => text.clone(),
            Self::Value(v) => value_text(*v),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Shortest round-trip decimal text of a value, never in exponent form
fn value_text(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "Infinity".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if v == 0.0 {
        // -0.0 is shown unsigned
        "0".to_string()
    } else {
        format!("{v}")
    }
}
