//! Binary operations, scientific functions and angle modes

use serde::{Deserialize, Serialize};
use std::f64::consts::{E, PI};
use std::fmt;

/// Binary operation awaiting its right-hand operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Modulo (%)
    Modulo,
    /// Power (^)
    Power,
}

impl Operation {
    /// All binary operations, in keypad order
    pub const ALL: [Self; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
        Self::Power,
    ];

    /// Returns the operator symbol for the pending line
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Power => "^",
        }
    }

    /// Returns the input token that selects this operation
    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Power => "pow",
            other => other.symbol(),
        }
    }

    /// Looks up an operation by its input token
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.token() == token)
    }

    /// Applies the operation with IEEE-754 semantics.
    ///
    /// Division by zero yields an infinity (or NaN for `0 / 0`), and the
    /// remainder takes the sign of the dividend.
    #[must_use]
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
            Self::Modulo => lhs % rhs,
            Self::Power => lhs.powf(rhs),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// How trigonometric input is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AngleMode {
    /// Input is in degrees
    #[default]
    Degrees,
    /// Input is in radians
    Radians,
}

impl AngleMode {
    /// Returns the other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Degrees => Self::Radians,
            Self::Radians => Self::Degrees,
        }
    }

    /// Indicator label for the mode
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Degrees => "DEG",
            Self::Radians => "RAD",
        }
    }

    /// Converts an angle in this mode to radians
    #[must_use]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Degrees => angle.to_radians(),
            Self::Radians => angle,
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unary scientific functions and constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScientificFunction {
    /// Sine
    Sin,
    /// Cosine
    Cos,
    /// Tangent
    Tan,
    /// Base-10 logarithm
    Log10,
    /// Natural logarithm
    Ln,
    /// Square root
    Sqrt,
    /// The constant π
    Pi,
    /// Euler's number
    E,
    /// Switch between degrees and radians
    ToggleAngleMode,
}

impl ScientificFunction {
    /// All scientific functions, in keypad order
    pub const ALL: [Self; 9] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Log10,
        Self::Ln,
        Self::Sqrt,
        Self::Pi,
        Self::E,
        Self::ToggleAngleMode,
    ];

    /// Returns the input token that selects this function
    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log10 => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
            Self::Pi => "pi",
            Self::E => "e",
            Self::ToggleAngleMode => "deg",
        }
    }

    /// Looks up a function by its input token
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.token() == token)
    }

    /// Returns the constant value for `Pi` and `E`
    #[must_use]
    pub const fn constant(&self) -> Option<f64> {
        match self {
            Self::Pi => Some(PI),
            Self::E => Some(E),
            _ => None,
        }
    }

    /// Evaluates a numeric function on `x`, unrounded.
    ///
    /// Returns `None` for constants and the mode toggle, which do not
    /// consume an operand.
    #[must_use]
    pub fn evaluate(&self, x: f64, mode: AngleMode) -> Option<f64> {
        let value = match self {
            Self::Sin => mode.to_radians(x).sin(),
            Self::Cos => mode.to_radians(x).cos(),
            Self::Tan => mode.to_radians(x).tan(),
            Self::Log10 => x.log10(),
            Self::Ln => x.ln(),
            Self::Sqrt => x.sqrt(),
            Self::Pi | Self::E | Self::ToggleAngleMode => return None,
        };
        Some(value)
    }
}

/// Rounds `value` to `decimals` places to suppress binary floating-point noise.
///
/// Returns `value` unchanged when `10^decimals` is not representable.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let Ok(exponent) = i32::try_from(decimals) else {
        return value;
    };
    let scale = 10f64.powi(exponent);
    if !scale.is_finite() {
        return value;
    }
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- Operation tests ---

    #[test]
    fn test_operation_symbols() {
        let symbols: Vec<_> = Operation::ALL.iter().map(Operation::symbol).collect();
        assert_eq!(symbols, vec!["+", "-", "*", "/", "%", "^"]);
    }

    #[test]
    fn test_operation_tokens() {
        assert_eq!(Operation::Power.token(), "pow");
        assert_eq!(Operation::Modulo.token(), "%");
        assert_eq!(Operation::from_token("pow"), Some(Operation::Power));
        assert_eq!(Operation::from_token("^"), None);
        assert_eq!(Operation::from_token("x"), None);
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(format!("{}", Operation::Power), "^");
    }

    #[test]
    fn test_apply_arithmetic() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operation::Subtract.apply(2.0, 3.0), -1.0);
        assert_eq!(Operation::Multiply.apply(4.0, 3.0), 12.0);
        assert_eq!(Operation::Divide.apply(12.0, 4.0), 3.0);
        assert_eq!(Operation::Power.apply(2.0, 10.0), 1024.0);
        assert_eq!(Operation::Modulo.apply(17.0, 5.0), 2.0);
    }

    #[test]
    fn test_divide_by_zero_is_infinite() {
        assert_eq!(Operation::Divide.apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(Operation::Divide.apply(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(Operation::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_modulo_sign_follows_dividend() {
        assert_eq!(Operation::Modulo.apply(-7.0, 3.0), -1.0);
        assert_eq!(Operation::Modulo.apply(7.0, -3.0), 1.0);
        assert!(Operation::Modulo.apply(7.0, 0.0).is_nan());
    }

    #[test]
    fn test_power_negative_base_fractional_exp_nan() {
        assert!(Operation::Power.apply(-2.0, 0.5).is_nan());
    }

    // --- AngleMode tests ---

    #[test]
    fn test_angle_mode_default_is_degrees() {
        assert_eq!(AngleMode::default(), AngleMode::Degrees);
    }

    #[test]
    fn test_angle_mode_toggle_and_label() {
        assert_eq!(AngleMode::Degrees.toggled(), AngleMode::Radians);
        assert_eq!(AngleMode::Radians.toggled(), AngleMode::Degrees);
        assert_eq!(AngleMode::Degrees.label(), "DEG");
        assert_eq!(format!("{}", AngleMode::Radians), "RAD");
    }

    #[test]
    fn test_angle_mode_to_radians() {
        assert!((AngleMode::Degrees.to_radians(180.0) - PI).abs() < 1e-15);
        assert_eq!(AngleMode::Radians.to_radians(1.5), 1.5);
    }

    // --- ScientificFunction tests ---

    #[test]
    fn test_scientific_tokens_round_trip() {
        for f in ScientificFunction::ALL {
            assert_eq!(ScientificFunction::from_token(f.token()), Some(f));
        }
        assert_eq!(ScientificFunction::from_token("asin"), None);
    }

    #[test]
    fn test_constants() {
        assert_eq!(ScientificFunction::Pi.constant(), Some(PI));
        assert_eq!(ScientificFunction::E.constant(), Some(E));
        assert_eq!(ScientificFunction::Sqrt.constant(), None);
    }

    #[test]
    fn test_evaluate_trig_in_degrees() {
        let sin = ScientificFunction::Sin
            .evaluate(30.0, AngleMode::Degrees)
            .unwrap();
        assert!((sin - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_trig_in_radians() {
        let cos = ScientificFunction::Cos
            .evaluate(PI, AngleMode::Radians)
            .unwrap();
        assert_eq!(cos, -1.0);
    }

    #[test]
    fn test_evaluate_logs_and_sqrt() {
        let mode = AngleMode::Degrees;
        assert_eq!(ScientificFunction::Log10.evaluate(1000.0, mode), Some(3.0));
        assert_eq!(ScientificFunction::Ln.evaluate(1.0, mode), Some(0.0));
        assert_eq!(ScientificFunction::Sqrt.evaluate(16.0, mode), Some(4.0));
        assert_eq!(
            ScientificFunction::Log10.evaluate(0.0, mode),
            Some(f64::NEG_INFINITY)
        );
        assert!(ScientificFunction::Ln.evaluate(-1.0, mode).unwrap().is_nan());
        assert!(ScientificFunction::Sqrt.evaluate(-1.0, mode).unwrap().is_nan());
    }

    #[test]
    fn test_evaluate_non_numeric_functions() {
        let mode = AngleMode::Radians;
        assert_eq!(ScientificFunction::Pi.evaluate(1.0, mode), None);
        assert_eq!(ScientificFunction::ToggleAngleMode.evaluate(1.0, mode), None);
    }

    // --- Rounding tests ---

    #[test]
    fn test_round_to_nine_places() {
        assert_eq!(round_to(0.1 + 0.2, 9), 0.3);
        assert_eq!(round_to(6.123_233_995_736_766e-17, 9), 0.0);
        assert_eq!(round_to(0.999_999_999_9, 9), 1.0);
    }

    #[test]
    fn test_round_to_unrepresentable_scale_is_identity() {
        assert_eq!(round_to(4.0, 400), 4.0);
        assert_eq!(round_to(0.5, u32::MAX), 0.5);
    }

    #[test]
    fn test_round_to_passes_special_values() {
        assert!(round_to(f64::NAN, 9).is_nan());
        assert_eq!(round_to(f64::NEG_INFINITY, 9), f64::NEG_INFINITY);
    }

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e10f64..1e10f64, b in -1e10f64..1e10f64) {
            prop_assert_eq!(Operation::Add.apply(a, b), Operation::Add.apply(b, a));
        }

        #[test]
        fn prop_multiply_identity(a in -1e10f64..1e10f64) {
            prop_assert_eq!(Operation::Multiply.apply(a, 1.0), a);
        }

        #[test]
        fn prop_toggle_is_involution(radians in any::<bool>()) {
            let mode = if radians { AngleMode::Radians } else { AngleMode::Degrees };
            prop_assert_eq!(mode.toggled().toggled(), mode);
        }

        #[test]
        fn prop_round_to_is_idempotent(x in -1e6f64..1e6f64) {
            let once = round_to(x, 9);
            prop_assert!((round_to(once, 9) - once).abs() < 1e-9);
        }
    }
}
