//! Calculator drivers
//!
//! A driver owns one engine, feeds it one action per input event and
//! re-renders both display lines after every event. The `verify_*`
//! specifications are written once against `CalculatorDriver` and run on
//! every surface: the headless driver here and the DOM driver in `web`.

use tracing::warn;

use crate::config::EngineConfig;
use crate::core::{AngleMode, CalcResult, CalculatorEngine, DisplayFormatter, DisplayLines};
use crate::input::Action;

/// Abstract driver trait for calculator interactions
pub trait CalculatorDriver {
    /// Presses the button identified by an input token (`"7"`, `"pow"`, `"sqrt"`)
    fn press(&mut self, token: &str) -> CalcResult<()>;

    /// Presses a keyboard key by name; returns false for unbound keys
    fn key(&mut self, key: &str) -> bool;

    /// Text of the pending line
    fn pending_line(&self) -> String;

    /// Text of the current line
    fn current_line(&self) -> String;

    /// Current angle mode
    fn angle_mode(&self) -> AngleMode;

    /// Presses the clear button
    fn clear(&mut self);
}

/// Presses each token in order, stopping at the first unknown token
pub fn press_all<D: CalculatorDriver + ?Sized>(driver: &mut D, tokens: &[&str]) -> CalcResult<()> {
    tokens.iter().try_for_each(|token| driver.press(token))
}

/// Driver that renders into an in-memory pair of display lines
#[derive(Debug, Clone)]
pub struct HeadlessDriver {
    engine: CalculatorEngine,
    formatter: DisplayFormatter,
    lines: DisplayLines,
    mode_label: &'static str,
}

impl Default for HeadlessDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessDriver {
    /// Creates a headless driver with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates a headless driver with a custom configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let formatter = DisplayFormatter::from_config(&config);
        let engine = CalculatorEngine::with_config(config);
        let lines = DisplayLines::render(&engine, &formatter);
        let mode_label = engine.angle_mode().label();
        Self {
            engine,
            formatter,
            lines,
            mode_label,
        }
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the last rendered display lines
    #[must_use]
    pub fn lines(&self) -> &DisplayLines {
        &self.lines
    }

    /// Returns the angle mode indicator label (`"DEG"` or `"RAD"`)
    #[must_use]
    pub fn mode_label(&self) -> &'static str {
        self.mode_label
    }

    /// Dispatches one action and re-renders
    pub fn dispatch(&mut self, action: Action) {
        if let Some(mode) = self.engine.dispatch(action) {
            self.mode_label = mode.label();
        }
        self.lines = DisplayLines::render(&self.engine, &self.formatter);
    }
}

impl CalculatorDriver for HeadlessDriver {
    fn press(&mut self, token: &str) -> CalcResult<()> {
        let action = Action::from_token(token).map_err(|err| {
            warn!(%err, "rejected button");
            err
        })?;
        self.dispatch(action);
        Ok(())
    }

    fn key(&mut self, key: &str) -> bool {
        match Action::from_key(key) {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    fn pending_line(&self) -> String {
        self.lines.pending.clone()
    }

    fn current_line(&self) -> String {
        self.lines.current.clone()
    }

    fn angle_mode(&self) -> AngleMode {
        self.engine.angle_mode()
    }

    fn clear(&mut self) {
        self.press("clear").ok();
    }
}

// ===== Unified Test Specifications =====
// These work with ANY CalculatorDriver implementation

/// Verifies digit entry, decimal point handling and delete
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.current_line(), "0");

    // Leading zeros collapse
    press_all(driver, &["0", "0", "5"]).unwrap();
    assert_eq!(driver.current_line(), "5");

    // Second decimal point rejected
    press_all(driver, &[".", ".", "2"]).unwrap();
    assert_eq!(driver.current_line(), "5.2");

    driver.press("delete").unwrap();
    assert_eq!(driver.current_line(), "5.");
    press_all(driver, &["delete", "delete", "delete"]).unwrap();
    assert_eq!(driver.current_line(), "0");
    driver.clear();
}

/// Verifies left-to-right chaining without precedence
pub fn verify_chained_evaluation<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    press_all(driver, &["2", "+", "3", "*"]).unwrap();
    assert_eq!(driver.pending_line(), "5 *");
    assert_eq!(driver.current_line(), "");

    press_all(driver, &["4", "calculate"]).unwrap();
    assert_eq!(driver.pending_line(), "");
    assert_eq!(driver.current_line(), "20");

    // A digit after "=" starts a new entry
    driver.press("9").unwrap();
    assert_eq!(driver.current_line(), "9");

    // A result feeds the next operation
    press_all(driver, &["pow", "2", "calculate", "%", "7", "calculate"]).unwrap();
    assert_eq!(driver.current_line(), "4");
    driver.clear();
}

/// Verifies thousands grouping on both lines
pub fn verify_grouping<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    press_all(driver, &["1", "2", "3", "4", "5", "6", "7"]).unwrap();
    assert_eq!(driver.current_line(), "1,234,567");

    press_all(driver, &["+", "1", ".", "5", "0"]).unwrap();
    assert_eq!(driver.pending_line(), "1,234,567 +");
    assert_eq!(driver.current_line(), "1.50");
    driver.clear();
}

/// Verifies scientific functions and rounding
pub fn verify_scientific<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    press_all(driver, &["1", "6", "sqrt"]).unwrap();
    assert_eq!(driver.current_line(), "4");
    driver.clear();

    press_all(driver, &["9", "0", "sin"]).unwrap();
    assert_eq!(driver.current_line(), "1");
    driver.clear();

    press_all(driver, &["1", "0", "0", "log"]).unwrap();
    assert_eq!(driver.current_line(), "2");
    driver.clear();

    driver.press("pi").unwrap();
    assert_eq!(driver.current_line(), "3.141592653589793");
    driver.clear();
}

/// Verifies the angle mode toggle survives clears
pub fn verify_angle_mode<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    let initial = driver.angle_mode();

    driver.press("deg").unwrap();
    assert_eq!(driver.angle_mode(), initial.toggled());

    driver.clear();
    assert_eq!(driver.angle_mode(), initial.toggled());

    driver.press("deg").unwrap();
    assert_eq!(driver.angle_mode(), initial);
}

/// Verifies undefined results reach the display instead of failing
pub fn verify_undefined_results<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    press_all(driver, &["1", "/", "0", "calculate"]).unwrap();
    assert_eq!(driver.current_line(), "∞");
    driver.clear();

    press_all(driver, &["0", "-", "4", "calculate", "sqrt"]).unwrap();
    assert_eq!(driver.current_line(), "NaN");

    // A digit after NaN starts a new entry
    driver.press("3").unwrap();
    assert_eq!(driver.current_line(), "3");
    driver.clear();

    assert!(driver.press("sinh").is_err());
    assert_eq!(driver.current_line(), "0");
}

/// Verifies keyboard bindings
pub fn verify_keyboard<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    for key in ["1", "2", "+", "3", "Enter"] {
        assert!(driver.key(key));
    }
    assert_eq!(driver.current_line(), "15");

    assert!(driver.key("Backspace"));
    assert_eq!(driver.current_line(), "1");

    assert!(!driver.key("Tab"));
    assert!(driver.key("Escape"));
    assert_eq!(driver.current_line(), "0");
}

/// Complete verification suite - runs all specifications
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_chained_evaluation(driver);
    verify_grouping(driver);
    verify_scientific(driver);
    verify_angle_mode(driver);
    verify_undefined_results(driver);
    verify_keyboard(driver);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operand;

    #[test]
    fn test_headless_driver_new() {
        let driver = HeadlessDriver::new();
        assert_eq!(driver.current_line(), "0");
        assert_eq!(driver.pending_line(), "");
        assert_eq!(driver.mode_label(), "DEG");
    }

    #[test]
    fn test_headless_driver_with_config() {
        let config = EngineConfig::builder()
            .angle_mode(AngleMode::Radians)
            .group_separator(' ')
            .build();
        let mut driver = HeadlessDriver::with_config(config);
        assert_eq!(driver.mode_label(), "RAD");
        press_all(&mut driver, &["1", "0", "0", "0"]).unwrap();
        assert_eq!(driver.current_line(), "1 000");
    }

    #[test]
    fn test_headless_driver_mode_label_follows_toggle() {
        let mut driver = HeadlessDriver::new();
        driver.press("deg").unwrap();
        assert_eq!(driver.mode_label(), "RAD");
        driver.press("deg").unwrap();
        assert_eq!(driver.mode_label(), "DEG");
    }

    #[test]
    fn test_headless_driver_unknown_token_leaves_state() {
        let mut driver = HeadlessDriver::new();
        driver.press("5").unwrap();
        assert!(driver.press("asin").is_err());
        assert_eq!(driver.engine().current(), &Operand::Typing("5".into()));
    }

    #[test]
    fn test_press_all_stops_at_unknown_token() {
        let mut driver = HeadlessDriver::new();
        assert!(press_all(&mut driver, &["1", "bogus", "2"]).is_err());
        assert_eq!(driver.current_line(), "1");
    }

    #[test]
    fn test_headless_driver_lines() {
        let mut driver = HeadlessDriver::new();
        press_all(&mut driver, &["8", "-"]).unwrap();
        assert_eq!(driver.lines().pending, "8 -");
        assert_eq!(driver.lines().current, "");
    }

    // ===== Unified Specification Tests =====

    #[test]
    fn test_unified_digit_entry() {
        verify_digit_entry(&mut HeadlessDriver::new());
    }

    #[test]
    fn test_unified_chained_evaluation() {
        verify_chained_evaluation(&mut HeadlessDriver::new());
    }

    #[test]
    fn test_unified_grouping() {
        verify_grouping(&mut HeadlessDriver::new());
    }

    #[test]
    fn test_unified_scientific() {
        verify_scientific(&mut HeadlessDriver::new());
    }

    #[test]
    fn test_unified_angle_mode() {
        verify_angle_mode(&mut HeadlessDriver::new());
    }

    #[test]
    fn test_unified_undefined_results() {
        verify_undefined_results(&mut HeadlessDriver::new());
    }

    #[test]
    fn test_unified_keyboard() {
        verify_keyboard(&mut HeadlessDriver::new());
    }

    #[test]
    fn test_full_specification() {
        run_full_specification(&mut HeadlessDriver::new());
    }
}
