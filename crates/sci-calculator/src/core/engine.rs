//! Calculator engine state machine
//!
//! The engine holds the current entry, the left-hand operand of a pending
//! binary operation, the angle mode and the fresh-input flag. Every method
//! runs to completion and mutates only this state; invalid operands turn an
//! operation into a no-op instead of failing.

use tracing::{debug, trace};

use super::operand::Operand;
use super::operations::{round_to, AngleMode, Operation, ScientificFunction};
use crate::config::EngineConfig;
use crate::input::{Action, Command};

/// Calculator input/evaluation engine
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    /// Value being entered or just computed
    current: Operand,
    /// Left-hand operand of the pending operation
    previous: Option<Operand>,
    /// Binary operation awaiting its right-hand operand
    pending: Option<Operation>,
    /// Interpretation of trigonometric input
    angle_mode: AngleMode,
    /// Next digit starts a new entry instead of extending the current one
    fresh_input: bool,
    config: EngineConfig,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an engine with a custom configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            current: Operand::zero(),
            previous: None,
            pending: None,
            angle_mode: config.angle_mode,
            fresh_input: false,
            config,
        }
    }

    /// Returns the current entry
    #[must_use]
    pub fn current(&self) -> &Operand {
        &self.current
    }

    /// Returns the pending left-hand operand, if any
    #[must_use]
    pub fn previous(&self) -> Option<&Operand> {
        self.previous.as_ref()
    }

    /// Returns the pending operation, if any
    #[must_use]
    pub fn pending(&self) -> Option<Operation> {
        self.pending
    }

    /// Returns the angle mode
    #[must_use]
    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    /// Returns true if the next digit will start a new entry
    #[must_use]
    pub fn is_fresh_input(&self) -> bool {
        self.fresh_input
    }

    /// Returns the engine configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Restores the initial entry state. The angle mode is kept.
    pub fn reset(&mut self) {
        self.current = Operand::zero();
        self.previous = None;
        self.pending = None;
        self.fresh_input = false;
        trace!("engine reset");
    }

    /// Removes the last character of the current entry
    pub fn delete_last_digit(&mut self) {
        if self.current.is_non_finite() {
            debug!(current = %self.current, "delete on non-finite value, resetting entry");
            self.current = Operand::zero();
            return;
        }

        let mut text = self.current.to_text();
        if text == "0" {
            return;
        }
        if text.chars().count() == 1 {
            text = "0".to_string();
        } else {
            text.pop();
            // A lone sign left over from a negative result
            if text == "-" {
                text = "0".to_string();
            }
        }
        self.current = Operand::Typing(text);
    }

    /// Appends a digit (`'0'..='9'`) or the decimal point to the current entry
    pub fn append_digit(&mut self, token: char) {
        if !(token.is_ascii_digit() || token == '.') {
            debug!(%token, "ignoring non-digit token");
            return;
        }

        if self.fresh_input || self.current.is_non_finite() {
            self.current = Operand::empty();
            self.fresh_input = false;
        }

        let mut text = self.current.to_text();
        if token == '.' && text.contains('.') {
            return;
        }
        if text == "0" && token != '.' {
            text.clear();
        }
        text.push(token);
        self.current = Operand::Typing(text);
    }

    /// Selects a binary operation, folding any operation already pending
    pub fn choose_operation(&mut self, op: Operation) {
        if self.current.is_empty() {
            debug!(%op, "no current operand, ignoring operation");
            return;
        }
        if self.previous.is_some() {
            self.compute();
        }
        self.pending = Some(op);
        self.previous = Some(std::mem::replace(&mut self.current, Operand::empty()));
        trace!(%op, previous = ?self.previous, "operation pending");
    }

    /// Applies the pending operation to the pending and current operands.
    ///
    /// Returns true if a result was stored. Does not touch the fresh-input
    /// flag, so chained operations keep extending the next entry.
    pub fn compute(&mut self) -> bool {
        let lhs = self.previous.as_ref().and_then(Operand::number);
        let rhs = self.current.number();
        let (Some(lhs), Some(rhs), Some(op)) = (lhs, rhs, self.pending) else {
            debug!(
                previous = ?self.previous,
                current = %self.current,
                pending = ?self.pending,
                "nothing to compute"
            );
            return false;
        };

        let result = op.apply(lhs, rhs);
        trace!(lhs, %op, rhs, result, "computed");
        self.current = Operand::Value(result);
        self.pending = None;
        self.previous = None;
        true
    }

    /// The user-facing "=" action: compute, then start a fresh entry
    pub fn evaluate(&mut self) -> bool {
        let computed = self.compute();
        self.fresh_input = true;
        computed
    }

    /// Applies a scientific function to the current entry.
    ///
    /// Returns the new angle mode when `f` toggles it, so the caller can
    /// update its mode indicator.
    pub fn apply_unary(&mut self, f: ScientificFunction) -> Option<AngleMode> {
        if f == ScientificFunction::ToggleAngleMode {
            self.angle_mode = self.angle_mode.toggled();
            debug!(mode = %self.angle_mode, "angle mode toggled");
            return Some(self.angle_mode);
        }

        if let Some(constant) = f.constant() {
            self.current = Operand::Value(constant);
            return None;
        }

        let Some(x) = self.current.number() else {
            debug!(?f, current = %self.current, "unparsable operand, ignoring function");
            return None;
        };
        if let Some(raw) = f.evaluate(x, self.angle_mode) {
            let result = round_to(raw, self.config.precision);
            trace!(?f, x, result, "scientific result");
            self.current = Operand::Value(result);
            self.fresh_input = true;
        }
        None
    }

    /// Routes one input action to the matching engine operation
    pub fn dispatch(&mut self, action: Action) -> Option<AngleMode> {
        match action {
            Action::Digit(token) => self.append_digit(token),
            Action::Operation(op) => self.choose_operation(op),
            Action::Scientific(f) => return self.apply_unary(f),
            Action::Command(Command::Calculate) => {
                self.evaluate();
            }
            Action::Command(Command::Clear) => self.reset(),
            Action::Command(Command::Delete) => self.delete_last_digit(),
        }
        None
    }
}
