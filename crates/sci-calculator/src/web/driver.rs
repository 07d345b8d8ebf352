//! DOM Driver - Unified Testing Interface
//!
//! Implements `CalculatorDriver` on top of the mock DOM so the same
//! specifications run against the browser page and the headless driver.
//! Every press goes through a button click: the button's `data-number`
//! or `data-action` attribute is read back and mapped to an action.

use tracing::{debug, warn};

use super::dom::{DomEvent, MockDom, CURRENT_OPERAND_ID, PREVIOUS_OPERAND_ID};
use super::keypad::{mode_caption, Keypad, DATA_ACTION, DATA_NUMBER, KEYPAD_BUTTON_CLASS};
use crate::config::EngineConfig;
use crate::core::{
    AngleMode, CalcError, CalcResult, CalculatorEngine, DisplayFormatter, ScientificFunction,
};
use crate::driver::CalculatorDriver;
use crate::input::Action;

/// DOM driver wrapping an engine and the mock calculator page
#[derive(Debug)]
pub struct DomDriver {
    engine: CalculatorEngine,
    formatter: DisplayFormatter,
    keypad: Keypad,
    dom: MockDom,
}

impl Default for DomDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl DomDriver {
    /// Creates a DOM driver with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates a DOM driver with a custom configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let formatter = DisplayFormatter::from_config(&config);
        let engine = CalculatorEngine::with_config(config);
        let keypad = Keypad::new();
        let dom = MockDom::calculator(&keypad);
        let mut driver = Self {
            engine,
            formatter,
            keypad,
            dom,
        };
        driver.set_mode_caption(driver.engine.angle_mode());
        driver.update_display();
        driver
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Text of the previous-operand region
    #[must_use]
    pub fn previous_operand_text(&self) -> &str {
        self.dom.get_element_text(PREVIOUS_OPERAND_ID).unwrap_or_default()
    }

    /// Text of the current-operand region
    #[must_use]
    pub fn current_operand_text(&self) -> &str {
        self.dom.get_element_text(CURRENT_OPERAND_ID).unwrap_or_default()
    }

    /// Caption of the angle mode button
    #[must_use]
    pub fn mode_button_text(&self) -> &str {
        self.mode_button_id()
            .and_then(|id| self.dom.get_element_text(&id))
            .unwrap_or_default()
    }

    /// Simulates clicking an element.
    ///
    /// Fails with `UnknownToken` when the element is not a keypad button
    /// or carries a token no action is bound to.
    pub fn click(&mut self, element_id: &str) -> CalcResult<()> {
        self.dom.dispatch_event(DomEvent::click(element_id));

        let token = self
            .dom
            .get_element(element_id)
            .filter(|elem| elem.has_class(KEYPAD_BUTTON_CLASS))
            .and_then(|elem| elem.get_attr(DATA_NUMBER).or_else(|| elem.get_attr(DATA_ACTION)))
            .map(str::to_string)
            .ok_or_else(|| CalcError::UnknownToken(element_id.to_string()))?;

        let action = Action::from_token(&token)?;
        debug!(element_id, %action, "button clicked");
        self.dispatch(action);
        Ok(())
    }

    /// Simulates a keydown on the document; returns false for unbound keys
    pub fn key_down(&mut self, key: &str) -> bool {
        self.dom.dispatch_event(DomEvent::key_down(key));
        match Action::from_key(key) {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    fn dispatch(&mut self, action: Action) {
        if let Some(mode) = self.engine.dispatch(action) {
            self.set_mode_caption(mode);
        }
        self.update_display();
    }

    fn mode_button_id(&self) -> Option<String> {
        self.keypad
            .find_button_by_action(Action::Scientific(ScientificFunction::ToggleAngleMode))
            .map(|btn| btn.id.clone())
    }

    fn set_mode_caption(&mut self, mode: AngleMode) {
        if let Some(id) = self.mode_button_id() {
            self.dom.set_element_text(&id, &mode_caption(mode));
        }
    }

    /// Synchronizes both display regions with the engine state
    fn update_display(&mut self) {
        let pending = self.formatter.pending_line(&self.engine);
        let current = self.formatter.current_line(&self.engine);
        self.dom.set_element_text(PREVIOUS_OPERAND_ID, &pending);
        self.dom.set_element_text(CURRENT_OPERAND_ID, &current);
    }
}

impl CalculatorDriver for DomDriver {
    fn press(&mut self, token: &str) -> CalcResult<()> {
        let result = Action::from_token(token).and_then(|action| {
            self.keypad
                .find_button_by_action(action)
                .map(|btn| btn.id.clone())
                .ok_or_else(|| CalcError::UnknownToken(token.to_string()))
        });
        let id = result.map_err(|err| {
            warn!(%err, "rejected button");
            err
        })?;
        self.click(&id)
    }

    fn key(&mut self, key: &str) -> bool {
        self.key_down(key)
    }

    fn pending_line(&self) -> String {
        self.previous_operand_text().to_string()
    }

    fn current_line(&self) -> String {
        self.current_operand_text().to_string()
    }

    fn angle_mode(&self) -> AngleMode {
        self.engine.angle_mode()
    }

    fn clear(&mut self) {
        self.click("btn-clear").ok();
    }
}
