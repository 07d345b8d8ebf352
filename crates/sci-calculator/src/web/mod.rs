//! Browser page model for the calculator
//!
//! A mock DOM with the two display regions and a keypad whose buttons
//! carry their input token in a `data-number` or `data-action` attribute.

mod dom;
mod driver;
mod keypad;

pub use dom::{DomElement, DomEvent, MockDom, CURRENT_OPERAND_ID, PREVIOUS_OPERAND_ID};
pub use driver::DomDriver;
pub use keypad::{
    mode_caption, Keypad, KeypadButtonDef, DATA_ACTION, DATA_NUMBER, KEYPAD_BUTTON_CLASS,
};
