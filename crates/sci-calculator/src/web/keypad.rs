//! Keypad for the browser calculator page
//!
//! Layout:
//! ```text
//! [ sin ] [ cos ] [ tan ] [ deg ] [ AC  ]
//! [ log ] [ ln  ] [  √  ] [  π  ] [  e  ]
//! [  7  ] [  8  ] [  9  ] [  ÷  ] [ DEL ]
//! [  4  ] [  5  ] [  6  ] [  ×  ] [ xʸ  ]
//! [  1  ] [  2  ] [  3  ] [  -  ] [ mod ]
//! [  0  ] [  .  ] [  =  ] [  +  ]
//! ```

use super::dom::DomElement;
use crate::core::{AngleMode, Operation, ScientificFunction};
use crate::input::{Action, Command};

/// Attribute carrying the token of digit and point buttons
pub const DATA_NUMBER: &str = "data-number";
/// Attribute carrying the token of every other button
pub const DATA_ACTION: &str = "data-action";
/// Class shared by every keypad button
pub const KEYPAD_BUTTON_CLASS: &str = "keypad-btn";

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: Action,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(action: Action, row: usize, col: usize) -> Self {
        let id = match action {
            Action::Digit('.') => "btn-decimal".to_string(),
            Action::Digit(d) => format!("btn-{d}"),
            Action::Operation(op) => format!("btn-{}", op_name(op)),
            Action::Scientific(f) => format!("btn-{}", f.token()),
            Action::Command(Command::Calculate) => "btn-equals".to_string(),
            Action::Command(command) => format!("btn-{}", command.token()),
        };
        Self {
            action,
            id,
            row,
            col,
        }
    }

    /// Returns the button caption
    #[must_use]
    pub fn label(&self) -> String {
        match self.action {
            Action::Digit(d) => d.to_string(),
            Action::Operation(Operation::Multiply) => "×".to_string(),
            Action::Operation(Operation::Divide) => "÷".to_string(),
            Action::Operation(Operation::Power) => "xʸ".to_string(),
            Action::Operation(Operation::Modulo) => "mod".to_string(),
            Action::Operation(op) => op.symbol().to_string(),
            Action::Scientific(ScientificFunction::Sqrt) => "√".to_string(),
            Action::Scientific(ScientificFunction::Pi) => "π".to_string(),
            Action::Scientific(ScientificFunction::ToggleAngleMode) => {
                mode_caption(AngleMode::Degrees)
            }
            Action::Scientific(f) => f.token().to_string(),
            Action::Command(Command::Calculate) => "=".to_string(),
            Action::Command(Command::Clear) => "AC".to_string(),
            Action::Command(Command::Delete) => "DEL".to_string(),
        }
    }

    /// Returns the data attribute name and token for the DOM element
    #[must_use]
    pub fn data_attribute(&self) -> (&'static str, String) {
        match self.action {
            Action::Digit(_) => (DATA_NUMBER, self.action.token()),
            _ => (DATA_ACTION, self.action.token()),
        }
    }
}

/// Caption of the angle mode button for the given mode
#[must_use]
pub fn mode_caption(mode: AngleMode) -> String {
    mode.label().to_lowercase()
}

/// Returns a name for an operation (for element IDs)
fn op_name(op: Operation) -> &'static str {
    match op {
        Operation::Add => "plus",
        Operation::Subtract => "minus",
        Operation::Multiply => "times",
        Operation::Divide => "divide",
        Operation::Power => "power",
        Operation::Modulo => "mod",
    }
}

/// Scientific keypad layout definition
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Button definitions
    buttons: Vec<KeypadButtonDef>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard scientific keypad
    #[must_use]
    pub fn new() -> Self {
        use Action::{Command as Cmd, Digit, Operation as Op, Scientific as Sci};

        let layout: [&[Action]; 6] = [
            &[
                Sci(ScientificFunction::Sin),
                Sci(ScientificFunction::Cos),
                Sci(ScientificFunction::Tan),
                Sci(ScientificFunction::ToggleAngleMode),
                Cmd(Command::Clear),
            ],
            &[
                Sci(ScientificFunction::Log10),
                Sci(ScientificFunction::Ln),
                Sci(ScientificFunction::Sqrt),
                Sci(ScientificFunction::Pi),
                Sci(ScientificFunction::E),
            ],
            &[
                Digit('7'),
                Digit('8'),
                Digit('9'),
                Op(Operation::Divide),
                Cmd(Command::Delete),
            ],
            &[
                Digit('4'),
                Digit('5'),
                Digit('6'),
                Op(Operation::Multiply),
                Op(Operation::Power),
            ],
            &[
                Digit('1'),
                Digit('2'),
                Digit('3'),
                Op(Operation::Subtract),
                Op(Operation::Modulo),
            ],
            &[
                Digit('0'),
                Digit('.'),
                Cmd(Command::Calculate),
                Op(Operation::Add),
            ],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, actions)| {
                actions
                    .iter()
                    .enumerate()
                    .map(move |(col, action)| KeypadButtonDef::new(*action, row, col))
            })
            .collect();

        Self {
            buttons,
            cols: 5,
            rows: layout.len(),
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button that performs an action
    #[must_use]
    pub fn find_button_by_action(&self, action: Action) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Creates DOM elements for all keypad buttons
    #[must_use]
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|btn| {
                let (attr, token) = btn.data_attribute();
                DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(&btn.label())
                    .with_class(KEYPAD_BUTTON_CLASS)
                    .with_class(&format!("keypad-row-{}", btn.row))
                    .with_class(&format!("keypad-col-{}", btn.col))
                    .with_attr(attr, &token)
            })
            .collect()
    }
}
