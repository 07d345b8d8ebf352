//! Input adapter: maps button tokens and key names to calculator actions
//!
//! All string comparison happens here; the engine only ever sees `Action`.

use std::fmt;

use crate::core::{CalcError, CalcResult, Operation, ScientificFunction};

/// Named commands that are neither digits, operations nor functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Evaluate the pending operation ("=")
    Calculate,
    /// Reset the entry state
    Clear,
    /// Delete the last character of the entry
    Delete,
}

impl Command {
    /// All commands
    pub const ALL: [Self; 3] = [Self::Calculate, Self::Clear, Self::Delete];

    /// Returns the input token for this command
    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Calculate => "calculate",
            Self::Clear => "clear",
            Self::Delete => "delete",
        }
    }
}

/// A single calculator input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A digit `'0'..='9'` or the decimal point
    Digit(char),
    /// A binary operation
    Operation(Operation),
    /// A scientific function, constant or the angle mode toggle
    Scientific(ScientificFunction),
    /// Calculate, clear or delete
    Command(Command),
}

impl Action {
    /// Maps a button token (`"7"`, `"."`, `"pow"`, `"sqrt"`, `"clear"`, ...)
    /// to an action.
    pub fn from_token(token: &str) -> CalcResult<Self> {
        if let Some(digit) = single_digit(token) {
            return Ok(Self::Digit(digit));
        }
        if let Some(op) = Operation::from_token(token) {
            return Ok(Self::Operation(op));
        }
        if let Some(f) = ScientificFunction::from_token(token) {
            return Ok(Self::Scientific(f));
        }
        Command::ALL
            .into_iter()
            .find(|command| command.token() == token)
            .map(Self::Command)
            .ok_or_else(|| CalcError::UnknownToken(token.to_string()))
    }

    /// Maps a keyboard key name to an action.
    ///
    /// Digits, `.`, `+ - * /`, `Enter`/`=`, `Backspace` and `Escape` are
    /// bound; every other key is ignored.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        if let Some(digit) = single_digit(key) {
            return Some(Self::Digit(digit));
        }
        match key {
            "+" => Some(Self::Operation(Operation::Add)),
            "-" => Some(Self::Operation(Operation::Subtract)),
            "*" => Some(Self::Operation(Operation::Multiply)),
            "/" => Some(Self::Operation(Operation::Divide)),
            "Enter" | "=" => Some(Self::Command(Command::Calculate)),
            "Backspace" => Some(Self::Command(Command::Delete)),
            "Escape" => Some(Self::Command(Command::Clear)),
            _ => None,
        }
    }

    /// Returns the button token for this action
    #[must_use]
    pub fn token(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Operation(op) => op.token().to_string(),
            Self::Scientific(f) => f.token().to_string(),
            Self::Command(command) => command.token().to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

fn single_digit(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() || c == '.' => Some(c),
        _ => None,
    }
}

/// Terminal key mapping
#[cfg(feature = "tui")]
mod terminal {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{Action, Command};

    impl Action {
        /// Maps a terminal key event to an action.
        ///
        /// Control chords are never calculator input.
        #[must_use]
        pub fn from_key_event(event: KeyEvent) -> Option<Self> {
            let KeyEvent {
                code, modifiers, ..
            } = event;

            if modifiers.contains(KeyModifiers::CONTROL) {
                return None;
            }

            match code {
                KeyCode::Char(c) => Self::from_key(c.encode_utf8(&mut [0; 4])),
                KeyCode::Enter => Some(Self::Command(Command::Calculate)),
                KeyCode::Backspace => Some(Self::Command(Command::Delete)),
                KeyCode::Esc => Some(Self::Command(Command::Clear)),
                _ => None,
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::core::Operation;

        fn key_event(code: KeyCode) -> KeyEvent {
            KeyEvent::new(code, KeyModifiers::NONE)
        }

        #[test]
        fn test_key_event_digits() {
            for c in '0'..='9' {
                assert_eq!(
                    Action::from_key_event(key_event(KeyCode::Char(c))),
                    Some(Action::Digit(c))
                );
            }
        }

        #[test]
        fn test_key_event_operators() {
            assert_eq!(
                Action::from_key_event(key_event(KeyCode::Char('*'))),
                Some(Action::Operation(Operation::Multiply))
            );
        }

        #[test]
        fn test_key_event_commands() {
            assert_eq!(
                Action::from_key_event(key_event(KeyCode::Enter)),
                Some(Action::Command(Command::Calculate))
            );
            assert_eq!(
                Action::from_key_event(key_event(KeyCode::Backspace)),
                Some(Action::Command(Command::Delete))
            );
            assert_eq!(
                Action::from_key_event(key_event(KeyCode::Esc)),
                Some(Action::Command(Command::Clear))
            );
        }

        #[test]
        fn test_key_event_ctrl_ignored() {
            let event = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::CONTROL);
            assert_eq!(Action::from_key_event(event), None);
        }

        #[test]
        fn test_key_event_unbound() {
            assert_eq!(Action::from_key_event(key_event(KeyCode::Left)), None);
        }
    }
}
