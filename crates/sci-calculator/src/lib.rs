//! Scientific Calculator Engine
//!
//! The input/evaluation state machine behind a two-line scientific
//! calculator: digits build the current entry, binary operations chain
//! left to right without precedence, and unary functions act on the
//! current value immediately. The engine never fails; undefined math is
//! carried as NaN or infinity and shown on the display.
//!
//! Two drivers share one set of behavioral checks through
//! [`driver::CalculatorDriver`]: an in-memory [`driver::HeadlessDriver`]
//! and [`web::DomDriver`], which routes every press through a mock page.
//!
//! # Example
//!
//! ```rust
//! use sci_calculator::prelude::*;
//!
//! let mut driver = HeadlessDriver::new();
//! press_all(&mut driver, &["1", "2", "3", "4", "+", "6"]).unwrap();
//! assert_eq!(driver.pending_line(), "1,234 +");
//! assert_eq!(driver.current_line(), "6");
//!
//! driver.press("calculate").unwrap();
//! assert_eq!(driver.current_line(), "1,240");
//!
//! // Unknown tokens are rejected at the boundary
//! assert!(driver.press("sinh").is_err());
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod input;

/// Mock browser page - always available for testing
pub mod web;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{EngineConfig, EngineConfigBuilder};
    pub use crate::core::{
        AngleMode, CalcError, CalcResult, CalculatorEngine, DisplayFormatter, DisplayLines,
        Operand, Operation, ScientificFunction,
    };
    pub use crate::driver::{press_all, CalculatorDriver, HeadlessDriver};
    pub use crate::input::{Action, Command};
    pub use crate::web::{DomDriver, MockDom};
}
