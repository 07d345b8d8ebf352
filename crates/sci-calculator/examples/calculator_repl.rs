//! Calculator REPL Example
//!
//! Reads button tokens from stdin, one or more per line, and prints both
//! display lines after each line. Lines starting with `key` are treated
//! as keyboard key names instead (`key 1 + 2 Enter`).
//!
//! Run with: cargo run --example calculator_repl [config.json]
//! Set `RUST_LOG=sci_calculator=debug` to watch the engine.

use std::io::{self, BufRead, Write};

use sci_calculator::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => EngineConfig::default(),
    };
    let mut driver = HeadlessDriver::with_config(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print_display(&mut stdout, &driver)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace().peekable();

        if words.peek() == Some(&"key") {
            for key in words.skip(1) {
                if !driver.key(key) {
                    writeln!(stdout, "(unbound key {key:?})")?;
                }
            }
        } else {
            for token in words {
                if let Err(err) = driver.press(token) {
                    writeln!(stdout, "({err})")?;
                }
            }
        }

        print_display(&mut stdout, &driver)?;
    }

    Ok(())
}

fn print_display(out: &mut impl Write, driver: &HeadlessDriver) -> io::Result<()> {
    writeln!(out, "[{}] {}", driver.mode_label(), driver.pending_line())?;
    writeln!(out, "      {}", driver.current_line())?;
    out.flush()
}
