// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> ConsoleFormatter --> out
//!   echo, encoding, list, lines, config
//! ```
//!
//! Handlers write to any `io::Write` so they can be tested against a buffer.

pub mod config;
pub mod echo;
pub mod encoding;
pub mod lines;
pub mod list;


use std::io::Write;

use crate::console::ConsoleFormatter;
use crate::error::Result;

/// Writes `text` and a newline in the console encoding.
///
/// # Errors
///
/// Returns an error if the text cannot be converted or written.
pub fn write_line<W: Write + ?Sized>(
    formatter: &ConsoleFormatter,
    out: &mut W,
    text: &str,
) -> Result<()> {
    formatter.write_to(out, &format!("{text}\n"))?;
    Ok(())
}
