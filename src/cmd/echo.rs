// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Echo command implementation.

use std::io::Write;

use crate::cli::text::EchoArgs;
use crate::console::ConsoleFormatter;
use crate::error::Result;

/// Writes the arguments, joined with spaces, in the console encoding.
///
/// # Errors
///
/// Returns an error if a character cannot be displayed by the console or
/// writing fails.
pub fn run_echo_command<W: Write + ?Sized>(
    args: &EchoArgs,
    formatter: &ConsoleFormatter,
    out: &mut W,
) -> Result<()> {
    let mut text = args.text.join(" ");
    if !args.no_newline {
        text.push('\n');
    }

    if args.raw {
        out.write_all(text.as_bytes())?;
    } else {
        formatter.write_to(out, &text)?;
    }
    Ok(())
}
