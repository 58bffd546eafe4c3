// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for bluesy.

use std::io::Write;

use super::write_line;
use crate::config::Config;
use crate::console::ConsoleFormatter;
use crate::error::Result;

/// Display current configuration options.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn run_options_command<W: Write + ?Sized>(
    config: &Config,
    formatter: &ConsoleFormatter,
    out: &mut W,
) -> Result<()> {
    for line in config.format_options() {
        write_line(formatter, out, &line)?;
    }
    Ok(())
}

/// Display loaded configuration files.
///
/// # Errors
///
/// Returns an error if a path cannot be displayed by the console or writing
/// fails.
pub fn run_configs_command<W: Write + ?Sized>(
    config_files: &[String],
    formatter: &ConsoleFormatter,
    out: &mut W,
) -> Result<()> {
    if config_files.is_empty() {
        return write_line(formatter, out, "No configuration files loaded");
    }
    for line in config_files {
        write_line(formatter, out, line)?;
    }
    Ok(())
}
