// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Encoding command implementation.

use std::io::Write;

use super::write_line;
use crate::cli::text::EncodingArgs;
use crate::console::ConsoleFormatter;
use crate::console::platform::console_output_code_page;
use crate::console::table::resolve_encoding_name;
use crate::error::Result;

/// Looks up a code page, or shows the encodings the formatter would use.
///
/// # Errors
///
/// Returns an error if the code page is unknown or a platform query fails.
pub fn run_encoding_command<W: Write + ?Sized>(
    args: &EncodingArgs,
    formatter: &ConsoleFormatter,
    out: &mut W,
) -> Result<()> {
    if let Some(code_page) = args.code_page {
        let name = resolve_encoding_name(code_page)?;
        return write_line(formatter, out, &format!("{code_page} {name}"));
    }

    let settings = formatter.settings();
    let code_page = match settings.code_page() {
        Some(code_page) => code_page,
        None => console_output_code_page()?,
    };
    let pinned = |is_pinned: bool| if is_pinned { " (pinned)" } else { "" };

    write_line(
        formatter,
        out,
        &format!(
            "console: {code_page} {}{}",
            formatter.console_encoding()?,
            pinned(settings.code_page().is_some())
        ),
    )?;
    write_line(
        formatter,
        out,
        &format!(
            "locale: {}{}",
            formatter.source_encoding()?,
            pinned(settings.locale_encoding().is_some())
        ),
    )?;
    write_line(
        formatter,
        out,
        &format!("char width: {}", settings.char_width()),
    )
}
