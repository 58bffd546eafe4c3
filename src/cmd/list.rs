// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation.

use std::io::Write;

use serde::Serialize;

use super::write_line;
use crate::cli::text::ListArgs;
use crate::console::ConsoleFormatter;
use crate::console::convert::Charset;
use crate::console::table::entries;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct EntryView {
    code_page: u32,
    name: &'static str,
    convertible: bool,
}

fn views() -> Vec<EntryView> {
    entries()
        .iter()
        .map(|entry| EntryView {
            code_page: entry.code_page,
            name: entry.name,
            convertible: Charset::for_name(entry.name).is_ok(),
        })
        .collect()
}

/// Prints the encoding table, one code page per line or as JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn run_list_command<W: Write + ?Sized>(
    args: &ListArgs,
    formatter: &ConsoleFormatter,
    out: &mut W,
) -> Result<()> {
    let views = views();

    if args.json {
        let json = serde_json::to_string_pretty(&views)?;
        return write_line(formatter, out, &json);
    }

    for view in &views {
        let note = if view.convertible {
            ""
        } else {
            "  (no converter)"
        };
        write_line(
            formatter,
            out,
            &format!("{:>5}  {}{note}", view.code_page, view.name),
        )?;
    }
    Ok(())
}
