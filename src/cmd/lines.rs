// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lines command implementation.
//!
//! Lines are written as the file's bytes, converted from the locale encoding
//! to the console encoding.
//!
//! ```text
//! open --> position (skip mode) --> current line is the first to print
//!      --> print / count until end of file
//! ```

use std::io::Write;

use anyhow::Context;
use tracing::debug;

use super::write_line;
use crate::cli::lines::{LinesArgs, SkipMode};
use crate::console::ConsoleFormatter;
use crate::error::Result;
use crate::reader::{FileLineReader, LineCounter, LineMatcher, RegexMatcher, SimpleLineCounter};

/// Prints a text file from the first line left after skipping.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the pattern is not a valid
/// regular expression, or output fails.
pub fn run_lines_command<W: Write + ?Sized>(
    args: &LinesArgs,
    formatter: &ConsoleFormatter,
    out: &mut W,
) -> Result<()> {
    if args.regex {
        if let Some(pattern) = args.pattern() {
            RegexMatcher::validate(pattern)
                .with_context(|| format!("invalid pattern '{pattern}'"))?;
        }
        let reader = FileLineReader::with_policies(
            &args.file,
            RegexMatcher::new(),
            SimpleLineCounter::default(),
        )?;
        print_lines(reader, args, formatter, out)
    } else {
        let reader = FileLineReader::open(&args.file)?;
        print_lines(reader, args, formatter, out)
    }
}

fn print_lines<M, C, W>(
    mut reader: FileLineReader<M, C>,
    args: &LinesArgs,
    formatter: &ConsoleFormatter,
    out: &mut W,
) -> Result<()>
where
    M: LineMatcher,
    C: LineCounter,
    W: Write + ?Sized,
{
    match args.skip_mode() {
        SkipMode::None => {
            reader.read_line()?;
        }
        SkipMode::Lines(count) => {
            // leaves the last skipped line current
            reader.skip_lines(count)?;
            reader.read_line()?;
        }
        SkipMode::While(pattern) => reader.skip_matching_lines(pattern)?,
        SkipMode::Until(pattern) => reader.skip_lines_until_match(pattern)?,
        SkipMode::One(pattern) => reader.skip_matching_line(pattern)?,
    }
    debug!(
        file = %reader.file_name().display(),
        skipped = %reader.line_count(),
        "reader positioned"
    );

    let mut printed = 0_u64;
    while reader.was_read_ok() {
        if !args.count {
            // narrow bytes, so the locale encoding drives the conversion
            let line = formatter.format(reader.current_line())?;
            if args.number {
                formatter.write_to(out, &format!("{:>6}  ", reader.line_count()))?;
            }
            out.write_all(&line)?;
            formatter.write_to(out, "\n")?;
        }
        printed += 1;
        reader.read_line()?;
    }

    if args.count {
        write_line(formatter, out, &printed.to_string())?;
    }
    Ok(())
}
