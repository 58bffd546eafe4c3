// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the `lines` command.
//!
//! ```text
//! lines FILE [--skip N | --skip-while P | --skip-until P | --skip-one P]
//!            [--regex] [--number | --count]
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `lines` command.
#[derive(Debug, Clone, Args)]
pub struct LinesArgs {
    /// Text file to read.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Skips the first N lines.
    #[arg(long, value_name = "N", group = "skip_mode")]
    pub skip: Option<usize>,

    /// Skips leading lines while they match PATTERN.
    #[arg(long = "skip-while", value_name = "PATTERN", group = "skip_mode")]
    pub skip_while: Option<String>,

    /// Skips lines until one matches PATTERN.
    #[arg(long = "skip-until", value_name = "PATTERN", group = "skip_mode")]
    pub skip_until: Option<String>,

    /// Skips the first line if it matches PATTERN.
    #[arg(long = "skip-one", value_name = "PATTERN", group = "skip_mode")]
    pub skip_one: Option<String>,

    /// Treats PATTERN as a regular expression instead of a substring.
    #[arg(short = 'r', long)]
    pub regex: bool,

    /// Prefixes each line with its line number.
    #[arg(short = 'n', long, conflicts_with = "count")]
    pub number: bool,

    /// Prints only the number of lines left after skipping.
    #[arg(long)]
    pub count: bool,
}

/// How the reader is positioned before output starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipMode<'a> {
    None,
    Lines(usize),
    While(&'a str),
    Until(&'a str),
    One(&'a str),
}

impl LinesArgs {
    #[must_use]
    pub fn skip_mode(&self) -> SkipMode<'_> {
        if let Some(count) = self.skip {
            SkipMode::Lines(count)
        } else if let Some(pattern) = &self.skip_while {
            SkipMode::While(pattern)
        } else if let Some(pattern) = &self.skip_until {
            SkipMode::Until(pattern)
        } else if let Some(pattern) = &self.skip_one {
            SkipMode::One(pattern)
        } else {
            SkipMode::None
        }
    }

    /// The pattern of the active skip mode, if it takes one.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        match self.skip_mode() {
            SkipMode::While(p) | SkipMode::Until(p) | SkipMode::One(p) => Some(p),
            SkipMode::None | SkipMode::Lines(_) => None,
        }
    }
}
