// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for bluesy using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! bluesy [global options] <command>
//! echo <TEXT>...
//! encoding [CODE_PAGE]
//! list [--json]
//! lines <FILE> [skip] [--regex] [--number|--count]
//! options
//! configs
//! version
//! ```

pub mod global;
pub mod lines;
pub mod text;


use crate::cli::global::GlobalOptions;
use crate::cli::lines::LinesArgs;
use crate::cli::text::{EchoArgs, EncodingArgs, ListArgs};
use clap::{Parser, Subcommand};

/// Console code page output helpers.
#[derive(Debug, Parser)]
#[command(
    name = "bluesy",
    author,
    version,
    about = "Console code page output helpers",
    long_about = "bluesy Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Writes text in the console's own code page, so accented\n\
                  characters display correctly on consoles that do not use UTF-8.",
    after_help = "CONFIG FILES:\n\n\
                  bluesy looks for `bluesy.toml` in the current directory. Files\n\
                  given with --config are loaded after it and override it.\n\
                  BLUESY_<SECTION>__<KEY> environment variables override files,\n\
                  and command-line options override everything. Use\n\
                  --no-default-config to only use --config."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Writes text converted to the console encoding.
    Echo(EchoArgs),

    /// Shows the console and locale encodings, or looks up a code page.
    Encoding(EncodingArgs),

    /// Lists the known code pages.
    List(ListArgs),

    /// Prints a text file, optionally skipping leading lines.
    Lines(LinesArgs),

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files used.
    Configs,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
