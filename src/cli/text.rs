// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the text and encoding commands.

use clap::Args;

/// Arguments for the `echo` command.
#[derive(Debug, Clone, Args)]
pub struct EchoArgs {
    /// Text to write, joined with spaces.
    #[arg(required = true, value_name = "TEXT")]
    pub text: Vec<String>,

    /// Do not append a newline.
    #[arg(short = 'n', long = "no-newline")]
    pub no_newline: bool,

    /// Write UTF-8 without converting to the console encoding.
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for the `encoding` command.
#[derive(Debug, Clone, Args)]
pub struct EncodingArgs {
    /// Code page to look up. Without one, shows the console and locale encodings.
    #[arg(value_name = "CODE_PAGE")]
    pub code_page: Option<u32>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Prints the table as JSON.
    #[arg(long)]
    pub json: bool,
}
