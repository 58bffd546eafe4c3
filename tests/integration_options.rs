// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the option parsing wrapper.
//!
//! Uses an application options type defined outside the crate, the way a
//! consumer would.

use std::fmt;

use bluesy::console::ConsoleSettings;
use bluesy::error::OptionsError;
use bluesy::options::{AppOptions, ParseSettings, ProgramOptions};
use clap::{Command, Parser};

#[derive(Debug, Default, Parser)]
#[command(name = "report")]
struct ReportOptions {
    /// Input file
    #[arg(short, long)]
    input: String,

    /// Output mode: summary or full
    #[arg(short, long, default_value = "summary")]
    mode: String,

    /// Maximum lines
    #[arg(long)]
    limit: Option<usize>,
}

impl fmt::Display for ReportOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input={} mode={}", self.input, self.mode)
    }
}

impl ProgramOptions for ReportOptions {
    fn help_flag_name() -> &'static str {
        "ajuda"
    }

    fn define_options(cmd: Command) -> Command {
        cmd.about("Relatório de ficheiros")
    }

    fn validate(&self) -> Result<(), OptionsError> {
        match self.mode.as_str() {
            "summary" | "full" => Ok(()),
            other => Err(OptionsError::InvalidValue {
                option: "mode".to_string(),
                message: format!("unknown mode '{other}'"),
            }),
        }
    }
}

fn settings() -> ParseSettings {
    ParseSettings::builder()
        .with_title("Report")
        .with_console(ConsoleSettings::pinned(850))
        .build()
}

#[test]
fn options_parse_success() {
    let parsed = AppOptions::<ReportOptions>::parse_from(
        ["report", "-i", "data.txt", "--limit", "10"],
        &settings(),
        &mut Vec::new(),
    )
    .unwrap();

    assert!(!parsed.help_shown());
    assert_eq!(parsed.options().limit, Some(10));
    assert_eq!(parsed.to_string(), "input=data.txt mode=summary");
}

#[test]
fn options_custom_help_flag() {
    let mut out = Vec::new();
    let parsed =
        AppOptions::<ReportOptions>::parse_from(["report", "--ajuda"], &settings(), &mut out)
            .unwrap();

    assert!(parsed.help_shown());
    assert!(out.starts_with(b"Report:\n"));
    // "Relatório" in cp850
    assert!(out.windows(9).any(|w| w == b"Relat\xa2rio"));
    assert!(parsed.options().input.is_empty());
}

#[test]
fn options_builtin_help_replaced() {
    let err = AppOptions::<ReportOptions>::parse_from(
        ["report", "--help"],
        &settings(),
        &mut Vec::new(),
    )
    .unwrap_err();

    assert!(matches!(err.as_options(), Some(OptionsError::Parse(_))));
}

#[test]
fn options_validation_error() {
    let err = AppOptions::<ReportOptions>::parse_from(
        ["report", "-i", "x", "-m", "partial"],
        &settings(),
        &mut Vec::new(),
    )
    .unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"option error: invalid value for option 'mode': unknown mode 'partial'");
}

#[test]
fn options_missing_required() {
    let err = AppOptions::<ReportOptions>::parse_from(["report"], &settings(), &mut Vec::new())
        .unwrap_err();

    match err.as_options() {
        Some(OptionsError::RequiredOptionMissing { option }) => {
            assert!(option.contains("--input"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
