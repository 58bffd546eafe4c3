// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{AppOptions, ParseSettings, ProgramOptions};
use crate::console::ConsoleSettings;
use crate::error::{BluesyError, OptionsError};
use clap::Parser;
use std::fmt;

const TITLE: &str = "Test App Options";
const FILENAME: &str = "file.ext";

#[derive(Debug, Default, Parser)]
#[command(name = "test-app", disable_help_flag = true)]
struct TestAppOptions {
    #[arg(short, long, help = "Mensagem de ajuda")]
    help: bool,

    #[arg(short, long, help = "Ficheiro a processar")]
    fich: String,

    #[arg(short = 'c', long, help = "Valida nr. de campos por linha e termina")]
    validnc: bool,

    #[arg(short, long, help = "Operação. C - Oper C; P - Oper P")]
    oper: String,

    #[arg(short, long, num_args = 1.., help = "Lista")]
    list: Vec<String>,

    #[arg(short = 'n', long, default_value_t = 1, help = "Repetições")]
    repeat: u32,
}

impl fmt::Display for TestAppOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ficheiro: {}", self.fich)
    }
}

impl ProgramOptions for TestAppOptions {
    fn validate(&self) -> Result<(), OptionsError> {
        if self.oper == "C" || self.oper == "P" {
            return Ok(());
        }
        Err(OptionsError::InvalidValue {
            option: "oper".to_string(),
            message: format!("operação não reconhecida: {}", self.oper),
        })
    }
}

/// Relies on clap's built-in help, replaced by the wrapper.
#[derive(Debug, Default, Parser)]
#[command(name = "plain-app")]
struct PlainOptions {
    #[arg(long)]
    name: String,
}

impl fmt::Display for PlainOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name={}", self.name)
    }
}

impl ProgramOptions for PlainOptions {}

fn settings(convert_help: bool) -> ParseSettings {
    ParseSettings::builder()
        .with_title(TITLE)
        .with_convert_help(convert_help)
        .with_console(ConsoleSettings::pinned(850))
        .build()
}

fn parse(args: &[&str]) -> Result<AppOptions<TestAppOptions>, BluesyError> {
    let mut out = Vec::new();
    let parsed = AppOptions::parse_from(args.iter().copied(), &settings(true), &mut out);
    assert!(out.is_empty(), "help written unexpectedly");
    parsed
}

fn option_error(err: &BluesyError) -> &OptionsError {
    err.as_options().expect("expected an option error")
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn test_help_converted_to_console_code_page() {
    let mut out = Vec::new();
    let parsed =
        AppOptions::<TestAppOptions>::parse_from(["test-app", "-h"], &settings(true), &mut out)
            .unwrap();

    assert!(parsed.help_shown());
    assert!(out.starts_with(b"Test App Options:\n"));
    assert!(contains(&out, b"Opera\x87\xC6o. C - Oper C; P - Oper P"));
    assert!(contains(&out, b"Mensagem de ajuda"));
    assert!(!contains(&out, "Operação".as_bytes()));
}

#[test]
fn test_help_without_conversion() {
    let mut out = Vec::new();
    let parsed =
        AppOptions::<TestAppOptions>::parse_from(["test-app", "--help"], &settings(false), &mut out)
            .unwrap();

    assert!(parsed.help_shown());
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Test App Options:\n"));
    assert!(text.contains("Operação. C - Oper C; P - Oper P"));
    assert!(text.contains("--fich <FICH>"));
    assert_eq!(text, parsed.help_text());
}

#[test]
fn test_help_skips_required_options_and_validation() {
    let mut out = Vec::new();
    let parsed =
        AppOptions::<TestAppOptions>::parse_from(["test-app", "-o", "X", "-h"], &settings(false), &mut out)
            .unwrap();

    assert!(parsed.help_shown());
    assert!(parsed.options().oper.is_empty());
    assert!(parsed.options().fich.is_empty());
}

#[test]
fn test_required_option_missing() {
    let err = parse(&["test-app", "-f", FILENAME]).unwrap_err();
    match option_error(&err) {
        OptionsError::RequiredOptionMissing { option } => assert!(option.contains("--oper")),
        other => panic!("unexpected error: {other:?}"),
    }

    let err = parse(&["test-app"]).unwrap_err();
    assert!(matches!(
        option_error(&err),
        OptionsError::RequiredOptionMissing { .. }
    ));
}

#[test]
fn test_invalid_option_value_from_validate() {
    let err = parse(&["test-app", "-o", "X", "-f", "IGNORE"]).unwrap_err();
    match option_error(&err) {
        OptionsError::InvalidValue { option, message } => {
            assert_eq!(option, "oper");
            assert!(message.ends_with(": X"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_invalid_option_value_from_parser() {
    let err = parse(&["test-app", "-f", "IGNORE", "-o", "C", "-n", "many"]).unwrap_err();
    match option_error(&err) {
        OptionsError::InvalidValue { option, message } => {
            assert!(option.contains("--repeat"));
            assert!(message.contains("many"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_unknown_argument_is_parse_error() {
    let err = parse(&["test-app", "-f", "IGNORE", "-o", "C", "--bogus"]).unwrap_err();
    assert!(matches!(option_error(&err), OptionsError::Parse(_)));
}

#[test]
fn test_filename() {
    let parsed = parse(&["test-app", "-f", FILENAME, "-o", "C"]).unwrap();
    assert!(!parsed.help_shown());
    assert_eq!(parsed.options().fich, FILENAME);
    assert_eq!(parsed.to_string(), "Ficheiro: file.ext");
}

#[test]
fn test_flag_present() {
    let parsed = parse(&["test-app", "-f", "IGNORE", "-o", "C", "-c"]).unwrap();
    assert!(parsed.options().validnc);
}

#[test]
fn test_flag_absent() {
    let parsed = parse(&["test-app", "-f", "IGNORE", "-o", "P"]).unwrap();
    assert!(!parsed.options().validnc);
    assert_eq!(parsed.options().repeat, 1);
}

#[test]
fn test_multi_value_list() {
    let parsed = parse(&["test-app", "-f", "IGNORE", "-o", "C", "-l", "a", "bc", "def"]).unwrap();
    assert_eq!(parsed.options().list, ["a", "bc", "def"]);
}

#[test]
fn test_help_switch_added_when_missing() {
    let mut out = Vec::new();
    let parsed =
        AppOptions::<PlainOptions>::parse_from(["plain-app", "-h"], &settings(false), &mut out)
            .unwrap();

    assert!(parsed.help_shown());
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Print help"));
    assert!(text.contains("--name <NAME>"));

    let parsed = AppOptions::<PlainOptions>::parse_from(
        ["plain-app", "--name", "x"],
        &settings(false),
        &mut Vec::new(),
    )
    .unwrap();
    assert_eq!(parsed.to_string(), "name=x");
}

#[test]
fn test_show_help_on_parsed_options() {
    let parsed = parse(&["test-app", "-f", FILENAME, "-o", "C"]).unwrap();

    let mut converted = Vec::new();
    parsed.show_help(&mut converted, true).unwrap();
    let mut raw = Vec::new();
    parsed.show_help(&mut raw, false).unwrap();

    assert!(contains(&converted, b"Opera\x87\xC6o"));
    assert!(contains(&raw, "Operação".as_bytes()));
}

#[test]
fn test_parse_settings_defaults() {
    let settings = ParseSettings::builder().with_title("App").build();
    assert_eq!(settings.title(), "App");
    assert!(settings.convert_help());
}
