// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.

use std::io::Write;

use bluesy::config::{Config, ConfigLoader};
use bluesy::console::{CharWidth, ConsoleFormatter};
use bluesy::logging::LogLevel;

fn toml_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn config_pins_console_for_formatter() {
    let config = Config::parse(
        r#"
        [console]
        code_page = 850
        char_width = "wide"
        "#,
    )
    .unwrap();

    let formatter = ConsoleFormatter::new(config.console_settings());
    assert_eq!(formatter.console_encoding().unwrap(), "cp850");
    assert_eq!(formatter.settings().char_width(), CharWidth::Wide);
    assert_eq!(formatter.format_display(&"ç").unwrap(), b"\x87");
}

#[test]
fn config_later_files_override_earlier() {
    let base = toml_file("[console]\ncode_page = 850\n\n[logging]\nlevel = 1\n");
    let local = toml_file("[console]\ncode_page = 1252\n");

    let loader = ConfigLoader::new()
        .add_toml_file(base.path())
        .add_toml_file(local.path());
    assert_eq!(loader.loaded_files().len(), 2);

    let config = loader.build().unwrap();
    assert_eq!(config.console.code_page, Some(1252));
    assert_eq!(config.logging.level, LogLevel::ERROR);
}

#[test]
fn config_set_override() {
    let config = ConfigLoader::new()
        .add_toml_str("[console]\ncode_page = 850\n")
        .set("console.code_page", 65001_i64)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.console.code_page, Some(65001));
}

#[test]
fn config_log_config() {
    let config = Config::parse("[logging]\nlevel = 3\nlog_file = \"out/bluesy.log\"\njson = true\n")
        .unwrap();

    let log = config.log_config();
    assert_eq!(log.console_level(), LogLevel::INFO);
    assert_eq!(log.log_file(), Some("out/bluesy.log"));
    assert!(log.json());
}

#[test]
fn config_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::from_file(dir.path().join("none.toml")).is_err());
}
