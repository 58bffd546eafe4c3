// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE        ← Additional config files (can repeat)
//! --log-level N        ← Console verbosity (0-6)
//! --file-log-level N   ← File verbosity (falls back to --log-level)
//! --log-file FILE      ← logging.log_file override
//! --code-page N        ← console.code_page override
//! --locale-encoding X  ← console.locale_encoding override
//! --set KEY=VAL        ← Direct config override
//!
//! Precedence: CLI flags > --set > BLUESY_* > --config > bluesy.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::console::CharWidth;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=trace all).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Emits logs as JSON lines.
    #[arg(long = "log-json")]
    pub log_json: bool,

    /// Pins the console code page instead of querying it.
    #[arg(long = "code-page", value_name = "CODE_PAGE")]
    pub code_page: Option<u32>,

    /// Pins the encoding of byte input instead of querying the locale.
    #[arg(long = "locale-encoding", value_name = "NAME")]
    pub locale_encoding: Option<String>,

    /// Character width used for formatted values.
    #[arg(long = "char-width", value_name = "WIDTH", value_parser = parse_char_width)]
    pub char_width: Option<CharWidth>,

    /// Sets an option, such as 'console/code_page=850'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Disables auto loading of bluesy.toml, only uses --config.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if let Some(level) = self.log_level {
            overrides.push(format!("logging/level={level}"));
        }

        // file level falls back to the console level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(format!("logging/file_level={level}"));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(format!("logging/log_file={}", path.display()));
        }

        if self.log_json {
            overrides.push("logging/json=true".to_string());
        }

        if let Some(code_page) = self.code_page {
            overrides.push(format!("console/code_page={code_page}"));
        }

        if let Some(ref name) = self.locale_encoding {
            overrides.push(format!("console/locale_encoding={name}"));
        }

        if let Some(width) = self.char_width {
            overrides.push(format!("console/char_width={width}"));
        }

        overrides
    }
}

fn parse_char_width(value: &str) -> Result<CharWidth, String> {
    match value.to_ascii_lowercase().as_str() {
        "narrow" => Ok(CharWidth::Narrow),
        "wide" => Ok(CharWidth::Wide),
        _ => Err(format!("expected 'narrow' or 'wide', got '{value}'")),
    }
}
