// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! [console]  code_page, locale_encoding, char_width
//! [logging]  level, file_level, log_file, json
//! ```

use serde::{Deserialize, Serialize};

use crate::console::table::{canonical_name, resolve_encoding_name};
use crate::console::{CharWidth, ConsoleSettings};
use crate::error::ConfigError;
use crate::logging::{LogConfig, LogLevel};

/// `[console]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Pinned console code page; queried from the platform when absent.
    pub code_page: Option<u32>,
    /// Pinned encoding of narrow byte input; queried from the locale when absent.
    pub locale_encoding: Option<String>,
    pub char_width: CharWidth,
}

impl ConsoleConfig {
    /// Checks that pinned encodings are known.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unknown code page or name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(code_page) = self.code_page {
            resolve_encoding_name(code_page).map_err(|e| ConfigError::InvalidValue {
                section: "console".to_string(),
                key: "code_page".to_string(),
                message: e.to_string(),
            })?;
        }

        if let Some(name) = &self.locale_encoding
            && canonical_name(name).is_none()
        {
            return Err(ConfigError::InvalidValue {
                section: "console".to_string(),
                key: "locale_encoding".to_string(),
                message: format!("unknown encoding name '{name}'"),
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn to_settings(&self) -> ConsoleSettings {
        ConsoleSettings::builder()
            .maybe_with_code_page(self.code_page)
            .maybe_with_locale_encoding(self.locale_encoding.clone())
            .with_char_width(self.char_width)
            .build()
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Console (stderr) log level, 0-6.
    pub level: LogLevel,
    /// Log file level, 0-6.
    pub file_level: LogLevel,
    pub log_file: Option<String>,
    /// JSON lines instead of text.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::WARN,
            file_level: LogLevel::DEBUG,
            log_file: None,
            json: false,
        }
    }
}

impl LoggingConfig {
    #[must_use]
    pub fn to_log_config(&self) -> LogConfig {
        LogConfig::builder()
            .with_console_level(self.level)
            .with_file_level(self.file_level)
            .maybe_with_log_file(self.log_file.clone())
            .with_json(self.json)
            .build()
    }
}
