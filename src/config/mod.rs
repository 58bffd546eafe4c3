// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for bluesy.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. bluesy.toml (cwd)
//! 3. --config
//! 4. BLUESY_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! BLUESY_CONSOLE__CODE_PAGE=850       → console.code_page = 850
//! BLUESY_CONSOLE__CHAR_WIDTH=wide     → console.char_width = "wide"
//! BLUESY_LOGGING__LEVEL=4             → logging.level = 4
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::console::ConsoleSettings;
use crate::error::ConfigError;
use crate::logging::LogConfig;

pub use loader::ConfigLoader;
pub use types::{ConsoleConfig, LoggingConfig};

/// Name of the configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "bluesy.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "BLUESY";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub console: ConsoleConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bluesy::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("bluesy.toml")
    ///     .with_env_prefix("BLUESY")
    ///     .build()?;
    /// # Ok::<(), bluesy::error::ConfigError>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Self::builder().add_toml_str(content).build()
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unknown pinned encoding.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.console.validate()
    }

    #[must_use]
    pub fn console_settings(&self) -> ConsoleSettings {
        self.console.to_settings()
    }

    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        self.logging.to_log_config()
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let unset = || "(auto)".to_string();
        let mut options = BTreeMap::new();

        options.insert(
            "console.code_page",
            self.console.code_page.map_or_else(unset, |cp| cp.to_string()),
        );
        options.insert(
            "console.locale_encoding",
            self.console.locale_encoding.clone().unwrap_or_else(unset),
        );
        options.insert("console.char_width", self.console.char_width.to_string());
        options.insert("logging.level", self.logging.level.as_u8().to_string());
        options.insert(
            "logging.file_level",
            self.logging.file_level.as_u8().to_string(),
        );
        options.insert(
            "logging.log_file",
            self.logging
                .log_file
                .clone()
                .unwrap_or_else(|| "(none)".to_string()),
        );
        options.insert("logging.json", self.logging.json.to_string());

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
