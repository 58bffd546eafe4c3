// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            BluesyError (~24 bytes)
//!                   |
//!   +--------+------+-----+--------+-------+
//!   |        |      |     |        |       |
//!   v        v      v     v        v       v
//! Encoding Options Reader Config   Io    Other
//!   Box      Box    Box    Box     Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Encoding NotFound, UnknownName, Unsupported,
//!            Malformed, Unmappable, ConsoleQuery
//!   Options  RequiredOptionMissing, InvalidValue, Parse
//!   Reader   Open, Read
//!   Config   ParseError, InvalidValue
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`BluesyError`].
pub type BluesyResult<T> = std::result::Result<T, BluesyError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum BluesyError {
    /// Code page lookup or transcoding failed.
    #[error("encoding error: {0}")]
    Encoding(#[from] Box<EncodingError>),

    /// Command-line option parsing or validation failed.
    #[error("option error: {0}")]
    Options(#[from] Box<OptionsError>),

    /// Line reader error.
    #[error("reader error: {0}")]
    Reader(#[from] Box<ReaderError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl BluesyError {
    /// Returns the encoding error, if this is one.
    #[must_use]
    pub fn as_encoding(&self) -> Option<&EncodingError> {
        match self {
            Self::Encoding(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the option error, if this is one.
    #[must_use]
    pub fn as_options(&self) -> Option<&OptionsError> {
        match self {
            Self::Options(e) => Some(e),
            _ => None,
        }
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for BluesyError {
                fn from(err: $error) -> Self {
                    BluesyError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    EncodingError => Encoding,
    OptionsError => Options,
    ReaderError => Reader,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Encoding Errors ---

/// Code page lookup and transcoding errors.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// The code page has no entry in the encoding table.
    #[error("encoding not found for code page {code_page}")]
    NotFound { code_page: u32 },

    /// The encoding name has no entry in the encoding table.
    #[error("unknown encoding name '{name}'")]
    UnknownName { name: String },

    /// The encoding is in the table but has no transcoding backend.
    #[error("encoding '{name}' is not supported for conversion")]
    Unsupported { name: String },

    /// The source bytes are not valid in the source encoding.
    #[error("input is not valid {encoding}")]
    Malformed { encoding: String },

    /// A character cannot be represented in the target encoding.
    #[error("character {character:?} cannot be represented in {encoding}")]
    Unmappable { encoding: String, character: char },

    /// Querying the console or the process locale failed.
    #[error("failed to query console encoding: {message}")]
    ConsoleQuery { message: String },
}

// --- Option Errors ---

/// Command-line option errors.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// A required option was not supplied.
    #[error("required option missing: {option}")]
    RequiredOptionMissing { option: String },

    /// An option value was rejected, by the parser or by the application.
    #[error("invalid value for option '{option}': {message}")]
    InvalidValue { option: String, message: String },

    /// Any other parser error (unknown argument, conflicts, ...).
    #[error("failed to parse command line: {0}")]
    Parse(#[from] clap::Error),

    /// Writing the help text to its sink failed.
    #[error("failed to write help text")]
    HelpOutput(#[source] std::io::Error),
}

// --- Reader Errors ---

/// Sequential line reader errors.
#[derive(Debug, Error)]
pub enum ReaderError {
    /// The file could not be opened for reading.
    #[error("error opening file '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from an open file failed.
    #[error("error reading file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("failed to parse config: {message}")]
    ParseError { message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
