// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Console output formatter.
//!
//! ```text
//! format(text)
//!   (a) code page   pinned | console_output_code_page()
//!   (b) target      resolve_encoding_name(code page)
//!   (c) source      str: utf8 | bytes: pinned | locale_encoding() | wide: -
//!   (d) convert     convert_str | convert_text | convert_wide
//!   (e) bytes       ready to write verbatim
//! ```
//!
//! Nothing is cached between calls: the console code page can change while
//! the program runs.

use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::fmt::Display;
use std::io::Write;

use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::convert::{convert_str, convert_text, convert_wide};
use super::platform::{console_output_code_page, locale_encoding};
use super::table::resolve_encoding_name;
use crate::error::{BluesyResult, EncodingError};

/// Character width used for values formatted through [`Display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharWidth {
    /// Serialize to a `String` and convert it as narrow text.
    #[default]
    Narrow,
    /// Serialize, then convert as UTF-16 code units.
    Wide,
}

impl std::fmt::Display for CharWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Narrow => write!(f, "narrow"),
            Self::Wide => write!(f, "wide"),
        }
    }
}

/// Settings for a [`ConsoleFormatter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
pub struct ConsoleSettings {
    /// Pins the console code page instead of querying the platform.
    #[builder(setters(name = with_code_page))]
    code_page: Option<u32>,
    /// Pins the encoding of narrow byte input instead of querying the locale.
    #[builder(setters(name = with_locale_encoding), into)]
    locale_encoding: Option<String>,
    #[builder(setters(name = with_char_width), default)]
    char_width: CharWidth,
}

impl ConsoleSettings {
    /// Settings with the console code page pinned.
    ///
    /// Conversions become independent of the host console.
    #[must_use]
    pub fn pinned(code_page: u32) -> Self {
        Self::builder().with_code_page(code_page).build()
    }

    #[must_use]
    pub const fn code_page(&self) -> Option<u32> {
        self.code_page
    }

    #[must_use]
    pub fn locale_encoding(&self) -> Option<&str> {
        self.locale_encoding.as_deref()
    }

    #[must_use]
    pub const fn char_width(&self) -> CharWidth {
        self.char_width
    }
}

/// Text borrowed from a [`ConsoleText`] value, tagged with its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextRef<'a> {
    /// Unicode text; no source encoding needed.
    Unicode(Cow<'a, str>),
    /// Bytes in the process locale's encoding.
    Narrow(&'a [u8]),
    /// UTF-16 code units.
    Wide(Cow<'a, [u16]>),
}

/// Values the formatter accepts directly.
pub trait ConsoleText {
    fn console_text(&self) -> TextRef<'_>;
}

impl<T: ConsoleText + ?Sized> ConsoleText for &T {
    fn console_text(&self) -> TextRef<'_> {
        (**self).console_text()
    }
}

impl ConsoleText for str {
    fn console_text(&self) -> TextRef<'_> {
        TextRef::Unicode(Cow::Borrowed(self))
    }
}

impl ConsoleText for String {
    fn console_text(&self) -> TextRef<'_> {
        TextRef::Unicode(Cow::Borrowed(self))
    }
}

impl ConsoleText for [u8] {
    fn console_text(&self) -> TextRef<'_> {
        TextRef::Narrow(self)
    }
}

impl ConsoleText for Vec<u8> {
    fn console_text(&self) -> TextRef<'_> {
        TextRef::Narrow(self)
    }
}

impl ConsoleText for CStr {
    fn console_text(&self) -> TextRef<'_> {
        TextRef::Narrow(self.to_bytes())
    }
}

impl ConsoleText for CString {
    fn console_text(&self) -> TextRef<'_> {
        TextRef::Narrow(self.to_bytes())
    }
}

impl ConsoleText for [u16] {
    fn console_text(&self) -> TextRef<'_> {
        TextRef::Wide(Cow::Borrowed(self))
    }
}

impl ConsoleText for Vec<u16> {
    fn console_text(&self) -> TextRef<'_> {
        TextRef::Wide(Cow::Borrowed(self))
    }
}

/// UTF-32 input.
impl ConsoleText for [char] {
    fn console_text(&self) -> TextRef<'_> {
        TextRef::Unicode(Cow::Owned(self.iter().collect()))
    }
}

/// NUL-terminated UTF-16 text, such as a `wchar_t*` from Win32.
///
/// Only the units before the first NUL are converted.
#[derive(Debug, Clone, Copy)]
pub struct WideCStr<'a>(&'a [u16]);

impl<'a> WideCStr<'a> {
    #[must_use]
    pub const fn new(units: &'a [u16]) -> Self {
        Self(units)
    }

    /// Units up to, not including, the first NUL.
    #[must_use]
    pub fn as_units(&self) -> &'a [u16] {
        let end = self.0.iter().position(|&u| u == 0).unwrap_or(self.0.len());
        &self.0[..end]
    }
}

impl ConsoleText for WideCStr<'_> {
    fn console_text(&self) -> TextRef<'_> {
        TextRef::Wide(Cow::Borrowed(self.as_units()))
    }
}

/// Converts text to the console's encoding.
#[derive(Debug, Clone, Default)]
pub struct ConsoleFormatter {
    settings: ConsoleSettings,
}

impl ConsoleFormatter {
    #[must_use]
    pub const fn new(settings: ConsoleSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub const fn settings(&self) -> &ConsoleSettings {
        &self.settings
    }

    /// Canonical name of the console's current encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform query fails or the code page has no
    /// table entry.
    pub fn console_encoding(&self) -> Result<&'static str, EncodingError> {
        let code_page = match self.settings.code_page {
            Some(code_page) => code_page,
            None => console_output_code_page()?,
        };
        resolve_encoding_name(code_page)
    }

    /// Encoding of narrow byte input.
    ///
    /// # Errors
    ///
    /// Returns an error if the locale query fails.
    pub fn source_encoding(&self) -> Result<String, EncodingError> {
        match &self.settings.locale_encoding {
            Some(encoding) => Ok(encoding.clone()),
            None => locale_encoding(),
        }
    }

    /// Converts `text` to the console's encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if the console code page is unknown, the input is not
    /// valid in its source encoding, or a character cannot be displayed.
    ///
    /// # Example
    /// ```
    /// use bluesy::console::{ConsoleFormatter, ConsoleSettings};
    ///
    /// let formatter = ConsoleFormatter::new(ConsoleSettings::pinned(850));
    /// assert_eq!(formatter.format("Olá").unwrap(), b"Ol\xa0");
    /// ```
    pub fn format<T: ConsoleText + ?Sized>(&self, text: &T) -> Result<Vec<u8>, EncodingError> {
        let target = self.console_encoding()?;

        match text.console_text() {
            TextRef::Unicode(s) => {
                trace!(target_encoding = target, "converting unicode text for console");
                convert_str(&s, target)
            }
            TextRef::Narrow(bytes) => {
                let source = self.source_encoding()?;
                trace!(
                    source_encoding = %source,
                    target_encoding = target,
                    "converting narrow text for console"
                );
                convert_text(bytes, target, &source)
            }
            TextRef::Wide(units) => {
                trace!(target_encoding = target, "converting wide text for console");
                convert_wide(&units, target, "")
            }
        }
    }

    /// Serializes `value` with [`Display`], then converts it.
    ///
    /// The configured [`CharWidth`] selects the narrow or wide path; both
    /// produce the same bytes.
    ///
    /// # Errors
    ///
    /// Same as [`format`](Self::format).
    pub fn format_display<T: Display + ?Sized>(&self, value: &T) -> Result<Vec<u8>, EncodingError> {
        let serialized = value.to_string();
        match self.settings.char_width {
            CharWidth::Narrow => self.format(serialized.as_str()),
            CharWidth::Wide => {
                let units: Vec<u16> = serialized.encode_utf16().collect();
                self.format(units.as_slice())
            }
        }
    }

    /// Converts `text` and writes it to `out`.
    ///
    /// Nothing is written if the conversion fails.
    ///
    /// # Errors
    ///
    /// Returns the conversion error or the write error.
    pub fn write_to<W, T>(&self, out: &mut W, text: &T) -> BluesyResult<()>
    where
        W: Write + ?Sized,
        T: ConsoleText + ?Sized,
    {
        let bytes = self.format(text)?;
        out.write_all(&bytes)?;
        Ok(())
    }
}

/// Converts `text` for the current console using default settings.
///
/// # Errors
///
/// Same as [`ConsoleFormatter::format`].
pub fn convert_output<T: ConsoleText + ?Sized>(text: &T) -> Result<Vec<u8>, EncodingError> {
    ConsoleFormatter::default().format(text)
}
