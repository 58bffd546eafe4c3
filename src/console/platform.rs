// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Console and locale queries.
//!
//! ```text
//!                 Windows                 elsewhere
//! console CP      GetConsoleOutputCP()    locale codeset -> table CP
//! locale enc.     GetACP() -> table name  LC_ALL | LC_CTYPE | LANG codeset
//! ```

use crate::error::EncodingError;

#[cfg(not(windows))]
use super::table::{canonical_name, code_page_for_name};
#[cfg(windows)]
use super::table::resolve_encoding_name;

/// Encoding assumed when the locale names no codeset.
#[cfg(not(windows))]
const DEFAULT_LOCALE_ENCODING: &str = "utf8";

/// Queries the active console output code page.
///
/// Returns 0 when the process has no console; 0 is not a table entry, so
/// resolving it fails.
///
/// # Errors
///
/// Never fails on Windows. Elsewhere, fails if the locale's encoding has no
/// table entry.
#[cfg(windows)]
pub fn console_output_code_page() -> Result<u32, EncodingError> {
    use windows::Win32::System::Console::GetConsoleOutputCP;

    // SAFETY: GetConsoleOutputCP takes no arguments and has no preconditions
    Ok(unsafe { GetConsoleOutputCP() })
}

/// Queries the active console output code page.
///
/// Terminals outside Windows display the locale's encoding, so this maps the
/// locale codeset back to its code page.
///
/// # Errors
///
/// Returns [`EncodingError::UnknownName`] if the locale's encoding has no
/// table entry.
#[cfg(not(windows))]
pub fn console_output_code_page() -> Result<u32, EncodingError> {
    code_page_for_name(&locale_encoding()?)
}

/// Queries the process locale's narrow-text encoding.
///
/// # Errors
///
/// Returns [`EncodingError::NotFound`] if the ANSI code page has no table
/// entry.
#[cfg(windows)]
pub fn locale_encoding() -> Result<String, EncodingError> {
    use windows::Win32::Globalization::GetACP;

    // SAFETY: GetACP takes no arguments and has no preconditions
    let code_page = unsafe { GetACP() };
    resolve_encoding_name(code_page).map(str::to_string)
}

/// Queries the process locale's narrow-text encoding.
///
/// Reads the first non-empty of `LC_ALL`, `LC_CTYPE` and `LANG`.
///
/// # Errors
///
/// Returns [`EncodingError::UnknownName`] if the codeset has no table entry.
#[cfg(not(windows))]
pub fn locale_encoding() -> Result<String, EncodingError> {
    let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
        .unwrap_or_default();

    let Some(codeset) = locale_codeset(&locale) else {
        return Ok(DEFAULT_LOCALE_ENCODING.to_string());
    };

    canonical_name(codeset)
        .map(str::to_string)
        .ok_or_else(|| EncodingError::UnknownName {
            name: codeset.to_string(),
        })
}

/// Extracts the codeset from a POSIX locale name (`ll_CC.codeset@modifier`).
///
/// `C`, `POSIX` and names without a codeset yield `None`.
#[must_use]
pub fn locale_codeset(locale: &str) -> Option<&str> {
    let without_modifier = locale.split('@').next().unwrap_or(locale);
    without_modifier
        .split_once('.')
        .map(|(_, codeset)| codeset)
        .filter(|codeset| !codeset.is_empty())
}

#[cfg(test)]
mod tests {
    use super::locale_codeset;

    #[test]
    fn test_locale_codeset() {
        assert_eq!(locale_codeset("pt_PT.UTF-8"), Some("UTF-8"));
        assert_eq!(locale_codeset("de_DE.ISO-8859-15@euro"), Some("ISO-8859-15"));
        assert_eq!(locale_codeset("ru_RU.KOI8-R"), Some("KOI8-R"));
        assert_eq!(locale_codeset("en_US"), None);
        assert_eq!(locale_codeset("C"), None);
        assert_eq!(locale_codeset("POSIX"), None);
        assert_eq!(locale_codeset("en_US."), None);
        assert_eq!(locale_codeset(""), None);
    }
}
