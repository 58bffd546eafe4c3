// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Static code page <-> encoding name table.
//!
//! ```text
//! resolve_encoding_name(850)   --> "cp850"
//! code_page_for_name("UTF-8")  --> normalize "utf8" --> 65001
//! canonical_name("windows-1252") --> alias "windows1252" --> "cp1252"
//! ```
//!
//! Names are canonical when lowercase ASCII alphanumerics only.

use crate::error::EncodingError;

/// One row of the encoding table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingEntry {
    /// Canonical encoding name, e.g. `cp850`.
    pub name: &'static str,
    /// Windows code page identifier.
    pub code_page: u32,
}

const fn entry(name: &'static str, code_page: u32) -> EncodingEntry {
    EncodingEntry { name, code_page }
}

/// All supported code pages, in lookup order.
pub static ENCODINGS: [EncodingEntry; 35] = [
    entry("cp850", 850),
    entry("cp858", 858),
    entry("cp874", 874),
    entry("cp932", 932),
    entry("cp936", 936),
    entry("big5", 950),
    entry("cp1250", 1250),
    entry("cp1251", 1251),
    entry("cp1252", 1252),
    entry("cp1253", 1253),
    entry("cp1254", 1254),
    entry("cp1255", 1255),
    entry("cp1256", 1256),
    entry("cp1257", 1257),
    entry("usascii", 20127),
    entry("koi8r", 20866),
    entry("eucjp", 20932),
    entry("gb2312", 20936),
    entry("koi8u", 21866),
    entry("iso88591", 28591),
    entry("iso88592", 28592),
    entry("iso88593", 28593),
    entry("iso88594", 28594),
    entry("iso88595", 28595),
    entry("iso88596", 28596),
    entry("iso88597", 28597),
    entry("iso88598", 28598),
    entry("iso88599", 28599),
    entry("iso885913", 28603),
    entry("iso885915", 28605),
    entry("iso2022jp", 50220),
    entry("iso2022kr", 50225),
    entry("euckr", 51949),
    entry("gb18030", 54936),
    entry("utf8", 65001),
];

/// Alternative spellings, already normalized, mapped to canonical names.
static ALIASES: &[(&str, &str)] = &[
    ("ascii", "usascii"),
    ("ansix341968", "usascii"),
    ("windows874", "cp874"),
    ("tis620", "cp874"),
    ("shiftjis", "cp932"),
    ("sjis", "cp932"),
    ("windows932", "cp932"),
    ("ms932", "cp932"),
    ("gbk", "cp936"),
    ("ms936", "cp936"),
    ("windows936", "cp936"),
    ("big5hkscs", "big5"),
    ("cp950", "big5"),
    ("windows1250", "cp1250"),
    ("windows1251", "cp1251"),
    ("windows1252", "cp1252"),
    ("windows1253", "cp1253"),
    ("windows1254", "cp1254"),
    ("windows1255", "cp1255"),
    ("windows1256", "cp1256"),
    ("windows1257", "cp1257"),
    ("ibm850", "cp850"),
    ("ibm858", "cp858"),
    ("latin1", "iso88591"),
    ("latin2", "iso88592"),
    ("latin9", "iso885915"),
    ("cp65001", "utf8"),
    ("koi8", "koi8r"),
    ("ujis", "eucjp"),
    ("csiso2022jp", "iso2022jp"),
];

/// Returns the full table.
#[must_use]
pub fn entries() -> &'static [EncodingEntry] {
    &ENCODINGS
}

/// Retrieves the canonical name of the encoding for a code page.
///
/// Performs a linear search and returns the first matching entry.
///
/// # Errors
///
/// Returns [`EncodingError::NotFound`] if the code page is not in the table.
///
/// # Example
/// ```
/// use bluesy::console::table::resolve_encoding_name;
///
/// assert_eq!(resolve_encoding_name(850).unwrap(), "cp850");
/// assert!(resolve_encoding_name(0).is_err());
/// ```
pub fn resolve_encoding_name(code_page: u32) -> Result<&'static str, EncodingError> {
    ENCODINGS
        .iter()
        .find(|e| e.code_page == code_page)
        .map(|e| e.name)
        .ok_or(EncodingError::NotFound { code_page })
}

/// Normalizes an encoding name: ASCII lowercase, alphanumerics only.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Resolves any known spelling of an encoding to its canonical table name.
#[must_use]
pub fn canonical_name(name: &str) -> Option<&'static str> {
    let normalized = normalize_name(name);

    if let Some(e) = ENCODINGS.iter().find(|e| e.name == normalized) {
        return Some(e.name);
    }

    ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, canonical)| *canonical)
}

/// Reverse lookup: the code page for an encoding name.
///
/// # Errors
///
/// Returns [`EncodingError::UnknownName`] if the name resolves to no entry.
pub fn code_page_for_name(name: &str) -> Result<u32, EncodingError> {
    let canonical = canonical_name(name).ok_or_else(|| EncodingError::UnknownName {
        name: name.to_string(),
    })?;

    ENCODINGS
        .iter()
        .find(|e| e.name == canonical)
        .map(|e| e.code_page)
        .ok_or_else(|| EncodingError::UnknownName {
            name: name.to_string(),
        })
}
