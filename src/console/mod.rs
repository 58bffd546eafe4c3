// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Console output in the console's own code page.
//!
//! ```text
//! table      code page <-> canonical name (cp850, utf8, ...)
//!   |
//! convert    strict transcoding (encoding_rs + OEM tables)
//!   |
//! platform   GetConsoleOutputCP / GetACP | locale codeset
//!   |
//! formatter  ConsoleFormatter::format(&text) --> console bytes
//! ```
//!
//! A Windows console keeps displaying its OEM code page (850 on a Western
//! European install) no matter what the program writes, so UTF-8 text shows
//! up garbled unless it is converted first.

pub mod convert;
pub mod formatter;
pub mod platform;
pub mod table;

pub use convert::{Charset, convert_str, convert_text, convert_wide};
pub use formatter::{
    CharWidth, ConsoleFormatter, ConsoleSettings, ConsoleText, TextRef, WideCStr, convert_output,
};
pub use table::{EncodingEntry, resolve_encoding_name};
