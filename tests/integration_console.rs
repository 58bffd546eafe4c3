// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for console output conversion.
//!
//! Every test pins the console code page so results do not depend on the
//! host console.

use bluesy::console::table::{code_page_for_name, entries};
use bluesy::console::{
    CharWidth, ConsoleFormatter, ConsoleSettings, convert_text, convert_wide,
    resolve_encoding_name,
};
use bluesy::error::EncodingError;

const ORIGINAL: &str = "Isto é um teste";

fn formatter(code_page: u32) -> ConsoleFormatter {
    ConsoleFormatter::new(
        ConsoleSettings::builder()
            .with_code_page(code_page)
            .with_locale_encoding("utf8")
            .build(),
    )
}

// =============================================================================
// Encoding Table
// =============================================================================

#[test]
fn table_lookup_both_ways() {
    for entry in entries() {
        assert_eq!(resolve_encoding_name(entry.code_page).unwrap(), entry.name);
        assert_eq!(code_page_for_name(entry.name).unwrap(), entry.code_page);
    }
}

#[test]
fn table_unknown_code_page() {
    let err = resolve_encoding_name(1).unwrap_err();
    assert!(matches!(err, EncodingError::NotFound { code_page: 1 }));
    insta::assert_snapshot!(err.to_string(), @"encoding not found for code page 1");
}

// =============================================================================
// Conversion
// =============================================================================

#[test]
fn convert_utf8_to_cp850() {
    let converted = convert_text(ORIGINAL.as_bytes(), "cp850", "utf8").unwrap();
    assert_eq!(converted, b"Isto \x82 um teste");
}

#[test]
fn convert_wide_matches_narrow() {
    let wide: Vec<u16> = ORIGINAL.encode_utf16().collect();
    for target in ["cp850", "cp1252", "iso88591", "utf8"] {
        assert_eq!(
            convert_wide(&wide, target, "ignored").unwrap(),
            convert_text(ORIGINAL.as_bytes(), target, "utf8").unwrap(),
            "target {target}"
        );
    }
}

#[test]
fn convert_invalid_source_fails() {
    let err = convert_text(b"\xff\xfe", "cp850", "utf8").unwrap_err();
    assert!(matches!(err, EncodingError::Malformed { .. }));
}

// =============================================================================
// Formatter
// =============================================================================

#[test]
fn formatter_every_shape_agrees() {
    let formatter = formatter(850);
    let expected = formatter.format(ORIGINAL).unwrap();

    let wide: Vec<u16> = ORIGINAL.encode_utf16().collect();
    let chars: Vec<char> = ORIGINAL.chars().collect();

    assert_eq!(formatter.format(ORIGINAL.as_bytes()).unwrap(), expected);
    assert_eq!(formatter.format(&wide).unwrap(), expected);
    assert_eq!(formatter.format(chars.as_slice()).unwrap(), expected);
    assert_eq!(formatter.format_display(&ORIGINAL).unwrap(), expected);
}

#[test]
fn formatter_display_widths_agree() {
    let value = 3.5_f64;
    let narrow = ConsoleFormatter::new(
        ConsoleSettings::builder()
            .with_code_page(1252)
            .with_char_width(CharWidth::Narrow)
            .build(),
    );
    let wide = ConsoleFormatter::new(
        ConsoleSettings::builder()
            .with_code_page(1252)
            .with_char_width(CharWidth::Wide)
            .build(),
    );

    assert_eq!(narrow.format_display(&value).unwrap(), b"3.5");
    assert_eq!(wide.format_display(&value).unwrap(), b"3.5");
}

#[test]
fn formatter_western_code_pages() {
    let text = "ação";
    assert_eq!(formatter(850).format(text).unwrap(), b"a\x87\xc6o");
    assert_eq!(formatter(1252).format(text).unwrap(), b"a\xe7\xe3o");
    assert_eq!(formatter(65001).format(text).unwrap(), text.as_bytes());
}

#[test]
fn formatter_unsupported_console_encoding() {
    let err = formatter(50225).format("abc").unwrap_err();
    assert!(matches!(err, EncodingError::Unsupported { .. }));
}
