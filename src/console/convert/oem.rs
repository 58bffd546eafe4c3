// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Upper-half tables for code pages `encoding_rs` does not carry.
//!
//! ```text
//! byte 0x00-0x7F  ASCII (shared)
//! byte 0x80-0xFF  TABLE[byte - 0x80]
//! ```

/// IBM code page 850 (DOS Latin-1), bytes 0x80..=0xFF.
pub(super) const CP850_HIGH: [char; 128] = [
    // 0x80
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    // 0x90
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', 'ø', '£', 'Ø', '×', 'ƒ',
    // 0xA0
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '®', '¬', '½', '¼', '¡', '«', '»',
    // 0xB0
    '\u{2591}', '\u{2592}', '\u{2593}', '\u{2502}', '\u{2524}', 'Á', 'Â', 'À',
    '©', '\u{2563}', '\u{2551}', '\u{2557}', '\u{255D}', '¢', '¥', '\u{2510}',
    // 0xC0
    '\u{2514}', '\u{2534}', '\u{252C}', '\u{251C}', '\u{2500}', '\u{253C}', 'ã', 'Ã',
    '\u{255A}', '\u{2554}', '\u{2569}', '\u{2566}', '\u{2560}', '\u{2550}', '\u{256C}', '¤',
    // 0xD0
    'ð', 'Ð', 'Ê', 'Ë', 'È', '\u{0131}', 'Í', 'Î',
    'Ï', '\u{2518}', '\u{250C}', '\u{2588}', '\u{2584}', '¦', 'Ì', '\u{2580}',
    // 0xE0
    'Ó', 'ß', 'Ô', 'Ò', 'õ', 'Õ', 'µ', 'þ', 'Þ', 'Ú', 'Û', 'Ù', 'ý', 'Ý', '¯', '´',
    // 0xF0
    '\u{00AD}', '±', '\u{2017}', '¾', '¶', '§', '÷', '¸',
    '°', '¨', '·', '¹', '³', '²', '\u{25A0}', '\u{00A0}',
];

/// IBM code page 858: 850 with the euro sign at 0xD5.
pub(super) const CP858_HIGH: [char; 128] = {
    let mut table = CP850_HIGH;
    table[0xD5 - 0x80] = '\u{20AC}';
    table
};

/// ISO-8859-9 (Latin-5) positions that differ from ISO-8859-1.
pub(super) const ISO_8859_9_OVERRIDES: [(u8, char); 6] = [
    (0xD0, 'Ğ'),
    (0xDD, 'İ'),
    (0xDE, 'Ş'),
    (0xF0, 'ğ'),
    (0xFD, 'ı'),
    (0xFE, 'ş'),
];
