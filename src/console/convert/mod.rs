// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Strict text conversion between table encodings.
//!
//! ```text
//! source bytes --(decode, strict)--> UTF-8 --(encode, strict)--> target bytes
//! UTF-16 units --(from_utf16)------> UTF-8 --(encode, strict)--> target bytes
//! ```
//!
//! Uses `encoding_rs` where it implements the table's meaning of a name;
//! cp850/cp858, ISO-8859-1, ISO-8859-9 and US-ASCII are handled here.
//! Malformed input or unmappable characters fail the whole conversion.

mod oem;

use std::borrow::Cow;

use encoding_rs::EncoderResult;

use super::table::canonical_name;
use crate::error::EncodingError;

/// Name used in errors for UTF-16 input.
const UTF16: &str = "utf16";

/// How a charset is transcoded.
#[derive(Debug, Clone, Copy)]
enum Codec {
    /// Backed by `encoding_rs`.
    Whatwg(&'static encoding_rs::Encoding),
    /// Strict 7-bit ASCII.
    Ascii,
    /// ISO-8859-1 identity mapping, with per-byte substitutions.
    Latin1(&'static [(u8, char)]),
    /// ASCII lower half plus a 128-entry upper-half table.
    Oem(&'static [char; 128]),
}

/// A table encoding with its transcoding backend.
#[derive(Debug, Clone, Copy)]
pub struct Charset {
    name: &'static str,
    codec: Codec,
}

impl Charset {
    /// Looks up the charset for an encoding name.
    ///
    /// Any spelling accepted by [`canonical_name`] works.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::UnknownName`] for names outside the table and
    /// [`EncodingError::Unsupported`] for table entries without a backend.
    pub fn for_name(name: &str) -> Result<Self, EncodingError> {
        let canonical = canonical_name(name).ok_or_else(|| EncodingError::UnknownName {
            name: name.to_string(),
        })?;

        let codec = match canonical {
            "cp850" => Codec::Oem(&oem::CP850_HIGH),
            "cp858" => Codec::Oem(&oem::CP858_HIGH),
            "usascii" => Codec::Ascii,
            "iso88591" => Codec::Latin1(&[]),
            "iso88599" => Codec::Latin1(&oem::ISO_8859_9_OVERRIDES),
            other => Codec::Whatwg(whatwg_encoding(other).ok_or_else(|| {
                EncodingError::Unsupported {
                    name: other.to_string(),
                }
            })?),
        };

        Ok(Self {
            name: canonical,
            codec,
        })
    }

    /// Canonical table name of this charset.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Decodes bytes in this charset.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::Malformed`] if the bytes are not valid.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>, EncodingError> {
        match self.codec {
            Codec::Whatwg(encoding) => encoding
                .decode_without_bom_handling_and_without_replacement(bytes)
                .ok_or_else(|| self.malformed()),
            Codec::Ascii => {
                if bytes.is_ascii() {
                    // ASCII is valid UTF-8
                    std::str::from_utf8(bytes)
                        .map(Cow::Borrowed)
                        .map_err(|_| self.malformed())
                } else {
                    Err(self.malformed())
                }
            }
            Codec::Latin1(overrides) => Ok(Cow::Owned(
                bytes
                    .iter()
                    .map(|&b| {
                        overrides
                            .iter()
                            .find(|(byte, _)| *byte == b)
                            .map_or_else(|| char::from(b), |(_, c)| *c)
                    })
                    .collect(),
            )),
            Codec::Oem(high) => Ok(Cow::Owned(
                bytes
                    .iter()
                    .map(|&b| {
                        if b < 0x80 {
                            char::from(b)
                        } else {
                            high[usize::from(b - 0x80)]
                        }
                    })
                    .collect(),
            )),
        }
    }

    /// Encodes text into this charset.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::Unmappable`] for the first character that has
    /// no representation.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, EncodingError> {
        match self.codec {
            Codec::Whatwg(encoding) if encoding == encoding_rs::UTF_8 => {
                Ok(text.as_bytes().to_vec())
            }
            Codec::Whatwg(encoding) => self.encode_whatwg(encoding, text),
            Codec::Ascii => text
                .chars()
                .map(|c| u8::try_from(c).ok().filter(u8::is_ascii).ok_or(c))
                .collect::<Result<_, _>>()
                .map_err(|c| self.unmappable(c)),
            Codec::Latin1(overrides) => text
                .chars()
                .map(|c| {
                    if let Some((byte, _)) = overrides.iter().find(|(_, o)| *o == c) {
                        return Ok(*byte);
                    }
                    u8::try_from(c)
                        .ok()
                        .filter(|b| !overrides.iter().any(|(o, _)| o == b))
                        .ok_or(c)
                })
                .collect::<Result<_, _>>()
                .map_err(|c| self.unmappable(c)),
            Codec::Oem(high) => text
                .chars()
                .map(|c| {
                    if c.is_ascii() {
                        return Ok(c as u8);
                    }
                    high.iter()
                        .position(|&h| h == c)
                        .and_then(|i| u8::try_from(i + 0x80).ok())
                        .ok_or(c)
                })
                .collect::<Result<_, _>>()
                .map_err(|c| self.unmappable(c)),
        }
    }

    fn encode_whatwg(
        &self,
        encoding: &'static encoding_rs::Encoding,
        text: &str,
    ) -> Result<Vec<u8>, EncodingError> {
        let mut encoder = encoding.new_encoder();
        let mut out = Vec::with_capacity(
            encoder
                .max_buffer_length_from_utf8_without_replacement(text.len())
                .unwrap_or(text.len()),
        );
        let mut remaining = text;

        loop {
            let (result, read) =
                encoder.encode_from_utf8_to_vec_without_replacement(remaining, &mut out, true);
            remaining = &remaining[read..];

            match result {
                EncoderResult::InputEmpty => return Ok(out),
                EncoderResult::Unmappable(c) => return Err(self.unmappable(c)),
                EncoderResult::OutputFull => {
                    let additional = encoder
                        .max_buffer_length_from_utf8_without_replacement(remaining.len())
                        .unwrap_or(remaining.len())
                        .max(16);
                    out.reserve(additional);
                }
            }
        }
    }

    fn malformed(&self) -> EncodingError {
        EncodingError::Malformed {
            encoding: self.name.to_string(),
        }
    }

    fn unmappable(&self, character: char) -> EncodingError {
        EncodingError::Unmappable {
            encoding: self.name.to_string(),
            character,
        }
    }
}

/// `encoding_rs` backend for a canonical table name.
fn whatwg_encoding(canonical: &str) -> Option<&'static encoding_rs::Encoding> {
    use encoding_rs as e;

    let encoding = match canonical {
        "cp874" => e::WINDOWS_874,
        "cp932" => e::SHIFT_JIS,
        "cp936" | "gb2312" => e::GBK,
        "big5" => e::BIG5,
        "cp1250" => e::WINDOWS_1250,
        "cp1251" => e::WINDOWS_1251,
        "cp1252" => e::WINDOWS_1252,
        "cp1253" => e::WINDOWS_1253,
        "cp1254" => e::WINDOWS_1254,
        "cp1255" => e::WINDOWS_1255,
        "cp1256" => e::WINDOWS_1256,
        "cp1257" => e::WINDOWS_1257,
        "koi8r" => e::KOI8_R,
        "koi8u" => e::KOI8_U,
        "eucjp" => e::EUC_JP,
        "iso88592" => e::ISO_8859_2,
        "iso88593" => e::ISO_8859_3,
        "iso88594" => e::ISO_8859_4,
        "iso88595" => e::ISO_8859_5,
        "iso88596" => e::ISO_8859_6,
        "iso88597" => e::ISO_8859_7,
        "iso88598" => e::ISO_8859_8,
        "iso885913" => e::ISO_8859_13,
        "iso885915" => e::ISO_8859_15,
        "iso2022jp" => e::ISO_2022_JP,
        "euckr" => e::EUC_KR,
        "gb18030" => e::GB18030,
        "utf8" => e::UTF_8,
        // iso2022kr: WHATWG maps it to the replacement encoding
        _ => return None,
    };
    Some(encoding)
}

/// Converts narrow text from `from` to `to`.
///
/// # Errors
///
/// Returns an error if either name is unknown or unsupported, if `text` is not
/// valid in `from`, or if it cannot be represented in `to`.
///
/// # Example
/// ```
/// use bluesy::console::convert::convert_text;
///
/// let cp850 = convert_text("café".as_bytes(), "cp850", "utf8").unwrap();
/// assert_eq!(cp850, b"caf\x82");
/// ```
pub fn convert_text(text: &[u8], to: &str, from: &str) -> Result<Vec<u8>, EncodingError> {
    let source = Charset::for_name(from)?;
    let target = Charset::for_name(to)?;
    let decoded = source.decode(text)?;
    target.encode(&decoded)
}

/// Converts wide (UTF-16) text to `to`.
///
/// The source encoding is accepted for symmetry with [`convert_text`] and
/// ignored: UTF-16 input is already decoded.
///
/// # Errors
///
/// Returns an error if `text` contains unpaired surrogates, if `to` is unknown
/// or unsupported, or if the text cannot be represented in `to`.
pub fn convert_wide(text: &[u16], to: &str, _from: &str) -> Result<Vec<u8>, EncodingError> {
    let target = Charset::for_name(to)?;
    let decoded = String::from_utf16(text).map_err(|_| EncodingError::Malformed {
        encoding: UTF16.to_string(),
    })?;
    target.encode(&decoded)
}

/// Converts a Rust string to `to`.
///
/// # Errors
///
/// Returns an error if `to` is unknown or unsupported, or if the text cannot
/// be represented in `to`.
pub fn convert_str(text: &str, to: &str) -> Result<Vec<u8>, EncodingError> {
    Charset::for_name(to)?.encode(text)
}
