// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line matching and counting policies for [`FileLineReader`](super::FileLineReader).
//!
//! ```text
//! LineMatcher  SubstringMatcher (default) | RegexMatcher | Fn(&[u8], &str) -> bool
//! LineCounter  SimpleLineCounter (default) | NoLineCounter
//! ```

use std::cell::RefCell;
use std::fmt;

use regex::bytes::Regex;
use tracing::warn;

/// Decides whether a line matches a pattern.
///
/// Lines are raw bytes in the file's encoding.
pub trait LineMatcher {
    fn line_matches(&self, line: &[u8], pattern: &str) -> bool;
}

/// Closures work as matchers.
impl<F> LineMatcher for F
where
    F: Fn(&[u8], &str) -> bool,
{
    fn line_matches(&self, line: &[u8], pattern: &str) -> bool {
        self(line, pattern)
    }
}

/// Matches when the line contains the pattern's bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl LineMatcher for SubstringMatcher {
    fn line_matches(&self, line: &[u8], pattern: &str) -> bool {
        let needle = pattern.as_bytes();
        needle.is_empty() || line.windows(needle.len()).any(|window| window == needle)
    }
}

/// Matches when the pattern, as a regular expression, finds a match in the line.
///
/// Compiled with [`regex::bytes`], so lines need not be UTF-8; with Unicode
/// mode on, `.` and classes only match valid UTF-8 sequences, and `(?-u)`
/// switches them to single bytes.
///
/// The last compiled pattern is cached. A pattern that fails to compile
/// matches nothing; validate user input with [`RegexMatcher::validate`] first.
#[derive(Debug, Default)]
pub struct RegexMatcher {
    cache: RefCell<Option<Regex>>,
}

impl RegexMatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks that `pattern` compiles.
    ///
    /// # Errors
    ///
    /// Returns the compilation error.
    pub fn validate(pattern: &str) -> Result<(), regex::Error> {
        Regex::new(pattern).map(|_| ())
    }
}

impl LineMatcher for RegexMatcher {
    fn line_matches(&self, line: &[u8], pattern: &str) -> bool {
        let mut cache = self.cache.borrow_mut();

        if cache.as_ref().is_none_or(|re| re.as_str() != pattern) {
            match Regex::new(pattern) {
                Ok(re) => *cache = Some(re),
                Err(e) => {
                    warn!(pattern, error = %e, "invalid line pattern, matching nothing");
                    *cache = None;
                    return false;
                }
            }
        }

        cache.as_ref().is_some_and(|re| re.is_match(line))
    }
}

/// Counts lines as they are read.
pub trait LineCounter {
    type Count: Copy + fmt::Display;

    fn increment(&mut self);
    fn line_count(&self) -> Self::Count;
}

/// Counts every line read.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleLineCounter {
    total: u64,
}

impl LineCounter for SimpleLineCounter {
    type Count = u64;

    fn increment(&mut self) {
        self.total += 1;
    }

    fn line_count(&self) -> u64 {
        self.total
    }
}

/// Counts nothing; [`line_count`](LineCounter::line_count) is always 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLineCounter;

impl LineCounter for NoLineCounter {
    type Count = u32;

    fn increment(&mut self) {}

    fn line_count(&self) -> u32 {
        0
    }
}
