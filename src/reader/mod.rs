// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sequential text file reader, one line at a time.
//!
//! ```text
//! open(path) --> read_line() --> current_line()
//!                    |
//!   skip_matching_line(p)     one matching line
//!   skip_matching_lines(p)    while lines match
//!   skip_lines_until_match(p) until a line matches
//!   skip_lines(n)             n lines, no matching
//! ```
//!
//! Lines are raw bytes in whatever encoding the file uses; nothing is
//! decoded. The current line is the last line read. Every skip starts by
//! reading, so it discards the current line.
//!
//! After the three matching skips, the current line is the first line to
//! process, so handle it before reading again:
//!
//! ```no_run
//! use bluesy::reader::FileLineReader;
//!
//! let mut reader = FileLineReader::open("file.txt")?;
//! reader.skip_lines_until_match("BEGIN")?;
//! while reader.was_read_ok() {
//!     println!("{}", reader.current_line_lossy());
//!     reader.read_line()?;
//! }
//! # Ok::<(), bluesy::error::ReaderError>(())
//! ```
//!
//! [`skip_lines`](FileLineReader::skip_lines) is different: the current line
//! is the last line skipped, and the caller reads once more to reach the
//! first line to process. Skipping 0 lines must not read anything, which a
//! "position on the next line" rule would break.

pub mod policy;

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::ReaderError;

pub use policy::{
    LineCounter, LineMatcher, NoLineCounter, RegexMatcher, SimpleLineCounter, SubstringMatcher,
};

/// Reads a text file line by line. Not thread safe.
#[derive(Debug)]
pub struct FileLineReader<M = SubstringMatcher, C = SimpleLineCounter> {
    reader: BufReader<File>,
    current: Vec<u8>,
    path: PathBuf,
    read_ok: bool,
    matcher: M,
    counter: C,
}

impl FileLineReader {
    /// Opens `path` with the default policies.
    ///
    /// No line is read yet.
    ///
    /// # Errors
    ///
    /// Returns [`ReaderError::Open`] if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ReaderError> {
        Self::with_policies(path, SubstringMatcher, SimpleLineCounter::default())
    }
}

impl<M: LineMatcher, C: LineCounter> FileLineReader<M, C> {
    /// Opens `path` with the given matcher and counter.
    ///
    /// # Errors
    ///
    /// Returns [`ReaderError::Open`] if the file cannot be opened.
    pub fn with_policies<P: AsRef<Path>>(
        path: P,
        matcher: M,
        counter: C,
    ) -> Result<Self, ReaderError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| ReaderError::Open {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "opened file for line reading");

        Ok(Self {
            reader: BufReader::new(file),
            current: Vec::new(),
            path,
            read_ok: true,
            matcher,
            counter,
        })
    }

    /// Reads the next line, which becomes the current line.
    ///
    /// A trailing `\n` is stripped, then a trailing `\r`. Returns `false` at
    /// end of file; the current line is then empty and
    /// [`was_read_ok`](Self::was_read_ok) is `false`.
    ///
    /// # Errors
    ///
    /// Returns [`ReaderError::Read`] on I/O failure.
    pub fn read_line(&mut self) -> Result<bool, ReaderError> {
        self.current.clear();

        let read = match self.reader.read_until(b'\n', &mut self.current) {
            Ok(read) => read,
            Err(source) => {
                self.read_ok = false;
                self.current.clear();
                return Err(ReaderError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if read == 0 {
            self.read_ok = false;
            return Ok(false);
        }

        if self.current.last() == Some(&b'\n') {
            self.current.pop();
        }
        if self.current.last() == Some(&b'\r') {
            self.current.pop();
        }

        self.counter.increment();
        self.read_ok = true;
        trace!(line = %self.current_line_lossy(), "read line");
        Ok(true)
    }

    /// Whether the last read, or the last read of a skip, got a line.
    #[must_use]
    pub const fn was_read_ok(&self) -> bool {
        self.read_ok
    }

    /// How many lines have been read so far, per the counter policy.
    #[must_use]
    pub fn line_count(&self) -> C::Count {
        self.counter.line_count()
    }

    /// The current line's bytes, without terminator.
    #[must_use]
    pub fn current_line(&self) -> &[u8] {
        &self.current
    }

    /// The current line as UTF-8, with invalid sequences replaced.
    #[must_use]
    pub fn current_line_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.current)
    }

    #[must_use]
    pub fn is_line_empty(&self) -> bool {
        self.current.is_empty()
    }

    #[must_use]
    pub fn file_name(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Matches the current line against `pattern`, without reading.
    #[must_use]
    pub fn line_matches(&self, pattern: &str) -> bool {
        self.matcher.line_matches(&self.current, pattern)
    }

    /// Reads a line; if it matches `pattern`, reads another.
    ///
    /// # Errors
    ///
    /// Returns [`ReaderError::Read`] on I/O failure.
    pub fn skip_matching_line(&mut self, pattern: &str) -> Result<(), ReaderError> {
        if self.read_line()? && self.line_matches(pattern) {
            self.read_line()?;
        }
        Ok(())
    }

    /// Reads lines while they match `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`ReaderError::Read`] on I/O failure.
    pub fn skip_matching_lines(&mut self, pattern: &str) -> Result<(), ReaderError> {
        while self.read_line()? && self.line_matches(pattern) {}
        Ok(())
    }

    /// Reads lines until one matches `pattern`.
    ///
    /// Without a match the whole file is consumed and
    /// [`was_read_ok`](Self::was_read_ok) is `false`.
    ///
    /// # Errors
    ///
    /// Returns [`ReaderError::Read`] on I/O failure.
    pub fn skip_lines_until_match(&mut self, pattern: &str) -> Result<(), ReaderError> {
        while self.read_line()? && !self.line_matches(pattern) {}
        Ok(())
    }

    /// Reads `count` lines unconditionally.
    ///
    /// The current line is the last line skipped: read once more to get the
    /// first line to process.
    ///
    /// # Errors
    ///
    /// Returns [`ReaderError::Read`] on I/O failure.
    pub fn skip_lines(&mut self, count: usize) -> Result<(), ReaderError> {
        let mut remaining = count;
        while remaining > 0 && self.read_line()? {
            remaining -= 1;
        }
        Ok(())
    }
}
