// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the sequential line reader.

use std::io::Write;

use bluesy::reader::{FileLineReader, LineCounter, LineMatcher, NoLineCounter, SimpleLineCounter};
use tempfile::NamedTempFile;

const LOG: &str = "\
# header
# generated
[INFO] start
[WARN] disk
[INFO] stop
";

fn log_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(LOG.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn remaining<M, C>(reader: &mut FileLineReader<M, C>) -> Vec<String>
where
    M: LineMatcher,
    C: LineCounter,
{
    let mut lines = Vec::new();
    while reader.was_read_ok() {
        lines.push(reader.current_line_lossy().into_owned());
        reader.read_line().unwrap();
    }
    lines
}

#[test]
fn reader_skip_header_block() {
    let file = log_file();
    let mut reader = FileLineReader::open(file.path()).unwrap();

    reader.skip_matching_lines("#").unwrap();
    assert_eq!(
        remaining(&mut reader),
        ["[INFO] start", "[WARN] disk", "[INFO] stop"]
    );
    assert_eq!(reader.line_count(), 5);
}

#[test]
fn reader_skip_count_then_read() {
    let file = log_file();
    let mut reader = FileLineReader::open(file.path()).unwrap();

    reader.skip_lines(2).unwrap();
    assert_eq!(reader.current_line(), b"# generated");
    reader.read_line().unwrap();
    assert_eq!(remaining(&mut reader).len(), 3);
}

#[test]
fn reader_closure_policy_without_counting() {
    let file = log_file();
    let level = |line: &[u8], level: &str| line.starts_with(format!("[{level}]").as_bytes());
    let mut reader = FileLineReader::with_policies(file.path(), level, NoLineCounter).unwrap();

    reader.skip_lines_until_match("WARN").unwrap();
    assert_eq!(reader.current_line(), b"[WARN] disk");
    assert!(reader.matcher().line_matches(b"[INFO] x", "INFO"));
    assert_eq!(reader.line_count(), 0);
}

#[test]
fn reader_counter_policies() {
    let mut simple = SimpleLineCounter::default();
    simple.increment();
    simple.increment();
    assert_eq!(simple.line_count(), 2);

    let mut none = NoLineCounter;
    none.increment();
    assert_eq!(none.line_count(), 0);
}

#[test]
fn reader_open_error_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.log");
    let err = FileLineReader::open(&path).unwrap_err();
    let expected = format!("error opening file '{}': ", path.display());
    assert!(err.to_string().starts_with(&expected));
}
