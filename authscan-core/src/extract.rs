//! Failure-line extraction.
//!
//! A line counts as a failed login when it contains `Failed password` and,
//! somewhere after it, `from <a>.<b>.<c>.<d>`. The first such address after
//! the marker is the source. Each digit group is one or more ASCII digits;
//! octet ranges are not checked.

use std::borrow::Cow;
use std::io::{self, BufRead};
use std::ops::Range;

use regex::Regex;

use crate::types::Address;

/// Literal that marks an authentication failure.
pub const FAILURE_MARKER: &str = "Failed password";

/// Pattern used to pull the source address out of a failure line.
/// The lazy `.*?` makes the first `from <addr>` after the marker win.
pub const FAILURE_PATTERN: &str =
    r"Failed password.*?from ([0-9]+\.[0-9]+\.[0-9]+\.[0-9]+)";

/// Matches single lines against `FAILURE_PATTERN`.
#[derive(Debug, Clone)]
pub struct FailureExtractor {
    pattern: Regex,
}

impl FailureExtractor {
    pub fn new() -> Self {
        let pattern = Regex::new(FAILURE_PATTERN).expect("valid failure pattern");
        Self { pattern }
    }

    /// Source address of a failure line, or `None` if the line does not match.
    pub fn extract(&self, line: &str) -> Option<Address> {
        if !line.contains(FAILURE_MARKER) {
            return None;
        }
        self.pattern
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| Address::new(m.as_str()))
    }
}

impl Default for FailureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Line counters collected while scanning.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Lines read from the stream.
    pub lines_read: u64,
    /// Lines that yielded an address.
    pub lines_matched: u64,
    /// Lines that contained invalid UTF-8 (bad bytes dropped, line still scanned).
    pub lines_lossy: u64,
}

/// Lazy iterator of failure addresses over a line-oriented reader.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Invalid UTF-8 never stops
/// the scan: the offending bytes are dropped and the rest of the line is
/// still matched. A real read error ends iteration; fetch it with
/// [`take_error`].
///
/// [`take_error`]: FailureScanner::take_error
pub struct FailureScanner<R> {
    reader: R,
    extractor: FailureExtractor,
    buf: Vec<u8>,
    // Unconsumed lines of the current chunk are `buf[pos..end]`.
    pos: usize,
    end: usize,
    pending: bool,
    stats: ScanStats,
    error: Option<io::Error>,
    done: bool,
}

impl<R: BufRead> FailureScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            extractor: FailureExtractor::new(),
            buf: Vec::new(),
            pos: 0,
            end: 0,
            pending: false,
            stats: ScanStats::default(),
            error: None,
            done: false,
        }
    }

    /// Counters so far. Final once the iterator returns `None`.
    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    /// The read error that ended the scan early, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Read the next `\n`-terminated chunk. Returns false at EOF or on error.
    fn fill(&mut self) -> bool {
        self.buf.clear();
        loop {
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.done = true;
                    return false;
                }
                Ok(_) => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.error = Some(e);
                    self.done = true;
                    return false;
                }
            }
        }

        let mut end = self.buf.len();
        if self.buf[end - 1] == b'\n' {
            end -= 1;
        }
        if end > 0 && self.buf[end - 1] == b'\r' {
            end -= 1;
        }
        self.pos = 0;
        self.end = end;
        self.pending = true;
        true
    }

    /// Byte range of the next line in the current chunk.
    fn next_line(&mut self) -> Option<Range<usize>> {
        if !self.pending {
            return None;
        }
        match self.buf[self.pos..self.end].iter().position(|&b| b == b'\r') {
            Some(i) => {
                let line = self.pos..self.pos + i;
                self.pos += i + 1;
                Some(line)
            }
            None => {
                self.pending = false;
                Some(self.pos..self.end)
            }
        }
    }
}

impl<R: BufRead> Iterator for FailureScanner<R> {
    type Item = Address;

    fn next(&mut self) -> Option<Address> {
        loop {
            let range = match self.next_line() {
                Some(range) => range,
                None if self.done || !self.fill() => return None,
                None => continue,
            };

            self.stats.lines_read += 1;
            let (line, lossy) = decode_line(&self.buf[range]);
            if lossy {
                self.stats.lines_lossy += 1;
            }
            if let Some(address) = self.extractor.extract(&line) {
                self.stats.lines_matched += 1;
                return Some(address);
            }
        }
    }
}

/// Decode a raw line, dropping invalid UTF-8 sequences.
/// Returns the text and whether anything had to be dropped.
fn decode_line(bytes: &[u8]) -> (Cow<'_, str>, bool) {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => (Cow::Borrowed(text), false),
        Cow::Owned(text) => (
            Cow::Owned(text.replace(char::REPLACEMENT_CHARACTER, "")),
            true,
        ),
    }
}
