//! Line reading for the interactive console.

use std::io::{self, BufRead};

/// What came back from one attempt to read a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRead {
    /// A complete line, line terminator included if there was one
    Line(String),
    /// A line was consumed but it is not valid UTF-8
    Unreadable,
    /// The input is exhausted
    Closed,
}

/// Reads one line from `input`.
///
/// Invalid UTF-8 is reported as [`LineRead::Unreadable`] rather than an
/// error, so callers can re-prompt. Real I/O failures are propagated.
pub fn read_line<R: BufRead + ?Sized>(input: &mut R) -> io::Result<LineRead> {
    let mut bytes = Vec::new();
    if input.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(LineRead::Closed);
    }
    Ok(match String::from_utf8(bytes) {
        Ok(line) => LineRead::Line(line),
        Err(_) => LineRead::Unreadable,
    })
}
