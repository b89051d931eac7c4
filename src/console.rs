//! Line-oriented console helpers shared by the interactive flows.

use std::io::{self, BufRead, Write};

/// Reads one line, trimmed. `None` means end of input, which the
/// interactive loops treat like leaving the current menu.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Writes a prompt without a trailing newline, flushes, and reads the
/// response line.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    read_line(input)
}
