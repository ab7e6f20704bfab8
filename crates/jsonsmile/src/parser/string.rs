//! String literal scanner.
//!
//! Decoding runs in two passes. A measurement pass walks to the closing
//! quote while tracking a single "flat" bit: the region stays flat while it
//! holds only printable ASCII and no escapes. A flat region is copied
//! verbatim; anything else rewinds and re-reads through
//! [`copy_and_escape`], which resolves escapes into a buffer sized by the
//! measured region (escape expansion never grows the payload).

use alloc::string::String;
use alloc::vec::Vec;

use super::ascii;
use super::cursor::ByteCursor;
use super::error::SyntaxError;

/// Decodes a string literal. The cursor must sit just past the opening
/// quote; on success it is left just past the closing quote.
pub(crate) fn scan_string(cur: &mut ByteCursor<'_>) -> Result<String, SyntaxError> {
    let start = cur.pos();
    let mut flat = true;
    loop {
        match cur.any(SyntaxError::IncompleteString)? {
            b'"' => break,
            b'\\' => {
                // Consumed only to keep measuring; the rescan decodes it.
                cur.any(SyntaxError::InvalidEscapeSequence)?;
                flat = false;
            }
            w => {
                flat = flat && w > 0x1F && w < 0x80;
            }
        }
    }
    let end = cur.pos() - 1;
    if flat {
        let raw = cur.slice(start, end);
        // Safety: the measurement pass verified every byte in the flat
        // region is printable ASCII.
        return Ok(unsafe { core::str::from_utf8_unchecked(raw) }.into());
    }
    cur.rewind(cur.pos() - start);
    copy_and_escape(cur, end - start)
}

/// Escape-aware rescan from the opening quote.
fn copy_and_escape(cur: &mut ByteCursor<'_>, capacity: usize) -> Result<String, SyntaxError> {
    let mut buf: Vec<u8> = Vec::with_capacity(capacity);
    loop {
        match cur.any(SyntaxError::IncompleteString)? {
            b'"' => break,
            b'\\' => match cur.any(SyntaxError::IncompleteEscapeSequence)? {
                b'"' => buf.push(b'"'),
                b'\\' => buf.push(b'\\'),
                b'/' => buf.push(b'/'),
                b't' => buf.push(b'\t'),
                b'n' => buf.push(b'\n'),
                b'r' => buf.push(b'\r'),
                b'b' => buf.push(0x08),
                b'f' => buf.push(0x0C),
                b'u' => {
                    let word = ascii::hex_word(cur)?;
                    // `from_u32` is `None` exactly on the surrogate range,
                    // which is rewritten to U+FFFD.
                    let ch = char::from_u32(u32::from(word))
                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    let mut utf8 = [0u8; 4];
                    buf.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
                }
                _ => return Err(SyntaxError::InvalidEscapeSequence),
            },
            other => buf.push(other),
        }
    }
    String::from_utf8(buf).map_err(|_| SyntaxError::InvalidUtf8)
}
