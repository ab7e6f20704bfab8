//! ASCII-only matchers used by the value and string grammars.

use super::cursor::ByteCursor;
use super::error::SyntaxError;

/// Consumes exactly the bytes of `rest`, failing with `err` on any mismatch
/// or on early end of input.
pub(crate) fn expect_rest(
    cur: &mut ByteCursor<'_>,
    rest: &[u8],
    err: SyntaxError,
) -> Result<(), SyntaxError> {
    for &expected in rest {
        if cur.any(err)? != expected {
            return Err(err);
        }
    }
    Ok(())
}

/// Reads four ASCII hex digits as one 16-bit word, as found in `\uXXXX`.
pub(crate) fn hex_word(cur: &mut ByteCursor<'_>) -> Result<u16, SyntaxError> {
    let mut word = 0u16;
    for _ in 0..4 {
        let digit = match cur.any(SyntaxError::IncompleteEscapeSequence)? {
            b @ b'0'..=b'9' => u16::from(b - b'0'),
            b @ b'a'..=b'f' => u16::from(b - b'a' + 10),
            b @ b'A'..=b'F' => u16::from(b - b'A' + 10),
            _ => return Err(SyntaxError::InvalidEscapeSequence),
        };
        word = (word << 4) | digit;
    }
    Ok(word)
}
