//! Recursive-descent decoder from raw bytes to [`Value`] trees.
//!
//! The decoder dispatches on the first non-whitespace byte of each value and
//! hands numeric and string lexing to the dedicated modules. Containers are
//! grown by plain `Vec` appends, which keeps input order (including
//! duplicate object keys) and costs O(n) over the whole document. Nesting
//! depth is bounded by [`DecodeOptions::recursion_limit`] so adversarial
//! input cannot overrun the call stack.

pub(crate) mod ascii;
pub(crate) mod cursor;
mod error;
mod string;

use alloc::vec::Vec;

pub use error::SyntaxError;

use crate::number::Scientific;
use crate::value::{Member, Value};
use cursor::ByteCursor;
use string::scan_string;

/// Decoder tunables.
#[derive(Clone, Debug)]
pub struct DecodeOptions {
    /// Maximum container nesting depth. Each object or array entered
    /// consumes one level; exceeding the budget fails with
    /// [`SyntaxError::RecursionLimitExceeded`].
    pub recursion_limit: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            recursion_limit: 128,
        }
    }
}

/// Decodes one JSON document with default options.
///
/// Leading and trailing whitespace is ignored; anything else after the
/// top-level value is an error.
///
/// ```
/// use jsonsmile::{Value, decode};
///
/// let v = decode(br#"{"on": true}"#).unwrap();
/// assert_eq!(v.to_string(), r#"{"on":true}"#);
/// ```
///
/// # Errors
///
/// Returns the first [`SyntaxError`] encountered; nothing is recovered
/// from a partial parse.
pub fn decode(data: &[u8]) -> Result<Value, SyntaxError> {
    decode_with_options(data, &DecodeOptions::default())
}

/// Decodes one JSON document under explicit [`DecodeOptions`].
///
/// # Errors
///
/// As [`decode`].
pub fn decode_with_options(data: &[u8], options: &DecodeOptions) -> Result<Value, SyntaxError> {
    let mut cur = ByteCursor::new(data);
    cur.skip_whitespace();
    let leader = cur.any(SyntaxError::EmptyInput)?;
    let value = parse_value(&mut cur, leader, options.recursion_limit)?;
    cur.skip_whitespace();
    if cur.peek().is_some() {
        return Err(SyntaxError::UnexpectedLeftovers);
    }
    Ok(value)
}

/// Parses the value whose first byte `leader` was already consumed.
fn parse_value(cur: &mut ByteCursor<'_>, leader: u8, depth: usize) -> Result<Value, SyntaxError> {
    match leader {
        b'{' => parse_object(cur, depth),
        b'[' => parse_array(cur, depth),
        b't' => {
            ascii::expect_rest(cur, b"rue", SyntaxError::ExpectedTrue)?;
            Ok(Value::True)
        }
        b'f' => {
            ascii::expect_rest(cur, b"alse", SyntaxError::ExpectedFalse)?;
            Ok(Value::False)
        }
        b'n' => {
            ascii::expect_rest(cur, b"ull", SyntaxError::ExpectedNull)?;
            Ok(Value::Null)
        }
        b'"' => scan_string(cur).map(Value::String),
        b'-' => Scientific::parse_negated(cur).map(Value::Number),
        b'0' => {
            if cur.peek().is_some_and(|b| b.is_ascii_digit()) {
                return Err(SyntaxError::LeadingZero);
            }
            Scientific::parse_trailing(cur, 0, false).map(Value::Number)
        }
        d @ b'1'..=b'9' => Scientific::parse_trailing(cur, d - b'0', false).map(Value::Number),
        _ => Err(SyntaxError::InvalidLeader),
    }
}

fn parse_object(cur: &mut ByteCursor<'_>, depth: usize) -> Result<Value, SyntaxError> {
    let depth = depth
        .checked_sub(1)
        .ok_or(SyntaxError::RecursionLimitExceeded)?;
    let mut members: Vec<Member> = Vec::new();
    cur.skip_whitespace();
    match cur.any(SyntaxError::IncompleteObject)? {
        b'}' => return Ok(Value::Object(members)),
        b'"' => {
            let key = scan_string(cur)?;
            let value = parse_member_value(cur, depth)?;
            members.push(Member { key, value });
        }
        _ => return Err(SyntaxError::ExpectedQuoteOrRightBrace),
    }
    loop {
        cur.skip_whitespace();
        match cur.any(SyntaxError::IncompleteObject)? {
            b'}' => return Ok(Value::Object(members)),
            b',' => {
                cur.skip_whitespace();
                if cur.any(SyntaxError::IncompleteObject)? != b'"' {
                    return Err(SyntaxError::ExpectedQuote);
                }
                let key = scan_string(cur)?;
                let value = parse_member_value(cur, depth)?;
                members.push(Member { key, value });
            }
            _ => return Err(SyntaxError::ExpectedCommaOrRightBracket),
        }
    }
}

/// Parses the `: value` tail of an object member.
fn parse_member_value(cur: &mut ByteCursor<'_>, depth: usize) -> Result<Value, SyntaxError> {
    cur.skip_whitespace();
    if cur.any(SyntaxError::IncompleteObject)? != b':' {
        return Err(SyntaxError::ExpectedColon);
    }
    cur.skip_whitespace();
    let leader = cur.any(SyntaxError::IncompleteObject)?;
    parse_value(cur, leader, depth)
}

fn parse_array(cur: &mut ByteCursor<'_>, depth: usize) -> Result<Value, SyntaxError> {
    let depth = depth
        .checked_sub(1)
        .ok_or(SyntaxError::RecursionLimitExceeded)?;
    let mut items: Vec<Value> = Vec::new();
    cur.skip_whitespace();
    match cur.any(SyntaxError::IncompleteArray)? {
        b']' => return Ok(Value::Array(items)),
        leader => items.push(parse_value(cur, leader, depth)?),
    }
    loop {
        cur.skip_whitespace();
        match cur.any(SyntaxError::IncompleteArray)? {
            b']' => return Ok(Value::Array(items)),
            b',' => {
                cur.skip_whitespace();
                let leader = cur.any(SyntaxError::IncompleteArray)?;
                items.push(parse_value(cur, leader, depth)?);
            }
            _ => return Err(SyntaxError::ExpectedCommaOrRightBracket),
        }
    }
}
