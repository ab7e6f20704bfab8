//! Compact JSON text encoder.

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::value::{Member, Value};

static HEX: [u8; 16] = *b"0123456789ABCDEF";

/// Serializes a value as canonical UTF-8 JSON with no whitespace.
///
/// Encoding is total: every tree maps to a byte stream that decodes back
/// to an equal tree. String escaping is minimal — only `"`, `\` and
/// control characters below 0x20 are escaped; DEL and all non-ASCII pass
/// through as raw UTF-8.
///
/// ```
/// use jsonsmile::{Value, encode};
///
/// let v = Value::Array(vec![Value::True, Value::Null]);
/// assert_eq!(encode(&v), b"[true,null]");
/// ```
#[must_use]
pub fn encode(value: &Value) -> Vec<u8> {
    let mut out = Vec::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Null => out.extend_from_slice(b"null"),
        Value::True => out.extend_from_slice(b"true"),
        Value::False => out.extend_from_slice(b"false"),
        Value::String(s) => write_string(out, s),
        Value::Number(n) => out.extend_from_slice(n.to_string().as_bytes()),
        Value::Array(items) => {
            out.push(b'[');
            let mut first = true;
            for item in items {
                if !first {
                    out.push(b',');
                }
                first = false;
                write_value(out, item);
            }
            out.push(b']');
        }
        Value::Object(members) => {
            out.push(b'{');
            let mut first = true;
            for Member { key, value } in members {
                if !first {
                    out.push(b',');
                }
                first = false;
                write_string(out, key);
                out.push(b':');
                write_value(out, value);
            }
            out.push(b'}');
        }
    }
}

fn write_string(out: &mut Vec<u8>, text: &str) {
    out.push(b'"');
    for &b in text.as_bytes() {
        match b {
            b'"' => out.extend_from_slice(b"\\\""),
            b'\\' => out.extend_from_slice(b"\\\\"),
            0x08 => out.extend_from_slice(b"\\b"),
            b'\t' => out.extend_from_slice(b"\\t"),
            b'\n' => out.extend_from_slice(b"\\n"),
            0x0C => out.extend_from_slice(b"\\f"),
            b'\r' => out.extend_from_slice(b"\\r"),
            b if b < 0x20 => {
                out.extend_from_slice(b"\\u00");
                out.push(HEX[usize::from(b >> 4)]);
                out.push(HEX[usize::from(b & 0xF)]);
            }
            b => out.push(b),
        }
    }
    out.push(b'"');
}
