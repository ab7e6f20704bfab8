//! Binary encoder for the Smile format.
//!
//! The output is the plain framing subset: a fixed header with every
//! sharing feature disabled, no back-references, no shared name or value
//! tables. Integers that fit a machine register use the zigzag variable-
//! length tokens; any other number is written as a big decimal whose
//! coefficient rides in the 7/8 "safe binary" encoding (every payload byte
//! keeps its high bit clear).

use alloc::vec::Vec;

use thiserror::Error;

use crate::number::{Parts, Scientific};
use crate::value::{Member, Value};

/// `:)\n` followed by a zero flag byte: no shared names or values, no raw
/// binary bodies.
const HEADER: [u8; 4] = [0x3A, 0x29, 0x0A, 0x00];

const TOKEN_NULL: u8 = 0x21;
const TOKEN_FALSE: u8 = 0x22;
const TOKEN_TRUE: u8 = 0x23;
const TOKEN_INT_32: u8 = 0x24;
const TOKEN_INT_64: u8 = 0x25;
const TOKEN_BIG_DECIMAL: u8 = 0x2A;
const TOKEN_STRING_LONG: u8 = 0xE4;
const TOKEN_LITERAL_END: u8 = 0xFC;
const TOKEN_ARRAY_START: u8 = 0xF8;
const TOKEN_ARRAY_END: u8 = 0xF9;
const TOKEN_OBJECT_START: u8 = 0xFA;
const TOKEN_OBJECT_END: u8 = 0xFB;
const TOKEN_KEY_EMPTY: u8 = 0x20;
const TOKEN_KEY_SHORT_BASE: u8 = 0xC0;
const TOKEN_KEY_LONG: u8 = 0x34;

/// Failures of the Smile encoder.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeError {
    /// The big-decimal token carries its coefficient as one machine word;
    /// an arbitrary-precision coefficient cannot be framed.
    #[error("number coefficient does not fit in a machine word")]
    BigCoefficientUnsupported,
}

/// Serializes a value as a Smile byte stream.
///
/// ```
/// use jsonsmile::{Value, encode_smile_simple};
///
/// let bytes = encode_smile_simple(&Value::Null).unwrap();
/// assert_eq!(bytes, [0x3A, 0x29, 0x0A, 0x00, 0x21]);
/// ```
///
/// # Errors
///
/// Fails only when a number's coefficient exceeds the machine word; see
/// [`EncodeError`].
pub fn encode_smile_simple(value: &Value) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::new();
    out.extend_from_slice(&HEADER);
    write_value(&mut out, value)?;
    Ok(out)
}

fn write_value(out: &mut Vec<u8>, value: &Value) -> Result<(), EncodeError> {
    match value {
        Value::Null => out.push(TOKEN_NULL),
        Value::False => out.push(TOKEN_FALSE),
        Value::True => out.push(TOKEN_TRUE),
        Value::String(s) => {
            out.push(TOKEN_STRING_LONG);
            out.extend_from_slice(s.as_bytes());
            out.push(TOKEN_LITERAL_END);
        }
        Value::Number(n) => write_number(out, n)?,
        Value::Array(items) => {
            out.push(TOKEN_ARRAY_START);
            for item in items {
                write_value(out, item)?;
            }
            out.push(TOKEN_ARRAY_END);
        }
        Value::Object(members) => {
            out.push(TOKEN_OBJECT_START);
            for Member { key, value } in members {
                write_key(out, key);
                write_value(out, value)?;
            }
            out.push(TOKEN_OBJECT_END);
        }
    }
    Ok(())
}

/// Picks the narrowest number token: exact i32, exact i64, then the
/// machine-word big decimal.
fn write_number(out: &mut Vec<u8>, n: &Scientific) -> Result<(), EncodeError> {
    if let Some(v) = n.to_i32() {
        out.push(TOKEN_INT_32);
        write_zigzag_i32(out, v);
        return Ok(());
    }
    if let Some(v) = n.to_i64() {
        out.push(TOKEN_INT_64);
        write_zigzag_i64(out, v);
        return Ok(());
    }
    match n.parts() {
        Parts::Small {
            coefficient,
            exponent,
        } => {
            out.push(TOKEN_BIG_DECIMAL);
            // The wire format holds only 32 exponent bits; larger values
            // wrap.
            #[allow(clippy::cast_possible_truncation)]
            write_zigzag_i32(out, exponent as i32);
            let coefficient = coefficient.to_be_bytes();
            write_unsigned_leb(out, coefficient.len() as u64);
            write_packed7(out, &coefficient);
            Ok(())
        }
        Parts::Big { .. } => Err(EncodeError::BigCoefficientUnsupported),
    }
}

fn write_key(out: &mut Vec<u8>, key: &str) {
    let bytes = key.as_bytes();
    match bytes.len() {
        0 => out.push(TOKEN_KEY_EMPTY),
        1 => {
            out.push(0x80);
            out.push(bytes[0]);
        }
        n @ 2..=55 => {
            #[allow(clippy::cast_possible_truncation)]
            out.push(TOKEN_KEY_SHORT_BASE + (n as u8 - 2));
            out.extend_from_slice(bytes);
        }
        _ => {
            out.push(TOKEN_KEY_LONG);
            out.extend_from_slice(bytes);
            out.push(TOKEN_LITERAL_END);
        }
    }
}

fn write_zigzag_i32(out: &mut Vec<u8>, value: i32) {
    #[allow(clippy::cast_sign_loss)]
    let zz = ((value as u32) << 1) ^ ((value >> 31) as u32);
    write_unsigned_leb(out, u64::from(zz));
}

fn write_zigzag_i64(out: &mut Vec<u8>, value: i64) {
    #[allow(clippy::cast_sign_loss)]
    let zz = ((value as u64) << 1) ^ ((value >> 63) as u64);
    write_unsigned_leb(out, zz);
}

/// Base-128 with a continuation bit on every byte but the last.
fn write_unsigned_leb(out: &mut Vec<u8>, mut value: u64) {
    loop {
        #[allow(clippy::cast_possible_truncation)]
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

/// 7/8 packing: each group of 7 input bytes becomes 8 output bytes whose
/// high bits are clear, the 56 payload bits kept in order, high bits
/// first. A final partial group is left-aligned and zero-padded.
fn write_packed7(out: &mut Vec<u8>, data: &[u8]) {
    let mut chunks = data.chunks_exact(7);
    for chunk in &mut chunks {
        let mut acc = 0u64;
        for &b in chunk {
            acc = (acc << 8) | u64::from(b);
        }
        for slot in (0..8).rev() {
            #[allow(clippy::cast_possible_truncation)]
            out.push(((acc >> (slot * 7)) & 0x7F) as u8);
        }
    }
    let rest = chunks.remainder();
    if !rest.is_empty() {
        let mut acc = 0u64;
        for &b in rest {
            acc = (acc << 8) | u64::from(b);
        }
        let bits = 8 * rest.len();
        let slots = bits.div_ceil(7);
        acc <<= slots * 7 - bits;
        for slot in (0..slots).rev() {
            #[allow(clippy::cast_possible_truncation)]
            out.push(((acc >> (slot * 7)) & 0x7F) as u8);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn leb(value: u64) -> Vec<u8> {
        let mut out = Vec::new();
        write_unsigned_leb(&mut out, value);
        out
    }

    fn zigzag32(value: i32) -> Vec<u8> {
        let mut out = Vec::new();
        write_zigzag_i32(&mut out, value);
        out
    }

    fn packed(data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        write_packed7(&mut out, data);
        out
    }

    #[test]
    fn unsigned_leb_groups() {
        assert_eq!(leb(0), [0x00]);
        assert_eq!(leb(0x7F), [0x7F]);
        assert_eq!(leb(0x80), [0x80, 0x01]);
        assert_eq!(leb(300), [0xAC, 0x02]);
        assert_eq!(leb(u64::MAX).len(), 10);
    }

    #[test]
    fn zigzag_maps_sign_into_the_low_bit() {
        assert_eq!(zigzag32(0), [0x00]);
        assert_eq!(zigzag32(-1), [0x01]);
        assert_eq!(zigzag32(1), [0x02]);
        assert_eq!(zigzag32(-2), [0x03]);
        assert_eq!(zigzag32(i32::MAX), leb(0xFFFF_FFFE));
        assert_eq!(zigzag32(i32::MIN), leb(0xFFFF_FFFF));
    }

    #[test]
    fn packs_full_groups_seven_to_eight() {
        assert_eq!(packed(&[0xFF; 7]), [0x7F; 8]);
        assert_eq!(packed(&[0x00; 7]), [0x00; 8]);
        // 56 set bits interleave across the byte boundary.
        assert_eq!(
            packed(&[0x80, 0, 0, 0, 0, 0, 0]),
            [0x40, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn packs_partial_groups_left_aligned() {
        assert_eq!(packed(&[0x80]), [0x40, 0x00]);
        assert_eq!(packed(&[0x01]), [0x00, 0x40]);
        assert_eq!(packed(&[0xFF, 0xFF]), [0x7F, 0x7F, 0x60]);
        assert_eq!(packed(&[]), Vec::<u8>::new());
    }

    #[test]
    fn every_packed_byte_keeps_the_high_bit_clear() {
        let data: Vec<u8> = (0..=255).collect();
        assert!(packed(&data).iter().all(|&b| b < 0x80));
    }
}
