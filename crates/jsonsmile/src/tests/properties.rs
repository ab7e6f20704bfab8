use alloc::string::String;
use alloc::{vec, vec::Vec};

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::{Member, Value, decode, encode};

/// Round trip for arrays of printable-ASCII strings.
#[test]
fn ascii_string_arrays_round_trip() {
    fn prop(strings: Vec<String>) -> bool {
        let items: Vec<Value> = strings
            .iter()
            .map(|s| {
                let ascii: String = s
                    .chars()
                    .filter(|c| c.is_ascii_graphic() || *c == ' ')
                    .collect();
                Value::String(ascii)
            })
            .collect();
        let v = Value::Array(items);
        let encoded = encode(&v);
        decode(&encoded).as_ref() == Ok(&v)
    }
    QuickCheck::new().quickcheck(prop as fn(Vec<String>) -> bool);
}

/// Round trip for arrays of arbitrary Unicode strings. Lone surrogates
/// cannot occur in `String`, and control characters are escaped on the way
/// out, so every generated payload must survive.
#[test]
fn unicode_string_arrays_round_trip() {
    fn prop(strings: Vec<String>) -> bool {
        let v = Value::Array(strings.into_iter().map(Value::String).collect());
        let encoded = encode(&v);
        decode(&encoded).as_ref() == Ok(&v)
    }
    QuickCheck::new().quickcheck(prop as fn(Vec<String>) -> bool);
}

#[quickcheck]
fn integer_arrays_round_trip(values: Vec<i64>) -> bool {
    let v = Value::Array(values.into_iter().map(Value::from).collect());
    let encoded = encode(&v);
    decode(&encoded).as_ref() == Ok(&v)
}

#[quickcheck]
fn objects_keep_arbitrary_keys(keys: Vec<String>) -> bool {
    let v = Value::Object(
        keys.iter()
            .map(|k| Member::new(k.clone(), Value::Null))
            .collect(),
    );
    let encoded = encode(&v);
    match decode(&encoded) {
        Ok(Value::Object(members)) => {
            members.len() == keys.len()
                && members.iter().zip(&keys).all(|(m, k)| m.key == *k)
        }
        _ => false,
    }
}

#[quickcheck]
fn padding_never_changes_the_tree(left: u8, right: u8) -> bool {
    let doc = br#"{"a": [1, "two", null]}"#;
    let mut padded = vec![b' '; usize::from(left % 8)];
    padded.extend_from_slice(doc);
    padded.extend(core::iter::repeat_n(b'\t', usize::from(right % 8)));
    decode(&padded) == decode(doc)
}

#[quickcheck]
fn booleans_and_nulls_round_trip(bits: Vec<Option<bool>>) -> bool {
    let v = Value::Array(
        bits.iter()
            .map(|b| b.map_or(Value::Null, Value::from))
            .collect(),
    );
    let encoded = encode(&v);
    decode(&encoded).as_ref() == Ok(&v)
}
