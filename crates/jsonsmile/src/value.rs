//! The JSON syntax tree.
//!
//! [`Value`] is a seven-variant sum covering every production of RFC 7159.
//! The two boolean literals and `null` are their own unit variants so that
//! telling them apart is a single tag test, and objects are ordered member
//! lists rather than maps: input order is preserved and duplicate keys
//! survive a decode/encode round trip.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::number::Scientific;

/// A single key/value pair in an object body.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    /// The member key. Always valid UTF-8; never normalized or deduplicated.
    pub key: String,
    /// The member value.
    pub value: Value,
}

impl Member {
    /// Pairs a key with a value.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A JSON value as defined by [RFC 7159].
///
/// Trees are immutable once built: the decoder constructs them bottom-up
/// and the encoders only read them. A container exclusively owns its
/// children.
///
/// ```
/// use jsonsmile::{Member, Value};
///
/// let v = Value::Object(vec![Member::new("key", "value")]);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
///
/// [RFC 7159]: https://datatracker.ietf.org/doc/html/rfc7159
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// The literal `null`.
    Null,
    /// The literal `true`.
    True,
    /// The literal `false`.
    False,
    /// A string; always valid UTF-8 with no unpaired surrogates.
    String(String),
    /// A number in decimal scientific form.
    Number(Scientific),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// An ordered sequence of members; duplicate keys are preserved.
    Object(Vec<Member>),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`True`] or [`False`].
    ///
    /// [`True`]: Value::True
    /// [`False`]: Value::False
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::True | Self::False)
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The string payload, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The number payload, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<&Scientific> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// The elements, if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The members, if this is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&[Member]> {
        match self {
            Self::Object(members) => Some(members),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        if v { Self::True } else { Self::False }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(Scientific::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(Scientific::from(v))
    }
}

impl From<Scientific> for Value {
    fn from(v: Scientific) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Vec<Member>> for Value {
    fn from(v: Vec<Member>) -> Self {
        Self::Object(v)
    }
}

/// Renders the compact JSON encoding of the value.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = crate::encode(self);
        let text = core::str::from_utf8(&bytes).map_err(|_| fmt::Error)?;
        f.write_str(text)
    }
}
