//! A codec for JSON syntax trees with two encoders.
//!
//! The crate turns raw byte buffers into [`Value`] trees and back:
//!
//! - [`decode`] parses a contiguous buffer into a tree or a structured
//!   [`SyntaxError`], preserving member order and duplicate keys;
//! - [`encode`] renders the tree as compact UTF-8 JSON text;
//! - [`encode_smile_simple`] renders the tree in the Smile binary format
//!   (plain framing, no back-references or shared tables).
//!
//! Numbers are kept in decimal scientific form ([`Scientific`]) rather
//! than floating point, so values like `55e2` survive a round trip
//! exactly.
//!
//! ```
//! use jsonsmile::{Value, decode, encode};
//!
//! let v = decode(br#" {"label": "x", "points": [1, 2, 3]} "#).unwrap();
//! assert_eq!(encode(&v), br#"{"label":"x","points":[1,2,3]}"#);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod encode;
mod number;
mod parser;
mod smile;
mod value;

#[cfg(test)]
mod tests;

pub use encode::encode;
pub use number::{Parts, Scientific};
pub use parser::{DecodeOptions, SyntaxError, decode, decode_with_options};
pub use smile::{EncodeError, encode_smile_simple};
pub use value::{Member, Value};
