//! The decimal number representation used by [`Value::Number`].
//!
//! [`Value::Number`]: crate::Value::Number

use core::fmt;

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use crate::parser::SyntaxError;
use crate::parser::cursor::ByteCursor;

/// A decimal number stored as coefficient × 10^exponent.
///
/// The coefficient lives in an `i64` until a literal overflows it, at which
/// point it is promoted to an arbitrary-precision integer. The
/// representation is not normalized: `5500` and `55e2` compare unequal even
/// though they denote the same number. Exact integer extraction is provided
/// by [`to_i32`] and [`to_i64`].
///
/// ```
/// use jsonsmile::Scientific;
///
/// let n = Scientific::from_int(42);
/// assert_eq!(n.to_i32(), Some(42));
/// assert_eq!(n.to_string(), "42");
/// ```
///
/// [`to_i32`]: Scientific::to_i32
/// [`to_i64`]: Scientific::to_i64
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scientific {
    coefficient: Coefficient,
    exponent: i64,
}

/// Coefficient storage. `Big` is canonical: it never holds a value that
/// would fit in the `Small` word, so derived equality is value equality.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
enum Coefficient {
    Small(i64),
    Big(BigInt),
}

/// Borrowed view of a [`Scientific`]'s components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Parts<'a> {
    /// The coefficient fits in a machine word.
    Small {
        /// Signed coefficient.
        coefficient: i64,
        /// Power of ten.
        exponent: i64,
    },
    /// The coefficient needs arbitrary precision.
    Big {
        /// Signed coefficient.
        coefficient: &'a BigInt,
        /// Power of ten.
        exponent: i64,
    },
}

impl Scientific {
    /// A whole number with exponent zero.
    #[must_use]
    pub fn from_int(value: i64) -> Self {
        Self {
            coefficient: Coefficient::Small(value),
            exponent: 0,
        }
    }

    /// The value as an `i32`, if exactly representable.
    #[must_use]
    pub fn to_i32(&self) -> Option<i32> {
        i32::try_from(self.to_i64()?).ok()
    }

    /// The value as an `i64`, if exactly representable. Positive exponents
    /// are multiplied out; negative exponents require exact division.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        match &self.coefficient {
            Coefficient::Small(c) => small_to_i64(*c, self.exponent),
            Coefficient::Big(c) => big_to_i64(c, self.exponent),
        }
    }

    /// Destructures into a machine-word or arbitrary-precision view.
    #[must_use]
    pub fn parts(&self) -> Parts<'_> {
        match &self.coefficient {
            Coefficient::Small(coefficient) => Parts::Small {
                coefficient: *coefficient,
                exponent: self.exponent,
            },
            Coefficient::Big(coefficient) => Parts::Big {
                coefficient,
                exponent: self.exponent,
            },
        }
    }

    /// Parses the number after a consumed `-`, applying the same
    /// leading-zero rule as the positive forms.
    pub(crate) fn parse_negated(cur: &mut ByteCursor<'_>) -> Result<Self, SyntaxError> {
        match cur.any(SyntaxError::InvalidNumber)? {
            b'0' => {
                if cur.peek().is_some_and(|b| b.is_ascii_digit()) {
                    return Err(SyntaxError::LeadingZero);
                }
                Self::parse_trailing(cur, 0, true)
            }
            d @ b'1'..=b'9' => Self::parse_trailing(cur, d - b'0', true),
            _ => Err(SyntaxError::InvalidNumber),
        }
    }

    /// Parses the remainder of a number whose first digit `seed` the caller
    /// already consumed: more integer digits, an optional fraction, an
    /// optional exponent.
    pub(crate) fn parse_trailing(
        cur: &mut ByteCursor<'_>,
        seed: u8,
        negative: bool,
    ) -> Result<Self, SyntaxError> {
        let mut accum = Accum::new(seed);
        while let Some(d) = cur.peek() {
            if !d.is_ascii_digit() {
                break;
            }
            cur.advance();
            accum.push(d - b'0');
        }

        let mut fraction_digits: i64 = 0;
        if cur.peek() == Some(b'.') {
            cur.advance();
            let mut any_digit = false;
            while let Some(d) = cur.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                cur.advance();
                accum.push(d - b'0');
                fraction_digits += 1;
                any_digit = true;
            }
            if !any_digit {
                return Err(SyntaxError::InvalidNumber);
            }
        }

        let mut exponent: i64 = 0;
        if matches!(cur.peek(), Some(b'e' | b'E')) {
            cur.advance();
            let negative_exp = match cur.peek() {
                Some(b'-') => {
                    cur.advance();
                    true
                }
                Some(b'+') => {
                    cur.advance();
                    false
                }
                _ => false,
            };
            let mut any_digit = false;
            while let Some(d) = cur.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                cur.advance();
                exponent = exponent
                    .saturating_mul(10)
                    .saturating_add(i64::from(d - b'0'));
                any_digit = true;
            }
            if !any_digit {
                return Err(SyntaxError::InvalidNumber);
            }
            if negative_exp {
                exponent = -exponent;
            }
        }

        Ok(Self {
            coefficient: accum.finish(negative),
            exponent: exponent.saturating_sub(fraction_digits),
        })
    }
}

impl From<i32> for Scientific {
    fn from(value: i32) -> Self {
        Self::from_int(i64::from(value))
    }
}

impl From<i64> for Scientific {
    fn from(value: i64) -> Self {
        Self::from_int(value)
    }
}

impl fmt::Display for Scientific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coefficient {
            Coefficient::Small(c) => write!(f, "{c}")?,
            Coefficient::Big(c) => write!(f, "{c}")?,
        }
        if self.exponent != 0 {
            write!(f, "e{}", self.exponent)?;
        }
        Ok(())
    }
}

/// Digit accumulator: a machine word until a push overflows it.
enum Accum {
    Small(i64),
    Big(BigInt),
}

impl Accum {
    fn new(seed: u8) -> Self {
        Self::Small(i64::from(seed))
    }

    fn push(&mut self, digit: u8) {
        match self {
            Self::Small(v) => {
                match v
                    .checked_mul(10)
                    .and_then(|t| t.checked_add(i64::from(digit)))
                {
                    Some(next) => *v = next,
                    None => {
                        let mut big = BigInt::from(*v);
                        big *= 10u32;
                        big += u32::from(digit);
                        *self = Self::Big(big);
                    }
                }
            }
            Self::Big(b) => {
                *b *= 10u32;
                *b += u32::from(digit);
            }
        }
    }

    fn finish(self, negative: bool) -> Coefficient {
        match self {
            Self::Small(v) => Coefficient::Small(if negative { -v } else { v }),
            Self::Big(mut b) => {
                if negative {
                    b = -b;
                }
                // Negation can land back on the word range (the magnitude of
                // i64::MIN overflows during accumulation).
                match b.to_i64() {
                    Some(v) => Coefficient::Small(v),
                    None => Coefficient::Big(b),
                }
            }
        }
    }
}

fn small_to_i64(c: i64, exponent: i64) -> Option<i64> {
    if c == 0 {
        return Some(0);
    }
    if exponent == 0 {
        Some(c)
    } else if exponent > 0 {
        // 10^19 already exceeds the i64 range for any nonzero coefficient.
        if exponent > 18 {
            return None;
        }
        let mut v = c;
        for _ in 0..exponent {
            v = v.checked_mul(10)?;
        }
        Some(v)
    } else {
        let k = exponent.unsigned_abs();
        if k > 18 {
            return None;
        }
        let pow = 10i64.pow(u32::try_from(k).ok()?);
        if c % pow == 0 { Some(c / pow) } else { None }
    }
}

fn big_to_i64(c: &BigInt, exponent: i64) -> Option<i64> {
    // A canonical big coefficient is outside the i64 range, so only a
    // negative exponent can shrink the value back onto it.
    if exponent >= 0 {
        return None;
    }
    let k = exponent.unsigned_abs();
    if k >= c.bits() {
        // 10^k > 2^bits > |c|: the quotient is a pure fraction.
        return None;
    }
    let pow = num_traits::pow(BigInt::from(10u8), usize::try_from(k).ok()?);
    if (c % &pow).is_zero() {
        (c / &pow).to_i64()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    fn parse(text: &str) -> Result<Scientific, SyntaxError> {
        let bytes = text.as_bytes();
        let mut cur = ByteCursor::new(bytes);
        let n = match cur.any(SyntaxError::InvalidNumber)? {
            b'-' => Scientific::parse_negated(&mut cur),
            d @ b'0'..=b'9' => Scientific::parse_trailing(&mut cur, d - b'0', false),
            _ => Err(SyntaxError::InvalidNumber),
        }?;
        assert_eq!(cur.peek(), None, "number test input fully consumed");
        Ok(n)
    }

    #[test]
    fn parses_integers() {
        assert_eq!(parse("0"), Ok(Scientific::from_int(0)));
        assert_eq!(parse("7"), Ok(Scientific::from_int(7)));
        assert_eq!(parse("123"), Ok(Scientific::from_int(123)));
        assert_eq!(parse("-123"), Ok(Scientific::from_int(-123)));
        assert_eq!(parse("-0"), Ok(Scientific::from_int(0)));
    }

    #[test]
    fn parses_fractions_and_exponents() {
        let n = parse("12.5").unwrap();
        assert_eq!(n.parts(), Parts::Small { coefficient: 125, exponent: -1 });

        let n = parse("55e2").unwrap();
        assert_eq!(n.parts(), Parts::Small { coefficient: 55, exponent: 2 });
        assert_eq!(n.to_i32(), Some(5500));

        let n = parse("-1.25e+3").unwrap();
        assert_eq!(n.parts(), Parts::Small { coefficient: -125, exponent: 1 });
        assert_eq!(n.to_i64(), Some(-1250));

        let n = parse("10e-1").unwrap();
        assert_eq!(n.to_i64(), Some(1));
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert_eq!(parse("-"), Err(SyntaxError::InvalidNumber));
        assert_eq!(parse("1."), Err(SyntaxError::InvalidNumber));
        assert_eq!(parse("1e"), Err(SyntaxError::InvalidNumber));
        assert_eq!(parse("1e+"), Err(SyntaxError::InvalidNumber));
        assert_eq!(parse("-x"), Err(SyntaxError::InvalidNumber));
        assert_eq!(parse("-01"), Err(SyntaxError::LeadingZero));
    }

    #[test]
    fn promotes_overflowing_coefficients() {
        let n = parse("123456789012345678901234567890").unwrap();
        assert!(matches!(n.parts(), Parts::Big { .. }));
        assert_eq!(n.to_i64(), None);
        assert_eq!(n.to_string(), "123456789012345678901234567890");
    }

    #[test]
    fn word_range_edges_stay_small() {
        let n = parse("9223372036854775807").unwrap();
        assert_eq!(n.to_i64(), Some(i64::MAX));

        let n = parse("-9223372036854775808").unwrap();
        assert_eq!(n.to_i64(), Some(i64::MIN));
        assert!(matches!(n.parts(), Parts::Small { .. }));
    }

    #[test]
    fn big_coefficient_with_negative_exponent_divides_exactly() {
        // 10^30 scaled down to 10^5.
        let n = parse("1000000000000000000000000000000e-25").unwrap();
        assert_eq!(n.to_i64(), Some(100_000));
        assert_eq!(n.to_i32(), Some(100_000));

        let n = parse("1000000000000000000000000000001e-25").unwrap();
        assert_eq!(n.to_i64(), None);
    }

    #[test]
    fn exact_extraction_respects_range() {
        assert_eq!(parse("2147483647").unwrap().to_i32(), Some(i32::MAX));
        assert_eq!(parse("2147483648").unwrap().to_i32(), None);
        assert_eq!(parse("2147483648").unwrap().to_i64(), Some(2_147_483_648));
        assert_eq!(parse("1e19").unwrap().to_i64(), None);
        assert_eq!(parse("5e-1").unwrap().to_i64(), None);
    }

    #[test]
    fn displays_reparseable_text() {
        for text in ["0", "123", "-123", "55e2", "125e-1", "-9e-3"] {
            let n = parse(text).unwrap();
            assert_eq!(parse(&n.to_string()), Ok(n));
        }
    }
}
