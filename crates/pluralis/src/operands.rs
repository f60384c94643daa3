//! Exact CLDR plural operands.
//!
//! CLDR plural rules are written against operands taken from the *decimal*
//! representation of a number, not from its binary floating-point value:
//!
//! | Operand | Meaning                                                  |
//! |---------|----------------------------------------------------------|
//! | `i`     | integer digits                                           |
//! | `v`     | number of visible fraction digits, with trailing zeros   |
//! | `w`     | number of visible fraction digits, without trailing zeros |
//! | `f`     | visible fraction digits, with trailing zeros             |
//! | `t`     | visible fraction digits, without trailing zeros          |
//!
//! "2.10" and "2.1" are the same number but have different operands
//! (`v = 2, f = 10` versus `v = 1, f = 1`), and some locales tell them apart.
//! Operands are therefore parsed from text, and floats are first rendered
//! with their shortest round-trip representation.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use winnow::ascii::digit1;
use winnow::combinator::{alt, opt, preceded};
use winnow::prelude::*;

use crate::error::OperandsError;

/// Largest number of fraction digits that still fits `f` in a `u64`.
pub const MAX_FRACTION_DIGITS: usize = 18;

/// The CLDR operands of a non-negative decimal quantity.
///
/// The sign of the input is discarded: CLDR defines every operand over the
/// absolute value.
///
/// # Example
///
/// ```
/// use pluralis::PluralOperands;
///
/// let operands: PluralOperands = "2.10".parse().unwrap();
/// assert_eq!(operands.i, 2);
/// assert_eq!(operands.v, 2);
/// assert_eq!(operands.f, 10);
/// assert_eq!(operands.t, 1);
///
/// let operands = PluralOperands::try_from(2.1).unwrap();
/// assert_eq!((operands.v, operands.f), (1, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct PluralOperands {
    pub i: u64,
    pub v: usize,
    pub w: usize,
    pub f: u64,
    pub t: u64,
}

impl PluralOperands {
    /// Operands of a whole number.
    pub const fn from_integer(n: u64) -> Self {
        PluralOperands {
            i: n,
            v: 0,
            w: 0,
            f: 0,
            t: 0,
        }
    }

    /// True when the quantity has no non-zero fraction digits.
    ///
    /// "3.00" is integer-valued even though it has visible fraction digits.
    pub fn is_integer(&self) -> bool {
        self.f == 0
    }

    /// The numeric value `n` when it is a whole number.
    pub fn integer_value(&self) -> Option<u64> {
        self.is_integer().then_some(self.i)
    }

    fn from_digits(input: &str, integer: &str, fraction: Option<&str>) -> Result<Self, OperandsError> {
        let i = integer
            .parse::<u64>()
            .map_err(|_| OperandsError::IntegerOverflow {
                input: input.to_string(),
            })?;
        let Some(fraction) = fraction else {
            return Ok(Self::from_integer(i));
        };
        if fraction.len() > MAX_FRACTION_DIGITS {
            return Err(OperandsError::TooManyFractionDigits {
                input: input.to_string(),
                digits: fraction.len(),
            });
        }

        let trimmed = fraction.trim_end_matches('0');
        Ok(PluralOperands {
            i,
            v: fraction.len(),
            w: trimmed.len(),
            f: parse_fraction(fraction),
            t: parse_fraction(trimmed),
        })
    }

    fn from_float_repr(value: f64, repr: &str) -> Result<Self, OperandsError> {
        if !value.is_finite() {
            return Err(OperandsError::NotFinite { value });
        }
        repr.parse()
    }
}

/// Parses at most [`MAX_FRACTION_DIGITS`] ASCII digits.
fn parse_fraction(digits: &str) -> u64 {
    digits
        .bytes()
        .fold(0, |acc, digit| acc * 10 + u64::from(digit - b'0'))
}

/// Parses an optionally signed decimal: `[-+]?[0-9]+(\.[0-9]+)?`.
fn decimal<'i>(input: &mut &'i str) -> ModalResult<(&'i str, Option<&'i str>)> {
    preceded(
        opt(alt(('-', '+'))),
        (digit1, opt(preceded('.', digit1))),
    )
    .parse_next(input)
}

impl FromStr for PluralOperands {
    type Err = OperandsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut remaining = trimmed;
        match decimal(&mut remaining) {
            Ok((integer, fraction)) if remaining.is_empty() => {
                Self::from_digits(trimmed, integer, fraction)
            }
            Ok(_) => Err(OperandsError::Syntax {
                input: s.to_string(),
                message: format!(
                    "unexpected character '{}'",
                    remaining.chars().next().unwrap_or('?')
                ),
            }),
            Err(e) => Err(OperandsError::Syntax {
                input: s.to_string(),
                message: format!("expected a decimal number: {e}"),
            }),
        }
    }
}

impl TryFrom<&str> for PluralOperands {
    type Error = OperandsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<f64> for PluralOperands {
    type Error = OperandsError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_float_repr(value, &value.abs().to_string())
    }
}

impl TryFrom<f32> for PluralOperands {
    type Error = OperandsError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::from_float_repr(f64::from(value), &value.abs().to_string())
    }
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for PluralOperands {
                fn from(value: $ty) -> Self {
                    Self::from_integer(value as u64)
                }
            }
        )+
    };
}

macro_rules! impl_from_signed {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for PluralOperands {
                fn from(value: $ty) -> Self {
                    Self::from_integer(value.unsigned_abs() as u64)
                }
            }
        )+
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

impl fmt::Display for PluralOperands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.v == 0 {
            write!(f, "{}", self.i)
        } else {
            write!(f, "{}.{:0width$}", self.i, self.f, width = self.v)
        }
    }
}
