//! Positional numerals in bases 2 through 36.
//!
//! Digits are `0-9` followed by the letters `a-z` (case-insensitive), so a
//! radix of 36 uses the full alphanumeric alphabet. Values are carried as
//! arbitrary-precision integers; nothing here ever goes through a float or a
//! fixed-width machine word.

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::RadixError;

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;
/// Largest supported radix (`0-9` plus `a-z`).
pub const MAX_RADIX: u32 = 36;

/// A validated numeric base in `MIN_RADIX..=MAX_RADIX`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct Radix(u32);

impl Radix {
    pub const BINARY: Radix = Radix(2);
    pub const OCTAL: Radix = Radix(8);
    pub const DECIMAL: Radix = Radix(10);
    pub const HEXADECIMAL: Radix = Radix(16);

    pub const fn new(value: u32) -> Result<Self, RadixError> {
        if value < MIN_RADIX || value > MAX_RADIX {
            return Err(RadixError::UnsupportedRadix(value));
        }
        Ok(Radix(value))
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Value of `digit` in this radix, if it is a valid digit at all.
    #[inline]
    pub fn digit_value(self, digit: char) -> Option<u32> {
        digit.to_digit(self.0)
    }
}

impl TryFrom<u32> for Radix {
    type Error = RadixError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Radix::new(value)
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.0
    }
}

impl FromStr for Radix {
    type Err = RadixError;

    /// Parse a decimal radix such as `"16"`. Surrounding whitespace is
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|_| RadixError::Unparsable(s.to_string()))?;
        Radix::new(value)
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decode `digits` written in `radix` into an exact integer.
///
/// Digits are consumed from the least significant (rightmost) position,
/// accumulating `digit * radix^position` with a running power of the radix.
/// Any character outside the alphabet, or whose value is not below the radix,
/// is rejected with [`RadixError::InvalidDigit`]; `position` in the error is
/// the zero-based character offset from the left.
pub fn decode(digits: &str, radix: Radix) -> Result<BigInt, RadixError> {
    if digits.is_empty() {
        return Err(RadixError::Empty);
    }

    let width = digits.chars().count();
    let base = BigUint::from(radix.get());
    let mut result = BigUint::zero();
    let mut power = BigUint::one();

    for (offset, digit) in digits.chars().rev().enumerate() {
        let value =
            radix
                .digit_value(digit)
                .ok_or(RadixError::InvalidDigit {
                    digit,
                    position: width - 1 - offset,
                    radix: radix.get(),
                })?;
        if value != 0 {
            result += &power * value;
        }
        power *= &base;
    }

    Ok(BigInt::from_biguint(Sign::Plus, result))
}

/// Decode with the radix given as a decimal string, the way share records
/// carry it.
pub fn decode_str(digits: &str, radix: &str) -> Result<BigInt, RadixError> {
    decode(digits, radix.parse()?)
}

/// Render a non-negative integer in `radix` using lowercase digits.
pub fn encode(value: &BigInt, radix: Radix) -> Result<String, RadixError> {
    match value.to_biguint() {
        Some(magnitude) => Ok(magnitude.to_str_radix(radix.get())),
        None => Err(RadixError::Negative(value.to_string())),
    }
}
