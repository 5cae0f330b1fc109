use math::radix::{self, Radix};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::error::{ShamirError, ShamirResult};

/// A sample `(x, y)` of the hidden polynomial.
///
/// `x` is strictly positive: `x = 0` is where the secret itself lives.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    x: u64,
    y: BigInt,
}

impl Point {
    pub fn new(x: u64, y: BigInt) -> ShamirResult<Self> {
        if x == 0 {
            return Err(ShamirError::InvalidX(x));
        }
        Ok(Point { x, y })
    }

    /// Build a point whose y-value is `digits` written in `radix`.
    pub fn decode(x: u64, radix: Radix, digits: &str) -> ShamirResult<Self> {
        let y = radix::decode(digits, radix)
            .map_err(|source| ShamirError::decoding(x, source))?;
        Point::new(x, y)
    }

    /// Like [`Point::decode`], with the radix as a decimal string.
    pub fn decode_str(x: u64, radix: &str, digits: &str) -> ShamirResult<Self> {
        let radix = radix
            .parse::<Radix>()
            .map_err(|source| ShamirError::decoding(x, source))?;
        Point::decode(x, radix, digits)
    }

    #[inline]
    pub fn x(&self) -> u64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> &BigInt {
        &self.y
    }

    pub fn into_parts(self) -> (u64, BigInt) {
        (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_point_creation() {
        let point = Point::new(2, BigInt::from(73)).unwrap();
        assert_eq!(point.x(), 2);
        assert_eq!(point.y(), &BigInt::from(73));
        assert_eq!(point.into_parts(), (2, BigInt::from(73)));
    }

    #[test]
    fn test_invalid_x() {
        assert!(matches!(
            Point::new(0, BigInt::from(1)),
            Err(ShamirError::InvalidX(0))
        ));
    }

    #[test]
    fn decodes_y_from_its_radix() {
        let point = Point::decode_str(2, "8", "111").unwrap();
        assert_eq!(point.y(), &BigInt::from(73));

        let point = Point::decode(1, Radix::HEXADECIMAL, "4").unwrap();
        assert_eq!(point.y(), &BigInt::from(4));
    }

    #[test]
    fn bad_digits_carry_the_share_index() {
        let err = Point::decode_str(5, "16", "G").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDigit);
        assert!(matches!(err, ShamirError::InvalidDigit { x: 5, .. }));
    }

    #[test]
    fn bad_radix_is_not_a_digit_error() {
        let err = Point::decode_str(5, "37", "1").unwrap_err();
        assert!(matches!(err, ShamirError::InvalidRadix { x: 5, .. }));

        let err = Point::decode_str(5, "hex", "1").unwrap_err();
        assert!(matches!(err, ShamirError::InvalidRadix { x: 5, .. }));
    }

    #[test]
    fn test_point_debug_representation() {
        let point = Point::new(1, BigInt::from(4)).unwrap();
        let debug_str = format!("{:?}", point);
        assert!(debug_str.contains("Point"));
        assert!(debug_str.contains("x: 1"));
    }
}
