use num_bigint::BigInt;

use crate::error::ShamirResult;
use crate::point::Point;
use crate::record::EncodedShare;

/// Anything that can become a validated [`Point`].
///
/// Lets batch ingestion take decoded points, raw coordinate pairs, or
/// still-encoded shares from a record alike.
pub trait IntoPoint {
    fn into_point(self) -> ShamirResult<Point>;
}

impl IntoPoint for Point {
    fn into_point(self) -> ShamirResult<Point> {
        Ok(self)
    }
}

impl IntoPoint for (u64, BigInt) {
    fn into_point(self) -> ShamirResult<Point> {
        Point::new(self.0, self.1)
    }
}

impl IntoPoint for EncodedShare {
    fn into_point(self) -> ShamirResult<Point> {
        (&self).into_point()
    }
}

impl IntoPoint for &EncodedShare {
    fn into_point(self) -> ShamirResult<Point> {
        Point::decode_str(self.x, &self.base, &self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShamirError;

    #[test]
    fn coordinate_pairs_are_validated() {
        let point = (4u64, BigInt::from(9)).into_point().unwrap();
        assert_eq!(point.x(), 4);
        assert!(matches!(
            (0u64, BigInt::from(9)).into_point(),
            Err(ShamirError::InvalidX(0))
        ));
    }

    #[test]
    fn encoded_shares_are_decoded() {
        let share = EncodedShare::new(3, "2", "1100");
        let point = share.into_point().unwrap();
        assert_eq!(point.y(), &BigInt::from(12));
    }
}
