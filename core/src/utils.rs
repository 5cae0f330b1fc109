use math::lagrange::interpolate_at_with;
use num_bigint::BigInt;
use num_traits::Zero;
use tracing::trace;

use crate::error::{ShamirError, ShamirResult};
use crate::point::Point;

/// Lagrange-interpolate through `points` and return the constant term.
///
/// Every weight `Π_{j≠i} −x_j / (x_i − x_j)` is an exact fraction; the sum
/// must come out as an integer or the call fails with `NonIntegerResult`.
pub fn interpolate_secret(points: &[&Point]) -> ShamirResult<BigInt> {
    let (xs, ys): (Vec<BigInt>, Vec<BigInt>) = points
        .iter()
        .map(|point| (BigInt::from(point.x()), point.y().clone()))
        .unzip();
    let total = interpolate_at_with(&xs, &ys, &BigInt::zero(), |i, weight| {
        trace!(x = points[i].x(), weight = %weight, "lagrange term");
    })?;

    total.into_integer().map_err(|fraction| {
        let (numerator, denominator) = fraction.into_parts();
        ShamirError::NonIntegerResult {
            numerator,
            denominator,
        }
    })
}
