//! Lagrange interpolation with exact rational arithmetic.
//!
//! For points `(x_i, y_i)` the interpolant evaluated at `x` is
//!
//! ```text
//! P(x) = Σ_i y_i · Π_{j≠i} (x − x_j) / (x_i − x_j)
//! ```
//!
//! Each term keeps its numerator and denominator as separate big integers
//! and is reduced once, so the only division anywhere is the gcd
//! normalisation inside [`Rational`].

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::error::InterpolationError;
use crate::rational::Rational;

/// Lagrange basis coefficient `Π_{j≠i} (x − x_j) / (x_i − x_j)`.
///
/// Fails if any other abscissa equals `xs[i]`.
pub fn basis_coefficient(
    xs: &[BigInt],
    i: usize,
    x: &BigInt,
) -> Result<Rational, InterpolationError> {
    let xi = xs.get(i).ok_or(InterpolationError::NoPoints)?;
    let mut numer = BigInt::one();
    let mut denom = BigInt::one();

    for (j, xj) in xs.iter().enumerate() {
        if j == i {
            continue;
        }
        let gap = xi - xj;
        if gap.is_zero() {
            return Err(InterpolationError::DuplicateAbscissa(xi.to_string()));
        }
        numer *= x - xj;
        denom *= gap;
    }

    // `denom` is a product of non-zero gaps.
    Ok(Rational::reduced(numer, denom))
}

/// All basis coefficients for `xs`, evaluated at `x`.
pub fn basis_coefficients(
    xs: &[BigInt],
    x: &BigInt,
) -> Result<Vec<Rational>, InterpolationError> {
    if xs.is_empty() {
        return Err(InterpolationError::NoPoints);
    }
    (0..xs.len())
        .map(|i| basis_coefficient(xs, i, x))
        .collect()
}

/// Evaluate the unique polynomial of degree `< xs.len()` through
/// `(xs[i], ys[i])` at `x`.
pub fn interpolate_at(
    xs: &[BigInt],
    ys: &[BigInt],
    x: &BigInt,
) -> Result<Rational, InterpolationError> {
    interpolate_at_with(xs, ys, x, |_, _| {})
}

/// [`interpolate_at`], calling `on_term(i, weight)` with each basis
/// coefficient before its term is added.
pub fn interpolate_at_with<F>(
    xs: &[BigInt],
    ys: &[BigInt],
    x: &BigInt,
    mut on_term: F,
) -> Result<Rational, InterpolationError>
where
    F: FnMut(usize, &Rational),
{
    if xs.len() != ys.len() {
        return Err(InterpolationError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }

    let coefficients = basis_coefficients(xs, x)?;
    Ok(coefficients
        .iter()
        .zip(ys)
        .enumerate()
        .map(|(i, (coefficient, y))| {
            on_term(i, coefficient);
            coefficient * &Rational::from(y.clone())
        })
        .sum())
}

/// Lagrange interpolate over `(xs, ys)` and return `P(0)`, the constant term.
pub fn interpolate_at_zero(
    xs: &[BigInt],
    ys: &[BigInt],
) -> Result<Rational, InterpolationError> {
    interpolate_at(xs, ys, &BigInt::zero())
}
