//! Shared macros for constructing core math primitives.
//!
//! These macros delegate to the types they create, which keeps call sites
//! short in tests and examples.

/// Construct a [`Polynomial`](crate::poly::Polynomial) from integer
/// coefficients, lowest degree first.
///
/// ```
/// use math::prelude::*;
///
/// let poly = poly![7, -2, 3];
/// assert_eq!(poly.evaluate(&BigInt::from(2)), BigInt::from(15));
/// ```
#[macro_export]
macro_rules! poly {
    () => {{
        $crate::poly::Polynomial::zero()
    }};
    ($($coeff:expr),+ $(,)?) => {{
        $crate::poly::Polynomial::new(vec![
            $($crate::num_bigint::BigInt::from($coeff)),+
        ])
    }};
}

/// Construct a [`Rational`](crate::rational::Rational).
///
/// `ratio!(n)` is the integer `n`; `ratio!(n, d)` is `n / d` and panics on a
/// zero denominator, so keep it to literals.
///
/// ```
/// use math::prelude::*;
///
/// assert_eq!(ratio!(2, 4), ratio!(1, 2));
/// assert!(ratio!(6, 3).is_integer());
/// ```
#[macro_export]
macro_rules! ratio {
    ($numer:expr) => {
        $crate::rational::Rational::from_integer(
            $crate::num_bigint::BigInt::from($numer),
        )
    };
    ($numer:expr, $denom:expr) => {
        $crate::rational::Rational::new(
            $crate::num_bigint::BigInt::from($numer),
            $crate::num_bigint::BigInt::from($denom),
        )
        .expect("ratio! requires a non-zero denominator")
    };
}
