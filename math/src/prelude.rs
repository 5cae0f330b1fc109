pub use crate::{poly, ratio};
pub use crate::{
    lagrange::{interpolate_at, interpolate_at_zero},
    poly::Polynomial,
    radix::{decode, encode, Radix},
    rational::Rational,
};
pub use num_bigint::BigInt;
