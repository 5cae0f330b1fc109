//! Polynomials with arbitrary-precision integer coefficients.
//!
//! Coefficients are stored lowest degree first, so `coefficients()[0]` is
//! the constant term, the value a threshold scheme hides.

use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use rand::RngCore;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polynomial {
    coeffs: Vec<BigInt>,
}

impl Polynomial {
    /// Initialize polynomial with given coefficients, trailing zeros dropped.
    pub fn new(coeffs: Vec<BigInt>) -> Self {
        let mut poly = Self { coeffs };
        poly.trim();
        poly
    }

    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Draw a polynomial of the given degree whose constant term is
    /// `constant` and whose other coefficients are uniform non-negative
    /// integers below `2^bits`.
    pub fn random<R: RngCore + ?Sized>(
        constant: BigInt,
        degree: usize,
        bits: u64,
        rng: &mut R,
    ) -> Self {
        let mut coeffs = Vec::with_capacity(degree + 1);
        coeffs.push(constant);
        coeffs.extend((0..degree).map(|_| random_below_pow2(bits, rng)));
        Self::new(coeffs)
    }

    fn trim(&mut self) {
        while self.coeffs.last().is_some_and(Zero::is_zero) {
            self.coeffs.pop();
        }
    }

    pub fn coefficients(&self) -> &[BigInt] {
        &self.coeffs
    }

    /// The value at `x = 0`.
    pub fn constant_term(&self) -> BigInt {
        self.coeffs.first().cloned().unwrap_or_default()
    }

    /// Degree of the polynomial; `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Evaluate at `x` with Horner's rule.
    pub fn evaluate(&self, x: &BigInt) -> BigInt {
        self.coeffs
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, coeff| acc * x + coeff)
    }

    pub fn batch_evaluate(&self, xs: &[BigInt]) -> Vec<BigInt> {
        xs.iter().map(|x| self.evaluate(x)).collect()
    }
}

impl From<Vec<BigInt>> for Polynomial {
    fn from(coeffs: Vec<BigInt>) -> Self {
        Self::new(coeffs)
    }
}

impl From<Vec<i64>> for Polynomial {
    fn from(coeffs: Vec<i64>) -> Self {
        Self::new(coeffs.into_iter().map(BigInt::from).collect())
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (power, coeff) in self.coeffs.iter().enumerate().rev() {
            if coeff.is_zero() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            match power {
                0 => write!(f, "{coeff}")?,
                1 => write!(f, "{coeff}x")?,
                _ => write!(f, "{coeff}x^{power}")?,
            }
        }
        Ok(())
    }
}

fn random_below_pow2<R: RngCore + ?Sized>(bits: u64, rng: &mut R) -> BigInt {
    let len = usize::try_from(bits.div_ceil(8)).unwrap_or(usize::MAX);
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    let excess = (len as u64 * 8).saturating_sub(bits);
    if let Some(top) = bytes.last_mut() {
        *top &= 0xffu8.checked_shr(excess as u32).unwrap_or(0);
    }
    BigInt::from(BigUint::from_bytes_le(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_polynomial_creation() {
        let p: Polynomial = poly![3, 0, 2, 0, 0];
        assert_eq!(
            p.coefficients(),
            &[BigInt::from(3), BigInt::from(0), BigInt::from(2)]
        );
        assert_eq!(p.degree(), Some(2));
        assert_eq!(p.constant_term(), BigInt::from(3));
    }

    #[test]
    fn zero_polynomial_has_no_degree() {
        let p = Polynomial::zero();
        assert!(p.is_zero());
        assert_eq!(p.degree(), None);
        assert_eq!(p.constant_term(), BigInt::zero());
        assert_eq!(p.evaluate(&BigInt::from(42)), BigInt::zero());
        assert_eq!(poly![0, 0], p);
    }

    #[test]
    fn test_horner_evaluation() {
        // 7 - 2x + 3x^2
        let p: Polynomial = poly![7, -2, 3];
        let values = p.batch_evaluate(&[
            BigInt::from(0),
            BigInt::from(2),
            BigInt::from(4),
            BigInt::from(5),
        ]);
        assert_eq!(
            values,
            vec![
                BigInt::from(7),
                BigInt::from(15),
                BigInt::from(47),
                BigInt::from(72)
            ]
        );
    }

    #[test]
    fn random_polynomial_keeps_constant_and_bounds() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let secret = BigInt::from(1234567);
        let p = Polynomial::random(secret.clone(), 4, 20, &mut rng);

        assert_eq!(p.constant_term(), secret);
        assert!(p.coefficients().len() <= 5);
        let bound = BigInt::from(1u32 << 20);
        for coeff in &p.coefficients()[1..] {
            assert!(*coeff >= BigInt::zero() && *coeff < bound);
        }
    }

    #[test]
    fn random_polynomial_is_deterministic_for_a_seed() {
        let draw = |seed| {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            Polynomial::random(BigInt::from(9), 3, 256, &mut rng)
        };
        assert_eq!(draw(1), draw(1));
        assert_ne!(draw(1), draw(2));
    }

    #[test]
    fn display_lists_highest_power_first() {
        let p: Polynomial = poly![7, 0, 3];
        assert_eq!(p.to_string(), "3x^2 + 7");
        assert_eq!(Polynomial::zero().to_string(), "0");
    }
}
