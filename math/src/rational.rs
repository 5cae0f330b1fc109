//! Exact fractions over arbitrary-precision integers.
//!
//! A [`Rational`] is always stored in lowest terms with a strictly positive
//! denominator, so structural equality is numeric equality.

use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::RationalError;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Build `numer / denom`, reduced. Fails on a zero denominator.
    pub fn new(
        numer: impl Into<BigInt>,
        denom: impl Into<BigInt>,
    ) -> Result<Self, RationalError> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(RationalError::ZeroDenominator);
        }
        Ok(Self::reduced(numer.into(), denom))
    }

    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self {
            numer: value.into(),
            denom: BigInt::one(),
        }
    }

    /// Normalise sign and divide out the gcd. `denom` must be non-zero.
    pub(crate) fn reduced(numer: BigInt, denom: BigInt) -> Self {
        let (numer, denom) = if denom.is_negative() {
            (-numer, -denom)
        } else {
            (numer, denom)
        };
        let gcd = numer.gcd(&denom);
        if gcd.is_one() {
            return Self { numer, denom };
        }
        Self {
            numer: numer / &gcd,
            denom: denom / gcd,
        }
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// The integer value, if the fraction reduces to one.
    pub fn to_integer(&self) -> Option<BigInt> {
        self.is_integer().then(|| self.numer.clone())
    }

    pub fn into_integer(self) -> Result<BigInt, Self> {
        if self.is_integer() {
            Ok(self.numer)
        } else {
            Err(self)
        }
    }

    /// Multiplicative inverse; `None` for zero.
    pub fn recip(&self) -> Option<Self> {
        if self.numer.is_zero() {
            return None;
        }
        Some(Self::reduced(self.denom.clone(), self.numer.clone()))
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numer, self.denom)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(BigInt::one())
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl Add<&Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        if self.denom == rhs.denom {
            return Rational::reduced(
                &self.numer + &rhs.numer,
                self.denom.clone(),
            );
        }
        Rational::reduced(
            &self.numer * &rhs.denom + &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        &self + &rhs
    }
}

impl AddAssign<&Rational> for Rational {
    fn add_assign(&mut self, rhs: &Rational) {
        *self = &*self + rhs;
    }
}

impl AddAssign for Rational {
    fn add_assign(&mut self, rhs: Rational) {
        *self += &rhs;
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl Sub<&Rational> for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        self + &(-rhs.clone())
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        &self - &rhs
    }
}

impl Mul<&Rational> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        Rational::reduced(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        &self * &rhs
    }
}

impl MulAssign<&Rational> for Rational {
    fn mul_assign(&mut self, rhs: &Rational) {
        *self = &*self * rhs;
    }
}

impl MulAssign for Rational {
    fn mul_assign(&mut self, rhs: Rational) {
        *self *= &rhs;
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, term| acc + term)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::one(), |acc, factor| acc * factor)
    }
}
