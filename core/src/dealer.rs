//! Splitting a secret into radix-encoded shares.
//!
//! The dealer draws a random polynomial of degree `k - 1` with the secret as
//! its constant term and evaluates it at `x = 1..=n`. Coefficients are
//! non-negative, so a non-negative secret always yields non-negative shares
//! that can be written as digit strings.

use math::poly::Polynomial;
use math::radix::{self, Radix};
use num_bigint::BigInt;
use rand::RngCore;
use tracing::debug;

use crate::error::{ShamirError, ShamirResult};
use crate::params::{
    validate_threshold_config, Threshold, DEFAULT_COEFFICIENT_BITS,
    MAX_COEFFICIENT_BITS,
};
use crate::point::Point;
use crate::record::{EncodedShare, ShareRecord};

#[derive(Clone, Debug)]
pub struct Dealer {
    threshold: Threshold,
    shares: usize,
    coefficient_bits: u64,
}

impl Dealer {
    /// A `threshold`-of-`shares` dealer.
    pub fn new(threshold: usize, shares: usize) -> ShamirResult<Self> {
        let k = Threshold::new(threshold)?;
        if !validate_threshold_config(threshold, shares) {
            return Err(ShamirError::ThresholdExceedsShares {
                threshold,
                shares,
            });
        }
        Ok(Self {
            threshold: k,
            shares,
            coefficient_bits: DEFAULT_COEFFICIENT_BITS,
        })
    }

    /// Width of the random non-constant coefficients, at most
    /// [`MAX_COEFFICIENT_BITS`].
    pub fn with_coefficient_bits(mut self, bits: u64) -> ShamirResult<Self> {
        if bits > MAX_COEFFICIENT_BITS {
            return Err(ShamirError::CoefficientBitsTooLarge {
                bits,
                max: MAX_COEFFICIENT_BITS,
            });
        }
        self.coefficient_bits = bits;
        Ok(self)
    }

    pub fn threshold(&self) -> usize {
        self.threshold.get()
    }

    pub fn shares(&self) -> usize {
        self.shares
    }

    /// Evaluate a fresh random polynomial hiding `secret` at `x = 1..=n`.
    pub fn split<R: RngCore + ?Sized>(
        &self,
        secret: &BigInt,
        rng: &mut R,
    ) -> ShamirResult<Vec<Point>> {
        let poly = Polynomial::random(
            secret.clone(),
            self.threshold.degree(),
            self.coefficient_bits,
            rng,
        );
        debug!(
            threshold = self.threshold.get(),
            shares = self.shares,
            degree = ?poly.degree(),
            "split secret"
        );
        self.evaluate(&poly)
    }

    /// Sample an existing polynomial at `x = 1..=n`.
    pub fn evaluate(&self, poly: &Polynomial) -> ShamirResult<Vec<Point>> {
        (1..=self.shares as u64)
            .map(|x| Point::new(x, poly.evaluate(&BigInt::from(x))))
            .collect()
    }

    /// Write `points` as a share record, cycling through `radices` for the
    /// y-values. An empty `radices` writes everything in decimal.
    pub fn encode_record(
        &self,
        points: &[Point],
        radices: &[Radix],
    ) -> ShamirResult<ShareRecord> {
        let fallback = [Radix::DECIMAL];
        let radices = if radices.is_empty() {
            &fallback[..]
        } else {
            radices
        };

        let shares = points
            .iter()
            .zip(radices.iter().cycle())
            .map(|(point, &radix)| {
                let digits = radix::encode(point.y(), radix).map_err(
                    |source| ShamirError::Encoding {
                        x: point.x(),
                        source,
                    },
                )?;
                Ok(EncodedShare::new(point.x(), radix.to_string(), digits))
            })
            .collect::<ShamirResult<Vec<_>>>()?;

        Ok(ShareRecord::new(self.threshold.get(), shares))
    }
}

/// Split `secret` into `shares` points, any `threshold` of which recover it.
pub fn split_secret<R: RngCore + ?Sized>(
    secret: &BigInt,
    threshold: usize,
    shares: usize,
    rng: &mut R,
) -> ShamirResult<Vec<Point>> {
    Dealer::new(threshold, shares)?.split(secret, rng)
}
