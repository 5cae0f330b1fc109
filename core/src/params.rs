use std::fmt;
use std::num::NonZeroUsize;

use crate::error::{ShamirError, ShamirResult};

/// Width, in bits, of the random coefficients the dealer draws when none is
/// configured.
pub const DEFAULT_COEFFICIENT_BITS: u64 = 256;

/// Upper bound on the configurable coefficient width.
pub const MAX_COEFFICIENT_BITS: u64 = 1 << 20;

/// The threshold `k`: how many points a reconstruction needs and uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(NonZeroUsize);

impl Threshold {
    pub fn new(k: usize) -> ShamirResult<Self> {
        NonZeroUsize::new(k)
            .map(Threshold)
            .ok_or(ShamirError::InvalidThreshold(k))
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Degree of the polynomial this threshold determines.
    #[inline]
    pub const fn degree(self) -> usize {
        self.0.get() - 1
    }
}

impl TryFrom<usize> for Threshold {
    type Error = ShamirError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Threshold::new(value)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A `threshold`-of-`shares` split is valid when `1 <= threshold <= shares`.
pub fn validate_threshold_config(threshold: usize, shares: usize) -> bool {
    (1..=shares).contains(&threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_threshold_is_rejected() {
        assert!(matches!(
            Threshold::new(0),
            Err(ShamirError::InvalidThreshold(0))
        ));
        assert!(Threshold::try_from(0usize).is_err());
    }

    #[test]
    fn threshold_reports_degree() {
        let k = Threshold::new(3).unwrap();
        assert_eq!(k.get(), 3);
        assert_eq!(k.degree(), 2);
        assert_eq!(Threshold::new(1).unwrap().degree(), 0);
        assert_eq!(k.to_string(), "3");
    }

    #[test]
    fn validate_threshold_config_accepts_expected_inputs() {
        assert!(validate_threshold_config(1, 1));
        assert!(validate_threshold_config(2, 2));
        assert!(validate_threshold_config(3, 10));
        assert!(validate_threshold_config(10, 10));
    }

    #[test]
    fn validate_threshold_config_rejects_invalid_inputs() {
        assert!(!validate_threshold_config(0, 5));
        assert!(!validate_threshold_config(6, 5));
        assert!(!validate_threshold_config(1, 0));
    }
}
