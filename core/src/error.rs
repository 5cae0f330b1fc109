use math::error::{InterpolationError, RadixError};
use num_bigint::BigInt;
use thiserror::Error;

use crate::record::RecordError;

/// Result type specialized for secret reconstruction.
pub type ShamirResult<T> = std::result::Result<T, ShamirError>;

/// Errors that can arise while collecting points or reconstructing a secret.
///
/// Every variant is terminal for the call that produced it: reconstruction
/// is deterministic, so retrying with the same input cannot succeed.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ShamirError {
    #[error("share {x}: {source}")]
    InvalidDigit {
        x: u64,
        #[source]
        source: RadixError,
    },
    #[error("share {x}: {source}")]
    InvalidRadix {
        x: u64,
        #[source]
        source: RadixError,
    },
    #[error("x-coordinate must be positive, got {0}")]
    InvalidX(u64),
    #[error("duplicate x-coordinate: {0}")]
    DuplicateX(u64),
    #[error("threshold must be at least 1, got {0}")]
    InvalidThreshold(usize),
    #[error("threshold {threshold} exceeds share count {shares}")]
    ThresholdExceedsShares { threshold: usize, shares: usize },
    #[error("coefficient width {bits} bits exceeds the limit of {max}")]
    CoefficientBitsTooLarge { bits: u64, max: u64 },
    #[error("insufficient points: need {required}, got {provided}")]
    InsufficientPoints { required: usize, provided: usize },
    #[error(
        "interpolated constant term {numerator}/{denominator} is not an integer"
    )]
    NonIntegerResult {
        numerator: BigInt,
        denominator: BigInt,
    },
    #[error("share {x} cannot be written as digits: {source}")]
    Encoding {
        x: u64,
        #[source]
        source: RadixError,
    },
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Coarse classification of [`ShamirError`], one per user-visible outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input that is not a digit problem: bad radix, bad index,
    /// zero x, bad threshold, unparsable record.
    InvalidInput,
    InvalidDigit,
    DuplicateX,
    InsufficientPoints,
    NonIntegerResult,
}

impl ShamirError {
    /// Attach a share's x-coordinate to a decoding failure, separating digit
    /// problems from radix problems.
    pub fn decoding(x: u64, source: RadixError) -> Self {
        match source {
            RadixError::UnsupportedRadix(_) | RadixError::Unparsable(_) => {
                ShamirError::InvalidRadix { x, source }
            }
            source => ShamirError::InvalidDigit { x, source },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ShamirError::InvalidDigit { .. } => ErrorKind::InvalidDigit,
            ShamirError::DuplicateX(_) => ErrorKind::DuplicateX,
            ShamirError::InsufficientPoints { .. } => {
                ErrorKind::InsufficientPoints
            }
            ShamirError::NonIntegerResult { .. } => ErrorKind::NonIntegerResult,
            _ => ErrorKind::InvalidInput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoding_errors_are_split_by_cause() {
        let digit = ShamirError::decoding(
            3,
            RadixError::InvalidDigit {
                digit: 'g',
                position: 0,
                radix: 16,
            },
        );
        assert_eq!(digit.kind(), ErrorKind::InvalidDigit);
        assert_eq!(
            digit.to_string(),
            "share 3: invalid digit 'g' at position 0 for radix 16"
        );

        let empty = ShamirError::decoding(1, RadixError::Empty);
        assert_eq!(empty.kind(), ErrorKind::InvalidDigit);

        let radix = ShamirError::decoding(2, RadixError::UnsupportedRadix(40));
        assert!(matches!(radix, ShamirError::InvalidRadix { x: 2, .. }));
        assert_eq!(radix.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn kinds_cover_the_reconstruction_failures() {
        assert_eq!(ShamirError::DuplicateX(4).kind(), ErrorKind::DuplicateX);
        assert_eq!(
            ShamirError::InsufficientPoints {
                required: 3,
                provided: 2
            }
            .kind(),
            ErrorKind::InsufficientPoints
        );
        assert_eq!(
            ShamirError::NonIntegerResult {
                numerator: 1.into(),
                denominator: 2.into()
            }
            .kind(),
            ErrorKind::NonIntegerResult
        );
        assert_eq!(ShamirError::InvalidX(0).kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn messages_name_the_offending_values() {
        assert_eq!(
            ShamirError::InsufficientPoints {
                required: 3,
                provided: 1
            }
            .to_string(),
            "insufficient points: need 3, got 1"
        );
        assert_eq!(
            ShamirError::NonIntegerResult {
                numerator: 1.into(),
                denominator: 2.into()
            }
            .to_string(),
            "interpolated constant term 1/2 is not an integer"
        );
    }
}
