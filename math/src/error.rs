use thiserror::Error;

pub mod radix {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("digit string is empty")]
        Empty,
        #[error("radix {0} is outside the supported range 2..=36")]
        UnsupportedRadix(u32),
        #[error("radix {0:?} is not a decimal integer")]
        Unparsable(String),
        #[error(
            "invalid digit {digit:?} at position {position} for radix {radix}"
        )]
        InvalidDigit {
            digit: char,
            position: usize,
            radix: u32,
        },
        #[error("cannot encode negative value {0} as a digit string")]
        Negative(String),
    }
}

pub mod rational {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum Error {
        #[error("denominator must be non-zero")]
        ZeroDenominator,
    }
}

pub mod interpolation {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("cannot interpolate through an empty point set")]
        NoPoints,
        #[error("abscissa {0} appears more than once")]
        DuplicateAbscissa(String),
        #[error("got {xs} abscissae but {ys} ordinates")]
        LengthMismatch { xs: usize, ys: usize },
    }
}

pub use interpolation::Error as InterpolationError;
pub use radix::Error as RadixError;
pub use rational::Error as RationalError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Radix(#[from] RadixError),
    #[error(transparent)]
    Rational(#[from] RationalError),
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}

pub type Error = MathError;
