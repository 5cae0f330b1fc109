//! Process exit status for each failure class.
//!
//! `2` is left to command-line usage errors, which clap reports with that
//! code before any command runs.

use std::io;
use std::process::ExitCode;

use math::error::RadixError;
use shamir_core::{ErrorKind, RecordError, ShamirError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    Success = 0,
    Failure = 1,
    Usage = 2,
    InvalidInput = 3,
    InvalidDigit = 4,
    DuplicateX = 5,
    InsufficientPoints = 6,
    NonIntegerResult = 7,
}

impl Status {
    /// Classify by the first error in the chain this crate knows about.
    pub fn from_error(err: &anyhow::Error) -> Self {
        err.chain()
            .find_map(|cause| {
                if let Some(err) = cause.downcast_ref::<ShamirError>() {
                    Some(Self::from(err.kind()))
                } else if let Some(err) = cause.downcast_ref::<RadixError>() {
                    Some(Self::from_radix(err))
                } else if cause.is::<clap::Error>() {
                    Some(Self::Usage)
                } else if cause.is::<RecordError>() || cause.is::<io::Error>()
                {
                    Some(Self::InvalidInput)
                } else {
                    None
                }
            })
            .unwrap_or(Self::Failure)
    }

    fn from_radix(err: &RadixError) -> Self {
        match err {
            RadixError::InvalidDigit { .. } | RadixError::Empty => {
                Self::InvalidDigit
            }
            _ => Self::InvalidInput,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ErrorKind> for Status {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidInput => Self::InvalidInput,
            ErrorKind::InvalidDigit => Self::InvalidDigit,
            ErrorKind::DuplicateX => Self::DuplicateX,
            ErrorKind::InsufficientPoints => Self::InsufficientPoints,
            ErrorKind::NonIntegerResult => Self::NonIntegerResult,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn engine_errors_map_by_kind() {
        let err = anyhow::Error::from(ShamirError::DuplicateX(3));
        assert_eq!(Status::from_error(&err), Status::DuplicateX);

        let err = anyhow::Error::from(ShamirError::InsufficientPoints {
            required: 3,
            provided: 1,
        });
        assert_eq!(Status::from_error(&err).code(), 6);
    }

    #[test]
    fn context_does_not_hide_the_cause() {
        let err = Err::<(), _>(RecordError::MissingField("k"))
            .context("reading share record")
            .unwrap_err();
        assert_eq!(Status::from_error(&err), Status::InvalidInput);

        let err = Err::<(), _>(io::Error::from(io::ErrorKind::NotFound))
            .context("opening test2.json")
            .unwrap_err();
        assert_eq!(Status::from_error(&err).code(), 3);
    }

    #[test]
    fn bare_radix_errors_are_classified() {
        let err = anyhow::Error::from(RadixError::Empty);
        assert_eq!(Status::from_error(&err), Status::InvalidDigit);
        let err = anyhow::Error::from(RadixError::UnsupportedRadix(40));
        assert_eq!(Status::from_error(&err), Status::InvalidInput);
    }

    #[test]
    fn unknown_errors_are_generic_failures() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(Status::from_error(&err), Status::Failure);
    }
}
