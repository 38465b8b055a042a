//! Error types for number conversions.
//!
//! Uses `thiserror` for ergonomic error definition. Only conversions whose
//! input may not be a representable `i32` can fail; wrapping an `i32` never
//! does.

use std::num::{IntErrorKind, ParseIntError};

use thiserror::Error;

/// The error type for fallible `AnyInt` conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an empty input error.
    #[must_use]
    pub fn empty_input() -> Self {
        Self::new(ErrorKind::EmptyInput)
    }

    /// Creates an invalid digit error for the given text.
    #[must_use]
    pub fn invalid_digit(input: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDigit(input.into()))
    }

    /// Creates an error for a wide integer that does not fit in an `i32`.
    #[must_use]
    pub fn out_of_range(value: i64) -> Self {
        Self::new(ErrorKind::OutOfRange(value))
    }

    /// Converts a standard library parse failure, keeping the offending text.
    pub(crate) fn from_parse(input: &str, err: &ParseIntError) -> Self {
        let input = input.to_string();
        let kind = match err.kind() {
            IntErrorKind::Empty => ErrorKind::EmptyInput,
            IntErrorKind::PosOverflow => ErrorKind::PosOverflow(input),
            IntErrorKind::NegOverflow => ErrorKind::NegOverflow(input),
            _ => ErrorKind::InvalidDigit(input),
        };
        Self::new(kind)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The text to parse was empty or only whitespace.
    #[error("cannot parse AnyInt from empty input")]
    EmptyInput,

    /// The text contained something other than an optional sign and digits.
    #[error("invalid digit in {0:?}")]
    InvalidDigit(String),

    /// The text denotes an integer above `i32::MAX`.
    #[error("{0:?} is greater than 2147483647")]
    PosOverflow(String),

    /// The text denotes an integer below `i32::MIN`.
    #[error("{0:?} is less than -2147483648")]
    NegOverflow(String),

    /// A wide integer fell outside the `i32` range.
    #[error("{0} is outside the range of AnyInt")]
    OutOfRange(i64),
}
