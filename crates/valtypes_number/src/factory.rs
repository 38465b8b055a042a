//! Factory for constructing [`AnyInt`] values.
//!
//! Every construction path funnels through [`AnyIntFactory`], so a future
//! constraint on the wrapped value would have a single place to live.

use crate::error::Error;
use crate::int::AnyInt;

/// Constructs [`AnyInt`] values from native integers and text.
#[derive(Debug, Clone, Copy)]
pub struct AnyIntFactory;

impl AnyIntFactory {
    /// Wraps `value` into an [`AnyInt`].
    ///
    /// Total over `i32`: the result always satisfies
    /// `AnyIntFactory::create(x).to_int() == x`.
    #[must_use]
    pub const fn create(value: i32) -> AnyInt {
        AnyInt::new(value)
    }

    /// Wraps a wider integer, failing if it does not fit in an `i32`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::OutOfRange`](crate::ErrorKind::OutOfRange) when
    /// `value` is below `i32::MIN` or above `i32::MAX`.
    pub fn try_create(value: i64) -> crate::Result<AnyInt> {
        i32::try_from(value)
            .map(Self::create)
            .map_err(|_| Error::out_of_range(value))
    }

    /// Parses a decimal integer with an optional leading `+` or `-`.
    ///
    /// Surrounding ASCII whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed text is empty, contains anything
    /// other than a sign and digits, or denotes a value outside `i32`.
    pub fn parse(input: &str) -> crate::Result<AnyInt> {
        let trimmed = input.trim_ascii();
        if trimmed.is_empty() {
            return Err(Error::empty_input());
        }
        trimmed
            .parse::<i32>()
            .map(Self::create)
            .map_err(|e| Error::from_parse(trimmed, &e))
    }
}
