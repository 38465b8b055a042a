//! Unconstrained integer value type.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::factory::AnyIntFactory;

/// A signed 32-bit integer wrapped as a value type.
///
/// Unlike constrained number types, `AnyInt` accepts every `i32`: the
/// wrapped value is exactly the one supplied at construction, with no
/// clamping or validation. Instances are immutable and compared by value.
///
/// # Example
///
/// ```
/// use valtypes_number::{AnyInt, AnyIntFactory};
///
/// let number: AnyInt = AnyIntFactory::create(-42);
/// assert_eq!(number.to_int(), -42);
/// ```
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct AnyInt(i32);

impl AnyInt {
    /// The smallest value, wrapping `i32::MIN`.
    pub const MIN: Self = Self(i32::MIN);

    /// The largest value, wrapping `i32::MAX`.
    pub const MAX: Self = Self(i32::MAX);

    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Wraps `value` without any check. Usable in const contexts.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the wrapped integer.
    #[must_use]
    pub const fn to_int(self) -> i32 {
        self.0
    }
}

impl fmt::Debug for AnyInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnyInt({})", self.0)
    }
}

impl fmt::Display for AnyInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<i32> for AnyInt {
    fn from(value: i32) -> Self {
        AnyIntFactory::create(value)
    }
}

impl From<AnyInt> for i32 {
    fn from(number: AnyInt) -> Self {
        number.to_int()
    }
}

impl From<AnyInt> for i64 {
    fn from(number: AnyInt) -> Self {
        i64::from(number.to_int())
    }
}

impl TryFrom<i64> for AnyInt {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        AnyIntFactory::try_create(value)
    }
}

impl FromStr for AnyInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnyIntFactory::parse(s)
    }
}

impl PartialEq<i32> for AnyInt {
    fn eq(&self, other: &i32) -> bool {
        self.0 == *other
    }
}

impl PartialEq<AnyInt> for i32 {
    fn eq(&self, other: &AnyInt) -> bool {
        *self == other.0
    }
}
