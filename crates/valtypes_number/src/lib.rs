//! Number value types for Valtypes.
//!
//! This crate provides:
//! - [`AnyInt`] - An unconstrained signed 32-bit integer value type
//! - [`AnyIntFactory`] - The construction entry point for [`AnyInt`]
//! - [`Error`] - Errors for conversions whose input may not fit an `i32`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod factory;
pub mod int;

pub use error::{Error, ErrorKind};
pub use factory::AnyIntFactory;
pub use int::AnyInt;

/// Result type alias using the number [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
