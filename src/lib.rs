//! Valtypes - Immutable value types wrapping primitives
//!
//! This crate re-exports all layers of Valtypes for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 0: valtypes_number — Number value types (AnyInt, AnyIntFactory, Error)
//! ```

pub use valtypes_number as number;
pub use valtypes_number::{AnyInt, AnyIntFactory};
