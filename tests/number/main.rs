//! Integration tests for Layer 0: Number
//!
//! Tests for AnyInt construction, round-trips, conversions, and errors.

mod factory;
