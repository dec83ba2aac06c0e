//! Canonical serialization.
//!
//! Every value type in this crate implements [`std::fmt::Display`] with its
//! canonical RFC 8941 wire form; [`Canonical::canonical`] is a convenience
//! wrapper so callers don't need to import `std::fmt::Display` just to call
//! `.to_string()`.

use std::fmt;

/// Produces the canonical RFC 8941 textual form of a value.
pub trait Canonical: fmt::Display {
    /// Returns the canonical textual form.
    fn canonical(&self) -> String {
        self.to_string()
    }
}

impl<T: fmt::Display> Canonical for T {}
