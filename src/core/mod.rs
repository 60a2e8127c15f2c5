//! Core types for courier-resolve.
//!
//! This module holds the error types shared across the crate:
//!
//! - [`ResolveError`] - Failures raised while resolving an identifier at
//!   runtime (unknown scheme, missing resource, malformed identifier, I/O).
//! - [`ConfigError`] - Failures raised while assembling a resolver from a
//!   configuration (malformed or duplicate schemes), caught before any
//!   resolution takes place.
//!
//! Both follow an error-first design: every fallible operation in the crate
//! returns a [`Result`] carrying one of these types, and callers decide
//! whether a failure aborts the send or is reported to the user. The only
//! errors that are ever swallowed are variant probe misses, and those never
//! leave [`crate::variant::FirstExistingVariantResolver`].

mod error;

pub use error::{ConfigError, ResolveError};
