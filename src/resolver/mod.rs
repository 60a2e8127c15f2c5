//! Backend resolvers, relocation and scheme dispatch.
//!
//! Everything here is built once during assembly and immutable afterwards:
//!
//! - [`ResourceResolver`] - the backend contract: turn a scheme-stripped path
//!   into resource bytes, or report a miss as a first-class [`Result`].
//! - [`EmbeddedResolver`], [`FileResolver`], [`LiteralResolver`] - one backend
//!   per storage kind (embedded asset set, filesystem, inline literal).
//! - [`RelativeResolver`] - decorator that rewrites a bare name into a full
//!   path by prefixing a parent path and appending an extension.
//! - [`CompositeResolver`] - ordered scheme-match dispatch over the assembled
//!   backends.
//! - [`ResolverConfig`] / [`BackendSpec`] / [`RelocationSettings`] - the
//!   immutable configuration value and the one-shot assembly that validates
//!   it and produces the [`CompositeResolver`].
//!
//! # Dispatch vs. probing
//!
//! [`CompositeResolver`] picks a backend by scheme equality only; whether the
//! resource actually exists is the matched backend's verdict and is never a
//! reason to try another backend. Existence probing lives in
//! [`crate::variant`], layered on top of this module.

mod composite;
mod config;
mod embedded;
mod file;
mod literal;
mod relative;

#[cfg(test)]
mod tests;

pub use composite::CompositeResolver;
pub use config::{BackendSpec, RelocationSettings, ResolverConfig};
pub use embedded::EmbeddedResolver;
pub use file::FileResolver;
pub use literal::LiteralResolver;
pub use relative::RelativeResolver;

use crate::core::ResolveError;
use crate::resource::Resource;
use std::sync::Arc;

/// A backend that turns a scheme-stripped path into resource bytes.
///
/// Implementations are registered with a [`ResolverConfig`] under the scheme
/// they own and are invoked with the path only; the scheme prefix has already
/// been stripped by the dispatcher (identifiers without a scheme are passed
/// through whole).
///
/// A miss is an ordinary value, not a panic or a caught exception:
/// implementations return [`ResolveError::ResourceNotFound`] when the path
/// names nothing, which lets variant probing inspect the result tag cheaply.
///
/// Resolvers are shared across message-sending call sites, so they must be
/// [`Send`] + [`Sync`] and `resolve` takes `&self`.
pub trait ResourceResolver: Send + Sync {
    /// Resolves `path` to its resource content.
    fn resolve(&self, path: &str) -> Result<Resource, ResolveError>;
}

impl<T: ResourceResolver + ?Sized> ResourceResolver for Arc<T> {
    fn resolve(&self, path: &str) -> Result<Resource, ResolveError> {
        (**self).resolve(path)
    }
}

impl<T: ResourceResolver + ?Sized> ResourceResolver for Box<T> {
    fn resolve(&self, path: &str) -> Result<Resource, ResolveError> {
        (**self).resolve(path)
    }
}
