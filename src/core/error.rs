//! Error handling for courier-resolve.
//!
//! Two enumerated error types cover the crate's failure modes:
//!
//! - [`ResolveError`] for resolution-time failures, surfaced to template
//!   engines and message senders.
//! - [`ConfigError`] for assembly-time failures, surfaced to whoever builds
//!   the resolver from configuration.
//!
//! The split keeps configuration mistakes out of the runtime resolution path:
//! a resolver that assembled successfully can only fail with a
//! [`ResolveError`].

use thiserror::Error;

/// Errors raised while resolving a resource identifier.
///
/// Dispatch errors ([`UnresolvableScheme`], [`MalformedScheme`]) describe the
/// identifier itself; backend errors ([`ResourceNotFound`], [`Io`]) describe
/// what the matched backend found, and are propagated unchanged rather than
/// being reinterpreted as "try the next backend".
///
/// [`UnresolvableScheme`]: ResolveError::UnresolvableScheme
/// [`MalformedScheme`]: ResolveError::MalformedScheme
/// [`ResourceNotFound`]: ResolveError::ResourceNotFound
/// [`Io`]: ResolveError::Io
#[derive(Error, Debug)]
pub enum ResolveError {
    /// No backend is registered for the identifier's scheme.
    ///
    /// Raised when the extracted scheme matches no registered entry and no
    /// empty-scheme default backend exists. An empty `scheme` means the
    /// identifier carried no scheme at all.
    #[error("no resolver registered for scheme '{scheme}' (identifier '{identifier}')")]
    UnresolvableScheme {
        /// The full identifier that could not be routed
        identifier: String,
        /// The scheme extracted from it, empty if none was present
        scheme: String,
    },

    /// A matched backend could not locate the concrete resource.
    ///
    /// This is the routine miss outcome: inside variant probing it is
    /// absorbed and means "try the next naming strategy"; everywhere else it
    /// is surfaced to the caller as-is.
    #[error("resource not found: {path}")]
    ResourceNotFound {
        /// The path the backend looked up, after any relocation
        path: String,
    },

    /// The identifier's scheme-like prefix violates the single-colon rule.
    ///
    /// A scheme is the text before the first `:`; an identifier that starts
    /// with the separator has an empty prefix and cannot be routed.
    #[error("malformed scheme in '{identifier}': {reason}")]
    MalformedScheme {
        /// The offending identifier
        identifier: String,
        /// What exactly is wrong with its prefix
        reason: String,
    },

    /// A filesystem backend failed for a reason other than absence.
    #[error("failed to read resource at '{path}'")]
    Io {
        /// The path whose read failed
        path: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while assembling a [`CompositeResolver`] from a
/// [`ResolverConfig`].
///
/// Assembly validates every registered scheme up front so that malformed
/// configurations fail fast instead of silently matching (or never matching)
/// at resolution time.
///
/// [`CompositeResolver`]: crate::resolver::CompositeResolver
/// [`ResolverConfig`]: crate::resolver::ResolverConfig
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A registered scheme contains a character it must not contain.
    ///
    /// Schemes are written without their trailing separator; one that embeds
    /// `:` or a path separator could never be extracted from an identifier.
    #[error("malformed scheme '{scheme}': {reason}")]
    MalformedScheme {
        /// The offending scheme as registered
        scheme: String,
        /// What exactly is wrong with it
        reason: String,
    },

    /// The same scheme was registered more than once.
    ///
    /// Uniqueness is enforced at assembly, including at most one empty-scheme
    /// default entry, so dispatch never depends on iteration order between
    /// structurally identical schemes.
    #[error("duplicate scheme '{scheme}': each scheme may be registered at most once")]
    DuplicateScheme {
        /// The scheme registered twice, empty for the default entry
        scheme: String,
    },
}
