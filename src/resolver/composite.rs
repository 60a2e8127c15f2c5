//! Ordered scheme-match dispatch.

use crate::core::ResolveError;
use crate::resolver::ResourceResolver;
use crate::resource::{Resource, split_scheme};
use tracing::{debug, trace};

/// One assembled dispatch entry: a scheme and the backend that owns it.
pub(crate) struct Entry {
    pub(crate) scheme: String,
    pub(crate) resolver: Box<dyn ResourceResolver>,
}

/// Routes a resource identifier to the backend owning its scheme.
///
/// Entries are walked in assembly order and the first one whose scheme equals
/// the identifier's extracted scheme wins; the entry registered under the
/// empty scheme matches identifiers that carry no scheme at all. Matching is
/// exact and case sensitive.
///
/// First-match-wins applies to scheme equality, not to existence: once an
/// entry matches, its verdict is final, and a [`ResourceNotFound`] from the
/// backend is surfaced rather than being reinterpreted as "try the next
/// entry". If no entry matches, resolution fails with
/// [`UnresolvableScheme`].
///
/// Built by [`ResolverConfig::build`]; immutable and freely shareable across
/// threads afterwards.
///
/// [`ResourceNotFound`]: ResolveError::ResourceNotFound
/// [`UnresolvableScheme`]: ResolveError::UnresolvableScheme
/// [`ResolverConfig::build`]: crate::resolver::ResolverConfig::build
pub struct CompositeResolver {
    entries: Vec<Entry>,
}

impl CompositeResolver {
    pub(crate) fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Number of assembled dispatch entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries were assembled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResourceResolver for CompositeResolver {
    fn resolve(&self, identifier: &str) -> Result<Resource, ResolveError> {
        let (scheme, path) = split_scheme(identifier)?;
        let scheme = scheme.unwrap_or("");
        for entry in &self.entries {
            trace!("Checking scheme '{}' against '{}'", entry.scheme, scheme);
            if entry.scheme == scheme {
                debug!("Scheme '{}' handles '{}'", entry.scheme, identifier);
                return entry.resolver.resolve(path);
            }
        }
        debug!("No resolver registered for '{}'", identifier);
        Err(ResolveError::UnresolvableScheme {
            identifier: identifier.to_string(),
            scheme: scheme.to_string(),
        })
    }
}

impl std::fmt::Debug for CompositeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let schemes: Vec<&str> = self.entries.iter().map(|e| e.scheme.as_str()).collect();
        f.debug_struct("CompositeResolver").field("schemes", &schemes).finish()
    }
}
