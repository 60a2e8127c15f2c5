//! Immutable resolver configuration and one-shot assembly.

use crate::core::ConfigError;
use crate::resolver::composite::Entry;
use crate::resolver::{CompositeResolver, RelativeResolver, ResourceResolver};
use crate::resource::SCHEME_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Parent path and extension applied to relocatable backends.
///
/// Both values are concatenated around the bare name as-is: the parent path
/// carries its own trailing separator (`/foo/template/`) and the extension its
/// leading dot (`.html`). Empty values mean no relocation is requested, and
/// assembly then introduces no decorator layer at all.
///
/// The struct is plain data and serde-derived so a messaging configuration
/// file can carry it directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelocationSettings {
    /// Prefix glued in front of every relocated path
    pub parent_path: String,
    /// Suffix glued after every relocated path
    pub extension: String,
}

impl RelocationSettings {
    /// Creates settings from a parent path and an extension.
    pub fn new(parent_path: impl Into<String>, extension: impl Into<String>) -> Self {
        Self { parent_path: parent_path.into(), extension: extension.into() }
    }

    /// Whether both fields are empty, i.e. no relocation is requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent_path.is_empty() && self.extension.is_empty()
    }
}

/// One backend registration: a scheme, a relocation capability, a resolver.
///
/// The relocation capability is an explicit flag decided at registration, not
/// a property sniffed from the resolver's type: assembly branches on a plain
/// predicate. Backends whose "path" is opaque content (see
/// [`LiteralResolver`]) are registered [`verbatim`]; backends whose paths may
/// be prefixed and suffixed are registered [`relocatable`].
///
/// [`LiteralResolver`]: crate::resolver::LiteralResolver
/// [`verbatim`]: BackendSpec::verbatim
/// [`relocatable`]: BackendSpec::relocatable
pub struct BackendSpec {
    scheme: String,
    relocatable: bool,
    resolver: Box<dyn ResourceResolver>,
}

impl BackendSpec {
    /// Registers a backend whose paths may be relocated.
    pub fn relocatable(
        scheme: impl Into<String>,
        resolver: impl ResourceResolver + 'static,
    ) -> Self {
        Self { scheme: scheme.into(), relocatable: true, resolver: Box::new(resolver) }
    }

    /// Registers a backend whose paths must pass through untouched.
    pub fn verbatim(scheme: impl Into<String>, resolver: impl ResourceResolver + 'static) -> Self {
        Self { scheme: scheme.into(), relocatable: false, resolver: Box::new(resolver) }
    }

    /// The scheme this backend answers for, empty for the default backend.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Whether assembly may wrap this backend in a [`RelativeResolver`].
    #[must_use]
    pub fn is_relocatable(&self) -> bool {
        self.relocatable
    }
}

impl std::fmt::Debug for BackendSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendSpec")
            .field("scheme", &self.scheme)
            .field("relocatable", &self.relocatable)
            .finish_non_exhaustive()
    }
}

/// The complete, immutable configuration of a [`CompositeResolver`].
///
/// Holds the ordered backend registrations and the relocation settings;
/// [`build`] validates the whole value and assembles the final resolver in
/// one step. There is no mutation after construction and no way to add,
/// remove or reorder entries once built.
///
/// # Validation
///
/// - A non-empty scheme must not contain the scheme separator or a path
///   separator; such a scheme could never be extracted from an identifier
///   ([`ConfigError::MalformedScheme`]).
/// - Every scheme may be registered at most once, including the empty
///   default scheme ([`ConfigError::DuplicateScheme`]). Enforcing uniqueness
///   up front means dispatch never depends on registration order between
///   identical schemes.
///
/// [`build`]: ResolverConfig::build
#[derive(Debug)]
pub struct ResolverConfig {
    backends: Vec<BackendSpec>,
    relocation: RelocationSettings,
}

impl ResolverConfig {
    /// Creates a configuration from ordered backend registrations, with no
    /// relocation.
    #[must_use]
    pub fn new(backends: Vec<BackendSpec>) -> Self {
        Self { backends, relocation: RelocationSettings::default() }
    }

    /// Sets the relocation applied to relocatable backends.
    #[must_use]
    pub fn with_relocation(mut self, relocation: RelocationSettings) -> Self {
        self.relocation = relocation;
        self
    }

    /// Validates the configuration and assembles the dispatcher.
    ///
    /// With empty relocation settings the registrations pass through
    /// untouched; otherwise every relocatable backend is wrapped in a
    /// [`RelativeResolver`] while verbatim backends pass through. Relative
    /// order is preserved either way. The transform is one-shot and
    /// non-reversible; the configuration is consumed.
    pub fn build(self) -> Result<CompositeResolver, ConfigError> {
        let Self { backends, relocation } = self;
        validate_schemes(&backends)?;
        let relocate = !relocation.is_empty();
        if relocate {
            debug!(
                "Using parent path '{}' and extension '{}' for resource resolution",
                relocation.parent_path, relocation.extension
            );
        }
        let entries = backends
            .into_iter()
            .map(|spec| {
                let resolver = if relocate && spec.relocatable {
                    Box::new(RelativeResolver::new(spec.resolver, relocation.clone()))
                        as Box<dyn ResourceResolver>
                } else {
                    spec.resolver
                };
                Entry { scheme: spec.scheme, resolver }
            })
            .collect();
        Ok(CompositeResolver::new(entries))
    }
}

fn validate_schemes(backends: &[BackendSpec]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for spec in backends {
        let scheme = spec.scheme();
        if scheme.contains(SCHEME_SEPARATOR) {
            return Err(ConfigError::MalformedScheme {
                scheme: scheme.to_string(),
                reason: "scheme must not contain the scheme separator".to_string(),
            });
        }
        if scheme.contains(['/', '\\']) {
            return Err(ConfigError::MalformedScheme {
                scheme: scheme.to_string(),
                reason: "scheme must not contain a path separator".to_string(),
            });
        }
        if !seen.insert(scheme.to_string()) {
            return Err(ConfigError::DuplicateScheme { scheme: scheme.to_string() });
        }
    }
    Ok(())
}
