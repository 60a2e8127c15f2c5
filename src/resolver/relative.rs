//! Relocating decorator.

use crate::core::ResolveError;
use crate::resolver::{RelocationSettings, ResourceResolver};
use crate::resource::Resource;
use tracing::trace;

/// Decorator that rewrites a bare name into a full path before delegating.
///
/// The full path is `parent_path + path + extension`, by plain concatenation:
/// the configured parent path owns its trailing separator, and the extension
/// its leading dot. The decorator is transparent to dispatch; it answers for
/// the same scheme as the backend it wraps.
///
/// Instances are created by [`ResolverConfig::build`] for every entry flagged
/// relocatable, but the type is public so a single backend can be wrapped
/// directly when no composite is wanted.
///
/// [`ResolverConfig::build`]: crate::resolver::ResolverConfig::build
pub struct RelativeResolver {
    inner: Box<dyn ResourceResolver>,
    settings: RelocationSettings,
}

impl RelativeResolver {
    /// Wraps `inner` so every path is relocated per `settings`.
    pub fn new(inner: impl ResourceResolver + 'static, settings: RelocationSettings) -> Self {
        Self { inner: Box::new(inner), settings }
    }

    /// The relocation settings applied by this decorator.
    #[must_use]
    pub fn settings(&self) -> &RelocationSettings {
        &self.settings
    }
}

impl ResourceResolver for RelativeResolver {
    fn resolve(&self, path: &str) -> Result<Resource, ResolveError> {
        let full = format!("{}{}{}", self.settings.parent_path, path, self.settings.extension);
        trace!("Relocated '{}' to '{}'", path, full);
        self.inner.resolve(&full)
    }
}

impl std::fmt::Debug for RelativeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelativeResolver").field("settings", &self.settings).finish_non_exhaustive()
    }
}
