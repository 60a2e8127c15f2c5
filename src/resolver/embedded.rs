//! Embedded asset backend.

use crate::core::ResolveError;
use crate::resolver::ResourceResolver;
use crate::resource::Resource;
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::debug;

/// Resolver over a set of assets embedded in the binary.
///
/// The counterpart of a classpath lookup: assets are registered once at
/// construction, typically from `include_bytes!`/`include_str!` content, and
/// resolved by exact path match. Registration paths are whatever convention
/// the application uses; no normalization is applied.
///
/// # Examples
///
/// ```rust
/// use courier_resolve::resolver::{EmbeddedResolver, ResourceResolver};
///
/// let assets = EmbeddedResolver::new()
///     .with_asset("/email/hello.html", b"<p>Hello</p>".as_slice());
///
/// assert!(assets.resolve("/email/hello.html").is_ok());
/// assert!(assets.resolve("/email/missing.html").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmbeddedResolver {
    assets: HashMap<String, Cow<'static, [u8]>>,
}

impl EmbeddedResolver {
    /// Creates an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an asset under `path`, replacing any previous registration.
    #[must_use]
    pub fn with_asset(
        mut self,
        path: impl Into<String>,
        content: impl Into<Cow<'static, [u8]>>,
    ) -> Self {
        self.assets.insert(path.into(), content.into());
        self
    }

    /// Number of registered assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether no assets are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl ResourceResolver for EmbeddedResolver {
    fn resolve(&self, path: &str) -> Result<Resource, ResolveError> {
        debug!("Looking up embedded asset '{}'", path);
        match self.assets.get(path) {
            Some(content) => Ok(Resource::new(path, content.clone())),
            None => Err(ResolveError::ResourceNotFound { path: path.to_string() }),
        }
    }
}
