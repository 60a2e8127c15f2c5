//! Filesystem backend.

use crate::core::ResolveError;
use crate::resolver::ResourceResolver;
use crate::resource::Resource;
use std::path::PathBuf;
use tracing::debug;

/// Resolver that reads resources from the filesystem.
///
/// Paths are resolved relative to an optional base directory; without one,
/// the path is taken as-is (absolute, or relative to the process working
/// directory). Absence maps to [`ResolveError::ResourceNotFound`]; every
/// other I/O failure is surfaced as [`ResolveError::Io`] so callers can tell
/// a routine miss from a broken filesystem.
#[derive(Debug, Clone, Default)]
pub struct FileResolver {
    base_dir: Option<PathBuf>,
}

impl FileResolver {
    /// Creates a resolver that takes paths as-is.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver that joins every path onto `base_dir`.
    #[must_use]
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: Some(base_dir.into()) }
    }
}

impl ResourceResolver for FileResolver {
    fn resolve(&self, path: &str) -> Result<Resource, ResolveError> {
        let full = match &self.base_dir {
            Some(base) => base.join(path),
            None => PathBuf::from(path),
        };
        debug!("Reading resource file {:?}", full);
        match std::fs::read(&full) {
            Ok(content) => Ok(Resource::new(path, content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(ResolveError::ResourceNotFound { path: full.display().to_string() })
            }
            Err(err) => Err(ResolveError::Io { path: full.display().to_string(), source: err }),
        }
    }
}
