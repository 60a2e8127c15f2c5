//! Inline literal backend.

use crate::core::ResolveError;
use crate::resolver::ResourceResolver;
use crate::resource::Resource;

/// Resolver whose "path" is the resource content itself.
///
/// Registered under a scheme such as `string`, it lets callers embed short
/// templates directly in an identifier (`string:Hello {name}`). Resolution
/// always succeeds, and the backend must never be flagged relocatable: a
/// parent path or extension glued onto literal content would corrupt it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralResolver;

impl ResourceResolver for LiteralResolver {
    fn resolve(&self, path: &str) -> Result<Resource, ResolveError> {
        Ok(Resource::new(path, path.as_bytes().to_vec()))
    }
}
