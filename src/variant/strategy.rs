//! Shipped naming strategies.

use crate::variant::{TemplateRef, VariantStrategy};

/// Inserts the variant tag before the file extension.
///
/// `email/hello.html` with tag `fr` and the default `_` separator becomes
/// `email/hello_fr.html`; a path without an extension gets the tag appended
/// (`hello` -> `hello_fr`). Only the final path segment is inspected, so a
/// dotted directory name is never mistaken for an extension.
#[derive(Debug, Clone)]
pub struct SuffixStrategy {
    separator: String,
}

impl SuffixStrategy {
    /// Creates the strategy with the default `_` separator.
    #[must_use]
    pub fn new() -> Self {
        Self { separator: "_".to_string() }
    }

    /// Creates the strategy with a custom separator between name and tag.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self { separator: separator.into() }
    }
}

impl Default for SuffixStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl VariantStrategy for SuffixStrategy {
    fn real_path(&self, template: &TemplateRef) -> String {
        let Some(variant) = template.variant() else {
            return template.path().to_string();
        };
        let path = template.path();
        let name_start = path.rfind('/').map_or(0, |pos| pos + 1);
        match path[name_start..].rfind('.') {
            Some(dot) => {
                let dot = name_start + dot;
                format!("{}{}{}{}", &path[..dot], self.separator, variant.tag(), &path[dot..])
            }
            None => format!("{}{}{}", path, self.separator, variant.tag()),
        }
    }
}

/// Puts the variant form in a subdirectory named after the tag.
///
/// `email/hello.html` with tag `fr` becomes `email/fr/hello.html`; a bare
/// file name gets the tag prepended as its directory (`hello.html` ->
/// `fr/hello.html`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SubdirStrategy;

impl VariantStrategy for SubdirStrategy {
    fn real_path(&self, template: &TemplateRef) -> String {
        let Some(variant) = template.variant() else {
            return template.path().to_string();
        };
        let path = template.path();
        match path.rfind('/') {
            Some(pos) => format!("{}/{}/{}", &path[..pos], variant.tag(), &path[pos + 1..]),
            None => format!("{}/{}", variant.tag(), path),
        }
    }
}

/// The identity convention: the literal template path, variant or not.
///
/// Used as the trusted fallback of
/// [`FirstExistingVariantResolver`](crate::variant::FirstExistingVariantResolver):
/// its output is returned unprobed when every other convention misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStrategy;

impl VariantStrategy for DefaultStrategy {
    fn real_path(&self, template: &TemplateRef) -> String {
        template.path().to_string()
    }
}
