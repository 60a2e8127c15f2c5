//! Resolved resource content and identifier parsing.
//!
//! A [`Resource`] is the product of a successful resolution: the resource
//! bytes plus the path that produced them. There is no caching at this layer;
//! every resolution call re-reads the backing store.
//!
//! [`split_scheme`] implements the identifier grammar used for dispatch. The
//! lookup scheme is case sensitive, ends with `:` and must not contain
//! another `:`; it may be absent, in which case the whole identifier is a
//! path routed to the default backend.

use crate::core::ResolveError;
use std::borrow::Cow;

/// The character separating a scheme from the path it prefixes.
pub const SCHEME_SEPARATOR: char = ':';

/// Characters that disqualify a prefix from being a scheme.
///
/// A `/` or `\` before the first separator means the identifier is a plain
/// path whose tail happens to contain a `:` (e.g. `logs/app:latest.txt`).
const PATH_SEPARATORS: [char; 2] = ['/', '\\'];

/// A resolved resource: content bytes plus the path that produced them.
///
/// The path is whatever the backend was ultimately asked for, after scheme
/// stripping and relocation, so callers can report it in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    path: String,
    content: Cow<'static, [u8]>,
}

impl Resource {
    /// Creates a resource from a path and its content.
    pub fn new(path: impl Into<String>, content: impl Into<Cow<'static, [u8]>>) -> Self {
        Self { path: path.into(), content: content.into() }
    }

    /// The path this resource was resolved from.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The raw resource bytes.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Consumes the resource, returning its bytes.
    #[must_use]
    pub fn into_content(self) -> Vec<u8> {
        self.content.into_owned()
    }

    /// The content as UTF-8 text, if it is valid UTF-8.
    pub fn text(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.content)
    }
}

/// Splits a resource identifier into its scheme and path.
///
/// The scheme is the text before the first [`SCHEME_SEPARATOR`]. Three cases:
///
/// - No separator, or a path separator before it: the identifier carries no
///   scheme and is returned whole as the path.
/// - A non-empty prefix before the separator: `Ok((Some(scheme), rest))`
///   with the separator stripped.
/// - A leading separator: [`ResolveError::MalformedScheme`], since an empty
///   scheme prefix cannot be routed.
///
/// Matching downstream is exact and case sensitive; no normalization happens
/// here.
///
/// # Examples
///
/// ```rust
/// use courier_resolve::resource::split_scheme;
///
/// assert_eq!(split_scheme("classpath:/email/hello.html").unwrap(),
///            (Some("classpath"), "/email/hello.html"));
/// assert_eq!(split_scheme("/email/hello.html").unwrap(),
///            (None, "/email/hello.html"));
/// assert_eq!(split_scheme("logs/app:latest.txt").unwrap(),
///            (None, "logs/app:latest.txt"));
/// assert!(split_scheme(":broken").is_err());
/// ```
pub fn split_scheme(identifier: &str) -> Result<(Option<&str>, &str), ResolveError> {
    let Some(pos) = identifier.find(SCHEME_SEPARATOR) else {
        return Ok((None, identifier));
    };
    let prefix = &identifier[..pos];
    if prefix.contains(PATH_SEPARATORS) {
        return Ok((None, identifier));
    }
    if prefix.is_empty() {
        return Err(ResolveError::MalformedScheme {
            identifier: identifier.to_string(),
            reason: "identifier starts with the scheme separator".to_string(),
        });
    }
    Ok((Some(prefix), &identifier[pos + SCHEME_SEPARATOR.len_utf8()..]))
}
