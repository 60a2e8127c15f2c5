//! Scheme-based resource resolution for messaging templates.
//!
//! `courier-resolve` routes a logical resource identifier (a short string naming
//! a template, a file, or inline literal text) to the backend that owns it, and
//! produces either the concrete resource bytes or a resolved lookup path.
//! Consumers are template engines and message senders that must read resource
//! content without knowing in advance whether it lives in an embedded asset
//! set, on the filesystem, or inline in the identifier itself.
//!
//! # Resolution Model
//!
//! Resolution is based on a *scheme*: a short, case-sensitive prefix terminated
//! by `:`. For example, in `classpath:/email/hello.html` the scheme is
//! `classpath` and the path is `/email/hello.html`. An identifier without a
//! scheme (`/email/hello.html`) is routed to the backend registered under the
//! empty scheme, if any.
//!
//! Dispatch is authoritative, not trial-and-error: the first backend whose
//! scheme matches handles the identifier, and a miss inside that backend is
//! reported to the caller rather than being retried against other backends.
//! The one place where misses are routine is variant probing (see [`variant`]),
//! which tries several naming strategies for an alternate form of a template
//! and keeps the first candidate that actually exists.
//!
//! # Core Modules
//!
//! - [`core`] - Error types shared across the crate
//! - [`resource`] - Resolved resource content and identifier parsing
//! - [`resolver`] - Backend resolvers, relocation, scheme dispatch and assembly
//! - [`variant`] - Variant naming strategies and existence-probing fallback
//! - [`template`] - Template engine detection by name or content
//!
//! # Examples
//!
//! ```rust
//! use courier_resolve::resolver::{
//!     BackendSpec, EmbeddedResolver, LiteralResolver, RelocationSettings, ResolverConfig,
//!     ResourceResolver,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let assets = EmbeddedResolver::new()
//!     .with_asset("/foo/template/create_account.html", b"<p>Welcome!</p>".as_slice());
//!
//! let resolver = ResolverConfig::new(vec![
//!     BackendSpec::relocatable("classpath", assets),
//!     BackendSpec::verbatim("string", LiteralResolver),
//! ])
//! .with_relocation(RelocationSettings::new("/foo/template/", ".html"))
//! .build()?;
//!
//! // Relocatable backends see the bare name rewritten to a full path.
//! let page = resolver.resolve("classpath:create_account")?;
//! assert_eq!(page.content(), b"<p>Welcome!</p>");
//!
//! // Literal backends receive their "path" untouched: it is the content.
//! let inline = resolver.resolve("string:Hello from courier")?;
//! assert_eq!(inline.content(), b"Hello from courier");
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod resolver;
pub mod resource;
pub mod template;
pub mod variant;
