//! Variant naming strategies and existence-probing fallback.
//!
//! A template may exist in several alternate forms: a per-locale translation,
//! a per-device rendering, or some application-specific variant. The naming
//! convention for those forms is speculative (`hello_fr.html`?
//! `fr/hello.html`?), so the only way to pick one is to try the conventions
//! in priority order and keep the first candidate that actually exists.
//!
//! - [`Variant`] - the tag carried by a [`TemplateRef`] (locale, device, or
//!   a custom string).
//! - [`VariantStrategy`] - a pure naming convention: template reference in,
//!   candidate path out.
//! - [`FirstExistingVariantResolver`] - probes each strategy's candidate
//!   through a resource locator and returns the first existing one, falling
//!   back to a default strategy without probing it.
//!
//! Probe misses are routine outcomes here, not faults: they are absorbed
//! inside the resolver and never surface to callers.

mod strategy;


pub use strategy::{DefaultStrategy, SubdirStrategy, SuffixStrategy};

use crate::resolver::ResourceResolver;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The variant tag of a template: which alternate form is wanted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// A per-locale form, tagged with a language code (`fr`, `en-US`, ...)
    Locale(String),
    /// A per-device form, tagged with a device class (`mobile`, ...)
    Device(String),
    /// An application-defined form
    Custom(String),
}

impl Variant {
    /// The raw tag, whatever its kind.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Locale(tag) | Self::Device(tag) | Self::Custom(tag) => tag,
        }
    }
}

/// A reference to a template: its path plus an optional variant tag.
///
/// References without a variant tag bypass the fallback machinery entirely;
/// their literal path is used unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRef {
    path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    variant: Option<Variant>,
}

impl TemplateRef {
    /// Creates a reference without a variant tag.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), variant: None }
    }

    /// Creates a reference carrying a variant tag.
    pub fn with_variant(path: impl Into<String>, variant: Variant) -> Self {
        Self { path: path.into(), variant: Some(variant) }
    }

    /// The literal template path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The variant tag, if any.
    #[must_use]
    pub fn variant(&self) -> Option<&Variant> {
        self.variant.as_ref()
    }
}

/// A naming convention for the variant form of a template.
///
/// Strategies are pure: same reference in, same candidate path out, no I/O.
/// Existence is somebody else's business (the probing loop in
/// [`FirstExistingVariantResolver`]).
pub trait VariantStrategy: Send + Sync {
    /// The candidate path this convention produces for `template`.
    fn real_path(&self, template: &TemplateRef) -> String;
}

/// Picks the first variant path that actually exists.
///
/// Given ordered naming strategies and a default strategy, resolves a
/// [`TemplateRef`] to a concrete lookup path:
///
/// 1. A reference without a variant tag short-circuits to its literal path;
///    no strategy is invoked, nothing is probed.
/// 2. Otherwise each strategy's candidate is probed through the locator in
///    order. The first candidate that resolves wins and later strategies are
///    never evaluated. Any probe error, not-found or otherwise, is absorbed
///    and means "try the next strategy".
/// 3. If every candidate misses, the default strategy's output is returned
///    without probing: it is assumed structurally valid, and an actual
///    absence surfaces later when the caller reads it.
///
/// Strategy order encodes priority (e.g. prefer the device-specific form over
/// the locale-specific one); the caller-supplied order is authoritative.
///
/// `real_path` is infallible: for a well-formed default strategy there is
/// always an answer.
pub struct FirstExistingVariantResolver {
    locator: Box<dyn ResourceResolver>,
    strategies: Vec<Box<dyn VariantStrategy>>,
    default_strategy: Box<dyn VariantStrategy>,
}

impl FirstExistingVariantResolver {
    /// Creates a resolver probing `strategies` in order through `locator`.
    pub fn new(
        locator: impl ResourceResolver + 'static,
        strategies: Vec<Box<dyn VariantStrategy>>,
        default_strategy: impl VariantStrategy + 'static,
    ) -> Self {
        Self {
            locator: Box::new(locator),
            strategies,
            default_strategy: Box::new(default_strategy),
        }
    }

    /// Resolves `template` to the concrete lookup path to use.
    pub fn real_path(&self, template: &TemplateRef) -> String {
        if template.variant().is_none() {
            return template.path().to_string();
        }
        for strategy in &self.strategies {
            let candidate = strategy.real_path(template);
            match self.locator.resolve(&candidate) {
                Ok(_) => {
                    debug!("Variant candidate '{}' exists, using it", candidate);
                    return candidate;
                }
                Err(err) => {
                    // Routine miss: the next convention gets its turn.
                    trace!("Variant candidate '{}' missed ({}), trying next strategy", candidate, err);
                }
            }
        }
        let fallback = self.default_strategy.real_path(template);
        debug!("No variant candidate exists, falling back to '{}'", fallback);
        fallback
    }
}

impl std::fmt::Debug for FirstExistingVariantResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirstExistingVariantResolver")
            .field("strategies", &self.strategies.len())
            .finish_non_exhaustive()
    }
}
