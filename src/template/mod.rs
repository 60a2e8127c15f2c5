//! Template engine detection.
//!
//! When several template engines are wired into the messaging stack, each one
//! declares a [`TemplateEngineDetector`] and the first detector that accepts
//! a template decides which engine parses it. Two detection styles are
//! shipped, matching the two conventions engines actually use:
//!
//! - [`ExtensionDetector`] - the engine owns one or more file extensions.
//! - [`MarkerDetector`] - the engine's templates carry a recognizable marker
//!   in their content, such as an XML namespace declaration.

mod detector;

pub use detector::{ExtensionDetector, MarkerDetector, TemplateEngineDetector};
