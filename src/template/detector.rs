//! Detectors deciding whether an engine can parse a template.

use crate::resource::Resource;
use regex::Regex;
use tracing::debug;

/// Decides whether a template engine can parse a given template.
///
/// Detection sees both the template name (the resolved lookup path) and the
/// already-resolved content, so a detector may use either. Detection is
/// infallible: the content is in memory, and a template that cannot be
/// examined is simply one the engine cannot parse.
pub trait TemplateEngineDetector: Send + Sync {
    /// Whether the engine behind this detector can parse `template`.
    fn can_parse(&self, template_name: &str, template: &Resource) -> bool;
}

/// Detector matching the template name against a list of extensions.
///
/// Accepts a template whose name ends with any of the configured extensions,
/// case-sensitively. Typical engines register a single extension.
#[derive(Debug, Clone)]
pub struct ExtensionDetector {
    extensions: Vec<String>,
}

impl ExtensionDetector {
    /// Creates a detector for a single extension (including its dot).
    pub fn new(extension: impl Into<String>) -> Self {
        Self { extensions: vec![extension.into()] }
    }

    /// Creates a detector accepting any of the given extensions.
    pub fn with_extensions(extensions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self { extensions: extensions.into_iter().map(Into::into).collect() }
    }
}

impl TemplateEngineDetector for ExtensionDetector {
    fn can_parse(&self, template_name: &str, _template: &Resource) -> bool {
        for extension in &self.extensions {
            if template_name.ends_with(extension) {
                debug!("Template '{}' ends with '{}', engine accepted", template_name, extension);
                return true;
            }
        }
        debug!("Template '{}' matches none of {:?}, engine rejected", template_name, self.extensions);
        false
    }
}

/// Detector scanning template content for a marker pattern.
///
/// Scans the content line by line and accepts at the first line matching the
/// configured pattern. Content that is not valid UTF-8 is scanned lossily; a
/// marker can only match where the bytes decode cleanly.
#[derive(Debug, Clone)]
pub struct MarkerDetector {
    marker: Regex,
}

impl MarkerDetector {
    /// Creates a detector for an arbitrary marker pattern.
    #[must_use]
    pub fn new(marker: Regex) -> Self {
        Self { marker }
    }

    /// Creates a detector for an XML namespace declaration.
    ///
    /// Matches any `xmlns`-prefixed attribute bound to `namespace`, the way
    /// XML-dialect template engines mark their templates.
    pub fn xml_namespace(namespace: &str) -> Result<Self, regex::Error> {
        let pattern = format!("xmlns[^=]*=\\s*\"{}\"", regex::escape(namespace));
        Ok(Self { marker: Regex::new(&pattern)? })
    }
}

impl TemplateEngineDetector for MarkerDetector {
    fn can_parse(&self, template_name: &str, template: &Resource) -> bool {
        let content = String::from_utf8_lossy(template.content());
        for line in content.lines() {
            if self.marker.is_match(line) {
                debug!("Template '{}' contains marker '{}', engine accepted", template_name, self.marker);
                return true;
            }
        }
        debug!("Template '{}' does not contain marker '{}', engine rejected", template_name, self.marker);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(content: &str) -> Resource {
        Resource::new("tmpl", content.as_bytes().to_vec())
    }

    #[test]
    fn extension_detector_accepts_configured_extension() {
        let detector = ExtensionDetector::new(".ftl");
        assert!(detector.can_parse("email/hello.ftl", &resource("<p>${name}</p>")));
        assert!(!detector.can_parse("email/hello.html", &resource("<p>${name}</p>")));
    }

    #[test]
    fn extension_detector_accepts_any_of_several() {
        let detector = ExtensionDetector::with_extensions([".ftl", ".ftlh"]);
        assert!(detector.can_parse("hello.ftlh", &resource("")));
        assert!(!detector.can_parse("hello.txt", &resource("")));
    }

    #[test]
    fn extension_matching_is_case_sensitive() {
        let detector = ExtensionDetector::new(".ftl");
        assert!(!detector.can_parse("hello.FTL", &resource("")));
    }

    #[test]
    fn marker_detector_finds_namespace_on_any_line() {
        let detector = MarkerDetector::xml_namespace("http://www.thymeleaf.org").unwrap();
        let template = resource(
            "<!DOCTYPE html>\n<html xmlns:th=\"http://www.thymeleaf.org\">\n<body/></html>",
        );
        assert!(detector.can_parse("hello.html", &template));
    }

    #[test]
    fn marker_detector_rejects_content_without_marker() {
        let detector = MarkerDetector::xml_namespace("http://www.thymeleaf.org").unwrap();
        assert!(!detector.can_parse("hello.html", &resource("<html><body/></html>")));
    }

    #[test]
    fn marker_detector_tolerates_invalid_utf8() {
        let detector = MarkerDetector::xml_namespace("http://www.thymeleaf.org").unwrap();
        let template = Resource::new("tmpl", vec![0xff, 0xfe, 0xfd]);
        assert!(!detector.can_parse("tmpl", &template));
    }
}
