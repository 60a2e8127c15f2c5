//! Tests for backend dispatch, relocation and assembly.

use super::*;
use crate::core::{ConfigError, ResolveError};
use crate::resource::Resource;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Succeeds for every path, echoing the path it was handed as content and
/// counting invocations. Lets tests assert exactly what the dispatcher
/// delegated.
#[derive(Default)]
struct EchoResolver {
    calls: AtomicUsize,
}

impl ResourceResolver for EchoResolver {
    fn resolve(&self, path: &str) -> Result<Resource, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Resource::new(path, path.as_bytes().to_vec()))
    }
}

fn received_path(resolver: &CompositeResolver, identifier: &str) -> String {
    resolver.resolve(identifier).unwrap().text().unwrap().to_string()
}

#[test]
fn prefix_is_stripped_for_scheme_entries() {
    let resolver = ResolverConfig::new(vec![
        BackendSpec::verbatim("classpath", EchoResolver::default()),
        BackendSpec::verbatim("file", EchoResolver::default()),
    ])
    .build()
    .unwrap();

    assert_eq!(received_path(&resolver, "classpath:/email/hello.html"), "/email/hello.html");
    assert_eq!(received_path(&resolver, "file:/tmp/hello.html"), "/tmp/hello.html");
}

#[test]
fn schemeless_identifier_goes_to_default_entry_unchanged() {
    let resolver = ResolverConfig::new(vec![
        BackendSpec::verbatim("classpath", EchoResolver::default()),
        BackendSpec::verbatim("", EchoResolver::default()),
    ])
    .build()
    .unwrap();

    assert_eq!(received_path(&resolver, "/email/hello.html"), "/email/hello.html");
}

#[test]
fn first_scheme_match_wins_in_registration_order() {
    let first = Arc::new(EchoResolver::default());
    let resolver = ResolverConfig::new(vec![
        BackendSpec::verbatim("classpath", Arc::clone(&first)),
        BackendSpec::verbatim("file", EchoResolver::default()),
    ])
    .build()
    .unwrap();

    resolver.resolve("classpath:x").unwrap();
    assert_eq!(first.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn unknown_scheme_is_unresolvable() {
    let resolver =
        ResolverConfig::new(vec![BackendSpec::verbatim("classpath", EchoResolver::default())])
            .build()
            .unwrap();

    let err = resolver.resolve("jndi:/email/hello.html").unwrap_err();
    match err {
        ResolveError::UnresolvableScheme { scheme, identifier } => {
            assert_eq!(scheme, "jndi");
            assert_eq!(identifier, "jndi:/email/hello.html");
        }
        other => panic!("expected UnresolvableScheme, got {other:?}"),
    }
}

#[test]
fn schemeless_identifier_without_default_entry_is_unresolvable() {
    let resolver =
        ResolverConfig::new(vec![BackendSpec::verbatim("classpath", EchoResolver::default())])
            .build()
            .unwrap();

    let err = resolver.resolve("/email/hello.html").unwrap_err();
    assert!(matches!(err, ResolveError::UnresolvableScheme { scheme, .. } if scheme.is_empty()));
}

#[test]
fn scheme_matching_is_case_sensitive() {
    let resolver =
        ResolverConfig::new(vec![BackendSpec::verbatim("classpath", EchoResolver::default())])
            .build()
            .unwrap();

    assert!(resolver.resolve("ClassPath:/email/hello.html").is_err());
}

#[test]
fn backend_miss_is_not_retried_on_other_entries() {
    let fallback = Arc::new(EchoResolver::default());
    let resolver = ResolverConfig::new(vec![
        BackendSpec::verbatim("classpath", EmbeddedResolver::new()),
        BackendSpec::verbatim("", Arc::clone(&fallback)),
    ])
    .build()
    .unwrap();

    let err = resolver.resolve("classpath:/email/missing.html").unwrap_err();
    assert!(matches!(err, ResolveError::ResourceNotFound { .. }));
    assert_eq!(fallback.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn malformed_identifier_is_rejected_before_dispatch() {
    let counter = Arc::new(EchoResolver::default());
    let resolver =
        ResolverConfig::new(vec![BackendSpec::verbatim("", Arc::clone(&counter))]).build().unwrap();

    let err = resolver.resolve(":/email/hello.html").unwrap_err();
    assert!(matches!(err, ResolveError::MalformedScheme { .. }));
    assert_eq!(counter.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn colon_after_path_separator_routes_to_default_entry_whole() {
    let resolver =
        ResolverConfig::new(vec![BackendSpec::verbatim("", EchoResolver::default())])
            .build()
            .unwrap();

    assert_eq!(received_path(&resolver, "logs/app:latest.txt"), "logs/app:latest.txt");
}

#[test]
fn empty_relocation_settings_leave_entries_untouched() {
    let resolver = ResolverConfig::new(vec![
        BackendSpec::relocatable("classpath", EchoResolver::default()),
    ])
    .with_relocation(RelocationSettings::default())
    .build()
    .unwrap();

    // Identity assembly: relocation-capable or not, the path passes through.
    assert_eq!(received_path(&resolver, "classpath:create_account"), "create_account");
}

#[test]
fn relocation_wraps_capable_entries_and_skips_verbatim_ones() {
    let resolver = ResolverConfig::new(vec![
        BackendSpec::relocatable("classpath", EchoResolver::default()),
        BackendSpec::verbatim("string", LiteralResolver),
    ])
    .with_relocation(RelocationSettings::new("/foo/template/", ".html"))
    .build()
    .unwrap();

    assert_eq!(
        received_path(&resolver, "classpath:create_account"),
        "/foo/template/create_account.html"
    );
    // Literal content must never be mangled by relocation.
    assert_eq!(received_path(&resolver, "string:Hello {name}"), "Hello {name}");
}

#[test]
fn relocation_is_plain_concatenation() {
    let resolver = ResolverConfig::new(vec![BackendSpec::relocatable(
        "classpath",
        EchoResolver::default(),
    )])
    .with_relocation(RelocationSettings::new("/foo/template", ".html"))
    .build()
    .unwrap();

    // The caller owns the separator; none is inserted for them.
    assert_eq!(received_path(&resolver, "classpath:create_account"), "/foo/templatecreate_account.html");
}

#[test]
fn relocation_with_only_extension_applies() {
    let resolver = ResolverConfig::new(vec![BackendSpec::relocatable(
        "classpath",
        EchoResolver::default(),
    )])
    .with_relocation(RelocationSettings::new("", ".html"))
    .build()
    .unwrap();

    assert_eq!(received_path(&resolver, "classpath:create_account"), "create_account.html");
}

#[test]
fn duplicate_scheme_fails_assembly() {
    let err = ResolverConfig::new(vec![
        BackendSpec::verbatim("classpath", EchoResolver::default()),
        BackendSpec::verbatim("classpath", EchoResolver::default()),
    ])
    .build()
    .unwrap_err();

    assert!(matches!(err, ConfigError::DuplicateScheme { scheme } if scheme == "classpath"));
}

#[test]
fn second_default_entry_fails_assembly() {
    let err = ResolverConfig::new(vec![
        BackendSpec::verbatim("", EchoResolver::default()),
        BackendSpec::verbatim("", EchoResolver::default()),
    ])
    .build()
    .unwrap_err();

    assert!(matches!(err, ConfigError::DuplicateScheme { scheme } if scheme.is_empty()));
}

#[test]
fn scheme_containing_separator_fails_assembly() {
    let err = ResolverConfig::new(vec![BackendSpec::verbatim(
        "class:path",
        EchoResolver::default(),
    )])
    .build()
    .unwrap_err();

    assert!(matches!(err, ConfigError::MalformedScheme { .. }));
}

#[test]
fn scheme_containing_path_separator_fails_assembly() {
    let err = ResolverConfig::new(vec![BackendSpec::verbatim(
        "class/path",
        EchoResolver::default(),
    )])
    .build()
    .unwrap_err();

    assert!(matches!(err, ConfigError::MalformedScheme { .. }));
}

#[test]
fn embedded_resolver_returns_registered_content() {
    let assets = EmbeddedResolver::new()
        .with_asset("/email/hello.html", b"<p>Hello</p>".as_slice());

    let resource = assets.resolve("/email/hello.html").unwrap();
    assert_eq!(resource.content(), b"<p>Hello</p>");
    assert_eq!(resource.path(), "/email/hello.html");

    let err = assets.resolve("/email/missing.html").unwrap_err();
    assert!(matches!(err, ResolveError::ResourceNotFound { .. }));
}

#[test]
fn file_resolver_reads_relative_to_base_dir() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("hello.html"), "<p>Hello</p>").unwrap();

    let resolver = FileResolver::with_base_dir(dir.path());
    let resource = resolver.resolve("hello.html").unwrap();
    assert_eq!(resource.content(), b"<p>Hello</p>");
    assert_eq!(resource.path(), "hello.html");
}

#[test]
fn file_resolver_maps_absence_to_resource_not_found() {
    let dir = TempDir::new().unwrap();
    let resolver = FileResolver::with_base_dir(dir.path());

    let err = resolver.resolve("missing.html").unwrap_err();
    match err {
        ResolveError::ResourceNotFound { path } => assert!(path.contains("missing.html")),
        other => panic!("expected ResourceNotFound, got {other:?}"),
    }
}

#[test]
fn literal_resolver_echoes_its_path_as_content() {
    let resource = LiteralResolver.resolve("Hello from courier").unwrap();
    assert_eq!(resource.content(), b"Hello from courier");
}

#[test]
fn composite_resolvers_are_shareable_across_threads() {
    let resolver = Arc::new(
        ResolverConfig::new(vec![BackendSpec::verbatim("string", LiteralResolver)])
            .build()
            .unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let resolver = Arc::clone(&resolver);
            std::thread::spawn(move || {
                let resource = resolver.resolve(&format!("string:msg-{i}")).unwrap();
                assert_eq!(resource.text().unwrap(), format!("msg-{i}"));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn relocation_settings_deserialize_from_toml() {
    let settings: RelocationSettings =
        toml::from_str("parent_path = \"/foo/template/\"\nextension = \".html\"\n").unwrap();
    assert_eq!(settings, RelocationSettings::new("/foo/template/", ".html"));

    // Missing fields default to empty, i.e. "no relocation requested".
    let empty: RelocationSettings = toml::from_str("").unwrap();
    assert!(empty.is_empty());
}
