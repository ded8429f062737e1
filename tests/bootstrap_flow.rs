//! End-to-end bootstrap flow against recording fakes

mod common;

use common::{RecordingProvider, StaticDocument};
use marginalia::{Bootstrapper, Config, FailurePolicy, PageLocation};

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marginalia=debug".into()),
        )
        .with_test_writer()
        .try_init()
        .ok();
}

#[test]
fn page_load_registers_store_with_stripped_uri() {
    init_tracing();

    let mut config = Config::default();
    config.store.prefix = "http://annotations.example.org:5000".to_string();

    let document = StaticDocument::with_body();
    let provider = RecordingProvider::new();
    let bootstrapper = Bootstrapper::new(config);
    let location = PageLocation::new("https://example.com/report#chapter3");

    let capability = bootstrapper
        .on_document_ready(&document, &provider, &location)
        .unwrap()
        .expect("annotation support should attach");
    assert_eq!(capability.root, "body");

    let registrations = provider.registrations.borrow();
    assert_eq!(registrations.len(), 1);

    let (name, store) = &registrations[0];
    assert_eq!(name, "Store");
    assert_eq!(store["prefix"], "http://annotations.example.org:5000");
    assert_eq!(store["annotationData"]["uri"], "https://example.com/report");
    assert_eq!(store["loadFromSearch"]["uri"], "https://example.com/report");
    assert_eq!(store["loadFromSearch"]["limit"], 20);
}

#[test]
fn second_ready_event_is_a_logged_no_op() {
    init_tracing();

    let document = StaticDocument::with_body();
    let provider = RecordingProvider::new();
    let bootstrapper = Bootstrapper::new(Config::default());
    let location = PageLocation::new("https://example.com/report");

    let first = bootstrapper
        .on_document_ready(&document, &provider, &location)
        .unwrap();
    assert!(first.is_some());

    // In-page navigation fires the host hook again; nothing re-registers.
    let second = bootstrapper
        .on_document_ready(&document, &provider, &location)
        .unwrap();
    assert!(second.is_none());
    assert_eq!(provider.registrations.borrow().len(), 1);
}

#[test]
fn broken_library_respects_policy() {
    init_tracing();

    let document = StaticDocument::with_body();
    let location = PageLocation::new("https://example.com/report");

    let lenient = Bootstrapper::new(Config::default());
    let result = lenient
        .on_document_ready(&document, &RecordingProvider::broken(), &location)
        .unwrap();
    assert!(result.is_none());

    let mut strict_config = Config::default();
    strict_config.policy = FailurePolicy::FailFast;
    let strict = Bootstrapper::new(strict_config);
    let result = strict.on_document_ready(&document, &RecordingProvider::broken(), &location);
    assert!(result.is_err());
}

#[test]
fn missing_root_under_fail_fast() {
    init_tracing();

    let mut config = Config::default();
    config.policy = FailurePolicy::FailFast;
    let bootstrapper = Bootstrapper::new(config);

    let result = bootstrapper.on_document_ready(
        &StaticDocument::without_root(),
        &RecordingProvider::new(),
        &PageLocation::new("https://example.com/report"),
    );
    assert!(result.is_err());
}

#[test]
fn config_reads_environment_overrides() {
    std::env::set_var("ANNOTATION_STORE_PREFIX", "https://notes.internal:5000");
    std::env::set_var("ANNOTATION_SEARCH_LIMIT", "50");
    std::env::set_var("ANNOTATION_FAILURE_POLICY", "failfast");

    let config = Config::from_env();
    assert_eq!(config.store.prefix, "https://notes.internal:5000");
    assert_eq!(config.store.search_limit, 50);
    assert_eq!(config.policy, FailurePolicy::FailFast);

    std::env::remove_var("ANNOTATION_STORE_PREFIX");
    std::env::remove_var("ANNOTATION_SEARCH_LIMIT");
    std::env::remove_var("ANNOTATION_FAILURE_POLICY");
}
