//! Every generated case must pass against the matching reference list.

use crate::common::{
    full_features, insert_only_features, no_insert_features, run_all, suite_for,
};
use conformance::reference::ReferenceListFactory;
use conformance::{
    resolve_closure, CollectionSize, ConfigError, InsertAtIndexSuite, SuiteConfig,
};

#[test]
fn fully_capable_reference_passes_every_case() {
    let suite = suite_for(&full_features());
    let executed = run_all(suite.generate());
    // Two scenario groups of 18 matrix cells plus 3 fail-fast cases each.
    assert_eq!(executed, 42);
}

#[test]
fn insert_only_reference_passes_every_case() {
    let suite = suite_for(&insert_only_features());
    let executed = run_all(suite.generate());
    assert_eq!(executed, 25);
}

#[test]
fn non_inserting_reference_passes_every_case() {
    let suite = suite_for(&no_insert_features());
    let executed = run_all(suite.generate());
    assert_eq!(executed, 36);
}

#[test]
fn generation_is_restartable() {
    let suite = suite_for(&full_features());
    assert_eq!(run_all(suite.generate()), 42);
    // A second generation rebuilds fixtures fresh and passes again.
    assert_eq!(run_all(suite.generate()), 42);
}

#[test]
fn suite_can_cover_a_subset_of_sizes() -> anyhow::Result<()> {
    let features = resolve_closure(full_features());
    let factory = ReferenceListFactory::strings(&features);
    let mut config = SuiteConfig::new(factory, features);
    config.sizes = vec![CollectionSize::Several];
    let suite = InsertAtIndexSuite::new(config)?;
    let executed = run_all(suite.generate());
    // Every row keeps its Several cell; one fail-fast case per group.
    assert_eq!(executed, 18);
    Ok(())
}

#[test]
fn empty_size_declaration_is_rejected_at_construction() {
    let features = resolve_closure(full_features());
    let factory = ReferenceListFactory::strings(&features);
    let mut config = SuiteConfig::new(factory, features);
    config.sizes = vec![];
    let err = InsertAtIndexSuite::new(config).unwrap_err();
    assert_eq!(err, ConfigError::NoSizes);
}

#[test]
fn duplicate_size_declaration_is_rejected_at_construction() {
    let features = resolve_closure(full_features());
    let factory = ReferenceListFactory::strings(&features);
    let mut config = SuiteConfig::new(factory, features);
    config.sizes = vec![CollectionSize::Empty, CollectionSize::Empty];
    let err = InsertAtIndexSuite::new(config).unwrap_err();
    assert_eq!(err, ConfigError::DuplicateSize(CollectionSize::Empty));
}
