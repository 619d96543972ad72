//! Conformance - contract-testing toolkit for mutable ordered collections
//!
//! Given a factory for a collection under test and the capability features
//! the implementation declares, the toolkit generates an exhaustive, labeled
//! suite of executable checks for insertion at an arbitrary index.
//!
//! # Quick Start
//!
//! ```
//! use conformance::{
//!     resolve_closure, CollectionFeature, InsertAtIndexSuite, ListFeature, SuiteConfig,
//! };
//! use conformance::reference::ReferenceListFactory;
//!
//! let features = resolve_closure([
//!     conformance::Feature::List(ListFeature::GeneralPurpose),
//!     conformance::Feature::Collection(CollectionFeature::AllowsNullValues),
//! ]);
//! let factory = ReferenceListFactory::strings(&features);
//! let suite = InsertAtIndexSuite::new(SuiteConfig::new(factory, features))?;
//! for group in suite.generate() {
//!     for case in group {
//!         case.run()?;
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Architecture
//!
//! The vocabulary (features, closure resolution, size classes, samples,
//! error taxonomy) lives in `conformance-core`; the suite generator and the
//! collection-under-test traits live in `conformance-engine`. This crate
//! re-exports both and bundles a known-good [`reference`] implementation.

pub mod reference;

pub use conformance_core::{
    resolve_closure, CheckResult, CollectionFeature, CollectionSize, ConfigError, Feature,
    FeatureSet, ImpliedFeatures, ListFeature, OpRejection, RejectionKind, SampleElements,
    Violation,
};
pub use conformance_engine::{
    CaseName, Element, InsertAtIndexSuite, ListCursor, ScenarioGroup, SuiteConfig, TestCase,
    TestList, TestListFactory, DOES_NOT_SUPPORT_INSERT_AT_INDEX,
    DOES_NOT_SUPPORT_INSERT_AT_INDEX_WITH_NULL, REJECTS_NULL_INSERT_AT_INDEX,
    SUPPORTS_INSERT_AT_INDEX, SUPPORTS_INSERT_AT_INDEX_WITH_NULL,
};
