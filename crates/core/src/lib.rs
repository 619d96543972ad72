//! Core vocabulary for the collection conformance engine
//!
//! This crate defines the foundational types consumed by the suite
//! generator:
//! - Feature families and their implication edges
//! - FeatureSet: insertion-ordered set with breadth-first closure resolution
//! - CollectionSize: fixture size classes
//! - SampleElements: the fixed pool of distinct sample values
//! - Error taxonomy: OpRejection, Violation, ConfigError

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod closure;
pub mod error;
pub mod features;
pub mod samples;
pub mod size;

pub use closure::{resolve_closure, FeatureSet};
pub use error::{CheckResult, ConfigError, OpRejection, RejectionKind, Violation};
pub use features::{CollectionFeature, Feature, ImpliedFeatures, ListFeature};
pub use samples::SampleElements;
pub use size::CollectionSize;
