//! Contract suite generator for mutable ordered collections
//!
//! Consumes a collection factory, a resolved feature closure, and the sample
//! pool, and produces the complete indexed-insertion test matrix as
//! scenario-grouped, independently runnable test cases. Execution and
//! reporting belong to an external runner; this crate only describes the
//! checks.

#![warn(clippy::all)]

pub mod case;
pub mod fixtures;
pub mod insert;
pub mod sut;

pub use case::{CaseName, ScenarioGroup, TestCase};
pub use insert::{
    InsertAtIndexSuite, SuiteConfig, DOES_NOT_SUPPORT_INSERT_AT_INDEX,
    DOES_NOT_SUPPORT_INSERT_AT_INDEX_WITH_NULL, REJECTS_NULL_INSERT_AT_INDEX,
    SUPPORTS_INSERT_AT_INDEX, SUPPORTS_INSERT_AT_INDEX_WITH_NULL,
};
pub use sut::{Element, ListCursor, TestList, TestListFactory};
