//! Error types for the conformance engine
//!
//! Three concerns are kept apart: rejections raised by the collection under
//! test (`OpRejection`), mismatches raised by the engine when an observed
//! outcome contradicts the derived expectation (`Violation`), and fatal
//! configuration errors reported at suite construction (`ConfigError`).
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.

use crate::size::CollectionSize;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of running one generated check. `Err` carries the only error kind
/// that is ever surfaced to an external runner as a test failure.
pub type CheckResult = std::result::Result<(), Violation>;

/// A rejection raised by the collection under test.
///
/// Checks consume these locally: a rejection matching the expected kind is a
/// pass, anything else becomes a [`Violation`]. Rejections never propagate
/// past the check boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OpRejection {
    /// The operation is not supported by this implementation.
    #[error("unsupported operation: {operation}")]
    Unsupported {
        /// Name of the rejected operation
        operation: String,
    },

    /// An otherwise-supported operation was attempted with an invalid index.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds {
        /// The offending index
        index: i64,
        /// Collection length at the time of the attempt
        len: usize,
    },

    /// An iteration cursor detected that the underlying collection was
    /// structurally modified after the cursor was obtained.
    #[error("collection was structurally modified during iteration")]
    ConcurrentModification,
}

impl OpRejection {
    /// Shorthand for an unsupported-operation rejection.
    pub fn unsupported(operation: impl Into<String>) -> Self {
        OpRejection::Unsupported {
            operation: operation.into(),
        }
    }

    /// The comparison key used by expectations.
    pub fn kind(&self) -> RejectionKind {
        match self {
            OpRejection::Unsupported { .. } => RejectionKind::Unsupported,
            OpRejection::OutOfBounds { .. } => RejectionKind::OutOfBounds,
            OpRejection::ConcurrentModification => RejectionKind::ConcurrentModification,
        }
    }
}

/// The kind of a rejection, stripped of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionKind {
    /// Capability missing for the attempted operation
    Unsupported,
    /// Invalid index on a supported operation
    OutOfBounds,
    /// Structural modification detected mid-iteration
    ConcurrentModification,
}

/// A mismatch between the derived expectation and the observed outcome.
///
/// Raised by the engine itself, never by the collection under test.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The mutation succeeded but produced the wrong sequence.
    #[error("expected sequence {expected}, got {actual}")]
    SequenceMismatch {
        /// Rendered expected sequence
        expected: String,
        /// Rendered observed sequence
        actual: String,
    },

    /// The operation was expected to succeed but was rejected.
    #[error("expected the operation to succeed, but it was rejected: {rejection}")]
    UnexpectedRejection {
        /// The rejection that was observed
        rejection: OpRejection,
    },

    /// The operation was expected to be rejected but succeeded.
    #[error("expected a {expected:?} rejection, but the operation succeeded")]
    UnexpectedSuccess {
        /// The rejection kind that was expected
        expected: RejectionKind,
    },

    /// The operation was rejected, but with the wrong kind.
    #[error("expected a {expected:?} rejection, got: {actual}")]
    WrongRejection {
        /// The rejection kind that was expected
        expected: RejectionKind,
        /// The rejection that was observed
        actual: OpRejection,
    },

    /// A rejected operation left the collection in a different state.
    #[error("collection changed after a rejected operation: before {before}, after {after}")]
    ChangedAfterRejection {
        /// Rendered sequence before the attempt
        before: String,
        /// Rendered sequence after the attempt
        after: String,
    },
}

/// Fatal configuration error, reported synchronously at construction.
///
/// There is no partial or degraded generation mode; construction either
/// yields a fully usable suite or fails with one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The sample pool contains two equal elements.
    #[error("sample elements must be pairwise distinct")]
    DuplicateSamples,

    /// No size classes were declared.
    #[error("no collection size classes declared")]
    NoSizes,

    /// The same size class was declared more than once.
    #[error("collection size class declared twice: {0:?}")]
    DuplicateSize(CollectionSize),
}
