//! Capability features and their implication edges
//!
//! A feature is a capability flag that a collection implementation declares,
//! implying zero or more other features. Families are closed enums whose
//! implication edges are compile-time slices, so the graph is statically
//! enumerable; [`crate::closure::resolve_closure`] walks it breadth-first.

use serde::{Deserialize, Serialize};

/// Shared contract of every feature family: each variant carries a fixed
/// list of directly implied features.
pub trait ImpliedFeatures {
    /// Features directly implied by this one. Transitive implications are
    /// resolved by [`crate::closure::resolve_closure`].
    fn implied_features(&self) -> &'static [Feature];
}

/// Capabilities of any mutable collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectionFeature {
    /// `add` accepts new elements
    SupportsAdd,
    /// `remove` is supported
    SupportsRemove,
    /// Removal through an iteration cursor is supported
    SupportsIteratorRemove,
    /// Null elements may be stored
    AllowsNullValues,
    /// Null arguments to query operations are tolerated
    AllowsNullQueries,
    /// Iteration cursors detect structural modification
    FailsFastOnModification,
    /// Fully mutable general-purpose collection
    GeneralPurpose,
    /// The removal family of operations
    RemoveOperations,
}

/// Capabilities specific to ordered, index-addressable collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListFeature {
    /// `set(index, element)` is supported
    SupportsSet,
    /// `insert_at(index, element)` is supported
    SupportsInsertAtIndex,
    /// `remove_at(index)` is supported
    SupportsRemoveAtIndex,
    /// Fully mutable general-purpose list
    GeneralPurpose,
    /// The removal family of list operations
    RemoveOperations,
}

/// A feature from any family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    /// A collection-level capability
    Collection(CollectionFeature),
    /// A list-level capability
    List(ListFeature),
}

impl From<CollectionFeature> for Feature {
    fn from(feature: CollectionFeature) -> Self {
        Feature::Collection(feature)
    }
}

impl From<ListFeature> for Feature {
    fn from(feature: ListFeature) -> Self {
        Feature::List(feature)
    }
}

impl ImpliedFeatures for CollectionFeature {
    fn implied_features(&self) -> &'static [Feature] {
        use CollectionFeature::*;
        match self {
            AllowsNullValues => &[Feature::Collection(AllowsNullQueries)],
            GeneralPurpose => &[
                Feature::Collection(SupportsAdd),
                Feature::Collection(SupportsRemove),
                Feature::Collection(SupportsIteratorRemove),
            ],
            RemoveOperations => &[
                Feature::Collection(SupportsRemove),
                Feature::Collection(SupportsIteratorRemove),
            ],
            SupportsAdd | SupportsRemove | SupportsIteratorRemove | AllowsNullQueries
            | FailsFastOnModification => &[],
        }
    }
}

impl ImpliedFeatures for ListFeature {
    fn implied_features(&self) -> &'static [Feature] {
        use ListFeature::*;
        match self {
            SupportsInsertAtIndex => &[Feature::Collection(CollectionFeature::SupportsAdd)],
            SupportsRemoveAtIndex => &[Feature::Collection(CollectionFeature::SupportsRemove)],
            GeneralPurpose => &[
                Feature::Collection(CollectionFeature::GeneralPurpose),
                Feature::List(SupportsSet),
                Feature::List(SupportsInsertAtIndex),
                Feature::List(SupportsRemoveAtIndex),
            ],
            RemoveOperations => &[
                Feature::Collection(CollectionFeature::RemoveOperations),
                Feature::List(SupportsRemoveAtIndex),
            ],
            SupportsSet => &[],
        }
    }
}

impl ImpliedFeatures for Feature {
    fn implied_features(&self) -> &'static [Feature] {
        match self {
            Feature::Collection(feature) => feature.implied_features(),
            Feature::List(feature) => feature.implied_features(),
        }
    }
}
