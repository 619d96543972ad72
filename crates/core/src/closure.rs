//! Feature-set closure resolution
//!
//! [`FeatureSet`] is an insertion-ordered duplicate-free set; order matters
//! because downstream naming must be deterministic. [`resolve_closure`]
//! expands a declared set to its full transitive implication closure with a
//! breadth-first walk. Membership in the result set gates re-enqueueing, so
//! each feature is expanded exactly once and a cyclic implication graph
//! cannot loop.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::features::{Feature, ImpliedFeatures};

/// An insertion-ordered set of features.
#[derive(Debug, Clone, Default)]
pub struct FeatureSet {
    order: Vec<Feature>,
    members: FxHashSet<Feature>,
}

impl FeatureSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        FeatureSet::default()
    }

    /// Adds a feature, returning whether it was newly inserted.
    pub fn insert(&mut self, feature: impl Into<Feature>) -> bool {
        let feature = feature.into();
        if self.members.insert(feature) {
            self.order.push(feature);
            true
        } else {
            false
        }
    }

    /// Whether the set contains the given feature.
    pub fn contains(&self, feature: impl Into<Feature>) -> bool {
        self.members.contains(&feature.into())
    }

    /// Whether the set contains every given feature.
    pub fn contains_all<I>(&self, features: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<Feature>,
    {
        features.into_iter().all(|feature| self.contains(feature))
    }

    /// Members in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        self.order.iter().copied()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<F: Into<Feature>> FromIterator<F> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        let mut set = FeatureSet::new();
        for feature in iter {
            set.insert(feature);
        }
        set
    }
}

impl<'a> IntoIterator for &'a FeatureSet {
    type Item = Feature;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Feature>>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter().copied()
    }
}

/// Expands a declared feature set to its full transitive implication closure.
///
/// The result is inflationary (it contains at least the input), duplicate
/// free, and preserves first-seen order: declared features first, then
/// implied features in breadth-first discovery order. Resolution cannot
/// fail; a feature implying itself is absorbed by the membership check.
pub fn resolve_closure<I>(declared: I) -> FeatureSet
where
    I: IntoIterator,
    I::Item: Into<Feature>,
{
    let mut closure = FeatureSet::new();
    let mut queue: VecDeque<Feature> = VecDeque::new();
    for feature in declared {
        let feature = feature.into();
        if closure.insert(feature) {
            queue.push_back(feature);
        }
    }

    while let Some(next) = queue.pop_front() {
        for &implied in next.implied_features() {
            if closure.insert(implied) {
                trace!(from = ?next, to = ?implied, "implied feature added to closure");
                queue.push_back(implied);
            }
        }
    }

    closure
}
