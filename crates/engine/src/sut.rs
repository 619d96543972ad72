//! Contracts of the collection under test
//!
//! The engine depends only on these narrow traits, never on a concrete
//! collection implementation. Elements are carried as `Option<E>`: `None`
//! models the null element slot, `Some(e)` an ordinary value.

use std::fmt;

use conformance_core::{OpRejection, SampleElements};

/// Bounds required of a sample element type.
pub trait Element: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {}

impl<T: Clone + PartialEq + fmt::Debug + Send + Sync + 'static> Element for T {}

/// A mutable ordered collection being exercised by generated checks.
///
/// `insert_at` takes a signed index so that invalid negative indices are
/// expressible; a valid index satisfies `0 <= index <= len`. All failures
/// are reported as [`OpRejection`] values, never as panics.
pub trait TestList<T> {
    /// Cursor type returned by [`TestList::cursor`].
    type Cursor: ListCursor<T>;

    /// Current element count.
    fn len(&self) -> usize;

    /// Whether the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elementwise snapshot, in order, for value comparison.
    fn to_vec(&self) -> Vec<T>;

    /// Inserts `element` before position `index`, shifting everything from
    /// `index` onward right by one.
    ///
    /// # Errors
    ///
    /// Rejects with `Unsupported` when the capability is absent, or with
    /// `OutOfBounds` when the index is invalid.
    fn insert_at(&mut self, index: i64, element: T) -> Result<(), OpRejection>;

    /// Obtains a fresh iteration cursor positioned before the first element.
    fn cursor(&self) -> Self::Cursor;
}

/// An iteration cursor over a [`TestList`].
pub trait ListCursor<T> {
    /// Advances past the next element and yields it, or `None` once
    /// exhausted.
    ///
    /// A fail-fast cursor must check for structural modification before
    /// reporting exhaustion, so that a mutation is detected even when the
    /// cursor has no elements left to yield.
    ///
    /// # Errors
    ///
    /// Rejects with `ConcurrentModification` when the underlying collection
    /// was structurally modified after this cursor was obtained.
    fn advance(&mut self) -> Result<Option<T>, OpRejection>;
}

/// Factory producing fresh collections under test.
///
/// Each generated check builds its own fixture through this factory and owns
/// it exclusively; fixtures are never shared across checks. The factory must
/// be shareable across threads because the external runner may execute
/// checks in parallel.
pub trait TestListFactory<E>: Send + Sync {
    /// The collection type produced by this factory.
    type List: TestList<Option<E>>;

    /// The sample pool fixtures are built from.
    fn samples(&self) -> &SampleElements<E>;

    /// Builds a fresh collection holding exactly `elements`, in order.
    fn create(&self, elements: Vec<Option<E>>) -> Self::List;
}
