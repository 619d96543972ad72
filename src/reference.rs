//! Bundled reference implementation of the collection-under-test contract
//!
//! An array-backed list whose capabilities are derived from a resolved
//! feature set: insertion support, null support, and fail-fast iteration can
//! each be switched off to exercise every scenario group. Cursors share the
//! list state through `Rc<RefCell<..>>` and detect structural modification
//! with a counter bumped on every successful insertion.

use std::cell::RefCell;
use std::rc::Rc;

use conformance_core::{
    CollectionFeature, FeatureSet, ListFeature, OpRejection, SampleElements,
};
use conformance_engine::{Element, ListCursor, TestList, TestListFactory};

#[derive(Debug, Clone, Copy)]
struct Capabilities {
    insert_at_index: bool,
    null_elements: bool,
    fail_fast: bool,
}

impl Capabilities {
    fn from_features(features: &FeatureSet) -> Self {
        Capabilities {
            insert_at_index: features.contains(ListFeature::SupportsInsertAtIndex),
            null_elements: features.contains(CollectionFeature::AllowsNullValues),
            fail_fast: features.contains(CollectionFeature::FailsFastOnModification),
        }
    }
}

/// Factory producing [`ReferenceList`] instances whose behavior matches a
/// resolved feature set.
pub struct ReferenceListFactory<E> {
    samples: SampleElements<E>,
    capabilities: Capabilities,
}

impl<E: Element> ReferenceListFactory<E> {
    /// Builds a factory over the given sample pool.
    pub fn new(features: &FeatureSet, samples: SampleElements<E>) -> Self {
        ReferenceListFactory {
            samples,
            capabilities: Capabilities::from_features(features),
        }
    }
}

impl ReferenceListFactory<String> {
    /// Builds a factory over the default string sample pool.
    pub fn strings(features: &FeatureSet) -> Self {
        ReferenceListFactory::new(features, SampleElements::strings())
    }
}

impl<E: Element> TestListFactory<E> for ReferenceListFactory<E> {
    type List = ReferenceList<E>;

    fn samples(&self) -> &SampleElements<E> {
        &self.samples
    }

    fn create(&self, elements: Vec<Option<E>>) -> ReferenceList<E> {
        ReferenceList {
            state: Rc::new(RefCell::new(ListState {
                items: elements,
                mod_count: 0,
            })),
            capabilities: self.capabilities,
        }
    }
}

struct ListState<E> {
    items: Vec<Option<E>>,
    mod_count: u64,
}

/// Array-backed list under test.
pub struct ReferenceList<E> {
    state: Rc<RefCell<ListState<E>>>,
    capabilities: Capabilities,
}

/// Cursor over a [`ReferenceList`].
pub struct ReferenceCursor<E> {
    state: Rc<RefCell<ListState<E>>>,
    position: usize,
    expected_mod_count: u64,
    fail_fast: bool,
}

impl<E: Element> TestList<Option<E>> for ReferenceList<E> {
    type Cursor = ReferenceCursor<E>;

    fn len(&self) -> usize {
        self.state.borrow().items.len()
    }

    fn to_vec(&self) -> Vec<Option<E>> {
        self.state.borrow().items.clone()
    }

    fn insert_at(&mut self, index: i64, element: Option<E>) -> Result<(), OpRejection> {
        if !self.capabilities.insert_at_index {
            return Err(OpRejection::unsupported("insert_at"));
        }
        if element.is_none() && !self.capabilities.null_elements {
            return Err(OpRejection::unsupported("null elements"));
        }
        let mut state = self.state.borrow_mut();
        let len = state.items.len();
        if index < 0 || index as usize > len {
            return Err(OpRejection::OutOfBounds { index, len });
        }
        state.items.insert(index as usize, element);
        state.mod_count += 1;
        Ok(())
    }

    fn cursor(&self) -> ReferenceCursor<E> {
        let expected_mod_count = self.state.borrow().mod_count;
        ReferenceCursor {
            state: Rc::clone(&self.state),
            position: 0,
            expected_mod_count,
            fail_fast: self.capabilities.fail_fast,
        }
    }
}

impl<E: Element> ListCursor<Option<E>> for ReferenceCursor<E> {
    fn advance(&mut self) -> Result<Option<Option<E>>, OpRejection> {
        let state = self.state.borrow();
        if self.fail_fast && state.mod_count != self.expected_mod_count {
            return Err(OpRejection::ConcurrentModification);
        }
        if self.position >= state.items.len() {
            return Ok(None);
        }
        let item = state.items[self.position].clone();
        self.position += 1;
        Ok(Some(item))
    }
}
