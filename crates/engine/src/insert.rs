//! Indexed-insertion contract suite
//!
//! The generator crosses size classes with insertion positions and element
//! kinds, consults the resolved feature set for the expected-outcome policy
//! of each cell, and emits one independently runnable [`TestCase`] per cell,
//! grouped by top-level scenario. Generation is pure and restartable: each
//! call to [`InsertAtIndexSuite::generate`] derives fixtures fresh.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use smallvec::SmallVec;
use tracing::debug;

use conformance_core::{
    CollectionFeature, CollectionSize, ConfigError, Feature, FeatureSet, ListFeature,
    RejectionKind, Violation,
};

use crate::case::{CaseName, Check, ScenarioGroup, TestCase};
use crate::fixtures::{
    elements_of_size, elements_with_null_in_middle, insert_into, middle_index, render_elements,
};
use crate::sut::{Element, ListCursor, TestList, TestListFactory};

/// Scenario: insertion at an index is supported.
pub const SUPPORTS_INSERT_AT_INDEX: &str = "Supports insert_at(int, E)";
/// Scenario: insertion at an index is supported and null elements are allowed.
pub const SUPPORTS_INSERT_AT_INDEX_WITH_NULL: &str =
    "Supports insert_at(int, E) with null element";
/// Scenario: insertion is supported but null elements are rejected.
pub const REJECTS_NULL_INSERT_AT_INDEX: &str =
    "Doesn't support insert_at(int, E) with new null element";
/// Scenario: insertion at an index is not supported.
pub const DOES_NOT_SUPPORT_INSERT_AT_INDEX: &str = "Doesn't support insert_at(int, E)";
/// Scenario: insertion at an index is not supported, exercised with nulls.
pub const DOES_NOT_SUPPORT_INSERT_AT_INDEX_WITH_NULL: &str =
    "Doesn't support insert_at(int, E) with null element";

const SUPPORTS_AT_START_NEW: &str =
    "Supports insert_at(0, E) with new element: size: {size}, elements: {elements}";
const SUPPORTS_AT_END_NEW: &str =
    "Supports insert_at(size, E) with new element: size: {size}, elements: {elements}";
const SUPPORTS_AT_MIDDLE_NEW: &str =
    "Supports insert_at(size / 2, E) with new element: size: {size}, elements: {elements}";
const SUPPORTS_AT_START_EXISTING: &str =
    "Supports insert_at(0, E) with existing element: size: {size}, elements: {elements}";
const SUPPORTS_AT_END_EXISTING: &str =
    "Supports insert_at(size, E) with existing element: size: {size}, elements: {elements}";
const SUPPORTS_AT_MIDDLE_EXISTING: &str =
    "Supports insert_at(size / 2, E) with existing element: size: {size}, elements: {elements}";
const SUPPORTS_AT_START_NEW_NULL: &str =
    "Supports insert_at(0, E) with new null element: size: {size}, elements: {elements}";
const SUPPORTS_AT_END_NEW_NULL: &str =
    "Supports insert_at(size, E) with new null element: size: {size}, elements: {elements}";
const SUPPORTS_AT_MIDDLE_NEW_NULL: &str =
    "Supports insert_at(size / 2, E) with new null element: size: {size}, elements: {elements}";
const SUPPORTS_AT_START_EXISTING_NULL: &str =
    "Supports insert_at(0, E) with existing null element: size: {size}, elements: {elements}";
const SUPPORTS_AT_END_EXISTING_NULL: &str =
    "Supports insert_at(size, E) with existing null element: size: {size}, elements: {elements}";
const SUPPORTS_AT_MIDDLE_EXISTING_NULL: &str =
    "Supports insert_at(size / 2, E) with existing null element: size: {size}, elements: {elements}";
const REJECTS_AT_START_NEW: &str =
    "Doesn't support insert_at(0, E) with new element: size: {size}, elements: {elements}";
const REJECTS_AT_END_NEW: &str =
    "Doesn't support insert_at(size, E) with new element: size: {size}, elements: {elements}";
const REJECTS_AT_MIDDLE_NEW: &str =
    "Doesn't support insert_at(size / 2, E) with new element: size: {size}, elements: {elements}";
const REJECTS_AT_START_EXISTING: &str =
    "Doesn't support insert_at(0, E) with existing element: size: {size}, elements: {elements}";
const REJECTS_AT_END_EXISTING: &str =
    "Doesn't support insert_at(size, E) with existing element: size: {size}, elements: {elements}";
const REJECTS_AT_MIDDLE_EXISTING: &str =
    "Doesn't support insert_at(size / 2, E) with existing element: size: {size}, elements: {elements}";
const REJECTS_AT_START_NEW_NULL: &str =
    "Doesn't support insert_at(0, E) with new null element: size: {size}, elements: {elements}";
const REJECTS_AT_END_NEW_NULL: &str =
    "Doesn't support insert_at(size, E) with new null element: size: {size}, elements: {elements}";
const REJECTS_AT_MIDDLE_NEW_NULL: &str =
    "Doesn't support insert_at(size / 2, E) with new null element: size: {size}, elements: {elements}";
const REJECTS_AT_START_EXISTING_NULL: &str =
    "Doesn't support insert_at(0, E) with existing null element: size: {size}, elements: {elements}";
const REJECTS_AT_END_EXISTING_NULL: &str =
    "Doesn't support insert_at(size, E) with existing null element: size: {size}, elements: {elements}";
const REJECTS_AT_MIDDLE_EXISTING_NULL: &str =
    "Doesn't support insert_at(size / 2, E) with existing null element: size: {size}, elements: {elements}";
const REJECTS_AT_MINUS_ONE_NEW: &str =
    "Doesn't support insert_at(-1, E) with new element: size: {size}, elements: {elements}";
const REJECTS_AT_MINUS_ONE_EXISTING: &str =
    "Doesn't support insert_at(-1, E) with existing element: size: {size}, elements: {elements}";
const REJECTS_AT_MINUS_ONE_NEW_NULL: &str =
    "Doesn't support insert_at(-1, E) with new null element: size: {size}, elements: {elements}";
const REJECTS_AT_MINUS_ONE_EXISTING_NULL: &str =
    "Doesn't support insert_at(-1, E) with existing null element: size: {size}, elements: {elements}";
const FAILS_FAST: &str =
    "fails fast on concurrent modification: size: {size}, elements: {elements}";
const FAILS_FAST_NULL: &str =
    "fails fast on concurrent modification involving null element: size: {size}, elements: {elements}";

/// Where the insertion is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Start,
    End,
    Middle,
    MinusOne,
}

impl Position {
    fn insertion_index(self, len: usize) -> i64 {
        match self {
            Position::Start => 0,
            Position::End => len as i64,
            Position::Middle => middle_index(len) as i64,
            Position::MinusOne => -1,
        }
    }

    /// Middle is undefined on an empty fixture; end on an empty fixture is
    /// index 0 == size 0, already covered once under the start axis.
    fn excludes_empty(self) -> bool {
        matches!(self, Position::Middle | Position::End)
    }
}

/// What is being inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementKind {
    New,
    Existing,
    Null,
}

/// How the fixture is pre-populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FixtureKind {
    Plain,
    NullInMiddle,
}

/// One axis combination, before crossing with size classes.
#[derive(Debug, Clone, Copy)]
struct Row {
    template: &'static str,
    position: Position,
    element: ElementKind,
    fixture: FixtureKind,
}

/// The single documented expected outcome of a matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expectation {
    Succeeds,
    RejectedWith(RejectionKind),
}

/// Immutable generator configuration, validated by
/// [`InsertAtIndexSuite::new`].
pub struct SuiteConfig<F> {
    /// Factory producing fresh collections under test.
    pub factory: F,
    /// Resolved feature closure declared by the implementation.
    pub features: FeatureSet,
    /// Size classes to cover.
    pub sizes: Vec<CollectionSize>,
}

impl<F> SuiteConfig<F> {
    /// Config covering every size class.
    pub fn new(factory: F, features: FeatureSet) -> Self {
        SuiteConfig {
            factory,
            features,
            sizes: CollectionSize::ALL.to_vec(),
        }
    }
}

/// Generator for the indexed-insertion contract suite.
pub struct InsertAtIndexSuite<E, F> {
    factory: Arc<F>,
    features: FeatureSet,
    sizes: Vec<CollectionSize>,
    _element: PhantomData<fn() -> E>,
}

impl<E, F> fmt::Debug for InsertAtIndexSuite<E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertAtIndexSuite")
            .field("features", &self.features)
            .field("sizes", &self.sizes)
            .finish_non_exhaustive()
    }
}

impl<E, F> InsertAtIndexSuite<E, F>
where
    E: Element,
    F: TestListFactory<E> + 'static,
{
    /// Validates the configuration and builds the generator.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when no size classes are declared or a size
    /// class is declared twice. Sample-pool validity is guaranteed by
    /// [`conformance_core::SampleElements`] construction.
    pub fn new(config: SuiteConfig<F>) -> Result<Self, ConfigError> {
        let SuiteConfig {
            factory,
            features,
            sizes,
        } = config;
        if sizes.is_empty() {
            return Err(ConfigError::NoSizes);
        }
        for (i, size) in sizes.iter().enumerate() {
            if sizes[..i].contains(size) {
                return Err(ConfigError::DuplicateSize(*size));
            }
        }
        Ok(InsertAtIndexSuite {
            factory: Arc::new(factory),
            features,
            sizes,
            _element: PhantomData,
        })
    }

    /// Produces the complete suite, grouped by top-level scenario.
    ///
    /// Output order is deterministic: groups and the rows within them follow
    /// the axis enumeration order, and every row is crossed with the
    /// declared size classes in declaration order.
    pub fn generate(&self) -> Vec<ScenarioGroup> {
        let mut groups = Vec::new();
        groups.extend(self.supports_insert_group());
        groups.extend(self.supports_insert_with_nulls_group());
        groups.extend(self.rejects_null_insert_group());
        groups.extend(self.unsupported_insert_group());
        groups.extend(self.unsupported_insert_with_nulls_group());
        for group in &groups {
            debug!(scenario = group.name(), cases = group.len(), "generated scenario group");
        }
        groups
    }

    /// Derives the expected outcome of one matrix cell. Capability absence
    /// dominates bounds checking; null rejection dominates position.
    fn expected_outcome(&self, position: Position, element: ElementKind) -> Expectation {
        if !self.features.contains(ListFeature::SupportsInsertAtIndex) {
            return Expectation::RejectedWith(RejectionKind::Unsupported);
        }
        if element == ElementKind::Null
            && !self.features.contains(CollectionFeature::AllowsNullValues)
        {
            return Expectation::RejectedWith(RejectionKind::Unsupported);
        }
        match position {
            Position::MinusOne => Expectation::RejectedWith(RejectionKind::OutOfBounds),
            _ => Expectation::Succeeds,
        }
    }

    fn supports_insert_group(&self) -> Option<ScenarioGroup> {
        if !self.features.contains(ListFeature::SupportsInsertAtIndex) {
            return None;
        }
        let mut cases = Vec::new();
        for row in [
            Row {
                template: SUPPORTS_AT_START_NEW,
                position: Position::Start,
                element: ElementKind::New,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: SUPPORTS_AT_END_NEW,
                position: Position::End,
                element: ElementKind::New,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: SUPPORTS_AT_MIDDLE_NEW,
                position: Position::Middle,
                element: ElementKind::New,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: SUPPORTS_AT_START_EXISTING,
                position: Position::Start,
                element: ElementKind::Existing,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: SUPPORTS_AT_END_EXISTING,
                position: Position::End,
                element: ElementKind::Existing,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: SUPPORTS_AT_MIDDLE_EXISTING,
                position: Position::Middle,
                element: ElementKind::Existing,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: REJECTS_AT_MINUS_ONE_NEW,
                position: Position::MinusOne,
                element: ElementKind::New,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: REJECTS_AT_MINUS_ONE_EXISTING,
                position: Position::MinusOne,
                element: ElementKind::Existing,
                fixture: FixtureKind::Plain,
            },
        ] {
            self.emit_row(&mut cases, row);
        }
        if self.features.contains(CollectionFeature::FailsFastOnModification) {
            for size in self.sizes.iter().copied() {
                cases.push(self.make_fail_fast_case(FAILS_FAST, size, false));
            }
        }
        Some(ScenarioGroup::new(SUPPORTS_INSERT_AT_INDEX, cases))
    }

    fn supports_insert_with_nulls_group(&self) -> Option<ScenarioGroup> {
        if !self.features.contains_all([
            Feature::List(ListFeature::SupportsInsertAtIndex),
            Feature::Collection(CollectionFeature::AllowsNullValues),
        ]) {
            return None;
        }
        let mut cases = Vec::new();
        for row in [
            Row {
                template: SUPPORTS_AT_START_NEW_NULL,
                position: Position::Start,
                element: ElementKind::Null,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: SUPPORTS_AT_END_NEW_NULL,
                position: Position::End,
                element: ElementKind::Null,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: SUPPORTS_AT_MIDDLE_NEW_NULL,
                position: Position::Middle,
                element: ElementKind::Null,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: SUPPORTS_AT_START_EXISTING_NULL,
                position: Position::Start,
                element: ElementKind::Null,
                fixture: FixtureKind::NullInMiddle,
            },
            Row {
                template: SUPPORTS_AT_END_EXISTING_NULL,
                position: Position::End,
                element: ElementKind::Null,
                fixture: FixtureKind::NullInMiddle,
            },
            Row {
                template: SUPPORTS_AT_MIDDLE_EXISTING_NULL,
                position: Position::Middle,
                element: ElementKind::Null,
                fixture: FixtureKind::NullInMiddle,
            },
            Row {
                template: REJECTS_AT_MINUS_ONE_NEW_NULL,
                position: Position::MinusOne,
                element: ElementKind::Null,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: REJECTS_AT_MINUS_ONE_EXISTING_NULL,
                position: Position::MinusOne,
                element: ElementKind::Null,
                fixture: FixtureKind::NullInMiddle,
            },
        ] {
            self.emit_row(&mut cases, row);
        }
        if self.features.contains(CollectionFeature::FailsFastOnModification) {
            for size in self.sizes.iter().copied() {
                cases.push(self.make_fail_fast_case(FAILS_FAST_NULL, size, true));
            }
        }
        Some(ScenarioGroup::new(SUPPORTS_INSERT_AT_INDEX_WITH_NULL, cases))
    }

    fn rejects_null_insert_group(&self) -> Option<ScenarioGroup> {
        if !self.features.contains(ListFeature::SupportsInsertAtIndex)
            || self.features.contains(CollectionFeature::AllowsNullValues)
        {
            return None;
        }
        let mut cases = Vec::new();
        for row in [
            Row {
                template: REJECTS_AT_START_NEW_NULL,
                position: Position::Start,
                element: ElementKind::Null,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: REJECTS_AT_END_NEW_NULL,
                position: Position::End,
                element: ElementKind::Null,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: REJECTS_AT_MIDDLE_NEW_NULL,
                position: Position::Middle,
                element: ElementKind::Null,
                fixture: FixtureKind::Plain,
            },
        ] {
            self.emit_row(&mut cases, row);
        }
        Some(ScenarioGroup::new(REJECTS_NULL_INSERT_AT_INDEX, cases))
    }

    fn unsupported_insert_group(&self) -> Option<ScenarioGroup> {
        if self.features.contains(ListFeature::SupportsInsertAtIndex) {
            return None;
        }
        let mut cases = Vec::new();
        for row in [
            Row {
                template: REJECTS_AT_START_NEW,
                position: Position::Start,
                element: ElementKind::New,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: REJECTS_AT_START_EXISTING,
                position: Position::Start,
                element: ElementKind::Existing,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: REJECTS_AT_END_NEW,
                position: Position::End,
                element: ElementKind::New,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: REJECTS_AT_END_EXISTING,
                position: Position::End,
                element: ElementKind::Existing,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: REJECTS_AT_MIDDLE_NEW,
                position: Position::Middle,
                element: ElementKind::New,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: REJECTS_AT_MIDDLE_EXISTING,
                position: Position::Middle,
                element: ElementKind::Existing,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: REJECTS_AT_MINUS_ONE_NEW,
                position: Position::MinusOne,
                element: ElementKind::New,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: REJECTS_AT_MINUS_ONE_EXISTING,
                position: Position::MinusOne,
                element: ElementKind::Existing,
                fixture: FixtureKind::Plain,
            },
        ] {
            self.emit_row(&mut cases, row);
        }
        Some(ScenarioGroup::new(DOES_NOT_SUPPORT_INSERT_AT_INDEX, cases))
    }

    fn unsupported_insert_with_nulls_group(&self) -> Option<ScenarioGroup> {
        if self.features.contains(ListFeature::SupportsInsertAtIndex) {
            return None;
        }
        let mut cases = Vec::new();
        for row in [
            Row {
                template: REJECTS_AT_START_NEW_NULL,
                position: Position::Start,
                element: ElementKind::Null,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: REJECTS_AT_END_NEW_NULL,
                position: Position::End,
                element: ElementKind::Null,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: REJECTS_AT_MIDDLE_NEW_NULL,
                position: Position::Middle,
                element: ElementKind::Null,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: REJECTS_AT_START_EXISTING_NULL,
                position: Position::Start,
                element: ElementKind::Null,
                fixture: FixtureKind::NullInMiddle,
            },
            Row {
                template: REJECTS_AT_END_EXISTING_NULL,
                position: Position::End,
                element: ElementKind::Null,
                fixture: FixtureKind::NullInMiddle,
            },
            Row {
                template: REJECTS_AT_MIDDLE_EXISTING_NULL,
                position: Position::Middle,
                element: ElementKind::Null,
                fixture: FixtureKind::NullInMiddle,
            },
            Row {
                template: REJECTS_AT_MINUS_ONE_NEW_NULL,
                position: Position::MinusOne,
                element: ElementKind::Null,
                fixture: FixtureKind::Plain,
            },
            Row {
                template: REJECTS_AT_MINUS_ONE_EXISTING_NULL,
                position: Position::MinusOne,
                element: ElementKind::Null,
                fixture: FixtureKind::NullInMiddle,
            },
        ] {
            self.emit_row(&mut cases, row);
        }
        Some(ScenarioGroup::new(
            DOES_NOT_SUPPORT_INSERT_AT_INDEX_WITH_NULL,
            cases,
        ))
    }

    /// Crosses one row with the declared size classes, applying the per-row
    /// empty-size filter.
    fn emit_row(&self, cases: &mut Vec<TestCase>, row: Row) {
        let expected = self.expected_outcome(row.position, row.element);
        for size in self.row_sizes(&row) {
            cases.push(self.make_case(&row, size, expected));
        }
    }

    fn row_sizes(&self, row: &Row) -> SmallVec<[CollectionSize; 3]> {
        let exclude_empty = row.element == ElementKind::Existing
            || row.fixture == FixtureKind::NullInMiddle
            || row.position.excludes_empty();
        self.sizes
            .iter()
            .copied()
            .filter(|size| !(exclude_empty && size.represents_empty()))
            .collect()
    }

    fn make_case(&self, row: &Row, size: CollectionSize, expected: Expectation) -> TestCase {
        let samples = self.factory.samples();
        let fixture = match row.fixture {
            FixtureKind::Plain => elements_of_size(size, samples),
            FixtureKind::NullInMiddle => elements_with_null_in_middle(size, samples),
        };
        let element = match row.element {
            ElementKind::New => Some(samples.fresh().clone()),
            ElementKind::Existing => Some(samples.existing().clone()),
            ElementKind::Null => None,
        };
        let index = row.position.insertion_index(fixture.len());
        let name = {
            let fixture = fixture.clone();
            CaseName::new(row.template, size.count(), move || {
                render_elements(&fixture)
            })
        };
        let factory = Arc::clone(&self.factory);
        let check: Check = match expected {
            Expectation::Succeeds => {
                let resulting = insert_into(&fixture, index as usize, element.clone());
                Box::new(move || {
                    let mut list = factory.create(fixture);
                    match list.insert_at(index, element) {
                        Ok(()) => {
                            let actual = list.to_vec();
                            if actual == resulting {
                                Ok(())
                            } else {
                                Err(Violation::SequenceMismatch {
                                    expected: render_elements(&resulting),
                                    actual: render_elements(&actual),
                                })
                            }
                        }
                        Err(rejection) => Err(Violation::UnexpectedRejection { rejection }),
                    }
                })
            }
            Expectation::RejectedWith(kind) => Box::new(move || {
                let mut list = factory.create(fixture.clone());
                match list.insert_at(index, element) {
                    Ok(()) => Err(Violation::UnexpectedSuccess { expected: kind }),
                    Err(rejection) if rejection.kind() == kind => {
                        let after = list.to_vec();
                        if after == fixture {
                            Ok(())
                        } else {
                            Err(Violation::ChangedAfterRejection {
                                before: render_elements(&fixture),
                                after: render_elements(&after),
                            })
                        }
                    }
                    Err(actual) => Err(Violation::WrongRejection {
                        expected: kind,
                        actual,
                    }),
                }
            }),
        };
        TestCase::new(name, check)
    }

    /// A qualifying insertion after a cursor is obtained must make the next
    /// cursor step fail with a concurrent-modification rejection.
    fn make_fail_fast_case(
        &self,
        template: &'static str,
        size: CollectionSize,
        insert_null: bool,
    ) -> TestCase {
        let samples = self.factory.samples();
        let fixture = elements_of_size(size, samples);
        let element = if insert_null {
            None
        } else {
            Some(samples.fresh().clone())
        };
        let name = {
            let fixture = fixture.clone();
            CaseName::new(template, size.count(), move || render_elements(&fixture))
        };
        let factory = Arc::clone(&self.factory);
        let check: Check = Box::new(move || {
            let mut list = factory.create(fixture);
            let mut cursor = list.cursor();
            if let Err(rejection) = list.insert_at(0, element) {
                return Err(Violation::UnexpectedRejection { rejection });
            }
            match cursor.advance() {
                Err(rejection) if rejection.kind() == RejectionKind::ConcurrentModification => {
                    Ok(())
                }
                Err(actual) => Err(Violation::WrongRejection {
                    expected: RejectionKind::ConcurrentModification,
                    actual,
                }),
                Ok(_) => Err(Violation::UnexpectedSuccess {
                    expected: RejectionKind::ConcurrentModification,
                }),
            }
        });
        TestCase::new(name, check)
    }
}
