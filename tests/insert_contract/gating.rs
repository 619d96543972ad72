//! Scenario-group gating against the resolved feature closure.

use crate::common::{full_features, insert_only_features, no_insert_features, suite_for};
use conformance::{
    CollectionFeature, Feature, ListFeature, DOES_NOT_SUPPORT_INSERT_AT_INDEX,
    DOES_NOT_SUPPORT_INSERT_AT_INDEX_WITH_NULL, REJECTS_NULL_INSERT_AT_INDEX,
    SUPPORTS_INSERT_AT_INDEX, SUPPORTS_INSERT_AT_INDEX_WITH_NULL,
};

fn names(declared: &[Feature]) -> Vec<&'static str> {
    suite_for(declared)
        .generate()
        .iter()
        .map(|group| group.name())
        .collect()
}

#[test]
fn full_capabilities_yield_the_two_supports_groups() {
    assert_eq!(
        names(&full_features()),
        [SUPPORTS_INSERT_AT_INDEX, SUPPORTS_INSERT_AT_INDEX_WITH_NULL]
    );
}

#[test]
fn insert_without_nulls_yields_the_null_rejection_group() {
    assert_eq!(
        names(&insert_only_features()),
        [SUPPORTS_INSERT_AT_INDEX, REJECTS_NULL_INSERT_AT_INDEX]
    );
}

#[test]
fn no_insert_capability_yields_the_two_unsupported_groups() {
    assert_eq!(
        names(&no_insert_features()),
        [
            DOES_NOT_SUPPORT_INSERT_AT_INDEX,
            DOES_NOT_SUPPORT_INSERT_AT_INDEX_WITH_NULL
        ]
    );
}

#[test]
fn general_purpose_list_implies_insert_support() {
    // The gate consults the closure, not the literal declaration.
    assert_eq!(
        names(&[Feature::List(ListFeature::GeneralPurpose)]),
        [SUPPORTS_INSERT_AT_INDEX, REJECTS_NULL_INSERT_AT_INDEX]
    );
}

#[test]
fn fail_fast_cases_appear_only_when_the_capability_is_declared() {
    let with = suite_for(&full_features()).generate();
    let without = suite_for(&[
        Feature::List(ListFeature::SupportsInsertAtIndex),
        Feature::Collection(CollectionFeature::AllowsNullValues),
    ])
    .generate();
    let count_fail_fast = |groups: &[conformance::ScenarioGroup]| {
        groups
            .iter()
            .flat_map(|g| g.cases())
            .filter(|c| c.name().to_string().contains("fails fast"))
            .count()
    };
    assert_eq!(count_fail_fast(&with), 6);
    assert_eq!(count_fail_fast(&without), 0);
}

#[test]
fn end_axis_excludes_the_empty_fixture() {
    for declared in [full_features(), insert_only_features(), no_insert_features()] {
        for group in suite_for(&declared).generate() {
            for case in group.cases() {
                let name = case.name().to_string();
                if name.contains("insert_at(size, E)") {
                    assert!(
                        !name.contains("size: 0"),
                        "empty fixture duplicated under the end axis: {name}"
                    );
                }
            }
        }
    }
}

#[test]
fn middle_axis_excludes_the_empty_fixture() {
    for declared in [full_features(), insert_only_features(), no_insert_features()] {
        for group in suite_for(&declared).generate() {
            for case in group.cases() {
                let name = case.name().to_string();
                if name.contains("insert_at(size / 2, E)") {
                    assert!(!name.contains("size: 0"), "middle axis on an empty fixture: {name}");
                }
            }
        }
    }
}

#[test]
fn existing_element_cases_never_use_the_empty_fixture() {
    for group in suite_for(&full_features()).generate() {
        for case in group.cases() {
            let name = case.name().to_string();
            if name.contains("existing") {
                assert!(!name.contains("size: 0"), "existing element in an empty fixture: {name}");
            }
        }
    }
}
