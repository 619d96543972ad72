//! Concrete end-to-end scenarios pinning the documented contract.

use crate::common::{full_features, insert_only_features, no_insert_features, suite_for};
use conformance::reference::ReferenceListFactory;
use conformance::{
    resolve_closure, ListCursor, RejectionKind, TestList, TestListFactory,
};

fn some(values: &[&str]) -> Vec<Option<String>> {
    values.iter().map(|v| Some(v.to_string())).collect()
}

fn factory_for(declared: &[conformance::Feature]) -> ReferenceListFactory<String> {
    ReferenceListFactory::strings(&resolve_closure(declared.iter().copied()))
}

#[test]
fn new_element_at_start_of_several_prepends() {
    let mut list = factory_for(&full_features()).create(some(&["a", "b", "c"]));
    list.insert_at(0, Some("d".to_string())).unwrap();
    assert_eq!(list.to_vec(), some(&["d", "a", "b", "c"]));
}

#[test]
fn existing_element_at_end_of_several_appends() {
    let mut list = factory_for(&full_features()).create(some(&["a", "b", "c"]));
    list.insert_at(3, Some("a".to_string())).unwrap();
    assert_eq!(list.to_vec(), some(&["a", "b", "c", "a"]));
}

#[test]
fn middle_of_a_one_element_list_is_index_zero() {
    let mut list = factory_for(&full_features()).create(some(&["a"]));
    // middle index = 1 / 2 = 0
    list.insert_at(0, Some("d".to_string())).unwrap();
    assert_eq!(list.to_vec(), some(&["d", "a"]));
}

#[test]
fn unsupported_insert_on_empty_is_rejected_and_unchanged() {
    let mut list = factory_for(&no_insert_features()).create(vec![]);
    let rejection = list.insert_at(0, Some("d".to_string())).unwrap_err();
    assert_eq!(rejection.kind(), RejectionKind::Unsupported);
    assert_eq!(list.to_vec(), vec![]);
}

#[test]
fn null_at_end_without_null_support_is_rejected_and_unchanged() {
    let mut list = factory_for(&insert_only_features()).create(some(&["a", "b", "c"]));
    let rejection = list.insert_at(3, None).unwrap_err();
    assert_eq!(rejection.kind(), RejectionKind::Unsupported);
    assert_eq!(list.to_vec(), some(&["a", "b", "c"]));
}

#[test]
fn minus_one_with_insert_support_is_out_of_bounds_and_unchanged() {
    let mut list = factory_for(&full_features()).create(some(&["a", "b", "c"]));
    let rejection = list.insert_at(-1, Some("d".to_string())).unwrap_err();
    assert_eq!(rejection.kind(), RejectionKind::OutOfBounds);
    assert_eq!(list.to_vec(), some(&["a", "b", "c"]));
}

#[test]
fn cursor_step_after_insertion_detects_the_modification() {
    let mut list = factory_for(&full_features()).create(some(&["a", "b", "c"]));
    let mut cursor = list.cursor();
    list.insert_at(0, Some("d".to_string())).unwrap();
    assert_eq!(
        cursor.advance().unwrap_err().kind(),
        RejectionKind::ConcurrentModification
    );
}

// The same scenarios, located and executed through the generated suite.

fn run_matching(declared: &[conformance::Feature], fragment: &str) -> usize {
    let mut executed = 0;
    for group in suite_for(declared).generate() {
        for case in group {
            let name = case.name().to_string();
            if name.contains(fragment) {
                case.run().unwrap_or_else(|violation| {
                    panic!("{name}: {violation}");
                });
                executed += 1;
            }
        }
    }
    executed
}

#[test]
fn generated_case_covers_prepending_onto_several() {
    let executed = run_matching(
        &full_features(),
        "Supports insert_at(0, E) with new element: size: 3",
    );
    assert_eq!(executed, 1);
}

#[test]
fn generated_case_covers_appending_an_existing_element() {
    let executed = run_matching(
        &full_features(),
        "Supports insert_at(size, E) with existing element: size: 3",
    );
    assert_eq!(executed, 1);
}

#[test]
fn generated_case_covers_the_middle_of_a_singleton() {
    let executed = run_matching(
        &full_features(),
        "Supports insert_at(size / 2, E) with new element: size: 1",
    );
    assert_eq!(executed, 1);
}

#[test]
fn generated_case_covers_unsupported_insert_on_empty() {
    let executed = run_matching(
        &no_insert_features(),
        "Doesn't support insert_at(0, E) with new element: size: 0",
    );
    assert_eq!(executed, 1);
}

#[test]
fn generated_case_covers_rejected_null_at_end() {
    let executed = run_matching(
        &insert_only_features(),
        "Doesn't support insert_at(size, E) with new null element: size: 3",
    );
    assert_eq!(executed, 1);
}

#[test]
fn generated_cases_cover_minus_one_rejection_on_several() {
    let executed = run_matching(
        &full_features(),
        "insert_at(-1, E) with new element: size: 3",
    );
    assert_eq!(executed, 1);
}

#[test]
fn generated_cases_cover_fail_fast_on_several() {
    let executed = run_matching(&full_features(), "fails fast on concurrent modification: size: 3");
    assert_eq!(executed, 1);
}
