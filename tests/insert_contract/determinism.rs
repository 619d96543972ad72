//! Deterministic, reproducible output across generations.

use crate::common::{all_names, full_features, suite_for};
use serde_json::json;

#[test]
fn two_generations_produce_identical_name_sequences() {
    let suite = suite_for(&full_features());
    let first = all_names(&suite.generate());
    let second = all_names(&suite.generate());
    assert_eq!(first, second);
}

#[test]
fn two_suites_over_the_same_declaration_agree() {
    let first = all_names(&suite_for(&full_features()).generate());
    let second = all_names(&suite_for(&full_features()).generate());
    assert_eq!(first, second);
}

#[test]
fn every_case_name_is_unique() {
    let names = all_names(&suite_for(&full_features()).generate());
    let total = names.len();
    let mut deduped = names;
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), total);
}

#[test]
fn name_embeds_index_expression_element_and_fixture() {
    let names = all_names(&suite_for(&full_features()).generate());
    let prepend_case = names
        .iter()
        .find(|n| n.contains("insert_at(0, E) with new element") && n.contains("size: 3"))
        .expect("start-insertion case exists");
    assert!(prepend_case.contains("[\"a\", \"b\", \"c\"]"));
}

#[test]
fn scenario_summary_serializes_for_reporting() {
    let groups = suite_for(&full_features()).generate();
    let summary = json!({
        "scenarios": groups
            .iter()
            .map(|group| {
                json!({
                    "name": group.name(),
                    "cases": group.cases().len(),
                })
            })
            .collect::<Vec<_>>(),
    });
    let rendered = summary.to_string();
    assert!(rendered.contains("Supports insert_at(int, E)"));
    assert_eq!(summary["scenarios"].as_array().map(Vec::len), Some(2));
}
