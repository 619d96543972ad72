//! Fixture construction and sequence arithmetic
//!
//! Everything here is pure: fixtures are plain `Vec<Option<E>>` element
//! sequences handed to the factory, and expected sequences are derived with
//! the same helpers the checks compare against.

use std::fmt;

use conformance_core::{CollectionSize, SampleElements};

/// The middle insertion index of a collection of length `len`.
///
/// Integer division, independent of element values.
pub fn middle_index(len: usize) -> usize {
    len / 2
}

/// Element sequence for a fixture of the given size: the first `count`
/// samples, in pool order.
pub fn elements_of_size<E: Clone>(
    size: CollectionSize,
    samples: &SampleElements<E>,
) -> Vec<Option<E>> {
    samples
        .iter()
        .take(size.count())
        .cloned()
        .map(Some)
        .collect()
}

/// Element sequence for a fixture of the given size with the middle slot
/// replaced by a null. Not defined for the empty size class.
pub fn elements_with_null_in_middle<E: Clone>(
    size: CollectionSize,
    samples: &SampleElements<E>,
) -> Vec<Option<E>> {
    debug_assert!(!size.represents_empty());
    let mut elements = elements_of_size(size, samples);
    let middle = middle_index(elements.len());
    elements[middle] = None;
    elements
}

/// `head` followed by every element of `tail`.
pub fn prepend<T: Clone>(head: T, tail: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(tail.len() + 1);
    result.push(head);
    result.extend_from_slice(tail);
    result
}

/// Every element of `init` followed by `last`.
pub fn append<T: Clone>(init: &[T], last: T) -> Vec<T> {
    let mut result = Vec::with_capacity(init.len() + 1);
    result.extend_from_slice(init);
    result.push(last);
    result
}

/// `sequence` with `element` inserted before position `index`: everything
/// before `index` unchanged, everything from `index` onward shifted right by
/// one.
pub fn insert_into<T: Clone>(sequence: &[T], index: usize, element: T) -> Vec<T> {
    let mut result = Vec::with_capacity(sequence.len() + 1);
    result.extend_from_slice(&sequence[..index]);
    result.push(element);
    result.extend_from_slice(&sequence[index..]);
    result
}

/// Renders an element sequence for display names and violation messages,
/// e.g. `["a", null, "c"]`.
pub fn render_elements<E: fmt::Debug>(elements: &[Option<E>]) -> String {
    let mut rendered = String::from("[");
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            rendered.push_str(", ");
        }
        match element {
            Some(value) => rendered.push_str(&format!("{value:?}")),
            None => rendered.push_str("null"),
        }
    }
    rendered.push(']');
    rendered
}
