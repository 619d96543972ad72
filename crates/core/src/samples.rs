//! Sample element pools
//!
//! A fixed, ordered pool of five distinct values, consumed wherever a
//! concrete element is needed. By convention `e0` is the "existing"
//! representative (present in every non-empty fixture) and `e3` is the
//! "fresh" representative (never present in any fixture); the rest fill
//! fixtures positionally.

use crate::error::ConfigError;
use once_cell::sync::Lazy;

static DEFAULT_STRINGS: Lazy<SampleElements<String>> = Lazy::new(|| SampleElements {
    e0: "a".to_string(),
    e1: "b".to_string(),
    e2: "c".to_string(),
    e3: "d".to_string(),
    e4: "e".to_string(),
});

/// An ordered pool of five distinct sample values.
///
/// Immutable for the lifetime of a test run. Distinctness is validated once,
/// at construction; everything downstream relies on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleElements<E> {
    e0: E,
    e1: E,
    e2: E,
    e3: E,
    e4: E,
}

impl<E: PartialEq> SampleElements<E> {
    /// Builds a pool from five values, rejecting any duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateSamples`] if any two values compare
    /// equal.
    pub fn new(e0: E, e1: E, e2: E, e3: E, e4: E) -> Result<Self, ConfigError> {
        let pool = [&e0, &e1, &e2, &e3, &e4];
        for (i, left) in pool.iter().enumerate() {
            if pool.iter().skip(i + 1).any(|right| right == left) {
                return Err(ConfigError::DuplicateSamples);
            }
        }
        Ok(SampleElements { e0, e1, e2, e3, e4 })
    }
}

impl<E> SampleElements<E> {
    /// First sample.
    pub fn e0(&self) -> &E {
        &self.e0
    }

    /// Second sample.
    pub fn e1(&self) -> &E {
        &self.e1
    }

    /// Third sample.
    pub fn e2(&self) -> &E {
        &self.e2
    }

    /// Fourth sample.
    pub fn e3(&self) -> &E {
        &self.e3
    }

    /// Fifth sample.
    pub fn e4(&self) -> &E {
        &self.e4
    }

    /// The representative that is already present in every non-empty fixture.
    pub fn existing(&self) -> &E {
        self.e0()
    }

    /// The representative that is never present in any fixture.
    pub fn fresh(&self) -> &E {
        self.e3()
    }

    /// The pool in positional order.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        [&self.e0, &self.e1, &self.e2, &self.e3, &self.e4].into_iter()
    }
}

impl SampleElements<String> {
    /// The default string pool: `"a"` through `"e"`.
    pub fn strings() -> Self {
        DEFAULT_STRINGS.clone()
    }
}
