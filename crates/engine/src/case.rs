//! Test-case plumbing
//!
//! A [`TestCase`] pairs a lazily rendered display name with a one-shot
//! check. Cases are produced by the generator, handed to an external runner,
//! and consumed exactly once; nothing is shared between cases.

use std::fmt;

use conformance_core::CheckResult;

type ElementsSupplier = Box<dyn Fn() -> String + Send + Sync>;

/// A format-templated display name.
///
/// The template carries `{size}` and `{elements}` placeholders; rendering is
/// deferred to `Display`, so the formatting cost is only paid when a case is
/// actually reported.
pub struct CaseName {
    template: &'static str,
    size: usize,
    elements: ElementsSupplier,
}

impl CaseName {
    pub(crate) fn new(
        template: &'static str,
        size: usize,
        elements: impl Fn() -> String + Send + Sync + 'static,
    ) -> Self {
        CaseName {
            template,
            size,
            elements: Box::new(elements),
        }
    }

    /// The raw template, before placeholder substitution.
    pub fn template(&self) -> &'static str {
        self.template
    }
}

impl fmt::Display for CaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .template
            .replace("{size}", &self.size.to_string())
            .replace("{elements}", &(self.elements)());
        f.write_str(&rendered)
    }
}

impl fmt::Debug for CaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CaseName({self})")
    }
}

pub(crate) type Check = Box<dyn FnOnce() -> CheckResult + Send>;

/// One independently runnable check with its display name.
pub struct TestCase {
    name: CaseName,
    check: Check,
}

impl TestCase {
    pub(crate) fn new(name: CaseName, check: Check) -> Self {
        TestCase { name, check }
    }

    /// Display name of this case.
    pub fn name(&self) -> &CaseName {
        &self.name
    }

    /// Runs the check, consuming the case.
    pub fn run(self) -> CheckResult {
        (self.check)()
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TestCase({})", self.name)
    }
}

/// A named bucket of test cases belonging to one top-level scenario.
#[derive(Debug)]
pub struct ScenarioGroup {
    name: &'static str,
    cases: Vec<TestCase>,
}

impl ScenarioGroup {
    pub(crate) fn new(name: &'static str, cases: Vec<TestCase>) -> Self {
        ScenarioGroup { name, cases }
    }

    /// Scenario name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The cases, in generation order.
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Number of cases in this group.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether this group holds no cases.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Consumes the group, yielding its cases.
    pub fn into_cases(self) -> Vec<TestCase> {
        self.cases
    }
}

impl IntoIterator for ScenarioGroup {
    type Item = TestCase;
    type IntoIter = std::vec::IntoIter<TestCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.into_iter()
    }
}
