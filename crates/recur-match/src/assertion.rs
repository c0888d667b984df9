//! Assertion entry points for test suites.

use recur_match_core::error::CoreError;

use crate::description::Description;
use crate::error::RecurResult;
use crate::matcher::RuleMatcher;

/// Outcome of checking a rule against a rule-level matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Satisfied,
    Mismatch {
        /// The matcher's self-description.
        expected: String,
        /// The mismatch report.
        actual: String,
    },
}

impl Verdict {
    #[must_use]
    pub const fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied)
    }
}

/// ## Summary
/// Checks `rule` against `matcher` and renders both sides of a mismatch.
///
/// ## Errors
/// Returns any error raised while expanding or iterating the rule.
pub fn check_rule<R, M>(rule: &R, matcher: &M) -> RecurResult<Verdict>
where
    R: ?Sized,
    M: RuleMatcher<R> + ?Sized,
{
    let mut mismatch = Description::new();
    if matcher.check(rule, &mut mismatch)? {
        return Ok(Verdict::Satisfied);
    }

    let mut expected = Description::new();
    matcher.describe_to(&mut expected);
    Ok(Verdict::Mismatch {
        expected: expected.into_string(),
        actual: mismatch.into_string(),
    })
}

/// ## Summary
/// Like [`check_rule`], but a mismatch is an error.
///
/// ## Errors
/// Returns `CoreError::AssertionFailed` on mismatch, or any error raised
/// while expanding or iterating the rule.
pub fn assert_rule<R, M>(rule: &R, matcher: &M) -> RecurResult<()>
where
    R: ?Sized,
    M: RuleMatcher<R> + ?Sized,
{
    match check_rule(rule, matcher)? {
        Verdict::Satisfied => Ok(()),
        Verdict::Mismatch { expected, actual } => Err(CoreError::AssertionFailed(format!(
            "Expected: {expected}\n     but: {actual}"
        ))
        .into()),
    }
}

/// Asserts that every instance of `rule` from `start` satisfies `predicate`.
///
/// Panics with the assertion message on mismatch, and with the error if the
/// rule cannot be expanded or iterated.
#[macro_export]
macro_rules! assert_instances {
    ($rule:expr, $start:expr, $predicate:expr $(,)?) => {
        if let Err(err) = $crate::assert_rule($rule, &$crate::instances($start, $predicate)) {
            panic!("{err}");
        }
    };
}
