//! Matcher capabilities: per-instant predicates and rule-level matchers.

use crate::description::Description;
use crate::error::RecurResult;

/// A predicate over a single value that can explain itself.
///
/// Implementations must be deterministic: `describe_mismatch` is only called
/// for an item that `matches` has just rejected.
pub trait Matcher<T: ?Sized> {
    fn matches(&self, item: &T) -> bool;

    /// Appends a self-description, e.g. `in month [1, 2]`.
    fn describe_to(&self, description: &mut Description);

    /// Appends why `item` was rejected, e.g. `month was 3`.
    fn describe_mismatch(&self, item: &T, description: &mut Description);
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for Box<M> {
    fn matches(&self, item: &T) -> bool {
        (**self).matches(item)
    }

    fn describe_to(&self, description: &mut Description) {
        (**self).describe_to(description);
    }

    fn describe_mismatch(&self, item: &T, description: &mut Description) {
        (**self).describe_mismatch(item, description);
    }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for &M {
    fn matches(&self, item: &T) -> bool {
        (**self).matches(item)
    }

    fn describe_to(&self, description: &mut Description) {
        (**self).describe_to(description);
    }

    fn describe_mismatch(&self, item: &T, description: &mut Description) {
        (**self).describe_mismatch(item, description);
    }
}

/// Boxing helper so heterogeneous predicates can be combined.
pub trait MatcherExt<T: ?Sized>: Matcher<T> + Sized + 'static {
    fn boxed(self) -> Box<dyn Matcher<T>> {
        Box::new(self)
    }
}

impl<T: ?Sized, M: Matcher<T> + 'static> MatcherExt<T> for M {}

/// A matcher over a whole recurrence rule.
///
/// Unlike [`Matcher`], checking may fail outright: faults from expanding or
/// iterating the rule are returned as errors, never reported as mismatches.
pub trait RuleMatcher<R: ?Sized> {
    /// ## Summary
    /// Checks `rule`, appending an explanation to `mismatch` on failure.
    ///
    /// Nothing is written to `mismatch` when the result is `Ok(true)` or an
    /// error.
    ///
    /// ## Errors
    /// Returns any error raised while expanding or iterating the rule.
    fn check(&self, rule: &R, mismatch: &mut Description) -> RecurResult<bool>;

    fn describe_to(&self, description: &mut Description);
}
