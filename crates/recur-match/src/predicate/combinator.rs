//! Logical combinators over other predicates.

use recur_match_core::Instant;

use crate::description::Description;
use crate::matcher::Matcher;

/// Matches every instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Anything;

#[must_use]
pub const fn anything() -> Anything {
    Anything
}

impl<I: Instant> Matcher<I> for Anything {
    fn matches(&self, _item: &I) -> bool {
        true
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("anything");
    }

    fn describe_mismatch(&self, item: &I, description: &mut Description) {
        description.append_text("was ").append_text(&item.to_text());
    }
}

/// Inverts another predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Not<M> {
    inner: M,
}

#[must_use]
pub const fn not<M>(inner: M) -> Not<M> {
    Not { inner }
}

impl<I: Instant, M: Matcher<I>> Matcher<I> for Not<M> {
    fn matches(&self, item: &I) -> bool {
        !self.inner.matches(item)
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("not ");
        self.inner.describe_to(description);
    }

    fn describe_mismatch(&self, item: &I, description: &mut Description) {
        description.append_text("was ").append_text(&item.to_text());
    }
}

/// Matches when every inner predicate matches.
pub struct AllOf<T: ?Sized> {
    matchers: Vec<Box<dyn Matcher<T>>>,
}

/// Matches when at least one inner predicate matches.
pub struct AnyOf<T: ?Sized> {
    matchers: Vec<Box<dyn Matcher<T>>>,
}

#[must_use]
pub fn all_of<T: ?Sized>(matchers: Vec<Box<dyn Matcher<T>>>) -> AllOf<T> {
    AllOf { matchers }
}

#[must_use]
pub fn any_of<T: ?Sized>(matchers: Vec<Box<dyn Matcher<T>>>) -> AnyOf<T> {
    AnyOf { matchers }
}

fn describe_joined<T: ?Sized>(
    matchers: &[Box<dyn Matcher<T>>],
    operator: &str,
    description: &mut Description,
) {
    description.append_text("(");
    for (index, matcher) in matchers.iter().enumerate() {
        if index > 0 {
            description.append_text(operator);
        }
        matcher.describe_to(description);
    }
    description.append_text(")");
}

impl<T: ?Sized> Matcher<T> for AllOf<T> {
    fn matches(&self, item: &T) -> bool {
        self.matchers.iter().all(|matcher| matcher.matches(item))
    }

    fn describe_to(&self, description: &mut Description) {
        describe_joined(&self.matchers, " and ", description);
    }

    /// Explains the first rejecting predicate only.
    fn describe_mismatch(&self, item: &T, description: &mut Description) {
        if let Some(failing) = self.matchers.iter().find(|matcher| !matcher.matches(item)) {
            failing.describe_to(description);
            description.append_text(" ");
            failing.describe_mismatch(item, description);
        }
    }
}

impl<T: ?Sized> Matcher<T> for AnyOf<T> {
    fn matches(&self, item: &T) -> bool {
        self.matchers.iter().any(|matcher| matcher.matches(item))
    }

    fn describe_to(&self, description: &mut Description) {
        describe_joined(&self.matchers, " or ", description);
    }

    fn describe_mismatch(&self, item: &T, description: &mut Description) {
        for (index, matcher) in self.matchers.iter().enumerate() {
            if index > 0 {
                description.append_text(", ");
            }
            matcher.describe_mismatch(item, description);
        }
    }
}
