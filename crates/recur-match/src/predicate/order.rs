//! Ordering predicates relative to a fixed instant.

use recur_match_core::Instant;

use crate::description::Description;
use crate::matcher::Matcher;

/// Matches instants strictly before a bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Before<I> {
    bound: I,
}

/// Matches instants strictly after a bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct After<I> {
    bound: I,
}

#[must_use]
pub fn before<I: Instant + PartialOrd>(bound: I) -> Before<I> {
    Before { bound }
}

#[must_use]
pub fn after<I: Instant + PartialOrd>(bound: I) -> After<I> {
    After { bound }
}

impl<I: Instant + PartialOrd> Matcher<I> for Before<I> {
    fn matches(&self, item: &I) -> bool {
        *item < self.bound
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("before ")
            .append_text(&self.bound.to_text());
    }

    fn describe_mismatch(&self, item: &I, description: &mut Description) {
        description.append_text("was ").append_text(&item.to_text());
    }
}

impl<I: Instant + PartialOrd> Matcher<I> for After<I> {
    fn matches(&self, item: &I) -> bool {
        *item > self.bound
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("after ")
            .append_text(&self.bound.to_text());
    }

    fn describe_mismatch(&self, item: &I, description: &mut Description) {
        description.append_text("was ").append_text(&item.to_text());
    }
}
