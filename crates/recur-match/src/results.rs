//! Bounded check on how many instances a rule produces.

use recur_match_core::Instant;

use crate::description::Description;
use crate::error::RecurResult;
use crate::matcher::RuleMatcher;
use crate::recurrence::{Expansion, Recurrence};

/// Expects a rule to produce exactly `expected` instances from `start`.
///
/// At most `expected + 1` instances are pulled, so an open-ended rule is
/// reported as having "more than" `expected` instances. No year bound
/// applies, so the count is always the real one.
#[derive(Debug, Clone)]
pub struct ResultsMatcher<I> {
    start: I,
    expected: usize,
}

#[must_use]
pub fn results<I: Instant>(start: I, expected: usize) -> ResultsMatcher<I> {
    ResultsMatcher { start, expected }
}

impl<R, I> RuleMatcher<R> for ResultsMatcher<I>
where
    R: Recurrence<Instant = I> + ?Sized,
    I: Instant,
{
    fn check(&self, rule: &R, mismatch: &mut Description) -> RecurResult<bool> {
        let expansion = rule.expand(&self.start)?;
        let limit = self.expected.saturating_add(1);

        let mut count = 0_usize;
        for instance in expansion.instances() {
            instance?;
            count += 1;
            if count >= limit {
                break;
            }
        }

        if count == self.expected {
            return Ok(true);
        }

        tracing::debug!(expected = self.expected, count, "Unexpected number of instances");
        if count > self.expected {
            mismatch
                .append_text("rule with more than ")
                .append_value(self.expected)
                .append_text(" instances");
        } else {
            mismatch
                .append_text("rule with ")
                .append_value(count)
                .append_text(" instances");
        }
        Ok(false)
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("rule with ")
            .append_value(self.expected)
            .append_text(" instances");
    }
}
