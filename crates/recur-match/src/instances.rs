//! Bounded check that every instance of a recurrence satisfies a predicate.

use recur_match_core::error::CoreResult;
use recur_match_core::{Instant, ScanLimits};

use crate::description::Description;
use crate::error::RecurResult;
use crate::matcher::{Matcher, RuleMatcher};
use crate::recurrence::{Expansion, Recurrence};

/// Checks the instances a rule generates from a fixed start.
///
/// Open-ended rules are only scanned up to [`ScanLimits`]: by default the
/// first 10,000 instances, or up to and including the first instance after
/// the year 9000, whichever comes first. A successful check is therefore a
/// bounded approximation for unbounded rules, not a proof over every
/// instance.
#[derive(Debug, Clone)]
pub struct InstancesMatcher<I, M> {
    start: I,
    predicate: M,
    limits: ScanLimits,
}

/// ## Summary
/// Creates a matcher requiring every instance generated from `start` to
/// satisfy `predicate`.
#[must_use]
pub fn instances<I: Instant, M: Matcher<I>>(start: I, predicate: M) -> InstancesMatcher<I, M> {
    InstancesMatcher::new(start, predicate)
}

impl<I, M> InstancesMatcher<I, M> {
    #[must_use]
    pub fn new(start: I, predicate: M) -> Self {
        Self {
            start,
            predicate,
            limits: ScanLimits::default(),
        }
    }

    /// ## Summary
    /// Replaces the default scan limits.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidLimits` if the limits are unusable.
    pub fn with_limits(mut self, limits: ScanLimits) -> CoreResult<Self> {
        self.limits = limits.validated()?;
        Ok(self)
    }

    #[must_use]
    pub const fn start(&self) -> &I {
        &self.start
    }

    #[must_use]
    pub const fn limits(&self) -> ScanLimits {
        self.limits
    }
}

impl<R, I, M> RuleMatcher<R> for InstancesMatcher<I, M>
where
    R: Recurrence<Instant = I> + ?Sized,
    I: Instant,
    M: Matcher<I>,
{
    fn check(&self, rule: &R, mismatch: &mut Description) -> RecurResult<bool> {
        let expansion = rule.expand(&self.start)?;
        tracing::trace!(start = %self.start.to_text(), "Scanning recurrence instances");

        let mut count = 0_usize;
        for instance in expansion.instances() {
            let instance = instance?;
            count += 1;

            if !self.predicate.matches(&instance) {
                let text = instance.to_text();
                tracing::debug!(index = count, instance = %text, "Instance did not match");
                mismatch
                    .append_text("instance ")
                    .append_text(&text)
                    .append_text(" ");
                self.predicate.describe_mismatch(&instance, mismatch);
                return Ok(false);
            }

            if let Some(bound) = self.limits.reached(count, instance.year()) {
                tracing::trace!(
                    count,
                    year = instance.year(),
                    %bound,
                    "Scan bound reached, no mismatch found"
                );
                break;
            }
        }

        Ok(true)
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("instances ");
        self.predicate.describe_to(description);
    }
}
