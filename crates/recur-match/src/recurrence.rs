//! Instance sources: rules that expand into lazy sequences of instants.

use chrono::DateTime;
use recur_match_core::Instant;
use rrule::{RRule, RRuleSet, Tz, Unvalidated};

use crate::error::{RecurError, RecurResult};

/// A recurrence anchored at a start instant.
pub trait Expansion {
    type Instant: Instant;

    /// ## Summary
    /// Returns a fresh pull iterator over the instances, earliest first.
    ///
    /// The sequence is strictly increasing and may be unbounded. An `Err`
    /// item reports a fault while advancing.
    fn instances(&self) -> impl Iterator<Item = RecurResult<Self::Instant>> + '_;
}

/// A recurrence rule that can be anchored at a start instant.
pub trait Recurrence {
    type Instant: Instant;
    type Expansion: Expansion<Instant = Self::Instant>;

    /// ## Summary
    /// Anchors the rule at `start`.
    ///
    /// ## Errors
    /// Returns an error if the rule cannot be expanded from `start`.
    fn expand(&self, start: &Self::Instant) -> RecurResult<Self::Expansion>;
}

impl Expansion for RRuleSet {
    type Instant = DateTime<Tz>;

    fn instances(&self) -> impl Iterator<Item = RecurResult<DateTime<Tz>>> + '_ {
        self.into_iter().map(Ok)
    }
}

impl Recurrence for RRule<Unvalidated> {
    type Instant = DateTime<Tz>;
    type Expansion = RRuleSet;

    fn expand(&self, start: &DateTime<Tz>) -> RecurResult<RRuleSet> {
        let rrule_set = self.clone().build(*start)?;
        tracing::trace!(rruleset = %rrule_set, "Anchored recurrence rule");
        Ok(rrule_set)
    }
}

/// RRULE text such as `FREQ=WEEKLY;BYDAY=MO,WE`, parsed on every expansion.
impl Recurrence for str {
    type Instant = DateTime<Tz>;
    type Expansion = RRuleSet;

    fn expand(&self, start: &DateTime<Tz>) -> RecurResult<RRuleSet> {
        let rrule = self
            .parse::<RRule<Unvalidated>>()
            .map_err(|err| RecurError::RuleParse(err.to_string()))?;
        rrule.expand(start)
    }
}
