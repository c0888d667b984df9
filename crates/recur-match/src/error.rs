use thiserror::Error;

/// Errors raised while obtaining or advancing a recurrence.
///
/// A predicate mismatch is never an error; it is reported through the
/// matcher's boolean result and mismatch description.
#[derive(Error, Debug)]
pub enum RecurError {
    #[error("Failed to parse RRULE: {0}")]
    RuleParse(String),

    #[error("RRule error: {0}")]
    RRule(#[from] rrule::RRuleError),

    #[error("Instance generation failed: {0}")]
    Generation(String),

    #[error(transparent)]
    Core(#[from] recur_match_core::error::CoreError),
}

pub type RecurResult<T> = std::result::Result<T, RecurError>;
