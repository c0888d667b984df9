//! Safety bounds for scanning potentially unbounded recurrences.

use std::fmt;

use serde::Deserialize;

use crate::constants::{MAX_ITERATIONS, MAX_YEAR};
use crate::error::{CoreError, CoreResult};

/// Which safety bound stopped a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanBound {
    /// The number of examined instances reached `max_instances`.
    Count,
    /// The last examined instance lies after `max_year`.
    Year,
}

impl ScanBound {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for ScanBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Soft limits on how far a recurrence is scanned.
///
/// Reaching either limit ends the scan as if the recurrence had run out of
/// instances. The two limits are independent: either one alone stops the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScanLimits {
    /// Maximum number of instances to examine.
    pub max_instances: usize,
    /// Stop after the first instance whose year is greater than this.
    pub max_year: i32,
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            max_instances: MAX_ITERATIONS,
            max_year: MAX_YEAR,
        }
    }
}

impl ScanLimits {
    /// ## Summary
    /// Creates validated scan limits.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidLimits` if `max_instances` is zero.
    pub fn new(max_instances: usize, max_year: i32) -> CoreResult<Self> {
        Self {
            max_instances,
            max_year,
        }
        .validated()
    }

    /// ## Summary
    /// Checks limits that may have been built by hand or deserialized.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidLimits` if `max_instances` is zero.
    pub fn validated(self) -> CoreResult<Self> {
        if self.max_instances == 0 {
            return Err(CoreError::InvalidLimits(
                "max_instances must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }

    /// ## Summary
    /// Returns the bound that stops the scan after examining the `count`-th
    /// instance, whose year is `year`, or `None` if scanning may continue.
    #[must_use]
    pub const fn reached(&self, count: usize, year: i32) -> Option<ScanBound> {
        if count >= self.max_instances {
            Some(ScanBound::Count)
        } else if year > self.max_year {
            Some(ScanBound::Year)
        } else {
            None
        }
    }
}
