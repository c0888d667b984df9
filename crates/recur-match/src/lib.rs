//! Test-suite matchers that check the instances generated by recurrence
//! rules.
//!
//! ```ignore
//! use chrono::{TimeZone, Weekday};
//! use recur_match::{assert_instances, predicate::on_weekdays};
//! use rrule::Tz;
//!
//! let start = Tz::UTC.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
//! assert_instances!("FREQ=WEEKLY;BYDAY=MO,WE", start, on_weekdays(&[Weekday::Mon, Weekday::Wed]));
//! ```

pub mod assertion;
pub mod description;
pub mod error;
pub mod instances;
pub mod matcher;
pub mod predicate;
pub mod recurrence;
pub mod results;

pub use assertion::{Verdict, assert_rule, check_rule};
pub use description::Description;
pub use error::{RecurError, RecurResult};
pub use instances::{InstancesMatcher, instances};
pub use matcher::{Matcher, MatcherExt, RuleMatcher};
pub use recur_match_core::{Instant, ScanBound, ScanLimits};
pub use recurrence::{Expansion, Recurrence};
pub use results::{ResultsMatcher, results};
