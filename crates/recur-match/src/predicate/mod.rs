//! Per-instant predicates for recurrence tests.

mod calendar;
mod combinator;
mod order;

pub use calendar::{
    CalendarField, FieldMatcher, WeekdayMatcher, at_hours, at_minutes, at_seconds, in_months,
    in_weeks_of_year, in_years, on_month_days, on_weekdays, on_year_days,
};
pub use combinator::{AllOf, AnyOf, Anything, Not, all_of, any_of, anything, not};
pub use order::{After, Before, after, before};
