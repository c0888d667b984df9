//! Calendar-field predicates: month, day, week, year, and time of day.

use chrono::{Datelike, NaiveDate, Timelike, Weekday};

use crate::description::Description;
use crate::matcher::Matcher;

/// A calendar or clock field of an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarField {
    Month,
    MonthDay,
    YearDay,
    WeekOfYear,
    Year,
    Hour,
    Minute,
    Second,
}

impl CalendarField {
    /// Prefix used when describing a matcher over this field.
    #[must_use]
    pub const fn expectation(self) -> &'static str {
        match self {
            Self::Month => "in month ",
            Self::MonthDay => "on month day ",
            Self::YearDay => "on year day ",
            Self::WeekOfYear => "in week of year ",
            Self::Year => "in year ",
            Self::Hour => "at hour ",
            Self::Minute => "at minute ",
            Self::Second => "at second ",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::MonthDay => "month day",
            Self::YearDay => "year day",
            Self::WeekOfYear => "week of year",
            Self::Year => "year",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        }
    }

    fn value<T: Datelike + Timelike>(self, item: &T) -> i64 {
        match self {
            Self::Month => i64::from(item.month()),
            Self::MonthDay => i64::from(item.day()),
            Self::YearDay => i64::from(item.ordinal()),
            Self::WeekOfYear => i64::from(item.iso_week().week()),
            Self::Year => i64::from(item.year()),
            Self::Hour => i64::from(item.hour()),
            Self::Minute => i64::from(item.minute()),
            Self::Second => i64::from(item.second()),
        }
    }

    /// Length of the enclosing period for fields that accept negative
    /// (counted from the end) values.
    fn span<T: Datelike>(self, item: &T) -> Option<i64> {
        match self {
            Self::MonthDay => Some(i64::from(days_in_month(item.year(), item.month()))),
            Self::YearDay => Some(if NaiveDate::from_ymd_opt(item.year(), 2, 29).is_some() {
                366
            } else {
                365
            }),
            Self::WeekOfYear => {
                let iso_year = item.iso_week().year();
                Some(if NaiveDate::from_isoywd_opt(iso_year, 53, Weekday::Mon).is_some() {
                    53
                } else {
                    52
                })
            }
            Self::Month | Self::Year | Self::Hour | Self::Minute | Self::Second => None,
        }
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}

/// Matches instants whose `field` is one of `values`.
///
/// For month days, year days and ISO weeks a negative value counts from the
/// end of the period, so `-1` is the last day of the month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatcher {
    field: CalendarField,
    values: Vec<i32>,
}

impl FieldMatcher {
    #[must_use]
    pub fn new(field: CalendarField, values: &[i32]) -> Self {
        Self {
            field,
            values: values.to_vec(),
        }
    }
}

impl<T: Datelike + Timelike> Matcher<T> for FieldMatcher {
    fn matches(&self, item: &T) -> bool {
        let actual = self.field.value(item);
        let span = self.field.span(item);
        self.values.iter().map(|&v| i64::from(v)).any(|expected| {
            expected == actual || (expected < 0 && span.is_some_and(|len| len + 1 + expected == actual))
        })
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text(self.field.expectation())
            .append_list("[", ", ", "]", &self.values);
    }

    fn describe_mismatch(&self, item: &T, description: &mut Description) {
        description
            .append_text(self.field.name())
            .append_text(" was ")
            .append_value(self.field.value(item));
    }
}

/// Matches instants falling on one of the given weekdays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayMatcher {
    weekdays: Vec<Weekday>,
}

impl<T: Datelike> Matcher<T> for WeekdayMatcher {
    fn matches(&self, item: &T) -> bool {
        self.weekdays.contains(&item.weekday())
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("on weekday ")
            .append_list("[", ", ", "]", &self.weekdays);
    }

    fn describe_mismatch(&self, item: &T, description: &mut Description) {
        description
            .append_text("weekday was ")
            .append_value(item.weekday());
    }
}

#[must_use]
pub fn in_months(months: &[i32]) -> FieldMatcher {
    FieldMatcher::new(CalendarField::Month, months)
}

#[must_use]
pub fn on_weekdays(weekdays: &[Weekday]) -> WeekdayMatcher {
    WeekdayMatcher {
        weekdays: weekdays.to_vec(),
    }
}

#[must_use]
pub fn on_month_days(days: &[i32]) -> FieldMatcher {
    FieldMatcher::new(CalendarField::MonthDay, days)
}

#[must_use]
pub fn on_year_days(days: &[i32]) -> FieldMatcher {
    FieldMatcher::new(CalendarField::YearDay, days)
}

/// ISO 8601 week numbers.
#[must_use]
pub fn in_weeks_of_year(weeks: &[i32]) -> FieldMatcher {
    FieldMatcher::new(CalendarField::WeekOfYear, weeks)
}

#[must_use]
pub fn in_years(years: &[i32]) -> FieldMatcher {
    FieldMatcher::new(CalendarField::Year, years)
}

#[must_use]
pub fn at_hours(hours: &[i32]) -> FieldMatcher {
    FieldMatcher::new(CalendarField::Hour, hours)
}

#[must_use]
pub fn at_minutes(minutes: &[i32]) -> FieldMatcher {
    FieldMatcher::new(CalendarField::Minute, minutes)
}

#[must_use]
pub fn at_seconds(seconds: &[i32]) -> FieldMatcher {
    FieldMatcher::new(CalendarField::Second, seconds)
}
