use chrono::{DateTime, NaiveDateTime, TimeZone, Weekday};
use recur_match::predicate::{
    after, all_of, at_hours, before, in_months, in_years, not, on_month_days, on_weekdays,
    on_year_days,
};
use recur_match::{Description, Matcher, MatcherExt, RuleMatcher, instances};
use rrule::Tz;

pub struct InstancesCase {
    pub name: &'static str,
    pub rule: &'static str,
    pub start: &'static str,
    pub tzid: Option<&'static str>,
    pub predicate: fn(DateTime<Tz>) -> Box<dyn Matcher<DateTime<Tz>>>,
    /// `None` when every examined instance must match.
    pub mismatch: Option<&'static str>,
}

pub fn instances_cases() -> Vec<InstancesCase> {
    vec![
        InstancesCase {
            name: "weekly_byday_count",
            rule: "FREQ=WEEKLY;COUNT=10;BYDAY=MO,WE",
            start: "2024-01-01T09:00:00",
            tzid: None,
            predicate: |_| on_weekdays(&[Weekday::Mon, Weekday::Wed]).boxed(),
            mismatch: None,
        },
        InstancesCase {
            name: "weekly_wrong_weekday",
            rule: "FREQ=WEEKLY;COUNT=5",
            start: "2024-01-01T09:00:00",
            tzid: None,
            predicate: |_| on_weekdays(&[Weekday::Tue]).boxed(),
            mismatch: Some("instance 20240101T090000Z weekday was Mon"),
        },
        InstancesCase {
            name: "monthly_last_day_unbounded",
            rule: "FREQ=MONTHLY;BYMONTHDAY=-1",
            start: "2024-01-31T12:00:00",
            tzid: None,
            predicate: |_| on_month_days(&[-1]).boxed(),
            mismatch: None,
        },
        InstancesCase {
            name: "leap_day_until_year_bound",
            rule: "FREQ=YEARLY;BYMONTH=2;BYMONTHDAY=29",
            start: "2024-02-29T00:00:00",
            tzid: None,
            predicate: |_| all_of(vec![in_months(&[2]).boxed(), on_year_days(&[60]).boxed()]).boxed(),
            mismatch: None,
        },
        InstancesCase {
            name: "yearly_past_max_year",
            rule: "FREQ=YEARLY",
            start: "8995-07-04T00:00:00",
            tzid: None,
            predicate: |_| not(in_years(&[9002])).boxed(),
            mismatch: None,
        },
        InstancesCase {
            name: "daily_crosses_bound",
            rule: "FREQ=DAILY;COUNT=3",
            start: "2012-02-01T09:30:00",
            tzid: None,
            predicate: |_| before(utc("2012-02-03T00:00:00")).boxed(),
            mismatch: Some("instance 20120203T093000Z was 20120203T093000Z"),
        },
        InstancesCase {
            name: "never_before_start",
            rule: "FREQ=HOURLY;INTERVAL=7",
            start: "2012-02-01T09:30:00",
            tzid: None,
            predicate: |start| not(before(start)).boxed(),
            mismatch: None,
        },
        InstancesCase {
            name: "strictly_after_start_fails_on_start",
            rule: "FREQ=HOURLY;COUNT=2",
            start: "2012-02-01T09:30:00",
            tzid: None,
            predicate: |start| after(start).boxed(),
            mismatch: Some("instance 20120201T093000Z was 20120201T093000Z"),
        },
        InstancesCase {
            name: "dst_keeps_wall_clock",
            rule: "FREQ=DAILY;COUNT=3",
            start: "2021-03-13T09:00:00",
            tzid: Some("America/New_York"),
            predicate: |_| at_hours(&[9]).boxed(),
            mismatch: None,
        },
        InstancesCase {
            name: "zoned_wrong_hour",
            rule: "FREQ=DAILY;COUNT=3",
            start: "2021-03-13T09:00:00",
            tzid: Some("America/New_York"),
            predicate: |_| at_hours(&[10]).boxed(),
            mismatch: Some("instance TZID=America/New_York:20210313T090000 hour was 9"),
        },
    ]
}

pub fn case_start(case: &InstancesCase) -> DateTime<Tz> {
    let naive = NaiveDateTime::parse_from_str(case.start, "%Y-%m-%dT%H:%M:%S")
        .unwrap_or_else(|err| panic!("Failed to parse start of {}: {}", case.name, err));
    let tz = case.tzid.map_or(Tz::UTC, |tzid| {
        Tz::Tz(
            tzid.parse()
                .unwrap_or_else(|err| panic!("Unknown TZID {tzid} in {}: {}", case.name, err)),
        )
    });
    tz.from_local_datetime(&naive)
        .single()
        .unwrap_or_else(|| panic!("Ambiguous start for {}", case.name))
}

pub fn assert_case(case: &InstancesCase) {
    let start = case_start(case);
    let matcher = instances(start, (case.predicate)(start));
    let mut mismatch = Description::new();

    let matched = matcher
        .check(case.rule, &mut mismatch)
        .unwrap_or_else(|err| panic!("Case {} failed to expand: {}", case.name, err));

    match case.mismatch {
        None => {
            assert!(matched, "Case {} mismatched: {}", case.name, mismatch);
            assert!(mismatch.is_empty(), "Case {} wrote a report", case.name);
        }
        Some(expected) => {
            assert!(!matched, "Case {} unexpectedly matched", case.name);
            assert_eq!(mismatch.as_str(), expected, "Case {} report differs", case.name);
        }
    }
}

fn utc(value: &str) -> DateTime<Tz> {
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .unwrap_or_else(|err| panic!("Failed to parse {value}: {err}"));
    Tz::UTC.from_utc_datetime(&naive)
}
