//! End-to-end checks of rrule-generated instances.

use recur_match::{RecurError, ScanLimits, Verdict, assert_instances, check_rule, results};
use rrule::{RRule, Unvalidated};

include!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/instances_cases_data/mod.rs"));

fn monday() -> DateTime<Tz> {
    Tz::UTC.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
}

/// ## Summary
/// Runs every shared instances case against the rrule-backed source.
#[test_log::test]
fn instances_cases_integration() {
    for case in instances_cases() {
        tracing::debug!(case = case.name, "Running instances case");
        assert_case(&case);
    }
}

#[test_log::test]
fn parsed_rule_is_reusable() {
    let rule: RRule<Unvalidated> = "FREQ=WEEKLY;BYDAY=MO,FR".parse().expect("valid rule");
    let matcher = instances(monday(), on_weekdays(&[Weekday::Mon, Weekday::Fri]));

    let mut mismatch = Description::new();
    assert!(matcher.check(&rule, &mut mismatch).expect("valid rule"));
    assert!(matcher.check(&rule, &mut mismatch).expect("valid rule"));
    assert!(mismatch.is_empty());
}

#[test]
fn matcher_reused_across_rules() {
    let matcher = instances(monday(), in_months(&[1]));
    assert_eq!(
        check_rule("FREQ=DAILY;COUNT=31", &matcher).expect("valid rule"),
        Verdict::Satisfied
    );
    assert!(
        !check_rule("FREQ=DAILY;COUNT=32", &matcher)
            .expect("valid rule")
            .is_satisfied()
    );
}

#[test]
fn unbounded_rule_is_bounded_approximation() {
    // Every instance of this rule matches within the scanned horizon only:
    // after 10,000 days the count bound ends the scan.
    let matcher = instances(monday(), in_months(&(1..=12).collect::<Vec<_>>()));
    assert!(
        check_rule("FREQ=DAILY", &matcher)
            .expect("valid rule")
            .is_satisfied()
    );

    let tight = instances(monday(), in_months(&[1]))
        .with_limits(ScanLimits::new(31, 9_000).expect("valid limits"))
        .expect("valid limits");
    assert!(check_rule("FREQ=DAILY", &tight).expect("valid rule").is_satisfied());
}

#[test]
fn malformed_rule_surfaces_as_error() {
    let matcher = instances(monday(), in_months(&[1]));
    let mut mismatch = Description::new();
    let err = matcher
        .check("FREQ=SOMETIMES", &mut mismatch)
        .expect_err("must not parse");
    assert!(matches!(err, RecurError::RuleParse(_)));
    assert!(mismatch.is_empty());
}

#[test]
fn results_counts_rrule_instances() {
    assert!(
        check_rule("FREQ=WEEKLY;COUNT=4", &results(monday(), 4))
            .expect("valid rule")
            .is_satisfied()
    );
    assert_eq!(
        check_rule("FREQ=WEEKLY", &results(monday(), 4)).expect("valid rule"),
        Verdict::Mismatch {
            expected: "rule with 4 instances".to_string(),
            actual: "rule with more than 4 instances".to_string(),
        }
    );
}

#[test]
fn assert_macro_accepts_matching_rule() {
    assert_instances!(
        "FREQ=MONTHLY;COUNT=6;BYMONTHDAY=1",
        monday(),
        on_month_days(&[1]),
    );
}
