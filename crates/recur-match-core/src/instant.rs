//! The point-in-time capability consumed by instance matchers.

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use rrule::Tz;

use crate::constants::BASIC_FORMAT;

/// A totally ordered point in time produced by a recurrence.
///
/// The year component (from [`Datelike`]) drives the year scan bound; the
/// textual form names the instance in mismatch reports.
pub trait Instant: Datelike {
    /// ## Summary
    /// Renders the instant in RFC 5545 basic form.
    ///
    /// UTC instants carry a trailing `Z`, zoned instants are prefixed with
    /// their `TZID`, and floating instants are bare.
    fn to_text(&self) -> String;
}

impl Instant for DateTime<Tz> {
    fn to_text(&self) -> String {
        let local = self.naive_local().format(BASIC_FORMAT);
        if let Tz::Tz(tz) = self.timezone() {
            if tz == chrono_tz::UTC {
                format!("{local}Z")
            } else {
                format!("TZID={tz}:{local}")
            }
        } else {
            // System-local zone has no stable identifier; render as floating.
            local.to_string()
        }
    }
}

impl Instant for DateTime<Utc> {
    fn to_text(&self) -> String {
        format!("{}Z", self.naive_utc().format(BASIC_FORMAT))
    }
}

impl Instant for NaiveDateTime {
    fn to_text(&self) -> String {
        self.format(BASIC_FORMAT).to_string()
    }
}
