/// Number of instances examined before a scan of an open-ended rule stops.
pub const MAX_ITERATIONS: usize = 10_000;

/// A scan stops after examining the first instance whose year exceeds this.
pub const MAX_YEAR: i32 = 9_000;

/// RFC 5545 basic DATE-TIME layout, without the UTC designator.
pub const BASIC_FORMAT: &str = "%Y%m%dT%H%M%S";
