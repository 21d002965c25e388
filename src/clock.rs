//! Calendar year source for the footer.
//!
//! The copyright year is read at render time, never stored. Rendering takes
//! a [`Clock`] so tests can pin the year.

use std::time::{SystemTime, UNIX_EPOCH};

pub trait Clock {
    /// Current calendar year (UTC).
    fn current_year(&self) -> i32;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        let secs = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => since.as_secs() as i64,
            Err(before) => -(before.duration().as_secs() as i64),
        };
        year_from_unix_seconds(secs)
    }
}

/// A clock stuck in one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

/// Proleptic Gregorian year of a Unix timestamp.
///
/// Days-to-civil conversion over 400-year eras (146 097 days each), with
/// years starting on March 1st so the leap day is the last day of the year.
pub fn year_from_unix_seconds(secs: i64) -> i32 {
    let days = secs.div_euclid(86_400);
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let year = yoe + era * 400;
    // mp 10 and 11 are January and February of the following civil year.
    let year = if mp >= 10 { year + 1 } else { year };
    year as i32
}
