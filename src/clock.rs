//! Clock abstraction for expiry arithmetic
//!
//! Minting and verification both read the current time through [`Clock`], so
//! expiry boundaries can be tested deterministically instead of sleeping.
//! The plain entry points wire in [`SystemClock`]; the `_with_clock` variants
//! accept any implementation, typically [`FixedClock`] in tests.

use chrono::{DateTime, Utc};

/// Source of the current wall-clock time.
pub trait Clock {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the process-wide system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
///
/// Lets callers pin "now" on both sides of the token lifecycle:
///
/// ```ignore
/// let issued_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
/// let token = create_with_clock(&claims, Duration::hours(1), secret, &FixedClock(issued_at))?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
