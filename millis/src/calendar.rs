//! Bridging between millisecond timestamps and calendar values.
//!
//! This is the only module that knows about timezones. Lookups go to the IANA database bundled
//! with `chrono-tz`; all offset and DST rules are chrono's. Boundary arithmetic elsewhere in the
//! crate stays UTC-epoch-relative.

use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use millis_common::Timestamp;

use crate::Error;

/// A calendar value that can be reduced to milliseconds since the epoch.
pub trait ToTimestamp {
    /// Milliseconds since the epoch, sub-millisecond precision truncated toward zero.
    fn to_timestamp(&self) -> Timestamp;
}

impl<Z: TimeZone> ToTimestamp for DateTime<Z> {
    fn to_timestamp(&self) -> Timestamp {
        truncated_millis(self.timestamp(), self.timestamp_subsec_nanos())
    }
}

/// Naive values are read as UTC wall-clock time, never as host local time, so the result does not
/// depend on the machine's zone. Attach a zone first (`TimeZone::from_local_datetime`) to read
/// them elsewhere.
impl ToTimestamp for NaiveDateTime {
    fn to_timestamp(&self) -> Timestamp {
        self.and_utc().to_timestamp()
    }
}

/// Convert a calendar value to milliseconds since the epoch.
///
/// ```
/// use chrono::{TimeZone as _, Utc};
///
/// let noon = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
/// assert_eq!(millis::to_timestamp(&noon), 1_704_110_400_000);
/// ```
pub fn to_timestamp(value: &impl ToTimestamp) -> Timestamp {
    value.to_timestamp()
}

/// Convert a timestamp to a calendar value in the IANA timezone named `zone`, e.g.
/// `"Europe/Madrid"` or `"UTC"`.
pub fn to_calendar(ts: Timestamp, zone: &str) -> Result<DateTime<Tz>, Error> {
    let tz = zone.parse::<Tz>().map_err(|_| {
        tracing::debug!(zone, "unknown timezone");
        Error::InvalidTimezone(zone.to_string())
    })?;
    to_calendar_in(ts, &tz)
}

/// Convert a timestamp to a calendar value in the given timezone.
pub fn to_calendar_in<Z: TimeZone>(ts: Timestamp, tz: &Z) -> Result<DateTime<Z>, Error> {
    DateTime::from_timestamp_millis(ts)
        .map(|utc| utc.with_timezone(tz))
        .ok_or_else(|| {
            tracing::debug!(ts, "timestamp outside calendar range");
            Error::OutOfRange(ts)
        })
}

fn truncated_millis(secs: i64, subsec_nanos: u32) -> Timestamp {
    // chrono's range is a few hundred thousand years, far inside i64 milliseconds.
    let millis = secs * 1_000 + i64::from(subsec_nanos / 1_000_000);
    // Before the epoch `secs` is floored, so a sub-millisecond remainder moves back up.
    if secs < 0 && subsec_nanos % 1_000_000 != 0 {
        millis + 1
    } else {
        millis
    }
}
