//! Stepping to the unit boundary before or after the one containing a timestamp.
//!
//! `last_*` returns the start of the unit preceding the one that contains `ts`, and `next_*`
//! returns the start of the unit following it. Both always move at least one whole unit away
//! from the containing boundary, even when `ts` is exactly on it: an aligned `ts` maps to
//! `ts - unit` and `ts + unit` respectively.

use millis_common::{Factor, Timestamp, DAY, HOUR, MINUTE, SECOND};

use crate::{rounding::floor, Error};

/// Start of the previous second.
pub fn last_second(ts: Timestamp) -> Result<Timestamp, Error> {
    last(ts, SECOND)
}

/// Start of the next second.
pub fn next_second(ts: Timestamp) -> Result<Timestamp, Error> {
    next(ts, SECOND)
}

/// Start of the previous minute.
pub fn last_minute(ts: Timestamp) -> Result<Timestamp, Error> {
    last(ts, MINUTE)
}

/// Start of the next minute.
pub fn next_minute(ts: Timestamp) -> Result<Timestamp, Error> {
    next(ts, MINUTE)
}

/// Start of the previous hour.
pub fn last_hour(ts: Timestamp) -> Result<Timestamp, Error> {
    last(ts, HOUR)
}

/// Start of the next hour.
pub fn next_hour(ts: Timestamp) -> Result<Timestamp, Error> {
    next(ts, HOUR)
}

/// Start of the previous UTC day.
///
/// For a local-time day boundary, convert with [`crate::calendar`] first.
pub fn last_day(ts: Timestamp) -> Result<Timestamp, Error> {
    last(ts, DAY)
}

/// Start of the next UTC day.
pub fn next_day(ts: Timestamp) -> Result<Timestamp, Error> {
    next(ts, DAY)
}

fn last(ts: Timestamp, unit: Factor) -> Result<Timestamp, Error> {
    floor(ts, unit)?.checked_sub(unit).ok_or(Error::Overflow)
}

fn next(ts: Timestamp, unit: Factor) -> Result<Timestamp, Error> {
    floor(ts, unit)?.checked_add(unit).ok_or(Error::Overflow)
}
