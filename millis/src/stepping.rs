//! Moving a timestamp forward or backward by a number of units.
//!
//! The plain forms step by exactly one unit. The `_by` forms take a real-valued count, so half a
//! second or a quarter of an hour are expressible; the product `unit * n` is truncated toward
//! zero to a whole number of milliseconds before it is applied.

use millis_common::{Factor, Timestamp, DAY, HOUR, MINUTE, SECOND};

use crate::Error;

/// Add one second.
pub fn increment_second(ts: Timestamp) -> Result<Timestamp, Error> {
    shift(ts, SECOND)
}

/// Add `n` seconds.
pub fn increment_second_by(ts: Timestamp, n: f64) -> Result<Timestamp, Error> {
    shift(ts, scaled(SECOND, n)?)
}

/// Subtract one second.
pub fn decrement_second(ts: Timestamp) -> Result<Timestamp, Error> {
    unshift(ts, SECOND)
}

/// Subtract `n` seconds.
pub fn decrement_second_by(ts: Timestamp, n: f64) -> Result<Timestamp, Error> {
    unshift(ts, scaled(SECOND, n)?)
}

/// Add one minute.
pub fn increment_minute(ts: Timestamp) -> Result<Timestamp, Error> {
    shift(ts, MINUTE)
}

/// Add `n` minutes.
pub fn increment_minute_by(ts: Timestamp, n: f64) -> Result<Timestamp, Error> {
    shift(ts, scaled(MINUTE, n)?)
}

/// Subtract one minute.
pub fn decrement_minute(ts: Timestamp) -> Result<Timestamp, Error> {
    unshift(ts, MINUTE)
}

/// Subtract `n` minutes.
pub fn decrement_minute_by(ts: Timestamp, n: f64) -> Result<Timestamp, Error> {
    unshift(ts, scaled(MINUTE, n)?)
}

/// Add one hour.
pub fn increment_hour(ts: Timestamp) -> Result<Timestamp, Error> {
    shift(ts, HOUR)
}

/// Add `n` hours.
pub fn increment_hour_by(ts: Timestamp, n: f64) -> Result<Timestamp, Error> {
    shift(ts, scaled(HOUR, n)?)
}

/// Subtract one hour.
pub fn decrement_hour(ts: Timestamp) -> Result<Timestamp, Error> {
    unshift(ts, HOUR)
}

/// Subtract `n` hours.
pub fn decrement_hour_by(ts: Timestamp, n: f64) -> Result<Timestamp, Error> {
    unshift(ts, scaled(HOUR, n)?)
}

/// Add one day.
pub fn increment_day(ts: Timestamp) -> Result<Timestamp, Error> {
    shift(ts, DAY)
}

/// Add `n` days of exactly [`DAY`] milliseconds each.
pub fn increment_day_by(ts: Timestamp, n: f64) -> Result<Timestamp, Error> {
    shift(ts, scaled(DAY, n)?)
}

/// Subtract one day.
pub fn decrement_day(ts: Timestamp) -> Result<Timestamp, Error> {
    unshift(ts, DAY)
}

/// Subtract `n` days of exactly [`DAY`] milliseconds each.
pub fn decrement_day_by(ts: Timestamp, n: f64) -> Result<Timestamp, Error> {
    unshift(ts, scaled(DAY, n)?)
}

fn shift(ts: Timestamp, millis: i64) -> Result<Timestamp, Error> {
    ts.checked_add(millis).ok_or(Error::Overflow)
}

fn unshift(ts: Timestamp, millis: i64) -> Result<Timestamp, Error> {
    ts.checked_sub(millis).ok_or(Error::Overflow)
}

/// `unit * n`, truncated toward zero.
fn scaled(unit: Factor, n: f64) -> Result<i64, Error> {
    if n.is_nan() {
        return Err(Error::InvalidCount(n));
    }
    let millis = (unit as f64 * n).trunc();
    // 2^63 is exactly representable, `i64::MAX as f64` rounds up to it.
    if millis < i64::MIN as f64 || millis >= i64::MAX as f64 {
        return Err(Error::Overflow);
    }
    Ok(millis as i64)
}
