//! Generic floor and ceiling of a timestamp to a multiple of a factor.
//!
//! Rounding uses Euclidean remainders, so the result is the same boundary grid on both sides of
//! the epoch: `floor` always moves toward negative infinity and `ceil` toward positive infinity.

use millis_common::{Factor, Timestamp, HOUR};

use crate::Error;

/// Round `ts` down to the greatest multiple of `factor` that is `<= ts`.
///
/// Fails with [`Error::InvalidFactor`] if `factor <= 0`, and with [`Error::Overflow`] if the
/// boundary lies below `i64::MIN`.
pub fn floor(ts: Timestamp, factor: Factor) -> Result<Timestamp, Error> {
    let offset = offset_in_unit(ts, factor)?;
    ts.checked_sub(offset).ok_or(Error::Overflow)
}

/// Round `ts` up to the smallest multiple of `factor` that is `>= ts`.
///
/// An already aligned `ts` is returned unchanged. Fails with [`Error::InvalidFactor`] if
/// `factor <= 0`, and with [`Error::Overflow`] if the boundary lies above `i64::MAX`.
pub fn ceil(ts: Timestamp, factor: Factor) -> Result<Timestamp, Error> {
    match offset_in_unit(ts, factor)? {
        0 => Ok(ts),
        offset => ts.checked_add(factor - offset).ok_or(Error::Overflow),
    }
}

/// [`floor`] with the default factor, [`HOUR`].
pub fn floor_hour(ts: Timestamp) -> Result<Timestamp, Error> {
    floor(ts, HOUR)
}

/// [`ceil`] with the default factor, [`HOUR`].
pub fn ceil_hour(ts: Timestamp) -> Result<Timestamp, Error> {
    ceil(ts, HOUR)
}

/// Distance from the floor boundary, always in `0..factor`.
fn offset_in_unit(ts: Timestamp, factor: Factor) -> Result<i64, Error> {
    if factor <= 0 {
        return Err(Error::InvalidFactor(factor));
    }
    Ok(ts.rem_euclid(factor))
}
