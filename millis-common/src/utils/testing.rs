use rand::{rngs::SmallRng, Rng as _, SeedableRng as _};

use crate::{Factor, Timestamp, DAY, HOUR, MINUTE, SECOND};

/// 2024-01-01T12:00:55Z
pub const NOON_PAST_55S: Timestamp = 1_704_110_455_000;
/// 2024-01-01T12:00:55.500Z
pub const NOON_PAST_55_5S: Timestamp = 1_704_110_455_500;
/// 2024-01-01T12:00:00Z
pub const NOON: Timestamp = 1_704_110_400_000;
/// 2024-01-01T00:00:00Z
pub const MIDNIGHT: Timestamp = 1_704_067_200_000;
/// 2024-01-01T12:34:56.789Z
pub const AFTERNOON: Timestamp = 1_704_112_496_789;

/// Every unit constant, smallest first.
pub const UNITS: [Factor; 4] = [SECOND, MINUTE, HOUR, DAY];

/// Timestamps that sit on or next to interesting edges: the epoch, unit boundaries on either
/// side of it, and values near the ends of the `i64` range that stay clear of overflow when
/// stepped by a day.
pub fn edge_timestamps() -> Vec<Timestamp> {
    let mut values = vec![0, 1, -1, 500, -500, 999, -999, 1_000, -1_000, -50_000, -60_000];
    for unit in UNITS {
        values.extend([unit, -unit, unit - 1, -unit + 1, unit + 1, -unit - 1]);
    }
    values.extend([
        NOON_PAST_55S,
        NOON_PAST_55_5S,
        NOON,
        MIDNIGHT,
        AFTERNOON,
        i64::MAX / 2,
        i64::MIN / 2,
    ]);
    values
}

/// Deterministic sample of `count` timestamps drawn from `seed`.
///
/// Half of the sample is spread over +-10 000 years around the epoch, the rest over +-2 days,
/// so both pre-epoch and near-epoch behaviour get exercised.
pub fn sample_timestamps(seed: u64, count: usize) -> Vec<Timestamp> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let wide = 10_000 * 366 * DAY;
    (0..count)
        .map(|i| {
            if i % 2 == 0 {
                rng.gen_range(-wide..=wide)
            } else {
                rng.gen_range(-2 * DAY..=2 * DAY)
            }
        })
        .collect()
}

/// Deterministic sample of `count` positive factors drawn from `seed`, mixed with the unit
/// constants.
pub fn sample_factors(seed: u64, count: usize) -> Vec<Factor> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut factors = UNITS.to_vec();
    factors.extend((0..count).map(|_| rng.gen_range(1..=7 * DAY)));
    factors
}

