use std::time::Duration;

use crate::config::{
    BASE_TICK_INTERVAL_MS, MAX_SPEED_LEVEL, MIN_TICK_INTERVAL_MS, POINTS_PER_SPEED_LEVEL,
    TICK_INTERVAL_STEP_MS,
};

/// Maps a cumulative score to its speed level.
///
/// One level per 30 points, starting at 1 and capped at 10. Monotonic
/// non-decreasing in `score`.
#[must_use]
pub fn speed_level_for_score(score: u32) -> u32 {
    (score / POINTS_PER_SPEED_LEVEL + 1).min(MAX_SPEED_LEVEL)
}

/// Maps a speed level to the tick interval.
///
/// Linear ramp from 200ms at level 1, 12ms faster per level, with an 80ms
/// floor. The level cap means normal play bottoms out at 92ms (level 10);
/// the floor only binds for out-of-range levels. The cap/floor interaction
/// is load-bearing: resist rounding this into a nicer curve.
#[must_use]
pub fn tick_interval_for_level(level: u32) -> Duration {
    let penalty = u64::from(level.saturating_sub(1)) * TICK_INTERVAL_STEP_MS;
    let ms = BASE_TICK_INTERVAL_MS
        .saturating_sub(penalty)
        .max(MIN_TICK_INTERVAL_MS);
    Duration::from_millis(ms)
}
