//! Scoring and progression rules.
//!
//! Line clears pay a base amount per cleared-row count multiplied by the
//! level at the time of the clear. Levels advance every ten lines and each
//! level shaves 50ms off the gravity interval down to a 100ms floor.

use blockfall_types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_MS_PER_LEVEL, HARD_DROP_POINTS, LINES_PER_LEVEL,
    LINE_SCORES, SOFT_DROP_POINTS,
};

/// Points for clearing `rows` rows in one lock, at the given level.
///
/// A single lock spans at most 4 rows on its own; a sweep can remove more
/// when full rows were already sitting in the grid, and pays the 4-row
/// rate once in that case.
pub fn line_points(rows: u32, level: u32) -> u32 {
    let idx = (rows as usize).min(LINE_SCORES.len() - 1);
    LINE_SCORES[idx] * level
}

/// Points for descending `cells` cells under player control.
pub fn drop_points(cells: u32, hard: bool) -> u32 {
    if hard {
        cells * HARD_DROP_POINTS
    } else {
        cells * SOFT_DROP_POINTS
    }
}

/// Level for a total cleared-line count. Starts at 1.
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level, in milliseconds.
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub((level - 1) * DROP_MS_PER_LEVEL)
        .max(DROP_INTERVAL_MIN_MS)
}
