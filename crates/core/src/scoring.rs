//! Scoring module - line-clear points, level, and gravity speed
//!
//! Classic single/double/triple/four-row reward curve, multiplied by the level at the
//! time of the clear. Level is derived from total lines; gravity speeds up linearly with
//! level and is clamped at a minimum tick.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES, START_LEVEL,
};

/// Points for clearing `rows` rows at `level`.
///
/// More than four rows at once cannot happen from a single piece; such counts are scored
/// as four.
pub fn calculate_line_score(rows: usize, level: u32) -> u32 {
    if rows == 0 {
        return 0;
    }
    let base = LINE_SCORES[rows.min(4)];
    base.saturating_mul(level)
}

/// Level for a total line count: `floor(lines / 10) + 1`
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + START_LEVEL
}

/// Gravity interval for a level: `max(100, 1000 - (level - 1) * 100)` ms
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let speedup = level
        .saturating_sub(START_LEVEL)
        .saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Session totals after applying one clear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points awarded for this clear
    pub points: u32,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
}

/// Apply a clear of `rows` rows to the given totals.
///
/// Points use the level in effect before the clear; level and interval are then
/// recomputed from the new line total. A zero-row clear changes nothing.
pub fn apply_clear(rows: usize, score: u32, lines: u32, level: u32) -> ScoreResult {
    if rows == 0 {
        return ScoreResult {
            points: 0,
            score,
            lines,
            level,
            drop_interval_ms: get_drop_interval_ms(level),
        };
    }

    let points = calculate_line_score(rows, level);
    let lines = lines.saturating_add(rows as u32);
    let level = level_for_lines(lines);

    ScoreResult {
        points,
        score: score.saturating_add(points),
        lines,
        level,
        drop_interval_ms: get_drop_interval_ms(level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_score_table() {
        assert_eq!(calculate_line_score(0, 1), 0);
        assert_eq!(calculate_line_score(1, 1), 100);
        assert_eq!(calculate_line_score(2, 1), 300);
        assert_eq!(calculate_line_score(3, 1), 500);
        assert_eq!(calculate_line_score(4, 1), 800);
    }

    #[test]
    fn test_line_score_level_multiplier() {
        assert_eq!(calculate_line_score(1, 3), 300);
        assert_eq!(calculate_line_score(4, 5), 4000);
    }

    #[test]
    fn test_level_for_lines() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(95), 10);
        assert_eq!(level_for_lines(250), 26);
    }

    #[test]
    fn test_drop_interval_all_levels() {
        for level in 1..=40u32 {
            let expected = 1000i64 - (level as i64 - 1) * 100;
            assert_eq!(get_drop_interval_ms(level) as i64, expected.max(100), "level {}", level);
        }
        assert_eq!(get_drop_interval_ms(1), 1000);
        assert_eq!(get_drop_interval_ms(10), 100);
        assert_eq!(get_drop_interval_ms(11), 100);
    }

    #[test]
    fn test_apply_clear_uses_level_before_clear() {
        // 8 lines at level 1, clearing 4 reaches 12 lines: scored at level 1, ends at level 2.
        let r = apply_clear(4, 1000, 8, 1);
        assert_eq!(r.points, 800);
        assert_eq!(r.score, 1800);
        assert_eq!(r.lines, 12);
        assert_eq!(r.level, 2);
        assert_eq!(r.drop_interval_ms, 900);
    }

    #[test]
    fn test_apply_clear_zero_rows_is_identity() {
        let r = apply_clear(0, 500, 3, 1);
        assert_eq!(r.points, 0);
        assert_eq!(r.score, 500);
        assert_eq!(r.lines, 3);
        assert_eq!(r.level, 1);
    }
}
