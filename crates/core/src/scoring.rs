//! Scoring module - line clear points, leveling and gravity speed
//!
//! All functions here are pure lookups so the rules can be tested without a
//! running game.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES,
    STARTING_LEVEL,
};

/// Points for clearing `lines` rows at once at `level`.
///
/// 1 → 100, 2 → 300, 3 → 500, 4 → 800, each multiplied by the level.
/// Any other line count (0, negative, more than 4) scores nothing.
pub fn calculate_line_score(lines: i32, level: u32) -> u32 {
    let base = match usize::try_from(lines) {
        Ok(n @ 1..=4) => LINE_SCORES[n],
        _ => return 0,
    };
    base.saturating_mul(level)
}

/// Level reached after clearing `total_lines` in one game: `lines / 10 + 1`.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + STARTING_LEVEL
}

/// Gravity interval for a level: `max(100, 1000 - (level - 1) * 100)`.
///
/// Levels below 1 are treated as level 1.
pub fn get_drop_interval_ms(level: i32) -> u32 {
    let steps = u32::try_from(level.max(1) - 1).unwrap_or(0);
    BASE_DROP_MS
        .saturating_sub(steps.saturating_mul(DROP_STEP_MS))
        .max(DROP_INTERVAL_MIN_MS)
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
        assert_eq!(calculate_line_score(4, 2), 1600);
        assert_eq!(calculate_line_score(1, 2), 200);
        assert_eq!(calculate_line_score(2, 2), 600);
    }

    #[test]
    fn test_line_score_out_of_range() {
        assert_eq!(calculate_line_score(5, 1), 0);
        assert_eq!(calculate_line_score(-1, 3), 0);
        assert_eq!(calculate_line_score(i32::MAX, 3), 0);
        assert_eq!(calculate_line_score(i32::MIN, 3), 0);
    }

    #[test]
    fn test_line_score_saturates() {
        assert_eq!(calculate_line_score(4, u32::MAX), u32::MAX);
    }

    #[test]
    fn test_level_for_lines() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(29), 3);
        assert_eq!(level_for_lines(30), 4);
    }

    #[test]
    fn test_drop_interval() {
        assert_eq!(get_drop_interval_ms(1), 1000);
        assert_eq!(get_drop_interval_ms(2), 900);
        assert_eq!(get_drop_interval_ms(6), 500);
        assert_eq!(get_drop_interval_ms(10), 100);
        assert_eq!(get_drop_interval_ms(11), 100);
        assert_eq!(get_drop_interval_ms(20), 100);
    }

    #[test]
    fn test_drop_interval_non_positive_level() {
        assert_eq!(get_drop_interval_ms(0), 1000);
        assert_eq!(get_drop_interval_ms(-5), 1000);
        assert_eq!(get_drop_interval_ms(i32::MIN), 1000);
        assert_eq!(get_drop_interval_ms(i32::MAX), 100);
    }
}
