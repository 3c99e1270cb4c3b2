//! Scoring module - points awarded when a piece lands
//!
//! A landing is worth `speed * 10`, plus `speed * 100` for every row it
//! clears. There is no combo, level or back-to-back bonus.

/// Points for placing a piece
pub const PLACEMENT_POINTS: u32 = 10;

/// Points per cleared row
pub const ROW_POINTS: u32 = 100;

/// Calculate the score for one landing.
///
/// `gravity_speed`: current speed multiplier (1 in a fresh game)
/// `cleared_rows`: number of rows removed by this landing
pub fn landing_score(gravity_speed: u32, cleared_rows: usize) -> u32 {
    let rows = u32::try_from(cleared_rows).unwrap_or(u32::MAX);
    gravity_speed
        .saturating_mul(PLACEMENT_POINTS)
        .saturating_add(gravity_speed.saturating_mul(ROW_POINTS).saturating_mul(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_without_clear() {
        assert_eq!(landing_score(1, 0), 10);
        assert_eq!(landing_score(3, 0), 30);
    }

    #[test]
    fn test_landing_with_clears() {
        assert_eq!(landing_score(1, 1), 110);
        assert_eq!(landing_score(1, 2), 210);
        assert_eq!(landing_score(2, 4), 820);
    }

    #[test]
    fn test_zero_speed_scores_nothing() {
        assert_eq!(landing_score(0, 4), 0);
    }

    #[test]
    fn test_saturates() {
        assert_eq!(landing_score(u32::MAX, 4), u32::MAX);
    }
}
