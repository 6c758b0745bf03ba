use super::DailyStats;

pub const BASE_SCORE: i64 = 50;

const PER_WORKOUT: i64 = 15;
const HYDRATION_BONUS: i64 = 10;
const HYDRATION_TARGET_OZ: u32 = 64;
const SLEEP_BONUS: i64 = 10;
const SLEEP_TARGET_HOURS: f64 = 7.0;
const PER_CRAVING: i64 = 5;

/// Wellness score in 0..=100 derived from a day's metrics.
pub fn compute_score(stats: &DailyStats) -> u32 {
    let mut score = BASE_SCORE;
    score += i64::from(stats.workouts_completed) * PER_WORKOUT;
    if stats.water_intake_oz >= HYDRATION_TARGET_OZ {
        score += HYDRATION_BONUS;
    }
    if stats.sleep_hours >= SLEEP_TARGET_HOURS {
        score += SLEEP_BONUS;
    }
    score -= i64::from(stats.junk_food_cravings) * PER_CRAVING;
    score.clamp(0, 100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> DailyStats {
        DailyStats::new("2024-01-01")
    }

    #[test]
    fn empty_day_is_neutral() {
        assert_eq!(compute_score(&day()), 50);
    }

    #[test]
    fn thresholds_are_inclusive() {
        let mut stats = day();
        stats.water_intake_oz = 63;
        stats.sleep_hours = 6.9;
        assert_eq!(compute_score(&stats), 50);

        stats.water_intake_oz = 64;
        stats.sleep_hours = 7.0;
        assert_eq!(compute_score(&stats), 70);
    }

    #[test]
    fn clamps_both_ends() {
        let mut stats = day();
        stats.workouts_completed = 10;
        assert_eq!(compute_score(&stats), 100);

        let mut stats = day();
        stats.junk_food_cravings = 30;
        assert_eq!(compute_score(&stats), 0);
    }

    #[test]
    fn mixed_day() {
        let mut stats = day();
        stats.workouts_completed = 2;
        stats.water_intake_oz = 64;
        stats.sleep_hours = 7.0;
        stats.junk_food_cravings = 1;
        assert_eq!(compute_score(&stats), 95);
    }
}
