//! Experience Adjuster — additive bonus/penalty from years and seniority signals.

use super::config::{ScoringConfig, SeniorityLevel};
use super::model::ExperienceContext;

/// Candidate years are estimated as `ratio × ASSUMED_REQUIRED_YEARS` when
/// calibrating seniority, since a typical posting asks for 3–5 years.
const ASSUMED_REQUIRED_YEARS: f64 = 4.0;

/// Additive score adjustment. The ratio band and the seniority adjustment stack.
pub fn experience_adjustment(experience: &ExperienceContext, config: &ScoringConfig) -> i32 {
    let rules = &config.experience;
    let ratio = experience.ratio();

    let mut adjustment = if ratio < 0.5 {
        rules.below_50pct
    } else if ratio < 0.75 {
        rules.below_75pct
    } else if ratio >= 1.5 {
        rules.exceeds_by_50pct
    } else {
        0
    };

    if experience.is_senior_role {
        if experience.seniority_signals_found >= 2 {
            adjustment += rules.seniority_bonus;
        } else if experience.seniority_signals_found == 0 {
            adjustment += rules.seniority_penalty;
        }
    }

    adjustment
}

/// Estimated seniority level and the calibration bonus it earns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeniorityCalibration {
    pub level: SeniorityLevel,
    pub bonus: u32,
}

/// First configured level whose inclusive range contains the estimated years.
/// Estimates falling between ranges resolve to mid level.
pub fn seniority_calibration(experience_ratio: f64, config: &ScoringConfig) -> SeniorityCalibration {
    let estimated_years = experience_ratio * ASSUMED_REQUIRED_YEARS;

    let matched = config
        .seniority_levels
        .iter()
        .find(|level| level.min_years <= estimated_years && estimated_years <= level.max_years);

    match matched {
        Some(level) => SeniorityCalibration {
            level: level.level,
            bonus: level.contextual_bonus,
        },
        None => {
            let bonus = config
                .seniority_levels
                .iter()
                .find(|level| level.level == SeniorityLevel::Mid)
                .map(|level| level.contextual_bonus)
                .unwrap_or(0);
            SeniorityCalibration {
                level: SeniorityLevel::Mid,
                bonus,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(required: f64, candidate: f64, senior: bool, signals: u32) -> ExperienceContext {
        ExperienceContext {
            required_years: required,
            candidate_years: candidate,
            is_senior_role: senior,
            seniority_signals_found: signals,
        }
    }

    #[test]
    fn test_ratio_bands() {
        let config = ScoringConfig::default();
        assert_eq!(experience_adjustment(&ctx(10.0, 4.0, false, 0), &config), -15);
        assert_eq!(experience_adjustment(&ctx(10.0, 6.0, false, 0), &config), -8);
        assert_eq!(experience_adjustment(&ctx(10.0, 10.0, false, 0), &config), 0);
        assert_eq!(experience_adjustment(&ctx(10.0, 15.0, false, 0), &config), 3);
        assert_eq!(experience_adjustment(&ctx(0.0, 1.0, false, 0), &config), 0);
    }

    #[test]
    fn test_boundary_ratios() {
        let config = ScoringConfig::default();
        // 0.5 is not "below 50%", 0.75 is not "below 75%".
        assert_eq!(experience_adjustment(&ctx(4.0, 2.0, false, 0), &config), -8);
        assert_eq!(experience_adjustment(&ctx(4.0, 3.0, false, 0), &config), 0);
        assert_eq!(experience_adjustment(&ctx(4.0, 6.0, false, 0), &config), 3);
    }

    #[test]
    fn test_seniority_adjustment_stacks_with_ratio() {
        let config = ScoringConfig::default();
        assert_eq!(experience_adjustment(&ctx(5.0, 8.0, true, 2), &config), 8);
        assert_eq!(experience_adjustment(&ctx(10.0, 2.0, true, 0), &config), -25);
        // Exactly one signal: neither bonus nor penalty.
        assert_eq!(experience_adjustment(&ctx(5.0, 5.0, true, 1), &config), 0);
        // Non-senior roles ignore signals.
        assert_eq!(experience_adjustment(&ctx(5.0, 5.0, false, 0), &config), 0);
    }

    #[test]
    fn test_seniority_calibration_levels() {
        let config = ScoringConfig::default();
        let entry = seniority_calibration(0.25, &config);
        assert_eq!(entry.level, SeniorityLevel::Entry);
        assert_eq!(entry.bonus, 0);

        let mid = seniority_calibration(1.0, &config);
        assert_eq!(mid.level, SeniorityLevel::Mid);
        assert_eq!(mid.bonus, 5);

        let senior = seniority_calibration(2.0, &config);
        assert_eq!(senior.level, SeniorityLevel::Senior);
        assert_eq!(senior.bonus, 10);

        // 10 estimated years matches senior first (inclusive upper bound).
        assert_eq!(seniority_calibration(2.5, &config).level, SeniorityLevel::Senior);
        assert_eq!(seniority_calibration(3.0, &config).level, SeniorityLevel::Executive);
    }

    #[test]
    fn test_seniority_calibration_gap_defaults_to_mid() {
        let config = ScoringConfig::default();
        // 0.625 × 4 = 2.5 years, between entry and mid ranges.
        let gap = seniority_calibration(0.625, &config);
        assert_eq!(gap.level, SeniorityLevel::Mid);
        assert_eq!(gap.bonus, 5);
    }
}
