//! Scoring engine — deterministic, transparent 0–100 score.
//!
//! Flow: accumulate tiers → experience adjustment → raw score → hard caps →
//!       round → interpretation → dimensions → percentile.
//!
//! Same inputs always produce the same outputs. The engine holds no state.

use tracing::debug;

use super::caps::enforce_caps;
use super::config::{ScoreBands, ScoringConfig};
use super::dimensions::calculate_dimensions;
use super::experience::experience_adjustment;
use super::model::{round_half_even, round_to, Interpretation, ScoringInput, ScoringResult, Tier};
use super::tiers::accumulate;

/// Scores classified requirements against experience facts.
pub fn calculate_score(input: &ScoringInput, config: &ScoringConfig) -> ScoringResult {
    let tally = accumulate(&input.requirements, config);

    let experience = &input.experience;
    let experience_ratio = experience.ratio();
    let adjustment = experience_adjustment(experience, config);

    let total_earned = tally.total_earned();
    let total_possible = tally.total_possible();
    let base = if total_possible == 0 {
        0.0
    } else {
        total_earned / total_possible as f64 * 100.0
    };
    let raw_score = (base + adjustment as f64).clamp(0.0, 100.0);

    let capped = enforce_caps(raw_score, &tally, experience_ratio, &config.hard_caps);
    let score = round_half_even(capped.value) as u32;
    let interpretation = interpret(score, &config.score_bands);

    debug!(
        score,
        raw_score,
        adjustment,
        caps = capped.applied.len(),
        "scored {} requirement(s)",
        input.requirements.len()
    );

    ScoringResult {
        score,
        raw_score: round_to(raw_score, 1),
        interpretation,
        tier1: tally.breakdown(Tier::Critical),
        tier2: tally.breakdown(Tier::Important),
        tier3: tally.breakdown(Tier::Bonus),
        total_earned,
        total_possible,
        caps_applied: capped.reasons(),
        experience_adjustment: adjustment,
        experience_ratio,
        dimensions: calculate_dimensions(&tally, experience_ratio, input.resume_text(), config),
        percentile_estimate: estimate_percentile(score, config),
        missing_critical: tally.missing_critical,
        matched_critical: tally.matched_critical,
        weak_matches: tally.weak_matches,
    }
}

/// Band label; lower bounds are inclusive.
pub fn interpret(score: u32, bands: &ScoreBands) -> Interpretation {
    if score >= bands.strong_match {
        Interpretation::StrongMatch
    } else if score >= bands.good_match {
        Interpretation::GoodMatch
    } else if score >= bands.borderline {
        Interpretation::Borderline
    } else if score >= bands.below_threshold {
        Interpretation::BelowThreshold
    } else {
        Interpretation::PoorFit
    }
}

/// Estimated percentile among other applicants.
pub fn estimate_percentile(score: u32, config: &ScoringConfig) -> u32 {
    let mut thresholds = config.percentile_map.clone();
    thresholds.sort_by(|a, b| b.0.cmp(&a.0));
    thresholds
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map(|(_, percentile)| *percentile)
        .unwrap_or(5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::model::{ExperienceContext, MatchType, Requirement};

    fn input(reqs: Vec<Requirement>, required: f64, candidate: f64) -> ScoringInput {
        ScoringInput {
            requirements: reqs,
            experience: ExperienceContext {
                required_years: required,
                candidate_years: candidate,
                ..Default::default()
            },
            resume_text: None,
        }
    }

    fn critical(text: &str, match_type: MatchType) -> Requirement {
        Requirement::new(text, Tier::Critical, match_type)
    }

    #[test]
    fn test_single_exact_critical_is_perfect() {
        let result = calculate_score(
            &input(vec![critical("Python", MatchType::Exact)], 5.0, 5.0),
            &ScoringConfig::default(),
        );
        assert_eq!(result.score, 100);
        assert_eq!(result.raw_score, 100.0);
        assert_eq!(result.interpretation, Interpretation::StrongMatch);
        assert!(result.caps_applied.is_empty());
        assert_eq!(result.percentile_estimate, 90);
    }

    #[test]
    fn test_one_of_two_critical_missing_is_not_capped() {
        let result = calculate_score(
            &input(
                vec![critical("Python", MatchType::Exact), critical("AWS", MatchType::None)],
                5.0,
                5.0,
            ),
            &ScoringConfig::default(),
        );
        assert_eq!(result.raw_score, 50.0);
        assert_eq!(result.score, 50);
        assert_eq!(result.interpretation, Interpretation::BelowThreshold);
        assert_eq!(result.missing_critical, vec!["AWS"]);
        assert_eq!(result.matched_critical, vec!["Python"]);
        assert_eq!(result.caps_applied, vec!["Missing 1 critical requirement(s)"]);
    }

    #[test]
    fn test_all_critical_missing_reports_zero_match_cap() {
        let result = calculate_score(
            &input(
                vec![critical("AWS", MatchType::None), critical("GCP", MatchType::None)],
                5.0,
                5.0,
            ),
            &ScoringConfig::default(),
        );
        assert_eq!(result.raw_score, 0.0);
        assert_eq!(result.score, 0);
        assert_eq!(result.interpretation, Interpretation::PoorFit);
        assert!(result
            .caps_applied
            .contains(&"No critical requirements matched".to_string()));
    }

    #[test]
    fn test_experience_cap_binds_after_penalty() {
        let result = calculate_score(
            &input(vec![critical("Python", MatchType::Exact)], 10.0, 2.0),
            &ScoringConfig::default(),
        );
        assert_eq!(result.experience_adjustment, -15);
        assert_eq!(result.raw_score, 85.0);
        assert_eq!(result.score, 55);
        assert_eq!(result.interpretation, Interpretation::Borderline);
        assert_eq!(result.caps_applied, vec!["Experience below 50% of requirement"]);
    }

    #[test]
    fn test_empty_requirements_score_zero() {
        let result = calculate_score(&input(vec![], 0.0, 0.0), &ScoringConfig::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.total_possible, 0);
        assert_eq!(result.interpretation, Interpretation::PoorFit);
        assert_eq!(result.percentile_estimate, 5);
    }

    #[test]
    fn test_raw_score_clamped_after_bonus() {
        let mut scoring = input(vec![critical("Python", MatchType::Exact)], 2.0, 6.0);
        scoring.experience.is_senior_role = true;
        scoring.experience.seniority_signals_found = 3;
        let result = calculate_score(&scoring, &ScoringConfig::default());
        assert_eq!(result.experience_adjustment, 8);
        assert_eq!(result.raw_score, 100.0);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_sample_extraction_scores_consistently() {
        let reqs = vec![
            critical("5+ years software development", MatchType::Exact),
            critical("Python", MatchType::Exact),
            critical("AWS", MatchType::None),
            critical("Docker", MatchType::Contextual),
            Requirement::new("Kubernetes", Tier::Important, MatchType::None),
            critical("SQL", MatchType::Exact),
            Requirement::new("Team leadership", Tier::Important, MatchType::Exact),
            Requirement::new("CI/CD", Tier::Important, MatchType::Variant),
        ];
        let mut scoring = input(reqs, 5.0, 6.0);
        scoring.experience.is_senior_role = true;
        scoring.experience.seniority_signals_found = 2;

        let config = ScoringConfig::default();
        let first = calculate_score(&scoring, &config);
        let second = calculate_score(&scoring, &config);
        assert_eq!(first, second);

        // earned = 15+15+0+11.25+0+15+8+7.2 = 71.45 of 99 → 72.17 + 5 = 77.17
        assert_eq!(first.raw_score, 77.2);
        assert_eq!(first.score, 75);
        assert_eq!(first.weak_matches, vec!["Docker"]);
        assert_eq!(first.tier1.matched_count, 4);
        assert_eq!(first.tier1.total_count, 5);
    }

    #[test]
    fn test_interpretation_bands_are_inclusive() {
        let bands = ScoringConfig::default().score_bands;
        assert_eq!(interpret(85, &bands), Interpretation::StrongMatch);
        assert_eq!(interpret(84, &bands), Interpretation::GoodMatch);
        assert_eq!(interpret(70, &bands), Interpretation::GoodMatch);
        assert_eq!(interpret(55, &bands), Interpretation::Borderline);
        assert_eq!(interpret(40, &bands), Interpretation::BelowThreshold);
        assert_eq!(interpret(39, &bands), Interpretation::PoorFit);
    }

    #[test]
    fn test_percentile_map() {
        let config = ScoringConfig::default();
        assert_eq!(estimate_percentile(95, &config), 90);
        assert_eq!(estimate_percentile(94, &config), 75);
        assert_eq!(estimate_percentile(70, &config), 50);
        assert_eq!(estimate_percentile(55, &config), 30);
        assert_eq!(estimate_percentile(40, &config), 15);
        assert_eq!(estimate_percentile(0, &config), 5);
    }
}
