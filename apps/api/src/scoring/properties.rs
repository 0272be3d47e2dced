//! Property tests over arbitrary requirement lists and experience facts.

use proptest::prelude::*;
use proptest::sample::Index;

use super::config::ScoringConfig;
use super::engine::calculate_score;
use super::evaluation::generate_evaluation;
use super::model::{ExperienceContext, MatchType, Requirement, ScoringInput, Tier};
use super::plan::generate_optimization_plan;

const MATCH_TYPES: [MatchType; 4] = [
    MatchType::Exact,
    MatchType::Variant,
    MatchType::Contextual,
    MatchType::None,
];

fn requirement() -> impl Strategy<Value = Requirement> {
    (0usize..3, 0usize..4, "[A-Za-z]{1,10}").prop_map(|(tier, match_type, text)| {
        Requirement::new(text, Tier::ALL[tier], MATCH_TYPES[match_type])
    })
}

fn experience() -> impl Strategy<Value = ExperienceContext> {
    (0.0f64..15.0, 0.0f64..25.0, any::<bool>(), 0u32..5).prop_map(
        |(required_years, candidate_years, is_senior_role, seniority_signals_found)| {
            ExperienceContext {
                required_years,
                candidate_years,
                is_senior_role,
                seniority_signals_found,
            }
        },
    )
}

fn scoring_input() -> impl Strategy<Value = ScoringInput> {
    (
        prop::collection::vec(requirement(), 0..12),
        experience(),
        prop::option::of("[a-z0-9%$ ]{0,200}"),
    )
        .prop_map(|(requirements, experience, resume_text)| ScoringInput {
            requirements,
            experience,
            resume_text,
        })
}

proptest! {
    #[test]
    fn test_score_is_bounded_and_capped_below_raw(input in scoring_input()) {
        let result = calculate_score(&input, &ScoringConfig::default());
        prop_assert!(result.score <= 100);
        prop_assert!((0.0..=100.0).contains(&result.raw_score));
        prop_assert!(result.score as f64 <= result.raw_score.ceil());
    }

    #[test]
    fn test_scoring_is_deterministic(input in scoring_input()) {
        let config = ScoringConfig::default();
        prop_assert_eq!(calculate_score(&input, &config), calculate_score(&input, &config));
    }

    #[test]
    fn test_upgrading_a_match_never_lowers_score(input in scoring_input(), pick in any::<Index>()) {
        prop_assume!(!input.requirements.is_empty());
        let config = ScoringConfig::default();
        let idx = pick.index(input.requirements.len());

        let mut missing = input.clone();
        missing.requirements[idx].match_type = MatchType::None;
        let mut exact = input;
        exact.requirements[idx].match_type = MatchType::Exact;

        let before = calculate_score(&missing, &config);
        let after = calculate_score(&exact, &config);
        prop_assert!(after.score >= before.score, "{} < {}", after.score, before.score);
    }

    #[test]
    fn test_plan_is_never_empty(input in scoring_input()) {
        let result = calculate_score(&input, &ScoringConfig::default());
        let plan = generate_optimization_plan(
            result.score,
            &[],
            &input.requirements,
            input.resume_text(),
        );
        prop_assert!(!plan.is_empty());
    }

    #[test]
    fn test_ready_to_submit_implies_passing_score(input in scoring_input()) {
        let result = calculate_score(&input, &ScoringConfig::default());
        let evaluation = generate_evaluation(&result, input.resume_text());
        if evaluation.ready_to_submit {
            prop_assert!(result.score >= 55);
            prop_assert!(result.missing_critical.len() <= 1);
        }
    }

    #[test]
    fn test_missing_critical_counts_match_tier1(input in scoring_input()) {
        let result = calculate_score(&input, &ScoringConfig::default());
        let tier1_missing = input
            .requirements
            .iter()
            .filter(|r| r.tier == Tier::Critical && r.match_type == MatchType::None)
            .count();
        prop_assert_eq!(result.missing_critical.len(), tier1_missing);
        prop_assert_eq!(
            result.matched_critical.len() + result.missing_critical.len(),
            result.tier1.total_count
        );
    }
}
