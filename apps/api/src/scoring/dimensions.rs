//! Dimension Scorer — three weighted sub-scores shown for explainability.
//!
//! - Keyword Presence (40%): binary found/not-found, the way a recruiter's
//!   Boolean search sees the resume.
//! - Resume Quality (35%): quantification, action verbs, length; calibrated
//!   by estimated seniority.
//! - Job Alignment (25%): match quality on Tier 1 and Tier 2.

use serde::Serialize;

use super::config::{ScoringConfig, SeniorityLevel};
use super::experience::seniority_calibration;
use super::model::{percent, round_half_even, Tier};
use super::quality::{quality_details, quality_score_or_default, QualityDetails};
use super::tiers::TierTally;

/// One sub-score with the numbers it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionScore<D> {
    pub score: u32,
    pub label: &'static str,
    pub description: &'static str,
    pub weight: f64,
    pub details: D,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordPresenceDetails {
    pub found: usize,
    pub total: usize,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeQualityDetails {
    /// Present only when resume text was supplied.
    #[serde(flatten)]
    pub text: Option<QualityDetails>,
    pub seniority_level: SeniorityLevel,
    pub seniority_bonus_applied: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobAlignmentDetails {
    pub tier1_alignment: u32,
    pub tier2_alignment: u32,
    pub experience_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dimensions {
    pub keyword_presence: DimensionScore<KeywordPresenceDetails>,
    pub resume_quality: DimensionScore<ResumeQualityDetails>,
    pub job_alignment: DimensionScore<JobAlignmentDetails>,
}

pub fn calculate_dimensions(
    tally: &TierTally,
    experience_ratio: f64,
    resume_text: Option<&str>,
    config: &ScoringConfig,
) -> Dimensions {
    let weights = &config.dimension_weights;
    let seniority = seniority_calibration(experience_ratio, config);

    let found = tally.total_matched();
    let total = tally.total_requirements();
    let keyword_presence = DimensionScore {
        score: percent(found as f64, total as f64),
        label: "Keyword Presence",
        description: "Keywords found in resume (recruiter search readiness)",
        weight: weights.keyword_presence,
        details: KeywordPresenceDetails {
            found,
            total,
            missing: tally.missing_skills(),
        },
    };

    let base_quality = quality_score_or_default(resume_text);
    let resume_quality = DimensionScore {
        score: (base_quality + seniority.bonus).min(100),
        label: "Resume Quality",
        description: "Quantified achievements, action verbs, professional presentation",
        weight: weights.resume_quality,
        details: ResumeQualityDetails {
            text: resume_text.map(quality_details),
            seniority_level: seniority.level,
            seniority_bonus_applied: seniority.bonus,
        },
    };

    let tier1 = tally.bucket(Tier::Critical);
    let tier2 = tally.bucket(Tier::Important);
    let tier1_alignment = percent(tier1.earned, tier1.possible as f64);
    let tier2_alignment = percent(tier2.earned, tier2.possible as f64);
    let weighted = round_half_even(tier1_alignment as f64 * 0.7 + tier2_alignment as f64 * 0.3);
    let job_alignment = DimensionScore {
        score: (weighted as u32 + seniority.bonus / 2).min(100),
        label: "Job Alignment",
        description: "How well your experience aligns with job requirements",
        weight: weights.job_alignment,
        details: JobAlignmentDetails {
            tier1_alignment,
            tier2_alignment,
            experience_ratio,
        },
    };

    Dimensions {
        keyword_presence,
        resume_quality,
        job_alignment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::model::{MatchType, Requirement};
    use crate::scoring::tiers::accumulate;

    fn tally(reqs: &[(Tier, MatchType)]) -> TierTally {
        let reqs: Vec<Requirement> = reqs
            .iter()
            .enumerate()
            .map(|(i, (tier, mt))| Requirement::new(format!("skill-{i}"), *tier, *mt))
            .collect();
        accumulate(&reqs, &ScoringConfig::default())
    }

    #[test]
    fn test_keyword_presence_is_binary() {
        let t = tally(&[
            (Tier::Critical, MatchType::Contextual),
            (Tier::Important, MatchType::Exact),
            (Tier::Bonus, MatchType::None),
            (Tier::Bonus, MatchType::Variant),
        ]);
        let dims = calculate_dimensions(&t, 1.0, None, &ScoringConfig::default());
        assert_eq!(dims.keyword_presence.score, 75);
        assert_eq!(dims.keyword_presence.details.found, 3);
        assert_eq!(dims.keyword_presence.details.missing, vec!["skill-2"]);
        assert_eq!(dims.keyword_presence.weight, 0.40);
    }

    #[test]
    fn test_quality_defaults_without_text_plus_seniority_bonus() {
        let t = tally(&[(Tier::Critical, MatchType::Exact)]);
        // ratio 1.0 → 4 estimated years → mid → +5
        let dims = calculate_dimensions(&t, 1.0, None, &ScoringConfig::default());
        assert_eq!(dims.resume_quality.score, 75);
        assert!(dims.resume_quality.details.text.is_none());
        assert_eq!(dims.resume_quality.details.seniority_level, SeniorityLevel::Mid);
    }

    #[test]
    fn test_quality_is_capped_at_100() {
        let t = tally(&[(Tier::Critical, MatchType::Exact)]);
        let body = "word ".repeat(400);
        let text = format!(
            "{body} led managed developed created implemented designed built launched \
             grew revenue 40% saved $20,000 for 12 clients over 3 years and 50 users"
        );
        // ratio 3.0 → executive → +15
        let dims = calculate_dimensions(&t, 3.0, Some(&text), &ScoringConfig::default());
        assert_eq!(dims.resume_quality.score, 100);
        assert!(dims.resume_quality.details.text.is_some());
    }

    #[test]
    fn test_job_alignment_weights_tier1_and_tier2() {
        let t = tally(&[
            (Tier::Critical, MatchType::Exact),
            (Tier::Critical, MatchType::None),
            (Tier::Important, MatchType::Exact),
        ]);
        // 0.7 × 50 + 0.3 × 100 = 65, entry level bonus 0
        let dims = calculate_dimensions(&t, 0.25, None, &ScoringConfig::default());
        assert_eq!(dims.job_alignment.details.tier1_alignment, 50);
        assert_eq!(dims.job_alignment.details.tier2_alignment, 100);
        assert_eq!(dims.job_alignment.score, 65);
    }

    #[test]
    fn test_job_alignment_adds_half_seniority_bonus() {
        let t = tally(&[(Tier::Critical, MatchType::Exact)]);
        // 0.7 × 100 = 70, senior bonus 10 / 2 = 5
        let dims = calculate_dimensions(&t, 2.0, None, &ScoringConfig::default());
        assert_eq!(dims.job_alignment.score, 75);
    }

    #[test]
    fn test_empty_requirements_score_zero_presence() {
        let t = tally(&[]);
        let dims = calculate_dimensions(&t, 1.0, None, &ScoringConfig::default());
        assert_eq!(dims.keyword_presence.score, 0);
        assert_eq!(dims.job_alignment.score, 2);
    }
}
