use serde::{Deserialize, Serialize};

use super::model::{MatchType, Tier};

/// Every tunable constant of the scoring engine in one place.
///
/// The engine reads these values only; `ScoringConfig::default()` is the
/// calibrated production rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub tier_points: TierPoints,
    pub match_credit: MatchCredit,
    pub hard_caps: HardCaps,
    pub experience: ExperienceAdjustments,
    pub score_bands: ScoreBands,
    /// `(minimum score, percentile)` pairs, highest threshold first.
    pub percentile_map: Vec<(u32, u32)>,
    pub dimension_weights: DimensionWeights,
    pub seniority_levels: Vec<SeniorityLevelConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierPoints {
    pub critical: u32,
    pub important: u32,
    pub bonus: u32,
}

impl TierPoints {
    pub fn for_tier(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Critical => self.critical,
            Tier::Important => self.important,
            Tier::Bonus => self.bonus,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchCredit {
    pub exact: f64,
    pub variant: f64,
    pub contextual: f64,
}

impl MatchCredit {
    pub fn for_match(&self, match_type: MatchType) -> f64 {
        match match_type {
            MatchType::Exact => self.exact,
            MatchType::Variant => self.variant,
            MatchType::Contextual => self.contextual,
            MatchType::None => 0.0,
        }
    }
}

/// Ceilings applied when a risk pattern is present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HardCaps {
    pub zero_tier1_matches: f64,
    pub missing_3_tier1: f64,
    pub missing_2_tier1: f64,
    pub missing_1_tier1: f64,
    pub experience_below_50pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperienceAdjustments {
    pub below_50pct: i32,
    pub below_75pct: i32,
    pub exceeds_by_50pct: i32,
    pub seniority_bonus: i32,
    pub seniority_penalty: i32,
}

/// Inclusive lower bounds of each interpretation band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBands {
    pub strong_match: u32,
    pub good_match: u32,
    pub borderline: u32,
    pub below_threshold: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionWeights {
    pub keyword_presence: f64,
    pub resume_quality: f64,
    pub job_alignment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeniorityLevelConfig {
    pub level: SeniorityLevel,
    /// Inclusive estimated-years range.
    pub min_years: f64,
    pub max_years: f64,
    pub contextual_bonus: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeniorityLevel {
    Entry,
    Mid,
    Senior,
    Executive,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            tier_points: TierPoints {
                critical: 15,
                important: 8,
                bonus: 4,
            },
            match_credit: MatchCredit {
                exact: 1.0,
                variant: 0.90,
                contextual: 0.75,
            },
            hard_caps: HardCaps {
                zero_tier1_matches: 30.0,
                missing_3_tier1: 45.0,
                missing_2_tier1: 60.0,
                missing_1_tier1: 75.0,
                experience_below_50pct: 55.0,
            },
            experience: ExperienceAdjustments {
                below_50pct: -15,
                below_75pct: -8,
                exceeds_by_50pct: 3,
                seniority_bonus: 5,
                seniority_penalty: -10,
            },
            score_bands: ScoreBands {
                strong_match: 85,
                good_match: 70,
                borderline: 55,
                below_threshold: 40,
            },
            percentile_map: vec![(95, 90), (85, 75), (70, 50), (55, 30), (40, 15), (0, 5)],
            dimension_weights: DimensionWeights {
                keyword_presence: 0.40,
                resume_quality: 0.35,
                job_alignment: 0.25,
            },
            seniority_levels: vec![
                SeniorityLevelConfig {
                    level: SeniorityLevel::Entry,
                    min_years: 0.0,
                    max_years: 2.0,
                    contextual_bonus: 0,
                },
                SeniorityLevelConfig {
                    level: SeniorityLevel::Mid,
                    min_years: 3.0,
                    max_years: 5.0,
                    contextual_bonus: 5,
                },
                SeniorityLevelConfig {
                    level: SeniorityLevel::Senior,
                    min_years: 6.0,
                    max_years: 10.0,
                    contextual_bonus: 10,
                },
                SeniorityLevelConfig {
                    level: SeniorityLevel::Executive,
                    min_years: 10.0,
                    max_years: 99.0,
                    contextual_bonus: 15,
                },
            ],
        }
    }
}
