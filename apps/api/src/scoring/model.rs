//! Core data model for the scoring engine.
//!
//! Inputs arrive already classified by the extraction step. Malformed `tier` or
//! `match_type` values never fail deserialization: they fall back to
//! `Tier::Important` and `MatchType::None` respectively.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

// ────────────────────────────────────────────────────────────────────────────
// Enumerations
// ────────────────────────────────────────────────────────────────────────────

/// Priority class of a job requirement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Tier 1: required, blocking.
    Critical,
    /// Tier 2: preferred.
    #[default]
    Important,
    /// Tier 3: nice to have.
    Bonus,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Critical, Tier::Important, Tier::Bonus];

    pub fn number(self) -> u8 {
        match self {
            Tier::Critical => 1,
            Tier::Important => 2,
            Tier::Bonus => 3,
        }
    }

    /// Lenient conversion used by deserialization. Anything other than the
    /// numbers 1, 2 or 3 resolves to the default tier.
    pub fn from_value(value: &Value) -> Self {
        match value.as_f64() {
            Some(n) if n == 1.0 => Tier::Critical,
            Some(n) if n == 2.0 => Tier::Important,
            Some(n) if n == 3.0 => Tier::Bonus,
            _ => Tier::default(),
        }
    }

    /// Label shown to legacy consumers.
    pub fn label(self) -> &'static str {
        match self {
            Tier::Critical => "Critical",
            Tier::Important => "Important",
            Tier::Bonus => "Bonus",
        }
    }

    pub(crate) fn index(self) -> usize {
        self.number() as usize - 1
    }
}

impl Serialize for Tier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

impl<'de> Deserialize<'de> for Tier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Tier::from_value(&value))
    }
}

/// How strongly a requirement is evidenced in the resume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchType {
    /// Term found verbatim.
    Exact,
    /// Recognized equivalent (JS = JavaScript).
    Variant,
    /// Inferred from demonstrated work. Still a valid match.
    Contextual,
    #[default]
    None,
}

impl MatchType {
    /// Case-sensitive parse; unknown values resolve to `MatchType::None`.
    pub fn from_value(value: &Value) -> Self {
        match value.as_str() {
            Some("EXACT") => MatchType::Exact,
            Some("VARIANT") => MatchType::Variant,
            Some("CONTEXTUAL") => MatchType::Contextual,
            _ => MatchType::None,
        }
    }

    pub fn is_match(self) -> bool {
        self != MatchType::None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Exact => "EXACT",
            MatchType::Variant => "VARIANT",
            MatchType::Contextual => "CONTEXTUAL",
            MatchType::None => "NONE",
        }
    }

    /// Label shown to legacy consumers.
    pub fn label(self) -> &'static str {
        match self {
            MatchType::Exact => "✓ Exact Match",
            MatchType::Variant => "~ Variant Match",
            MatchType::Contextual => "? Inferred",
            MatchType::None => "✗ Not Found",
        }
    }
}

impl<'de> Deserialize<'de> for MatchType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(MatchType::from_value(&value))
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency of an optimization plan item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Must fix, blocking issue.
    Critical,
    High,
    Medium,
    /// Optional polish.
    Low,
}

/// Band label for a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Interpretation {
    StrongMatch,
    GoodMatch,
    Borderline,
    BelowThreshold,
    PoorFit,
}

impl Interpretation {
    /// Human-readable form, e.g. `"STRONG MATCH"`.
    pub fn label(self) -> &'static str {
        match self {
            Interpretation::StrongMatch => "STRONG MATCH",
            Interpretation::GoodMatch => "GOOD MATCH",
            Interpretation::Borderline => "BORDERLINE",
            Interpretation::BelowThreshold => "BELOW THRESHOLD",
            Interpretation::PoorFit => "POOR FIT",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Inputs
// ────────────────────────────────────────────────────────────────────────────

/// A single classified job requirement. Immutable once handed to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub tier: Tier,
    #[serde(default)]
    pub match_type: MatchType,
    #[serde(default)]
    pub evidence: Option<String>,
}

impl Requirement {
    pub fn new(text: impl Into<String>, tier: Tier, match_type: MatchType) -> Self {
        Self {
            text: text.into(),
            tier,
            match_type,
            evidence: None,
        }
    }

    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = Some(evidence.into());
        self
    }
}

/// Extractor-supplied hint on how to close a gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    #[serde(default)]
    pub requirement: String,
    #[serde(default)]
    pub suggestion: Option<String>,
}

/// Finds the first gap whose requirement text mentions `skill` (case-insensitive).
pub fn find_gap<'a>(gaps: &'a [Gap], skill: &str) -> Option<&'a Gap> {
    let skill_lower = skill.to_lowercase();
    gaps.iter()
        .find(|gap| gap.requirement.to_lowercase().contains(&skill_lower))
}

/// Years-of-experience and seniority facts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceContext {
    #[serde(default)]
    pub required_years: f64,
    #[serde(default)]
    pub candidate_years: f64,
    #[serde(default)]
    pub is_senior_role: bool,
    #[serde(default)]
    pub seniority_signals_found: u32,
}

impl ExperienceContext {
    /// `candidate / required`, or 1.0 when no requirement is stated.
    pub fn ratio(&self) -> f64 {
        if self.required_years > 0.0 {
            self.candidate_years / self.required_years
        } else {
            1.0
        }
    }
}

/// Everything the engine needs for one scoring call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringInput {
    #[serde(default)]
    pub requirements: Vec<Requirement>,
    #[serde(flatten)]
    pub experience: ExperienceContext,
    #[serde(default)]
    pub resume_text: Option<String>,
}

impl ScoringInput {
    /// Resume text, treating blank text the same as absent text.
    pub fn resume_text(&self) -> Option<&str> {
        self.resume_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Outputs
// ────────────────────────────────────────────────────────────────────────────

/// Per-requirement point math, recorded for transparency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetail {
    pub skill: String,
    pub match_type: MatchType,
    pub evidence: Option<String>,
    #[serde(serialize_with = "serialize_one_decimal")]
    pub points_earned: f64,
    pub points_possible: u32,
    pub credit_pct: u32,
}

/// Accumulated points for one tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierBreakdown {
    #[serde(serialize_with = "serialize_one_decimal")]
    pub earned: f64,
    pub possible: u32,
    pub percentage: u32,
    pub matched_count: usize,
    pub total_count: usize,
    pub details: Vec<MatchDetail>,
}

/// Full deterministic scoring output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringResult {
    /// Final capped score, 0–100.
    pub score: u32,
    /// Uncapped score after experience adjustment, rounded to one decimal.
    pub raw_score: f64,
    pub interpretation: Interpretation,
    pub tier1: TierBreakdown,
    pub tier2: TierBreakdown,
    pub tier3: TierBreakdown,
    #[serde(serialize_with = "serialize_one_decimal")]
    pub total_earned: f64,
    pub total_possible: u32,
    pub caps_applied: Vec<String>,
    pub experience_adjustment: i32,
    #[serde(serialize_with = "serialize_two_decimals")]
    pub experience_ratio: f64,
    pub missing_critical: Vec<String>,
    pub matched_critical: Vec<String>,
    pub weak_matches: Vec<String>,
    pub dimensions: super::dimensions::Dimensions,
    pub percentile_estimate: u32,
}

impl ScoringResult {
    pub fn tier(&self, tier: Tier) -> &TierBreakdown {
        match tier {
            Tier::Critical => &self.tier1,
            Tier::Important => &self.tier2,
            Tier::Bonus => &self.tier3,
        }
    }

    pub fn total_matched(&self) -> usize {
        Tier::ALL.iter().map(|t| self.tier(*t).matched_count).sum()
    }

    pub fn total_requirements(&self) -> usize {
        Tier::ALL.iter().map(|t| self.tier(*t).total_count).sum()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rounding helpers
// ────────────────────────────────────────────────────────────────────────────

/// Rounds half to even, matching the numeric behaviour legacy consumers expect.
pub fn round_half_even(value: f64) -> f64 {
    value.round_ties_even()
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// `round(part / whole * 100)`, or 0 when `whole` is zero.
pub fn percent(part: f64, whole: f64) -> u32 {
    if whole > 0.0 {
        round_half_even(part / whole * 100.0).max(0.0) as u32
    } else {
        0
    }
}

fn serialize_one_decimal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_to(*value, 1))
}

fn serialize_two_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_to(*value, 2))
}
