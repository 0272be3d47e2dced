//! Resume text statistics: quantified metrics, strong action verbs, length.
//!
//! Two families of counts exist. The base quality score uses the broad metric
//! patterns and the full verb list; the reported details use narrower metric
//! patterns and a shorter verb list.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Base score when no resume text is available.
pub const DEFAULT_QUALITY_SCORE: u32 = 70;

/// Metrics needed before a resume counts as having quantified achievements.
pub const QUANTIFIED_ACHIEVEMENT_THRESHOLD: usize = 3;

static SCORE_METRIC_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\d+%",
        r"\$[\d,]+",
        r"\d+\+?\s*(years?|months?)",
        r"(\d+)\s*(clients?|customers?|users?|projects?|team members?)",
        r"(increased|decreased|improved|reduced|grew|saved)\s+.*\d+",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("metric pattern compiles"))
    .collect()
});

static DETAIL_METRIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+%|\$[\d,]+|\d+\s*(years?|projects?|clients?)")
        .expect("detail metric pattern compiles")
});

const SCORE_STRONG_VERBS: &[&str] = &[
    "led",
    "managed",
    "developed",
    "created",
    "implemented",
    "designed",
    "built",
    "launched",
    "achieved",
    "delivered",
    "optimized",
    "increased",
    "reduced",
    "improved",
    "established",
    "transformed",
    "orchestrated",
    "spearheaded",
    "pioneered",
    "architected",
    "streamlined",
];

const DETAIL_STRONG_VERBS: &[&str] = &[
    "led",
    "managed",
    "developed",
    "created",
    "implemented",
    "designed",
    "built",
    "launched",
    "achieved",
    "delivered",
    "optimized",
];

/// Counts reported alongside the quality dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QualityDetails {
    pub metrics_count: usize,
    pub strong_verbs_count: usize,
    pub word_count: usize,
    pub has_quantified_achievements: bool,
}

/// Counts verb hits by substring, so "led" also matches inside "scaled".
fn count_verbs(text_lower: &str, verbs: &[&str]) -> usize {
    verbs.iter().filter(|verb| text_lower.contains(*verb)).count()
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Heuristic 0–100 quality score. Blank text yields the default baseline.
pub fn analyze_resume_quality(resume_text: &str) -> u32 {
    if resume_text.trim().is_empty() {
        return DEFAULT_QUALITY_SCORE;
    }

    let text_lower = resume_text.to_lowercase();
    let mut score: i32 = 50;

    let metrics_found: usize = SCORE_METRIC_PATTERNS
        .iter()
        .map(|pattern| pattern.find_iter(&text_lower).count())
        .sum();
    score += match metrics_found {
        n if n >= 5 => 25,
        n if n >= 3 => 15,
        n if n >= 1 => 5,
        _ => 0,
    };

    score += match count_verbs(&text_lower, SCORE_STRONG_VERBS) {
        n if n >= 8 => 15,
        n if n >= 5 => 10,
        n if n >= 3 => 5,
        _ => 0,
    };

    score += match word_count(resume_text) {
        n if n >= 400 => 10,
        n if n >= 250 => 5,
        n if n < 150 => -10,
        _ => 0,
    };

    score.clamp(0, 100) as u32
}

/// Quality score for optional text, falling back to the default baseline.
pub fn quality_score_or_default(resume_text: Option<&str>) -> u32 {
    resume_text
        .map(analyze_resume_quality)
        .unwrap_or(DEFAULT_QUALITY_SCORE)
}

pub fn quality_details(resume_text: &str) -> QualityDetails {
    let text_lower = resume_text.to_lowercase();
    let metrics_count = DETAIL_METRIC_PATTERN.find_iter(&text_lower).count();

    QualityDetails {
        metrics_count,
        strong_verbs_count: count_verbs(&text_lower, DETAIL_STRONG_VERBS),
        word_count: word_count(resume_text),
        has_quantified_achievements: metrics_count >= QUANTIFIED_ACHIEVEMENT_THRESHOLD,
    }
}
