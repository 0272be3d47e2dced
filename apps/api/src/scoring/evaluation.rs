//! Truthful evaluation — six independent judgments that keep eligibility,
//! ATS risk, discoverability and polish apart instead of folding them into
//! the single score.

use serde::Serialize;

use super::model::{ScoringResult, Tier};
use super::quality::{quality_details, quality_score_or_default};

const MAX_SEARCHABLE_CRITICAL: usize = 5;
const MAX_SEARCHABLE_TERMS: usize = 8;
const MAX_REFINEMENTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HiringReadiness {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AtsStatus {
    Strong,
    Pass,
    Risk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SearchVisibility {
    High,
    Medium,
    Low,
}

/// Optional suggestion to make an inferred match explicit. Never blocking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Refinement {
    pub skill: String,
    pub current: String,
    pub suggested: String,
    pub impact: String,
    pub blocking: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub hiring_readiness: HiringReadiness,
    pub hiring_readiness_summary: String,

    pub ats_status: AtsStatus,
    pub ats_details: Vec<String>,
    pub ats_summary: String,

    pub search_visibility: SearchVisibility,
    pub searchable_terms: Vec<String>,
    pub search_summary: String,

    /// Same number as the final score; the optimization metric.
    pub alignment_score: u32,
    pub alignment_strengths: Vec<String>,
    pub alignment_refinements: Vec<Refinement>,

    /// 1–5.
    pub human_readability_stars: u8,
    pub human_readability_notes: Vec<String>,

    pub ready_to_submit: bool,
    pub verdict_message: String,
}

/// Derives the six axes from the scoring facts. Never fails: absent resume
/// text degrades the quality-derived axes to the default baseline.
pub fn generate_evaluation(result: &ScoringResult, resume_text: Option<&str>) -> EvaluationResult {
    let missing = result.missing_critical.len();
    let experience_ratio = result.experience_ratio;

    let (hiring_readiness, hiring_readiness_summary) = hiring_readiness(missing, experience_ratio);

    let total = result.total_requirements();
    let match_rate = if total > 0 {
        result.total_matched() as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    let (ats_status, ats_details, ats_summary) = ats_compatibility(match_rate, missing);
    let (search_visibility, search_summary) = search_visibility(match_rate);
    let searchable_terms = searchable_terms(result);

    let alignment_strengths = alignment_strengths(result, experience_ratio, resume_text);
    let alignment_refinements = result
        .weak_matches
        .iter()
        .take(MAX_REFINEMENTS)
        .map(|skill| Refinement {
            skill: skill.clone(),
            current: "Mentioned contextually".to_string(),
            suggested: format!("Make '{skill}' more explicit with specific examples"),
            impact: "Slightly higher alignment score".to_string(),
            blocking: false,
        })
        .collect();

    let (human_readability_stars, human_readability_notes) =
        readability(quality_score_or_default(resume_text));

    let (ready_to_submit, verdict_message) = verdict(result.score, missing);

    EvaluationResult {
        hiring_readiness,
        hiring_readiness_summary: hiring_readiness_summary.to_string(),
        ats_status,
        ats_details,
        ats_summary: ats_summary.to_string(),
        search_visibility,
        searchable_terms,
        search_summary: search_summary.to_string(),
        alignment_score: result.score,
        alignment_strengths,
        alignment_refinements,
        human_readability_stars,
        human_readability_notes,
        ready_to_submit,
        verdict_message: verdict_message.to_string(),
    }
}

fn hiring_readiness(missing: usize, experience_ratio: f64) -> (HiringReadiness, &'static str) {
    if missing == 0 && experience_ratio >= 0.75 {
        (
            HiringReadiness::High,
            "You meet all required qualifications and are competitive for this role.",
        )
    } else if missing <= 1 && experience_ratio >= 0.5 {
        (
            HiringReadiness::Medium,
            "You meet most requirements. Address the gaps below to strengthen your application.",
        )
    } else {
        (
            HiringReadiness::Low,
            "There are significant gaps between your resume and this role's requirements.",
        )
    }
}

fn ats_compatibility(match_rate: f64, missing: usize) -> (AtsStatus, Vec<String>, &'static str) {
    if match_rate >= 80.0 {
        (
            AtsStatus::Strong,
            vec![
                "Resume parses correctly".to_string(),
                "All critical keywords present".to_string(),
                "No disqualifying gaps detected".to_string(),
                "Recruiters can find you in search results".to_string(),
            ],
            "This resume would not be filtered out by an enterprise ATS.",
        )
    } else if match_rate >= 60.0 {
        let mut details = vec![
            "Resume parses correctly".to_string(),
            "Most keywords present".to_string(),
        ];
        if missing > 0 {
            details.push(format!("Missing {missing} critical term(s)"));
        }
        (
            AtsStatus::Pass,
            details,
            "This resume should pass most ATS filters but could be stronger.",
        )
    } else {
        (
            AtsStatus::Risk,
            vec![
                "Several required keywords missing".to_string(),
                format!("Only {}% keyword coverage", match_rate.trunc() as u32),
            ],
            "This resume may be filtered out. Consider adding missing keywords.",
        )
    }
}

fn search_visibility(match_rate: f64) -> (SearchVisibility, &'static str) {
    if match_rate >= 75.0 {
        (
            SearchVisibility::High,
            "Your resume contains the right titles, skills, and experience for recruiter searches.",
        )
    } else if match_rate >= 50.0 {
        (
            SearchVisibility::Medium,
            "You are somewhat discoverable but adding key terms would help.",
        )
    } else {
        (
            SearchVisibility::Low,
            "Recruiters may have difficulty finding you with current keyword coverage.",
        )
    }
}

/// Up to five matched Tier-1 terms, then Tier-2 matches, eight at most.
fn searchable_terms(result: &ScoringResult) -> Vec<String> {
    let mut terms: Vec<String> = result
        .matched_critical
        .iter()
        .take(MAX_SEARCHABLE_CRITICAL)
        .cloned()
        .collect();

    for detail in &result.tier(Tier::Important).details {
        if terms.len() >= MAX_SEARCHABLE_TERMS {
            break;
        }
        if detail.match_type.is_match() {
            terms.push(detail.skill.clone());
        }
    }

    terms
}

fn alignment_strengths(
    result: &ScoringResult,
    experience_ratio: f64,
    resume_text: Option<&str>,
) -> Vec<String> {
    let mut strengths = Vec::new();

    let tier1_matched = result.tier1.matched_count;
    if tier1_matched > 0 {
        strengths.push(format!("{tier1_matched} critical skills clearly stated"));
    }
    if experience_ratio >= 1.0 {
        strengths.push("Experience meets or exceeds requirements".to_string());
    }

    if let Some(details) = resume_text.map(quality_details) {
        if details.has_quantified_achievements {
            strengths.push("Quantified achievements included".to_string());
        }
        if details.strong_verbs_count >= 5 {
            strengths.push("Strong action verbs present".to_string());
        }
    }

    strengths
}

fn readability(quality_score: u32) -> (u8, Vec<String>) {
    let (stars, notes) = match quality_score {
        s if s >= 85 => (
            5,
            vec!["Clear accomplishments", "Strong metrics", "Easy to scan", "Compelling narrative"],
        ),
        s if s >= 70 => (4, vec!["Clear accomplishments", "Metrics included", "Easy to scan"]),
        s if s >= 55 => (
            3,
            vec!["Readable but could use more metrics", "Consider adding impact statements"],
        ),
        s if s >= 40 => (
            2,
            vec!["Needs more quantified achievements", "Add specific outcomes"],
        ),
        _ => (
            1,
            vec!["Significant improvements needed", "Add metrics and clear accomplishments"],
        ),
    };
    (stars, notes.into_iter().map(String::from).collect())
}

/// Ready when the score is solid and critical gaps are few.
pub fn verdict(score: u32, missing_critical: usize) -> (bool, &'static str) {
    if score >= 70 && missing_critical == 0 {
        (
            true,
            "This resume is ready to submit. Further changes are optional optimizations, not requirements.",
        )
    } else if score >= 55 && missing_critical <= 1 {
        (
            true,
            "This resume can be submitted. Consider the suggested improvements to strengthen your application.",
        )
    } else {
        (
            false,
            "Address the critical gaps before submitting to maximize your chances.",
        )
    }
}
