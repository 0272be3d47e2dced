//! Output Assembler — the response contract.
//!
//! `AnalysisReport` bundles the scoring result, the six-axis evaluation and
//! the optimization plan, plus a flattened legacy view that older consumers
//! still read. The legacy view is a pure reshaping; it adds no scoring logic.

use serde::Serialize;

use super::config::ScoringConfig;
use super::dimensions::Dimensions;
use super::engine::calculate_score;
use super::evaluation::{generate_evaluation, EvaluationResult};
use super::model::{find_gap, round_half_even, round_to, Gap, MatchType, ScoringInput, ScoringResult, Tier};
use super::plan::{generate_optimization_plan, OptimizationPlanItem};

/// Extraction output that is not itself a scoring input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportContext<'a> {
    pub gaps: &'a [Gap],
    pub seniority_signals: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub result: ScoringResult,
    pub evaluation: EvaluationResult,
    pub optimization_plan: Vec<OptimizationPlanItem>,
    pub legacy: LegacyView,
}

// ────────────────────────────────────────────────────────────────────────────
// Legacy view
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegacyView {
    pub score: u32,
    pub interpretation: &'static str,
    pub summary: String,
    pub dimensions: Dimensions,
    pub competitive_insight: CompetitiveInsight,
    pub breakdown: DisplayBreakdown,
    pub points_summary: PointsSummary,
    pub experience_analysis: ExperienceAnalysis,
    pub keyword_analysis: KeywordAnalysis,
    pub results: KeywordResults,
    pub requirements_breakdown: Vec<RequirementBreakdown>,
    pub critical_gaps: Vec<CriticalGap>,
    pub weak_matches: Vec<WeakMatch>,
    pub quick_wins: Vec<OptimizationPlanItem>,
    pub caps_applied: Vec<String>,
    #[serde(rename = "_scoring_debug")]
    pub scoring_debug: ScoringDebug,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitiveInsight {
    pub percentile_estimate: u32,
    pub percentile_label: String,
    pub interpretation: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayBreakdown {
    pub hard_skills: u32,
    pub semantic_match: u32,
    pub tone_analysis: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointsSummary {
    pub tier1_earned: f64,
    pub tier1_possible: u32,
    pub tier2_earned: f64,
    pub tier2_possible: u32,
    pub tier3_earned: f64,
    pub tier3_possible: u32,
    pub total_earned: f64,
    pub total_possible: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceAnalysis {
    pub required_years: f64,
    pub candidate_years: f64,
    pub experience_ratio: f64,
    pub experience_adjustment: i32,
    pub seniority_signals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub tier: Tier,
    pub tier_label: &'static str,
    pub match_type: MatchType,
    pub evidence: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KeywordAnalysis {
    pub present: Vec<KeywordEntry>,
    pub missing: Vec<KeywordEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordResults {
    pub present_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequirementBreakdown {
    pub skill: String,
    pub tier: Tier,
    pub tier_label: &'static str,
    pub match_type: MatchType,
    pub match_label: &'static str,
    pub evidence: Option<String>,
    pub points_earned: f64,
    pub points_possible: u32,
    pub credit_pct: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriticalGap {
    pub skill: String,
    pub tier: Tier,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeakMatch {
    pub skill: String,
    pub issue: &'static str,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringDebug {
    pub raw_score: f64,
    pub final_score: u32,
    pub experience_adjustment: i32,
    pub tier1_matched: String,
    pub tier2_matched: String,
    pub tier3_matched: String,
    pub caps_applied: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full pipeline: score → evaluation → plan → legacy view.
pub fn assemble_report(
    input: &ScoringInput,
    context: ReportContext<'_>,
    config: &ScoringConfig,
) -> AnalysisReport {
    let result = calculate_score(input, config);
    let evaluation = generate_evaluation(&result, input.resume_text());
    let optimization_plan = generate_optimization_plan(
        result.score,
        context.gaps,
        &input.requirements,
        input.resume_text(),
    );
    let legacy = legacy_view(&result, input, context, &optimization_plan, config);

    AnalysisReport {
        result,
        evaluation,
        optimization_plan,
        legacy,
    }
}

pub fn legacy_view(
    result: &ScoringResult,
    input: &ScoringInput,
    context: ReportContext<'_>,
    plan: &[OptimizationPlanItem],
    config: &ScoringConfig,
) -> LegacyView {
    let mut keyword_analysis = KeywordAnalysis::default();
    for req in &input.requirements {
        let entry = KeywordEntry {
            keyword: req.text.clone(),
            tier: req.tier,
            tier_label: req.tier.label(),
            match_type: req.match_type,
            evidence: req.evidence.clone(),
        };
        if req.match_type.is_match() {
            keyword_analysis.present.push(entry);
        } else {
            keyword_analysis.missing.push(entry);
        }
    }

    let results = KeywordResults {
        present_keywords: keyword_analysis.present.iter().map(|k| k.keyword.clone()).collect(),
        missing_keywords: keyword_analysis.missing.iter().map(|k| k.keyword.clone()).collect(),
    };

    let requirements_breakdown = input
        .requirements
        .iter()
        .map(|req| {
            let points_possible = config.tier_points.for_tier(req.tier);
            let credit = config.match_credit.for_match(req.match_type);
            RequirementBreakdown {
                skill: req.text.clone(),
                tier: req.tier,
                tier_label: req.tier.label(),
                match_type: req.match_type,
                match_label: req.match_type.label(),
                evidence: req.evidence.clone(),
                points_earned: round_to(points_possible as f64 * credit, 1),
                points_possible,
                credit_pct: (credit * 100.0) as u32,
            }
        })
        .collect();

    let critical_gaps = result
        .missing_critical
        .iter()
        .map(|skill| CriticalGap {
            skill: skill.clone(),
            tier: Tier::Critical,
            suggestion: match find_gap(context.gaps, skill) {
                Some(gap) => gap.suggestion.clone().unwrap_or_default(),
                None => format!("Add {skill} to your resume with specific examples"),
            },
        })
        .collect();

    let weak_matches = result
        .weak_matches
        .iter()
        .map(|skill| WeakMatch {
            skill: skill.clone(),
            issue: "Inferred but not explicit",
            suggestion: format!("Add \"{skill}\" explicitly with measurable outcomes"),
        })
        .collect();

    let matched = |tier: Tier| {
        let breakdown = result.tier(tier);
        format!("{}/{}", breakdown.matched_count, breakdown.total_count)
    };

    LegacyView {
        score: result.score,
        interpretation: result.interpretation.label(),
        summary: generate_summary(result),
        dimensions: result.dimensions.clone(),
        competitive_insight: competitive_insight(result.percentile_estimate),
        breakdown: display_breakdown(result),
        points_summary: PointsSummary {
            tier1_earned: round_to(result.tier1.earned, 1),
            tier1_possible: result.tier1.possible,
            tier2_earned: round_to(result.tier2.earned, 1),
            tier2_possible: result.tier2.possible,
            tier3_earned: round_to(result.tier3.earned, 1),
            tier3_possible: result.tier3.possible,
            total_earned: round_to(result.total_earned, 1),
            total_possible: result.total_possible,
        },
        experience_analysis: ExperienceAnalysis {
            required_years: input.experience.required_years,
            candidate_years: input.experience.candidate_years,
            experience_ratio: round_to(result.experience_ratio, 2),
            experience_adjustment: result.experience_adjustment,
            seniority_signals: context.seniority_signals.to_vec(),
        },
        keyword_analysis,
        results,
        requirements_breakdown,
        critical_gaps,
        weak_matches,
        quick_wins: plan.to_vec(),
        caps_applied: result.caps_applied.clone(),
        scoring_debug: ScoringDebug {
            raw_score: result.raw_score,
            final_score: result.score,
            experience_adjustment: result.experience_adjustment,
            tier1_matched: matched(Tier::Critical),
            tier2_matched: matched(Tier::Important),
            tier3_matched: matched(Tier::Bonus),
            caps_applied: result.caps_applied.clone(),
        },
    }
}

fn display_breakdown(result: &ScoringResult) -> DisplayBreakdown {
    let semantic = round_half_even(
        result.tier1.percentage as f64 * 0.5
            + result.tier2.percentage as f64 * 0.3
            + result.tier3.percentage as f64 * 0.2,
    );
    let tone = round_half_even(result.experience_ratio * 100.0).min(100.0);

    DisplayBreakdown {
        hard_skills: result.tier1.percentage,
        semantic_match: semantic as u32,
        tone_analysis: tone.max(0.0) as u32,
    }
}

pub fn competitive_insight(percentile: u32) -> CompetitiveInsight {
    CompetitiveInsight {
        percentile_estimate: percentile,
        percentile_label: format!("Top {}% of applicants", 100u32.saturating_sub(percentile)),
        interpretation: percentile_interpretation(percentile),
    }
}

pub fn percentile_interpretation(percentile: u32) -> &'static str {
    match percentile {
        p if p >= 90 => "Highly competitive - you're likely to stand out",
        p if p >= 75 => "Strong position - above average match",
        p if p >= 50 => "Competitive - on par with typical applicants",
        p if p >= 30 => "Below average - improvements recommended",
        _ => "Significant gaps - substantial improvements needed",
    }
}

/// Encouraging but honest one-paragraph summary, banded by final score.
pub fn generate_summary(result: &ScoringResult) -> String {
    let score = result.score;
    let missing = result.missing_critical.len();
    let matched = result.tier1.matched_count;
    let total = result.tier1.total_count;

    if score >= 85 {
        let mut summary = format!("Excellent match! You meet {matched}/{total} critical requirements.");
        if let Some(first_missing) = result.missing_critical.first() {
            summary.push_str(&format!(
                " Adding {first_missing} would make your application even stronger."
            ));
        } else if let Some(first_weak) = result.weak_matches.first() {
            summary.push_str(&format!(
                " Strengthening your {first_weak} mention could give you an edge."
            ));
        } else {
            summary.push_str(" Focus on quantifying your achievements to stand out.");
        }
        summary
    } else if score >= 70 {
        format!(
            "Good match with room for improvement. \
             You meet {matched}/{total} critical requirements, missing {missing}. \
             Addressing these gaps could significantly boost your chances."
        )
    } else if score >= 55 {
        format!(
            "Borderline match. You meet {matched}/{total} critical requirements. \
             ATS systems may filter this application. \
             Review the optimization plan for specific improvements."
        )
    } else {
        format!(
            "This role may not be the best fit currently. \
             You meet only {matched}/{total} critical requirements. \
             Consider roles that better match your current skills, or use the optimization plan \
             to identify skills to develop."
        )
    }
}
