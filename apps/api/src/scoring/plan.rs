//! Optimization Plan — prioritized, concrete improvement actions.
//!
//! Items are generated in a fixed order (critical → high → medium → low) and
//! the plan is never empty: when nothing else applies a generic polish item
//! is emitted.

use serde::{Deserialize, Serialize};

use super::model::{find_gap, Gap, MatchType, Priority, Requirement, Tier};
use super::quality::quality_details;

const MAX_PREFERRED_ITEMS: usize = 3;
const MAX_BONUS_SKILLS: usize = 3;
const EVIDENCE_PREVIEW_CHARS: usize = 50;
const STAND_OUT_THRESHOLD: u32 = 85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanCategory {
    MissingCriticalSkill,
    StrengthenMatch,
    MissingPreferredSkill,
    Quantification,
    Enhancement,
    BonusSkills,
    Polish,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationPlanItem {
    pub priority: Priority,
    pub category: PlanCategory,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewrite_suggestion: Option<String>,
    pub potential_impact: String,
    pub ats_impact: String,
}

/// Skill families that get a tailored rewrite template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkillKind {
    Certification,
    Methodology,
    Tool,
    General,
}

impl SkillKind {
    fn detect(skill: &str) -> Self {
        let lower = skill.to_lowercase();
        let mentions = |words: &[&str]| words.iter().any(|w| lower.contains(w));

        if mentions(&["certified", "certification", "pmp", "aws", "cpa"]) {
            SkillKind::Certification
        } else if mentions(&["agile", "scrum", "methodology", "framework"]) {
            SkillKind::Methodology
        } else if mentions(&["jira", "confluence", "git", "docker", "kubernetes"]) {
            SkillKind::Tool
        } else {
            SkillKind::General
        }
    }

    fn rewrite(self, skill: &str) -> String {
        match self {
            SkillKind::Certification => format!(
                "Certifications section: \"{skill}\" | If in progress: \"{skill} (Expected [Month Year])\""
            ),
            SkillKind::Methodology => format!(
                "Experience: \"Applied {skill} principles to [project/initiative], improving [metric] by [X]%\""
            ),
            SkillKind::Tool => format!(
                "Skills: \"{skill}\" | Experience: \"Utilized {skill} for [specific use case], resulting in [measurable outcome]\""
            ),
            SkillKind::General => format!(
                "Add to Skills section: \"{skill}\" | Add to Experience: \"Leveraged {skill} to [achieve specific outcome]\""
            ),
        }
    }
}

/// Rewrite template chosen by keyword heuristics on the skill name.
pub fn rewrite_suggestion(skill: &str) -> String {
    SkillKind::detect(skill).rewrite(skill)
}

fn skill_name(req: &Requirement) -> &str {
    if req.text.is_empty() {
        "Unknown skill"
    } else {
        &req.text
    }
}

fn evidence_preview(evidence: Option<&str>) -> String {
    evidence
        .unwrap_or_default()
        .chars()
        .take(EVIDENCE_PREVIEW_CHARS)
        .collect()
}

/// Builds the plan. `score` is the final capped score.
pub fn generate_optimization_plan(
    score: u32,
    gaps: &[Gap],
    requirements: &[Requirement],
    resume_text: Option<&str>,
) -> Vec<OptimizationPlanItem> {
    let mut plan = Vec::new();

    let with = |tier: Tier, match_type: MatchType| {
        requirements
            .iter()
            .filter(move |r| r.tier == tier && r.match_type == match_type)
    };

    for req in with(Tier::Critical, MatchType::None) {
        let skill = skill_name(req);
        let description = find_gap(gaps, skill)
            .and_then(|gap| gap.suggestion.clone())
            .unwrap_or_else(|| {
                format!("Add \"{skill}\" with specific examples and measurable outcomes")
            });
        plan.push(OptimizationPlanItem {
            priority: Priority::Critical,
            category: PlanCategory::MissingCriticalSkill,
            title: format!("Add Critical Skill: {skill}"),
            description,
            rewrite_suggestion: Some(rewrite_suggestion(skill)),
            potential_impact: "+10-15 points".to_string(),
            ats_impact: "HIGH - This keyword is likely required by ATS filters".to_string(),
        });
    }

    for req in with(Tier::Critical, MatchType::Contextual) {
        let skill = skill_name(req);
        plan.push(OptimizationPlanItem {
            priority: Priority::High,
            category: PlanCategory::StrengthenMatch,
            title: format!("Strengthen: {skill}"),
            description: format!(
                "Currently inferred from \"{}...\" - make explicit",
                evidence_preview(req.evidence.as_deref())
            ),
            rewrite_suggestion: Some(format!(
                "Add \"{skill}\" explicitly: \"Utilized {skill} to [specific achievement with metrics]\""
            )),
            potential_impact: "+5-8 points".to_string(),
            ats_impact: "MEDIUM - Explicit keywords score higher than inferred".to_string(),
        });
    }

    for req in with(Tier::Important, MatchType::None).take(MAX_PREFERRED_ITEMS) {
        let skill = skill_name(req);
        let description = find_gap(gaps, skill)
            .and_then(|gap| gap.suggestion.clone())
            .unwrap_or_else(|| format!("Add \"{skill}\" if you have relevant experience"));
        plan.push(OptimizationPlanItem {
            priority: Priority::Medium,
            category: PlanCategory::MissingPreferredSkill,
            title: format!("Consider Adding: {skill}"),
            description,
            rewrite_suggestion: None,
            potential_impact: "+4-6 points".to_string(),
            ats_impact: "LOW-MEDIUM - Preferred but not required".to_string(),
        });
    }

    // Absent text is assumed to already contain achievements.
    let lacks_metrics = resume_text
        .map(|text| !quality_details(text).has_quantified_achievements)
        .unwrap_or(false);
    if lacks_metrics {
        plan.push(OptimizationPlanItem {
            priority: Priority::Medium,
            category: PlanCategory::Quantification,
            title: "Add Quantified Achievements".to_string(),
            description:
                "Include specific metrics: percentages, dollar amounts, time saved, team sizes"
                    .to_string(),
            rewrite_suggestion: Some(
                "Change \"Improved sales\" → \"Increased sales by 35% ($2.1M) in Q3 2024\"".to_string(),
            ),
            potential_impact: "+3-5 points + stronger impression".to_string(),
            ats_impact: "LOW - But critical for human reviewers".to_string(),
        });
    }

    if score >= STAND_OUT_THRESHOLD {
        plan.push(OptimizationPlanItem {
            priority: Priority::Low,
            category: PlanCategory::Enhancement,
            title: "Stand Out from Competition".to_string(),
            description:
                "Your skills match well. Focus on unique achievements and impact stories."
                    .to_string(),
            rewrite_suggestion: Some(
                "Lead each bullet with a measurable outcome, not a task description".to_string(),
            ),
            potential_impact: "Differentiation from other qualified candidates".to_string(),
            ats_impact: "N/A - For human reviewer impact".to_string(),
        });

        let bonus_skills: Vec<&str> = with(Tier::Bonus, MatchType::None)
            .take(MAX_BONUS_SKILLS)
            .map(|r| r.text.as_str())
            .collect();
        if !bonus_skills.is_empty() {
            plan.push(OptimizationPlanItem {
                priority: Priority::Low,
                category: PlanCategory::BonusSkills,
                title: "Optional Bonus Skills".to_string(),
                description: format!(
                    "Consider adding if applicable: {}",
                    bonus_skills.join(", ")
                ),
                rewrite_suggestion: None,
                potential_impact: "+2-4 points".to_string(),
                ats_impact: "LOW - Nice to have".to_string(),
            });
        }
    }

    if plan.is_empty() {
        plan.push(OptimizationPlanItem {
            priority: Priority::Low,
            category: PlanCategory::Polish,
            title: "Polish Your Resume".to_string(),
            description: "Ensure consistent formatting, check for typos, and verify all dates are accurate."
                .to_string(),
            rewrite_suggestion: None,
            potential_impact: "Professional impression".to_string(),
            ats_impact: "LOW - But important for final review".to_string(),
        });
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(text: &str, tier: Tier, match_type: MatchType) -> Requirement {
        Requirement::new(text, tier, match_type)
    }

    #[test]
    fn test_perfect_match_only_stands_out() {
        let plan = generate_optimization_plan(
            100,
            &[],
            &[req("Python", Tier::Critical, MatchType::Exact)],
            None,
        );
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].priority, Priority::Low);
        assert_eq!(plan[0].title, "Stand Out from Competition");
    }

    #[test]
    fn test_missing_critical_uses_gap_suggestion() {
        let gaps = vec![Gap {
            requirement: "AWS".to_string(),
            suggestion: Some("Add AWS services you've used (EC2, S3, Lambda, RDS)".to_string()),
        }];
        let plan = generate_optimization_plan(
            50,
            &gaps,
            &[
                req("AWS", Tier::Critical, MatchType::None),
                req("Python", Tier::Critical, MatchType::Exact),
            ],
            None,
        );
        assert_eq!(plan.len(), 1);
        let item = &plan[0];
        assert_eq!(item.priority, Priority::Critical);
        assert_eq!(item.title, "Add Critical Skill: AWS");
        assert_eq!(item.description, "Add AWS services you've used (EC2, S3, Lambda, RDS)");
        assert!(item
            .rewrite_suggestion
            .as_deref()
            .unwrap()
            .starts_with("Certifications section"));
    }

    #[test]
    fn test_rewrite_templates_follow_skill_kind() {
        assert!(rewrite_suggestion("PMP Certification").starts_with("Certifications section"));
        assert!(rewrite_suggestion("Scrum").starts_with("Experience: \"Applied Scrum"));
        assert!(rewrite_suggestion("Docker").starts_with("Skills: \"Docker\""));
        assert!(rewrite_suggestion("Rust").starts_with("Add to Skills section"));
    }

    #[test]
    fn test_items_are_ordered_by_priority() {
        let plan = generate_optimization_plan(
            40,
            &[],
            &[
                req("Terraform", Tier::Important, MatchType::None),
                req("Docker", Tier::Critical, MatchType::Contextual)
                    .with_evidence("containerized applications"),
                req("AWS", Tier::Critical, MatchType::None),
            ],
            Some("Did some things with computers."),
        );
        let priorities: Vec<Priority> = plan.iter().map(|i| i.priority).collect();
        assert_eq!(
            priorities,
            vec![Priority::Critical, Priority::High, Priority::Medium, Priority::Medium]
        );
        assert_eq!(
            plan[1].description,
            "Currently inferred from \"containerized applications...\" - make explicit"
        );
        assert_eq!(plan[3].category, PlanCategory::Quantification);
    }

    #[test]
    fn test_preferred_items_limited_to_three() {
        let reqs: Vec<Requirement> = (0..5)
            .map(|i| req(&format!("tool-{i}"), Tier::Important, MatchType::None))
            .collect();
        let plan = generate_optimization_plan(60, &[], &reqs, None);
        assert_eq!(plan.len(), 3);
        assert!(plan.iter().all(|i| i.category == PlanCategory::MissingPreferredSkill));
    }

    #[test]
    fn test_bonus_skills_listed_for_strong_scores() {
        let plan = generate_optimization_plan(
            90,
            &[],
            &[
                req("Python", Tier::Critical, MatchType::Exact),
                req("Go", Tier::Bonus, MatchType::None),
                req("Elixir", Tier::Bonus, MatchType::None),
            ],
            None,
        );
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[1].description, "Consider adding if applicable: Go, Elixir");
    }

    #[test]
    fn test_fallback_polish_item_when_nothing_applies() {
        let plan = generate_optimization_plan(70, &[], &[], None);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].category, PlanCategory::Polish);
        assert_eq!(plan[0].priority, Priority::Low);
    }

    #[test]
    fn test_quantified_resume_skips_quantification_item() {
        let text = "Grew revenue 40%, cut costs 25%, saved $12,000 over 3 years.";
        let plan = generate_optimization_plan(70, &[], &[], Some(text));
        assert_eq!(plan[0].category, PlanCategory::Polish);
    }

    #[test]
    fn test_evidence_preview_truncates_and_handles_absence() {
        let long = "x".repeat(80);
        assert_eq!(evidence_preview(Some(&long)).len(), 50);
        assert_eq!(evidence_preview(None), "");
    }
}
