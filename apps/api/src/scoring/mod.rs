// Scoring core: deterministic resume-vs-job scoring.
// Pure and synchronous. Consumes classified requirements, never calls the LLM.
// Same input always produces the same ScoringResult, evaluation and plan.

pub mod caps;
pub mod config;
pub mod dimensions;
pub mod engine;
pub mod evaluation;
pub mod experience;
pub mod model;
pub mod plan;
pub mod quality;
pub mod report;
pub mod tiers;

#[cfg(test)]
mod properties;

// Re-export the public API consumed by the HTTP handlers.
pub use config::ScoringConfig;
pub use engine::calculate_score;
pub use evaluation::{generate_evaluation, EvaluationResult};
pub use model::{
    ExperienceContext, Gap, Interpretation, MatchType, Priority, Requirement, ScoringInput,
    ScoringResult, Tier,
};
pub use plan::{generate_optimization_plan, OptimizationPlanItem};
pub use report::{assemble_report, AnalysisReport, ReportContext};
