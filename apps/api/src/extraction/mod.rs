//! Requirement Extraction — the seam between raw text and the scoring core.
//!
//! An extractor turns `(resume, job description)` into classified
//! requirements plus experience facts. The scoring core only ever sees the
//! result. `AppState` holds an `Arc<dyn RequirementExtractor>`, optionally
//! wrapped in [`cache::CachingExtractor`].

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::scoring::{ExperienceContext, Gap, Requirement, ScoringInput};

pub mod cache;
pub mod llm;
pub mod prompts;

// ────────────────────────────────────────────────────────────────────────────
// Extraction output
// ────────────────────────────────────────────────────────────────────────────

/// Experience facts as the extractor reports them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceFacts {
    #[serde(default, deserialize_with = "lenient_years")]
    pub required_years: f64,
    #[serde(default, deserialize_with = "lenient_years")]
    pub candidate_years: f64,
    #[serde(default)]
    pub is_senior_role: bool,
    /// Quoted resume phrases that signal seniority (led, mentored, ...).
    #[serde(default)]
    pub seniority_signals: Vec<String>,
}

impl ExperienceFacts {
    pub fn context(&self) -> ExperienceContext {
        ExperienceContext {
            required_years: self.required_years,
            candidate_years: self.candidate_years,
            is_senior_role: self.is_senior_role,
            seniority_signals_found: self.seniority_signals.len() as u32,
        }
    }
}

/// Everything an extractor returns for one resume/job pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    #[serde(default)]
    pub requirements: Vec<Requirement>,
    #[serde(default)]
    pub experience: ExperienceFacts,
    #[serde(default)]
    pub gaps: Vec<Gap>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl Extraction {
    pub fn scoring_input(&self, resume_text: &str) -> ScoringInput {
        ScoringInput {
            requirements: self.requirements.clone(),
            experience: self.experience.context(),
            resume_text: Some(resume_text.to_string()),
        }
    }
}

/// Accepts numbers, numeric strings (`"5+"`), or null. Anything else is 0.
fn lenient_years<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let years = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let digits: String = s
                .trim()
                .chars()
                .take_while(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            digits.parse().unwrap_or(0.0)
        }
        _ => 0.0,
    };
    Ok(years.max(0.0))
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap extraction backends without touching the handlers.
#[async_trait]
pub trait RequirementExtractor: Send + Sync {
    async fn extract(&self, resume_text: &str, job_description: &str)
        -> Result<Extraction, AppError>;
}
