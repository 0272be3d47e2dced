//! LLM-backed requirement extractor.

use async_trait::async_trait;
use tracing::info;

use super::prompts::{extraction_prompt, system_prompt};
use super::{Extraction, RequirementExtractor};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Classifies requirements via Claude. Stateless apart from the HTTP client.
pub struct LlmRequirementExtractor {
    llm: LlmClient,
}

impl LlmRequirementExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl RequirementExtractor for LlmRequirementExtractor {
    async fn extract(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<Extraction, AppError> {
        let prompt = extraction_prompt(resume_text, job_description);
        let extraction: Extraction = self
            .llm
            .call_json(&prompt, &system_prompt())
            .await
            .map_err(|e| AppError::Llm(format!("requirement extraction failed: {e}")))?;

        if extraction.requirements.is_empty() {
            return Err(AppError::UnprocessableEntity(
                "No requirements could be extracted from the job description".to_string(),
            ));
        }

        info!(
            requirements = extraction.requirements.len(),
            gaps = extraction.gaps.len(),
            "requirements extracted"
        );
        Ok(extraction)
    }
}
