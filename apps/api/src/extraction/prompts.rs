// Prompt constants for requirement extraction.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{EVIDENCE_INSTRUCTION, JSON_ONLY_SYSTEM};

/// Role line for the extraction system prompt; `system_prompt()` appends the
/// shared JSON and evidence rules.
pub const EXTRACTION_ROLE: &str = "You are an expert technical recruiter and ATS analyst. \
    You classify job requirements by importance and judge how explicitly a resume \
    demonstrates each one.";

pub fn system_prompt() -> String {
    format!("{EXTRACTION_ROLE} {JSON_ONLY_SYSTEM} {EVIDENCE_INSTRUCTION}")
}

/// Extraction prompt template. Replace `{resume_text}` and `{job_description}` before sending.
pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"Compare the resume against the job description.

Return a JSON object with this EXACT schema (no extra fields):
{
  "requirements": [
    {"text": "Python", "tier": 1, "match_type": "EXACT", "evidence": "Expert in Python, Django, Flask"},
    {"text": "AWS", "tier": 1, "match_type": "NONE", "evidence": null}
  ],
  "experience": {
    "required_years": 5,
    "candidate_years": 6,
    "is_senior_role": true,
    "seniority_signals": ["Led team of 3 developers"]
  },
  "gaps": [
    {"requirement": "AWS", "suggestion": "Add AWS services you've used (EC2, S3, Lambda, RDS)"}
  ],
  "summary": "One sentence on overall fit."
}

TIERS (pick exactly one per requirement):
- 1 = Critical: explicit must-haves ("required", "must have", minimum years, core stack)
- 2 = Important: preferred qualifications ("preferred", "strongly desired")
- 3 = Bonus: nice-to-haves ("a plus", "bonus", "nice to have")

MATCH TYPES (pick exactly one per requirement):
- "EXACT": the resume names the skill verbatim
- "VARIANT": a synonym, abbreviation or close variant ("JS" for "JavaScript", "GitHub Actions" for "CI/CD")
- "CONTEXTUAL": clearly implied by described work but never named
- "NONE": no support in the resume

Rules:
- List each distinct requirement once, in the order it appears in the job description.
- "evidence" quotes the resume phrase that supports the match; null for NONE.
- "required_years" is 0 when the job states no minimum.
- "gaps" only lists requirements classified NONE.

## Resume:
{resume_text}

## Job Description:
{job_description}
"#;

pub fn extraction_prompt(resume_text: &str, job_description: &str) -> String {
    EXTRACTION_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}
