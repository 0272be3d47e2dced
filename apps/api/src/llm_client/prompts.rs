// Shared prompt fragments. Each caller keeps its own prompts.rs alongside it
// and composes from these.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Keeps classification honest: evidence must be quoted, never invented.
pub const EVIDENCE_INSTRUCTION: &str = "\
    CRITICAL: Every match must be supported by evidence quoted from the resume. \
    If the resume does not support a requirement, classify it as NONE. \
    Do NOT infer skills from job titles alone.";
