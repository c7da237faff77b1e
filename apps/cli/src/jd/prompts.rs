// LLM prompt constants for job-description extraction.

/// Extraction prompt template. Replace `{jd_text}` before sending.
/// Instructs the model to answer with a bare JSON object so the response can
/// be deserialized directly into `JobDetails`.
pub const JD_EXTRACT_PROMPT_TEMPLATE: &str = r#"Extract key job details from the provided job posting text. Include the following information in a structured format:
1. Job Requirements
2. Qualifications
3. Basic Requirements
4. Responsibilities
5. Any other relevant details that describe the role.

Return a JSON object with this EXACT schema (no extra fields):
{
  "job_requirements": ["5+ years backend experience"],
  "qualifications": ["BSc in Computer Science or equivalent"],
  "basic_requirements": ["Proficiency in Python"],
  "responsibilities": ["Design and maintain REST APIs"],
  "additional_details": ["Hybrid, 2 days on-site"]
}

Respond with valid JSON only. Do NOT include any text outside the JSON object.
Do NOT use markdown code fences. Ensure the output is clear, concise, and
organized for easy reference.

Job Description Text:
{jd_text}"#;
