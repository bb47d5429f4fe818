// All model prompt constants for the extraction pipeline.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Instruction for the vision call. No schema at this stage.
pub const TEXT_EXTRACTION_INSTRUCTION: &str = "Extract all text from this resume image. \
    Preserve section headings, line breaks and the order in which text appears. \
    Return plain text only.";

/// System prompt for structured resume extraction — enforces JSON-only output.
pub const RESUME_SCHEMA_SYSTEM: &str = "You are a meticulous resume parser. \
    Convert resume text into a fixed JSON schema. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Structured extraction prompt. Replace `{no_placeholder_instruction}`,
/// `{tech_catalog}` and `{resume_text}` before sending.
pub const RESUME_SCHEMA_PROMPT_TEMPLATE: &str = r#"Convert the resume text below into structured portfolio JSON.

Return a JSON object with this EXACT schema (no extra fields):
{
  "personalInfo": {
    "name": "string",
    "email": "string",
    "phone": "string",
    "linkedin": "string",
    "github": "string or null",
    "website": "string or null",
    "location": "string or null"
  },
  "summary": "string or null",
  "experience": [
    {
      "role": "string",
      "companyName": "string",
      "location": "string or null",
      "startDate": "MM/YYYY",
      "endDate": "MM/YYYY or Present",
      "description": "string",
      "techStack": [{"name": "string", "logo": ""}]
    }
  ],
  "education": [
    {
      "degree": "string",
      "institution": "string",
      "location": "string or null",
      "startDate": "MM/YYYY",
      "endDate": "MM/YYYY",
      "description": "string"
    }
  ],
  "skills": [{"name": "string", "logo": ""}],
  "projects": [
    {
      "projectName": "string",
      "projectTitle": "string or null",
      "projectDescription": "string",
      "githubLink": "string or null",
      "liveLink": "string or null",
      "techStack": [{"name": "string", "logo": ""}]
    }
  ]
}

FORMATTING RULES:
1. Every date MUST be MM/YYYY. A current position ends with "Present".
2. Summarize each experience and project description to at most 4 lines.
3. If an education entry has no description, write one sentence derived from the degree name.
4. Technology names: when a technology appears in the KNOWN TECHNOLOGIES list, use the exact
   spelling and casing from that list. Leave every "logo" as an empty string.
5. Use null for optional fields that are not present in the resume. Use [] for empty lists.
6. Output ONLY the JSON object. No prose before or after it.

{no_placeholder_instruction}

KNOWN TECHNOLOGIES:
{tech_catalog}

RESUME TEXT:
{resume_text}"#;

/// System prompt for every enrichment call.
pub const ENRICHMENT_SYSTEM: &str = "You are a portfolio copywriter. \
    Write concise, specific copy grounded only in the resume you are given. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Two-part headline. Replace `{resume_json}` before sending.
pub const TITLE_PREFIX_SUFFIX_PROMPT_TEMPLATE: &str = r#"Write a two-part professional headline for the person in this resume.

The prefix is a specialty (e.g. "Full-Stack", "Backend", "Machine Learning").
The suffix options are role nouns, best first (e.g. "Engineer", "Developer").

Return a JSON object:
{
  "prefix": "string",
  "suffix": ["string", "string"]
}

RESUME:
{resume_json}"#;

/// Single title. Replace `{resume_json}` before sending.
pub const TITLE_PROMPT_TEMPLATE: &str = r#"Write one professional title (2 to 4 words) for the person in this resume.

Return a JSON object:
{
  "title": "string"
}

RESUME:
{resume_json}"#;

/// Hero summary lines. Replace `{resume_json}` before sending.
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Write exactly three first-person hero summary lines for the person in this resume.
Each line is one sentence of at most 15 words.

Return a JSON object:
{
  "summary": ["string", "string", "string"]
}

RESUME:
{resume_json}"#;

/// Short summary. Replace `{resume_json}` before sending.
pub const SHORT_SUMMARY_PROMPT_TEMPLATE: &str = r#"Write a short first-person bio (at most 25 words) for the person in this resume.

Return a JSON object:
{
  "shortSummary": "string"
}

RESUME:
{resume_json}"#;

/// Long summary. Replace `{resume_json}` before sending.
pub const LONG_SUMMARY_PROMPT_TEMPLATE: &str = r#"Write a detailed first-person about-me paragraph (80 to 120 words) for the person in this resume.

Return a JSON object:
{
  "longSummary": "string"
}

RESUME:
{resume_json}"#;
