//! Resume schema extraction — image → raw text → structured `ResumeDocument`,
//! plus the theme-driven enrichment calls.
//!
//! The two core calls are fatal on failure. Enrichment failures are not.

use std::fmt;

use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::TechCatalog;
use crate::extraction::enrichment::{enrich, Enrichment};
use crate::extraction::prompts::{
    RESUME_SCHEMA_PROMPT_TEMPLATE, RESUME_SCHEMA_SYSTEM, TEXT_EXTRACTION_INSTRUCTION,
};
use crate::llm_client::json_recovery::recover;
use crate::llm_client::prompts::{fill_template, NO_PLACEHOLDER_INSTRUCTION};
use crate::llm_client::{ImageInput, LlmError, TextModel};
use crate::models::resume::ResumeDocument;
use crate::portfolio::themes::ThemeFlags;

/// Pipeline stage a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStage {
    TextExtraction,
    Parsing,
    Schema,
}

impl ExtractionStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionStage::TextExtraction => "text_extraction",
            ExtractionStage::Parsing => "parsing",
            ExtractionStage::Schema => "schema",
        }
    }
}

impl fmt::Display for ExtractionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("model call failed during {stage}: {source}")]
    Model {
        stage: ExtractionStage,
        #[source]
        source: LlmError,
    },

    #[error("extraction failed at stage {stage}")]
    Failed {
        stage: ExtractionStage,
        raw_output: String,
    },
}

#[derive(Debug, Clone)]
pub struct ExtractedResume {
    pub resume: ResumeDocument,
    pub enrichment: Enrichment,
}

/// Builds the structured-extraction prompt for `resume_text`.
pub fn build_schema_prompt(resume_text: &str, catalog: &TechCatalog) -> String {
    let names = serde_json::to_string(&catalog.names()).unwrap_or_else(|_| "[]".to_string());
    fill_template(
        RESUME_SCHEMA_PROMPT_TEMPLATE,
        &[
            ("no_placeholder_instruction", NO_PLACEHOLDER_INSTRUCTION),
            ("tech_catalog", &names),
            ("resume_text", resume_text),
        ],
    )
}

/// Reads the resume image and converts it into a `ResumeDocument`, then runs
/// whichever enrichment calls `flags` enables.
pub async fn extract(
    model: &dyn TextModel,
    image: &ImageInput,
    flags: &ThemeFlags,
    catalog: &TechCatalog,
) -> Result<ExtractedResume, ExtractionError> {
    // Step 1: raw text, no schema
    let resume_text = model
        .read_image(image, TEXT_EXTRACTION_INSTRUCTION)
        .await
        .map_err(|source| ExtractionError::Model {
            stage: ExtractionStage::TextExtraction,
            source,
        })?;
    info!("Read {} chars of resume text from image", resume_text.len());

    // Step 2: structured extraction against the catalog
    let prompt = build_schema_prompt(&resume_text, catalog);
    let raw = model
        .generate(&prompt, RESUME_SCHEMA_SYSTEM)
        .await
        .map_err(|source| ExtractionError::Model {
            stage: ExtractionStage::Parsing,
            source,
        })?;

    // Step 3: recover JSON
    let value = recover(&raw).map_err(|e| {
        warn!("Resume JSON unrecoverable: {} (raw: {:?})", e, e.preview());
        ExtractionError::Failed {
            stage: ExtractionStage::Parsing,
            raw_output: e.raw,
        }
    })?;

    let resume: ResumeDocument = serde_json::from_value(value).map_err(|e| {
        warn!("Resume JSON does not match the schema: {}", e);
        ExtractionError::Failed {
            stage: ExtractionStage::Schema,
            raw_output: raw.clone(),
        }
    })?;
    info!(
        "Extracted resume: {} experience, {} projects, {} skills",
        resume.experience.len(),
        resume.projects.len(),
        resume.skills.len()
    );

    // Step 4: optional enrichment
    let resume_json = serde_json::to_string(&resume).unwrap_or_else(|_| raw.clone());
    let enrichment = enrich(model, &resume_json, flags).await;

    Ok(ExtractedResume { resume, enrichment })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::mock::ScriptedModel;

    const SCHEMA_NEEDLE: &str = "Convert the resume text below";

    fn image() -> ImageInput {
        ImageInput::from_base64("iVBORw0KGgo=").unwrap()
    }

    fn catalog() -> &'static TechCatalog {
        TechCatalog::global()
    }

    #[test]
    fn test_schema_prompt_embeds_text_catalog_and_rules() {
        let prompt = build_schema_prompt("Jane Doe\nRust engineer", catalog());
        assert!(prompt.contains("Jane Doe\nRust engineer"));
        assert!(prompt.contains("\"React\""));
        assert!(prompt.contains(NO_PLACEHOLDER_INSTRUCTION));
        assert!(prompt.contains("MM/YYYY"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{tech_catalog}"));
    }

    #[test]
    fn test_schema_prompt_keeps_braces_in_resume_text() {
        let prompt = build_schema_prompt("Wrote docs on {tech_catalog} syntax", catalog());
        assert!(prompt.contains("Wrote docs on {tech_catalog} syntax"));
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(ExtractionStage::TextExtraction.to_string(), "text_extraction");
        assert_eq!(ExtractionStage::Parsing.to_string(), "parsing");
        assert_eq!(ExtractionStage::Schema.to_string(), "schema");
    }

    #[tokio::test]
    async fn test_extract_happy_path_without_enrichment() {
        let model = ScriptedModel::new()
            .with_image_text("Jane Doe\njane@example.com\nSkills: Rust, Postgres")
            .on(
                SCHEMA_NEEDLE,
                "Here you go:\n```json\n{\"personalInfo\": {\"name\": \"Jane Doe\", \"email\": \"jane@example.com\"}, \"skills\": [\"Rust\", {\"name\": \"Postgres\", \"logo\": \"\"}],}\n```",
            );

        let extracted = extract(&model, &image(), &ThemeFlags::default(), catalog())
            .await
            .unwrap();

        let info = extracted.resume.personal_info.unwrap();
        assert_eq!(info.name.as_deref(), Some("Jane Doe"));
        assert_eq!(extracted.resume.skills.len(), 2);
        assert_eq!(extracted.enrichment, Enrichment::default());
        assert_eq!(model.prompts().len(), 1);
        assert!(model.prompts()[0].contains("Skills: Rust, Postgres"));
    }

    #[tokio::test]
    async fn test_unrecoverable_json_fails_at_parsing_with_raw() {
        let model = ScriptedModel::new()
            .with_image_text("Jane Doe")
            .on(SCHEMA_NEEDLE, "I could not read this resume.");

        let err = extract(&model, &image(), &ThemeFlags::default(), catalog())
            .await
            .unwrap_err();

        match err {
            ExtractionError::Failed { stage, raw_output } => {
                assert_eq!(stage, ExtractionStage::Parsing);
                assert_eq!(raw_output, "I could not read this resume.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_wrong_shape_fails_at_schema() {
        let model = ScriptedModel::new()
            .with_image_text("Jane Doe")
            .on(SCHEMA_NEEDLE, r#"{"experience": "ten years"}"#);

        let err = extract(&model, &image(), &ThemeFlags::default(), catalog())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ExtractionError::Failed {
                stage: ExtractionStage::Schema,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_image_read_failure_is_a_model_error() {
        let model = ScriptedModel::new();

        let err = extract(&model, &image(), &ThemeFlags::default(), catalog())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ExtractionError::Model {
                stage: ExtractionStage::TextExtraction,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_enrichment_failure_keeps_core_resume() {
        let model = ScriptedModel::new()
            .with_image_text("Jane Doe")
            .on(SCHEMA_NEEDLE, r#"{"summary": "Backend engineer."}"#)
            .fail_on("hero summary lines");
        let flags = ThemeFlags {
            summary_prompt: true,
            ..ThemeFlags::default()
        };

        let extracted = extract(&model, &image(), &flags, catalog()).await.unwrap();

        assert_eq!(extracted.resume.summary.as_deref(), Some("Backend engineer."));
        assert!(extracted.enrichment.summary_lines.is_empty());
    }
}
