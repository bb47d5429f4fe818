//! Scripted `TextModel` double for pipeline tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{ImageInput, LlmError, TextModel};

struct Rule {
    needle: String,
    response: Option<String>,
}

/// Answers each prompt with the response of the first rule whose needle the
/// prompt contains. A rule registered with `fail_on` answers with an API error.
/// Prompts without a matching rule also fail.
#[derive(Default)]
pub struct ScriptedModel {
    image_text: Option<String>,
    rules: Vec<Rule>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image_text(mut self, text: &str) -> Self {
        self.image_text = Some(text.to_string());
        self
    }

    pub fn on(mut self, needle: &str, response: &str) -> Self {
        self.rules.push(Rule {
            needle: needle.to_string(),
            response: Some(response.to_string()),
        });
        self
    }

    pub fn fail_on(mut self, needle: &str) -> Self {
        self.rules.push(Rule {
            needle: needle.to_string(),
            response: None,
        });
        self
    }

    /// Every text prompt received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextModel for ScriptedModel {
    async fn generate(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.rules
            .iter()
            .find(|rule| prompt.contains(&rule.needle))
            .and_then(|rule| rule.response.clone())
            .ok_or(LlmError::Api {
                status: 500,
                message: "scripted failure".to_string(),
            })
    }

    async fn read_image(&self, _image: &ImageInput, _instruction: &str) -> Result<String, LlmError> {
        self.image_text.clone().ok_or(LlmError::EmptyContent)
    }
}
