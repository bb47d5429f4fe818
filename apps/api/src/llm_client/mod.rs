/// LLM Client — the single point of entry for all model calls in Folio.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// All model interactions MUST go through the `TextModel` trait defined here.
///
/// Every call is single-shot. A failed or timed-out call is reported to the
/// caller, which decides whether to fail the request or degrade.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod json_recovery;
pub mod prompts;

#[cfg(test)]
pub mod mock;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all calls in Folio. Must support image input.
pub const MODEL: &str = "claude-sonnet-4-5";
/// Large enough for a full portfolio document round-trip in the chat engine.
const MAX_TOKENS: u32 = 8192;

const SUPPORTED_MEDIA_TYPES: &[&str] = &["image/png", "image/jpeg", "image/gif", "image/webp"];

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Model call timed out after {0}s")]
    Timeout(u64),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Error, PartialEq)]
pub enum ImageInputError {
    #[error("image payload is empty")]
    Empty,

    #[error("unsupported image media type '{0}'")]
    UnsupportedMediaType(String),
}

/// A base64-encoded resume image as received from the upload boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInput {
    pub media_type: String,
    pub data: String,
}

impl ImageInput {
    /// Accepts either bare base64 or a `data:<media>;base64,<payload>` URL.
    /// Bare payloads are assumed to be PNG.
    pub fn from_base64(raw: &str) -> Result<Self, ImageInputError> {
        let raw = raw.trim();
        let (media_type, data) = match raw.strip_prefix("data:") {
            Some(rest) => match rest.split_once(',') {
                Some((header, payload)) => {
                    let media = header.trim_end_matches(";base64");
                    (media.to_ascii_lowercase(), payload)
                }
                None => return Err(ImageInputError::Empty),
            },
            None => ("image/png".to_string(), raw),
        };

        if !SUPPORTED_MEDIA_TYPES.contains(&media_type.as_str()) {
            return Err(ImageInputError::UnsupportedMediaType(media_type));
        }
        if data.trim().is_empty() {
            return Err(ImageInputError::Empty);
        }

        Ok(Self {
            media_type,
            data: data.trim().to_string(),
        })
    }
}

/// The model seam. `AppState` carries an `Arc<dyn TextModel>` so the pipelines
/// can be driven by a scripted double in tests.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Prompted text generation.
    async fn generate(&self, prompt: &str, system: &str) -> Result<String, LlmError>;

    /// Reads text out of an image following `instruction`.
    async fn read_image(&self, image: &ImageInput, instruction: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: Vec<RequestBlock<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RequestBlock<'a> {
    Text { text: &'a str },
    Image { source: ImageSource<'a> },
}

#[derive(Debug, Serialize)]
struct ImageSource<'a> {
    #[serde(rename = "type")]
    source_type: &'a str,
    media_type: &'a str,
    data: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Anthropic Messages API implementation of `TextModel`.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    timeout_secs: u64,
}

impl LlmClient {
    pub fn new(api_key: String, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            timeout_secs,
        }
    }

    /// Makes one call to the Messages API and returns the first text block.
    async fn call(&self, system: &str, content: Vec<RequestBlock<'_>>) -> Result<String, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await.map_err(|e| self.classify(e))?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        match llm_response.text() {
            Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
            _ => Err(LlmError::EmptyContent),
        }
    }

    fn classify(&self, err: reqwest::Error) -> LlmError {
        if err.is_timeout() {
            LlmError::Timeout(self.timeout_secs)
        } else {
            LlmError::Http(err)
        }
    }
}

#[async_trait]
impl TextModel for LlmClient {
    async fn generate(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        self.call(system, vec![RequestBlock::Text { text: prompt }])
            .await
    }

    async fn read_image(&self, image: &ImageInput, instruction: &str) -> Result<String, LlmError> {
        let content = vec![
            RequestBlock::Image {
                source: ImageSource {
                    source_type: "base64",
                    media_type: &image.media_type,
                    data: &image.data,
                },
            },
            RequestBlock::Text { text: instruction },
        ];
        self.call(prompts::IMAGE_READER_SYSTEM, content).await
    }
}
