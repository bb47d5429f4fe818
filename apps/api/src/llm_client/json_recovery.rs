//! Layered JSON recovery for model output.
//!
//! Models wrap JSON in fences, prefix it with prose, or leave trailing commas
//! even when told not to. Recovery runs a fixed sequence and the first parse
//! that succeeds wins:
//!
//! 1. strip a leading/trailing code fence
//! 2. narrow to leftmost `{` .. rightmost `}` (greedy, not depth-aware)
//! 3. parse
//! 4. repair (trailing commas, control whitespace, whitespace runs) and parse once more
//!
//! The greedy span in step 2 mis-extracts when the model emits two separate
//! objects or trailing prose containing braces. It is kept as-is because a
//! depth-aware scanner changes which payload wins on malformed input.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

static TRAILING_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*([}\]])").expect("valid trailing comma regex"));
static CONTROL_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\r\n\t]+").expect("valid control whitespace regex"));
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("valid whitespace run regex"));

/// No recovery strategy produced parseable JSON. Carries the untouched model
/// output for diagnostics.
#[derive(Debug, Error)]
#[error("model output is not recoverable JSON: {reason}")]
pub struct MalformedOutput {
    pub raw: String,
    pub reason: String,
}

impl MalformedOutput {
    /// First 200 characters of the raw output, for log lines.
    pub fn preview(&self) -> String {
        self.raw.chars().take(200).collect()
    }
}

/// Recovers a JSON value from arbitrary model output.
pub fn recover(text: &str) -> Result<Value, MalformedOutput> {
    let unfenced = strip_json_fences(text);
    let candidate = outermost_object_span(unfenced).unwrap_or(unfenced);

    let first_error = match serde_json::from_str::<Value>(candidate) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    let repaired = repair(candidate);
    serde_json::from_str::<Value>(&repaired).map_err(|e| MalformedOutput {
        raw: text.to_string(),
        reason: format!("{first_error}; after repair: {e}"),
    })
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// Leftmost `{` through rightmost `}`, if both exist in that order.
fn outermost_object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

fn repair(text: &str) -> String {
    let without_commas = TRAILING_COMMA.replace_all(text, "$1");
    let flattened = CONTROL_WHITESPACE.replace_all(&without_commas, " ");
    WHITESPACE_RUN.replace_all(&flattened, " ").into_owned()
}
