//! Enrichment calls — optional copy generated beyond the core resume schema.
//!
//! Which calls run is decided by the theme flags. The calls are independent,
//! so they are issued concurrently. A failed call (model error, unrecoverable
//! JSON, wrong shape) only leaves its own fields empty.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::extraction::prompts::{
    ENRICHMENT_SYSTEM, LONG_SUMMARY_PROMPT_TEMPLATE, SHORT_SUMMARY_PROMPT_TEMPLATE,
    SUMMARY_PROMPT_TEMPLATE, TITLE_PREFIX_SUFFIX_PROMPT_TEMPLATE, TITLE_PROMPT_TEMPLATE,
};
use crate::llm_client::json_recovery::recover;
use crate::llm_client::TextModel;
use crate::portfolio::themes::ThemeFlags;

/// Generated copy. Every field is optional; empty means "not generated".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Enrichment {
    pub title_prefix: Option<String>,
    pub title_suffixes: Vec<String>,
    pub title: Option<String>,
    pub summary_lines: Vec<String>,
    pub short_summary: Option<String>,
    pub long_summary: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PrefixSuffixReply {
    prefix: Option<String>,
    #[serde(default)]
    suffix: SuffixOptions,
}

/// The model sometimes answers a list-valued field with a single string.
#[derive(Debug, Default, Deserialize)]
#[serde(untagged)]
enum SuffixOptions {
    Many(Vec<String>),
    One(String),
    #[default]
    Missing,
}

#[derive(Debug, Deserialize)]
struct TitleReply {
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SummaryReply {
    #[serde(default)]
    summary: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShortSummaryReply {
    short_summary: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LongSummaryReply {
    long_summary: Option<String>,
}

/// Runs the enrichment calls `flags` asks for against `resume_json`.
pub async fn enrich(model: &dyn TextModel, resume_json: &str, flags: &ThemeFlags) -> Enrichment {
    let title = async {
        if flags.title_prefix_suffix {
            let reply: Option<PrefixSuffixReply> =
                call(model, "title prefix/suffix", TITLE_PREFIX_SUFFIX_PROMPT_TEMPLATE, resume_json)
                    .await;
            reply
                .map(|r| (r.prefix, r.suffix, None::<String>))
                .unwrap_or_default()
        } else if flags.wants_title_call() {
            let reply: Option<TitleReply> =
                call(model, "title", TITLE_PROMPT_TEMPLATE, resume_json).await;
            (None, SuffixOptions::Missing, reply.and_then(|r| r.title))
        } else {
            (None, SuffixOptions::Missing, None)
        }
    };

    let summary = async {
        if !flags.summary_prompt {
            return Vec::new();
        }
        call::<SummaryReply>(model, "summary", SUMMARY_PROMPT_TEMPLATE, resume_json)
            .await
            .map(|r| r.summary)
            .unwrap_or_default()
    };

    let short_summary = async {
        if !flags.short_summary_prompt {
            return None;
        }
        call::<ShortSummaryReply>(model, "short summary", SHORT_SUMMARY_PROMPT_TEMPLATE, resume_json)
            .await
            .and_then(|r| r.short_summary)
    };

    let long_summary = async {
        if !flags.long_summary_prompt {
            return None;
        }
        call::<LongSummaryReply>(model, "long summary", LONG_SUMMARY_PROMPT_TEMPLATE, resume_json)
            .await
            .and_then(|r| r.long_summary)
    };

    let ((title_prefix, suffixes, title), summary_lines, short_summary, long_summary) =
        tokio::join!(title, summary, short_summary, long_summary);

    let title_suffixes = match suffixes {
        SuffixOptions::Many(options) => options,
        SuffixOptions::One(option) => vec![option],
        SuffixOptions::Missing => Vec::new(),
    };

    Enrichment {
        title_prefix: non_blank(title_prefix),
        title_suffixes: non_blank_lines(title_suffixes),
        title: non_blank(title),
        summary_lines: non_blank_lines(summary_lines),
        short_summary: non_blank(short_summary),
        long_summary: non_blank(long_summary),
    }
}

/// One enrichment call. Any failure is logged and reported as `None`.
async fn call<T: DeserializeOwned>(
    model: &dyn TextModel,
    label: &str,
    template: &str,
    resume_json: &str,
) -> Option<T> {
    let prompt = template.replace("{resume_json}", resume_json);

    let raw = match model.generate(&prompt, ENRICHMENT_SYSTEM).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Enrichment call '{}' failed, omitting: {}", label, e);
            return None;
        }
    };

    let value = match recover(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(
                "Enrichment call '{}' returned unrecoverable JSON, omitting: {} (raw: {:?})",
                label,
                e,
                e.preview()
            );
            return None;
        }
    };

    match serde_json::from_value::<T>(value) {
        Ok(reply) => {
            debug!("Enrichment call '{}' succeeded", label);
            Some(reply)
        }
        Err(e) => {
            warn!("Enrichment call '{}' had the wrong shape, omitting: {}", label, e);
            None
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn non_blank_lines(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .filter_map(|line| non_blank(Some(line)))
        .collect()
}
