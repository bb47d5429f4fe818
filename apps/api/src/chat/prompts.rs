// Prompt constants for the conversational portfolio editor.

use serde_json::Value;

use crate::catalog::TechCatalog;
use crate::chat::engine::HistoryMessage;
use crate::llm_client::prompts::{fill_template, NO_PLACEHOLDER_INSTRUCTION};

/// Only this many prior messages are shown to the model. Older ones are dropped.
pub const HISTORY_WINDOW: usize = 3;

/// System prompt for chat edits — enforces JSON-only output.
pub const CHAT_SYSTEM: &str = "You are a careful portfolio editor. \
    You apply exactly the edits the user asks for to a portfolio JSON document. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Scope rules. Tests assert on this text being present in every chat prompt.
pub const SCOPE_RULES: &str = "\
SCOPE RULES:
1. Action ONLY what the CURRENT MESSAGE explicitly asks for.
2. Do NOT infer new, unrelated requests from the conversation history. History is context, never a to-do list.
3. A vague request such as \"make it shorter\" or \"more professional\" refers to the item changed in the \
immediately preceding message. Apply it to that item and set isNewRequest to false.
4. Leave every part of the portfolio that the current message does not mention exactly as it is.";

/// Chat prompt. Replace `{scope_rules}`, `{no_placeholder_instruction}`,
/// `{history}`, `{message}`, `{portfolio_json}` and `{tech_catalog}` before sending.
pub const CHAT_PROMPT_TEMPLATE: &str = r#"Update the portfolio below according to the user's current message.

{scope_rules}

{no_placeholder_instruction}

TECHNOLOGY RULES:
- When adding a technology, use a name from KNOWN TECHNOLOGIES with its exact spelling and logo.
- A technology item is {"name": "string", "logo": "string"}.

Return ONE JSON object with this EXACT schema:
{
  "changes": [
    {
      "intent": "add | update | remove | delete | change",
      "sectionName": "string",
      "value": "string describing the new value",
      "isNewRequest": true
    }
  ],
  "updatedPortfolio": { ...the complete portfolio with the changes applied... }
}
If nothing in the current message can be actioned, return {"changes": [], "updatedPortfolio": null}.

RECENT MESSAGES (oldest first):
{history}

CURRENT MESSAGE:
{message}

CURRENT PORTFOLIO:
{portfolio_json}

KNOWN TECHNOLOGIES:
{tech_catalog}"#;

/// Builds the single chat prompt from the last `HISTORY_WINDOW` messages.
pub fn build_chat_prompt(
    current: &Value,
    message: &str,
    history: &[HistoryMessage],
    catalog: &TechCatalog,
) -> String {
    let recent = &history[history.len().saturating_sub(HISTORY_WINDOW)..];
    let history_block = if recent.is_empty() {
        "(none)".to_string()
    } else {
        recent
            .iter()
            .map(|m| format!("- {}", m.text.trim()))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let portfolio_json =
        serde_json::to_string_pretty(current).unwrap_or_else(|_| current.to_string());
    let catalog_json =
        serde_json::to_string(catalog.entries()).unwrap_or_else(|_| "[]".to_string());

    fill_template(
        CHAT_PROMPT_TEMPLATE,
        &[
            ("scope_rules", SCOPE_RULES),
            ("no_placeholder_instruction", NO_PLACEHOLDER_INSTRUCTION),
            ("history", &history_block),
            ("message", message.trim()),
            ("portfolio_json", &portfolio_json),
            ("tech_catalog", &catalog_json),
        ],
    )
}
