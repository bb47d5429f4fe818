//! Conversational portfolio mutation — one user message in, an updated
//! portfolio document plus an explanation out.
//!
//! `apply` never fails. Any model error, unrecoverable output or malformed
//! document degrades to "no changes, original document, clarification reply",
//! with the cause kept in `ChatOutcome::error` for logs.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::catalog::TechCatalog;
use crate::chat::prompts::{build_chat_prompt, CHAT_SYSTEM};
use crate::chat::reply::{compose_reply, CLARIFICATION_REPLY};
use crate::llm_client::json_recovery::recover;
use crate::llm_client::TextModel;

/// A prior chat message as sent by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryMessage {
    #[serde(default)]
    pub text: String,
    /// RFC 3339 strings and epoch milliseconds are understood. Anything else
    /// is read as `None` rather than rejecting the request.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(raw)) => DateTime::parse_from_rfc3339(raw.trim())
            .ok()
            .map(|t| t.with_timezone(&Utc)),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        _ => None,
    };
    Ok(parsed)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeIntent {
    Add,
    Update,
    Remove,
    Delete,
    Change,
    /// Any other verb the model chose. Kept so the reply can still name the section.
    Other(String),
}

impl ChangeIntent {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "add" => ChangeIntent::Add,
            "update" => ChangeIntent::Update,
            "remove" => ChangeIntent::Remove,
            "delete" => ChangeIntent::Delete,
            "change" => ChangeIntent::Change,
            other => ChangeIntent::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ChangeIntent::Add => "add",
            ChangeIntent::Update => "update",
            ChangeIntent::Remove => "remove",
            ChangeIntent::Delete => "delete",
            ChangeIntent::Change => "change",
            ChangeIntent::Other(verb) => verb,
        }
    }
}

impl Serialize for ChangeIntent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChangeIntent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(ChangeIntent::parse(&String::deserialize(deserializer)?))
    }
}

/// One explained edit. Transient: returned next to the updated document, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    pub intent: ChangeIntent,
    pub section_name: String,
    pub value: String,
    pub is_new_request: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatOutcome {
    pub changes: Vec<ChangeRecord>,
    pub updated: Value,
    pub user_reply: String,
    /// Why the turn degraded, if it did. Logged, never shown to the user.
    pub error: Option<String>,
}

impl ChatOutcome {
    fn degraded(current: &Value, error: String) -> Self {
        Self {
            changes: Vec::new(),
            updated: current.clone(),
            user_reply: CLARIFICATION_REPLY.to_string(),
            error: Some(error),
        }
    }
}

/// Applies `message` to `current` with a single model call.
pub async fn apply(
    model: &dyn TextModel,
    current: &Value,
    message: &str,
    history: &[HistoryMessage],
    catalog: &TechCatalog,
) -> ChatOutcome {
    let prompt = build_chat_prompt(current, message, history, catalog);

    let raw = match model.generate(&prompt, CHAT_SYSTEM).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Chat model call failed, degrading: {}", e);
            return ChatOutcome::degraded(current, e.to_string());
        }
    };

    let reply = match recover(&raw) {
        Ok(Value::Object(reply)) => reply,
        Ok(other) => {
            warn!("Chat reply is not a JSON object, degrading");
            return ChatOutcome::degraded(
                current,
                format!("expected a JSON object, got {}", json_kind(&other)),
            );
        }
        Err(e) => {
            warn!("Chat reply unrecoverable, degrading: {} (raw: {:?})", e, e.preview());
            return ChatOutcome::degraded(current, e.to_string());
        }
    };

    let changes = accepted_changes(reply.get("changes"));
    let updated = match reply.get("updatedPortfolio") {
        Some(candidate) if same_kind(candidate, current) => {
            let mut updated = candidate.clone();
            resolve_tech_logos(&mut updated, catalog);
            updated
        }
        Some(Value::Null) | None => current.clone(),
        Some(other) => {
            warn!(
                "Ignoring updatedPortfolio of kind {} (current is {})",
                json_kind(other),
                json_kind(current)
            );
            current.clone()
        }
    };

    info!("Chat turn accepted {} change(s)", changes.len());
    let user_reply = compose_reply(&changes, message);

    ChatOutcome {
        changes,
        updated,
        user_reply,
        error: None,
    }
}

/// Keeps entries with a non-empty intent and section name and a boolean
/// `isNewRequest`. Anything that is not an array yields no changes.
fn accepted_changes(raw: Option<&Value>) -> Vec<ChangeRecord> {
    let Some(Value::Array(entries)) = raw else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let intent = non_empty_str(entry.get("intent"))?;
            let section_name = non_empty_str(entry.get("sectionName"))?;
            let is_new_request = entry.get("isNewRequest")?.as_bool()?;
            let value = match entry.get("value") {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Null) | None => String::new(),
                Some(other) => other.to_string(),
            };
            Some(ChangeRecord {
                intent: ChangeIntent::parse(intent),
                section_name: section_name.to_string(),
                value,
                is_new_request,
            })
        })
        .collect()
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value?.as_str().map(str::trim).filter(|s| !s.is_empty())
}

/// Resolves logo-less technology items against the catalog and drops the
/// misses. Applies to every `techStack` array and to the `data` array of a
/// `technologies` section. Items that already carry a logo are left alone.
fn resolve_tech_logos(value: &mut Value, catalog: &TechCatalog) {
    match value {
        Value::Object(map) => {
            let is_technologies = map.get("type").and_then(Value::as_str) == Some("technologies");
            for (key, child) in map.iter_mut() {
                let is_tech_list = key == "techStack" || (is_technologies && key == "data");
                match child {
                    Value::Array(items) if is_tech_list => resolve_items(items, catalog),
                    other => resolve_tech_logos(other, catalog),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                resolve_tech_logos(item, catalog);
            }
        }
        _ => {}
    }
}

fn resolve_items(items: &mut Vec<Value>, catalog: &TechCatalog) {
    items.retain_mut(|item| {
        let name = match item {
            Value::String(name) => name.clone(),
            Value::Object(obj) => {
                let has_logo = obj
                    .get("logo")
                    .and_then(Value::as_str)
                    .is_some_and(|logo| !logo.trim().is_empty());
                if has_logo {
                    return true;
                }
                match obj.get("name").and_then(Value::as_str) {
                    Some(name) => name.to_string(),
                    None => return false,
                }
            }
            _ => return false,
        };

        match catalog.lookup(&name) {
            Some(entry) => {
                let mut resolved = Map::new();
                resolved.insert("name".to_string(), Value::String(name));
                resolved.insert("logo".to_string(), Value::String(entry.logo.to_string()));
                *item = Value::Object(resolved);
                true
            }
            None => {
                debug!("Dropping unknown technology '{}' from chat edit", name);
                false
            }
        }
    });
}

fn same_kind(a: &Value, b: &Value) -> bool {
    matches!(
        (a, b),
        (Value::Object(_), Value::Object(_)) | (Value::Array(_), Value::Array(_))
    )
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::mock::ScriptedModel;
    use serde_json::json;

    const NEEDLE: &str = "CURRENT MESSAGE:";

    fn portfolio() -> Value {
        json!({
            "sections": [
                {"type": "hero", "data": {"name": "Jane Doe", "title": "Engineer", "summary": ["I build things."]}},
                {"type": "technologies", "data": [{"name": "Rust", "logo": "https://cdn.example/rust.svg"}]}
            ]
        })
    }

    fn catalog() -> &'static TechCatalog {
        TechCatalog::global()
    }

    #[tokio::test]
    async fn test_empty_object_reply_changes_nothing() {
        let model = ScriptedModel::new().on(NEEDLE, "{}");
        let current = portfolio();

        let outcome = apply(&model, &current, "hmm", &[], catalog()).await;

        assert!(outcome.changes.is_empty());
        assert_eq!(outcome.updated, current);
        assert_eq!(outcome.user_reply, CLARIFICATION_REPLY);
        assert!(!outcome.user_reply.is_empty());
        assert!(outcome.error.is_none());
    }

    #[tokio::test]
    async fn test_model_failure_degrades() {
        let model = ScriptedModel::new().fail_on(NEEDLE);
        let current = portfolio();

        let outcome = apply(&model, &current, "add Go", &[], catalog()).await;

        assert!(outcome.changes.is_empty());
        assert_eq!(outcome.updated, current);
        assert_eq!(outcome.user_reply, CLARIFICATION_REPLY);
        assert!(outcome.error.is_some());
    }

    #[tokio::test]
    async fn test_unrecoverable_reply_degrades_with_error() {
        let model = ScriptedModel::new().on(NEEDLE, "Sorry, I can't help with that.");
        let current = portfolio();

        let outcome = apply(&model, &current, "add Go", &[], catalog()).await;

        assert_eq!(outcome.updated, current);
        assert!(outcome.error.unwrap().contains("not recoverable"));
    }

    #[tokio::test]
    async fn test_accepted_edit_updates_document_and_reply() {
        let reply = json!({
            "changes": [
                {"intent": "update", "sectionName": "hero", "value": "Staff Engineer", "isNewRequest": true},
                {"intent": "", "sectionName": "hero", "value": "x", "isNewRequest": true},
                {"intent": "add", "sectionName": "technologies", "value": "Go"},
                {"intent": "add", "sectionName": "technologies", "value": 3, "isNewRequest": false}
            ],
            "updatedPortfolio": {
                "sections": [
                    {"type": "hero", "data": {"name": "Jane Doe", "title": "Staff Engineer", "summary": ["I build things."]}}
                ]
            }
        });
        let model = ScriptedModel::new().on(NEEDLE, &format!("```json\n{reply}\n```"));

        let outcome = apply(&model, &portfolio(), "make me a staff engineer", &[], catalog()).await;

        assert_eq!(outcome.changes.len(), 2);
        assert_eq!(outcome.changes[0].intent, ChangeIntent::Update);
        assert_eq!(outcome.changes[1].value, "3");
        assert!(!outcome.changes[1].is_new_request);
        assert_eq!(outcome.updated["sections"][0]["data"]["title"], "Staff Engineer");
        assert_eq!(
            outcome.user_reply,
            "Updated your introduction. I also made 1 other change."
        );
    }

    #[tokio::test]
    async fn test_wrong_kind_updated_portfolio_keeps_original() {
        let model = ScriptedModel::new().on(
            NEEDLE,
            r#"{"changes": [{"intent": "update", "sectionName": "hero", "value": "x", "isNewRequest": true}], "updatedPortfolio": "oops"}"#,
        );
        let current = portfolio();

        let outcome = apply(&model, &current, "update hero", &[], catalog()).await;

        assert_eq!(outcome.changes.len(), 1);
        assert_eq!(outcome.updated, current);
    }

    #[tokio::test]
    async fn test_changes_not_an_array_are_ignored() {
        let model = ScriptedModel::new().on(NEEDLE, r#"{"changes": "many", "updatedPortfolio": null}"#);
        let current = portfolio();

        let outcome = apply(&model, &current, "do stuff", &[], catalog()).await;

        assert!(outcome.changes.is_empty());
        assert_eq!(outcome.updated, current);
    }

    #[tokio::test]
    async fn test_tech_items_resolved_and_misses_dropped() {
        let reply = json!({
            "changes": [{"intent": "add", "sectionName": "technologies", "value": "Go, Postgres", "isNewRequest": true}],
            "updatedPortfolio": {
                "sections": [
                    {"type": "technologies", "data": [
                        {"name": "Rust", "logo": "https://cdn.example/rust.svg"},
                        {"name": "Postgres", "logo": ""},
                        "Go",
                        {"name": "Zorblax"},
                        {"name": "My Custom Tool", "logo": "https://me.example/tool.png"}
                    ]},
                    {"type": "projects", "data": [
                        {"projectName": "Ledger", "techStack": [{"name": "Kafka"}, {"name": "Nopeware"}]}
                    ]}
                ]
            }
        });
        let model = ScriptedModel::new().on(NEEDLE, &reply.to_string());

        let outcome = apply(&model, &portfolio(), "add Go and Postgres", &[], catalog()).await;

        let tech = outcome.updated["sections"][0]["data"].as_array().unwrap();
        let names: Vec<&str> = tech.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["Rust", "Postgres", "Go", "My Custom Tool"]);
        assert_eq!(tech[0]["logo"], "https://cdn.example/rust.svg");
        assert_eq!(tech[1]["logo"], catalog().lookup("PostgreSQL").unwrap().logo);
        assert_eq!(tech[2]["logo"], catalog().lookup("Go").unwrap().logo);
        assert_eq!(tech[3]["logo"], "https://me.example/tool.png");

        let stack = outcome.updated["sections"][1]["data"][0]["techStack"]
            .as_array()
            .unwrap();
        assert_eq!(stack.len(), 1);
        assert_eq!(stack[0]["name"], "Kafka");
    }

    #[tokio::test]
    async fn test_tone_keyword_reply_for_follow_up() {
        let model = ScriptedModel::new().on(
            NEEDLE,
            r#"{"changes": [{"intent": "update", "sectionName": "hero", "value": "Builds things.", "isNewRequest": false}], "updatedPortfolio": {"sections": []}}"#,
        );
        let history = vec![HistoryMessage {
            text: "change summary to I build reliable things for people".to_string(),
            timestamp: None,
        }];

        let outcome = apply(&model, &portfolio(), "make the summary shorter", &history, catalog()).await;

        assert_eq!(outcome.user_reply, "I've made it shorter while keeping the key points.");
        assert!(model.prompts()[0].contains("change summary to I build reliable things"));
    }

    #[test]
    fn test_history_message_accepts_timestamp_or_none() {
        let with: HistoryMessage =
            serde_json::from_value(json!({"text": "hi", "timestamp": "2024-05-01T10:00:00Z"})).unwrap();
        assert!(with.timestamp.is_some());
        let without: HistoryMessage = serde_json::from_value(json!({"text": "hi"})).unwrap();
        assert!(without.timestamp.is_none());
    }

    #[test]
    fn test_history_timestamp_is_lenient() {
        let epoch: HistoryMessage =
            serde_json::from_value(json!({"text": "hi", "timestamp": 1714557600000_i64})).unwrap();
        assert_eq!(
            epoch.timestamp.map(|t| t.to_rfc3339()),
            Some("2024-05-01T10:00:00+00:00".to_string())
        );

        for odd in [json!("5/1/2024, 10:00:00 AM"), json!(null), json!({"at": 1}), json!(1.5)] {
            let msg: HistoryMessage =
                serde_json::from_value(json!({"text": "hi", "timestamp": odd})).unwrap();
            assert_eq!(msg.text, "hi");
            assert!(msg.timestamp.is_none());
        }
    }

    #[test]
    fn test_intent_parse_is_case_insensitive() {
        assert_eq!(ChangeIntent::parse(" ADD "), ChangeIntent::Add);
        assert_eq!(ChangeIntent::parse("rename"), ChangeIntent::Other("rename".into()));
        assert_eq!(serde_json::to_value(ChangeIntent::Delete).unwrap(), "delete");
    }
}
