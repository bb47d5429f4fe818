pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers::handle_chat;
use crate::extraction::handlers::handle_extract;
use crate::portfolio::handlers::{handle_list_technologies, handle_list_themes};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Portfolio pipelines
        .route("/api/v1/portfolio/extract", post(handle_extract))
        .route("/api/v1/portfolio/chat", post(handle_chat))
        // Lookups for the editing UI
        .route("/api/v1/technologies", get(handle_list_technologies))
        .route("/api/v1/themes", get(handle_list_themes))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::llm_client::mock::ScriptedModel;
    use crate::portfolio::themes::ThemeRegistry;

    fn app(model: ScriptedModel) -> Router {
        build_router(AppState {
            model: Arc::new(model),
            themes: Arc::new(ThemeRegistry::builtin()),
        })
    }

    async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(ScriptedModel::new()), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "folio-api");
    }

    #[tokio::test]
    async fn test_extract_returns_sections() {
        let model = ScriptedModel::new()
            .with_image_text("Sam Lee\nSkills: Rust, Docker")
            .on(
                "Convert the resume text below",
                r#"{"personalInfo": {"name": "Sam Lee"}, "skills": ["Rust", "Docker", "Frobnicator"]}"#,
            );

        let (status, body) = send(
            app(model),
            Method::POST,
            "/api/v1/portfolio/extract",
            Some(json!({"base64": "data:image/png;base64,iVBORw0KGgo=", "selectedTheme": "unknown-theme"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let sections = body["sections"].as_array().unwrap();
        let kinds: Vec<&str> = sections.iter().map(|s| s["type"].as_str().unwrap()).collect();
        assert_eq!(kinds, ["theme", "userInfo", "hero", "technologies"]);
        assert_eq!(sections[0]["data"]["name"], "classic");
        assert_eq!(sections[3]["data"].as_array().unwrap().len(), 2);
        assert_eq!(sections[3]["sectionTitle"], "Technologies");
    }

    #[tokio::test]
    async fn test_extract_parse_failure_surfaces_raw() {
        let model = ScriptedModel::new()
            .with_image_text("Sam Lee")
            .on("Convert the resume text below", "I am unable to comply.");

        let (status, body) = send(
            app(model),
            Method::POST,
            "/api/v1/portfolio/extract",
            Some(json!({"base64": "iVBORw0KGgo=", "selectedTheme": "classic"})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "EXTRACTION_FAILED");
        assert_eq!(body["stage"], "parsing");
        assert_eq!(body["raw"], "I am unable to comply.");
    }

    #[tokio::test]
    async fn test_extract_rejects_bad_image() {
        let (status, body) = send(
            app(ScriptedModel::new()),
            Method::POST,
            "/api/v1/portfolio/extract",
            Some(json!({"base64": "data:application/pdf;base64,JVBERi0=", "selectedTheme": "classic"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_chat_round_trip() {
        let portfolio = json!({"sections": [{"type": "hero", "data": {"name": "Sam", "title": "Dev", "summary": []}}]});
        let updated = json!({"sections": [{"type": "hero", "data": {"name": "Sam", "title": "Platform Engineer", "summary": []}}]});
        let reply = json!({
            "changes": [{"intent": "update", "sectionName": "hero", "value": "Platform Engineer", "isNewRequest": true}],
            "updatedPortfolio": updated
        });
        let model = ScriptedModel::new().on("CURRENT MESSAGE:", &reply.to_string());

        let (status, body) = send(
            app(model),
            Method::POST,
            "/api/v1/portfolio/chat",
            Some(json!({
                "portfolioData": portfolio,
                "inputValue": "set my title to Platform Engineer",
                "messageMemory": [{"text": "hello", "timestamp": "2024-05-01T10:00:00Z"}]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["originalData"], portfolio);
        assert_eq!(body["updatedData"], updated);
        assert_eq!(body["changes"][0]["sectionName"], "hero");
        assert_eq!(body["changes"][0]["intent"], "update");
        assert_eq!(body["userReply"], "Updated your introduction.");
    }

    #[tokio::test]
    async fn test_chat_accepts_any_history_timestamp_format() {
        let portfolio = json!({"sections": []});
        let reply = json!({
            "changes": [{"intent": "add", "sectionName": "technologies", "value": "Go", "isNewRequest": true}],
            "updatedPortfolio": {"sections": [{"type": "technologies", "data": [{"name": "Go", "logo": ""}]}]}
        });
        let model = ScriptedModel::new().on("CURRENT MESSAGE:", &reply.to_string());

        let (status, body) = send(
            app(model),
            Method::POST,
            "/api/v1/portfolio/chat",
            Some(json!({
                "portfolioData": portfolio,
                "inputValue": "add Go",
                "messageMemory": [
                    {"text": "hi", "timestamp": 1714557600000_i64},
                    {"text": "hello again", "timestamp": "5/1/2024, 10:00:00 AM"}
                ]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["changes"][0]["sectionName"], "technologies");
        assert_eq!(body["userReply"], "Added that to your technologies.");
    }

    #[tokio::test]
    async fn test_chat_degrades_with_200() {
        let portfolio = json!({"sections": []});

        let (status, body) = send(
            app(ScriptedModel::new()),
            Method::POST,
            "/api/v1/portfolio/chat",
            Some(json!({"portfolioData": portfolio, "inputValue": "add Go", "messageMemory": []})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["updatedData"], portfolio);
        assert_eq!(body["changes"], json!([]));
        assert!(!body["userReply"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_chat_rejects_empty_message() {
        let (status, body) = send(
            app(ScriptedModel::new()),
            Method::POST,
            "/api/v1/portfolio/chat",
            Some(json!({"portfolioData": {}, "inputValue": "   "})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "inputValue cannot be empty");
    }

    #[tokio::test]
    async fn test_lookup_endpoints() {
        let (status, tech) = send(app(ScriptedModel::new()), Method::GET, "/api/v1/technologies", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(tech
            .as_array()
            .unwrap()
            .iter()
            .any(|t| t["name"] == "PostgreSQL" && t["logo"].as_str().is_some_and(|l| !l.is_empty())));

        let (status, themes) = send(app(ScriptedModel::new()), Method::GET, "/api/v1/themes", None).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = themes
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["bold", "classic", "minimal", "modern"]);
        assert_eq!(themes[3]["flags"]["titlePrefixSuffix"], true);
    }
}
