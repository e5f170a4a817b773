//! Route table.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints::{alerts, chat, health, profile, translate};
use crate::api::types::ApiContext;

/// Build the full API router. Web clients may be served from a
/// different origin, so CORS is left permissive.
pub fn api_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/api/health", get(health::check))
        .route("/api/chat", post(chat::send))
        .route("/api/alerts", get(alerts::list).post(alerts::create))
        .route("/api/profile", get(profile::get).post(profile::upsert))
        .route("/api/translate", post(translate::translate))
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::kb::KnowledgeBase;

    struct TestServer {
        router: Router,
        _dir: tempfile::TempDir,
    }

    fn test_server() -> TestServer {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        // Run migrations up front so routes see a ready schema.
        crate::db::open_database(&db_path).unwrap();
        let ctx = ApiContext::new(db_path, Arc::new(KnowledgeBase::load_test()));
        TestServer {
            router: api_router(ctx),
            _dir: dir,
        }
    }

    async fn request_json(
        server: &TestServer,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header("content-type", "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let response = server
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let server = test_server();
        let (status, body) = request_json(&server, "GET", "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["knowledge_base_loaded"], true);
    }

    #[tokio::test]
    async fn chat_rejects_empty_message() {
        let server = test_server();
        let (status, body) = request_json(
            &server,
            "POST",
            "/api/chat",
            Some(json!({"message": "   "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn chat_matches_symptoms() {
        let server = test_server();
        let (status, body) = request_json(
            &server,
            "POST",
            "/api/chat",
            Some(json!({"message": "I have a fever and a cough", "user_id": "u1"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let text = body["response"].as_str().unwrap();
        assert!(text.contains("% match"));
        assert_eq!(body["detected_language"], "en");
        assert!(body["timestamp"].as_str().is_some());
    }

    #[tokio::test]
    async fn chat_symptom_keywords_win_over_vaccine() {
        let server = test_server();
        let (status, body) = request_json(
            &server,
            "POST",
            "/api/chat",
            Some(json!({"message": "fever after my vaccine"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let text = body["response"].as_str().unwrap();
        assert!(text.contains("possible conditions") || text.contains("% match"));
    }

    #[tokio::test]
    async fn chat_fallback_is_never_empty() {
        let server = test_server();
        let (status, body) = request_json(
            &server,
            "POST",
            "/api/chat",
            Some(json!({"message": "hello there"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body["response"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn alerts_list_includes_seeded_alert() {
        let server = test_server();
        let (status, body) = request_json(&server, "GET", "/api/alerts", None).await;
        assert_eq!(status, StatusCode::OK);
        let alerts = body["alerts"].as_array().unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0]["title"], "Seasonal Flu Prevention");
    }

    #[tokio::test]
    async fn alerts_create_then_filter_by_location() {
        let server = test_server();
        let (status, body) = request_json(
            &server,
            "POST",
            "/api/alerts",
            Some(json!({
                "title": "Dengue Outbreak",
                "description": "Rising cases reported",
                "severity": "high",
                "location": "Chennai"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Alert created successfully");
        assert!(body["id"].as_i64().unwrap() > 0);

        let (status, body) =
            request_json(&server, "GET", "/api/alerts?location=chennai", None).await;
        assert_eq!(status, StatusCode::OK);
        let alerts = body["alerts"].as_array().unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0]["title"], "Dengue Outbreak");
    }

    #[tokio::test]
    async fn alerts_create_rejects_missing_fields() {
        let server = test_server();
        let (status, body) = request_json(
            &server,
            "POST",
            "/api/alerts",
            Some(json!({"title": "", "description": "x"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn profile_missing_returns_not_found() {
        let server = test_server();
        let (status, body) =
            request_json(&server, "GET", "/api/profile?user_id=nobody", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn profile_upsert_merges_fields() {
        let server = test_server();
        let (status, body) = request_json(
            &server,
            "POST",
            "/api/profile",
            Some(json!({"user_id": "u1", "age": 34, "location": "Pune"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["age"], 34);

        // Second update leaves untouched fields alone.
        let (status, body) = request_json(
            &server,
            "POST",
            "/api/profile",
            Some(json!({"user_id": "u1", "language_preference": "hi"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["age"], 34);
        assert_eq!(body["location"], "Pune");
        assert_eq!(body["language_preference"], "hi");

        let (status, body) = request_json(&server, "GET", "/api/profile?user_id=u1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["language_preference"], "hi");
    }

    #[tokio::test]
    async fn chat_vaccine_branch_uses_profile_age() {
        let server = test_server();
        request_json(
            &server,
            "POST",
            "/api/profile",
            Some(json!({"user_id": "elder", "age": 60})),
        )
        .await;
        let (status, body) = request_json(
            &server,
            "POST",
            "/api/chat",
            Some(json!({"message": "which vaccine do I need", "user_id": "elder"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let text = body["response"].as_str().unwrap();
        assert!(text.contains("Shingles"));
        assert!(!text.contains("Hepatitis B"));
    }

    #[tokio::test]
    async fn translate_echoes_input() {
        let server = test_server();
        let (status, body) = request_json(
            &server,
            "POST",
            "/api/translate",
            Some(json!({"text": "hello", "target_lang": "hi"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["original"], "hello");
        assert_eq!(body["translated"], "hello");
        assert_eq!(body["target_language"], "hi");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let server = test_server();
        let (status, _) = request_json(&server, "GET", "/api/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
