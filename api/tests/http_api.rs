//! End-to-end route tests over an in-process router. No live Qdrant or
//! LLM is needed: the interesting paths here are the ones that answer
//! before touching either dependency.

use std::{sync::Arc, time::Duration};

use api::{
    core::{
        app_state::AppState, config::AppConfig, response_cache::ResponseCache,
        usage::ApiUsageTracker,
    },
    router,
};
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use qa_engine::VariantPicker;
use serde_json::Value;
use tower::ServiceExt;

fn disabled_state() -> AppState {
    AppState {
        retriever: None,
        llm: None,
        cache: ResponseCache::new(Duration::from_secs(300), 64),
        usage: ApiUsageTracker::new(10_000),
        variants: VariantPicker::with_seed(7),
        config: AppConfig::from_env(),
    }
}

fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn chat_answers_503_when_retriever_is_disabled() {
    let app = router(Arc::new(disabled_state()));

    let response = app
        .oneshot(json_post(
            "/api/chat",
            r#"{"message":"What causes migraines?"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = body_json(response).await;
    assert_eq!(
        body["response"],
        "I'm sorry, the service is currently experiencing technical difficulties. Please try again later."
    );
    assert_eq!(body["error"], "Retriever not available");
    assert!(body.get("variant").is_none());
    assert!(body.get("requestId").is_none());
}

#[tokio::test]
async fn chat_rejects_bodies_without_a_message() {
    let app = router(Arc::new(disabled_state()));

    let response = app.oneshot(json_post("/api/chat", r#"{}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn chat_rejects_blank_messages() {
    let app = router(Arc::new(disabled_state()));

    let response = app
        .oneshot(json_post("/api/chat", r#"{"message":"   "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "BAD_REQUEST");
    assert_eq!(body["message"], "bad request: message must not be empty");
}

#[tokio::test]
async fn chat_serves_cached_answers_without_dependencies() {
    let state = disabled_state();
    state.cache.insert(
        "what is influenza".into(),
        "A seasonal viral infection.".into(),
    );
    let app = router(Arc::new(state));

    let response = app
        .oneshot(json_post("/api/chat", r#"{"message":"what is influenza"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["response"], "A seasonal viral infection.");
    assert_eq!(body["source"], "cache");
    assert!(body.get("variant").is_none());
}

#[tokio::test]
async fn chat_looks_up_cache_under_the_anonymized_key() {
    let state = disabled_state();
    state.cache.insert(
        "[NAME] has a cold".into(),
        "Rest and fluids are usually enough.".into(),
    );
    let app = router(Arc::new(state));

    let response = app
        .oneshot(json_post(
            "/api/chat",
            r#"{"message":"Alice Smith has a cold"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["response"], "Rest and fluids are usually enough.");
    assert_eq!(body["source"], "cache");
}

#[tokio::test]
async fn chat_skips_cache_for_high_complexity_questions() {
    let state = disabled_state();
    state.cache.insert(
        "diagnosis treatment symptoms prognosis".into(),
        "stale".into(),
    );
    let app = router(Arc::new(state));

    // Four medical terms push the score well past the live-inference bar,
    // so the cached entry must be ignored and the gate answers 503.
    let response = app
        .oneshot(json_post(
            "/api/chat",
            r#"{"message":"diagnosis treatment symptoms prognosis"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn feedback_appends_a_line_and_reports_success() {
    let log_path = std::env::temp_dir().join(format!(
        "feedback-route-{}.log",
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    ));

    let mut state = disabled_state();
    state.config.feedback_log_path = log_path.to_string_lossy().into_owned();
    let app = router(Arc::new(state));

    let response = app
        .oneshot(json_post(
            "/api/feedback",
            r#"{"messageId":"req-42","feedback":"helpful"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "success");

    let contents = std::fs::read_to_string(&log_path).unwrap();
    assert!(contents.trim_end().ends_with(",req-42,helpful"));
    std::fs::remove_file(&log_path).unwrap();
}

#[tokio::test]
async fn feedback_rejects_missing_fields() {
    let app = router(Arc::new(disabled_state()));

    let response = app
        .oneshot(json_post("/api/feedback", r#"{"messageId":"req-42"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_reports_healthy() {
    let app = router(Arc::new(disabled_state()));

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}
