//! Integration tests for the HTTP API

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use mindlens::core::{create_router, InsightEngine, MoodProvider, MoodResolver};
use mindlens::types::{EmotionScore, MoodSource};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_router() -> axum::Router {
    create_router(Arc::new(InsightEngine::lexicon_only()))
}

fn analyze_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/analyze")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_router();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], mindlens::VERSION);
    assert_eq!(json["model_enabled"], false);
}

#[tokio::test]
async fn test_moods_in_precedence_order() {
    let app = create_test_router();

    let response = app
        .oneshot(Request::builder().uri("/moods").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let labels: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["label"].as_str().unwrap())
        .collect();
    assert_eq!(
        labels,
        vec!["anxious", "sad", "angry", "confused", "motivated", "optimistic", "calm", "neutral"]
    );
}

#[tokio::test]
async fn test_analyze_reflection() {
    let app = create_test_router();

    let response = app
        .oneshot(analyze_request(
            r#"{"text": "I've been feeling anxious about my work lately, but I'm trying to stay hopeful."}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["mood"]["label"], "anxious");
    assert_eq!(json["mood"]["confidence"], 0.5);
    assert_eq!(json["tier"], "medium");
    assert_eq!(json["source"], "lexicon");
    assert_eq!(json["prompts"].as_array().unwrap().len(), 2);
    assert_eq!(json["actions"].as_array().unwrap().len(), 2);
    assert!(json["summary"].is_string());
    assert!(json["analyzed_at"].is_string());
}

#[tokio::test]
async fn test_analyze_empty_text() {
    let app = create_test_router();

    for body in [r#"{"text": ""}"#, r#"{"text": "   "}"#, r#"{}"#] {
        let response = app.clone().oneshot(analyze_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["mood"]["label"], "neutral");
        assert_eq!(json["mood"]["confidence"], 0.0);
        assert_eq!(json["source"], "empty");
        assert_eq!(json["prompts"].as_array().unwrap().len(), 1);
    }
}

#[tokio::test]
async fn test_analyze_rejects_invalid_json() {
    let app = create_test_router();

    let response = app.oneshot(analyze_request("not json")).await.unwrap();
    assert!(response.status().is_client_error());
}

struct Broken;

#[async_trait]
impl MoodProvider for Broken {
    fn name(&self) -> &str {
        "broken"
    }

    fn source(&self) -> MoodSource {
        MoodSource::FineTuned
    }

    async fn try_classify(&self, _text: &str) -> Option<EmotionScore> {
        panic!("unexpected provider failure");
    }
}

#[tokio::test]
async fn test_analysis_failure_is_500() {
    let engine = InsightEngine::new(MoodResolver::new(vec![Box::new(Broken)]), None);
    let app = create_router(Arc::new(engine));

    let response = app
        .clone()
        .oneshot(analyze_request(r#"{"text": "hello"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "analysis failed, please try again");

    // next request is unaffected
    let response = app.oneshot(analyze_request(r#"{"text": ""}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
