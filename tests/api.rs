// HTTP API tests: the full router over an in-memory database.
//
// The LLM is replaced by a scripted TextAnalyzer so responses are
// deterministic; keyword extraction and persistence are the real thing.
// Requests go through tower::ServiceExt::oneshot, no socket involved.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use quarry::analysis::AnalysisService;
use quarry::config::Config;
use quarry::keywords::KeywordExtractor;
use quarry::llm::{LlmAnalysis, LlmError, Sentiment, TextAnalyzer};
use quarry::web::{build_router, AppState};

const RECIPE: &str = "The chef prepared delicious pasta with fresh tomatoes and herbs. \
                      The pasta was perfectly cooked and seasoned.";
const GARDEN: &str = "The garden needs water. A dry garden loses every seedling in a week.";
const SAD: &str = "A sad story about a lost kitten and a long rainy night.";

/// Deterministic stand-in for the LLM. Texts containing "FAIL" are rejected.
struct ScriptedAnalyzer;

#[async_trait]
impl TextAnalyzer for ScriptedAnalyzer {
    async fn analyze(&self, text: &str) -> Result<LlmAnalysis, LlmError> {
        if text.contains("FAIL") {
            return Err(LlmError::Api {
                status: 503,
                body: "upstream unavailable".to_string(),
            });
        }
        let (topics, sentiment) = if text.contains("garden") {
            (vec!["gardening", "nature"], Sentiment::Neutral)
        } else if text.contains("sad") {
            (vec!["pets", "weather"], Sentiment::Negative)
        } else {
            (vec!["cooking", "food"], Sentiment::Positive)
        };
        Ok(LlmAnalysis {
            summary: format!("Summary of: {}", &text[..20]),
            title: None,
            topics: topics.into_iter().map(String::from).collect(),
            sentiment,
            confidence_score: 0.9,
        })
    }
}

fn app() -> Router {
    let service = AnalysisService::new(
        Arc::new(ScriptedAnalyzer),
        KeywordExtractor::new(),
        quarry::db::in_memory().unwrap(),
    );
    build_router(AppState::new(service, Config::default()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn analyze(app: &Router, texts: &[&str]) -> Vec<Value> {
    let (status, body) = post_json(app, "/api/v1/analysis", json!({ "texts": texts })).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body.as_array().unwrap().clone()
}

// ============================================================
// Health
// ============================================================

#[tokio::test]
async fn health_reports_healthy() {
    let app = app();
    for uri in ["/api/v1/health", "/api/v1/health/"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "quarry");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
    }
}

#[tokio::test]
async fn health_timestamp_matches_stored_record_precision() {
    let (_, body) = get(&app(), "/api/v1/health").await;
    let ts = body["timestamp"].as_str().unwrap();
    // 2026-01-01T00:00:00.000Z, same shape as created_at
    assert_eq!(ts.len(), 24, "{ts}");
    assert_eq!(&ts[19..20], ".");
    assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
}

// ============================================================
// POST /analysis
// ============================================================

#[tokio::test]
async fn analyze_returns_stored_records() {
    let app = app();
    let records = analyze(&app, &[RECIPE, GARDEN]).await;
    assert_eq!(records.len(), 2);

    let recipe = &records[0];
    assert_eq!(recipe["original_text"], RECIPE);
    assert_eq!(recipe["sentiment"], "positive");
    assert_eq!(recipe["topics"], json!(["cooking", "food"]));
    assert_eq!(recipe["keywords"][0], "pasta");
    assert!(recipe["title"].is_null());
    assert!(recipe["updated_at"].is_null());
    assert!((recipe["confidence_score"].as_f64().unwrap() - 0.9).abs() < 1e-9);

    assert_eq!(records[1]["keywords"][0], "garden");
}

#[tokio::test]
async fn record_json_has_exactly_the_public_fields() {
    let app = app();
    let records = analyze(&app, &[RECIPE]).await;
    let mut keys: Vec<&str> = records[0]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "confidence_score",
            "created_at",
            "id",
            "keywords",
            "original_text",
            "sentiment",
            "summary",
            "title",
            "topics",
            "updated_at",
        ]
    );
}

#[tokio::test]
async fn analyze_trims_texts() {
    let app = app();
    let padded = format!("   {RECIPE}\n\n");
    let records = analyze(&app, &[padded.as_str()]).await;
    assert_eq!(records[0]["original_text"], RECIPE);
}

#[tokio::test]
async fn failed_texts_are_left_out() {
    let app = app();
    let records = analyze(&app, &[RECIPE, "This text will FAIL upstream.", GARDEN]).await;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["original_text"], RECIPE);
    assert_eq!(records[1]["original_text"], GARDEN);

    let (_, all) = get(&app, "/api/v1/analysis").await;
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn all_failures_is_an_empty_success() {
    let app = app();
    let records = analyze(&app, &["Every line here will FAIL."]).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn trailing_slash_post_works() {
    let app = app();
    let (status, body) = post_json(&app, "/api/v1/analysis/", json!({ "texts": [RECIPE] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn empty_batch_is_rejected() {
    let app = app();
    let (status, body) = post_json(&app, "/api/v1/analysis", json!({ "texts": [] })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_code"], "VALIDATION_ERROR");
    assert_eq!(body["detail"], "At least one text is required");
}

#[tokio::test]
async fn oversized_batch_is_rejected() {
    let app = app();
    let texts: Vec<&str> = std::iter::repeat(RECIPE).take(11).collect();
    let (status, body) = post_json(&app, "/api/v1/analysis", json!({ "texts": texts })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn invalid_text_is_named_by_index_and_nothing_is_stored() {
    let app = app();
    let (status, body) =
        post_json(&app, "/api/v1/analysis", json!({ "texts": [RECIPE, "   tiny  "] })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["detail"],
        "Text at index 1 must be at least 10 characters long"
    );

    let (_, all) = get(&app, "/api/v1/analysis").await;
    assert!(all.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_body_is_a_validation_error() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/analysis")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"texts\": [unclosed"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation Error");
    assert_eq!(body["error_code"], "VALIDATION_ERROR");

    let (status, _) = post_json(&app, "/api/v1/analysis", json!({ "text": RECIPE })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

// ============================================================
// GET /analysis and /analysis/{id}
// ============================================================

#[tokio::test]
async fn list_is_newest_first() {
    let app = app();
    analyze(&app, &[RECIPE]).await;
    analyze(&app, &[GARDEN]).await;
    analyze(&app, &[SAD]).await;

    for uri in ["/api/v1/analysis", "/api/v1/analysis/"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        let texts: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["original_text"].as_str().unwrap())
            .collect();
        assert_eq!(texts, vec![SAD, GARDEN, RECIPE]);
    }
}

#[tokio::test]
async fn get_by_id_round_trips() {
    let app = app();
    let records = analyze(&app, &[RECIPE]).await;
    let id = records[0]["id"].as_str().unwrap();

    let (status, body) = get(&app, &format!("/api/v1/analysis/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, records[0]);
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let app = app();
    let (status, body) = get(&app, "/api/v1/analysis/6f1c2a9e-3b1d-4c55-9a6e-0d7b2e8f4a11").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["detail"], "Analysis not found");
    assert_eq!(body["error_code"], "ANALYSIS_NOT_FOUND");
}

#[tokio::test]
async fn malformed_id_is_a_validation_error() {
    let app = app();
    let (status, body) = get(&app, "/api/v1/analysis/not-a-uuid").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_code"], "VALIDATION_ERROR");
}

// ============================================================
// GET /search
// ============================================================

#[tokio::test]
async fn search_filters_by_each_field() {
    let app = app();
    analyze(&app, &[RECIPE, GARDEN, SAD]).await;

    let (status, body) = get(&app, "/api/v1/search?topic=gardening").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["original_text"], GARDEN);

    let (_, body) = get(&app, "/api/v1/search?keyword=pasta").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["original_text"], RECIPE);

    let (_, body) = get(&app, "/api/v1/search/?sentiment=negative").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["original_text"], SAD);
}

#[tokio::test]
async fn search_conditions_combine() {
    let app = app();
    analyze(&app, &[RECIPE, GARDEN, SAD]).await;

    let (_, body) = get(&app, "/api/v1/search?topic=cooking&sentiment=positive").await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = get(&app, "/api/v1/search?topic=cooking&sentiment=negative").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn search_without_filters_lists_everything() {
    let app = app();
    analyze(&app, &[RECIPE, GARDEN]).await;

    let (_, body) = get(&app, "/api/v1/search").await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = get(&app, "/api/v1/search?topic=&keyword=").await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_sentiment_matches_nothing() {
    let app = app();
    analyze(&app, &[RECIPE]).await;
    let (status, body) = get(&app, "/api/v1/search?sentiment=Positive").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

// ============================================================
// Cross-cutting
// ============================================================

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let app = app();
    let request = Request::builder()
        .uri("/api/v1/health")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = app();
    let (status, _) = get(&app, "/api/v2/health").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
