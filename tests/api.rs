use reqwest::StatusCode;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;

use purity_gate::clock::ManualClock;
use purity_gate::config::RateLimitConfig;
use purity_gate::questions::QUESTIONS;
use purity_gate::router;
use purity_gate::state::AppState;
use purity_gate::storage::MemoryStore;

const T0: i64 = 1_700_000_000_000;
const DAY_MS: i64 = 24 * 60 * 60 * 1000;

// Full answer sheet with the first `checked` statements checked
fn answers(checked: usize) -> Value {
    json!((0..QUESTIONS.len()).map(|i| i < checked).collect::<Vec<_>>())
}

struct TestApp {
    base: String,
    clock: Arc<ManualClock>,
    client: reqwest::Client,
}

impl TestApp {
    async fn spawn() -> Self {
        let clock = Arc::new(ManualClock::new(T0));
        let state = Arc::new(AppState::new(
            Arc::new(MemoryStore::new()),
            clock.clone(),
            RateLimitConfig::default(),
        ));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(state)).await.unwrap();
        });
        Self {
            base: format!("http://{addr}"),
            clock,
            client: reqwest::Client::new(),
        }
    }

    async fn post(&self, path: &str, client_id: &str, body: Value) -> (StatusCode, Value) {
        let res = self
            .client
            .post(format!("{}{path}", self.base))
            .header("x-client-id", client_id)
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = res.status();
        let body = res.json::<Value>().await.unwrap_or(Value::Null);
        (status, body)
    }

    async fn get(&self, path: &str, client_id: &str) -> (StatusCode, Value) {
        let res = self
            .client
            .get(format!("{}{path}", self.base))
            .header("x-client-id", client_id)
            .send()
            .await
            .unwrap();
        let status = res.status();
        let body = res.json::<Value>().await.unwrap_or(Value::Null);
        (status, body)
    }
}

#[tokio::test]
async fn one_test_submission_per_minute() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .post("/api/results", "alice", json!({"answers": answers(2), "age": "21"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 2);
    assert_eq!(body["remainingAttempts"], 0);

    let (status, body) = app
        .post("/api/results", "alice", json!({"answers": [true]}))
        .await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["error"], "Please wait 1 minute before trying again.");

    app.clock.advance(30_000);
    let (_, body) = app
        .post("/api/results", "alice", json!({"answers": [true]}))
        .await;
    assert_eq!(body["error"], "Please wait 30 seconds before trying again.");

    // another client has its own window
    let (status, _) = app.post("/api/results", "bob", json!({"answers": answers(0)})).await;
    assert_eq!(status, StatusCode::OK);

    app.clock.advance(30_000);
    let (status, _) = app
        .post("/api/results", "alice", json!({"answers": answers(100)}))
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn results_need_one_answer_per_question() {
    let app = TestApp::spawn().await;

    let (status, questions) = app.get("/api/questions", "q").await;
    assert_eq!(status, StatusCode::OK);
    let questions = questions.as_array().unwrap();
    assert_eq!(questions.len(), 100);
    assert_eq!(questions[0], QUESTIONS[0]);

    let oversized = vec![true; 5000];
    let (status, body) = app
        .post("/api/results", "q", json!({"answers": oversized}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Expected 100 answers, got 5000");

    let (status, _) = app.post("/api/results", "q", json!({"answers": [true]})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // neither rejection used the attempt
    let (status, body) = app.post("/api/results", "q", json!({"answers": answers(100)})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 100);
}

#[tokio::test]
async fn malformed_bodies_get_a_json_error() {
    let app = TestApp::spawn().await;

    let res = app
        .client
        .post(format!("{}/api/results", app.base))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await.unwrap();
    assert!(body["error"].is_string());

    // well-formed JSON with the wrong shape
    let (status, body) = app.post("/api/feedback", "r", json!({"feedback": 42})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let res = app
        .client
        .post(format!("{}/api/custom-tests", app.base))
        .body("title=x")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(res.json::<Value>().await.unwrap()["error"].is_string());
}

#[tokio::test]
async fn rejected_input_does_not_use_an_attempt() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .post("/api/results", "carol", json!({"answers": answers(1), "age": "12"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Age must be between 13 and 120");

    let (status, body) = app
        .post("/api/results", "carol", json!({"answers": answers(1), "age": ""}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 1);
}

#[tokio::test]
async fn feedback_allows_three_per_window() {
    let app = TestApp::spawn().await;

    for _ in 0..3 {
        let (status, _) = app
            .post("/api/feedback", "dave", json!({"feedback": "  more <questions> please "}))
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    let (status, _) = app
        .post("/api/feedback", "dave", json!({"feedback": "again"}))
        .await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);

    let (status, body) = app.post("/api/feedback", "erin", json!({"feedback": "   "})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Feedback cannot be empty");
}

#[tokio::test]
async fn custom_test_lifecycle() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .post(
            "/api/custom-tests",
            "frank",
            json!({"title": " My <Test> ", "questions": ["Q1?", "   ", "Q<2>?"]}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().unwrap().to_string();

    let (status, test) = app.get(&format!("/api/custom-tests/{id}"), "frank").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(test["title"], "My Test");
    assert_eq!(test["questions"], json!(["Q1?", "Q2?"]));

    for answers in [json!([true, true]), json!([true, false]), json!([false, true])] {
        let (status, _) = app
            .post(&format!("/api/custom-tests/{id}/results"), "gina", json!({"answers": answers}))
            .await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, _) = app
        .post(&format!("/api/custom-tests/{id}/results"), "gina", json!({"answers": [true]}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, dist) = app.get(&format!("/api/custom-tests/{id}/results"), "gina").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dist, json!([{"score": 1, "count": 2}, {"score": 2, "count": 1}]));

    app.clock.advance(DAY_MS + 1);
    let (status, _) = app.get(&format!("/api/custom-tests/{id}"), "frank").await;
    assert_eq!(status, StatusCode::GONE);
    let (status, _) = app.get(&format!("/api/custom-tests/{id}/results"), "frank").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn custom_test_ids_and_inputs_are_checked() {
    let app = TestApp::spawn().await;

    let (status, _) = app.get("/api/custom-tests/not%20valid", "h").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = app.get("/api/custom-tests/doesNotExist", "h").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app
        .post("/api/custom-tests", "h", json!({"title": "T", "questions": ["", " "]}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "At least one question is required");

    let (status, body) = app
        .post("/api/custom-tests", "h", json!({"questions": ["q"]}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Title is required");
}

#[tokio::test]
async fn results_summary_reflects_submissions() {
    let app = TestApp::spawn().await;

    let (_, empty) = app.get("/api/results", "x").await;
    assert_eq!(empty, Value::Null);

    app.post("/api/results", "a", json!({"answers": answers(3), "age": "20"}))
        .await;
    app.post("/api/results", "b", json!({"answers": answers(1)})).await;

    let (status, summary) = app.get("/api/results", "x").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["total"], 2);
    assert_eq!(summary["averageScore"], 2.0);
    assert_eq!(summary["highestScore"], 3);
    assert_eq!(summary["lowestScore"], 1);
    assert_eq!(summary["averageAge"], 20.0);
}

#[tokio::test]
async fn rate_limit_status_is_read_only() {
    let app = TestApp::spawn().await;

    let (_, unknown) = app.get("/api/rate-limits/nonexistentAction", "i").await;
    assert_eq!(unknown["isAllowed"], true);
    assert_eq!(unknown["remainingAttempts"], Value::Null);
    assert_eq!(unknown["message"], Value::Null);

    for _ in 0..3 {
        let (_, status) = app.get("/api/rate-limits/testSubmission", "i").await;
        assert_eq!(status["isAllowed"], true);
        assert_eq!(status["remainingAttempts"], 1);
    }

    app.post("/api/results", "i", json!({"answers": answers(0)})).await;
    let (_, blocked) = app.get("/api/rate-limits/testSubmission", "i").await;
    assert_eq!(blocked["isAllowed"], false);
    assert_eq!(blocked["remainingSeconds"], 60);
    assert_eq!(blocked["message"], "Please wait 1 minute before trying again.");
}

#[tokio::test]
async fn health_and_metrics_respond() {
    let app = TestApp::spawn().await;

    let (status, health) = app.get("/health", "m").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");

    app.post("/api/feedback", "m", json!({"feedback": "hi"})).await;
    let text = app
        .client
        .get(format!("{}/metrics", app.base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(text.contains("purity_requests_total"));
}
