use axum::{Json, extract::State, http::HeaderMap};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use super::{guard, invalid, remaining};
use crate::config::TEST_SUBMISSION;
use crate::error::{AppError, AppJson};
use crate::metrics::{REQUEST_LATENCY, REQUEST_TOTAL};
use crate::models::{MainTestResult, SubmitResponse, SubmitResultRequest, score};
use crate::questions::QUESTIONS;
use crate::state::AppState;
use crate::stats::{ScoreSummary, summarize};
use crate::validation::validate_age;

// check limit -> validate -> write -> record
pub async fn submit_result_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    AppJson(payload): AppJson<SubmitResultRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    REQUEST_TOTAL.inc();
    let start_time = Instant::now();

    let limiter = state.limiter_for(&headers);
    guard(&limiter, TEST_SUBMISSION)?;

    if payload.answers.len() != QUESTIONS.len() {
        return Err(invalid(Some(format!(
            "Expected {} answers, got {}",
            QUESTIONS.len(),
            payload.answers.len()
        ))));
    }

    let age = validate_age(payload.age.as_deref());
    if !age.is_valid {
        return Err(invalid(age.error));
    }

    let score = score(&payload.answers);
    state
        .documents
        .add_main_result(MainTestResult {
            score,
            age: age.age,
            timestamp: state.now(),
        })
        .await;
    limiter.record_attempt(TEST_SUBMISSION);
    let after = limiter.check_rate_limit(TEST_SUBMISSION);

    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());
    info!("Recorded main test result (score {score})");

    Ok(Json(SubmitResponse {
        score,
        remaining_attempts: remaining(&after),
    }))
}

// null until someone has submitted
pub async fn results_summary_handler(
    State(state): State<Arc<AppState>>,
) -> Json<Option<ScoreSummary>> {
    let results = state.documents.main_results().await;
    Json(summarize(&results))
}

pub async fn questions_handler() -> Json<&'static [&'static str]> {
    Json(&QUESTIONS[..])
}
