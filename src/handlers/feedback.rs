use axum::{extract::State, http::{HeaderMap, StatusCode}};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use super::{guard, invalid};
use crate::config::FEEDBACK_SUBMISSION;
use crate::error::{AppError, AppJson};
use crate::metrics::{REQUEST_LATENCY, REQUEST_TOTAL};
use crate::models::{Feedback, FeedbackRequest};
use crate::state::AppState;
use crate::validation::validate_feedback;

pub async fn feedback_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    AppJson(payload): AppJson<FeedbackRequest>,
) -> Result<StatusCode, AppError> {
    REQUEST_TOTAL.inc();
    let start_time = Instant::now();

    let limiter = state.limiter_for(&headers);
    guard(&limiter, FEEDBACK_SUBMISSION)?;

    let feedback = validate_feedback(payload.feedback.as_deref());
    if !feedback.is_valid {
        return Err(invalid(feedback.error));
    }

    state
        .documents
        .add_feedback(Feedback {
            feedback: feedback.sanitized,
            timestamp: state.now(),
        })
        .await;
    limiter.record_attempt(FEEDBACK_SUBMISSION);

    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());
    info!("Feedback received");

    Ok(StatusCode::CREATED)
}
