//! Purity test quiz service.
//!
//! Write actions go through the same gate: check the caller's rate limit,
//! validate the input, write the document, then record the attempt.
//! The rate limiter ([`rate_limit`]) and the validators ([`validation`]) are
//! usable on their own; the rest hosts them behind an axum router.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

pub mod clock;
pub mod config;
pub mod documents;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod questions;
pub mod rate_limit;
pub mod state;
pub mod stats;
pub mod storage;
pub mod validation;

use handlers::{
    create_test_handler, custom_results_handler, feedback_handler, get_test_handler,
    health_handler, metrics_handler, questions_handler, rate_limit_status_handler,
    results_summary_handler, submit_custom_result_handler, submit_result_handler,
};
use state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/api/questions", get(questions_handler))
        .route(
            "/api/results",
            get(results_summary_handler).post(submit_result_handler),
        )
        .route("/api/feedback", post(feedback_handler))
        .route("/api/custom-tests", post(create_test_handler))
        .route("/api/custom-tests/{id}", get(get_test_handler))
        .route(
            "/api/custom-tests/{id}/results",
            get(custom_results_handler).post(submit_custom_result_handler),
        )
        .route("/api/rate-limits/{action}", get(rate_limit_status_handler))
        .with_state(state)
}
