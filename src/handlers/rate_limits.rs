use axum::{Json, extract::{Path, State}, http::HeaderMap};
use serde::Serialize;
use std::sync::Arc;

use crate::rate_limit::{RateLimitCheck, get_rate_limit_message};
use crate::state::AppState;

#[derive(Serialize)]
pub struct RateLimitStatus {
    #[serde(flatten)]
    pub check: RateLimitCheck,
    pub message: Option<String>,
}

// Lets the UI disable a button before the user tries; never records
pub async fn rate_limit_status_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(action): Path<String>,
) -> Json<RateLimitStatus> {
    let check = state.limiter_for(&headers).check_rate_limit(&action);
    let message = get_rate_limit_message(&check);
    Json(RateLimitStatus { check, message })
}
