mod feedback;
mod health;
mod metrics;
mod rate_limits;
mod results;

pub use custom_tests::{
    create_test_handler, custom_results_handler, get_test_handler, submit_custom_result_handler,
};
pub use feedback::feedback_handler;
pub use health::health_handler;
pub use metrics::metrics_handler;
pub use rate_limits::rate_limit_status_handler;
pub use results::{questions_handler, results_summary_handler, submit_result_handler};

use tracing::info;

use crate::error::AppError;
use crate::metrics::{RATE_LIMITED, VALIDATION_FAILURES};
use crate::rate_limit::{RateLimitCheck, RateLimiter, RemainingAttempts, get_rate_limit_message};

// Refuse the request when the client is over its limit for `action`
fn guard(limiter: &RateLimiter, action: &str) -> Result<(), AppError> {
    let check = limiter.check_rate_limit(action);
    if let Some(message) = get_rate_limit_message(&check) {
        RATE_LIMITED.inc();
        info!("Rate limited {action} for {}", limiter.storage_key());
        return Err(AppError::RateLimited(message));
    }
    Ok(())
}

fn invalid(error: Option<String>) -> AppError {
    VALIDATION_FAILURES.inc();
    AppError::Invalid(error.unwrap_or_else(|| "Invalid input".to_string()))
}

fn remaining(check: &RateLimitCheck) -> Option<u32> {
    match check.remaining_attempts {
        RemainingAttempts::Limited(n) => Some(n),
        RemainingAttempts::Unlimited => None,
    }
}
