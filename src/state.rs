use axum::http::HeaderMap;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::clock::Clock;
use crate::config::RateLimitConfig;
use crate::documents::Documents;
use crate::rate_limit::RateLimiter;
use crate::storage::KeyValueStore;

pub const CLIENT_ID_HEADER: &str = "x-client-id";
const ANONYMOUS_CLIENT: &str = "anonymous";

// app's shared state

pub struct AppState {
    pub clock: Arc<dyn Clock>,
    pub rate_limiter: RateLimiter, // unscoped; narrowed per client
    pub documents: Documents,
}

impl AppState {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        config: RateLimitConfig,
    ) -> Self {
        Self {
            rate_limiter: RateLimiter::new(store, clock.clone(), Arc::new(config)),
            clock,
            documents: Documents::new(),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.clock.now_ms()).unwrap_or_else(Utc::now)
    }

    /// Limiter scoped to the calling client, taken from `x-client-id`.
    pub fn limiter_for(&self, headers: &HeaderMap) -> RateLimiter {
        let client = headers
            .get(CLIENT_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(ANONYMOUS_CLIENT);
        self.rate_limiter.for_client(client)
    }
}
