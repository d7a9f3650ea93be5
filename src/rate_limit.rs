//! Per-action fixed-window attempt counter.
//!
//! All entries for one client live in a single JSON blob under one storage
//! key. Every read drops expired entries first (lazy expiry), so there is no
//! background sweeper. Storage failures of any kind are logged and treated as
//! an empty mapping: the limiter fails open. It is a UX throttle, anyone can
//! reset it by clearing their state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::clock::Clock;
use crate::config::RateLimitConfig;
use crate::metrics::STORAGE_FAILURES;
use crate::storage::KeyValueStore;

pub const RATE_LIMIT_STORAGE_KEY: &str = "queens_purity_rate_limits";

const SCHEMA_VERSION: u32 = 1;

// Rate limit entry - attempts inside the current window
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitEntry {
    pub attempts: u32,
    pub expires_at: i64,
}

// What actually lands in storage
#[derive(Serialize, Deserialize, Debug)]
struct PersistedLimits {
    version: u32,
    entries: BTreeMap<String, RateLimitEntry>,
}

/// Attempts left in the window. `Unlimited` is reported for action types
/// that have no configured rule and serializes as `null`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(untagged)]
pub enum RemainingAttempts {
    Limited(u32),
    Unlimited,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitCheck {
    pub is_allowed: bool,
    pub remaining_attempts: RemainingAttempts,
    /// Epoch ms when the window ends. Advisory when no window is open yet.
    pub reset_time: Option<i64>,
    /// Only set when the action is blocked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_seconds: Option<u64>,
}

#[derive(Clone)]
pub struct RateLimiter {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    config: Arc<RateLimitConfig>,
    storage_key: String,
}

impl RateLimiter {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        config: Arc<RateLimitConfig>,
    ) -> Self {
        Self {
            store,
            clock,
            config,
            storage_key: RATE_LIMIT_STORAGE_KEY.to_string(),
        }
    }

    /// Same store, clock and rules, but state kept under a key of its own.
    pub fn for_client(&self, client_id: &str) -> Self {
        Self {
            storage_key: format!("{RATE_LIMIT_STORAGE_KEY}/{client_id}"),
            ..self.clone()
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Whether `action_type` may run now. Never records an attempt; a blob
    /// whose entries have all expired is deleted.
    ///
    /// For an open window with room left, `remaining_attempts` already
    /// subtracts the attempt about to be made.
    pub fn check_rate_limit(&self, action_type: &str) -> RateLimitCheck {
        let Some(rule) = self.config.rule(action_type) else {
            warn!("Unknown rate limit action type: {action_type}");
            return RateLimitCheck {
                is_allowed: true,
                remaining_attempts: RemainingAttempts::Unlimited,
                reset_time: None,
                remaining_seconds: None,
            };
        };

        let now = self.clock.now_ms();
        let entries = self.load(now);

        match entries.get(&rule.key) {
            // no live window: advisory reset, the real one starts on record
            None => RateLimitCheck {
                is_allowed: true,
                remaining_attempts: RemainingAttempts::Limited(rule.max_attempts),
                reset_time: Some(now.saturating_add(rule.window_ms)),
                remaining_seconds: None,
            },
            Some(entry) if entry.attempts >= rule.max_attempts => {
                let remaining_ms = entry.expires_at.saturating_sub(now);
                RateLimitCheck {
                    is_allowed: false,
                    remaining_attempts: RemainingAttempts::Limited(0),
                    reset_time: Some(entry.expires_at),
                    remaining_seconds: Some(ceil_seconds(remaining_ms)),
                }
            }
            Some(entry) => RateLimitCheck {
                is_allowed: true,
                remaining_attempts: RemainingAttempts::Limited(
                    rule.max_attempts - entry.attempts - 1,
                ),
                reset_time: Some(entry.expires_at),
                remaining_seconds: None,
            },
        }
    }

    /// Count one attempt. Opens a new window when none is live; an open
    /// window keeps its original expiry.
    pub fn record_attempt(&self, action_type: &str) {
        let Some(rule) = self.config.rule(action_type) else {
            return;
        };

        let now = self.clock.now_ms();
        let mut entries = self.load(now);

        entries
            .entry(rule.key.clone())
            .and_modify(|entry| entry.attempts += 1)
            .or_insert(RateLimitEntry {
                attempts: 1,
                expires_at: now.saturating_add(rule.window_ms),
            });

        self.save(entries);
    }

    // Read + lazy expiry. Anything that goes wrong reads as "no entries".
    fn load(&self, now: i64) -> BTreeMap<String, RateLimitEntry> {
        let text = match self.store.get(&self.storage_key) {
            Ok(Some(text)) => text,
            Ok(None) => return BTreeMap::new(),
            Err(e) => {
                STORAGE_FAILURES.inc();
                error!("Error reading rate limit data: {e}");
                return BTreeMap::new();
            }
        };

        let persisted: PersistedLimits = match serde_json::from_str(&text) {
            Ok(persisted) => persisted,
            Err(e) => {
                STORAGE_FAILURES.inc();
                error!("Error decoding rate limit data: {e}");
                return BTreeMap::new();
            }
        };

        if persisted.version != SCHEMA_VERSION {
            warn!(
                "Ignoring rate limit data with schema version {} (expected {SCHEMA_VERSION})",
                persisted.version
            );
            return BTreeMap::new();
        }

        let live = cleanup_expired(persisted.entries, now);
        if live.is_empty() {
            self.forget();
        }
        live
    }

    // Nothing live is left, drop the key instead of keeping an empty blob
    fn forget(&self) {
        match self.store.remove(&self.storage_key) {
            Ok(()) => debug!("Removed expired rate limit data under {}", self.storage_key),
            Err(e) => {
                STORAGE_FAILURES.inc();
                error!("Error removing rate limit data: {e}");
            }
        }
    }

    fn save(&self, entries: BTreeMap<String, RateLimitEntry>) {
        let persisted = PersistedLimits {
            version: SCHEMA_VERSION,
            entries,
        };
        let text = match serde_json::to_string(&persisted) {
            Ok(text) => text,
            Err(e) => {
                STORAGE_FAILURES.inc();
                error!("Error encoding rate limit data: {e}");
                return;
            }
        };
        if let Err(e) = self.store.set(&self.storage_key, &text) {
            STORAGE_FAILURES.inc();
            error!("Error saving rate limit data: {e}");
            return;
        }
        debug!("Saved rate limit data under {}", self.storage_key);
    }
}

fn cleanup_expired(
    entries: BTreeMap<String, RateLimitEntry>,
    now: i64,
) -> BTreeMap<String, RateLimitEntry> {
    entries
        .into_iter()
        .filter(|(_, entry)| entry.expires_at > now)
        .collect()
}

fn ceil_seconds(ms: i64) -> u64 {
    let ms = ms.max(0) as u64;
    ms.div_ceil(1000)
}

/// Human-readable wait message, `None` when the action is allowed.
pub fn get_rate_limit_message(result: &RateLimitCheck) -> Option<String> {
    if result.is_allowed {
        return None;
    }

    let seconds = result.remaining_seconds.unwrap_or(0);
    if seconds < 60 {
        let plural = if seconds == 1 { "" } else { "s" };
        return Some(format!(
            "Please wait {seconds} second{plural} before trying again."
        ));
    }

    let minutes = seconds.div_ceil(60);
    let plural = if minutes == 1 { "" } else { "s" };
    Some(format!(
        "Please wait {minutes} minute{plural} before trying again."
    ))
}
