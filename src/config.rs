use clap::Parser;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const TEST_SUBMISSION: &str = "testSubmission";
pub const FEEDBACK_SUBMISSION: &str = "feedbackSubmission";
pub const CUSTOM_TEST_CREATION: &str = "customTestCreation";

const DEFAULT_WINDOW_MS: i64 = 60 * 1000;
pub const MAX_WINDOW_MS: i64 = 365 * 24 * 60 * 60 * 1000;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "purity-gate")]
#[command(about = "Purity test quiz service with client-side style rate limiting")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    // Directory for persisted rate-limit state (in memory when omitted)
    #[arg(long)]
    pub state_dir: Option<PathBuf>,

    // JSON file replacing the default rate-limit table
    // Example: {"testSubmission": {"maxAttempts": 1, "windowMs": 60000}}
    #[arg(long)]
    pub rate_limits: Option<PathBuf>,

    // Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed rate-limit config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Action `{action}`: maxAttempts must be at least 1")]
    ZeroAttempts { action: String },

    #[error("Action `{action}`: windowMs must be positive")]
    EmptyWindow { action: String },

    #[error("Action `{action}`: windowMs must be at most {max_ms}")]
    WindowTooLong { action: String, max_ms: i64 },
}

/// Limit for one action type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitRule {
    /// Entry key inside the persisted mapping.
    pub key: String,
    pub max_attempts: u32,
    pub window_ms: i64,
}

// Shape of one entry in the JSON config object
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RuleSpec {
    max_attempts: u32,
    window_ms: i64,
    #[serde(default)]
    key: Option<String>,
}

/// Immutable action-type -> rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitConfig {
    rules: BTreeMap<String, RateLimitRule>,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        let rules = [
            (TEST_SUBMISSION, 1),
            (FEEDBACK_SUBMISSION, 3),
            (CUSTOM_TEST_CREATION, 5),
        ]
        .into_iter()
        .map(|(action, max_attempts)| {
            (
                action.to_string(),
                RateLimitRule {
                    key: snake_case(action),
                    max_attempts,
                    window_ms: DEFAULT_WINDOW_MS,
                },
            )
        })
        .collect();
        Self { rules }
    }
}

impl RateLimitConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let specs: BTreeMap<String, RuleSpec> = serde_json::from_str(text)?;
        let mut rules = BTreeMap::new();

        for (action, spec) in specs {
            if spec.max_attempts == 0 {
                return Err(ConfigError::ZeroAttempts { action });
            }
            if spec.window_ms <= 0 {
                return Err(ConfigError::EmptyWindow { action });
            }
            if spec.window_ms > MAX_WINDOW_MS {
                return Err(ConfigError::WindowTooLong {
                    action,
                    max_ms: MAX_WINDOW_MS,
                });
            }
            let key = spec.key.unwrap_or_else(|| snake_case(&action));
            rules.insert(
                action,
                RateLimitRule {
                    key,
                    max_attempts: spec.max_attempts,
                    window_ms: spec.window_ms,
                },
            );
        }

        Ok(Self { rules })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn rule(&self, action_type: &str) -> Option<&RateLimitRule> {
        self.rules.get(action_type)
    }

    pub fn actions(&self) -> impl Iterator<Item = (&str, &RateLimitRule)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }
}

// "customTestCreation" -> "custom_test_creation"
fn snake_case(action: &str) -> String {
    let mut out = String::with_capacity(action.len() + 4);
    for c in action.chars() {
        if c.is_ascii_uppercase() {
            if !out.is_empty() {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
