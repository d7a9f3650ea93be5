//! In-process document collections: main test results, feedback, custom
//! tests and their results.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use crate::metrics::DOCUMENTS_WRITTEN;
use crate::models::{CustomTest, CustomTestResult, Feedback, MainTestResult};

pub const TEST_ID_LEN: usize = 20;

// How long a custom test can be taken after creation
pub fn custom_test_lifetime() -> Duration {
    Duration::days(1)
}

#[derive(Debug, Clone, PartialEq)]
pub enum TestLookup {
    Found(CustomTest),
    Expired,
    NotFound,
}

#[derive(Default)]
pub struct Documents {
    main_results: RwLock<Vec<MainTestResult>>,
    feedback: RwLock<Vec<Feedback>>,
    custom_tests: DashMap<String, CustomTest>,
    custom_results: DashMap<String, Vec<CustomTestResult>>,
    next_seq: AtomicU64,
}

// Document id: 20 hex chars of sha256(title + timestamp + sequence)
pub fn make_test_id(title: &str, created_at: DateTime<Utc>, seq: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(created_at.timestamp_micros().to_le_bytes());
    hasher.update(seq.to_le_bytes());
    let mut id = format!("{:x}", hasher.finalize());
    id.truncate(TEST_ID_LEN);
    id
}

impl Documents {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_main_result(&self, result: MainTestResult) {
        self.main_results.write().await.push(result);
        DOCUMENTS_WRITTEN.inc();
    }

    /// Newest first.
    pub async fn main_results(&self) -> Vec<MainTestResult> {
        let mut results = self.main_results.read().await.clone();
        results.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        results
    }

    pub async fn add_feedback(&self, feedback: Feedback) {
        self.feedback.write().await.push(feedback);
        DOCUMENTS_WRITTEN.inc();
    }

    pub fn create_custom_test(
        &self,
        title: String,
        questions: Vec<String>,
        now: DateTime<Utc>,
    ) -> CustomTest {
        let id = loop {
            let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
            let candidate = make_test_id(&title, now, seq);
            if !self.custom_tests.contains_key(&candidate) {
                break candidate;
            }
        };

        let test = CustomTest {
            id: id.clone(),
            title,
            questions,
            created_at: now,
            expires_at: now + custom_test_lifetime(),
        };
        self.custom_tests.insert(id, test.clone());
        DOCUMENTS_WRITTEN.inc();
        test
    }

    pub fn custom_test(&self, id: &str, now: DateTime<Utc>) -> TestLookup {
        match self.custom_tests.get(id) {
            None => TestLookup::NotFound,
            Some(test) if test.expires_at < now => TestLookup::Expired,
            Some(test) => TestLookup::Found(test.clone()),
        }
    }

    pub fn add_custom_result(&self, result: CustomTestResult) {
        self.custom_results
            .entry(result.test_id.clone())
            .or_default()
            .push(result);
        DOCUMENTS_WRITTEN.inc();
    }

    /// Newest first.
    pub fn custom_results(&self, test_id: &str) -> Vec<CustomTestResult> {
        let mut results = self
            .custom_results
            .get(test_id)
            .map(|r| r.value().clone())
            .unwrap_or_default();
        results.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        results
    }
}
