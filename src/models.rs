use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Main test submission body
#[derive(Deserialize, Clone, Debug)]
pub struct SubmitResultRequest {
    pub answers: Vec<bool>,
    // raw form text, validated with validate_age
    #[serde(default)]
    pub age: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct FeedbackRequest {
    #[serde(default)]
    pub feedback: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct CreateTestRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub questions: Vec<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SubmitCustomResultRequest {
    pub answers: Vec<bool>,
}

// Stored documents

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MainTestResult {
    pub score: u32,
    pub age: Option<u32>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub feedback: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomTest {
    pub id: String,
    pub title: String,
    pub questions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomTestResult {
    pub test_id: String,
    pub score: u32,
    pub timestamp: DateTime<Utc>,
}

// Responses

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub score: u32,
    /// Attempts left for this action after this one, `None` when unlimited.
    pub remaining_attempts: Option<u32>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestResponse {
    pub id: String,
    pub expires_at: DateTime<Utc>,
}

pub fn score(answers: &[bool]) -> u32 {
    answers.iter().filter(|a| **a).count() as u32
}
