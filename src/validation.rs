//! Input checks run before anything is persisted.
//!
//! Every function here is pure and total: bad input comes back as a result
//! value with `is_valid == false`, never as a panic or an `Err`.
//!
//! Sanitization only strips `<` and `>`. That is not a complete defense
//! against markup injection; output must still be encoded where it is
//! rendered.

use serde::Serialize;

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_QUESTION_LEN: usize = 500;
pub const MAX_FEEDBACK_LEN: usize = 5000;
pub const MAX_TEST_ID_LEN: usize = 50;
pub const MIN_AGE: i64 = 13;
pub const MAX_AGE: i64 = 120;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub sanitized: String,
    pub error: Option<String>,
}

impl ValidationResult {
    fn invalid(error: String) -> Self {
        Self {
            is_valid: false,
            sanitized: String::new(),
            error: Some(error),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TestIdValidation {
    pub is_valid: bool,
    pub error: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AgeValidation {
    pub is_valid: bool,
    pub age: Option<u32>,
    pub error: Option<String>,
}

pub fn validate_title(title: Option<&str>) -> ValidationResult {
    validate_text(title, "Title", MAX_TITLE_LEN)
}

pub fn validate_question(question: Option<&str>) -> ValidationResult {
    validate_text(question, "Question", MAX_QUESTION_LEN)
}

pub fn validate_feedback(feedback: Option<&str>) -> ValidationResult {
    validate_text(feedback, "Feedback", MAX_FEEDBACK_LEN)
}

// Lengths are counted in chars of the trimmed text
fn validate_text(input: Option<&str>, label: &str, max_len: usize) -> ValidationResult {
    let Some(input) = input.filter(|s| !s.is_empty()) else {
        return ValidationResult::invalid(format!("{label} is required"));
    };

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ValidationResult::invalid(format!("{label} cannot be empty"));
    }
    if trimmed.chars().count() > max_len {
        return ValidationResult::invalid(format!(
            "{label} must be {max_len} characters or less"
        ));
    }

    ValidationResult {
        is_valid: true,
        sanitized: trimmed.chars().filter(|c| !matches!(c, '<' | '>')).collect(),
        error: None,
    }
}

/// Identifiers are rejected outright, never cleaned up.
pub fn validate_test_id(test_id: Option<&str>) -> TestIdValidation {
    let invalid = |error: &str| TestIdValidation {
        is_valid: false,
        error: Some(error.to_string()),
    };

    let Some(test_id) = test_id.filter(|s| !s.is_empty()) else {
        return invalid("Invalid test ID");
    };

    let trimmed = test_id.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_TEST_ID_LEN {
        return invalid("Invalid test ID format");
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return invalid("Invalid test ID format");
    }

    TestIdValidation {
        is_valid: true,
        error: None,
    }
}

/// Age is optional: blank input is valid with no age.
pub fn validate_age(age: Option<&str>) -> AgeValidation {
    let invalid = |error: &str| AgeValidation {
        is_valid: false,
        age: None,
        error: Some(error.to_string()),
    };

    let Some(age) = age.filter(|s| !s.trim().is_empty()) else {
        return AgeValidation {
            is_valid: true,
            age: None,
            error: None,
        };
    };

    let Some(value) = parse_leading_int(age) else {
        return invalid("Age must be a valid number");
    };
    if !(MIN_AGE..=MAX_AGE).contains(&value) {
        return invalid("Age must be between 13 and 120");
    }

    AgeValidation {
        is_valid: true,
        // range-checked above
        age: u32::try_from(value).ok(),
        error: None,
    }
}

/// Leading integer of `text`: optional whitespace, optional sign, then
/// digits up to the first non-digit. `"25 years"` is 25, `"1.9"` is 1.
/// Overlong digit runs saturate instead of failing.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}
