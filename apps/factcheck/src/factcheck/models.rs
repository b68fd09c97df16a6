use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for `POST /api/v1/fact-check` and the HTML form.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub claim: String,
}

impl CheckRequest {
    /// A claim is checkable when it has at least one non-whitespace character.
    pub fn is_blank(&self) -> bool {
        self.claim.trim().is_empty()
    }
}

/// Outcome of one invocation. Exactly one side is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckResult {
    /// Model output, verbatim and unparsed.
    Completed { text: String },
    /// The remote call failed; `message` is the underlying error text.
    Failed { service: String, message: String },
}

impl CheckResult {
    pub fn is_failed(&self) -> bool {
        matches!(self, CheckResult::Failed { .. })
    }
}

/// Collapses the result into the single text shown to the user.
impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckResult::Completed { text } => f.write_str(text),
            CheckResult::Failed { service, message } => {
                write!(f, "Error connecting to {service}: {message}")
            }
        }
    }
}

/// JSON response for a fact-check invocation.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    pub check_id: Uuid,
    pub checked_at: DateTime<Utc>,
    pub model: String,
    #[serde(flatten)]
    pub result: CheckResult,
    pub display_text: String,
}

impl CheckResponse {
    pub fn new(check_id: Uuid, model: &str, result: CheckResult) -> Self {
        Self {
            check_id,
            checked_at: Utc::now(),
            model: model.to_string(),
            display_text: result.to_string(),
            result,
        }
    }
}
