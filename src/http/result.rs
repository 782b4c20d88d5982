use chrono::{DateTime, Local};

use super::HttpResponse;
use crate::core::FetchError;

/// Placeholder shown for a header the server did not send.
pub const MISSING_HEADER: &str = "N/A";

/// Outcome of one check. Built once, then only read.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckResult {
    Success {
        target: String,
        status_code: u16,
        reason: String,
        elapsed_seconds: f64,
        server_header: String,
        content_type_header: String,
        timestamp: DateTime<Local>,
    },
    ConnectionFailure {
        target: String,
    },
    TimeoutFailure {
        target: String,
    },
    GenericFailure {
        target: String,
        message: String,
    },
    ValidationFailure,
}

impl CheckResult {
    pub fn from_response(target: &str, response: &HttpResponse, timestamp: DateTime<Local>) -> Self {
        CheckResult::Success {
            target: target.to_string(),
            status_code: response.status,
            reason: response.reason.clone(),
            elapsed_seconds: response.elapsed.as_secs_f64(),
            server_header: response
                .header("server")
                .unwrap_or(MISSING_HEADER)
                .to_string(),
            content_type_header: response
                .header("content-type")
                .unwrap_or(MISSING_HEADER)
                .to_string(),
            timestamp,
        }
    }

    pub fn from_fetch_error(target: &str, error: FetchError) -> Self {
        let target = target.to_string();
        match error {
            FetchError::Connect(_) => CheckResult::ConnectionFailure { target },
            FetchError::Timeout(_) => CheckResult::TimeoutFailure { target },
            FetchError::Other(message) => CheckResult::GenericFailure { target, message },
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            CheckResult::Success { target, .. }
            | CheckResult::ConnectionFailure { target }
            | CheckResult::TimeoutFailure { target }
            | CheckResult::GenericFailure { target, .. } => Some(target),
            CheckResult::ValidationFailure => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CheckResult::Success { .. })
    }
}
