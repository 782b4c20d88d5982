use std::fmt;

use crate::http::CheckResult;

/// Single-line indicator shown under the results panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ready,
    Checking(String),
    ConnectionError,
    TimeoutError,
    ErrorOccurred,
}

impl Status {
    /// Status to show once `result` lands. Invalid input leaves the status alone.
    pub fn after(result: &CheckResult) -> Option<Status> {
        match result {
            CheckResult::Success { .. } => Some(Status::Ready),
            CheckResult::ConnectionFailure { .. } => Some(Status::ConnectionError),
            CheckResult::TimeoutFailure { .. } => Some(Status::TimeoutError),
            CheckResult::GenericFailure { .. } => Some(Status::ErrorOccurred),
            CheckResult::ValidationFailure => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ready => f.write_str("Ready"),
            Status::Checking(url) => write!(f, "Checking {}...", url),
            Status::ConnectionError => f.write_str("Connection Error"),
            Status::TimeoutError => f.write_str("Timeout Error"),
            Status::ErrorOccurred => f.write_str("Error Occurred"),
        }
    }
}
