use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

pub type CheckerResult<T> = Result<T, CheckerError>;

/// Why raw input could not be turned into a checkable URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Missing network location")]
    MissingHost,
}

/// Transport-level outcome of a failed exchange, as reported by a checker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("timed out: {0}")]
    Timeout(String),

    #[error("{0}")]
    Other(String),
}
