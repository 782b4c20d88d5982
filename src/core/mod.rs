mod config;
mod errors;

pub use config::{CheckerConfig, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use errors::{CheckerError, CheckerResult, FetchError, ValidationError};
