use super::normalize::{normalize, NormalizedUrl};
use crate::core::ValidationError;

/// One user submission, taken verbatim from the input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    raw_input: String,
}

impl CheckRequest {
    pub fn new(raw_input: impl Into<String>) -> Self {
        Self {
            raw_input: raw_input.into(),
        }
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn normalize(self) -> Result<NormalizedUrl, ValidationError> {
        normalize(&self.raw_input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_request() {
        let request = CheckRequest::new("example.com:8443");
        assert_eq!(request.raw_input(), "example.com:8443");

        let url = request.normalize().unwrap();
        assert_eq!(url.netloc, "example.com:8443");
        assert_eq!(url.full, "https://example.com:8443");
    }

    #[test]
    fn test_invalid_request() {
        assert!(CheckRequest::new("").normalize().is_err());
    }
}
