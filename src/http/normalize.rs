//! Turns free-text input into an absolute http(s) URL.
//!
//! Input without a scheme gets `https://` prepended. Input that names any
//! other scheme is rejected instead of being folded into the host name.

use std::fmt;
use url::Url;

use crate::core::ValidationError;

const DEFAULT_SCHEME_PREFIX: &str = "https://";
const SUPPORTED_SCHEMES: [&str; 2] = ["http", "https"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    pub scheme: String,
    /// Host plus `:port` when a non-default port was given.
    pub netloc: String,
    /// The input after the default-scheme prefix, as typed.
    pub full: String,
    url: Url,
}

impl NormalizedUrl {
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

pub fn normalize(raw: &str) -> Result<NormalizedUrl, ValidationError> {
    let full = match explicit_scheme(raw) {
        Some(scheme)
            if SUPPORTED_SCHEMES
                .iter()
                .any(|s| scheme.eq_ignore_ascii_case(s)) =>
        {
            raw.to_string()
        }
        Some(scheme) => return Err(ValidationError::UnsupportedScheme(scheme.to_string())),
        None => format!("{}{}", DEFAULT_SCHEME_PREFIX, raw),
    };

    let url = Url::parse(&full)?;

    let host = match url.host_str() {
        Some(host) if !host.is_empty() => host,
        _ => return Err(ValidationError::MissingHost),
    };
    let netloc = match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    };

    Ok(NormalizedUrl {
        scheme: url.scheme().to_string(),
        netloc,
        full,
        url,
    })
}

/// The text before `://`, if it sits where a scheme would.
fn explicit_scheme(raw: &str) -> Option<&str> {
    let (candidate, _) = raw.split_once("://")?;
    if candidate.contains(['/', '?', '#']) {
        return None;
    }
    Some(candidate)
}
