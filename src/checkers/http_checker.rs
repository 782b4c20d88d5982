use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::{Client, ClientBuilder};
use std::collections::HashMap;
use std::time::Instant;

use super::Checker;
use crate::core::{CheckerConfig, CheckerResult, FetchError};
use crate::http::{HttpResponse, NormalizedUrl};

const UNKNOWN_REASON: &str = "Unknown";

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        classify(err.is_connect(), err.is_timeout(), err.to_string())
    }
}

/// An expired deadline is a timeout whatever phase it hit, connect included.
fn classify(is_connect: bool, is_timeout: bool, message: String) -> FetchError {
    if is_timeout {
        FetchError::Timeout(message)
    } else if is_connect {
        FetchError::Connect(message)
    } else {
        FetchError::Other(message)
    }
}

/// The phrase from the status line when the server sent a non-canonical one,
/// else the canonical phrase for the code.
fn reason_phrase(response: &reqwest::Response) -> String {
    match response.extensions().get::<ReasonPhrase>() {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or(UNKNOWN_REASON)
            .to_string(),
    }
}

#[derive(Clone)]
pub struct HttpChecker {
    client: Client,
}

impl HttpChecker {
    pub fn new(config: &CheckerConfig) -> CheckerResult<Self> {
        let client = ClientBuilder::new()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client })
    }

    fn extract_headers(response: &reqwest::Response) -> HashMap<String, String> {
        response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|val| (k.to_string(), val.to_string())))
            .collect()
    }
}

#[async_trait]
impl Checker for HttpChecker {
    async fn fetch_single(&self, url: &NormalizedUrl) -> Result<HttpResponse, FetchError> {
        let start_time = Instant::now();
        let response = self.client.get(url.url().clone()).send().await?;
        let elapsed = start_time.elapsed();

        let status = response.status();
        let reason = reason_phrase(&response);
        let final_url = response.url().clone();
        let headers = Self::extract_headers(&response);

        // Drain the body so the timeout covers the whole exchange.
        let body = response.bytes().await?;

        Ok(HttpResponse {
            url: final_url,
            status: status.as_u16(),
            reason,
            headers,
            elapsed,
            content_length: body.len(),
        })
    }

    fn box_clone(&self) -> Box<dyn Checker> {
        Box::new(self.clone())
    }
}
