use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use super::Checker;
use crate::core::FetchError;
use crate::http::{HttpResponse, NormalizedUrl};

#[derive(Clone, Debug)]
pub enum MockOutcome {
    Response {
        status: u16,
        reason: String,
        headers: Vec<(String, String)>,
        elapsed: Duration,
    },
    Failure(FetchError),
}

#[derive(Clone, Debug)]
pub struct MockResponse {
    pub outcome: MockOutcome,
    pub delay: Option<Duration>,
}

impl MockResponse {
    pub fn ok(status: u16, reason: &str) -> Self {
        Self {
            outcome: MockOutcome::Response {
                status,
                reason: reason.to_string(),
                headers: Vec::new(),
                elapsed: Duration::ZERO,
            },
            delay: None,
        }
    }

    pub fn failure(error: FetchError) -> Self {
        Self {
            outcome: MockOutcome::Failure(error),
            delay: None,
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let MockOutcome::Response { headers, .. } = &mut self.outcome {
            headers.push((name.to_ascii_lowercase(), value.to_string()));
        }
        self
    }

    pub fn with_elapsed(mut self, duration: Duration) -> Self {
        if let MockOutcome::Response { elapsed, .. } = &mut self.outcome {
            *elapsed = duration;
        }
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Replays scripted outcomes in order, wrapping around at the end.
/// Clones share the script position and the call counter.
#[derive(Clone)]
pub struct MockChecker {
    responses: Arc<Vec<MockResponse>>,
    current_response: Arc<AtomicUsize>,
}

impl MockChecker {
    pub fn new(responses: Vec<MockResponse>) -> Self {
        assert!(!responses.is_empty(), "MockChecker needs at least one response");
        Self {
            responses: Arc::new(responses),
            current_response: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.current_response.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Checker for MockChecker {
    async fn fetch_single(&self, url: &NormalizedUrl) -> Result<HttpResponse, FetchError> {
        let index = self.current_response.fetch_add(1, Ordering::SeqCst);
        let response = &self.responses[index % self.responses.len()];

        if let Some(delay) = response.delay {
            sleep(delay).await;
        }

        match &response.outcome {
            MockOutcome::Response {
                status,
                reason,
                headers,
                elapsed,
            } => Ok(HttpResponse {
                url: url.url().clone(),
                status: *status,
                reason: reason.clone(),
                headers: headers.iter().cloned().collect::<HashMap<_, _>>(),
                elapsed: *elapsed,
                content_length: 0,
            }),
            MockOutcome::Failure(error) => Err(error.clone()),
        }
    }

    fn box_clone(&self) -> Box<dyn Checker> {
        Box::new(self.clone())
    }
}
