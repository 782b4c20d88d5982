use async_trait::async_trait;
use chrono::Local;
use log::{debug, info, warn};

use crate::core::FetchError;
use crate::http::{CheckResult, HttpResponse, NormalizedUrl};

#[async_trait]
pub trait Checker: Send + Sync {
    /// Performs exactly one GET exchange against `url`.
    async fn fetch_single(&self, url: &NormalizedUrl) -> Result<HttpResponse, FetchError>;
    fn box_clone(&self) -> Box<dyn Checker>;

    /// Runs one check and classifies its outcome. Never retries.
    async fn run_check(&self, url: &NormalizedUrl) -> CheckResult {
        info!("Checking URL: {}", url);

        match self.fetch_single(url).await {
            Ok(response) => {
                debug!(
                    "Received response: status={}, elapsed={:?}, body_length={}",
                    response.status, response.elapsed, response.content_length
                );
                info!(
                    "Check completed for URL: {} (status={})",
                    url, response.status
                );
                CheckResult::from_response(&url.full, &response, Local::now())
            }
            Err(error) => {
                warn!("Check failed for URL: {} ({})", url, error);
                CheckResult::from_fetch_error(&url.full, error)
            }
        }
    }
}
