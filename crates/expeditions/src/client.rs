//! HTTP client for the Launch Library 2 API.

use crate::error::ExpeditionError;
use crate::records::{Expedition, ExpeditionPage};

/// Production base URL of the upstream API.
pub const DEFAULT_BASE_URL: &str = "https://ll.thespacedevs.com";

const EXPEDITIONS_PATH: &str = "/2.3.0/expeditions/?is_active=true&mode=detailed";

/// Thin supplier of the nested expedition shape.
///
/// Fetching is the only side effect here; reshaping lives in
/// [`crate::assignments`] so it stays pure and testable offline.
#[derive(Debug, Clone)]
pub struct ExpeditionClient {
    http: reqwest::Client,
    base_url: String,
}

impl ExpeditionClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different host (tests, staging mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch the current page of active expeditions, detailed mode.
    pub async fn active_expeditions(&self) -> Result<Vec<Expedition>, ExpeditionError> {
        let url = format!("{}{}", self.base_url, EXPEDITIONS_PATH);
        let page: ExpeditionPage = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::debug!(
            total = page.count,
            fetched = page.results.len(),
            "fetched active expeditions"
        );
        Ok(page.results)
    }
}

impl Default for ExpeditionClient {
    fn default() -> Self {
        Self::new()
    }
}
