//! HTTP feed, for catalogs served next to a static site.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::error::{CatalogError, Result};
use crate::traits::feed::{parse_feed, ResourceFeed};
use crate::types::resource::Resource;

/// Fetches the resource feed over HTTP.
///
/// A non-success status is a load failure; the body is never parsed.
pub struct HttpFeed {
    url: String,
    client: reqwest::Client,
}

impl HttpFeed {
    /// Create a feed for a URL with a 30s timeout.
    pub fn new(url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Falling back to default HTTP client");
                reqwest::Client::new()
            });

        Self {
            url: url.into(),
            client,
        }
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[async_trait]
impl ResourceFeed for HttpFeed {
    fn name(&self) -> &str {
        &self.url
    }

    async fn load(&self) -> Result<Vec<Resource>> {
        debug!(url = %self.url, "Fetching resource feed");
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            error!(url = %self.url, error = %e, "Resource feed request failed");
            CatalogError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(url = %self.url, status = %status, "Resource feed returned error status");
            return Err(CatalogError::load(&self.url, format!("HTTP {}", status)));
        }

        let body = response.text().await?;
        parse_feed(&body, &self.url).map_err(|e| {
            error!(url = %self.url, error = %e, "Failed to parse resource feed");
            e
        })
    }
}
