//! Google Cloud Storage object listing implementation

use crate::config::ResolverConfig;
use crate::version::error::ResolveError;
use crate::version::registry::ListingSource;
use tracing::{debug, warn};

/// Listing source backed by the GCS JSON API `objects.list` endpoint
pub struct GcsListingSource {
    client: reqwest::Client,
    url: String,
}

impl GcsListingSource {
    /// Creates a new GcsListingSource for the configured bucket and prefix
    pub fn new(config: &ResolverConfig) -> Result<Self, ResolveError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("gl-latest-version/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()
            .map_err(|e| ResolveError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: config.listing_url(),
        })
    }
}

#[async_trait::async_trait]
impl ListingSource for GcsListingSource {
    fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_listing(&self) -> Result<Vec<u8>, ResolveError> {
        debug!("Fetching GCS listing: {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();

        if !status.is_success() {
            warn!("GCS returned status {}: {}", status, self.url);
            return Err(ResolveError::Fetch(format!("HTTP status {}", status)));
        }

        let body = response.bytes().await?;

        debug!("Received {} bytes from GCS", body.len());

        Ok(body.to_vec())
    }
}
