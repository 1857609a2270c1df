//! Listing source trait for fetching the raw object listing

#[cfg(test)]
use mockall::automock;

use crate::version::error::ResolveError;

/// Trait for fetching an object listing from remote storage
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ListingSource: Send + Sync {
    /// Returns the URL this source fetches from
    fn url(&self) -> &str;

    /// Fetches the raw listing body
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - Response body, undecoded
    /// * `Err(ResolveError::Fetch)` - On transport failure or non-success status
    async fn fetch_listing(&self) -> Result<Vec<u8>, ResolveError>;
}
