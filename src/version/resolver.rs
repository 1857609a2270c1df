//! Latest version resolution over a bucket listing
//!
//! Fetches the listing once, extracts `v<version>` path segments from the
//! object names, deduplicates them and orders them by [`VersionKey`].

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::version::error::ResolveError;
use crate::version::key::VersionKey;
use crate::version::listing::ListingExtractor;
use crate::version::registry::ListingSource;

pub struct VersionResolver {
    source: Arc<dyn ListingSource>,
    extractor: ListingExtractor,
}

impl VersionResolver {
    pub fn new(source: Arc<dyn ListingSource>) -> Self {
        Self {
            source,
            extractor: ListingExtractor::new(),
        }
    }

    /// Returns the highest version in the listing
    ///
    /// # Returns
    /// * `Ok(String)` - The version as it appears in the object path, e.g. `v0.3.10`
    /// * `Err(ResolveError::Fetch)` - If the listing could not be fetched
    /// * `Err(ResolveError::NoVersionsFound)` - If no object name carries a version
    pub async fn resolve(&self) -> Result<String, ResolveError> {
        let latest = self
            .resolve_all()
            .await?
            .into_iter()
            .next()
            .ok_or(ResolveError::NoVersionsFound)?;

        info!("Resolved latest version {}", latest);
        Ok(latest)
    }

    /// Returns every distinct version in the listing, highest first
    pub async fn resolve_all(&self) -> Result<Vec<String>, ResolveError> {
        let body = self.source.fetch_listing().await?;
        let text = String::from_utf8_lossy(&body);

        let candidates = self.extractor.versions(&text);
        if candidates.is_empty() {
            return Err(ResolveError::NoVersionsFound);
        }

        let sorted = sort_descending(candidates);
        debug!("Distinct versions: {:?}", sorted);

        Ok(sorted)
    }
}

/// Deduplicate versions and sort them from highest to lowest
///
/// Versions with equal keys (e.g. `v1.07` and `v1.7`) are ordered by their
/// raw string so the result does not depend on input order.
pub fn sort_descending(versions: impl IntoIterator<Item = String>) -> Vec<String> {
    let unique: BTreeSet<String> = versions.into_iter().collect();

    let mut keyed: Vec<(VersionKey, String)> = unique
        .into_iter()
        .map(|v| (VersionKey::parse(&v), v))
        .collect();

    keyed.sort_by(|a, b| b.cmp(a));

    keyed.into_iter().map(|(_, v)| v).collect()
}
