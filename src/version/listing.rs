//! Extraction of object names and version strings from a GCS listing body

use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

/// Response from the GCS `objects.list` endpoint
#[derive(Debug, Deserialize)]
struct ObjectListing {
    #[serde(default)]
    items: Vec<StoredObject>,
}

#[derive(Debug, Deserialize)]
struct StoredObject {
    name: Option<String>,
}

/// Pulls `v<version>` path segments out of a bucket listing
pub struct ListingExtractor {
    /// Regex for a `"name": "<value>"` pair anywhere in the body
    name_re: Regex,
    /// Regex for a `/v<version>/` path segment
    version_re: Regex,
}

impl ListingExtractor {
    pub fn new() -> Self {
        Self {
            name_re: Regex::new(r#""name":\s*"([^"]+)""#).unwrap(),
            version_re: Regex::new(r"/(v[^/]+)/").unwrap(),
        }
    }

    /// Returns the object names in the listing
    ///
    /// The body is parsed as a listing document first. If it is not one,
    /// every `"name": "..."` pair in the raw text is used instead.
    pub fn object_names(&self, body: &str) -> Vec<String> {
        match serde_json::from_str::<ObjectListing>(body) {
            Ok(listing) => listing
                .items
                .into_iter()
                .filter_map(|object| object.name)
                .collect(),
            Err(e) => {
                warn!("Listing is not a valid GCS response ({}), scanning text for names", e);
                self.name_re
                    .captures_iter(body)
                    .map(|caps| caps[1].to_string())
                    .collect()
            }
        }
    }

    /// Returns the first `/v.../` segment of an object name, without the slashes
    pub fn version_of(&self, name: &str) -> Option<String> {
        self.version_re
            .captures(name)
            .map(|caps| caps[1].to_string())
    }

    /// Returns one version string per object name that carries one, in listing order
    pub fn versions(&self, body: &str) -> Vec<String> {
        let names = self.object_names(body);
        let versions: Vec<String> = names
            .iter()
            .filter_map(|name| self.version_of(name))
            .collect();

        debug!(
            "Extracted {} versions from {} object names",
            versions.len(),
            names.len()
        );

        versions
    }
}

impl Default for ListingExtractor {
    fn default() -> Self {
        Self::new()
    }
}
