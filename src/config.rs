use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

// =============================================================================
// Listing endpoint defaults
// =============================================================================

/// Default base URL for the Google Cloud Storage JSON API
pub const DEFAULT_BASE_URL: &str = "https://storage.googleapis.com";

/// Bucket holding the GenLayer node release artifacts
pub const DEFAULT_BUCKET: &str = "gh-af";

/// Object prefix under which each release lives as `<prefix>/v<version>/...`
pub const DEFAULT_PREFIX: &str = "genlayer-node/bin/amd64";

/// Timeout for the listing fetch in seconds
pub const FETCH_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Resolver configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    pub base_url: String,
    pub bucket: String,
    pub prefix: String,
    pub timeout_secs: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            bucket: DEFAULT_BUCKET.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            timeout_secs: FETCH_TIMEOUT_SECS,
        }
    }
}

/// Values given on the command line, each replacing the configured one when set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub bucket: Option<String>,
    pub prefix: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ResolverConfig {
    /// Loads a JSON config file. Missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_overrides(self, overrides: ConfigOverrides) -> Self {
        Self {
            base_url: overrides.base_url.unwrap_or(self.base_url),
            bucket: overrides.bucket.unwrap_or(self.bucket),
            prefix: overrides.prefix.unwrap_or(self.prefix),
            timeout_secs: overrides.timeout_secs.unwrap_or(self.timeout_secs),
        }
    }

    /// Returns the object listing URL for the configured bucket and prefix
    pub fn listing_url(&self) -> String {
        format!(
            "{}/storage/v1/b/{}/o?prefix={}",
            self.base_url.trim_end_matches('/'),
            self.bucket,
            self.prefix
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
