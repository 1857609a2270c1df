use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Failed to fetch versions: {0}")]
    Fetch(String),

    #[error("No versions found in GCS listing.")]
    NoVersionsFound,

    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

impl From<reqwest::Error> for ResolveError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ResolveError::Fetch(format!("timed out: {}", e))
        } else {
            ResolveError::Fetch(e.to_string())
        }
    }
}
