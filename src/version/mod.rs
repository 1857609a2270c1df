//! Version resolution layer
//!
//! Fetches a bucket listing and picks the highest `v<version>` release in it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ListingSource│────▶│  Extractor  │────▶│  Resolver   │
//! │  (fetch)    │     │ (names, v*) │     │(dedup, max) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       │
//!        ▼                                       ▼
//! ┌─────────────┐                         ┌─────────────┐
//! │ Registries  │                         │ VersionKey  │
//! │   (gcs)     │                         │ (ordering)  │
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: `ListingSource` trait for fetching the raw listing
//! - [`registries`]: Concrete listing sources (GCS)
//! - [`listing`]: Object name and version segment extraction
//! - [`key`]: Tokenized version ordering
//! - [`resolver`]: Dedup, ordering and selection
//! - [`error`]: Error types for resolution

pub mod error;
pub mod key;
pub mod listing;
pub mod registries;
pub mod registry;
pub mod resolver;
