//! Listing source implementations

pub mod gcs;

pub use gcs::GcsListingSource;
