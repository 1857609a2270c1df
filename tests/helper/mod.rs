//! Shared test utilities

pub mod listing;

pub use listing::{config_for, listing_body, spawn_silent_server};
