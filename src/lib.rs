pub mod config;
pub mod logging;
pub mod version;

pub use version::error::ResolveError;
pub use version::resolver::VersionResolver;
