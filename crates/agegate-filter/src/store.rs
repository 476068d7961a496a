//! Metadata store trait definitions

use agegate_model::PackageManifest;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from metadata store lookups
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The registry's storage collaborator, as seen by the filter.
///
/// Implemented by whatever the hosting registry uses to look up package
/// metadata; the filter only ever reads.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Fetch the full metadata document for a package
    async fn get_package(&self, name: &str) -> StoreResult<PackageManifest>;
}
