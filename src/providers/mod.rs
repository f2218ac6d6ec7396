// Provider summary collaborators: the seam between the aggregation engine
// and each platform's reporting surface. The engine only depends on this
// trait; SDK plumbing, credentials and caching live behind it.

mod fixture;

pub use fixture::FixtureClient;

use async_trait::async_trait;

use crate::models::{ProviderKind, ProviderSnapshot};

/// What can go wrong fetching one provider's summary. Every variant is
/// recovered by the orchestrator and becomes a note, never an abort.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider's API refused or failed the request.
    #[error("{0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed summary payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One provider's summary collaborator. Implementations that bundle several
/// sub-resources (compute + storage + ...) must report internal partial
/// failures as null sections plus `errors` entries in the snapshot, and only
/// return `Err` when the fetch as a whole produced nothing usable.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    fn kind(&self) -> ProviderKind;

    async fn fetch_summary(&self) -> Result<ProviderSnapshot, ProviderError>;
}
