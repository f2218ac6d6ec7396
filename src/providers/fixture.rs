// Filesystem-backed provider client for local development: reads a
// ProviderSnapshot JSON document instead of calling a cloud API. A missing
// or malformed file surfaces as an ordinary provider failure.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::models::{ProviderKind, ProviderSnapshot};

use super::{ProviderClient, ProviderError};

pub struct FixtureClient {
    kind: ProviderKind,
    path: PathBuf,
}

impl FixtureClient {
    pub fn new(kind: ProviderKind, path: impl Into<PathBuf>) -> Self {
        FixtureClient {
            kind,
            path: path.into(),
        }
    }
}

#[async_trait]
impl ProviderClient for FixtureClient {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn fetch_summary(&self) -> Result<ProviderSnapshot, ProviderError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let snapshot: ProviderSnapshot = serde_json::from_str(&raw)?;
        if snapshot.provider != self.kind {
            return Err(ProviderError::Unavailable(format!(
                "fixture {} holds a {} snapshot, expected {}",
                self.path.display(),
                snapshot.provider,
                self.kind
            )));
        }
        Ok(snapshot)
    }
}
