use serde::{Deserialize, Serialize};

/// Storage section of a provider summary. "Buckets" covers S3 buckets,
/// Azure storage accounts and GCS buckets alike; size is optional because
/// not every provider reports one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderStorageSnapshot {
    pub buckets: u32,
    #[serde(default)]
    pub size_bytes: Option<u64>,
}

/// Combined storage block. Size stays null until at least one provider
/// reports a size.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StorageTotals {
    pub buckets: u32,
    pub size_bytes: Option<u64>,
}
