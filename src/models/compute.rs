use serde::{Deserialize, Serialize};

/// Instance counts by lifecycle state, for one provider or combined.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComputeTotals {
    pub total: u32,
    pub running: u32,
    pub stopped: u32,
    pub terminated: u32,
}

impl ComputeTotals {
    /// Field-wise accumulation; used when folding providers into the
    /// combined block.
    pub fn accumulate(&mut self, other: &ComputeTotals) {
        self.total += other.total;
        self.running += other.running;
        self.stopped += other.stopped;
        self.terminated += other.terminated;
    }
}

/// Compute section of a provider summary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderComputeSnapshot {
    pub totals: ComputeTotals,
}
