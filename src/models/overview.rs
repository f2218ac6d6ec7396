// The operator-facing aggregate: one fresh snapshot per call, never persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ComputeTotals, ProviderKind, ProviderStorageSnapshot, Severity, StorageTotals};

/// One calendar day on the merged timeline. Sparse: a day carries only the
/// providers that reported an amount for it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    pub day: NaiveDate,
    #[serde(default)]
    pub aws: Option<f64>,
    #[serde(default)]
    pub azure: Option<f64>,
    #[serde(default)]
    pub gcp: Option<f64>,
}

impl TimelinePoint {
    pub fn new(day: NaiveDate) -> Self {
        TimelinePoint {
            day,
            aws: None,
            azure: None,
            gcp: None,
        }
    }
}

/// Normalized cost figures for one provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostTotal {
    pub amount: f64,
    pub currency: String,
    pub change_percent: Option<f64>,
    pub synthetic: bool,
}

/// Sum over the providers whose fetch succeeded. `change_percent` is always
/// null: per-provider deltas are not blendable without a weighting policy,
/// so no combined number is reported.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CombinedCost {
    pub amount: f64,
    pub currency: String,
    pub change_percent: Option<f64>,
}

/// Per-provider cost slots plus the combined figure. A provider whose fetch
/// failed (or that reported no cost section) has a null slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostOverview {
    pub aws: Option<CostTotal>,
    pub azure: Option<CostTotal>,
    pub gcp: Option<CostTotal>,
    pub combined: CombinedCost,
}

impl CostOverview {
    pub fn slot(&self, kind: ProviderKind) -> Option<&CostTotal> {
        match kind {
            ProviderKind::Aws => self.aws.as_ref(),
            ProviderKind::Azure => self.azure.as_ref(),
            ProviderKind::Gcp => self.gcp.as_ref(),
        }
    }
}

/// Per-provider compute slots plus field-wise combined counts. The combined
/// block is always present; an absent provider contributes zero to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComputeOverview {
    pub aws: Option<ComputeTotals>,
    pub azure: Option<ComputeTotals>,
    pub gcp: Option<ComputeTotals>,
    pub combined: ComputeTotals,
}

impl ComputeOverview {
    pub fn slot(&self, kind: ProviderKind) -> Option<&ComputeTotals> {
        match kind {
            ProviderKind::Aws => self.aws.as_ref(),
            ProviderKind::Azure => self.azure.as_ref(),
            ProviderKind::Gcp => self.gcp.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StorageOverview {
    pub aws: Option<ProviderStorageSnapshot>,
    pub azure: Option<ProviderStorageSnapshot>,
    pub gcp: Option<ProviderStorageSnapshot>,
    pub combined: StorageTotals,
}

/// One entry of the cross-provider usage ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUsage {
    pub provider: ProviderKind,
    pub service: String,
    pub amount: f64,
}

/// One operational insight. Provider-tagged except for alerts a provider
/// raised about itself, which keep that provider's tag too.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub severity: Severity,
    pub provider: ProviderKind,
    pub message: String,
}

/// A human-readable explanation for a gap in the overview (a rejected
/// fetch or an internal section failure). Never deduplicated across
/// providers; grouping is a presentation concern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub provider: ProviderKind,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedOverview {
    /// Epoch milliseconds at which this snapshot was assembled.
    pub fetched_at: u64,
    pub timeline: Vec<TimelinePoint>,
    pub cost: CostOverview,
    pub compute: ComputeOverview,
    pub storage: StorageOverview,
    pub top_services: Vec<ServiceUsage>,
    pub insights: Vec<Insight>,
    pub notes: Vec<Note>,
}
