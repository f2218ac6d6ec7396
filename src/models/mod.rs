// Domain models: provider-shaped snapshots and the unified overview.

mod compute;
mod cost;
mod overview;
mod provider;
mod storage;

pub use compute::{ComputeTotals, ProviderComputeSnapshot};
pub use cost::{CostWindows, DailyCost, ProviderCostSnapshot, ServiceCost};
pub use overview::{
    CombinedCost, ComputeOverview, CostOverview, CostTotal, Insight, Note, ServiceUsage,
    StorageOverview, TimelinePoint, UnifiedOverview,
};
pub use provider::{ProviderAlert, ProviderKind, ProviderSnapshot, SectionError, Severity};
pub use storage::{ProviderStorageSnapshot, StorageTotals};
