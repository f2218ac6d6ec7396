// Totals normalizer: per-provider and combined cost/compute/storage
// figures. Each provider defines its own source of truth for the total and
// its own windowing rule for the trend delta; everything is normalized to
// two decimals (amounts) or four decimals (change fractions) here.

use crate::models::{
    CombinedCost, ComputeOverview, ComputeTotals, CostOverview, CostTotal, CostWindows, DailyCost,
    ProviderComputeSnapshot, ProviderCostSnapshot, ProviderKind, ProviderStorageSnapshot,
    ServiceUsage, StorageOverview, StorageTotals,
};

/// All amounts are assumed pre-converted to this currency upstream.
pub const REPORTING_CURRENCY: &str = "USD";

/// Cross-provider usage ranking keeps this many entries.
pub const TOP_SERVICES: usize = 5;

/// Trailing-window change compares this many recent points against the same
/// number immediately preceding them.
const CHANGE_WINDOW_POINTS: usize = 30;

/// Below this many points the trailing-window change is undefined.
const MIN_SERIES_POINTS: usize = 14;

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// Normalizes one provider's cost section into its overview slot.
pub fn cost_total(kind: ProviderKind, cost: &ProviderCostSnapshot) -> CostTotal {
    let amount = match kind {
        // Azure's authoritative figure is the month-to-date window when the
        // provider reports one; AWS and GCP report a usable total directly.
        ProviderKind::Azure => cost.windows.month_to_date.unwrap_or(cost.total),
        ProviderKind::Aws | ProviderKind::Gcp => cost.total,
    };
    CostTotal {
        amount: round2(amount),
        currency: cost.currency.clone(),
        change_percent: change_percent(kind, cost),
        synthetic: cost.synthetic,
    }
}

/// Trend delta as a fraction (0.3 = +30%), under the provider's own
/// windowing rule. None whenever the rule's inputs are missing or the base
/// is zero.
fn change_percent(kind: ProviderKind, cost: &ProviderCostSnapshot) -> Option<f64> {
    match kind {
        ProviderKind::Aws => trailing_window_change(&cost.daily),
        ProviderKind::Azure => month_window_change(&cost.windows),
        ProviderKind::Gcp => cost.change_percent.map(round4),
    }
}

/// Most recent 30 points vs the up-to-30 points immediately preceding them.
fn trailing_window_change(daily: &[DailyCost]) -> Option<f64> {
    if daily.len() < MIN_SERIES_POINTS {
        return None;
    }
    let mut sorted: Vec<&DailyCost> = daily.iter().collect();
    sorted.sort_by_key(|p| p.day);

    let recent_start = sorted.len().saturating_sub(CHANGE_WINDOW_POINTS);
    let prior_start = recent_start.saturating_sub(CHANGE_WINDOW_POINTS);
    let recent: f64 = sorted[recent_start..].iter().map(|p| p.amount).sum();
    let prior: f64 = sorted[prior_start..recent_start].iter().map(|p| p.amount).sum();
    if prior == 0.0 {
        return None;
    }
    Some(round4((recent - prior) / prior))
}

/// Month-to-date vs previous-month window totals.
fn month_window_change(windows: &CostWindows) -> Option<f64> {
    let current = windows.month_to_date?;
    let previous = windows.previous_month?;
    if previous == 0.0 {
        return None;
    }
    Some(round4((current - previous) / previous))
}

/// Per-provider slots plus the combined figure. The combined change
/// percentage stays null: per-provider deltas cover different windows and
/// are not blendable without a weighting policy.
pub fn cost_overview(
    aws: Option<&ProviderCostSnapshot>,
    azure: Option<&ProviderCostSnapshot>,
    gcp: Option<&ProviderCostSnapshot>,
) -> CostOverview {
    let aws = aws.map(|c| cost_total(ProviderKind::Aws, c));
    let azure = azure.map(|c| cost_total(ProviderKind::Azure, c));
    let gcp = gcp.map(|c| cost_total(ProviderKind::Gcp, c));

    let combined_amount: f64 = [&aws, &azure, &gcp]
        .into_iter()
        .flatten()
        .map(|t| t.amount)
        .sum();

    CostOverview {
        aws,
        azure,
        gcp,
        combined: CombinedCost {
            amount: round2(combined_amount),
            currency: REPORTING_CURRENCY.to_string(),
            change_percent: None,
        },
    }
}

/// Field-wise sums; an absent provider contributes zero to every field so
/// the combined block stays structurally usable under partial failure.
pub fn compute_overview(
    aws: Option<&ProviderComputeSnapshot>,
    azure: Option<&ProviderComputeSnapshot>,
    gcp: Option<&ProviderComputeSnapshot>,
) -> ComputeOverview {
    let aws = aws.map(|c| c.totals);
    let azure = azure.map(|c| c.totals);
    let gcp = gcp.map(|c| c.totals);

    let mut combined = ComputeTotals::default();
    for totals in [&aws, &azure, &gcp].into_iter().flatten() {
        combined.accumulate(totals);
    }

    ComputeOverview {
        aws,
        azure,
        gcp,
        combined,
    }
}

pub fn storage_overview(
    aws: Option<&ProviderStorageSnapshot>,
    azure: Option<&ProviderStorageSnapshot>,
    gcp: Option<&ProviderStorageSnapshot>,
) -> StorageOverview {
    let aws = aws.copied();
    let azure = azure.copied();
    let gcp = gcp.copied();

    let mut combined = StorageTotals::default();
    for snapshot in [&aws, &azure, &gcp].into_iter().flatten() {
        combined.buckets += snapshot.buckets;
        if let Some(size) = snapshot.size_bytes {
            combined.size_bytes = Some(combined.size_bytes.unwrap_or(0) + size);
        }
    }

    StorageOverview {
        aws,
        azure,
        gcp,
        combined,
    }
}

/// Cross-provider usage ranking: every provider's ranked services tagged
/// with their provider, ordered by amount descending. Stable sort keeps the
/// provider walk order deterministic on ties.
pub fn rank_services(sections: &[(ProviderKind, &ProviderCostSnapshot)]) -> Vec<ServiceUsage> {
    let mut ranked: Vec<ServiceUsage> = sections
        .iter()
        .flat_map(|(provider, cost)| {
            cost.top_services.iter().map(|s| ServiceUsage {
                provider: *provider,
                service: s.service.clone(),
                amount: s.amount,
            })
        })
        .collect();
    ranked.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    ranked.truncate(TOP_SERVICES);
    ranked
}
