// Insight engine: a fixed, ordered rule walk over normalized totals plus
// provider-supplied alerts. Same input, same output, always.

use crate::models::{ComputeOverview, CostOverview, Insight, ProviderAlert, ProviderKind, Severity};

/// The insight list never grows past this many entries; excess matches are
/// dropped in evaluation order.
pub const MAX_INSIGHTS: usize = 6;

/// Spend-trend warning fires above this change fraction (+5%).
pub const SPEND_TREND_THRESHOLD: f64 = 0.05;

/// Rule order: spend trend per provider, idle compute per provider, then
/// provider alerts verbatim. Providers are always walked in
/// `ProviderKind::ALL` order.
pub fn derive_insights(
    cost: &CostOverview,
    compute: &ComputeOverview,
    alerts: &[(ProviderKind, &[ProviderAlert])],
) -> Vec<Insight> {
    let mut insights = Vec::new();

    for kind in ProviderKind::ALL {
        if let Some(total) = cost.slot(kind)
            && let Some(change) = total.change_percent
            && change > SPEND_TREND_THRESHOLD
        {
            insights.push(Insight {
                severity: Severity::Warning,
                provider: kind,
                message: format!(
                    "{kind} spend trending upward: +{:.1}% vs prior period",
                    change * 100.0
                ),
            });
        }
    }

    for kind in ProviderKind::ALL {
        if let Some(totals) = compute.slot(kind)
            && totals.stopped > 0
        {
            insights.push(Insight {
                severity: Severity::Info,
                provider: kind,
                message: format!("{kind} has {} stopped instances", totals.stopped),
            });
        }
    }

    for (kind, provider_alerts) in alerts {
        for alert in *provider_alerts {
            insights.push(Insight {
                severity: alert.severity,
                provider: *kind,
                message: alert.message.clone(),
            });
        }
    }

    insights.truncate(MAX_INSIGHTS);
    insights
}
