// Unified-overview aggregation engine. The service fans out one concurrent
// fetch per provider, waits for every branch to settle, then assembles the
// overview from whatever arrived. Assembly itself is a pure function; the
// service owns only the fan-out and the clock read.

mod insights;
mod notes;
mod settle;
mod timeline;
mod totals;

pub use insights::{MAX_INSIGHTS, SPEND_TREND_THRESHOLD, derive_insights};
pub use notes::{MAX_SECTION_NOTES, collect_notes};
pub use settle::settle_all;
pub use timeline::{TIMELINE_WINDOW, merge_timelines, truncate_to_window};
pub use totals::{
    REPORTING_CURRENCY, TOP_SERVICES, compute_overview, cost_overview, cost_total, rank_services,
    round2, round4, storage_overview,
};

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::BoxFuture;
use tracing::warn;

use crate::models::{
    DailyCost, ProviderAlert, ProviderCostSnapshot, ProviderKind, ProviderSnapshot,
    UnifiedOverview,
};
use crate::providers::ProviderClient;

/// A rejected top-level provider fetch: which provider and why. This is the
/// tagged failure half of a branch outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderFailure {
    pub provider: ProviderKind,
    pub reason: String,
}

pub struct OverviewService {
    aws: Arc<dyn ProviderClient>,
    azure: Arc<dyn ProviderClient>,
    gcp: Arc<dyn ProviderClient>,
    /// Per-branch deadline; an elapsed deadline is an ordinary provider
    /// failure, not an abort.
    branch_timeout: Duration,
}

impl OverviewService {
    pub fn new(
        aws: Arc<dyn ProviderClient>,
        azure: Arc<dyn ProviderClient>,
        gcp: Arc<dyn ProviderClient>,
        branch_timeout: Duration,
    ) -> Self {
        OverviewService {
            aws,
            azure,
            gcp,
            branch_timeout,
        }
    }

    /// Builds one fresh overview snapshot. Resolves for every combination of
    /// provider success and failure; partial failures surface as null slots
    /// plus notes, never as an error from this method.
    pub async fn get_unified_overview(&self) -> UnifiedOverview {
        let branches: Vec<BoxFuture<'_, Result<ProviderSnapshot, ProviderFailure>>> = vec![
            Box::pin(fetch_branch(self.aws.as_ref(), self.branch_timeout)),
            Box::pin(fetch_branch(self.azure.as_ref(), self.branch_timeout)),
            Box::pin(fetch_branch(self.gcp.as_ref(), self.branch_timeout)),
        ];
        let outcomes = settle_all(branches).await;

        let fetched_at = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_else(|e| {
                warn!(error = %e, operation = "get_timestamp", "system time error");
                0
            });

        let overview = assemble(fetched_at, &outcomes);
        tracing::debug!(
            operation = "get_unified_overview",
            providers_ok = outcomes.iter().filter(|o| o.is_ok()).count(),
            notes = overview.notes.len(),
            insights = overview.insights.len(),
            "overview assembled"
        );
        overview
    }
}

/// One provider branch: fetch under the deadline, log and convert any
/// rejection into a `ProviderFailure` so the settle barrier sees a value
/// either way.
async fn fetch_branch(
    client: &dyn ProviderClient,
    deadline: Duration,
) -> Result<ProviderSnapshot, ProviderFailure> {
    let kind = client.kind();
    match tokio::time::timeout(deadline, client.fetch_summary()).await {
        Ok(Ok(snapshot)) => Ok(snapshot),
        Ok(Err(e)) => {
            warn!(
                provider = %kind,
                error = %e,
                operation = "fetch_summary",
                "provider summary fetch failed"
            );
            Err(ProviderFailure {
                provider: kind,
                reason: e.to_string(),
            })
        }
        Err(_) => {
            warn!(
                provider = %kind,
                timeout_secs = deadline.as_secs(),
                operation = "fetch_summary",
                "provider summary fetch timed out"
            );
            Err(ProviderFailure {
                provider: kind,
                reason: format!("timed out after {}s", deadline.as_secs()),
            })
        }
    }
}

/// Pure assembly of the overview from settled branch outcomes. Everything
/// downstream of the settle barrier lives here so it can be exercised with
/// plain fixtures.
pub fn assemble(
    fetched_at: u64,
    outcomes: &[Result<ProviderSnapshot, ProviderFailure>],
) -> UnifiedOverview {
    let fulfilled = |kind: ProviderKind| {
        outcomes.iter().find_map(|o| match o {
            Ok(s) if s.provider == kind => Some(s),
            _ => None,
        })
    };
    let aws = fulfilled(ProviderKind::Aws);
    let azure = fulfilled(ProviderKind::Azure);
    let gcp = fulfilled(ProviderKind::Gcp);

    fn cost_section(s: Option<&ProviderSnapshot>) -> Option<&ProviderCostSnapshot> {
        s.and_then(|s| s.cost.as_ref())
    }

    let series: Vec<(ProviderKind, &[DailyCost])> = [aws, azure, gcp]
        .into_iter()
        .flatten()
        .filter_map(|s| {
            s.cost
                .as_ref()
                .map(|c| (s.provider, c.daily.as_slice()))
        })
        .collect();
    let timeline = truncate_to_window(merge_timelines(&series), TIMELINE_WINDOW);

    let cost = cost_overview(cost_section(aws), cost_section(azure), cost_section(gcp));
    let compute = compute_overview(
        aws.and_then(|s| s.compute.as_ref()),
        azure.and_then(|s| s.compute.as_ref()),
        gcp.and_then(|s| s.compute.as_ref()),
    );
    let storage = storage_overview(
        aws.and_then(|s| s.storage.as_ref()),
        azure.and_then(|s| s.storage.as_ref()),
        gcp.and_then(|s| s.storage.as_ref()),
    );

    let cost_sections: Vec<_> = [aws, azure, gcp]
        .into_iter()
        .flatten()
        .filter_map(|s| s.cost.as_ref().map(|c| (s.provider, c)))
        .collect();
    let top_services = rank_services(&cost_sections);

    let alerts: Vec<(ProviderKind, &[ProviderAlert])> = [aws, azure, gcp]
        .into_iter()
        .flatten()
        .map(|s| (s.provider, s.alerts.as_slice()))
        .collect();
    let insights = derive_insights(&cost, &compute, &alerts);
    let notes = collect_notes(outcomes);

    UnifiedOverview {
        fetched_at,
        timeline,
        cost,
        compute,
        storage,
        top_services,
        insights,
        notes,
    }
}
