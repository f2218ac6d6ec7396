// Shared test helpers: snapshot builders and mock provider clients.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use cloudlens::models::*;
use cloudlens::providers::{ProviderClient, ProviderError};

pub fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

pub fn point(day_s: &str, amount: f64) -> DailyCost {
    DailyCost {
        day: day(day_s),
        amount,
    }
}

/// Sequential daily points starting at `start`, one per amount.
pub fn series(start: &str, amounts: &[f64]) -> Vec<DailyCost> {
    let start = day(start);
    amounts
        .iter()
        .enumerate()
        .map(|(i, &amount)| DailyCost {
            day: start + chrono::Days::new(i as u64),
            amount,
        })
        .collect()
}

pub fn cost_snapshot(total: f64) -> ProviderCostSnapshot {
    ProviderCostSnapshot {
        currency: "USD".into(),
        total,
        change_percent: None,
        top_services: vec![],
        daily: vec![],
        windows: CostWindows::default(),
        synthetic: false,
    }
}

pub fn compute_snapshot(running: u32, stopped: u32, terminated: u32) -> ProviderComputeSnapshot {
    ProviderComputeSnapshot {
        totals: ComputeTotals {
            total: running + stopped + terminated,
            running,
            stopped,
            terminated,
        },
    }
}

/// Snapshot with a cost section only.
pub fn snapshot_with_cost(provider: ProviderKind, total: f64) -> ProviderSnapshot {
    ProviderSnapshot {
        cost: Some(cost_snapshot(total)),
        ..ProviderSnapshot::empty(provider)
    }
}

/// Mock collaborator that always returns the same snapshot.
pub struct StaticClient {
    snapshot: ProviderSnapshot,
}

impl StaticClient {
    pub fn new(snapshot: ProviderSnapshot) -> Self {
        StaticClient { snapshot }
    }
}

#[async_trait]
impl ProviderClient for StaticClient {
    fn kind(&self) -> ProviderKind {
        self.snapshot.provider
    }

    async fn fetch_summary(&self) -> Result<ProviderSnapshot, ProviderError> {
        Ok(self.snapshot.clone())
    }
}

/// Mock collaborator that always rejects with the given reason.
pub struct FailingClient {
    kind: ProviderKind,
    reason: String,
}

impl FailingClient {
    pub fn new(kind: ProviderKind, reason: impl Into<String>) -> Self {
        FailingClient {
            kind,
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl ProviderClient for FailingClient {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn fetch_summary(&self) -> Result<ProviderSnapshot, ProviderError> {
        Err(ProviderError::Unavailable(self.reason.clone()))
    }
}

/// Mock collaborator that never completes; exercises the branch deadline.
pub struct HangingClient {
    kind: ProviderKind,
}

impl HangingClient {
    pub fn new(kind: ProviderKind) -> Self {
        HangingClient { kind }
    }
}

#[async_trait]
impl ProviderClient for HangingClient {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn fetch_summary(&self) -> Result<ProviderSnapshot, ProviderError> {
        std::future::pending().await
    }
}
