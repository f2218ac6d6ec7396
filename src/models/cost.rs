use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One service's share of a provider's spend, ranked by the provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCost {
    pub service: String,
    pub amount: f64,
}

/// One calendar day's spend in a provider's daily series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyCost {
    pub day: NaiveDate,
    pub amount: f64,
}

/// Named billing windows a provider may report alongside its series.
/// Azure-style providers report month-to-date and previous-month totals.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostWindows {
    #[serde(default)]
    pub month_to_date: Option<f64>,
    #[serde(default)]
    pub previous_month: Option<f64>,
}

/// Cost section of a provider summary, as reported by that provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCostSnapshot {
    pub currency: String,
    pub total: f64,
    /// Provider-reported change vs the prior period, as a fraction (0.3 = +30%).
    #[serde(default)]
    pub change_percent: Option<f64>,
    #[serde(default)]
    pub top_services: Vec<ServiceCost>,
    /// Pre-aggregated daily series: one entry per calendar day.
    #[serde(default)]
    pub daily: Vec<DailyCost>,
    #[serde(default)]
    pub windows: CostWindows,
    /// Set when the provider backfilled sample data instead of real billing
    /// figures. Passed through untouched; presentation depends on it.
    #[serde(default)]
    pub synthetic: bool,
}
