// Model serialization tests (JSON camelCase, lowercase enums, defaults)

mod common;

use cloudlens::models::*;
use common::{day, point};

#[test]
fn provider_kind_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&ProviderKind::Aws).unwrap(), "\"aws\"");
    assert_eq!(
        serde_json::to_string(&ProviderKind::Azure).unwrap(),
        "\"azure\""
    );
    let back: ProviderKind = serde_json::from_str("\"gcp\"").unwrap();
    assert_eq!(back, ProviderKind::Gcp);
}

#[test]
fn severity_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&Severity::Warning).unwrap(),
        "\"warning\""
    );
}

#[test]
fn cost_snapshot_serialization_camel_case() {
    let cost = ProviderCostSnapshot {
        currency: "USD".into(),
        total: 1248.91,
        change_percent: Some(0.0812),
        top_services: vec![ServiceCost {
            service: "Amazon EC2".into(),
            amount: 512.4,
        }],
        daily: vec![point("2024-05-01", 10.0)],
        windows: CostWindows {
            month_to_date: Some(512.34),
            previous_month: None,
        },
        synthetic: false,
    };
    let json = serde_json::to_string(&cost).unwrap();
    assert!(json.contains("\"changePercent\""));
    assert!(json.contains("\"topServices\""));
    assert!(json.contains("\"monthToDate\""));
    assert!(json.contains("\"2024-05-01\""));
    let back: ProviderCostSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cost);
}

#[test]
fn provider_snapshot_optional_sections_default_to_null() {
    let json = r#"{"provider":"azure"}"#;
    let snapshot: ProviderSnapshot = serde_json::from_str(json).unwrap();
    assert_eq!(snapshot.provider, ProviderKind::Azure);
    assert!(snapshot.cost.is_none());
    assert!(snapshot.compute.is_none());
    assert!(snapshot.storage.is_none());
    assert!(snapshot.alerts.is_empty());
    assert!(snapshot.errors.is_empty());
}

#[test]
fn provider_snapshot_json_roundtrip() {
    let snapshot = ProviderSnapshot {
        provider: ProviderKind::Gcp,
        cost: Some(ProviderCostSnapshot {
            currency: "USD".into(),
            total: 389.27,
            change_percent: Some(0.0812),
            top_services: vec![],
            daily: vec![],
            windows: CostWindows::default(),
            synthetic: true,
        }),
        compute: Some(ProviderComputeSnapshot {
            totals: ComputeTotals {
                total: 5,
                running: 5,
                stopped: 0,
                terminated: 0,
            },
        }),
        storage: Some(ProviderStorageSnapshot {
            buckets: 7,
            size_bytes: None,
        }),
        alerts: vec![ProviderAlert {
            severity: Severity::Info,
            message: "ok".into(),
        }],
        errors: vec![],
    };
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: ProviderSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn timeline_point_omitted_providers_deserialize_as_none() {
    let json = r#"{"day":"2024-05-02","azure":12.0,"gcp":5.0}"#;
    let p: TimelinePoint = serde_json::from_str(json).unwrap();
    assert_eq!(p.day, day("2024-05-02"));
    assert_eq!(p.aws, None);
    assert_eq!(p.azure, Some(12.0));
    assert_eq!(p.gcp, Some(5.0));
}

#[test]
fn unified_overview_serialization_camel_case() {
    let overview = UnifiedOverview {
        fetched_at: 1_700_000_000_000,
        timeline: vec![],
        cost: CostOverview {
            aws: None,
            azure: None,
            gcp: None,
            combined: CombinedCost {
                amount: 0.0,
                currency: "USD".into(),
                change_percent: None,
            },
        },
        compute: ComputeOverview {
            aws: None,
            azure: None,
            gcp: None,
            combined: ComputeTotals::default(),
        },
        storage: StorageOverview {
            aws: None,
            azure: None,
            gcp: None,
            combined: StorageTotals::default(),
        },
        top_services: vec![],
        insights: vec![],
        notes: vec![Note {
            provider: ProviderKind::Aws,
            message: "summary unavailable: down".into(),
        }],
    };
    let json = serde_json::to_string(&overview).unwrap();
    assert!(json.contains("\"fetchedAt\""));
    assert!(json.contains("\"topServices\""));
    assert!(json.contains("\"changePercent\":null"));
    let back: UnifiedOverview = serde_json::from_str(&json).unwrap();
    assert_eq!(back, overview);
}
