use serde::{Deserialize, Serialize};

use super::{ProviderComputeSnapshot, ProviderCostSnapshot, ProviderStorageSnapshot};

/// The three supported cloud platforms; serializes to lowercase JSON
/// (e.g. "aws").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Aws,
    Azure,
    Gcp,
}

impl ProviderKind {
    /// Fixed evaluation order used everywhere providers are walked.
    pub const ALL: [ProviderKind; 3] = [ProviderKind::Aws, ProviderKind::Azure, ProviderKind::Gcp];
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProviderKind::Aws => "AWS",
            ProviderKind::Azure => "Azure",
            ProviderKind::Gcp => "GCP",
        };
        write!(f, "{name}")
    }
}

/// Severity of an insight or provider alert; lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// A pre-classified alert the provider raised itself (e.g. a billing
/// alarm). Passed through to the insight list verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderAlert {
    pub severity: Severity,
    pub message: String,
}

/// An internal partial failure inside a provider summary: the fetch as a
/// whole succeeded but one sub-resource (e.g. "storage") did not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectionError {
    pub section: String,
    pub message: String,
}

/// What one provider summary collaborator returns. Sections a provider
/// could not produce are null, with a matching entry in `errors`; the
/// collaborator itself only fails when the whole fetch is unusable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSnapshot {
    pub provider: ProviderKind,
    #[serde(default)]
    pub cost: Option<ProviderCostSnapshot>,
    #[serde(default)]
    pub compute: Option<ProviderComputeSnapshot>,
    #[serde(default)]
    pub storage: Option<ProviderStorageSnapshot>,
    #[serde(default)]
    pub alerts: Vec<ProviderAlert>,
    #[serde(default)]
    pub errors: Vec<SectionError>,
}

impl ProviderSnapshot {
    /// An all-null snapshot for `provider`; sections are filled in by
    /// whoever builds it.
    pub fn empty(provider: ProviderKind) -> Self {
        ProviderSnapshot {
            provider,
            cost: None,
            compute: None,
            storage: None,
            alerts: vec![],
            errors: vec![],
        }
    }
}
