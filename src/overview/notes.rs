// Notes collector: turns rejected fetches and provider-internal section
// errors into provider-tagged, human-readable notes. No cross-provider
// dedup; grouping identical texts is a presentation concern.

use crate::models::{Note, ProviderSnapshot};

use super::ProviderFailure;

/// A provider that succeeded overall gets at most this many section-error
/// notes; excess entries are dropped, not summarized.
pub const MAX_SECTION_NOTES: usize = 3;

pub fn collect_notes(outcomes: &[Result<ProviderSnapshot, ProviderFailure>]) -> Vec<Note> {
    let mut notes = Vec::new();
    for outcome in outcomes {
        match outcome {
            Err(failure) => notes.push(Note {
                provider: failure.provider,
                message: format!("summary unavailable: {}", failure.reason),
            }),
            Ok(snapshot) => {
                for error in snapshot.errors.iter().take(MAX_SECTION_NOTES) {
                    notes.push(Note {
                        provider: snapshot.provider,
                        message: format!("{} unavailable: {}", error.section, error.message),
                    });
                }
            }
        }
    }
    notes
}
