//! Embedded-application detection inside container browsers.

use crate::engine::debug_rules;
use crate::engine::extract::SecondaryExtractor;
use crate::engine::pairs::ScannedPair;
use crate::record::ClientRecord;
use crate::rules::tables;

/// Look for an application riding inside the finalized primary client.
///
/// Runs only when the primary name is a container browser. Attaches the
/// nested record on success and clears any stale one otherwise. Returns the
/// strategy that ran, for tracing.
pub(crate) fn detect(
    record: &mut ClientRecord,
    raw: &str,
    pairs: &[ScannedPair],
) -> Option<&'static str> {
    if !tables::is_container_browser(&record.name) {
        record.attach_secondary(None);
        return None;
    }

    let strategy = if pairs.iter().any(ScannedPair::is_interesting) {
        SecondaryExtractor::NameVersion
    } else {
        SecondaryExtractor::WholeName
    };
    let found = strategy.extract(raw, pairs);
    if debug_rules() {
        eprintln!("[secondary] strategy {}: {found:?}", strategy.label());
    }

    match found {
        Some(extracted) if !extracted.name.is_empty() => {
            record.attach_secondary(Some(ClientRecord {
                name: extracted.name,
                version: extracted.version,
                known: true,
                ..Default::default()
            }));
        }
        _ => record.attach_secondary(None),
    }
    Some(strategy.label())
}
