//! Merging the UA-derived record with client-hint identity.
//!
//! The hint side is usually fresher (brand lists update with the browser),
//! but the UA side carries distinctions hints erase, like the `Mobile`
//! variants. The arms below are ordered and mutually exclusive; the first
//! condition that holds decides the record.

use crate::engine::debug_rules;
use crate::hints::HintIdentity;
use crate::record::ClientRecord;
use crate::rules::tables;

/// Reconcile `record` with the effective hint identity. `version_is_fixed`
/// marks a version set by a version-condition sub-rule, which no merge may
/// overwrite. Returns the arm that ran, for tracing.
pub(crate) fn reconcile(
    record: &mut ClientRecord,
    hints: Option<&HintIdentity>,
    version_is_fixed: bool,
) -> &'static str {
    let label = run(record, hints, version_is_fixed);
    if debug_rules() {
        eprintln!("[reconcile] {label}");
    }
    label
}

fn run(
    record: &mut ClientRecord,
    hints: Option<&HintIdentity>,
    version_is_fixed: bool,
) -> &'static str {
    let Some(hints) = hints else { return "no-hints" };

    // Nothing matched in the text but the hints name a real browser: the
    // hints are the identity.
    if record.name.is_empty() && !record.known && hints.is_browser {
        record.name = hints.name.clone();
        record.version = hints.version.clone();
        record.short_name = hints.short_name.clone();
        record.app_id = hints.app_id.clone();
        record.known = true;
        return "hint-adopted";
    }

    // An application identifier makes the application the client.
    if !hints.app_id.is_empty() {
        overlay(record, hints, version_is_fixed);
        return "app-id-merge";
    }

    // DuckDuckGo reports its engine build as the brand version; the browser
    // version is not recoverable.
    if hints.name == "DuckDuckGo Privacy Browser" {
        overlay(record, hints, version_is_fixed);
        record.engine_version = hints.version.clone();
        record.version = String::new();
        return "duckduckgo";
    }

    // Chromium-line browsers pad their brand list with Chromium or the
    // webview brand; a non-Chromium UA identity outranks that. Iridium is
    // the exception: it is only recognizable by its calendar versions here.
    if !record.name.is_empty()
        && (hints.name == "Chromium" || hints.name == "Chrome Webview")
        && !matches!(record.short_name.as_str(), "CR" | "CV" | "AN")
    {
        if tables::year_version(&hints.version) {
            record.name = "Iridium".to_string();
            record.short_name = "I1".to_string();
            return "iridium";
        }
        return "ua-identity-kept";
    }

    let pre_name = record.name.clone();
    let pre_short = record.short_name.clone();
    overlay(record, hints, version_is_fixed);
    if pre_name == format!("{} Mobile", hints.name) {
        record.name = pre_name;
        record.short_name = pre_short;
        return "mobile-name-restored";
    }
    "default-merge"
}

/// Field-by-field merge; present hint fields overwrite, absent ones leave
/// the record alone.
fn overlay(record: &mut ClientRecord, hints: &HintIdentity, version_is_fixed: bool) {
    if !hints.name.is_empty() {
        record.name = hints.name.clone();
        record.known = true;
    }
    if !hints.version.is_empty() && !version_is_fixed {
        record.version = hints.version.clone();
    }
    if !hints.short_name.is_empty() {
        record.short_name = hints.short_name.clone();
    }
    if !hints.app_id.is_empty() {
        record.app_id = hints.app_id.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ua_record(name: &str, version: &str, short: &str) -> ClientRecord {
        ClientRecord {
            name: name.to_string(),
            version: version.to_string(),
            short_name: short.to_string(),
            known: !name.is_empty(),
            ..Default::default()
        }
    }

    fn hint(name: &str, version: &str) -> HintIdentity {
        HintIdentity {
            name: name.to_string(),
            version: version.to_string(),
            short_name: tables::abbreviation(name).unwrap_or_default().to_string(),
            app_id: String::new(),
            is_browser: tables::abbreviation(name).is_some(),
        }
    }

    #[test]
    fn hints_adopted_when_nothing_matched() {
        let mut record = ClientRecord::default();
        let arm = reconcile(&mut record, Some(&hint("Chrome", "120")), false);
        assert_eq!(arm, "hint-adopted");
        assert_eq!(record.name, "Chrome");
        assert_eq!(record.version, "120");
        assert_eq!(record.short_name, "CH");
        assert!(record.known);
    }

    #[test]
    fn app_id_makes_the_app_the_client() {
        let mut record = ua_record("Chrome Mobile", "124.0", "CM");
        let hints = HintIdentity {
            name: "Instagram".to_string(),
            version: String::new(),
            short_name: String::new(),
            app_id: "com.instagram.android".to_string(),
            is_browser: false,
        };
        let arm = reconcile(&mut record, Some(&hints), false);
        assert_eq!(arm, "app-id-merge");
        assert_eq!(record.name, "Instagram");
        assert_eq!(record.version, "124.0");
        assert_eq!(record.app_id, "com.instagram.android");
    }

    #[test]
    fn duckduckgo_loses_its_version() {
        let mut record = ua_record("Chrome Mobile", "124.0.6367.82", "CM");
        let arm = reconcile(&mut record, Some(&hint("DuckDuckGo Privacy Browser", "7.1")), false);
        assert_eq!(arm, "duckduckgo");
        assert_eq!(record.name, "DuckDuckGo Privacy Browser");
        assert_eq!(record.version, "");
        assert_eq!(record.engine_version, "7.1");
        assert_eq!(record.short_name, "DD");
    }

    #[test]
    fn chromium_padding_does_not_rename() {
        let mut record = ua_record("Vivaldi", "6.5", "VI");
        let arm = reconcile(&mut record, Some(&hint("Chromium", "120")), false);
        assert_eq!(arm, "ua-identity-kept");
        assert_eq!(record.name, "Vivaldi");
        assert_eq!(record.version, "6.5");
    }

    #[test]
    fn calendar_chromium_version_means_iridium() {
        let mut record = ua_record("Chrome", "120.0.6099.71", "CH");
        let arm = reconcile(&mut record, Some(&hint("Chromium", "2024.03")), false);
        assert_eq!(arm, "iridium");
        assert_eq!(record.name, "Iridium");
        assert_eq!(record.short_name, "I1");
        assert_eq!(record.version, "120.0.6099.71");
    }

    #[test]
    fn chromium_ua_takes_the_default_merge() {
        let mut record = ua_record("Chromium", "119", "CR");
        let arm = reconcile(&mut record, Some(&hint("Chromium", "120")), false);
        assert_eq!(arm, "default-merge");
        assert_eq!(record.version, "120");
    }

    #[test]
    fn mobile_name_survives_the_merge() {
        let mut record = ua_record("Chrome Mobile", "124.0", "CM");
        let arm = reconcile(&mut record, Some(&hint("Chrome", "125")), false);
        assert_eq!(arm, "mobile-name-restored");
        assert_eq!(record.name, "Chrome Mobile");
        assert_eq!(record.short_name, "CM");
        assert_eq!(record.version, "125");
    }

    #[test]
    fn fixed_versions_are_sticky() {
        let mut record = ua_record("Internet Explorer", "11.0", "IE");
        let arm = reconcile(&mut record, Some(&hint("Internet Explorer", "12")), true);
        assert_eq!(arm, "default-merge");
        assert_eq!(record.version, "11.0");
    }
}
