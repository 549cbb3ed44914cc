//! The detection pipeline: normalize, cache, cascade, extract, reconcile,
//! resolve the engine, then look for riders (secondary client, app id).

use crate::cache::ClientCache;
use crate::engine::{app_id, debug_rules, extract, matcher, pairs, reconcile, rendering, secondary};
use crate::engine::pairs::ScannedPair;
use crate::hints::ClientHints;
use crate::normalize;
use crate::record::ClientRecord;
use crate::rules::{apps, tables};
use crate::{Domain, EngineSpec, RuleSource};

/// Borrowed view over a detector's rule source and cache; one instance per
/// call, nothing is stored.
pub(crate) struct Pipeline<'a> {
    pub(crate) rules: &'a dyn RuleSource,
    pub(crate) cache: &'a dyn ClientCache,
}

/// A finished run plus the trace the verbose API reports.
pub(crate) struct Outcome {
    pub(crate) record: ClientRecord,
    pub(crate) cache_hit: bool,
    pub(crate) matched_pattern: Option<String>,
    pub(crate) reconciliation: &'static str,
    pub(crate) secondary_strategy: Option<&'static str>,
}

impl Pipeline<'_> {
    pub(crate) fn run(&self, raw: &str, hints: Option<&ClientHints>) -> Outcome {
        let cleaned = normalize::clean(raw);
        let hash = normalize::ua_hash(&cleaned, hints);

        if let Some(record) = self.cache.get(&hash, Domain::Browser) {
            if debug_rules() {
                eprintln!("[cache] hit {hash}");
            }
            return Outcome {
                record,
                cache_hit: true,
                matched_pattern: None,
                reconciliation: "cached",
                secondary_strategy: None,
            };
        }

        // Inputs that cannot identify anything skip the cascade, unless
        // hints can still speak for them.
        if hints.is_none() && normalize::is_worthless(&cleaned) {
            let record = ClientRecord::default();
            self.cache.put(hash, Domain::Browser, record.clone());
            return Outcome {
                record,
                cache_hit: false,
                matched_pattern: None,
                reconciliation: "screened",
                secondary_strategy: None,
            };
        }

        let effective = hints.and_then(ClientHints::effective);
        let scanned = pairs::scan(&cleaned);

        let mut record = ClientRecord::default();
        let mut matched_pattern = None;
        let mut engine_spec: Option<EngineSpec> = None;
        let mut rule_family: Option<String> = None;
        let mut version_is_fixed = false;

        if let Some(hit) = matcher::first_match(self.rules.rules(Domain::Browser), &cleaned, Domain::Browser)
        {
            record.known = true;
            if let Some(template) = hit.rule.name_template() {
                record.name = extract::interpolate(template, &hit.captures);
            }
            record.version = match hit.fixed_version {
                Some(fixed) => {
                    version_is_fixed = true;
                    fixed.to_string()
                }
                None => hit
                    .rule
                    .version_template()
                    .map(|t| extract::normalize_version(&extract::interpolate(t, &hit.captures)))
                    .unwrap_or_default(),
            };
            if record.name.is_empty() {
                record.version.clear();
            }
            engine_spec = hit.rule.engine_spec().cloned();
            rule_family = hit.rule.family().map(str::to_string);
            matched_pattern = Some(hit.rule.pattern().to_string());
        } else if let Some((name, version, known)) = generic_fallback(&cleaned, &scanned) {
            record.name = name;
            record.version = version;
            record.known = known;
        }

        // The reconciler's Chromium guard needs the UA-side short identifier
        // before any hint field lands on the record.
        record.short_name = tables::abbreviation(&record.name).unwrap_or_default().to_string();
        let reconciliation = reconcile::reconcile(&mut record, effective.as_ref(), version_is_fixed);

        let (short, family) = tables::short_and_family(&record.name);
        record.short_name = short;
        record.family = match rule_family {
            Some(family_override) if record.short_name.is_empty() => family_override,
            _ => family,
        };

        let hint_version = effective.as_ref().map(|e| e.version.as_str()).unwrap_or("");
        rendering::resolve(
            &mut record,
            engine_spec.as_ref(),
            hint_version,
            &cleaned,
            self.rules.rules(Domain::Engine),
        );

        let secondary_strategy = secondary::detect(&mut record, &cleaned, &scanned);
        self.apply_app_id(&mut record, &cleaned);

        if record.name.is_empty() {
            record.version.clear();
        }

        self.cache.put(hash, Domain::Browser, record.clone());
        Outcome { record, cache_hit: false, matched_pattern, reconciliation, secondary_strategy }
    }

    /// Attach a reverse-DNS identifier found in the text. A hint-supplied id
    /// always wins; past that, the id either names the client (nothing else
    /// did, or the detected name was the raw id), or marks an embedded
    /// application inside a container browser.
    fn apply_app_id(&self, record: &mut ClientRecord, cleaned: &str) {
        if !record.app_id.is_empty() {
            return;
        }
        let Some(hit) = app_id::extract(cleaned) else { return };

        if record.name.is_empty() {
            record.name = apps::pretty_app_id(&hit.app_id);
            record.app_id = hit.app_id;
            record.known = hit.known;
            return;
        }

        record.app_id = hit.app_id.clone();
        if record.name.contains(&hit.app_id) {
            record.name = apps::pretty_app_id(&hit.app_id);
        } else if tables::is_container_browser(&record.name) || app_id::container_fragment(cleaned)
        {
            record.attach_secondary(Some(ClientRecord {
                name: apps::pretty_app_id(&hit.app_id),
                version: hit.version,
                known: hit.known,
                ..Default::default()
            }));
        }
    }
}

/// When no rule matched: resolve the text against the application directory,
/// first by scanned pair, then by the whole spaceless text, then by its first
/// alphanumeric word.
fn generic_fallback(cleaned: &str, scanned: &[ScannedPair]) -> Option<(String, String, bool)> {
    for pair in scanned {
        if let Some(entry) = apps::lookup(&pair.code) {
            return Some((
                entry.name.to_string(),
                extract::normalize_version(&pair.version),
                true,
            ));
        }
    }
    if let Some(entry) = apps::lookup(&normalize::spaceless(cleaned)) {
        return Some((entry.name.to_string(), String::new(), true));
    }
    let lowered = cleaned.to_lowercase();
    if let Some(caps) = regex!(r"^([a-z0-9]+)").captures(&lowered) {
        if let Some(entry) = apps::lookup(&caps[1]) {
            return Some((entry.name.to_string(), String::new(), true));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::NullCache;
    use crate::rules::DefaultRules;

    fn outcome(raw: &str, hints: Option<&ClientHints>) -> Outcome {
        let rules = DefaultRules::shared();
        let cache = NullCache;
        Pipeline { rules: rules.as_ref(), cache: &cache }.run(raw, hints)
    }

    #[test]
    fn fallback_resolves_bare_app_texts() {
        let got = outcome("Instagram 219.0.0.12.117 Android (33/13)", None);
        assert_eq!(got.record.name, "Instagram");
        assert_eq!(got.record.version, "");
        assert!(got.record.known);
        assert_eq!(got.matched_pattern, None);
    }

    #[test]
    fn screened_inputs_are_unknown() {
        let got = outcome("{1378F00B-BCEA-418F-B1AF-C343EA4F9417}", None);
        assert_eq!(got.reconciliation, "screened");
        assert!(got.record.is_unknown());
    }

    #[test]
    fn app_id_names_the_client_when_nothing_else_does() {
        let got = outcome("com.example.newsreader/2.4.1 CFNetwork/1410.0.3 Darwin/22.6.0", None);
        assert_eq!(got.record.name, "Example Newsreader");
        assert_eq!(got.record.app_id, "com.example.newsreader");
        assert!(!got.record.known);
    }
}
