//! Rendering-engine name and version resolution.
//!
//! Three sources, in order of authority: the matched browser rule's engine
//! descriptor, the dedicated engine rule cascade over the raw text, and a
//! bounded version search next to the engine's own token.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::engine::extract::interpolate;
use crate::engine::matcher::first_match;
use crate::record::ClientRecord;
use crate::{Domain, EngineSpec, Rule};

pub(crate) fn resolve(
    record: &mut ClientRecord,
    spec: Option<&EngineSpec>,
    hint_version: &str,
    raw: &str,
    engine_rules: &[Rule],
) {
    if let Some(spec) = spec {
        if let Some(engine) = spec.engine_for(&record.version) {
            record.engine = engine.to_string();
            if spec.has_thresholds() {
                // Engine versions track the browser version on these lines.
                record.engine_version = if hint_version.is_empty() {
                    record.version.clone()
                } else {
                    hint_version.to_string()
                };
            } else if record.engine_version.is_empty() {
                record.engine_version = version_from_text(&record.engine, raw);
            }
        }
    }

    if record.engine.is_empty() {
        if let Some(hit) = first_match(engine_rules, raw, Domain::Engine) {
            if let Some(template) = hit.rule.name_template() {
                let name = interpolate(template, &hit.captures);
                if !name.is_empty() {
                    record.engine = name;
                    if record.engine_version.is_empty() {
                        record.engine_version = version_from_text(&record.engine, raw);
                    }
                }
            }
        }
    }
}

/// Version search bounded to the engine's own token: `<engine>`, an optional
/// slash, then a dotted or short numeric run. The matched slice must contain
/// a slash, and a dotless run longer than seven digits is a build date, not
/// a version.
fn version_from_text(engine: &str, raw: &str) -> String {
    let compiled;
    let re = match KNOWN_VERSION_RES.get(engine) {
        Some(re) => re,
        None => match Regex::new(&version_pattern(engine)) {
            Ok(re) => {
                compiled = re;
                &compiled
            }
            Err(_) => return String::new(),
        },
    };

    let Some(caps) = re.captures(raw) else { return String::new() };
    let whole = caps.get(0).map(|m| m.as_str()).unwrap_or("");
    if !whole.contains('/') {
        return String::new();
    }
    let version = caps.get(1).map(|m| m.as_str()).unwrap_or("");
    if !version.contains('.') && version.len() > 7 {
        return String::new();
    }
    version.to_string()
}

fn version_pattern(engine: &str) -> String {
    format!(r"(?i){}\s*/?\s*(\d+(?:\.\d+)*)", regex::escape(engine))
}

static KNOWN_VERSION_RES: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    let engines = [
        "Blink", "Edge", "Gecko", "Goanna", "KHTML", "NetFront", "NetSurf", "Presto", "Servo",
        "Trident", "WebKit",
    ];
    engines.into_iter().map(|e| (e, Regex::new(&version_pattern(e)).unwrap())).collect()
});
