//! Field extraction: template interpolation, version normalization, and the
//! name extractors behind embedded-application detection.

use regex::{Captures, Regex};

use crate::engine::pairs::ScannedPair;
use crate::rules::apps;
use crate::{Segment, Template};

/// Render a template against the captures of a matched rule.
///
/// A placeholder whose group did not participate substitutes the empty
/// string; a placeholder past the pattern's group count empties the whole
/// result. The result is whitespace-trimmed.
pub(crate) fn interpolate(template: &Template, caps: &Captures<'_>) -> String {
    let mut out = String::new();
    for segment in template.segments() {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Group(idx) => {
                if *idx >= caps.len() {
                    return String::new();
                }
                if let Some(group) = caps.get(*idx) {
                    out.push_str(group.as_str());
                }
            }
        }
    }
    out.trim().to_string()
}

/// Normalize an extracted version: underscores become dots, leading and
/// trailing dot/space runs are stripped, and a value with no digit anywhere
/// is discarded.
pub(crate) fn normalize_version(raw: &str) -> String {
    let cleaned = raw.replace('_', ".");
    let cleaned = cleaned.trim_matches(|c| c == '.' || c == ' ');
    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return String::new();
    }
    cleaned.to_string()
}

// --- Secondary-name extraction ----------------------------------------------

/// Name and version pulled out of the text for a secondary client.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Extracted {
    pub(crate) name: String,
    pub(crate) version: String,
}

/// Closed set of extraction strategies for embedded applications. Selected
/// per input by the secondary detector, never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SecondaryExtractor {
    /// Consume token/version pairs found by the pair scanner.
    NameVersion,
    /// Treat the whole text as one candidate name, optionally trailed by a
    /// version.
    WholeName,
}

impl SecondaryExtractor {
    pub(crate) fn extract(self, input: &str, pairs: &[ScannedPair]) -> Option<Extracted> {
        match self {
            SecondaryExtractor::NameVersion => extract_from_pairs(pairs),
            SecondaryExtractor::WholeName => extract_whole_name(input),
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            SecondaryExtractor::NameVersion => "name-version",
            SecondaryExtractor::WholeName => "whole-name",
        }
    }
}

fn extract_from_pairs(pairs: &[ScannedPair]) -> Option<Extracted> {
    for pair in pairs {
        if !pair.is_interesting() || discard_name(&pair.name) {
            continue;
        }
        let name = match apps::lookup(&pair.code) {
            Some(entry) => entry.name.to_string(),
            None => pair.name.clone(),
        };
        return Some(Extracted { name, version: normalize_version(&pair.version) });
    }
    None
}

fn trailing_version_re() -> &'static Regex {
    regex!(r"^(?P<name>.*?)[/ ](?P<version>\d[\d.]*)$")
}

fn extract_whole_name(input: &str) -> Option<Extracted> {
    let text = input.trim();
    let (name, version) = match trailing_version_re().captures(text) {
        Some(caps) => (caps["name"].trim().to_string(), normalize_version(&caps["version"])),
        None => (text.to_string(), String::new()),
    };
    if discard_name(&name) {
        return None;
    }
    let name = match apps::lookup(&apps::app_code(&name)) {
        Some(entry) => entry.name.to_string(),
        None => name,
    };
    Some(Extracted { name, version })
}

// --- Discard filters ---------------------------------------------------------

/// Candidate names that survive extraction but are noise rather than
/// applications: junk tokens, identifiers, and mostly-numeric strings.
pub(crate) fn discard_name(name: &str) -> bool {
    let length = name.chars().count();
    if length <= 1 || length > 45 {
        return true;
    }
    let lowered = name.to_lowercase();
    if apps::DISCARD_NAMES.contains(lowered.as_str()) {
        return true;
    }
    if apps::UNWANTED_SUBSTRINGS.iter().any(|s| lowered.contains(s)) {
        return true;
    }
    if apps::unwanted_name(&lowered) {
        return true;
    }
    mostly_numeric(name)
}

/// Strings that are digits with a thin alphabetic veneer are build numbers or
/// device identifiers, not names. Short strings get the stricter threshold.
fn mostly_numeric(name: &str) -> bool {
    let kept: String =
        name.chars().filter(|c| c.is_alphanumeric() || matches!(c, '!' | '@' | '+')).collect();
    if kept.is_empty() {
        return true;
    }
    if kept.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    let total = kept.chars().count();
    let non_numeric = kept.chars().filter(|c| !c.is_ascii_digit()).count();
    let threshold = if name.chars().count() < 10 { 0.25 } else { 0.5 };
    (non_numeric as f64 / total as f64) < threshold
}
