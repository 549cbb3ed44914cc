//! Client-hint identity data and its resolution to one effective identity.
//!
//! Brand lists arrive noisy: placeholder entries, vendor aliases, duplicate
//! brands at different precisions, and `Chromium` padding on every
//! Chromium-line browser. Resolution flattens that into a single name,
//! version, and short identifier the reconciler can work with.

use serde::{Deserialize, Serialize};

use crate::rules::apps::{self, AppKind};
use crate::rules::tables;

/// One entry of a client-hint brand list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    #[serde(default)]
    pub version: String,
}

/// Client-hint data supplied alongside the text. Construction is
/// programmatic; header parsing is the caller's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientHints {
    /// Ordered brand list, as sent.
    #[serde(default)]
    pub brands: Vec<Brand>,
    /// Application identifier (reverse-DNS), when the platform exposes one.
    #[serde(default)]
    pub app_id: String,
}

impl ClientHints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_brand(mut self, name: &str, version: &str) -> Self {
        self.brands.push(Brand { name: name.to_string(), version: version.to_string() });
        self
    }

    pub fn with_app_id(mut self, app_id: &str) -> Self {
        self.app_id = app_id.to_string();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty() && self.app_id.is_empty()
    }

    /// Resolve the hint data to one effective identity, or `None` when
    /// nothing survives filtering.
    pub(crate) fn effective(&self) -> Option<HintIdentity> {
        let brands = self.surviving_brands();

        let mut name = String::new();
        let mut version = String::new();
        let mut kind: Option<AppKind> = None;

        if !self.app_id.is_empty() {
            if let Some(entry) = apps::app_id_entry(&self.app_id) {
                name = entry.name.to_string();
                kind = Some(entry.kind);
                if let Some((_, v)) = brands.iter().find(|(n, _)| *n == name) {
                    version = v.clone();
                }
            }
        }

        if name.is_empty() {
            let distinct = brands.len();
            for (brand, brand_version) in brands.iter().rev() {
                if brand == "Chromium" && distinct > 1 {
                    continue;
                }
                name = brand.clone();
                version = brand_version.clone();
                break;
            }
            if !name.is_empty() {
                (name, kind) = refine_brand_name(name, kind);
            }
        }

        if name.is_empty() && self.app_id.is_empty() {
            return None;
        }

        let short_name =
            tables::abbreviation(&name).map(str::to_string).unwrap_or_default();
        let is_browser = kind == Some(AppKind::Browser) || !short_name.is_empty();

        Some(HintIdentity {
            name,
            version,
            short_name,
            app_id: self.app_id.clone(),
            is_browser,
        })
    }

    /// Placeholder entries filtered, names canonicalized, duplicates folded
    /// in place (last version wins), original order kept.
    fn surviving_brands(&self) -> Vec<(String, String)> {
        let mut brands: Vec<(String, String)> = Vec::new();
        for brand in &self.brands {
            if is_placeholder_brand(&brand.name) {
                continue;
            }
            let canonical = tables::canonical_hint_brand(&brand.name).to_string();
            match brands.iter_mut().find(|(name, _)| *name == canonical) {
                Some(entry) => entry.1 = brand.version.clone(),
                None => brands.push((canonical, brand.version.clone())),
            }
        }
        brands
    }
}

/// The flattened identity the reconciler consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HintIdentity {
    pub(crate) name: String,
    pub(crate) version: String,
    pub(crate) short_name: String,
    pub(crate) app_id: String,
    pub(crate) is_browser: bool,
}

/// A brand-derived name may still be an application code or carry a
/// mismatched ` Browser` suffix against the abbreviation table.
fn refine_brand_name(name: String, kind: Option<AppKind>) -> (String, Option<AppKind>) {
    if let Some(entry) = apps::lookup(&apps::app_code(&name)) {
        return (entry.name.to_string(), Some(entry.kind));
    }

    let lowered = name.to_lowercase();
    if tables::abbreviation(&lowered).is_some() {
        return (name, Some(AppKind::Browser));
    }
    if lowered.ends_with(" browser") {
        let base = &lowered[..lowered.len() - " browser".len()];
        if tables::abbreviation(base).is_some() {
            let stripped = name[..name.len() - " browser".len()].to_string();
            return (stripped, Some(AppKind::Browser));
        }
    }
    if tables::abbreviation(&format!("{lowered} browser")).is_some() {
        return (format!("{name} Browser"), Some(AppKind::Browser));
    }

    (name, kind)
}

/// `"Not;A Brand"` and its many spellings: drop punctuation and compare.
fn is_placeholder_brand(name: &str) -> bool {
    let folded: String = name
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '\'')
        .collect();
    folded == "notabrand"
}
