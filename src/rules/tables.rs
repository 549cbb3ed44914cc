//! Static identity tables: short identifiers, families, capability sets, and
//! client-hint brand canonicalization.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// Browser display name (lowercased) to short identifier.
static ABBREVIATIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("android browser", "AN"),
        ("brave", "BR"),
        ("chrome", "CH"),
        ("chrome mobile", "CM"),
        ("chrome mobile ios", "CI"),
        ("chrome webview", "CV"),
        ("chromium", "CR"),
        ("duckduckgo privacy browser", "DD"),
        ("firefox", "FF"),
        ("firefox mobile", "FM"),
        ("firefox mobile ios", "FR"),
        ("headless chrome", "HC"),
        ("ie mobile", "IM"),
        ("internet explorer", "IE"),
        ("iridium", "I1"),
        ("microsoft edge", "PS"),
        ("mobile safari", "MF"),
        ("opera", "OP"),
        ("opera gx", "OG"),
        ("opera mini", "OI"),
        ("opera mobile", "OM"),
        ("pale moon", "PM"),
        ("safari", "SF"),
        ("samsung browser", "SB"),
        ("seamonkey", "SM"),
        ("uc browser", "UC"),
        ("vivaldi", "VI"),
        ("waterfox", "WF"),
        ("yandex browser", "YA"),
    ])
});

/// Short identifier to browser family.
static FAMILIES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let groups: [(&str, &[&str]); 6] = [
        ("Android Browser", &["AN"]),
        ("Chrome", &["BR", "CH", "CI", "CM", "CR", "CV", "HC", "I1", "SB", "UC", "VI", "YA"]),
        ("Firefox", &["FF", "FM", "FR", "PM", "SM", "WF"]),
        ("Internet Explorer", &["IE", "IM", "PS"]),
        ("Opera", &["OG", "OI", "OM", "OP"]),
        ("Safari", &["MF", "SF"]),
    ];
    let mut map = HashMap::new();
    for (family, shorts) in groups {
        for short in shorts {
            map.insert(*short, family);
        }
    }
    map
});

/// Short identifiers of browsers that only ship on mobile platforms.
static MOBILE_ONLY: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from(["AN", "CI", "CM", "CV", "DD", "FM", "FR", "IM", "MF", "OI", "OM", "SB"])
});

/// Browsers that routinely embed other applications in their user agent.
/// Secondary-client detection only runs for these.
static CONTAINER_BROWSERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "Android Browser",
        "Chrome",
        "Chrome Mobile",
        "Chrome Mobile iOS",
        "Chrome Webview",
        "Mobile Safari",
        "Opera",
        "Opera Mobile",
        "Safari",
        "Samsung Browser",
        "UC Browser",
    ])
});

/// Client-hint brand strings that differ from the display name the rules use.
static HINT_BRANDS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Android WebView", "Chrome Webview"),
        ("Google Chrome", "Chrome"),
        ("HeadlessChrome", "Headless Chrome"),
        ("Microsoft Edge WebView2", "Microsoft Edge"),
        ("Samsung Internet", "Samsung Browser"),
    ])
});

pub(crate) fn abbreviation(name: &str) -> Option<&'static str> {
    ABBREVIATIONS.get(name.to_lowercase().as_str()).copied()
}

/// Short identifier and family for a finalized name. Unknown names keep an
/// empty short identifier and fall back to themselves as the family.
pub(crate) fn short_and_family(name: &str) -> (String, String) {
    if name.is_empty() {
        return (String::new(), String::new());
    }
    match abbreviation(name) {
        Some(short) => {
            let family = FAMILIES.get(short).copied().unwrap_or(name);
            (short.to_string(), family.to_string())
        }
        None => (String::new(), name.to_string()),
    }
}

pub(crate) fn mobile_only(short_name: &str) -> bool {
    MOBILE_ONLY.contains(short_name)
}

pub(crate) fn is_container_browser(name: &str) -> bool {
    CONTAINER_BROWSERS.contains(name)
}

pub(crate) fn canonical_hint_brand(name: &str) -> &str {
    HINT_BRANDS.get(name).copied().unwrap_or(name)
}

/// Calendar-form versions (`2024.03`) mark Iridium builds that report
/// themselves as Chromium in hint brand lists.
pub(crate) fn year_version(version: &str) -> bool {
    regex!(r"^202[0-5]").is_match(version)
}
