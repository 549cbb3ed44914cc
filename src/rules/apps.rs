//! Application directory: display names for spaceless codes and reverse-DNS
//! identifiers, plus the noise filters applied to generic candidate names.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// Rough application category. Browser-kind entries may stand in as a primary
/// browser identity; app-kind entries only ever name applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AppKind {
    Browser,
    App,
}

#[derive(Debug)]
pub(crate) struct AppEntry {
    pub(crate) name: &'static str,
    pub(crate) kind: AppKind,
}

const fn browser(name: &'static str) -> AppEntry {
    AppEntry { name, kind: AppKind::Browser }
}

const fn app(name: &'static str) -> AppEntry {
    AppEntry { name, kind: AppKind::App }
}

/// Spaceless lowercase code to display entry. Codes are what
/// [`app_code`] produces from tokens found in the text.
static APP_DETAILS: Lazy<HashMap<&'static str, AppEntry>> = Lazy::new(|| {
    HashMap::from([
        ("duckduckgo", browser("DuckDuckGo Privacy Browser")),
        ("ecosia", browser("Ecosia")),
        ("huaweibrowser", browser("Huawei Browser")),
        ("fban", app("Facebook")),
        ("fbav", app("Facebook")),
        ("fbios", app("Facebook")),
        ("gsa", app("Google Search App")),
        ("instagram", app("Instagram")),
        ("line", app("Line")),
        ("micromessenger", app("WeChat")),
        ("musically", app("TikTok")),
        ("outlook-ios-android", app("Microsoft Outlook")),
        ("pinterest", app("Pinterest")),
        ("snapchat", app("Snapchat")),
        ("sportstracker", app("Sports Tracker")),
        ("twitter", app("Twitter")),
        ("whatsapp", app("WhatsApp")),
        ("wordpress", app("WordPress")),
    ])
});

/// Reverse-DNS application identifier to display entry.
static APP_IDS: Lazy<HashMap<&'static str, AppEntry>> = Lazy::new(|| {
    HashMap::from([
        ("com.android.browser", browser("Android Browser")),
        ("com.duckduckgo.mobile.android", browser("DuckDuckGo Privacy Browser")),
        ("com.opera.mini.native", browser("Opera Mini")),
        ("org.mozilla.focus", browser("Firefox Focus")),
        ("com.facebook.katana", app("Facebook")),
        ("com.facebook.orca", app("Facebook Messenger")),
        ("com.google.android.googlequicksearchbox", app("Google Search App")),
        ("com.instagram.android", app("Instagram")),
        ("com.pinterest", app("Pinterest")),
        ("com.snapchat.android", app("Snapchat")),
        ("com.twitter.android", app("Twitter")),
        ("com.zhiliaoapp.musically", app("TikTok")),
        ("jp.naver.line.android", app("Line")),
    ])
});

/// Application identifiers that restate the platform rather than identify an
/// application.
static IGNORED_APP_IDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from(["com.yourcompany.testwithcustomtabs", "com.yourcompany.speedboxlite"])
});

/// Candidate names that are always noise.
pub(crate) static DISCARD_NAMES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["productname", "null", "httppostlib", "mozilla", "mobileios"]));

/// Substrings that mark a candidate name as tracking junk.
pub(crate) static UNWANTED_SUBSTRINGS: [&str; 3] = ["ab_1.1.3011", "deviceid=", "timezone="];

/// Shapes that mark a candidate name as a device or bundle identifier.
pub(crate) fn unwanted_name(lowered: &str) -> bool {
    regex!(r"(?i)sm-\w+-android").is_match(lowered)
        || regex!(r"(?i)^4d531b").is_match(lowered)
        || regex!(r"^com\.").is_match(lowered)
}

/// Canonical directory key for a name: lowercased, spaces and underscores
/// removed.
pub(crate) fn app_code(name: &str) -> String {
    name.to_lowercase().replace([' ', '_'], "")
}

pub(crate) fn lookup(code: &str) -> Option<&'static AppEntry> {
    APP_DETAILS.get(code)
}

pub(crate) fn app_id_entry(app_id: &str) -> Option<&'static AppEntry> {
    APP_IDS.get(app_id)
}

pub(crate) fn ignored_app_id(app_id: &str) -> bool {
    IGNORED_APP_IDS.contains(app_id.to_lowercase().as_str())
}

/// Display name for an application identifier: the directory entry if one
/// exists, else the identifier's segments past the TLD prefix, title-cased.
/// Identifiers without a known prefix are kept as-is.
pub(crate) fn pretty_app_id(app_id: &str) -> String {
    if let Some(entry) = app_id_entry(app_id) {
        return entry.name.to_string();
    }
    let rest = app_id.strip_prefix("au.com.").or_else(|| app_id.strip_prefix("com."));
    match rest {
        Some(rest) => rest.split('.').map(title_word).collect::<Vec<_>>().join(" "),
        None => app_id.to_string(),
    }
}

fn title_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}
