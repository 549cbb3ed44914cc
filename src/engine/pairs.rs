//! Token/version pair scanner over the raw text.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::rules::apps;

/// Boilerplate tokens: platform noise plus the browsers' own product tokens.
/// Pairs built from these never identify an embedded application.
static SKIP_TOKENS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "android",
        "applewebkit",
        "blink",
        "brave",
        "cfnetwork",
        "chrome",
        "chromium",
        "crios",
        "dalvik",
        "darwin",
        "edg",
        "edga",
        "edge",
        "edgios",
        "firefox",
        "fxios",
        "gecko",
        "goanna",
        "headlesschrome",
        "iemobile",
        "iridium",
        "khtml",
        "linux",
        "macintosh",
        "mobile",
        "mozilla",
        "msie",
        "netfront",
        "opera",
        "opr",
        "opx",
        "palemoon",
        "presto",
        "safari",
        "samsungbrowser",
        "seamonkey",
        "trident",
        "ubrowser",
        "ucbrowser",
        "ucweb",
        "vivaldi",
        "waterfox",
        "webkit",
        "windows",
        "yabrowser",
        "yowser",
    ])
});

/// One `token/version` pair found in the text. `code` is the directory key
/// form of the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScannedPair {
    pub(crate) code: String,
    pub(crate) name: String,
    pub(crate) version: String,
}

impl ScannedPair {
    /// Pairs short enough to be noise, and `Something-Build`/`X-Version`
    /// style metadata pairs, are never worth extracting.
    pub(crate) fn is_interesting(&self) -> bool {
        self.name.chars().count() > 2
            && !self.code.ends_with("build")
            && !self.code.ends_with("version")
    }
}

/// Collect `token/1.2.3` pairs from the text, dropping boilerplate tokens.
/// A regex scan rather than a whitespace split: app fragments pack pairs
/// into bracketed, semicolon-separated runs with no spaces at all. The
/// version side must be numeric; `Mobi/ADR-1111101157` is a platform tag,
/// not a pair.
pub(crate) fn scan(text: &str) -> Vec<ScannedPair> {
    let mut pairs = Vec::new();
    for caps in regex!(r"(?P<name>[\w.\-]+)/ ?v?(?P<version>[\d.]+)").captures_iter(text) {
        let name = &caps["name"];
        let code = apps::app_code(name);
        if SKIP_TOKENS.contains(code.as_str()) {
            continue;
        }
        pairs.push(ScannedPair {
            code,
            name: name.to_string(),
            version: caps["version"].to_string(),
        });
    }
    pairs
}
