//! Reverse-DNS application-identifier extraction from the raw text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::compile_bounded;
use crate::rules::apps;

/// An identifier found in the text, with the version that sat next to it (if
/// any) and whether the application directory knows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AppIdHit {
    pub(crate) app_id: String,
    pub(crate) version: String,
    pub(crate) known: bool,
}

fn id_version_re() -> &'static Regex {
    regex!(r"\b(?P<name>[a-z]{2,5}\.[\w.\-]+)[;:/] ?(?P<version>[\d.\-]+)\b")
}

fn id_re() -> &'static Regex {
    regex!(r"\b([a-z]{2,5}\.[\w.\-]+)")
}

/// Find application identifiers in the text. Identifiers with an adjacent
/// version are preferred over bare ones; among the survivors, the first one
/// the directory knows wins, else the first one found.
pub(crate) fn extract(text: &str) -> Option<AppIdHit> {
    let mut found: Vec<(String, String)> = Vec::new();
    for caps in id_version_re().captures_iter(text) {
        found.push((caps["name"].to_string(), caps["version"].to_string()));
    }
    if found.is_empty() {
        for caps in id_re().captures_iter(text) {
            found.push((caps[1].to_string(), String::new()));
        }
    }
    found.retain(|(id, _)| !apps::ignored_app_id(id));

    let chosen = found
        .iter()
        .find(|(id, _)| apps::app_id_entry(id).is_some())
        .or_else(|| found.first())?;

    Some(AppIdHit {
        app_id: chosen.0.clone(),
        version: chosen.1.clone(),
        known: apps::app_id_entry(&chosen.0).is_some(),
    })
}

static FACEBOOK_FRAGMENT: Lazy<Regex> = Lazy::new(|| compile_bounded("FBAB/").unwrap());
static YAHOO_FRAGMENT: Lazy<Regex> = Lazy::new(|| compile_bounded("YHOO YahooMobile").unwrap());

/// Container app fragments that justify treating an extracted identifier as
/// the embedded application even when the browser name is not a known
/// container.
pub(crate) fn container_fragment(text: &str) -> bool {
    FACEBOOK_FRAGMENT.is_match(text) || YAHOO_FRAGMENT.is_match(text)
}
