//! The browser cascade.
//!
//! Order is priority. Forks and rebrands ship the token of the browser they
//! are built on (`Chrome/` in Brave, `Safari/` in almost everything WebKit),
//! so each group below must stay above the groups whose tokens it carries:
//! forks above Opera and Edge, those above the Chrome line, the Chrome line
//! above Safari. Internet Explorer sits above Safari because Windows Phone
//! IE mobile faked an `AppleWebKit ... Mobile Safari` tail.
//!
//! Names must match `tables.rs` entries byte for byte; the short identifier
//! and family lookups run on the finalized display name.

use crate::{EngineSpec, RuleDef};

/// Chromium derivatives that brand themselves with their own token next to
/// the stock `Chrome/` token.
fn chromium_forks() -> Vec<RuleDef> {
    vec![
        rule! {
            pattern: r"Brave(?:/(\d+[\.\d]*))?",
            name: "Brave",
            version: "$1",
            engine: EngineSpec::of("Blink"),
        },
        rule! {
            pattern: r"Vivaldi/(\d+[\.\d]*)",
            name: "Vivaldi",
            version: "$1",
            engine: EngineSpec::of("Blink"),
        },
        rule! {
            pattern: r"YaBrowser/(\d+[\.\d]*)",
            name: "Yandex Browser",
            version: "$1",
            engine: EngineSpec::of("Blink"),
        },
        rule! {
            pattern: r"Iridium/(\d+[\.\d]*)",
            name: "Iridium",
            version: "$1",
            engine: EngineSpec::of("Blink"),
        },
        rule! {
            pattern: r"SamsungBrowser/(\d+[\.\d]*)",
            name: "Samsung Browser",
            version: "$1",
            engine: EngineSpec::of("Blink"),
        },
        rule! {
            pattern: r"UC ?Browser(?:/?(\d+[\.\d]*))?",
            name: "UC Browser",
            version: "$1",
            engine: EngineSpec::of("WebKit").at(40, "Blink"),
        },
        rule! {
            pattern: r"HeadlessChrome(?:/(\d+[\.\d]*))?",
            name: "Headless Chrome",
            version: "$1",
            engine: EngineSpec::of("WebKit").at(28, "Blink"),
        },
    ]
}

/// The Opera line. Presto-era releases report their real version behind
/// `Version/`, Blink-era ones behind `OPR/`.
fn opera_line() -> Vec<RuleDef> {
    vec![
        rule! {
            pattern: r"Opera ?Mini/(?:att/)?(\d+[\.\d]*)",
            name: "Opera Mini",
            version: "$1",
            engine: EngineSpec::of("Presto"),
        },
        rule! {
            pattern: r"OPX/(\d+[\.\d]*)",
            name: "Opera GX",
            version: "$1",
            engine: EngineSpec::of("Blink"),
        },
        rule! {
            pattern: r"Opera ?Mobi.+Version/(\d+[\.\d]*)",
            name: "Opera Mobile",
            version: "$1",
            engine: EngineSpec::of("Presto"),
        },
        rule! {
            pattern: r"Opera ?Mobi",
            name: "Opera Mobile",
            engine: EngineSpec::of("Presto"),
        },
        rule! {
            pattern: r"Opera.+Version/(\d+[\.\d]*)",
            name: "Opera",
            version: "$1",
            engine: EngineSpec::of("Presto").at(15, "Blink"),
        },
        rule! {
            pattern: r"OPR/(\d+[\.\d]*)",
            name: "Opera",
            version: "$1",
            engine: EngineSpec::of("Blink"),
        },
        rule! {
            pattern: r"Opera[ /](\d+[\.\d]*)",
            name: "Opera",
            version: "$1",
            engine: EngineSpec::of("Presto").at(15, "Blink"),
        },
    ]
}

/// Microsoft Edge on every platform. The iOS build runs on WebKit, the
/// Android build on Blink, the desktop one on its own engine until the
/// version 79 rebase.
fn edge_line() -> Vec<RuleDef> {
    vec![
        rule! {
            pattern: r"EdgiOS/(\d+[\.\d]*)",
            name: "Microsoft Edge",
            version: "$1",
            engine: EngineSpec::of("WebKit"),
        },
        rule! {
            pattern: r"EdgA/(\d+[\.\d]*)",
            name: "Microsoft Edge",
            version: "$1",
            engine: EngineSpec::of("Blink"),
        },
        rule! {
            pattern: r"Edge?/(\d+[\.\d]*)",
            name: "Microsoft Edge",
            version: "$1",
            engine: EngineSpec::of("Edge").at(79, "Blink"),
        },
    ]
}

/// Internet Explorer. From version 11 the `MSIE` token is gone and the
/// version only shows through the Trident build, so the bare Trident rule
/// maps engine builds to browser versions with fixed-version conditions.
fn internet_explorer() -> Vec<RuleDef> {
    vec![
        rule! {
            pattern: r"IEMobile[ /](\d+[\.\d]*)",
            name: "IE Mobile",
            version: "$1",
            engine: EngineSpec::of("Trident"),
        },
        rule! {
            pattern: r"MSIE (\d+[\.\d]*)",
            name: "Internet Explorer",
            version: "$1",
            engine: EngineSpec::of("Trident"),
        },
        rule! {
            pattern: r"Trident/\d+[\.\d]*",
            name: "Internet Explorer",
            versions: [
                (r"Trident/4\.0", "8.0"),
                (r"Trident/5\.0", "9.0"),
                (r"Trident/6\.0", "10.0"),
                (r"Trident/7\.0", "11.0"),
            ],
            engine: EngineSpec::of("Trident"),
        },
    ]
}

/// DuckDuckGo's in-app browser. Ordered above the Safari group because the
/// iOS build appends its token after a full Safari tail.
fn duckduckgo() -> Vec<RuleDef> {
    vec![rule! {
        pattern: r"DuckDuckGo/(\d+[\.\d]*)",
        name: "DuckDuckGo Privacy Browser",
        version: "$1",
        engine: EngineSpec::of("WebKit"),
    }]
}

/// Firefox and its relatives. The iOS build is a WebKit shell; everything
/// else is Gecko or the Goanna fork of it.
fn gecko_line() -> Vec<RuleDef> {
    vec![
        rule! {
            pattern: r"FxiOS/(\d+[\.\d]*)",
            name: "Firefox Mobile iOS",
            version: "$1",
            engine: EngineSpec::of("WebKit"),
        },
        rule! {
            pattern: r"Waterfox/(\d+[\.\d]*)",
            name: "Waterfox",
            version: "$1",
            engine: EngineSpec::of("Gecko"),
        },
        rule! {
            pattern: r"SeaMonkey/(\d+[\.\d]*)",
            name: "SeaMonkey",
            version: "$1",
            engine: EngineSpec::of("Gecko"),
        },
        rule! {
            pattern: r"PaleMoon/(\d+[\.\d]*)",
            name: "Pale Moon",
            version: "$1",
            engine: EngineSpec::of("Goanna"),
        },
        rule! {
            pattern: r"(?:Android|Mobile|Tablet).+Firefox/(\d+[\.\d]*)",
            name: "Firefox Mobile",
            version: "$1",
            engine: EngineSpec::of("Gecko"),
        },
        rule! {
            pattern: r"Firefox(?:/(\d+[\.\d]*))?",
            name: "Firefox",
            version: "$1",
            engine: EngineSpec::of("Gecko"),
        },
    ]
}

/// The Chrome line proper. Webview before Chrome Mobile before Chrome: a
/// webview tags itself with `; wv)` or an extra `Version/` token, and the
/// mobile build only differs by the `Mobile` token after the version.
fn chrome_line() -> Vec<RuleDef> {
    vec![
        rule! {
            pattern: r"CriOS(?:/(\d+[\.\d]*))?",
            name: "Chrome Mobile iOS",
            version: "$1",
            engine: EngineSpec::of("WebKit"),
        },
        rule! {
            pattern: r"Chromium(?:/(\d+[\.\d]*))?",
            name: "Chromium",
            version: "$1",
            engine: EngineSpec::of("WebKit").at(28, "Blink"),
        },
        rule! {
            pattern: r"(?:wv\)|Version/[\d.]+).*Chrome/(\d+[\.\d]*)",
            name: "Chrome Webview",
            version: "$1",
            engine: EngineSpec::of("WebKit").at(28, "Blink"),
        },
        rule! {
            pattern: r"Chrome/(\d+[\.\d]*) Mobile",
            name: "Chrome Mobile",
            version: "$1",
            engine: EngineSpec::of("WebKit").at(28, "Blink"),
        },
        rule! {
            pattern: r"Chrome(?:/(\d+[\.\d]*))?",
            name: "Chrome",
            version: "$1",
            engine: EngineSpec::of("WebKit").at(28, "Blink"),
        },
    ]
}

/// The stock Android browser and Safari. All of these carry their real
/// version behind `Version/`; a trailing bare `Safari/` build number is not
/// a version, so the catch-all rules set none.
fn safari_line() -> Vec<RuleDef> {
    vec![
        rule! {
            pattern: r"Android.+Version/(\d+[\.\d]*)",
            name: "Android Browser",
            version: "$1",
            engine: EngineSpec::of("WebKit"),
        },
        rule! {
            pattern: r"Version/(\d+[\.\d]*).+Mobile(?:/\w+)? ?Safari",
            name: "Mobile Safari",
            version: "$1",
            engine: EngineSpec::of("WebKit"),
        },
        rule! {
            pattern: r"Mobile.+Safari/[\d.]+",
            name: "Mobile Safari",
            engine: EngineSpec::of("WebKit"),
        },
        rule! {
            pattern: r"Version/(\d+[\.\d]*).+Safari",
            name: "Safari",
            version: "$1",
            engine: EngineSpec::of("WebKit"),
        },
        rule! {
            pattern: r"Safari/[\d.]+",
            name: "Safari",
            engine: EngineSpec::of("WebKit"),
        },
    ]
}

/// The full cascade, in priority order.
pub(crate) fn get() -> Vec<RuleDef> {
    let mut rules = Vec::new();
    rules.extend(chromium_forks());
    rules.extend(opera_line());
    rules.extend(edge_line());
    rules.extend(internet_explorer());
    rules.extend(duckduckgo());
    rules.extend(gecko_line());
    rules.extend(chrome_line());
    rules.extend(safari_line());
    rules
}
