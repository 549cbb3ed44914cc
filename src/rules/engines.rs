//! The rendering-engine cascade.
//!
//! Consulted only when the matched browser rule carried no engine
//! descriptor, or nothing matched at all. Order is priority, and two
//! entries depend on it:
//!
//! - Goanna forked Gecko and its browsers still emit a `Gecko/` token, so
//!   Goanna must come first.
//! - Nearly every WebKit agent advertises `(KHTML, like Gecko)`. The Gecko
//!   rule therefore insists on a slashed build number, and WebKit sits last
//!   so the KHTML rule wins only when no `WebKit` token is present.
//!
//! The `WebKit` token itself usually appears as `AppleWebKit`, which the
//! match-boundary guard would reject mid-word; the optional prefix keeps
//! the rule applicable.

use crate::RuleDef;

/// The engine rules, in priority order.
pub(crate) fn get() -> Vec<RuleDef> {
    vec![
        rule! { pattern: r"Edge", name: "Edge" },
        rule! { pattern: r"Trident", name: "Trident" },
        rule! { pattern: r"Servo", name: "Servo" },
        rule! { pattern: r"Goanna", name: "Goanna" },
        rule! { pattern: r"Presto", name: "Presto" },
        rule! { pattern: r"NetFront", name: "NetFront" },
        rule! { pattern: r"NetSurf", name: "NetSurf" },
        rule! { pattern: r"Gecko/[\d.]+", name: "Gecko" },
        rule! { pattern: r"KHTML", name: "KHTML" },
        rule! { pattern: r"(?:Apple)?WebKit", name: "WebKit" },
    ]
}
