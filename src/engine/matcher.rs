//! First-match walk over an ordered rule set.

use regex::Captures;

use crate::engine::debug_rules;
use crate::{Domain, Rule};

/// Outcome of a successful walk: the winning rule, its position, its capture
/// groups and, when a version-condition sub-rule also fired, the fixed
/// version string.
pub(crate) struct RuleMatch<'r, 't> {
    pub(crate) rule: &'r Rule,
    pub(crate) index: usize,
    pub(crate) captures: Captures<'t>,
    pub(crate) fixed_version: Option<&'r str>,
}

/// Walk `rules` in priority order against `input` and return the first hit.
/// Order is the whole contract; nothing past the first hit runs.
pub(crate) fn first_match<'r, 't>(
    rules: &'r [Rule],
    input: &'t str,
    domain: Domain,
) -> Option<RuleMatch<'r, 't>> {
    for (index, rule) in rules.iter().enumerate() {
        let Some(captures) = rule.regex().captures(input) else { continue };
        let fixed_version =
            rule.conditions().iter().find(|c| c.matches(input)).map(|c| c.version());
        if debug_rules() {
            eprintln!("[match] {domain:?} rule #{index} `{}` fired", rule.pattern());
        }
        return Some(RuleMatch { rule, index, captures, fixed_version });
    }
    if debug_rules() {
        eprintln!("[match] {domain:?} no rule fired");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile_rules;

    #[test]
    fn first_hit_wins() {
        let rules = compile_rules(&[
            rule! { pattern: "Edge", name: "Edge" },
            rule! { pattern: "Chrome", name: "Chrome" },
        ])
        .unwrap();

        let hit = first_match(&rules, "a Edge and Chrome UA", Domain::Browser).unwrap();
        assert_eq!(hit.index, 0);

        let hit = first_match(&rules, "Chrome only", Domain::Browser).unwrap();
        assert_eq!(hit.index, 1);

        assert!(first_match(&rules, "Lynx", Domain::Browser).is_none());
    }

    #[test]
    fn patterns_cannot_fire_mid_token() {
        let rules = compile_rules(&[rule! { pattern: "Safari", name: "Safari" }]).unwrap();

        // A letter or an underscore in front of the token blocks the match.
        assert!(first_match(&rules, "MobileSafari/600", Domain::Browser).is_none());
        assert!(first_match(&rules, "x_Safari/600", Domain::Browser).is_none());

        // Start of input, separators, and the vendor prefixes do not.
        for input in ["Safari/600", "Mobile Safari/600", "foo _Safari", "sprd-Safari", "MZ-Safari"] {
            assert!(first_match(&rules, input, Domain::Browser).is_some(), "input: {input}");
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let rules = compile_rules(&[rule! { pattern: r"firefox/([\d.]+)", name: "Firefox" }]).unwrap();
        assert!(first_match(&rules, "Mozilla/5.0 FIREFOX/115.0", Domain::Browser).is_some());
    }

    #[test]
    fn first_version_condition_wins() {
        let rules = compile_rules(&[rule! {
            pattern: r"Trident/([\d.]+)",
            name: "Internet Explorer",
            version: "$1",
            versions: [(r"Trident/7", "11.0"), (r"Trident/6", "10.0")],
        }])
        .unwrap();

        let hit = first_match(&rules, "Mozilla/5.0 (Trident/7.0; rv:11.0)", Domain::Browser).unwrap();
        assert_eq!(hit.fixed_version, Some("11.0"));

        let hit = first_match(&rules, "Mozilla/5.0 (Trident/5.0)", Domain::Browser).unwrap();
        assert_eq!(hit.fixed_version, None);
    }
}
