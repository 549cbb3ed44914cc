extern crate self as uascope;

use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod cache;
mod engine;
mod error;
mod hints;
mod normalize;
mod record;
mod rules;

pub use api::{Detection, DetectionDetails, Detector, parse, parse_with_hints};
pub use cache::{ClientCache, LruClientCache, NullCache};
pub use error::RuleError;
pub use hints::{Brand, ClientHints};
pub use normalize::{UaHash, truncate_version, ua_hash};
pub use record::ClientRecord;
pub use rules::DefaultRules;

// --- Rule model -------------------------------------------------------------

/// Identity domains served by separate rule sets and cache slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Browser,
    Engine,
}

/// Guard prepended to every pattern: a rule may only fire at the start of the
/// input or after a non-identifier byte (plus two vendor prefixes that glue
/// tokens together). Purely non-capturing, so author-visible group numbering
/// is unchanged.
const BOUNDARY_GUARD: &str = "(?:^|[^A-Z0-9_-]|[^A-Z0-9-]_|sprd-|MZ-)";

pub(crate) fn compile_bounded(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("(?i){BOUNDARY_GUARD}(?:{pattern})"))
}

/// A literal-plus-placeholders extraction template, e.g. `"$1"` or
/// `"MxNitro $1"`. Placeholders are `$1`..`$9`, 1-based capture group
/// positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    raw: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    Literal(String),
    Group(usize),
}

impl Template {
    /// Parse a template. `$` must be followed by a digit `1`-`9`; anything
    /// else is a load-time error.
    pub fn parse(raw: &str) -> Result<Self, RuleError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = raw.chars();

        while let Some(c) = chars.next() {
            if c != '$' {
                literal.push(c);
                continue;
            }
            match chars.next() {
                Some(digit @ '1'..='9') => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Group(digit as usize - '0' as usize));
                }
                other => {
                    let reason = match other {
                        Some(c) => format!("`$` must be followed by a digit 1-9, found `{c}`"),
                        None => "`$` at end of template".to_string(),
                    };
                    return Err(RuleError::Template { template: raw.to_string(), reason });
                }
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Template { raw: raw.to_string(), segments })
    }

    /// The template text as authored.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub(crate) fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Highest capture group any placeholder references (0 for literals).
    pub(crate) fn max_group(&self) -> usize {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Group(g) => *g,
                Segment::Literal(_) => 0,
            })
            .max()
            .unwrap_or(0)
    }
}

/// A version-condition sub-rule: when its pattern also matches the input, the
/// owning rule's version template is replaced by the fixed string.
#[derive(Debug, Clone)]
pub struct VersionCondition {
    regex: Regex,
    version: String,
}

impl VersionCondition {
    pub(crate) fn matches(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

/// Rendering-engine descriptor a browser rule may carry: the line's default
/// engine plus version thresholds where the line switched engines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineSpec {
    default: Option<String>,
    versions: Vec<(u32, String)>,
}

impl EngineSpec {
    pub fn of(default: &str) -> Self {
        EngineSpec { default: Some(default.to_string()), versions: Vec::new() }
    }

    /// Engine used from browser version `threshold` onwards.
    pub fn at(mut self, threshold: u32, engine: &str) -> Self {
        self.versions.push((threshold, engine.to_string()));
        self.versions.sort_by_key(|(t, _)| *t);
        self
    }

    pub(crate) fn has_thresholds(&self) -> bool {
        !self.versions.is_empty()
    }

    /// Engine for a browser version: the greatest threshold not above the
    /// version's leading segment wins, else the default.
    pub(crate) fn engine_for(&self, version: &str) -> Option<&str> {
        let mut chosen = self.default.as_deref();
        if let Some(major) = leading_number(version) {
            for (threshold, engine) in &self.versions {
                if major >= *threshold {
                    chosen = Some(engine);
                }
            }
        }
        chosen
    }
}

fn leading_number(version: &str) -> Option<u32> {
    let digits: String = version.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Plain-data rule definition, compiled into a [`Rule`] at load time.
/// Usually built with the [`rule!`] macro.
#[derive(Debug, Clone, Default)]
pub struct RuleDef {
    /// Unanchored pattern; the boundary guard is applied during compilation.
    pub pattern: String,
    pub name: Option<String>,
    pub version: Option<String>,
    /// Ordered `(pattern, fixed_version)` sub-rules.
    pub versions: Vec<(String, String)>,
    pub engine: Option<EngineSpec>,
    pub family: Option<String>,
}

/// A compiled detection rule. Position within its rule set is its priority:
/// matching walks the set in order and the first hit wins.
pub struct Rule {
    regex: Regex,
    pattern: String,
    name: Option<Template>,
    version: Option<Template>,
    versions: Vec<VersionCondition>,
    engine: Option<EngineSpec>,
    family: Option<String>,
}

impl Rule {
    /// Compile a definition: bounded case-insensitive pattern, validated
    /// templates, compiled sub-rules. Any defect fails here, before the rule
    /// can serve traffic.
    pub fn compile(def: &RuleDef) -> Result<Rule, RuleError> {
        let regex = compile_bounded(&def.pattern)
            .map_err(|source| RuleError::Pattern { pattern: def.pattern.clone(), source })?;

        // The guard is non-capturing, so this is the author's group count.
        let group_count = regex.captures_len() - 1;
        let name = def.name.as_deref().map(Template::parse).transpose()?;
        let version = def.version.as_deref().map(Template::parse).transpose()?;
        for template in name.iter().chain(version.iter()) {
            if template.max_group() > group_count {
                return Err(RuleError::Template {
                    template: template.raw().to_string(),
                    reason: format!(
                        "references group ${} but the pattern captures {group_count}",
                        template.max_group()
                    ),
                });
            }
        }

        let mut versions = Vec::with_capacity(def.versions.len());
        for (pattern, fixed) in &def.versions {
            let regex = compile_bounded(pattern)
                .map_err(|source| RuleError::Pattern { pattern: pattern.clone(), source })?;
            versions.push(VersionCondition { regex, version: fixed.clone() });
        }

        Ok(Rule {
            regex,
            pattern: def.pattern.clone(),
            name,
            version,
            versions,
            engine: def.engine.clone(),
            family: def.family.clone(),
        })
    }

    /// The pattern as authored, without the boundary guard.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }

    pub(crate) fn name_template(&self) -> Option<&Template> {
        self.name.as_ref()
    }

    pub(crate) fn version_template(&self) -> Option<&Template> {
        self.version.as_ref()
    }

    pub(crate) fn conditions(&self) -> &[VersionCondition] {
        &self.versions
    }

    pub(crate) fn engine_spec(&self) -> Option<&EngineSpec> {
        self.engine.as_ref()
    }

    pub(crate) fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("pattern", &self.pattern)
            .field("name", &self.name.as_ref().map(Template::raw))
            .field("version", &self.version.as_ref().map(Template::raw))
            .finish()
    }
}

/// Compile an ordered definition list, preserving priority order.
pub fn compile_rules(defs: &[RuleDef]) -> Result<Vec<Rule>, RuleError> {
    defs.iter().map(Rule::compile).collect()
}

/// Supplies compiled, priority-ordered rule sets per identity domain.
///
/// Implementations must be fully built before the first parse; the engine
/// never mutates rules afterwards, which is what makes a detector shareable
/// across threads.
pub trait RuleSource: Send + Sync {
    fn rules(&self, domain: Domain) -> &[Rule];
}
