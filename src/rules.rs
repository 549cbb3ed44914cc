//! The built-in rulebook.
//!
//! Everything the engine knows about concrete clients lives under
//! `src/rules/`: the ordered regex cascades plus the lookup tables the
//! pipeline consults around them.
//!
//! - `browsers.rs`: the browser cascade. Order is priority; the first rule
//!   whose pattern matches wins, so specific clients (forks, mobile editions,
//!   embedded webviews) must sit above the engines they are built on.
//! - `engines.rs`: the rendering-engine cascade, consulted only when no
//!   browser rule carried an engine descriptor.
//! - `tables.rs`: short-code, family, mobile-only, container-browser and
//!   hint-brand tables.
//! - `apps.rs`: the application directory (known apps, app ids, discard
//!   lists) backing fallback and secondary detection.
//!
//! ## Adding a rule
//!
//! Append a `rule!` entry to the right spot in the cascade, then give the
//! client a short code in `tables.rs` if it should carry one. Definitions are
//! compiled and validated by [`DefaultRules::load`]; a bad pattern or a
//! template referencing a capture group the pattern does not define is
//! reported as a [`RuleError`] before the set can be installed.

#[path = "rules/apps.rs"]
pub(crate) mod apps;
#[path = "rules/browsers.rs"]
pub(crate) mod browsers;
#[path = "rules/engines.rs"]
pub(crate) mod engines;
#[path = "rules/tables.rs"]
pub(crate) mod tables;

#[cfg(test)]
#[path = "rules/tests.rs"]
mod tests;

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::RuleError;
use crate::{Domain, Rule, RuleSource, compile_rules};

/// The rule sets shipped with the crate, compiled and ready to match.
pub struct DefaultRules {
    browsers: Vec<Rule>,
    engines: Vec<Rule>,
}

impl DefaultRules {
    /// Compile the built-in definitions into a ready rule source.
    pub fn load() -> Result<Self, RuleError> {
        Ok(Self {
            browsers: compile_rules(&browsers::get())?,
            engines: compile_rules(&engines::get())?,
        })
    }

    /// Process-wide compiled copy, built on first use and shared by every
    /// default detector.
    pub fn shared() -> Arc<DefaultRules> {
        static SHARED: Lazy<Arc<DefaultRules>> =
            Lazy::new(|| Arc::new(DefaultRules::load().expect("built-in rules compile")));
        Arc::clone(&SHARED)
    }
}

impl RuleSource for DefaultRules {
    fn rules(&self, domain: Domain) -> &[Rule] {
        match domain {
            Domain::Browser => &self.browsers,
            Domain::Engine => &self.engines,
        }
    }
}
