use std::sync::Arc;
use std::time::{Duration, Instant};

use once_cell::sync::Lazy;

use crate::RuleSource;
use crate::cache::{ClientCache, LruClientCache};
use crate::engine::Pipeline;
use crate::hints::ClientHints;
use crate::record::ClientRecord;
use crate::rules::DefaultRules;

static DEFAULT_DETECTOR: Lazy<Detector> = Lazy::new(Detector::new);

/// Result from [`parse`], [`parse_with_hints`] and the [`Detector`] methods.
#[derive(Debug, Clone)]
pub struct Detection {
    /// The input text as supplied.
    pub text: String,
    /// The resolved client identity.
    pub client: ClientRecord,
    /// Total elapsed time for this call, cache lookups included.
    pub elapsed: Duration,
    /// Trace of how the result came to be. Only the verbose path fills this;
    /// the plain one leaves it `None` and allocates nothing extra.
    pub details: Option<DetectionDetails>,
}

/// Additional details returned by [`Detector::parse_verbose`].
///
/// This is intentionally compact: it is meant for debugging a surprising
/// result without dumping the engine's internal state.
#[derive(Debug, Clone)]
pub struct DetectionDetails {
    /// Whether the result came straight from the cache.
    pub cache_hit: bool,
    /// The pattern of the rule that fired, as authored (no boundary guard).
    pub matched_pattern: Option<String>,
    /// Which reconciliation arm combined text and hint identities.
    pub reconciliation: &'static str,
    /// Which extraction strategy found an embedded application, if any.
    pub secondary_strategy: Option<&'static str>,
}

/// A configured detection entry point: a rule source plus a cache.
///
/// Detectors are cheap to clone and safe to share across threads; both
/// halves sit behind `Arc`s. The free [`parse`] functions use one process
/// wide detector with the built-in rules and an LRU cache.
#[derive(Clone)]
pub struct Detector {
    rules: Arc<dyn RuleSource>,
    cache: Arc<dyn ClientCache>,
}

impl Detector {
    /// Built-in rules and a fresh LRU cache of the default capacity.
    pub fn new() -> Self {
        Self::with(DefaultRules::shared(), Arc::new(LruClientCache::default()))
    }

    /// A detector over caller-supplied rules and cache.
    pub fn with(rules: Arc<dyn RuleSource>, cache: Arc<dyn ClientCache>) -> Self {
        Detector { rules, cache }
    }

    /// Resolve `text` with no client hints.
    pub fn parse(&self, text: &str) -> Detection {
        self.run(text, None, false)
    }

    /// Resolve `text` together with client-hint headers. Hints that carry
    /// nothing are treated the same as absent ones.
    pub fn parse_with_hints(&self, text: &str, hints: &ClientHints) -> Detection {
        self.run(text, Some(hints), false)
    }

    /// Like the plain calls, but with [`Detection::details`] filled in.
    pub fn parse_verbose(&self, text: &str, hints: Option<&ClientHints>) -> Detection {
        self.run(text, hints, true)
    }

    fn run(&self, text: &str, hints: Option<&ClientHints>, verbose: bool) -> Detection {
        let hints = hints.filter(|h| !h.is_empty());
        let started = Instant::now();
        let pipeline = Pipeline { rules: self.rules.as_ref(), cache: self.cache.as_ref() };
        let outcome = pipeline.run(text, hints);
        let elapsed = started.elapsed();

        Detection {
            text: text.to_string(),
            client: outcome.record,
            elapsed,
            details: if verbose {
                Some(DetectionDetails {
                    cache_hit: outcome.cache_hit,
                    matched_pattern: outcome.matched_pattern,
                    reconciliation: outcome.reconciliation,
                    secondary_strategy: outcome.secondary_strategy,
                })
            } else {
                None
            },
        }
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve `text` using the process-wide default detector.
///
/// # Example
/// ```
/// use uascope::parse;
///
/// let out = parse(
///     "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
///      (KHTML, like Gecko) Chrome/119.0.6045.123 Safari/537.36",
/// );
/// assert_eq!(out.client.name, "Chrome");
/// ```
pub fn parse(text: &str) -> Detection {
    DEFAULT_DETECTOR.parse(text)
}

/// Resolve `text` together with client-hint headers, using the process-wide
/// default detector.
pub fn parse_with_hints(text: &str, hints: &ClientHints) -> Detection {
    DEFAULT_DETECTOR.parse_with_hints(text, hints)
}
