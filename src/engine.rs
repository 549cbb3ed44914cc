//! Detection engine.
//!
//! This module is the internal entry point for client detection. The engine is
//! split into focused submodules under `src/engine/`, wired together by the
//! [`browser::Pipeline`].
//!
//! ## How the parts work together
//!
//! At a high level, one detection run is a pipeline:
//!
//! ```text
//! raw text ── normalize::clean ──┐
//!                                │
//! client hints ── HintIdentity ──┼──────────────┐
//!   (hints.rs)                   v              │
//!                          cache lookup         │
//!                                │ miss         v
//!                          first_match ──▶ extract ──▶ reconcile
//!                          (matcher.rs)  (extract.rs) (reconcile.rs)
//!                                                         │
//!                                                         v
//!                                rendering-engine resolution (rendering.rs)
//!                                                         │
//!                                                         v
//!                              secondary client + app id (secondary.rs,
//!                                                         │  pairs.rs, app_id.rs)
//!                                                         v
//!                                            ClientRecord (+ cache store)
//! ```
//!
//! The cascade is strictly first-match: rule order within a set is the
//! priority order, and nothing past the first hit runs. Everything downstream
//! of the cascade only rewrites fields on the record; no step re-enters
//! matching except the dedicated rendering-engine cascade over its own set.
//!
//! ## Responsibilities by module
//!
//! - `matcher.rs`: first-match walk over an ordered, boundary-guarded rule set.
//! - `extract.rs`: template interpolation, version normalization, and the
//!   embedded-application name extractors.
//! - `reconcile.rs`: merges the UA-derived record with client-hint identity.
//! - `rendering.rs`: rendering-engine name/version resolution (rule-carried
//!   descriptors, the engine rule cascade, bounded text extraction).
//! - `pairs.rs`: token/version pair scanner over the raw text.
//! - `secondary.rs`: embedded-application detection inside container browsers.
//! - `app_id.rs`: reverse-DNS application-identifier extraction.
//! - `browser.rs`: the pipeline that strings the steps together and talks to
//!   the cache.
//!
//! ## Public surface
//!
//! Everything here is crate-internal; `api.rs` exposes [`crate::Detector`] on
//! top of [`browser::Pipeline`].
//!
//! ## Debugging
//!
//! Set `UASCOPE_DEBUG_RULES=1` to print which rule fired, which reconciliation
//! arm ran, and cache hits.

#[path = "engine/app_id.rs"]
pub(crate) mod app_id;
#[path = "engine/browser.rs"]
pub(crate) mod browser;
#[path = "engine/extract.rs"]
pub(crate) mod extract;
#[path = "engine/matcher.rs"]
pub(crate) mod matcher;
#[path = "engine/pairs.rs"]
pub(crate) mod pairs;
#[path = "engine/reconcile.rs"]
pub(crate) mod reconcile;
#[path = "engine/rendering.rs"]
pub(crate) mod rendering;
#[path = "engine/secondary.rs"]
pub(crate) mod secondary;

#[allow(unused_imports)]
pub(crate) use browser::{Outcome, Pipeline};

/// Trace gate shared by the pipeline stages.
pub(crate) fn debug_rules() -> bool {
    std::env::var_os("UASCOPE_DEBUG_RULES").is_some()
}
