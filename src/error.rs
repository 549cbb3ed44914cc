use thiserror::Error;

/// Errors raised while compiling rule definitions.
///
/// These are load-time failures: a rule set that produces one of these must
/// never be installed into a detector. Matching itself is infallible; an input
/// no rule matches simply yields an unknown record.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RuleError {
    /// The main pattern or a version-condition pattern failed to compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    Pattern {
        /// The pattern text as authored (without the boundary guard).
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A name or version template is malformed or references a capture group
    /// the pattern does not define.
    #[error("invalid template `{template}`: {reason}")]
    Template {
        /// The template text as authored.
        template: String,
        /// What is wrong with it.
        reason: String,
    },
}
