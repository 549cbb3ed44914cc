//! Input preparation: cleaning, content hashing, and version helpers.
//!
//! Every parse works from three derived forms of the raw text: a cleaned
//! string (what the matchers see), a lowercase spaceless variant (what the
//! app-directory lookups see), and a content hash (what the cache is keyed
//! by). All three are computed once per call and carried together.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::hints::ClientHints;

/// Content hash identifying one (text, client hints) input pair.
///
/// Two inputs with the same hash are treated as identical by the cache, so
/// the hash covers the hint data as well as the text.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct UaHash([u8; 32]);

impl UaHash {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for UaHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter().take(6) {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for UaHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UaHash({self})")
    }
}

/// Hash the raw text together with any client-hint data.
///
/// Fields are length-prefixed so adjacent values cannot collide by
/// concatenation.
pub fn ua_hash(text: &str, hints: Option<&ClientHints>) -> UaHash {
    let mut hasher = Sha256::new();
    update_field(&mut hasher, text.as_bytes());
    if let Some(hints) = hints {
        for brand in &hints.brands {
            update_field(&mut hasher, brand.name.as_bytes());
            update_field(&mut hasher, brand.version.as_bytes());
        }
        update_field(&mut hasher, hints.app_id.as_bytes());
    }
    UaHash(hasher.finalize().into())
}

fn update_field(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}

/// Trim, drop control bytes, and resolve percent-encoding (log exports often
/// store user agents URL-encoded).
pub(crate) fn clean(text: &str) -> String {
    let decoded = if text.contains('%') { percent_decode(text) } else { text.to_string() };
    let stripped: String = decoded.chars().filter(|c| !c.is_control()).collect();
    stripped.trim().to_string()
}

/// Lowercased text with all spaces removed, for whole-string directory lookups.
pub(crate) fn spaceless(text: &str) -> String {
    text.to_lowercase().replace(' ', "")
}

fn percent_decode(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    // A decode that breaks UTF-8 means the input was not actually encoded.
    String::from_utf8(out).unwrap_or_else(|_| text.to_string())
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Reduce a version string to its leading segments.
///
/// `keep_segments == -1` returns the input unchanged. Underscores count as
/// segment separators. An input that already has exactly `keep_segments + 1`
/// segments is returned whole; otherwise the first `max(1, keep_segments)`
/// segments are kept.
pub fn truncate_version(version: &str, keep_segments: i32) -> String {
    if keep_segments < 0 {
        return version.to_string();
    }
    let keep = keep_segments as usize;

    let normalized = version.replace('_', ".");
    let segments: Vec<&str> = normalized.split('.').collect();
    if segments.len() == keep + 1 {
        return version.to_string();
    }

    let take = keep.max(1).min(segments.len());
    segments[..take].join(".")
}

/// Screens for inputs that cannot possibly carry an identity: bare version
/// strings, build numbers, and UUID droppings. Hints may still name a client,
/// so the screen only short-circuits hintless parses.
pub(crate) fn is_worthless(text: &str) -> bool {
    only_numerals_and_punctuation(text) || mostly_numerals(text) || uuid_like(text) || gibberish(text)
}

// e.g. "21/4.35.1.2" or "5.0.6": nothing to learn once punctuation goes.
fn only_numerals_and_punctuation(text: &str) -> bool {
    text.chars().all(|c| !c.is_alphabetic())
}

// e.g. "15B93": build numbers that are digits with a stray letter or two.
fn mostly_numerals(text: &str) -> bool {
    let mut total = 0usize;
    let mut digits = 0usize;
    for c in text.chars().filter(|c| c.is_alphanumeric()) {
        total += 1;
        if c.is_ascii_digit() {
            digits += 1;
        }
    }
    digits > 0 && digits * 4 >= total * 3
}

// "{1378F00B-BCEA-418F-B1AF-C343EA4F9417}" or "A:08338459-4ca1-457f-a596-94c3a9037d20"
fn uuid_like(text: &str) -> bool {
    let trimmed = text.trim_matches(|c| matches!(c, '(' | ')' | '{' | '}'));
    let mut chars = trimmed.chars();
    let body = match (chars.next(), chars.next()) {
        (Some(first), Some(':')) if first.is_ascii_alphanumeric() => chars.as_str(),
        _ => trimmed,
    };
    regex!(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").is_match(body)
}

// Serial-number blocks ("ABCD-EFGH-IJKL-MNOP") and long digit-led tokens.
fn gibberish(text: &str) -> bool {
    regex!(r"(?i)(\w{4,10}-){3}\w{4,10}$").is_match(text)
        || regex!(r"(?i)^\d[\d\w]{20,40}$").is_match(text)
}
