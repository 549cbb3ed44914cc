use serde::{Deserialize, Serialize};

use crate::rules::tables;

/// The identity resolved for one input, with a fixed field set.
///
/// Every field is always present; absence is the empty string. Records are
/// plain value types: the cache stores them by value and hands out clones, so
/// a record is never mutated after it has been published.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Display name, e.g. `"Chrome Mobile"`.
    pub name: String,
    /// Normalized version, e.g. `"112.0"`. Empty when the name is empty.
    pub version: String,
    /// Short identifier from the brand tables, e.g. `"CM"`.
    pub short_name: String,
    /// Browser family, e.g. `"Chrome"`.
    pub family: String,
    /// Rendering engine name, e.g. `"Blink"`.
    pub engine: String,
    /// Rendering engine version.
    pub engine_version: String,
    /// Reverse-DNS application identifier, e.g. `"com.example.reader"`.
    pub app_id: String,
    /// Embedded application identity found inside a container browser.
    pub secondary_client: Option<Box<ClientRecord>>,
    /// Whether a rule matched or a client-hint identity was adopted.
    pub known: bool,
}

impl ClientRecord {
    /// True when nothing at all was resolved for the input.
    pub fn is_unknown(&self) -> bool {
        !self.known && self.name.is_empty() && self.app_id.is_empty()
    }

    /// True when the short identifier names a browser that only ships on
    /// mobile platforms.
    pub fn mobile_only(&self) -> bool {
        tables::mobile_only(&self.short_name)
    }

    pub(crate) fn attach_secondary(&mut self, secondary: Option<ClientRecord>) {
        self.secondary_client = secondary.map(Box::new);
    }
}
