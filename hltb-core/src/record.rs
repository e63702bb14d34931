//! Raw catalog records as returned by the HowLongToBeat search API.
//!
//! The catalog schema is not ours, so records stay as loose JSON objects.
//! Accessors distinguish a key that is absent from one that is present with
//! a `null` value; the normalizer relies on that distinction.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const KEY_ID: &str = "game_id";
pub const KEY_NAME: &str = "game_name";
pub const KEY_ALIAS: &str = "game_alias";
pub const KEY_TYPE: &str = "game_type";
pub const KEY_IMAGE: &str = "game_image";
pub const KEY_REVIEW_SCORE: &str = "review_score";
pub const KEY_DEVELOPER: &str = "profile_dev";
pub const KEY_PLATFORMS: &str = "profile_platform";
pub const KEY_RELEASE_YEAR: &str = "release_world";
pub const KEY_MAIN_STORY: &str = "comp_main";
pub const KEY_MAIN_EXTRA: &str = "comp_plus";
pub const KEY_COMPLETIONIST: &str = "comp_100";
pub const KEY_ALL_STYLES: &str = "comp_all";

/// Top-level search response: `{ "data": [ ... ] }`.
///
/// Any other top-level keys (counts, paging info) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchEnvelope {
    pub data: Vec<CatalogRecord>,
}

/// One game object from the `data` array, kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogRecord(Map<String, Value>);

impl CatalogRecord {
    /// Whether the catalog sent this key at all, regardless of its value.
    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// The numeric game id, if present and integral.
    ///
    /// Ids sent as strings or as whole floats (`5.0`) are accepted, since
    /// the catalog has not always been consistent about the type.
    pub fn id(&self) -> Option<i64> {
        match self.0.get(KEY_ID)? {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// A string field. Numbers are rendered as text; `null` and other types
    /// read as absent.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
