//! Canonical game entries built from raw catalog records.
//!
//! Only the commonly used values are lifted into typed fields; everything
//! else can still be read from [`GameEntry::json_content`]. Some values may
//! be missing since the catalog adds and removes fields over time, and not
//! every completion time applies to every game.

use serde::Serialize;

use crate::query::SearchQuery;
use crate::record::{self, CatalogRecord};
use crate::similarity::similar;

/// Id given to records that don't carry a usable `game_id`.
pub const UNSET_ID: i64 = -1;

/// Similarity of an entry that hasn't been scored yet.
pub const UNSCORED: f64 = -1.0;

pub const GAME_URL_PREFIX: &str = "https://howlongtobeat.com/game/";
pub const IMAGE_URL_PREFIX: &str = "https://howlongtobeat.com/games/";

/// URL prefixes used to build an entry's web link and image URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPrefixes {
    pub game: String,
    pub image: String,
}

impl LinkPrefixes {
    /// Prefixes relative to a site root such as `https://howlongtobeat.com/`.
    pub fn from_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            game: format!("{base}/game/"),
            image: format!("{base}/games/"),
        }
    }
}

impl Default for LinkPrefixes {
    fn default() -> Self {
        Self {
            game: GAME_URL_PREFIX.to_string(),
            image: IMAGE_URL_PREFIX.to_string(),
        }
    }
}

/// One game (or DLC) from a search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameEntry {
    /// HowLongToBeat game id, [`UNSET_ID`] if the record had none
    pub game_id: i64,
    pub game_name: Option<String>,
    /// Second name for the same game
    pub game_alias: Option<String>,
    /// Usually "game" or "dlc"
    pub game_type: Option<String>,
    pub game_image_url: Option<String>,
    pub game_web_link: Option<String>,
    pub review_score: Option<f64>,
    pub profile_dev: Option<String>,
    pub profile_platforms: Option<Vec<String>>,
    /// Release year, as text
    pub release_world: Option<String>,
    /// Max of the query's similarity to `game_name` and `game_alias`
    pub similarity: f64,
    /// The record this entry was built from
    pub json_content: CatalogRecord,
    /// Completion times in hours
    pub main_story: Option<f64>,
    pub main_extra: Option<f64>,
    pub completionist: Option<f64>,
    pub all_styles: Option<f64>,
}

impl GameEntry {
    /// Similarity of `query` to this entry: the better of its two names.
    pub fn score(&self, query: &SearchQuery) -> f64 {
        let by_name = similar(
            Some(query.name()),
            self.game_name.as_deref(),
            query.numbers(),
            query.match_case(),
        );
        let by_alias = similar(
            Some(query.name()),
            self.game_alias.as_deref(),
            query.numbers(),
            query.match_case(),
        );
        by_name.max(by_alias)
    }

    pub fn with_similarity(mut self, similarity: f64) -> Self {
        self.similarity = similarity;
        self
    }

    pub fn is_scored(&self) -> bool {
        self.similarity != UNSCORED
    }
}

/// Build a [`GameEntry`] from one catalog record.
///
/// Optional fields are filled only when their key is present in the record;
/// a key present with `null` is still "present". The returned entry is
/// [`UNSCORED`].
pub fn normalize(record: &CatalogRecord, game_url_prefix: &str, image_url_prefix: &str) -> GameEntry {
    let game_id = record.id().unwrap_or(UNSET_ID);
    if game_id == UNSET_ID {
        log::debug!("Catalog record has no usable {}", record::KEY_ID);
    }

    let game_image_url = if record.has(record::KEY_IMAGE) {
        Some(format!(
            "{}{}",
            image_url_prefix,
            record.text(record::KEY_IMAGE).unwrap_or_default()
        ))
    } else {
        None
    };

    let profile_platforms = if record.has(record::KEY_PLATFORMS) {
        let platforms = record.text(record::KEY_PLATFORMS);
        if platforms.is_none() {
            log::debug!("Ignoring non-text {} in record {game_id}", record::KEY_PLATFORMS);
        }
        platforms.map(|p| split_platforms(&p))
    } else {
        None
    };

    GameEntry {
        game_id,
        game_name: record.text(record::KEY_NAME),
        game_alias: record.text(record::KEY_ALIAS),
        game_type: record.text(record::KEY_TYPE),
        game_image_url,
        game_web_link: Some(format!("{game_url_prefix}{game_id}")),
        review_score: record.number(record::KEY_REVIEW_SCORE),
        profile_dev: record.text(record::KEY_DEVELOPER),
        profile_platforms,
        release_world: record.text(record::KEY_RELEASE_YEAR),
        similarity: UNSCORED,
        json_content: record.clone(),
        main_story: duration_hours(record, record::KEY_MAIN_STORY),
        main_extra: duration_hours(record, record::KEY_MAIN_EXTRA),
        completionist: duration_hours(record, record::KEY_COMPLETIONIST),
        all_styles: duration_hours(record, record::KEY_ALL_STYLES),
    }
}

/// Split a platform list on exactly `", "`. A bare comma does not split.
pub fn split_platforms(platforms: &str) -> Vec<String> {
    platforms.split(", ").map(str::to_string).collect()
}

/// A completion time in hours, or `None` if the key is absent.
/// A present `null` counts as zero seconds.
fn duration_hours(record: &CatalogRecord, key: &str) -> Option<f64> {
    if !record.has(key) {
        return None;
    }
    Some(seconds_to_hours(record.number(key).unwrap_or(0.0)))
}

/// Convert seconds to hours rounded to 2 decimals, halves away from zero.
///
/// Rounds `seconds / 36` (hundredths of an hour) so that exact halves such
/// as 18 seconds survive the division.
pub fn seconds_to_hours(seconds: f64) -> f64 {
    (seconds / 36.0).round() / 100.0
}

#[cfg(test)]
#[path = "tests/entry_tests.rs"]
mod tests;
