//! Turns a catalog search response into the list of matching entries.

use serde_json::Value;

use crate::entry::{GameEntry, LinkPrefixes, UNSET_ID, normalize};
use crate::error::ParseError;
use crate::query::{SearchMode, SearchQuery};
use crate::record::{CatalogRecord, SearchEnvelope};

/// Parse a raw response body. Malformed JSON, or a body without a `data`
/// array of objects, fails the whole batch.
pub fn parse_envelope(text: &str) -> Result<SearchEnvelope, ParseError> {
    Ok(serde_json::from_str(text)?)
}

/// Parse a raw response body and filter it against `query`.
pub fn parse_search_result(text: &str, query: &SearchQuery) -> Result<Vec<GameEntry>, ParseError> {
    let envelope = parse_envelope(text)?;
    Ok(filter_and_rank(&envelope.data, query))
}

/// Same as [`parse_search_result`] for an already decoded document.
pub fn parse_search_value(value: Value, query: &SearchQuery) -> Result<Vec<GameEntry>, ParseError> {
    let envelope: SearchEnvelope = serde_json::from_value(value)?;
    Ok(filter_and_rank(&envelope.data, query))
}

/// Normalize and score every record, keeping those `query` accepts.
///
/// Results keep the catalog's order; nothing is sorted here.
pub fn filter_and_rank(records: &[CatalogRecord], query: &SearchQuery) -> Vec<GameEntry> {
    filter_and_rank_with(records, query, &LinkPrefixes::default())
}

/// [`filter_and_rank`] with explicit link prefixes.
pub fn filter_and_rank_with(
    records: &[CatalogRecord],
    query: &SearchQuery,
    prefixes: &LinkPrefixes,
) -> Vec<GameEntry> {
    let results: Vec<GameEntry> = records
        .iter()
        .filter_map(|record| {
            let entry = normalize(record, &prefixes.game, &prefixes.image);
            let similarity = entry.score(query);
            let entry = entry.with_similarity(similarity);
            if accepts(query, &entry) {
                Some(entry)
            } else {
                log::debug!(
                    "Rejected {} ({:?}) with similarity {:.3}",
                    entry.game_id,
                    entry.game_name,
                    entry.similarity
                );
                None
            }
        })
        .collect();

    log::debug!(
        "Kept {} of {} results for '{}'",
        results.len(),
        records.len(),
        query.name()
    );
    results
}

/// Whether a scored entry passes the query's acceptance rule.
pub fn accepts(query: &SearchQuery, entry: &GameEntry) -> bool {
    match query.mode() {
        // Records without an id never answer an id search.
        SearchMode::ExactId(target) => {
            entry.game_id != UNSET_ID && entry.game_id.to_string() == target.to_string()
        }
        SearchMode::Threshold(min) if min == 0.0 => true,
        SearchMode::Threshold(min) => entry.similarity >= min,
    }
}

/// The entry with the highest similarity; the earliest one wins ties.
pub fn best_match(entries: &[GameEntry]) -> Option<&GameEntry> {
    entries.iter().fold(None, |best: Option<&GameEntry>, entry| match best {
        Some(b) if b.similarity >= entry.similarity => Some(b),
        _ => Some(entry),
    })
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod tests;
