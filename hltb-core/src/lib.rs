//! Matching core for HowLongToBeat searches: name similarity scoring,
//! record normalization and result filtering. Everything here is
//! synchronous and free of I/O.

pub mod entry;
pub mod error;
pub mod parser;
pub mod query;
pub mod record;
pub mod similarity;

pub use entry::{GameEntry, LinkPrefixes, UNSCORED, UNSET_ID, normalize};
pub use error::ParseError;
pub use parser::{
    best_match, filter_and_rank, filter_and_rank_with, parse_envelope, parse_search_result,
    parse_search_value,
};
pub use query::{DEFAULT_MIN_SIMILARITY, SearchMode, SearchQuery};
pub use record::{CatalogRecord, SearchEnvelope};
pub use similarity::{NUMBER_MISMATCH_PENALTY, numeric_tokens, similar};
