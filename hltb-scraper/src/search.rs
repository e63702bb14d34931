use hltb_core::{DEFAULT_MIN_SIMILARITY, GameEntry, LinkPrefixes, SearchQuery, parser};

use crate::error::ScrapeError;
use crate::request::SearchModifier;
use crate::settings::Settings;
use crate::transport::CatalogTransport;

/// Entry point for HowLongToBeat lookups: fetches results through a
/// [`CatalogTransport`] and filters them by name similarity or id.
pub struct HowLongToBeat<T> {
    transport: T,
    min_similarity: f64,
    prefixes: LinkPrefixes,
}

impl<T: CatalogTransport> HowLongToBeat<T> {
    /// Search with the default minimum similarity.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            min_similarity: DEFAULT_MIN_SIMILARITY,
            prefixes: LinkPrefixes::default(),
        }
    }

    /// Take the minimum similarity and link prefixes from `settings`.
    pub fn with_settings(transport: T, settings: &Settings) -> Self {
        Self {
            transport,
            min_similarity: settings.min_similarity,
            prefixes: LinkPrefixes::from_base_url(&settings.base_url),
        }
    }

    /// Minimum similarity for name searches. 0 returns every result;
    /// 1 means perfectly equal and should not be used.
    pub fn with_min_similarity(mut self, min_similarity: f64) -> Self {
        self.min_similarity = min_similarity;
        self
    }

    pub fn min_similarity(&self) -> f64 {
        self.min_similarity
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Search games by name.
    ///
    /// Returns `Ok(None)` for an empty name. Otherwise the entries whose
    /// name or alias is similar enough to `game_name`, in the site's order.
    pub async fn search(
        &self,
        game_name: &str,
        modifier: SearchModifier,
        match_case: bool,
    ) -> Result<Option<Vec<GameEntry>>, ScrapeError> {
        if game_name.is_empty() {
            return Ok(None);
        }

        let body = self.transport.search_raw(game_name, modifier, 1).await?;
        let query = SearchQuery::by_name(game_name, self.min_similarity, match_case);
        Ok(Some(self.parse(&body, &query)?))
    }

    /// Look a game up by id.
    ///
    /// Resolves the id to its title, searches that title, and keeps only the
    /// entry with the same id. Needs two requests. Returns `Ok(None)` for a
    /// non-positive id, an unknown title, or anything other than exactly one
    /// matching entry.
    pub async fn search_from_id(&self, game_id: i64) -> Result<Option<GameEntry>, ScrapeError> {
        if game_id <= 0 {
            return Ok(None);
        }

        let Some(title) = self.transport.game_title(game_id).await? else {
            log::debug!("No title found for game {}", game_id);
            return Ok(None);
        };

        let body = self
            .transport
            .search_raw(&title, SearchModifier::None, 1)
            .await?;
        let query = SearchQuery::by_id(title, game_id);
        let mut results = self.parse(&body, &query)?;

        if results.len() != 1 {
            log::debug!(
                "Expected one result for game {}, got {}",
                game_id,
                results.len()
            );
            return Ok(None);
        }
        Ok(results.pop())
    }

    fn parse(&self, body: &str, query: &SearchQuery) -> Result<Vec<GameEntry>, ScrapeError> {
        let envelope = parser::parse_envelope(body)?;
        Ok(parser::filter_and_rank_with(
            &envelope.data,
            query,
            &self.prefixes,
        ))
    }
}
