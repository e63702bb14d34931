use crate::error::ScrapeError;
use crate::request::SearchModifier;

/// Source of raw search responses and game titles.
///
/// [`crate::HltbClient`] is the HTTP implementation; tests and offline tools
/// can supply canned responses instead.
#[allow(async_fn_in_trait)]
pub trait CatalogTransport {
    /// Raw JSON body of one search results page.
    async fn search_raw(
        &self,
        game_name: &str,
        modifier: SearchModifier,
        page: u32,
    ) -> Result<String, ScrapeError>;

    /// Display title of a game, `None` if the page has none.
    async fn game_title(&self, game_id: i64) -> Result<Option<String>, ScrapeError>;
}
