use serde::Serialize;

/// Results per search page.
pub const PAGE_SIZE: u32 = 20;

/// The "Modifiers" option of a search: show, isolate or hide DLCs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SearchModifier {
    #[default]
    #[serde(rename = "")]
    None,
    /// Only DLCs in the result
    #[serde(rename = "only_dlc")]
    IsolateDlc,
    /// No DLCs in the result
    #[serde(rename = "hide_dlc")]
    HideDlc,
}

impl SearchModifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchModifier::None => "",
            SearchModifier::IsolateDlc => "only_dlc",
            SearchModifier::HideDlc => "hide_dlc",
        }
    }
}

impl std::fmt::Display for SearchModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Body of a POST to the search endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub search_type: &'static str,
    pub search_terms: Vec<String>,
    pub search_page: u32,
    pub size: u32,
    pub search_options: SearchOptions,
}

impl SearchRequest {
    /// Build the payload for one page of results. Terms are the query split
    /// on single spaces, exactly as the site's own search box sends them.
    pub fn new(game_name: &str, modifier: SearchModifier, page: u32) -> Self {
        Self {
            search_type: "games",
            search_terms: game_name.split(' ').map(str::to_string).collect(),
            search_page: page,
            size: PAGE_SIZE,
            search_options: SearchOptions {
                games: GameOptions {
                    user_id: 0,
                    platform: String::new(),
                    sort_category: "popular",
                    range_category: "main",
                    range_time: RangeTime { min: 0, max: 0 },
                    gameplay: Gameplay::default(),
                    modifier,
                },
                users: UserOptions {
                    sort_category: "postcount",
                },
                filter: String::new(),
                sort: 0,
                randomizer: 0,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchOptions {
    pub games: GameOptions,
    pub users: UserOptions,
    pub filter: String,
    pub sort: u32,
    pub randomizer: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOptions {
    pub user_id: u64,
    pub platform: String,
    pub sort_category: &'static str,
    pub range_category: &'static str,
    pub range_time: RangeTime,
    pub gameplay: Gameplay,
    pub modifier: SearchModifier,
}

#[derive(Debug, Clone, Serialize)]
pub struct RangeTime {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Gameplay {
    pub perspective: String,
    pub flow: String,
    pub genre: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOptions {
    pub sort_category: &'static str,
}

#[cfg(test)]
#[path = "tests/request_tests.rs"]
mod tests;
