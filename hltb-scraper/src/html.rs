//! Text extraction from HowLongToBeat pages and script bundles.
//!
//! The search endpoint is suffixed with a key that only appears inside the
//! site's Next.js bundles, so it has to be scraped out of them.

use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<script\b[^>]*?\bsrc\s*=\s*["']([^"']+)["']"#).expect("valid regex")
});

static API_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"/api/search/"\.concat\("([a-zA-Z0-9]+)"\)"#).expect("valid regex")
});

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<title>(.*)</title>").expect("valid regex"));

/// Length of `"How long is "` at the start of a game page title.
const TITLE_PREFIX_LEN: usize = 12;
/// Length of `"? | HowLongToBeat"` at the end of a game page title.
const TITLE_SUFFIX_LEN: usize = 17;

/// Every `<script src=...>` in the page, in document order.
pub fn script_sources(html: &str) -> Vec<String> {
    SCRIPT_SRC
        .captures_iter(html)
        .map(|c| c[1].to_string())
        .collect()
}

/// Sources of the main app bundle, which normally holds the key.
pub fn app_script_sources(html: &str) -> Vec<String> {
    script_sources(html)
        .into_iter()
        .filter(|src| src.contains("_app-"))
        .collect()
}

/// The search API key embedded in a script bundle.
pub fn extract_api_key(script: &str) -> Option<String> {
    API_KEY.captures(script).map(|c| c[1].to_string())
}

/// The game name from a game page's `<title>How long is X? | HowLongToBeat</title>`.
///
/// Returns `None` for an empty page or a page without a title.
pub fn cut_game_title(html: &str) -> Option<String> {
    if html.is_empty() {
        return None;
    }
    let title = TITLE.captures(html)?.get(1)?.as_str();
    let chars: Vec<char> = title.chars().collect();
    let end = chars.len().saturating_sub(TITLE_SUFFIX_LEN);
    if end <= TITLE_PREFIX_LEN {
        return Some(String::new());
    }
    Some(chars[TITLE_PREFIX_LEN..end].iter().collect())
}

#[cfg(test)]
#[path = "tests/html_tests.rs"]
mod tests;
