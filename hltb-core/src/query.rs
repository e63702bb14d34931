use crate::similarity::numeric_tokens;

/// Default minimum similarity for name searches. 0 keeps every result;
/// 1 would require a perfect match and is not useful in practice.
pub const DEFAULT_MIN_SIMILARITY: f64 = 0.4;

/// How search results are accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchMode {
    /// Keep entries whose similarity is at least this value.
    Threshold(f64),
    /// Keep only the entry with this id, whatever its similarity.
    ExactId(i64),
}

/// An immutable description of one search: what was asked and how to
/// filter the catalog's answer.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    name: String,
    numbers: Vec<String>,
    match_case: bool,
    mode: SearchMode,
}

impl SearchQuery {
    /// A name search keeping results at or above `min_similarity`.
    pub fn by_name(name: impl Into<String>, min_similarity: f64, match_case: bool) -> Self {
        Self::build(name.into(), match_case, SearchMode::Threshold(min_similarity))
    }

    /// An id search. `name` is the title the id resolved to; it is still
    /// scored for information, but only the id decides acceptance. Case
    /// sensitivity stays at its default.
    pub fn by_id(name: impl Into<String>, game_id: i64) -> Self {
        Self::build(name.into(), true, SearchMode::ExactId(game_id))
    }

    fn build(name: String, match_case: bool, mode: SearchMode) -> Self {
        let numbers = numeric_tokens(&name);
        Self {
            name,
            numbers,
            match_case,
            mode,
        }
    }

    /// The query text exactly as given.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Purely numeric words of the query, in order.
    pub fn numbers(&self) -> &[String] {
        &self.numbers
    }

    pub fn match_case(&self) -> bool {
        self.match_case
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Effective threshold: the configured one, or 0 for id searches.
    pub fn min_similarity(&self) -> f64 {
        match self.mode {
            SearchMode::Threshold(min) => min,
            SearchMode::ExactId(_) => 0.0,
        }
    }

    pub fn target_id(&self) -> Option<i64> {
        match self.mode {
            SearchMode::ExactId(id) => Some(id),
            SearchMode::Threshold(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_query_extracts_numbers() {
        let q = SearchQuery::by_name("Halo 3 ODST", 0.5, false);
        assert_eq!(q.name(), "Halo 3 ODST");
        assert_eq!(q.numbers(), ["3"]);
        assert!(!q.match_case());
        assert_eq!(q.min_similarity(), 0.5);
        assert_eq!(q.target_id(), None);
    }

    #[test]
    fn id_query_forces_threshold_and_case() {
        let q = SearchQuery::by_id("Elden Ring", 68151);
        assert_eq!(q.mode(), SearchMode::ExactId(68151));
        assert_eq!(q.min_similarity(), 0.0);
        assert!(q.match_case());
        assert_eq!(q.target_id(), Some(68151));
    }
}
