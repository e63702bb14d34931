use serde_json::json;

use super::*;
use crate::similarity::NUMBER_MISMATCH_PENALTY;

const SINGLE_GAME: &str = r#"{
    "color": "blue",
    "count": 1,
    "data": [
        {
            "game_id": 1,
            "game_name": "Test Game",
            "game_alias": "Alias",
            "game_type": "game",
            "game_image": "test.jpg",
            "review_score": 80,
            "profile_dev": "Test Dev",
            "profile_platform": "PC, PS4",
            "release_world": 2023,
            "comp_main": 3600,
            "comp_plus": 7200,
            "comp_100": 10800,
            "comp_all": 14400
        }
    ]
}"#;

fn records(value: serde_json::Value) -> Vec<CatalogRecord> {
    serde_json::from_value(value).unwrap()
}

#[test]
fn single_exact_match_is_kept() {
    let query = SearchQuery::by_name("Test Game", 0.4, true);
    let results = parse_search_result(SINGLE_GAME, &query).unwrap();
    assert_eq!(results.len(), 1);
    let entry = &results[0];
    assert_eq!(entry.game_name.as_deref(), Some("Test Game"));
    assert_eq!(entry.similarity, 1.0);
    assert_eq!(entry.main_story, Some(1.0));
    assert_eq!(entry.main_extra, Some(2.0));
    assert_eq!(entry.completionist, Some(3.0));
    assert_eq!(entry.all_styles, Some(4.0));
}

#[test]
fn pre_parsed_value_is_accepted() {
    let value: serde_json::Value = serde_json::from_str(SINGLE_GAME).unwrap();
    let query = SearchQuery::by_name("Test Game", 0.4, true);
    let results = parse_search_value(value, &query).unwrap();
    assert_eq!(results.len(), 1);
}

#[test]
fn below_threshold_is_dropped_and_order_kept() {
    let data = records(json!([
        { "game_id": 1, "game_name": "Zelda" },
        { "game_id": 2, "game_name": "Test Game" },
        { "game_id": 3, "game_name": "Test Games" },
    ]));
    let query = SearchQuery::by_name("Test Game", 0.4, true);
    let results = filter_and_rank(&data, &query);
    let ids: Vec<i64> = results.iter().map(|e| e.game_id).collect();
    assert_eq!(ids, vec![2, 3]);
    assert!(results.iter().all(|e| e.similarity >= 0.4));
}

#[test]
fn zero_threshold_keeps_everything_even_negative() {
    let data = records(json!([
        { "game_id": 1, "game_name": "x", "game_alias": "y" },
        { "game_id": 2, "game_name": "x" },
        { "game_id": 3 },
    ]));
    let query = SearchQuery::by_name("Game 2", 0.0, true);
    let results = filter_and_rank(&data, &query);
    assert_eq!(results.len(), 3);
    assert!((results[0].similarity + NUMBER_MISMATCH_PENALTY).abs() < 1e-12);
    // a missing alias scores 0, which outranks the penalized name
    assert_eq!(results[1].similarity, 0.0);
    // no names at all scores 0, not the unscored sentinel
    assert_eq!(results[2].similarity, 0.0);
}

#[test]
fn record_without_id_can_pass_threshold() {
    let data = records(json!([{ "game_name": "Test Game" }]));
    let query = SearchQuery::by_name("Test Game", 0.4, true);
    let results = filter_and_rank(&data, &query);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].game_id, UNSET_ID);
}

#[test]
fn exact_id_ignores_similarity() {
    let data = records(json!([
        { "game_id": 10, "game_name": "Test Game" },
        { "game_id": 11, "game_name": "zzz", "game_alias": "yyy" },
    ]));
    let query = SearchQuery::by_id("Test Game 2", 11);
    let results = filter_and_rank(&data, &query);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].game_id, 11);
    assert!(results[0].similarity < 0.0);
}

#[test]
fn exact_id_matches_integral_float_ids() {
    let data = records(json!([{ "game_id": 5.0, "game_name": "Test Game" }]));
    let results = filter_and_rank(&data, &SearchQuery::by_id("Test Game", 5));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].game_id, 5);
}

#[test]
fn exact_id_never_returns_unset_ids() {
    let data = records(json!([
        { "game_name": "Test Game" },
        { "game_id": null, "game_name": "Test Game" },
    ]));
    assert!(filter_and_rank(&data, &SearchQuery::by_id("Test Game", UNSET_ID)).is_empty());
    assert!(filter_and_rank(&data, &SearchQuery::by_id("Test Game", 1)).is_empty());
}

#[test]
fn case_insensitive_query_raises_scores() {
    let data = records(json!([{ "game_id": 1, "game_name": "test game" }]));
    let strict = filter_and_rank(&data, &SearchQuery::by_name("TEST GAME", 0.0, true));
    let loose = filter_and_rank(&data, &SearchQuery::by_name("TEST GAME", 0.0, false));
    assert!(strict[0].similarity < loose[0].similarity);
    assert_eq!(loose[0].similarity, 1.0);
}

#[test]
fn custom_prefixes_flow_into_entries() {
    let data = records(json!([{ "game_id": 7, "game_name": "Test Game" }]));
    let prefixes = LinkPrefixes::from_base_url("http://localhost");
    let results =
        filter_and_rank_with(&data, &SearchQuery::by_name("Test Game", 0.4, true), &prefixes);
    assert_eq!(
        results[0].game_web_link.as_deref(),
        Some("http://localhost/game/7")
    );
}

#[test]
fn malformed_json_fails() {
    let query = SearchQuery::by_name("Test Game", 0.4, true);
    assert!(matches!(
        parse_search_result("{ not json", &query),
        Err(ParseError::Json(_))
    ));
}

#[test]
fn missing_or_wrong_data_fails() {
    let query = SearchQuery::by_name("Test Game", 0.4, true);
    assert!(parse_search_result(r#"{"count": 0}"#, &query).is_err());
    assert!(parse_search_result(r#"{"data": {}}"#, &query).is_err());
    assert!(parse_search_result(r#"{"data": [1, 2]}"#, &query).is_err());
}

#[test]
fn empty_data_is_empty_result() {
    let query = SearchQuery::by_name("Test Game", 0.4, true);
    assert!(parse_search_result(r#"{"data": []}"#, &query).unwrap().is_empty());
}

#[test]
fn best_match_prefers_highest_then_earliest() {
    let data = records(json!([
        { "game_id": 1, "game_name": "Test" },
        { "game_id": 2, "game_name": "Test Game" },
        { "game_id": 3, "game_name": "Test Game" },
    ]));
    let results = filter_and_rank(&data, &SearchQuery::by_name("Test Game", 0.0, true));
    assert_eq!(best_match(&results).map(|e| e.game_id), Some(2));
    assert!(best_match(&[]).is_none());
}
