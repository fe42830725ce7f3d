//! Integration tests for running hunts end to end.

mod common;

use axum::http::StatusCode;
use treasure_map::messages;
use treasure_narrative::domain::outcome::FAILURE_PREFIX;

#[tokio::test]
async fn test_hunt_with_all_successful_draws_finds_treasure() {
    let app = common::build_test_app(&[0.9, 0.9, 0.9]);

    let (status, json) = common::post_empty(app, "/api/v1/hunts").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["outcome"], "found");
    assert_eq!(
        json["completed_stages"],
        serde_json::json!([
            "fetch_clue",
            "decode_script",
            "search_temple",
            "solve_puzzle",
            "pass_passage",
            "open_chest"
        ])
    );
    let presentation = &json["presentation"];
    assert_eq!(presentation["background"], "TreasureChest");
    assert_eq!(presentation["log"], messages::TREASURE_FOUND);
    assert_eq!(presentation["fragment"]["scene"], "TreasureChest");
    assert!(
        presentation["fragment"]["text"]
            .as_str()
            .unwrap()
            .contains("lid")
    );
}

#[tokio::test]
async fn test_hunt_failing_at_search_shows_guard() {
    let app = common::build_test_app(&[0.1]);

    let (status, json) = common::post_empty(app, "/api/v1/hunts").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["outcome"], "failed");
    assert_eq!(json["failed_stage"], "search_temple");
    assert_eq!(
        json["completed_stages"],
        serde_json::json!(["fetch_clue", "decode_script"])
    );

    let presentation = &json["presentation"];
    assert_eq!(presentation["background"], "Guard");
    let log = presentation["log"].as_str().unwrap();
    assert!(log.starts_with(FAILURE_PREFIX));
    assert!(log.contains(messages::TEMPLE_GUARD));
    assert_eq!(presentation["fragment"]["scene"], "Guard");
}

#[tokio::test]
async fn test_hunts_do_not_share_state() {
    let failing = common::build_test_app(&[0.1]);
    let (_, first) = common::post_empty(failing, "/api/v1/hunts").await;
    assert_eq!(first["outcome"], "failed");

    let succeeding = common::build_test_app(&[0.9, 0.9, 0.9]);
    let (_, second) = common::post_empty(succeeding.clone(), "/api/v1/hunts").await;
    let (_, third) = common::post_empty(succeeding, "/api/v1/hunts").await;

    assert_eq!(second["presentation"], third["presentation"]);
    assert_eq!(second["timeline"], third["timeline"]);
    assert_ne!(second["run_id"], third["run_id"]);
}
