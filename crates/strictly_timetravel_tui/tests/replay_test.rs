//! Tests for the headless replay driver.

use strictly_timetravel::{DisplayOrder, GameStatus};
use strictly_timetravel_tui::{ReplayRequest, TuiConfig, render_json, render_text, replay};

#[test]
fn test_replay_reaches_win() {
    let request = ReplayRequest {
        cells: vec![0, 1, 4, 2, 8],
        ..Default::default()
    };
    let engine = replay(&request, DisplayOrder::Descending);
    assert!(matches!(engine.status(), GameStatus::Won(_)));

    let text = render_text(&engine.view());
    assert!(text.contains("Winner: X @ 0,4,8"));
    assert!(text.ends_with("> Go to move #5 @ 3,3\n"));
}

#[test]
fn test_replay_ignores_illegal_clicks() {
    let request = ReplayRequest {
        cells: vec![4, 4, 12, 0],
        ..Default::default()
    };
    let engine = replay(&request, DisplayOrder::Descending);
    assert_eq!(engine.history().len(), 3);
}

#[test]
fn test_replay_branch_then_sort() {
    let request = ReplayRequest {
        cells: vec![0, 1, 2],
        jump: Some(1),
        toggle_sort: true,
    };
    let engine = replay(&request, DisplayOrder::Descending);
    let text = render_text(&engine.view());
    let lines: Vec<&str> = text.lines().collect();
    let list_start = lines
        .iter()
        .position(|l| *l == "Sort by: Ascending")
        .expect("sort label present");
    assert_eq!(lines[list_start + 1], "  Go to move #3 @ 3,1");
    assert_eq!(lines[list_start + 3], "> Go to move #1 @ 1,1");
    assert_eq!(lines[list_start + 4], "  Go to game start");
}

#[test]
fn test_json_output() {
    let engine = replay(
        &ReplayRequest {
            cells: vec![4, 0],
            ..Default::default()
        },
        DisplayOrder::Ascending,
    );
    let json = render_json(&engine.view()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["current_step"], 2);
    assert_eq!(value["sort_label"], "Sort by: Ascending");
    assert_eq!(value["moves"][0]["step"], 2);
    assert_eq!(value["winning_line"], serde_json::json!([]));
}

#[test]
fn test_config_order_feeds_replay() {
    let config = TuiConfig::from_toml("initial_order = \"ascending\"").unwrap();
    let engine = replay(&ReplayRequest::default(), *config.initial_order());
    assert_eq!(engine.display_order(), DisplayOrder::Ascending);
}
