//! Integration tests for the JSON command protocol.
//!
//! Tests the full command pipeline: JSON string -> parse -> execute -> response.

use extrude_grid_lib::command::{execute_json, execute_json_batch};
use extrude_grid_lib::harness::TestHarness;

#[test]
fn test_command_select_and_raise() {
    let mut h = TestHarness::with_size(2, 2);

    let resp = execute_json(&mut h, r#"{"command": "select", "index": 0}"#).unwrap();
    assert!(resp.success);
    assert_eq!(resp.data.unwrap()["selected"], 0);

    let resp = execute_json(&mut h, r#"{"command": "change_depth", "amount": 1}"#).unwrap();
    assert!(resp.success);
    assert_eq!(h.depths(), vec![1, 0, 0, 0]);
}

#[test]
fn test_command_change_depth_extreme_amounts() {
    let mut h = TestHarness::with_size(2, 2);
    h.select(0);
    h.change_depth_by(1);

    let resp =
        execute_json(&mut h, r#"{"command": "change_depth", "amount": 2147483647}"#).unwrap();
    assert!(resp.success);
    assert_eq!(h.depths(), vec![3, 0, 0, 0]);

    let resp =
        execute_json(&mut h, r#"{"command": "change_depth", "amount": -2147483648}"#).unwrap();
    assert!(resp.success);
    assert_eq!(h.depths(), vec![0, 0, 0, 0]);
    assert!(h.invariant_holds());
}

#[test]
fn test_command_without_selection_reports_not_applied() {
    let mut h = TestHarness::with_size(2, 2);

    let resp = execute_json(&mut h, r#"{"command": "toggle_color"}"#).unwrap();
    assert!(resp.success);
    let data = resp.data.unwrap();
    assert_eq!(data["applied"], false);
    assert!(data["index"].is_null());
}

#[test]
fn test_command_toggle_flat_cell_not_applied() {
    let mut h = TestHarness::with_size(2, 2);
    h.select(2);

    let resp = execute_json(&mut h, r#"{"command": "toggle_color"}"#).unwrap();
    let data = resp.data.unwrap();
    assert_eq!(data["applied"], false);
    assert_eq!(data["index"], 2);
}

#[test]
fn test_command_inspect_grid() {
    let mut h = TestHarness::with_size(3, 2);
    h.select(4);
    h.change_depth_by(2);

    let resp = execute_json(&mut h, r#"{"command": "inspect"}"#).unwrap();
    assert!(resp.success);
    let data = resp.data.unwrap();
    assert_eq!(data["size"], 6);
    assert_eq!(data["extruded"], 1);
    assert_eq!(data["selected"], 4);
}

#[test]
fn test_command_inspect_cell() {
    let mut h = TestHarness::with_size(2, 2);
    h.select(1);
    h.change_depth_by(1);
    h.toggle_color();

    let resp = execute_json(&mut h, r#"{"command": "inspect", "index": 1}"#).unwrap();
    let data = resp.data.unwrap();
    assert_eq!(data["cell"]["depth"], 1);
    assert_eq!(data["cell"]["color"], 2);

    let resp = execute_json(&mut h, r#"{"command": "inspect", "index": 9}"#).unwrap();
    assert!(!resp.success);
}

#[test]
fn test_command_export_then_load() {
    let mut h = TestHarness::with_size(2, 2);
    h.select(3);
    h.change_depth_by(3);

    let resp = execute_json(&mut h, r#"{"command": "export"}"#).unwrap();
    let blob = resp.data.unwrap()["data"].as_str().unwrap().to_string();
    assert_eq!(blob, r#"{"colors":[0,0,0,1],"depths":[0,0,0,3]}"#);

    let mut other = TestHarness::with_size(2, 2);
    let load = serde_json::json!({ "command": "load", "data": blob }).to_string();
    let resp = execute_json(&mut other, &load).unwrap();
    assert!(resp.success);
    assert_eq!(other.depths(), h.depths());
    assert_eq!(other.colors(), h.colors());
}

#[test]
fn test_command_load_rejects_wrong_length() {
    let mut h = TestHarness::with_size(2, 2);
    let load = serde_json::json!({
        "command": "load",
        "data": r#"{"colors":[0,0],"depths":[0,0]}"#,
    })
    .to_string();

    let resp = execute_json(&mut h, &load).unwrap();
    assert!(!resp.success);
    assert!(resp.error.unwrap().contains("expected 4"));
    assert_eq!(h.depths(), vec![0, 0, 0, 0]);
}

#[test]
fn test_command_batch() {
    let mut h = TestHarness::with_size(2, 2);

    let json = r#"[
        {"command": "select", "index": 0},
        {"command": "change_depth", "amount": 1},
        {"command": "toggle_color"},
        {"command": "change_depth", "amount": -1},
        {"command": "clear_selection"},
        {"command": "change_depth", "amount": 1}
    ]"#;

    let responses = execute_json_batch(&mut h, json).unwrap();
    assert_eq!(responses.len(), 6);
    assert!(responses.iter().all(|r| r.success));
    assert_eq!(h.depths(), vec![0, 0, 0, 0]);
    assert!(h.invariant_holds());
    assert_eq!(h.clipboard_writes(), 3);
}

#[test]
fn test_command_unknown() {
    let mut h = TestHarness::new();
    assert!(execute_json(&mut h, r#"{"command": "explode"}"#).is_err());
}

#[test]
fn test_command_batch_invalid_json() {
    let mut h = TestHarness::new();
    let err = execute_json_batch(&mut h, r#"[{"command": "select"}]"#).unwrap_err();
    assert!(err.starts_with("Invalid command JSON"));
}
