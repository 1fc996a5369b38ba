//! Integration tests for TestHarness.
//!
//! Drives the grid through the headless harness the way the window does:
//! select, edit, save to the clipboard, load back.

use extrude_grid_lib::harness::TestHarness;
use extrude_grid_lib::state::CommandOutcome;
use shared::{CellColor, MAX_DEPTH};

use CellColor::{Black, None as Flat, Silver};

#[test]
fn test_grid_starts_flat_and_uncoloured() {
    let h = TestHarness::new();
    assert_eq!(h.size(), shared::XN * shared::YN);
    assert!(h.depths().iter().all(|d| *d == 0));
    assert!(h.colors().iter().all(|c| *c == Flat));
}

#[test]
fn test_depth_stays_clamped() {
    let mut h = TestHarness::with_size(2, 2);
    h.select(3);

    for amount in [5, -2, 1, 1, 1, -10, 3, -1, 2, 2] {
        h.change_depth_by(amount);
        let depth = h.cell(3).unwrap().depth;
        assert!(depth <= MAX_DEPTH, "depth {depth} after {amount}");
        assert!(h.invariant_holds());
    }
}

#[test]
fn test_raise_sets_silver_and_flatten_clears_color() {
    let mut h = TestHarness::with_size(2, 2);
    h.select(2);

    h.change_depth_by(1);
    assert_eq!(h.cell(2).unwrap().color, Silver);

    h.toggle_color();
    h.change_depth_by(2);
    // Raising further keeps the chosen colour
    assert_eq!(h.cell(2).unwrap().color, Black);

    h.change_depth_by(-3);
    let cell = h.cell(2).unwrap();
    assert_eq!(cell.depth, 0);
    assert_eq!(cell.color, Flat);
}

#[test]
fn test_toggle_color_cycles_and_ignores_flat_cells() {
    let mut h = TestHarness::with_size(2, 2);
    h.select(1);

    assert_eq!(h.toggle_color(), CommandOutcome::Unchanged { index: 1 });
    assert_eq!(h.cell(1).unwrap().color, Flat);

    h.change_depth_by(1);
    let mut expected = Silver;
    for _ in 0..6 {
        h.toggle_color();
        expected = if expected == Silver { Black } else { Silver };
        assert_eq!(h.cell(1).unwrap().color, expected);
    }
}

#[test]
fn test_save_load_round_trip() {
    let mut h = TestHarness::with_size(4, 3);
    h.select(0);
    h.change_depth_by(3);
    h.select(5);
    h.change_depth_by(1);
    h.toggle_color();
    h.select(11);
    h.change_depth_by(2);

    let blob = h.save_blob().unwrap();

    let mut restored = TestHarness::with_size(4, 3);
    restored.load_blob(&blob).unwrap();
    assert_eq!(restored.depths(), h.depths());
    assert_eq!(restored.colors(), h.colors());
}

#[test]
fn test_scenario_four_cells() {
    let mut h = TestHarness::with_size(2, 2);
    h.select(0);

    h.change_depth_by(1);
    assert_eq!(h.depths(), vec![1, 0, 0, 0]);
    assert_eq!(h.colors(), vec![Silver, Flat, Flat, Flat]);

    h.toggle_color();
    assert_eq!(h.colors(), vec![Black, Flat, Flat, Flat]);

    h.change_depth_by(-1);
    assert_eq!(h.depths(), vec![0, 0, 0, 0]);
    assert_eq!(h.colors(), vec![Flat, Flat, Flat, Flat]);
}

#[test]
fn test_commands_without_selection_change_nothing() {
    let mut h = TestHarness::with_size(2, 2);
    h.select(1);
    h.change_depth_by(2);
    h.clear_selection();

    let depths = h.depths();
    let colors = h.colors();
    let writes = h.clipboard_writes();

    assert_eq!(h.change_depth_by(1), CommandOutcome::NoSelection);
    assert_eq!(h.change_depth_by(-1), CommandOutcome::NoSelection);
    assert_eq!(h.toggle_color(), CommandOutcome::NoSelection);

    assert_eq!(h.depths(), depths);
    assert_eq!(h.colors(), colors);
    assert_eq!(h.clipboard_writes(), writes);
}

#[test]
fn test_index_zero_is_a_real_selection() {
    let mut h = TestHarness::with_size(2, 2);
    h.select(0);
    assert_eq!(h.selected(), Some(0));

    assert!(matches!(
        h.change_depth_by(1),
        CommandOutcome::Applied { index: 0, .. }
    ));
    assert_eq!(h.cell(0).unwrap().depth, 1);
}

#[test]
fn test_every_edit_copies_state_to_clipboard() {
    let mut h = TestHarness::with_size(2, 2);
    h.select(3);
    h.change_depth_by(1);
    h.toggle_color();

    assert_eq!(h.clipboard_writes(), 2);
    assert_eq!(h.clipboard_text(), Some(h.save_blob().unwrap()));
    assert_eq!(
        h.clipboard_text().as_deref(),
        Some(r#"{"colors":[0,0,0,2],"depths":[0,0,0,1]}"#)
    );
}

#[test]
fn test_pasted_blob_restores_grid_and_visuals() {
    let mut h = TestHarness::with_size(2, 2);
    h.load_blob(r#"{"colors":[2,0,1,0],"depths":[3,0,1,0]}"#)
        .unwrap();

    assert_eq!(h.depths(), vec![3, 0, 1, 0]);
    assert_eq!(h.colors(), vec![Black, Flat, Silver, Flat]);

    let palette = &h.state.settings.palette;
    assert_eq!(h.state.proxies.get(0).unwrap().color, palette.black);
    assert_eq!(h.state.proxies.get(1).unwrap().color, palette.empty);
    assert!((h.state.proxies.get(0).unwrap().z_offset - 1.2).abs() < 1e-5);
}

#[test]
fn test_malformed_blob_leaves_grid_untouched() {
    let mut h = TestHarness::with_size(2, 2);
    h.select(0);
    h.change_depth_by(2);
    let depths = h.depths();
    let colors = h.colors();

    for blob in [
        "not json",
        r#"{"colors":[0,0,0],"depths":[0,0,0,0]}"#,
        r#"{"colors":[0,0,0,0],"depths":[0,0,0,0,0]}"#,
        r#"{"colors":[0,0,0,0],"depths":[0,9,0,0]}"#,
        r#"{"colors":[0,7,0,0],"depths":[0,1,0,0]}"#,
        r#"{"depths":[0,0,0,0]}"#,
    ] {
        assert!(h.load_blob(blob).is_err(), "accepted {blob}");
        assert_eq!(h.depths(), depths);
        assert_eq!(h.colors(), colors);
    }
    assert!(h.state.notice.as_ref().unwrap().is_error);
}
