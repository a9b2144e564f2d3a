//! Validates grid generation: numbering, classification, validation, determinism

use std::collections::HashSet;

use surveygrid::GridError;
use surveygrid::geodesy::GeoPoint;
use surveygrid::geodesy::destination::distance_m;
use surveygrid::grid::config::GridConfig;
use surveygrid::grid::generate;
use surveygrid::grid::numbering::cell_number;

fn reference_config() -> GridConfig {
    GridConfig {
        origin_lat: 23.915223,
        origin_lon: 67.241031,
        rows: 1,
        cols: 3,
        start_numbers: Some(vec![10]),
        ..GridConfig::default()
    }
}

fn label_texts(config: GridConfig) -> Vec<String> {
    let output = generate(&[config], &[]).expect("generation failed");
    output
        .features
        .iter()
        .filter_map(|feature| feature.label.as_ref().map(|label| label.text.clone()))
        .collect()
}

#[test]
fn test_serpentine_numbering_reverses_rows_matching_parity() {
    // Row 0 matches parity 0, so numbers count from the far end of the row
    assert_eq!(cell_number(&[10], 0, 0, 3, 0), Some(12));
    assert_eq!(cell_number(&[10], 0, 1, 3, 0), Some(11));
    assert_eq!(cell_number(&[10], 0, 2, 3, 0), Some(10));

    // Row 0 does not match parity 1, so numbers count forward
    assert_eq!(cell_number(&[10], 0, 0, 3, 1), Some(10));
    assert_eq!(cell_number(&[10], 0, 1, 3, 1), Some(11));
    assert_eq!(cell_number(&[10], 0, 2, 3, 1), Some(12));
}

#[test]
fn test_generated_labels_follow_serpentine_order() {
    let reversed = label_texts(reference_config());
    assert_eq!(reversed, vec!["12", "11", "10"]);

    let forward = label_texts(GridConfig {
        parity: 1,
        ..reference_config()
    });
    assert_eq!(forward, vec!["10", "11", "12"]);
}

#[test]
fn test_cell_rings_are_closed_with_five_points() {
    let output = generate(&[reference_config()], &[]).expect("generation failed");
    assert_eq!(output.features.len(), 3);
    for feature in &output.features {
        assert_eq!(feature.ring.len(), 5);
        assert_eq!(feature.ring.first(), feature.ring.last());
    }
}

#[test]
fn test_colored_takes_precedence_over_owned() {
    let both = GridConfig {
        rows: 1,
        cols: 1,
        start_numbers: Some(vec![5]),
        colored: HashSet::from([5]),
        owned: HashSet::from([5]),
        ..reference_config()
    };
    let output = generate(&[both], &[]).expect("generation failed");
    let feature = output.features.first().expect("no cell emitted");
    assert!(feature.fill);
    assert_eq!(feature.fill_color.as_deref(), Some("64ff0000"));

    let owned_only = GridConfig {
        rows: 1,
        cols: 1,
        start_numbers: Some(vec![5]),
        owned: HashSet::from([5]),
        ..reference_config()
    };
    let output = generate(&[owned_only], &[]).expect("generation failed");
    let feature = output.features.first().expect("no cell emitted");
    assert!(feature.fill);
    assert_eq!(feature.fill_color.as_deref(), Some("640000ff"));
}

#[test]
fn test_unhighlighted_numbered_cell_keeps_default_border_without_fill() {
    let output = generate(&[reference_config()], &[]).expect("generation failed");
    let feature = output.features.first().expect("no cell emitted");
    assert!(!feature.fill);
    assert_eq!(feature.fill_color.as_deref(), Some("64ff0000"));
    assert!(feature.label.is_some());
}

#[test]
fn test_unnumbered_grid_emits_no_labels_or_fill_treatment() {
    let config = GridConfig {
        start_numbers: None,
        ..reference_config()
    };
    let output = generate(&[config], &[]).expect("generation failed");
    assert_eq!(output.features.len(), 3);
    for feature in &output.features {
        assert!(feature.label.is_none());
        assert!(feature.fill_color.is_none());
        assert!(!feature.fill);
    }
}

#[test]
fn test_start_number_mismatch_rejected_before_any_output() {
    let invalid = GridConfig {
        rows: 1,
        start_numbers: Some(vec![10, 20]),
        ..reference_config()
    };
    let result = generate(&[reference_config(), invalid], &[]);
    match result {
        Err(GridError::StartNumberMismatch {
            rows,
            start_numbers,
        }) => {
            assert_eq!(rows, 1);
            assert_eq!(start_numbers, 2);
        }
        other => unreachable!("expected StartNumberMismatch, got {other:?}"),
    }
}

#[test]
fn test_generation_is_deterministic() {
    let config = GridConfig {
        rows: 4,
        cols: 5,
        angle: 91.5,
        start_numbers: Some(vec![100, 200, 300, 400]),
        ..reference_config()
    };
    let first = generate(&[config.clone()], &[]).expect("generation failed");
    let second = generate(&[config], &[]).expect("generation failed");
    assert_eq!(first, second);
}

#[test]
fn test_adjacent_cells_abut_in_both_traversal_directions() {
    let config = GridConfig {
        rows: 2,
        cols: 2,
        start_numbers: None,
        ..reference_config()
    };
    let output = generate(&[config], &[]).expect("generation failed");

    // Generation order: (row 0, col 0), (row 1, col 0), (row 0, col 1),
    // (row 1, col 1); ring order: top_left, top_right, bottom_right,
    // bottom_left, close
    let vertex = |cell: usize, index: usize| {
        let (lon, lat) = output
            .features
            .get(cell)
            .expect("missing cell")
            .ring
            .get(index)
            .copied()
            .expect("missing vertex");
        GeoPoint::new(lat, lon)
    };

    // Successive rows start one cell width apart along the row bearing
    let row_step = distance_m(vertex(0, 0), vertex(1, 0));
    assert!(
        (row_step - 161.957).abs() < 0.01,
        "adjacent rows start {row_step} meters apart"
    );

    // Successive columns start one cell height apart along the column bearing
    let col_step = distance_m(vertex(0, 0), vertex(2, 0));
    assert!(
        (col_step - 100.0).abs() < 0.01,
        "adjacent columns start {col_step} meters apart"
    );

    // Cell (1, 0) lies one step west: its top right meets cell (0, 0)'s
    // top left
    let shared = vertex(1, 1);
    let anchor = vertex(0, 0);
    assert!((shared.lat - anchor.lat).abs() < 1e-6);
    assert!((shared.lon - anchor.lon).abs() < 1e-6);

    // Cell (0, 1) starts exactly on cell (0, 0)'s bottom left corner
    let below = vertex(2, 0);
    let bottom_left = vertex(0, 3);
    assert!((below.lat - bottom_left.lat).abs() < 1e-9);
    assert!((below.lon - bottom_left.lon).abs() < 1e-9);
}

#[test]
fn test_rotated_grid_keeps_origin_corner_fixed() {
    let config = GridConfig {
        angle: 91.5,
        ..reference_config()
    };
    let output = generate(&[config], &[]).expect("generation failed");
    let first_ring = &output.features.first().expect("no cell emitted").ring;
    let (lon, lat) = first_ring.first().copied().expect("empty ring");
    // Cell (0, 0)'s top left is the rotation origin itself
    assert!((lat - 23.915223).abs() < 1e-9);
    assert!((lon - 67.241031).abs() < 1e-9);
}
