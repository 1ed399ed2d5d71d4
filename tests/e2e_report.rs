// BuildSleuth - tests/e2e_report.rs
//
// End-to-end tests for the load, parse, filter, and export pipeline.
//
// These tests read real fixture logs from disk (CRLF line endings, tab
// separated columns, a second report section that must be ignored) and
// drive the public API the CLI uses.

use buildsleuth::app::load::load_log_file;
use buildsleuth::app::state::AppState;
use buildsleuth::core::chart::CHART_PALETTE;
use buildsleuth::core::export::{export_chart_json, export_csv, render_table};
use buildsleuth::core::parser::parse;
use buildsleuth::util::constants::DEFAULT_MERGE_SIZE_MB;
use std::fs;
use std::path::{Path, PathBuf};

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture files.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn loaded_state() -> AppState {
    let mut state = AppState::new(DEFAULT_MERGE_SIZE_MB);
    let outcome = load_log_file(&mut state, &fixture("editor_build_sample.log"))
        .expect("fixture should load");
    assert!(outcome.committed, "fixture should commit: {outcome:?}");
    state
}

// =============================================================================
// Parsing E2E
// =============================================================================

/// The sample log yields the seven assets of its first report, in order.
#[test]
fn e2e_parse_editor_build_sample() {
    let text = fs::read_to_string(fixture("editor_build_sample.log")).expect("read fixture");
    let entries = parse(&text);

    let paths: Vec<_> = entries.iter().map(|e| e.path()).collect();
    assert_eq!(
        paths,
        [
            "Assets/Art/Textures/Environment/Forest_Albedo.png",
            "Atlases/sactx-0-2048x2048-DXT5-UI_Atlas-9a1b2c3d.png",
            "Assets/Art/Models/Hero.fbx",
            "Assets/Audio/Music/MainTheme.ogg",
            "Assets/Prefabs/UI/Button.prefab",
            "Assets/Scripts/Data/Settings.asset",
            "Assets/Materials/Glow.mat",
        ]
    );

    assert_eq!(entries[0].size(), 12.3);
    assert_eq!(entries[3].size(), 0.512);
    assert!(
        entries.iter().all(|e| !e.path().contains('\r')),
        "no carriage returns may survive line splitting"
    );
    assert!(
        !paths.contains(&"Assets/ShouldNotAppear.png"),
        "second report section must be ignored"
    );
}

/// A log from a session without a build has nothing to commit.
#[test]
fn e2e_log_without_build_commits_nothing() {
    let mut state = AppState::new(DEFAULT_MERGE_SIZE_MB);
    let outcome = load_log_file(&mut state, &fixture("editor_no_build.log")).unwrap();

    assert!(!outcome.marker_found);
    assert!(!outcome.committed);
    assert!(!state.has_data());
}

// =============================================================================
// State, filter, and chart E2E
// =============================================================================

/// The default merge size hides the two smallest assets from the chart.
#[test]
fn e2e_default_merge_size_filters_chart() {
    let state = loaded_state();

    assert_eq!(state.entries().len(), 7);
    let visible = state.visible();
    assert_eq!(visible.kept.len(), 5);
    assert_eq!(visible.merged_count, 2);

    let chart = state.chart_data();
    assert_eq!(chart.labels.len(), 5);
    assert_eq!(chart.labels[1], "Atlases/sactx-0-2048x2048-DXT5-UI_Atlas-9a1b2c3d.png");
    assert_eq!(chart.datasets[0].background_color[0], CHART_PALETTE[0]);
}

/// Loading a log with no report after a good one keeps the good report.
#[test]
fn e2e_failed_reload_preserves_committed_report() {
    let mut state = loaded_state();
    let chart_before = state.chart_data().clone();

    load_log_file(&mut state, &fixture("editor_no_build.log")).unwrap();

    assert_eq!(state.entries().len(), 7);
    assert_eq!(state.chart_data(), &chart_before);
    assert_eq!(
        state.source_path.as_deref(),
        Some(fixture("editor_build_sample.log").as_path())
    );
}

// =============================================================================
// Export E2E
// =============================================================================

/// CSV export of the visible entries round-trips through the csv crate.
#[test]
fn e2e_csv_export_to_file() {
    let state = loaded_state();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.csv");

    let file = fs::File::create(&out).unwrap();
    let count = export_csv(&state.visible().kept, file, &out).unwrap();
    assert_eq!(count, 5);

    let mut reader = csv::Reader::from_path(&out).unwrap();
    let rows: Vec<(String, f64)> = reader
        .records()
        .map(|r| {
            let r = r.unwrap();
            (r[0].to_string(), r[1].parse().unwrap())
        })
        .collect();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].0, "Assets/Art/Textures/Environment/Forest_Albedo.png");
    assert_eq!(rows[0].1, 12.3);
}

/// Chart JSON uses the Chart.js field names.
#[test]
fn e2e_chart_export_shape() {
    let state = loaded_state();
    let mut buf = Vec::new();
    export_chart_json(state.chart_data(), &mut buf, Path::new("chart.json")).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(value["labels"].as_array().unwrap().len(), 5);
    assert_eq!(
        value["datasets"][0]["backgroundColor"]
            .as_array()
            .unwrap()
            .len(),
        5
    );
}

/// The table footer accounts for the merged assets.
#[test]
fn e2e_table_footer_counts_merged_assets() {
    let state = loaded_state();
    let mut buf = Vec::new();
    render_table(&state.visible(), state.merge_size(), &mut buf, Path::new("-")).unwrap();

    let output = String::from_utf8(buf).unwrap();
    let footer = output.lines().last().unwrap();
    assert!(footer.starts_with("5 assets"), "footer: {footer}");
    assert!(footer.contains("2 below 10.0 KB merged"), "footer: {footer}");
}
