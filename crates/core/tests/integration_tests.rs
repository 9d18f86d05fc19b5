use chrono::{Duration, NaiveDate};
use nav_graph_core::errors::CoreError;
use nav_graph_core::models::chart::PathCommand;
use nav_graph_core::models::gesture::{GestureEvent, GesturePhase};
use nav_graph_core::models::nav::{NavPoint, NavSeries, RawNavPoint};
use nav_graph_core::models::period::Period;
use nav_graph_core::models::settings::{ChartDimensions, GraphSettings};
use nav_graph_core::NavGraph;

// ═══════════════════════════════════════════════════════════════════
// Fixtures
// ═══════════════════════════════════════════════════════════════════

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Two years of daily NAVs ending 2026-02-06, gently rising.
fn two_year_series() -> NavSeries {
    let last = d(2026, 2, 6);
    let days = 731;
    let points = (0..days)
        .map(|i| {
            let date = last - Duration::days(days - 1 - i);
            NavPoint::new(25.0 + i as f64 * 0.0125, date)
        })
        .collect();
    NavSeries::new(points).unwrap()
}

fn settings() -> GraphSettings {
    GraphSettings::with_dimensions(ChartDimensions::new(300.0, 220.0, 10.0, 10.0))
}

fn instant_settings() -> GraphSettings {
    GraphSettings {
        activation_delay_ms: 0,
        ..settings()
    }
}

fn graph() -> NavGraph {
    NavGraph::new(two_year_series(), settings()).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
// Construction
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_default_period_is_max_and_shows_everything() {
    let graph = graph();
    assert_eq!(graph.selected_period(), Period::Max);
    assert_eq!(graph.filtered_series(), graph.series().points());
    assert_eq!(graph.geometry().points.len(), graph.series().len());
    assert!(graph.touch_info().is_none());
    assert_eq!(graph.gesture_phase(), GesturePhase::Idle);
}

#[test]
fn test_default_settings_use_phone_layout() {
    let graph = NavGraph::new(two_year_series(), GraphSettings::default()).unwrap();
    let dims = graph.settings().dimensions;
    assert_eq!(dims.width, 326.0);
    assert_eq!(dims.height, 220.0);
    let last = graph.geometry().points.last().unwrap();
    assert_eq!(last.x, 326.0);
}

#[test]
fn test_configured_default_period() {
    let settings = GraphSettings {
        default_period: Period::OneYear,
        ..settings()
    };
    let graph = NavGraph::new(two_year_series(), settings).unwrap();
    assert_eq!(graph.selected_period(), Period::OneYear);
    assert!(graph.filtered_series().len() < graph.series().len());
}

#[test]
fn test_empty_series_graph() {
    let graph = NavGraph::new(NavSeries::default(), settings()).unwrap();
    assert!(graph.filtered_series().is_empty());
    assert!(graph.geometry().points.is_empty());
    assert_eq!(graph.return_pct(), 0.0);
    assert_eq!(graph.snapshot().curve_svg, "");
}

#[test]
fn test_invalid_settings_rejected() {
    let bad_dims = GraphSettings::with_dimensions(ChartDimensions::new(0.0, 220.0, 10.0, 10.0));
    assert!(matches!(
        NavGraph::new(two_year_series(), bad_dims),
        Err(CoreError::InvalidDimensions(_))
    ));

    let bad_slop = GraphSettings {
        activation_slop: -1.0,
        ..settings()
    };
    assert!(matches!(
        NavGraph::new(two_year_series(), bad_slop),
        Err(CoreError::InvalidSettings(_))
    ));
}

#[test]
fn test_from_json() {
    let json = r#"[
        {"nav": 10.0, "nav_date": "2025-01-01"},
        {"nav": 11.0, "nav_date": "2025-06-01T00:00:00.000Z"},
        {"nav": 12.0, "nav_date": "2026-01-01"}
    ]"#;
    let graph = NavGraph::from_json(json, settings()).unwrap();
    assert_eq!(graph.series().len(), 3);
    assert_eq!(graph.series().points()[1].date, d(2025, 6, 1));
    assert!((graph.return_pct() - 20.0).abs() < 1e-9);
}

#[test]
fn test_from_json_rejects_bad_records() {
    let bad_date = r#"[{"nav": 10.0, "nav_date": "yesterday"}]"#;
    assert!(matches!(
        NavGraph::from_json(bad_date, settings()),
        Err(CoreError::InvalidDate { index: 0, .. })
    ));

    let bad_nav = r#"[{"nav": 10.0, "nav_date": "2025-01-01"}, {"nav": 0.0, "nav_date": "2025-01-02"}]"#;
    assert!(matches!(
        NavGraph::from_json(bad_nav, settings()),
        Err(CoreError::InvalidNav { index: 1, .. })
    ));

    assert!(matches!(
        NavGraph::from_json("{", settings()),
        Err(CoreError::Deserialization(_))
    ));
}

// ═══════════════════════════════════════════════════════════════════
// Period selection
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_select_period_filters_and_rescales() {
    let mut graph = graph();
    let all_min = graph.min_nav();

    graph.select_period(Period::OneMonth);
    assert_eq!(graph.selected_period(), Period::OneMonth);
    let filtered = graph.filtered_series();
    assert_eq!(filtered.first().unwrap().date, d(2026, 1, 6));
    assert_eq!(filtered.last().unwrap().date, d(2026, 2, 6));
    assert_eq!(graph.geometry().points.len(), filtered.len());
    assert!(graph.min_nav() > all_min);
    assert_eq!(graph.max_nav(), graph.series().last().unwrap().nav);
}

#[test]
fn test_return_pct_follows_period() {
    let mut graph = graph();
    let max_return = graph.return_pct();
    graph.select_period(Period::ThreeMonths);
    let short_return = graph.return_pct();
    assert!(max_return > 0.0);
    assert!(short_return > 0.0);
    assert!(short_return < max_return);
}

#[test]
fn test_select_period_clears_touch_mid_drag() {
    let mut graph = NavGraph::new(two_year_series(), instant_settings()).unwrap();
    graph.begin_drag(120.0, 100.0, 0);
    graph.update_drag(140.0, 100.0, 16);
    assert!(graph.touch_info().is_some());
    assert_eq!(graph.gesture_phase(), GesturePhase::Dragging);

    graph.select_period(Period::SixMonths);
    assert!(graph.touch_info().is_none());
    assert!(graph.tooltip().is_none());
    assert_eq!(graph.gesture_phase(), GesturePhase::Idle);
}

#[test]
fn test_reselecting_same_period_still_clears_touch() {
    let mut graph = NavGraph::new(two_year_series(), instant_settings()).unwrap();
    graph.begin_drag(120.0, 100.0, 0);
    assert!(graph.touch_info().is_some());
    graph.select_period(Period::Max);
    assert!(graph.touch_info().is_none());
}

#[test]
fn test_set_series_recomputes_and_clears_touch() {
    let mut graph = NavGraph::new(two_year_series(), instant_settings()).unwrap();
    graph.begin_drag(50.0, 100.0, 0);

    let replacement = NavSeries::new(vec![
        NavPoint::new(10.0, d(2026, 1, 1)),
        NavPoint::new(15.0, d(2026, 2, 1)),
    ])
    .unwrap();
    graph.set_series(replacement);

    assert!(graph.touch_info().is_none());
    assert_eq!(graph.filtered_series().len(), 2);
    assert_eq!(graph.min_nav(), 10.0);
    assert_eq!(graph.max_nav(), 15.0);
}

#[test]
fn test_set_dimensions() {
    let mut graph = graph();
    graph
        .set_dimensions(ChartDimensions::new(600.0, 300.0, 20.0, 20.0))
        .unwrap();
    let points = &graph.geometry().points;
    assert_eq!(points.last().unwrap().x, 600.0);
    assert!(points.iter().all(|p| p.y >= 20.0 - 1e-9 && p.y <= 280.0 + 1e-9));

    let err = graph
        .set_dimensions(ChartDimensions::new(600.0, f64::NAN, 20.0, 20.0))
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidDimensions(_)));
    assert_eq!(graph.settings().dimensions.width, 600.0);
}

#[test]
fn test_drag_is_clamped_to_new_width() {
    let mut graph = NavGraph::new(two_year_series(), instant_settings()).unwrap();
    graph
        .set_dimensions(ChartDimensions::new(150.0, 220.0, 10.0, 10.0))
        .unwrap();
    graph.begin_drag(1_000.0, 100.0, 0);
    assert_eq!(graph.state().touch.x, Some(150.0));
    assert_eq!(graph.touch_info().unwrap().date, d(2026, 2, 6));
}

// ═══════════════════════════════════════════════════════════════════
// Touch & gestures
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_long_press_then_drag_shows_tooltip() {
    let mut graph = graph();
    graph.begin_drag(0.0, 100.0, 10_000);
    graph.poll_drag(10_100);
    assert!(graph.touch_info().is_none());

    graph.poll_drag(10_150);
    let info = graph.touch_info().unwrap();
    assert_eq!(info.date, graph.filtered_series()[0].date);
    assert_eq!(info.x, 0.0);

    graph.update_drag(300.0, 100.0, 10_200);
    let tooltip = graph.tooltip().unwrap();
    assert_eq!(tooltip.info.date, d(2026, 2, 6));
    assert_eq!(tooltip.left, 180.0);
    assert_eq!(tooltip.date_text, "6 Feb'26");
}

#[test]
fn test_quick_swipe_never_shows_tooltip() {
    let mut graph = graph();
    graph.begin_drag(100.0, 100.0, 0);
    graph.update_drag(130.0, 100.0, 40);
    graph.update_drag(160.0, 100.0, 400);
    assert_eq!(graph.gesture_phase(), GesturePhase::Failed);
    assert!(graph.touch_info().is_none());
    graph.finalize_drag();
    assert_eq!(graph.gesture_phase(), GesturePhase::Idle);
}

#[test]
fn test_vertical_scroll_never_shows_tooltip() {
    let mut graph = graph();
    graph.begin_drag(150.0, 40.0, 0);
    graph.update_drag(150.0, 90.0, 60);
    graph.poll_drag(400);
    assert_eq!(graph.gesture_phase(), GesturePhase::Failed);
    assert!(graph.touch_info().is_none());
}

// Scenario C: release clears the touch immediately
#[test]
fn test_release_clears_touch() {
    let mut graph = NavGraph::new(two_year_series(), instant_settings()).unwrap();
    graph.begin_drag(10.0, 100.0, 0);
    graph.update_drag(100.0, 100.0, 16);
    graph.update_drag(200.0, 100.0, 32);
    assert!(graph.touch_info().is_some());

    graph.finalize_drag();
    assert!(graph.touch_info().is_none());
    assert!(graph.state().touch.x.is_none());
}

#[test]
fn test_cancel_clears_touch() {
    let mut graph = NavGraph::new(two_year_series(), instant_settings()).unwrap();
    graph.handle_gesture(GestureEvent::Begin { x: 10.0, y: 100.0, at_ms: 0 });
    assert!(graph.touch_info().is_some());
    graph.handle_gesture(GestureEvent::Cancel);
    assert!(graph.touch_info().is_none());
}

#[test]
fn test_touch_on_single_point_series() {
    let series = NavSeries::new(vec![NavPoint::new(42.0, d(2026, 2, 6))]).unwrap();
    let mut graph = NavGraph::new(series, instant_settings()).unwrap();
    for x in [0.0, 150.0, 300.0] {
        graph.begin_drag(x, 100.0, 0);
        let info = graph.touch_info().unwrap();
        assert_eq!(info.nav, 42.0);
        assert_eq!(info.x, 0.0);
        graph.finalize_drag();
    }
}

#[test]
fn test_gesture_descriptor() {
    let descriptor = graph().gesture_descriptor();
    assert_eq!(descriptor.min_distance, 0.0);
    assert_eq!(descriptor.activate_after_long_press_ms, 150);
}

#[test]
fn test_gesture_handle_from_another_thread() {
    let mut graph = NavGraph::new(two_year_series(), instant_settings()).unwrap();
    let handle = graph.gesture_handle();

    std::thread::spawn(move || {
        handle.begin(20.0, 100.0, 0).unwrap();
        handle.update(75.0, 100.0, 16).unwrap();
        handle.update(300.0, 100.0, 32).unwrap();
    })
    .join()
    .unwrap();

    // Nothing applies until the owner pumps
    assert!(graph.touch_info().is_none());
    assert_eq!(graph.pump_gestures(), 3);
    assert_eq!(graph.touch_info().unwrap().date, d(2026, 2, 6));
    assert_eq!(graph.pump_gestures(), 0);

    let handle = graph.gesture_handle();
    handle.finalize().unwrap();
    assert_eq!(graph.pump_gestures(), 1);
    assert!(graph.touch_info().is_none());
}

#[test]
fn test_gesture_handle_after_graph_dropped() {
    let graph = graph();
    let handle = graph.gesture_handle();
    drop(graph);
    assert!(matches!(
        handle.update(10.0, 100.0, 0),
        Err(CoreError::GestureChannelClosed)
    ));
}

// ═══════════════════════════════════════════════════════════════════
// Snapshot
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_snapshot_is_consistent() {
    let mut graph = NavGraph::new(two_year_series(), instant_settings()).unwrap();
    graph.select_period(Period::OneMonth);
    graph.begin_drag(150.0, 100.0, 0);

    let snapshot = graph.snapshot();
    assert_eq!(snapshot.period, Period::OneMonth);
    assert_eq!(snapshot.series, graph.filtered_series());
    assert_eq!(&snapshot.geometry, graph.geometry());
    assert_eq!(snapshot.curve_svg, graph.geometry().curve_path.to_svg_string());
    assert_eq!(snapshot.touch, graph.touch_info());
    assert_eq!(snapshot.tooltip, graph.tooltip());
    assert!(snapshot.curve_svg.starts_with("M0 "));
    assert!(snapshot.area_svg.ends_with("L300 220L0 220Z"));
    assert!(matches!(
        graph.geometry().area_path.commands().last(),
        Some(PathCommand::Close)
    ));
}

#[test]
fn test_snapshot_json() {
    let mut graph = NavGraph::new(two_year_series(), instant_settings()).unwrap();
    graph.select_period(Period::OneYear);
    graph.begin_drag(0.0, 100.0, 0);

    let json = graph.snapshot_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["period"], "1Y");
    assert_eq!(
        value["series"].as_array().unwrap().len(),
        graph.filtered_series().len()
    );
    assert_eq!(value["series"][0]["nav_date"], "2025-02-06");
    assert_eq!(value["touch"]["date"], "2025-02-06");
    assert_eq!(value["tooltip"]["left"], 0.0);
    assert_eq!(value["geometry"]["curve_path"]["commands"][0]["op"], "move_to");
    assert!(value["curve_svg"].as_str().unwrap().starts_with("M0 "));
}

#[test]
fn test_snapshot_json_without_touch() {
    let json = graph().snapshot_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["touch"].is_null());
    assert!(value["tooltip"].is_null());
    assert_eq!(value["period"], "MAX");
}

#[test]
fn test_raw_records_into_graph() {
    let raw = vec![
        RawNavPoint::new(100.0, "2024-01-01"),
        RawNavPoint::new(90.0, "2024-07-01"),
        RawNavPoint::new(120.0, "2025-01-01"),
    ];
    let graph = NavGraph::new(NavSeries::from_raw(&raw).unwrap(), settings()).unwrap();
    assert_eq!(graph.min_nav(), 90.0);
    assert_eq!(graph.max_nav(), 120.0);
    assert!((graph.return_pct() - 20.0).abs() < 1e-9);
}
