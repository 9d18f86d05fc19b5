pub mod errors;
pub mod models;
pub mod services;

use models::{
    chart::ChartGeometry,
    gesture::{GestureDescriptor, GestureEvent, GesturePhase},
    nav::{NavPoint, NavSeries},
    period::Period,
    settings::{ChartDimensions, GraphSettings},
    snapshot::GraphSnapshot,
    state::GraphState,
    touch::{TouchInfo, Tooltip},
};
use services::{
    geometry_service::GeometryService,
    gesture_service::{GestureController, GestureHandle, GestureQueue},
    period_service::PeriodService,
    touch_service::TouchService,
};

use errors::CoreError;

/// Main entry point for the NAV graph core.
///
/// Holds the full NAV series, the graph settings and the interactive state
/// (selected period, touch position), and keeps the filtered series and
/// geometry memoized: they are rebuilt only when the series, the period or
/// the dimensions change. Touch lookups run on every read against the
/// memoized points.
#[must_use]
pub struct NavGraph {
    series: NavSeries,
    settings: GraphSettings,
    state: GraphState,
    gesture: GestureController,
    gesture_queue: GestureQueue,
    filtered: Vec<NavPoint>,
    geometry: ChartGeometry,
    period_service: PeriodService,
    geometry_service: GeometryService,
    touch_service: TouchService,
}

impl std::fmt::Debug for NavGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavGraph")
            .field("series", &self.series.len())
            .field("filtered", &self.filtered.len())
            .field("state", &self.state)
            .field("gesture", &self.gesture.phase())
            .field("settings", &self.settings)
            .finish()
    }
}

impl NavGraph {
    /// Build a graph over an accepted series. Settings are validated here.
    pub fn new(series: NavSeries, settings: GraphSettings) -> Result<Self, CoreError> {
        settings.validate()?;

        let mut graph = Self {
            series,
            state: GraphState::new(settings.default_period),
            gesture: GestureController::new(&settings),
            gesture_queue: GestureQueue::new(),
            settings,
            filtered: Vec::new(),
            geometry: ChartGeometry::default(),
            period_service: PeriodService::new(),
            geometry_service: GeometryService::new(),
            touch_service: TouchService::new(),
        };
        graph.recompute();
        Ok(graph)
    }

    /// Parse a JSON array of `{ "nav", "nav_date" }` records and build a graph.
    /// Any malformed date or NAV fails the whole load.
    pub fn from_json(json: &str, settings: GraphSettings) -> Result<Self, CoreError> {
        let series = NavSeries::from_json(json)?;
        Self::new(series, settings)
    }

    // ── Inputs ──────────────────────────────────────────────────────

    /// Replace the NAV series. Any active touch is dropped.
    pub fn set_series(&mut self, series: NavSeries) {
        self.series = series;
        self.gesture.cancel(&mut self.state.touch);
        self.recompute();
    }

    /// Change the canvas layout. Any active touch is dropped.
    pub fn set_dimensions(&mut self, dimensions: ChartDimensions) -> Result<(), CoreError> {
        dimensions.validate()?;
        self.settings.dimensions = dimensions;
        self.gesture.set_chart_width(dimensions.width);
        self.gesture.cancel(&mut self.state.touch);
        self.recompute();
        Ok(())
    }

    /// Select a period chip. Always ends any drag in progress and clears
    /// the tooltip, even when re-selecting the current period.
    pub fn select_period(&mut self, period: Period) {
        self.gesture.cancel(&mut self.state.touch);
        if self.state.selected_period != period {
            tracing::debug!(from = %self.state.selected_period, to = %period, "period selected");
            self.state.selected_period = period;
            self.recompute();
        }
    }

    #[must_use]
    pub fn selected_period(&self) -> Period {
        self.state.selected_period
    }

    #[must_use]
    pub fn series(&self) -> &NavSeries {
        &self.series
    }

    #[must_use]
    pub fn settings(&self) -> &GraphSettings {
        &self.settings
    }

    #[must_use]
    pub fn state(&self) -> &GraphState {
        &self.state
    }

    // ── Gestures ────────────────────────────────────────────────────

    pub fn begin_drag(&mut self, x: f64, y: f64, at_ms: u64) {
        self.gesture.begin(x, y, at_ms, &mut self.state.touch);
    }

    pub fn update_drag(&mut self, x: f64, y: f64, at_ms: u64) {
        self.gesture.update(x, y, at_ms, &mut self.state.touch);
    }

    /// Frame tick while the finger is down but not moving.
    pub fn poll_drag(&mut self, at_ms: u64) {
        self.gesture.poll(at_ms, &mut self.state.touch);
    }

    pub fn finalize_drag(&mut self) {
        self.gesture.finalize(&mut self.state.touch);
    }

    pub fn cancel_drag(&mut self) {
        self.gesture.cancel(&mut self.state.touch);
    }

    pub fn handle_gesture(&mut self, event: GestureEvent) {
        self.gesture.handle(event, &mut self.state.touch);
    }

    #[must_use]
    pub fn gesture_phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    /// Recognizer settings for hosts that attach their own pan gesture.
    #[must_use]
    pub fn gesture_descriptor(&self) -> GestureDescriptor {
        self.gesture.descriptor()
    }

    /// A `Send` handle for feeding pointer events from another thread.
    /// Events wait in a queue until `pump_gestures` is called.
    #[must_use]
    pub fn gesture_handle(&self) -> GestureHandle {
        self.gesture_queue.handle()
    }

    /// Apply every queued gesture event in arrival order.
    /// Returns how many were applied.
    pub fn pump_gestures(&mut self) -> usize {
        let events = self.gesture_queue.drain();
        for event in &events {
            self.gesture.handle(*event, &mut self.state.touch);
        }
        events.len()
    }

    // ── Derived data ────────────────────────────────────────────────

    /// The series restricted to the selected period.
    #[must_use]
    pub fn filtered_series(&self) -> &[NavPoint] {
        &self.filtered
    }

    /// Signed return over the selected period, in percent.
    #[must_use]
    pub fn return_pct(&self) -> f64 {
        self.period_service.return_pct(&self.filtered)
    }

    #[must_use]
    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn min_nav(&self) -> f64 {
        self.geometry.min_nav
    }

    #[must_use]
    pub fn max_nav(&self) -> f64 {
        self.geometry.max_nav
    }

    /// The point under the finger, or `None` when nothing is touched.
    #[must_use]
    pub fn touch_info(&self) -> Option<TouchInfo> {
        self.touch_service
            .resolve(self.state.touch.x, &self.geometry.points, &self.filtered)
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<Tooltip> {
        self.touch_info()
            .map(|info| self.touch_service.tooltip(info, &self.settings.dimensions))
    }

    /// Everything the renderer needs, read in one go.
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        let touch = self.touch_info();
        GraphSnapshot {
            period: self.state.selected_period,
            series: self.filtered.clone(),
            return_pct: self.return_pct(),
            curve_svg: self.geometry.curve_path.to_svg_string(),
            area_svg: self.geometry.area_path.to_svg_string(),
            geometry: self.geometry.clone(),
            touch,
            tooltip: touch.map(|info| self.touch_service.tooltip(info, &self.settings.dimensions)),
        }
    }

    /// The snapshot as pretty-printed JSON.
    pub fn snapshot_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize graph snapshot: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn recompute(&mut self) {
        self.filtered = self
            .period_service
            .filter(self.series.points(), self.state.selected_period)
            .into_owned();
        self.geometry = self
            .geometry_service
            .build_geometry(&self.filtered, &self.settings.dimensions);

        tracing::debug!(
            period = %self.state.selected_period,
            total = self.series.len(),
            filtered = self.filtered.len(),
            min_nav = self.geometry.min_nav,
            max_nav = self.geometry.max_nav,
            "recomputed NAV graph"
        );
    }
}
