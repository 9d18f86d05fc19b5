use crate::models::chart::{ChartGeometry, ChartPath, PlotPoint};
use crate::models::nav::NavPoint;
use crate::models::settings::ChartDimensions;

/// Projects a filtered NAV series into chart space and builds the
/// drawable curve and area paths.
///
/// The Y scale always comes from the filtered series' own min/max, so the
/// chart re-zooms whenever the period changes. X is spaced evenly by index
/// regardless of the calendar gap between samples.
pub struct GeometryService;

impl GeometryService {
    pub fn new() -> Self {
        Self
    }

    pub fn build_geometry(&self, filtered: &[NavPoint], dims: &ChartDimensions) -> ChartGeometry {
        if filtered.is_empty() {
            return ChartGeometry::default();
        }

        let (min_nav, max_nav) = filtered
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.nav), hi.max(p.nav))
            });

        let points = self.project(filtered, dims, min_nav, max_nav);
        let curve_path = self.curve_path(&points);
        let area_path = self.area_path(&points, dims.height);

        ChartGeometry {
            points,
            curve_path,
            area_path,
            min_nav,
            max_nav,
        }
    }

    /// Map each NAV to a plot point. A flat series (zero range) lands on
    /// the bottom of the drawing band.
    fn project(
        &self,
        filtered: &[NavPoint],
        dims: &ChartDimensions,
        min_nav: f64,
        max_nav: f64,
    ) -> Vec<PlotPoint> {
        let range = match max_nav - min_nav {
            r if r == 0.0 => 1.0,
            r => r,
        };
        let draw_height = dims.draw_height();
        let last_index = filtered.len().saturating_sub(1).max(1) as f64;

        filtered
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let x = (i as f64 / last_index) * dims.width;
                let y = dims.padding_top + draw_height
                    - ((p.nav - min_nav) / range) * draw_height;
                PlotPoint::new(x, y)
            })
            .collect()
    }

    /// Smoothed line: one cubic per segment, control points a third of the
    /// way in from each end at the end's own height (flat tangents at
    /// every knot).
    fn curve_path(&self, points: &[PlotPoint]) -> ChartPath {
        let mut path = ChartPath::new();
        if points.len() < 2 {
            return path;
        }

        path.move_to(points[0].x, points[0].y);
        for pair in points.windows(2) {
            let (p, q) = (pair[0], pair[1]);
            let third = (q.x - p.x) / 3.0;
            path.cubic_to(p.x + third, p.y, q.x - third, q.y, q.x, q.y);
        }
        path
    }

    /// The curve closed down to `bottom` for the gradient fill.
    fn area_path(&self, points: &[PlotPoint], bottom: f64) -> ChartPath {
        let mut path = self.curve_path(points);
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            if !path.is_empty() {
                path.line_to(last.x, bottom);
                path.line_to(first.x, bottom);
                path.close();
            }
        }
        path
    }
}

impl Default for GeometryService {
    fn default() -> Self {
        Self::new()
    }
}
