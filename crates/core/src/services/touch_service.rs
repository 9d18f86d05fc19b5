use crate::models::chart::PlotPoint;
use crate::models::nav::NavPoint;
use crate::models::settings::ChartDimensions;
use crate::models::touch::{TouchInfo, Tooltip};
use crate::services::format::{format_nav, format_short_date};

/// Distance from the touched point to the tooltip's left edge.
pub const TOOLTIP_ANCHOR_OFFSET: f64 = 50.0;
/// Rendered tooltip width used to keep it inside the chart.
pub const TOOLTIP_WIDTH: f64 = 120.0;

/// Maps a touch position onto the nearest plotted NAV point.
pub struct TouchService;

impl TouchService {
    pub fn new() -> Self {
        Self
    }

    /// Nearest point to `touch_x` by horizontal distance.
    ///
    /// Linear scan, O(n). Only a strictly closer point replaces the current
    /// best, so on ties the lowest index wins. `points` and `filtered` must
    /// be index-aligned (as produced by `GeometryService`).
    pub fn resolve(
        &self,
        touch_x: Option<f64>,
        points: &[PlotPoint],
        filtered: &[NavPoint],
    ) -> Option<TouchInfo> {
        let touch_x = touch_x?;
        if points.is_empty() || filtered.is_empty() {
            return None;
        }

        let mut closest_idx = 0;
        let mut closest_dist = f64::INFINITY;
        for (i, point) in points.iter().enumerate() {
            let dist = (point.x - touch_x).abs();
            if dist < closest_dist {
                closest_dist = dist;
                closest_idx = i;
            }
        }

        let point = points[closest_idx];
        let source = filtered.get(closest_idx)?;
        Some(TouchInfo {
            x: point.x,
            y: point.y,
            nav: source.nav,
            date: source.date,
        })
    }

    /// Tooltip content, placed left of the touch and kept inside the chart.
    /// On charts narrower than the tooltip it pins to `width - TOOLTIP_WIDTH`.
    pub fn tooltip(&self, info: TouchInfo, dims: &ChartDimensions) -> Tooltip {
        let left = (info.x - TOOLTIP_ANCHOR_OFFSET)
            .max(0.0)
            .min(dims.width - TOOLTIP_WIDTH);

        Tooltip {
            left,
            info,
            nav_text: format_nav(info.nav),
            date_text: format_short_date(info.date),
        }
    }
}

impl Default for TouchService {
    fn default() -> Self {
        Self::new()
    }
}
