use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current pointer position over the chart. Written only by the
/// gesture controller; everything else reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TouchState {
    /// Chart-local x, already clamped to `[0, width]`. `None` = no touch.
    pub x: Option<f64>,
}

impl TouchState {
    pub fn set(&mut self, x: f64) {
        self.x = Some(x);
    }

    pub fn clear(&mut self) {
        self.x = None;
    }

    pub fn is_active(&self) -> bool {
        self.x.is_some()
    }
}

/// The data point nearest to the active touch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchInfo {
    /// Plot x of the matched point (not the raw touch x)
    pub x: f64,
    pub y: f64,
    pub nav: f64,
    pub date: NaiveDate,
}

/// Tooltip overlay content and placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    /// Left offset of the tooltip box, kept inside the chart where possible
    pub left: f64,

    pub info: TouchInfo,

    /// Formatted NAV, e.g. "₹34.00"
    pub nav_text: String,

    /// Short date, e.g. "6 Feb'26"
    pub date_text: String,
}
