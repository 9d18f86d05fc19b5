use serde::{Deserialize, Serialize};

use super::chart::ChartGeometry;
use super::nav::NavPoint;
use super::period::Period;
use super::touch::{TouchInfo, Tooltip};

/// One consistent read of everything the renderer draws.
///
/// The core computes all the numbers; the frontend only renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub period: Period,

    /// The filtered series the geometry was built from
    pub series: Vec<NavPoint>,

    /// Signed return over the filtered series, in percent
    pub return_pct: f64,

    pub geometry: ChartGeometry,

    /// `geometry.curve_path` as SVG path data
    pub curve_svg: String,

    /// `geometry.area_path` as SVG path data
    pub area_svg: String,

    pub touch: Option<TouchInfo>,
    pub tooltip: Option<Tooltip>,
}
