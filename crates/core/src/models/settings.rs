use serde::{Deserialize, Serialize};

use super::period::Period;
use crate::errors::CoreError;

/// Outer margin of the card that hosts the graph.
pub const CARD_MARGIN: f64 = 16.0;
/// Inner padding of the card that hosts the graph.
pub const CARD_PADDING: f64 = 16.0;
pub const GRAPH_HEIGHT: f64 = 220.0;
pub const PADDING_TOP: f64 = 10.0;
pub const PADDING_BOTTOM: f64 = 10.0;
/// Screen width assumed by `ChartDimensions::default()`.
pub const DEFAULT_SCREEN_WIDTH: f64 = 390.0;

/// Long-press hold before a drag on the chart is recognized.
pub const ACTIVATION_DELAY_MS: u64 = 150;
/// Pointer travel tolerated during the hold.
pub const ACTIVATION_SLOP: f64 = 10.0;

/// Pixel layout of the chart canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
}

impl ChartDimensions {
    pub fn new(width: f64, height: f64, padding_top: f64, padding_bottom: f64) -> Self {
        Self {
            width,
            height,
            padding_top,
            padding_bottom,
        }
    }

    /// Layout for a host screen: the graph spans the card's inner width.
    pub fn for_screen_width(screen_width: f64) -> Self {
        Self::new(
            screen_width - CARD_MARGIN * 2.0 - CARD_PADDING * 2.0,
            GRAPH_HEIGHT,
            PADDING_TOP,
            PADDING_BOTTOM,
        )
    }

    /// Height of the vertical band the curve is drawn into.
    pub fn draw_height(&self) -> f64 {
        self.height - self.padding_top - self.padding_bottom
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let all_finite = [self.width, self.height, self.padding_top, self.padding_bottom]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(CoreError::InvalidDimensions(format!(
                "all values must be finite, got {self:?}"
            )));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(CoreError::InvalidDimensions(format!(
                "width and height must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.padding_top < 0.0 || self.padding_bottom < 0.0 {
            return Err(CoreError::InvalidDimensions(
                "paddings must not be negative".to_string(),
            ));
        }
        if self.draw_height() < 0.0 {
            return Err(CoreError::InvalidDimensions(format!(
                "paddings ({} + {}) exceed height {}",
                self.padding_top, self.padding_bottom, self.height
            )));
        }
        Ok(())
    }
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self::for_screen_width(DEFAULT_SCREEN_WIDTH)
    }
}

/// Graph configuration supplied by the host screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSettings {
    /// Canvas layout.
    pub dimensions: ChartDimensions,

    /// Period selected when the graph is first shown.
    #[serde(default)]
    pub default_period: Period,

    /// Long-press hold (ms) before dragging starts. 0 activates on touch-down.
    pub activation_delay_ms: u64,

    /// Horizontal travel (px) allowed during the hold before the gesture
    /// is treated as a scroll and abandoned.
    pub activation_slop: f64,
}

impl GraphSettings {
    pub fn with_dimensions(dimensions: ChartDimensions) -> Self {
        Self {
            dimensions,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        self.dimensions.validate()?;
        if !(self.activation_slop.is_finite() && self.activation_slop >= 0.0) {
            return Err(CoreError::InvalidSettings(format!(
                "activation slop must be a non-negative number, got {}",
                self.activation_slop
            )));
        }
        Ok(())
    }
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            dimensions: ChartDimensions::default(),
            default_period: Period::Max,
            activation_delay_ms: ACTIVATION_DELAY_MS,
            activation_slop: ACTIVATION_SLOP,
        }
    }
}
