use serde::{Deserialize, Serialize};

/// A NAV point projected into chart-local pixel space.
///
/// Origin is the chart's top-left corner; y grows downward, so a higher
/// NAV has a smaller y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One drawing instruction of a vector path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CubicTo {
        cx1: f64,
        cy1: f64,
        cx2: f64,
        cy2: f64,
        x: f64,
        y: f64,
    },
    Close,
}

/// A renderer-agnostic vector path.
///
/// The frontend can replay `commands()` onto any 2D surface or hand
/// `to_svg_string()` to an SVG-compatible path parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartPath {
    commands: Vec<PathCommand>,
}

impl ChartPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::MoveTo { x, y });
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::LineTo { x, y });
    }

    pub fn cubic_to(&mut self, cx1: f64, cy1: f64, cx2: f64, cy2: f64, x: f64, y: f64) {
        self.commands.push(PathCommand::CubicTo {
            cx1,
            cy1,
            cx2,
            cy2,
            x,
            y,
        });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// SVG path data (`M0 10C…Z`). Empty path → empty string.
    pub fn to_svg_string(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for ChartPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo { x, y } => write!(f, "M{x} {y}")?,
                PathCommand::LineTo { x, y } => write!(f, "L{x} {y}")?,
                PathCommand::CubicTo {
                    cx1,
                    cy1,
                    cx2,
                    cy2,
                    x,
                    y,
                } => write!(f, "C{cx1} {cy1} {cx2} {cy2} {x} {y}")?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Everything needed to draw the NAV curve for one filtered series.
///
/// `points` is index-aligned with the filtered series it was built from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub points: Vec<PlotPoint>,

    /// Stroked line through all points
    pub curve_path: ChartPath,

    /// The curve closed down to the chart's bottom edge, for gradient fill
    pub area_path: ChartPath,

    /// Lowest NAV in the filtered series (0 when empty)
    pub min_nav: f64,

    /// Highest NAV in the filtered series (0 when empty)
    pub max_nav: f64,
}
