use serde::{Deserialize, Serialize};

/// Lifecycle phase of the chart's drag gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GesturePhase {
    /// No pointer down
    #[default]
    Idle,
    /// Pointer down, waiting out the long-press activation delay
    Pending,
    /// Activated; every update moves the touch position
    Dragging,
    /// Moved too far before activation (a scroll); ignored until release
    Failed,
}

impl std::fmt::Display for GesturePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GesturePhase::Idle => write!(f, "Idle"),
            GesturePhase::Pending => write!(f, "Pending"),
            GesturePhase::Dragging => write!(f, "Dragging"),
            GesturePhase::Failed => write!(f, "Failed"),
        }
    }
}

/// A pointer event delivered by the host gesture system.
///
/// `x` and `y` are chart-local; only `x` moves the touch, `y` counts
/// toward the activation slop. `at_ms` is a monotonic timestamp in
/// milliseconds from any origin the host likes, as long as it is consistent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    Begin { x: f64, y: f64, at_ms: u64 },
    Update { x: f64, y: f64, at_ms: u64 },
    /// Frame tick with no movement; lets a stationary long-press activate
    Poll { at_ms: u64 },
    /// Pointer released
    Finalize,
    /// Gesture interrupted by the system
    Cancel,
}

/// Recognizer configuration for hosts that build their own pan gesture
/// on the transparent overlay above the chart canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureDescriptor {
    /// Distance the pointer must travel before the pan begins (always 0)
    pub min_distance: f64,

    /// Hold time before the pan activates
    pub activate_after_long_press_ms: u64,

    /// Distance (any direction) allowed during the hold before the gesture fails
    pub activation_slop: f64,
}
