use std::sync::mpsc::{self, Receiver, Sender};

use crate::errors::CoreError;
use crate::models::gesture::{GestureDescriptor, GestureEvent, GesturePhase};
use crate::models::settings::GraphSettings;
use crate::models::touch::TouchState;

/// Owns the drag lifecycle over the chart and is the only writer of
/// `TouchState`.
///
/// A drag activates after a long-press hold so that a quick vertical swipe
/// still scrolls the screen. Once active, every update moves the touch to
/// the pointer (clamped to the chart), and release or cancel always clears
/// it.
#[derive(Debug, Clone)]
pub struct GestureController {
    phase: GesturePhase,
    activation_delay_ms: u64,
    activation_slop: f64,
    chart_width: f64,
    began_at_ms: u64,
    origin_x: f64,
    origin_y: f64,
    last_x: f64,
}

impl GestureController {
    pub fn new(settings: &GraphSettings) -> Self {
        Self {
            phase: GesturePhase::Idle,
            activation_delay_ms: settings.activation_delay_ms,
            activation_slop: settings.activation_slop,
            chart_width: settings.dimensions.width,
            began_at_ms: 0,
            origin_x: 0.0,
            origin_y: 0.0,
            last_x: 0.0,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn set_chart_width(&mut self, width: f64) {
        self.chart_width = width;
    }

    pub fn descriptor(&self) -> GestureDescriptor {
        GestureDescriptor {
            min_distance: 0.0,
            activate_after_long_press_ms: self.activation_delay_ms,
            activation_slop: self.activation_slop,
        }
    }

    /// Dispatch one host event.
    pub fn handle(&mut self, event: GestureEvent, touch: &mut TouchState) {
        match event {
            GestureEvent::Begin { x, y, at_ms } => self.begin(x, y, at_ms, touch),
            GestureEvent::Update { x, y, at_ms } => self.update(x, y, at_ms, touch),
            GestureEvent::Poll { at_ms } => self.poll(at_ms, touch),
            GestureEvent::Finalize => self.finalize(touch),
            GestureEvent::Cancel => self.cancel(touch),
        }
    }

    /// Pointer down. Starts the hold; with no delay the drag is live at once.
    pub fn begin(&mut self, x: f64, y: f64, at_ms: u64, touch: &mut TouchState) {
        self.began_at_ms = at_ms;
        self.origin_x = x;
        self.origin_y = y;
        self.last_x = x;
        touch.clear();

        if self.activation_delay_ms == 0 {
            self.activate(touch);
        } else {
            self.transition(GesturePhase::Pending);
        }
    }

    /// Pointer moved. During the hold, travel in any direction beyond the
    /// slop fails the gesture, so a vertical scroll never becomes a drag.
    pub fn update(&mut self, x: f64, y: f64, at_ms: u64, touch: &mut TouchState) {
        match self.phase {
            // A move without a preceding begin still starts the hold
            GesturePhase::Idle => self.begin(x, y, at_ms, touch),
            GesturePhase::Pending => {
                self.last_x = x;
                if (x - self.origin_x).hypot(y - self.origin_y) > self.activation_slop {
                    self.transition(GesturePhase::Failed);
                } else if self.hold_elapsed(at_ms) {
                    self.activate(touch);
                }
            }
            GesturePhase::Dragging => {
                self.last_x = x;
                touch.set(self.clamp(x));
            }
            GesturePhase::Failed => {}
        }
    }

    /// Frame tick: activates a finger held still for the full delay.
    pub fn poll(&mut self, at_ms: u64, touch: &mut TouchState) {
        if self.phase == GesturePhase::Pending && self.hold_elapsed(at_ms) {
            self.activate(touch);
        }
    }

    /// Pointer released. Always clears the touch, wherever it ended.
    pub fn finalize(&mut self, touch: &mut TouchState) {
        touch.clear();
        self.transition(GesturePhase::Idle);
    }

    /// Gesture interrupted by the system; same outcome as a release.
    pub fn cancel(&mut self, touch: &mut TouchState) {
        self.finalize(touch);
    }

    fn activate(&mut self, touch: &mut TouchState) {
        self.transition(GesturePhase::Dragging);
        touch.set(self.clamp(self.last_x));
    }

    fn hold_elapsed(&self, at_ms: u64) -> bool {
        at_ms.saturating_sub(self.began_at_ms) >= self.activation_delay_ms
    }

    fn clamp(&self, x: f64) -> f64 {
        x.max(0.0).min(self.chart_width)
    }

    fn transition(&mut self, next: GesturePhase) {
        if self.phase != next {
            tracing::trace!(from = %self.phase, to = %next, "gesture phase change");
            self.phase = next;
        }
    }
}

// ── Cross-thread hand-off ───────────────────────────────────────────

/// Cloneable, `Send` handle for delivering pointer events from the host's
/// gesture thread. Events are queued and applied by the graph's owner in
/// arrival order.
#[derive(Debug, Clone)]
pub struct GestureHandle {
    sender: Sender<GestureEvent>,
}

impl GestureHandle {
    pub fn send(&self, event: GestureEvent) -> Result<(), CoreError> {
        self.sender
            .send(event)
            .map_err(|_| CoreError::GestureChannelClosed)
    }

    pub fn begin(&self, x: f64, y: f64, at_ms: u64) -> Result<(), CoreError> {
        self.send(GestureEvent::Begin { x, y, at_ms })
    }

    pub fn update(&self, x: f64, y: f64, at_ms: u64) -> Result<(), CoreError> {
        self.send(GestureEvent::Update { x, y, at_ms })
    }

    pub fn poll(&self, at_ms: u64) -> Result<(), CoreError> {
        self.send(GestureEvent::Poll { at_ms })
    }

    pub fn finalize(&self) -> Result<(), CoreError> {
        self.send(GestureEvent::Finalize)
    }

    pub fn cancel(&self) -> Result<(), CoreError> {
        self.send(GestureEvent::Cancel)
    }
}

/// Receiving side of the gesture queue, held by the graph's owner.
#[derive(Debug)]
pub struct GestureQueue {
    sender: Sender<GestureEvent>,
    receiver: Receiver<GestureEvent>,
}

impl GestureQueue {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    pub fn handle(&self) -> GestureHandle {
        GestureHandle {
            sender: self.sender.clone(),
        }
    }

    /// Take every event queued so far without blocking.
    pub fn drain(&self) -> Vec<GestureEvent> {
        self.receiver.try_iter().collect()
    }
}

impl Default for GestureQueue {
    fn default() -> Self {
        Self::new()
    }
}
