//! Pointer gesture bookkeeping for the mounted strip.

/// Wheel `deltaMode` for line-based scrolling
pub const DOM_DELTA_LINE: u32 = 1;
/// Pixels per wheel line
const LINE_HEIGHT_PX: f64 = 120.0;
/// Zoom doubles for every 500 px of wheel travel
const WHEEL_ZOOM_RATE: f64 = 0.002;

/// Relative zoom factor for one wheel event; scrolling up zooms in.
pub fn wheel_zoom_factor(delta_y: f64, delta_mode: u32) -> f64 {
    let delta = if delta_mode == DOM_DELTA_LINE { delta_y * LINE_HEIGHT_PX } else { delta_y };
    if !delta.is_finite() {
        return 1.0;
    }
    2f64.powf(-delta * WHEEL_ZOOM_RATE)
}

/// Drag-to-pan state between pointer down and pointer up
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    pub is_dragging: bool,
    pub last_mouse_x: f64,
}

impl DragState {
    pub fn press(&mut self, x: f64) {
        self.is_dragging = true;
        self.last_mouse_x = x;
    }

    /// Horizontal movement since the last event, or `None` when not dragging.
    pub fn drag_to(&mut self, x: f64) -> Option<f64> {
        if !self.is_dragging {
            return None;
        }
        let dx = x - self.last_mouse_x;
        self.last_mouse_x = x;
        (dx != 0.0).then_some(dx)
    }

    pub fn release(&mut self) {
        self.is_dragging = false;
    }
}
