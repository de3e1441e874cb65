/// View parameters controlling zoom and pan of the sequence strip.
///
/// `pan_offset_px` is the horizontal translation of the zoomed content; it
/// is never positive and never drags the content edge past the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub zoom_scale: f64,
    pub pan_offset_px: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl ViewState {
    pub fn new(min_zoom: f64, max_zoom: f64) -> Self {
        Self { zoom_scale: min_zoom, pan_offset_px: 0.0, min_zoom, max_zoom }
    }

    pub fn reset(&mut self) {
        self.zoom_scale = self.min_zoom;
        self.pan_offset_px = 0.0;
    }

    /// How far the content can be dragged before its edge reaches the
    /// viewport edge.
    pub fn max_pan(&self, effective_width: f64) -> f64 {
        (effective_width * self.zoom_scale - effective_width).max(0.0)
    }

    /// Apply an absolute zoom/translate pair, clamping both.
    pub fn set_transform(&mut self, zoom: f64, translate_px: f64, effective_width: f64) {
        self.zoom_scale = if zoom.is_finite() {
            zoom.clamp(self.min_zoom, self.max_zoom)
        } else {
            self.min_zoom
        };
        self.pan_offset_px = if translate_px.is_finite() { translate_px } else { 0.0 };
        self.clamp_pan(effective_width);
    }

    /// Zoom keeping the sequence position under the cursor stable.
    /// `cursor_px` is measured from the left edge of the scale range.
    pub fn zoom_at(&mut self, factor: f64, cursor_px: f64, effective_width: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let old_zoom = self.zoom_scale;
        let new_zoom = (old_zoom * factor).clamp(self.min_zoom, self.max_zoom);
        let translate = cursor_px - (cursor_px - self.pan_offset_px) * new_zoom / old_zoom;
        self.set_transform(new_zoom, translate, effective_width);
    }

    /// Pan by pixel delta.
    pub fn pan(&mut self, delta_px: f64, effective_width: f64) {
        if delta_px.is_finite() {
            self.pan_offset_px += delta_px;
        }
        self.clamp_pan(effective_width);
    }

    fn clamp_pan(&mut self, effective_width: f64) {
        let max_pan = self.max_pan(effective_width);
        self.pan_offset_px = self.pan_offset_px.clamp(-max_pan, 0.0);
    }

    /// Number of sequence positions on screen at the current zoom.
    pub fn visible_window(&self, seq_len: usize) -> usize {
        (seq_len as f64 / self.zoom_scale).ceil() as usize
    }

    /// Fractional offset into the sequence implied by the pan.
    pub fn sequence_offset(&self, seq_len: usize, effective_width: f64) -> f64 {
        let max_pan = self.max_pan(effective_width);
        if max_pan == 0.0 {
            return 0.0;
        }
        let hidden = seq_len.saturating_sub(self.visible_window(seq_len)) as f64;
        -self.pan_offset_px / max_pan * hidden
    }

    /// Scale domain for the current zoom and pan.
    pub fn visible_domain(&self, seq_len: usize, effective_width: f64) -> (f64, f64) {
        let offset = self.sequence_offset(seq_len, effective_width);
        let window = self.visible_window(seq_len) as f64;
        (1.0 + offset - 0.5, offset + window + 0.5)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(1.0, 100.0)
    }
}
