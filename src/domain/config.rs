//! Tunable pixel constants for the sequence strip.
//!
//! Every threshold the layout and label heuristics depend on lives here so a
//! host page can override it with a JSON object, e.g.
//! `{"barHeight": 16, "letterThresholdPx": 9}`. Missing keys keep defaults.

use crate::domain::errors::{DisplayError, DisplayResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayConfig {
    /// Feature bar height in pixels
    pub bar_height: f64,
    /// Gap between feature rows
    pub row_gap: f64,
    /// Space reserved below the rows for the ruler
    pub axis_height: f64,
    /// Left, right, top and bottom margin
    pub margin: f64,
    /// Length of the arrow tip
    pub arrowhead: f64,
    /// Lift of row 0 above the letter band
    pub baseline_lift: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Letters are drawn once one sequence position spans more than this
    pub letter_threshold_px: f64,
    /// Estimated label glyph width used for the fit test
    pub char_width_px: f64,
    /// Fills brighter than this get a dark label
    pub luminance_threshold: f64,
    pub label_baseline_offset: f64,
    pub stroke_width: f64,
    pub stroke_color: String,
    pub dark_label: String,
    pub light_label: String,
    pub letter_color: String,
    /// Approximate number of ruler ticks
    pub tick_count: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bar_height: 13.0,
            row_gap: 8.0,
            axis_height: 20.0,
            margin: 5.0,
            arrowhead: 5.0,
            baseline_lift: 10.0,
            min_zoom: 1.0,
            max_zoom: 100.0,
            letter_threshold_px: 7.0,
            char_width_px: 6.5,
            luminance_threshold: 140.0,
            label_baseline_offset: 3.0,
            stroke_width: 0.3,
            stroke_color: "grey".to_string(),
            dark_label: "#000000".to_string(),
            light_label: "#ffffff".to_string(),
            letter_color: "black".to_string(),
            tick_count: 10,
        }
    }
}

impl DisplayConfig {
    pub fn from_json(json: &str) -> DisplayResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DisplayResult<()> {
        if self.bar_height.is_nan() || self.bar_height <= 0.0 {
            return Err(DisplayError::Config(format!(
                "barHeight must be positive, got {}",
                self.bar_height
            )));
        }
        if self.row_gap < 0.0 || self.margin < 0.0 || self.axis_height < 0.0 {
            return Err(DisplayError::Config("rowGap, margin and axisHeight must not be negative".into()));
        }
        if self.min_zoom.is_nan() || self.max_zoom.is_nan() || self.min_zoom < 1.0 || self.max_zoom < self.min_zoom {
            return Err(DisplayError::Config(format!(
                "zoom extent [{}, {}] must satisfy 1 <= min <= max",
                self.min_zoom, self.max_zoom
            )));
        }
        if self.char_width_px.is_nan() || self.char_width_px <= 0.0 {
            return Err(DisplayError::Config("charWidthPx must be positive".into()));
        }
        Ok(())
    }

    /// Vertical distance between two neighbouring rows.
    pub fn row_pitch(&self) -> f64 {
        self.bar_height + self.row_gap
    }
}
