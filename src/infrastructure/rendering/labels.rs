use super::geometry::bar_top;
use super::shapes::TextShape;
use crate::domain::config::DisplayConfig;
use crate::domain::sequence::{Feature, Rgb};
use crate::domain::viewport::{LinearScale, VisibleWindow};

/// Which side of the luminance threshold a fill falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelTone {
    Dark,
    Light,
}

/// Dark text on fills brighter than the threshold, light text otherwise.
///
/// The default threshold of 140 sits below the perceptual midline (~186),
/// so mid-range fills get dark labels.
pub fn label_tone(fill: &Rgb, config: &DisplayConfig) -> LabelTone {
    if fill.luminance() > config.luminance_threshold { LabelTone::Dark } else { LabelTone::Light }
}

pub fn text_color<'a>(fill: &Rgb, config: &'a DisplayConfig) -> &'a str {
    match label_tone(fill, config) {
        LabelTone::Dark => &config.dark_label,
        LabelTone::Light => &config.light_label,
    }
}

/// Estimated text width must stay strictly below the bar width.
pub fn label_fits(name: &str, bar_width_px: f64, config: &DisplayConfig) -> bool {
    name.chars().count() as f64 * config.char_width_px < bar_width_px
}

pub fn is_visible(feature: &Feature, window: VisibleWindow) -> bool {
    feature.intersects(window.start, window.end)
}

/// Label centred in the feature's bar, or `None` when the name is too long.
pub fn feature_label(
    feature: &Feature,
    scale: &LinearScale,
    config: &DisplayConfig,
    height: f64,
    nrows: usize,
) -> Option<TextShape> {
    let bar_width = scale.apply(feature.end as f64) - scale.apply(feature.start as f64);
    if !label_fits(&feature.name, bar_width, config) {
        return None;
    }
    let center = feature.start as f64 + (feature.end - feature.start) as f64 / 2.0;
    let top = bar_top(config, height, feature.row, nrows);
    Some(TextShape {
        text: feature.name.clone(),
        x: scale.apply(center),
        y: top + config.bar_height - config.label_baseline_offset,
        fill: text_color(&feature.color, config).to_string(),
    })
}
