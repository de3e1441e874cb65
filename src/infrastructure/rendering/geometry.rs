use super::shapes::{Axis, FeatureBar, Point, TextShape, Tick};
use crate::domain::config::DisplayConfig;
use crate::domain::sequence::{Feature, Sequence, Strand};
use crate::domain::viewport::{LinearScale, VisibleWindow};

/// Row index used for vertical placement of overflow features
pub const OVERFLOW_ROW_POSITION: f64 = 0.3;
/// Overflow bars are drawn at this fraction of the bar height
pub const OVERFLOW_HEIGHT_RATIO: f64 = 0.5;

/// Five vertices of a bar whose short edge on the strand side is a tip.
///
/// The tip collapses to a plain rectangle when the bar is narrower than
/// `arrowhead`.
pub fn arrow_points(x: f64, y: f64, height: f64, width: f64, strand: Strand, arrowhead: f64) -> [Point; 5] {
    let tip = if width >= arrowhead { arrowhead } else { 0.0 };
    let mid = y + height / 2.0;
    let bottom = y + height;
    match strand {
        Strand::Forward => [
            Point::rounded(x, y),
            Point::rounded(x + width - tip, y),
            Point::rounded(x + width, mid),
            Point::rounded(x + width - tip, bottom),
            Point::rounded(x, bottom),
        ],
        Strand::Reverse => [
            Point::rounded(x + tip, y),
            Point::rounded(x + width, y),
            Point::rounded(x + width, bottom),
            Point::rounded(x + tip, bottom),
            Point::rounded(x, mid),
        ],
    }
}

/// SVG `points` attribute: `x,y x,y ...`
pub fn points_attr(points: &[Point]) -> String {
    points.iter().map(|p| format!("{},{}", p.x, p.y)).collect::<Vec<_>>().join(" ")
}

/// Top edge of the bar for `row`; rows stack upwards from above the axis.
pub fn bar_top(config: &DisplayConfig, height: f64, row: usize, nrows: usize) -> f64 {
    let lane = if row < nrows { row as f64 } else { OVERFLOW_ROW_POSITION };
    height
        - config.bar_height
        - config.row_gap
        - config.margin
        - config.axis_height
        - config.baseline_lift
        - lane * config.row_pitch()
}

pub fn bar_height(config: &DisplayConfig, row: usize, nrows: usize) -> f64 {
    if row == nrows { OVERFLOW_HEIGHT_RATIO * config.bar_height } else { config.bar_height }
}

/// Bar covering `start - 0.5 ..= end + 0.5`, since both ends are included.
pub fn feature_bar(feature: &Feature, scale: &LinearScale, config: &DisplayConfig, height: f64, nrows: usize) -> FeatureBar {
    let x = scale.apply(feature.start as f64 - 0.5);
    let width = scale.apply(feature.end as f64 + 0.5) - x;
    let y = bar_top(config, height, feature.row, nrows);
    let h = bar_height(config, feature.row, nrows);

    FeatureBar {
        points: arrow_points(x, y, h, width, feature.strand, config.arrowhead),
        fill: feature.color.to_hex(),
        stroke: config.stroke_color.clone(),
        stroke_width: config.stroke_width,
        tooltip: feature.tooltip(),
        row: feature.row,
    }
}

/// Letters are drawn only once a position is wider than the threshold.
pub fn letters_visible(scale: &LinearScale, config: &DisplayConfig) -> bool {
    scale.step_px() > config.letter_threshold_px
}

/// One glyph per sequence position inside `window`.
pub fn sequence_letters(
    sequence: &Sequence,
    window: VisibleWindow,
    scale: &LinearScale,
    config: &DisplayConfig,
    height: f64,
) -> Vec<TextShape> {
    let y = height - config.row_gap / 2.0 - config.margin - config.axis_height;
    window
        .positions(sequence.len())
        .filter_map(|pos| {
            sequence.residue(pos).map(|letter| TextShape {
                text: letter.to_string(),
                x: scale.apply(pos as f64),
                y,
                fill: config.letter_color.clone(),
            })
        })
        .collect()
}

pub fn axis(scale: &LinearScale, config: &DisplayConfig, height: f64) -> Axis {
    let step = scale.tick_step(config.tick_count);
    let ticks = match step {
        Some(step) => scale
            .ticks(config.tick_count)
            .into_iter()
            .map(|value| Tick { x: scale.apply(value), label: LinearScale::tick_label(value, step) })
            .collect(),
        None => Vec::new(),
    };
    Axis { y: height - (config.axis_height + config.margin), range: scale.range(), ticks }
}
