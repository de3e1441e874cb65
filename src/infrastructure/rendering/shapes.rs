use serde::Serialize;
use strum::{AsRefStr, EnumIter};

/// Integer pixel vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    /// Rounds half up, matching browser `Math.round`.
    pub fn rounded(x: f64, y: f64) -> Self {
        Self { x: (x + 0.5).floor() as i64, y: (y + 0.5).floor() as i64 }
    }
}

/// Arrow-shaped feature bar with its hover text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureBar {
    pub points: [Point; 5],
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub tooltip: String,
    pub row: usize,
}

/// Horizontally centred text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextShape {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub x: f64,
    pub label: String,
}

/// Ruler along the bottom edge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    /// Vertical translation of the axis group
    pub y: f64,
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

/// Drawing layers in paint order
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Layer {
    Features,
    FeatureLabels,
    Sequence,
    Axis,
}

/// Everything one redraw produced
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub bars: Vec<FeatureBar>,
    pub labels: Vec<TextShape>,
    pub letters: Vec<TextShape>,
    pub axis: Option<Axis>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, ..Self::default() }
    }

    /// Drop every shape; the canvas size stays.
    pub fn clear(&mut self) {
        self.bars.clear();
        self.labels.clear();
        self.letters.clear();
        self.axis = None;
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty() && self.labels.is_empty() && self.letters.is_empty() && self.axis.is_none()
    }

    pub fn shape_count(&self) -> usize {
        self.bars.len() + self.labels.len() + self.letters.len() + usize::from(self.axis.is_some())
    }
}
