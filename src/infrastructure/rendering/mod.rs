//! Turns laid-out features into vector shapes and SVG markup.

pub mod geometry;
pub mod labels;
pub mod shapes;
pub mod svg;

pub use shapes::*;
pub use svg::render_svg;
