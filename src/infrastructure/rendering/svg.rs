//! SVG markup for a [`Scene`].
//!
//! The structure mirrors what the host stylesheet targets: feature polygons
//! carry a `<title>` tooltip, labels use the `feature-label` class and the
//! ruler lives in a `g.axis` group.

use super::geometry::points_attr;
use super::shapes::{Axis, Layer, Scene, TextShape};
use strum::IntoEnumIterator;

const TICK_SIZE: f64 = 6.0;

pub fn render_svg(scene: &Scene) -> String {
    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        scene.width, scene.height
    );

    for layer in Layer::iter() {
        match layer {
            Layer::Features => {
                open_group(&mut out, layer);
                for bar in &scene.bars {
                    out.push_str(&format!(
                        r#"<polygon points="{}" fill="{}" stroke="{}" stroke-width="{}"><title>{}</title></polygon>"#,
                        points_attr(&bar.points),
                        escape(&bar.fill),
                        escape(&bar.stroke),
                        bar.stroke_width,
                        escape(&bar.tooltip)
                    ));
                }
                out.push_str("</g>");
            }
            Layer::FeatureLabels => {
                open_group(&mut out, layer);
                for label in &scene.labels {
                    push_text(&mut out, label, Some("feature-label"));
                }
                out.push_str("</g>");
            }
            Layer::Sequence if !scene.letters.is_empty() => {
                open_group(&mut out, layer);
                for letter in &scene.letters {
                    push_text(&mut out, letter, None);
                }
                out.push_str("</g>");
            }
            Layer::Axis => {
                if let Some(axis) = &scene.axis {
                    push_axis(&mut out, axis);
                }
            }
            Layer::Sequence => {}
        }
    }

    out.push_str("</svg>");
    out
}

fn open_group(out: &mut String, layer: Layer) {
    out.push_str(&format!(r#"<g class="{}">"#, layer.as_ref()));
}

fn push_text(out: &mut String, text: &TextShape, class: Option<&str>) {
    let class_attr = class.map(|c| format!(r#" class="{c}""#)).unwrap_or_default();
    out.push_str(&format!(
        r#"<text{} x="{}" y="{}" text-anchor="middle" fill="{}">{}</text>"#,
        class_attr,
        text.x,
        text.y,
        escape(&text.fill),
        escape(&text.text)
    ));
}

fn push_axis(out: &mut String, axis: &Axis) {
    let (r0, r1) = axis.range;
    out.push_str(&format!(r#"<g class="axis" transform="translate(0,{})">"#, axis.y));
    for tick in &axis.ticks {
        out.push_str(&format!(
            r#"<g class="tick" transform="translate({},0)"><line y2="{}"/><text y="{}" dy=".71em" text-anchor="middle">{}</text></g>"#,
            tick.x,
            TICK_SIZE,
            TICK_SIZE + 3.0,
            escape(&tick.label)
        ));
    }
    out.push_str(&format!(
        r#"<path class="domain" d="M{r0},{TICK_SIZE}V0H{r1}V{TICK_SIZE}"/>"#
    ));
    out.push_str("</g>");
}

/// Escape text for element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
