use insta::assert_json_snapshot;
use seqdisplay_wasm::domain::config::DisplayConfig;
use seqdisplay_wasm::domain::sequence::{Feature, Rgb, Sequence, Strand};
use seqdisplay_wasm::domain::viewport::{LinearScale, VisibleWindow};
use seqdisplay_wasm::infrastructure::rendering::geometry::{
    arrow_points, bar_height, feature_bar, letters_visible, points_attr, sequence_letters,
};
use seqdisplay_wasm::infrastructure::rendering::labels::feature_label;

const HEIGHT: f64 = 100.0;
const NROWS: usize = 3;

fn scale() -> LinearScale {
    LinearScale::new((0.5, 100.5), (5.0, 205.0))
}

fn feature(name: &str, strand: Strand, start: usize, end: usize, row: usize) -> Feature {
    let mut f = Feature::new(name, "CDS", Rgb::new(0xFF, 0xFF, 0xFF), strand, start, end);
    f.row = row;
    f
}

#[test]
fn forward_bar_snapshot() {
    let config = DisplayConfig::default();
    let bar = feature_bar(&feature("lacZ", Strand::Forward, 11, 20, 0), &scale(), &config, HEIGHT, NROWS);

    assert_json_snapshot!(bar.points, @r###"
    [
      {
        "x": 25,
        "y": 44
      },
      {
        "x": 40,
        "y": 44
      },
      {
        "x": 45,
        "y": 51
      },
      {
        "x": 40,
        "y": 57
      },
      {
        "x": 25,
        "y": 57
      }
    ]
    "###);
    assert_eq!(bar.fill, "#FFFFFF");
    assert_eq!(bar.stroke, "grey");
    assert_eq!(bar.tooltip, "CDS: lacZ\n---->\n[11 - 20]");
}

#[test]
fn reverse_bar_points_left_one_row_up() {
    let config = DisplayConfig::default();
    let bar = feature_bar(&feature("bla", Strand::Reverse, 11, 20, 1), &scale(), &config, HEIGHT, NROWS);
    assert_eq!(points_attr(&bar.points), "30,23 45,23 45,36 30,36 25,30");
}

#[test]
fn overflow_bar_is_half_height_below_row_one() {
    let config = DisplayConfig::default();
    let bar = feature_bar(&feature("extra", Strand::Forward, 11, 20, NROWS), &scale(), &config, HEIGHT, NROWS);
    assert_eq!(points_attr(&bar.points), "25,38 40,38 45,41 40,44 25,44");
    assert_eq!(bar_height(&config, NROWS, NROWS), 6.5);
    assert_eq!(bar_height(&config, 0, NROWS), 13.0);
}

#[test]
fn narrow_bar_has_no_tip() {
    let points = arrow_points(10.0, 20.0, 10.0, 4.0, Strand::Reverse, 5.0);
    assert_eq!(points_attr(&points), "10,20 14,20 14,30 10,30 10,25");
}

#[test]
fn label_is_centred_in_its_bar() {
    let config = DisplayConfig::default();
    let label = feature_label(&feature("lacZ", Strand::Forward, 1, 50, 0), &scale(), &config, HEIGHT, NROWS).unwrap();
    assert_eq!(label.text, "lacZ");
    assert_eq!(label.x, 55.0);
    assert_eq!(label.y, 54.0);
    assert_eq!(label.fill, "#000000");

    let short = feature("a-very-long-name", Strand::Forward, 1, 10, 0);
    assert!(feature_label(&short, &scale(), &config, HEIGHT, NROWS).is_none());
}

#[test]
fn letters_only_when_zoomed_in() {
    let config = DisplayConfig::default();
    assert!(!letters_visible(&scale(), &config));

    let zoomed = LinearScale::new((0.5, 10.5), (5.0, 205.0));
    assert!(letters_visible(&zoomed, &config));

    let sequence = Sequence::new("ACGTACGTACGT");
    let letters = sequence_letters(&sequence, zoomed.window(), &zoomed, &config, HEIGHT);
    let text: String = letters.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(text, "ACGTACGTACG");
    assert!((letters[0].x - 15.0).abs() < 1e-9);
    assert_eq!(letters[0].y, 71.0);
}

#[test]
fn letters_are_clipped_to_the_sequence() {
    let config = DisplayConfig::default();
    let zoomed = LinearScale::new((0.5, 10.5), (5.0, 205.0));
    let sequence = Sequence::new("ACG");
    let letters = sequence_letters(&sequence, VisibleWindow { start: -3, end: 11 }, &zoomed, &config, HEIGHT);
    assert_eq!(letters.len(), 3);
}
