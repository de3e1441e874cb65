use quickcheck_macros::quickcheck;
use seqdisplay_wasm::domain::config::DisplayConfig;
use seqdisplay_wasm::domain::layout::{DenseRow, IntervalRow, RowAssigner, row_capacity};
use seqdisplay_wasm::domain::sequence::{Feature, FeatureNormalizer, Rgb, Strand};

const LEN: usize = 200;

fn features_from(raw: Vec<(u8, u8)>) -> Vec<Feature> {
    let features = raw
        .into_iter()
        .map(|(s, e)| {
            let start = s as usize % LEN + 1;
            let end = e as usize % LEN + 1;
            Feature::new("f", "CDS", Rgb::new(1, 2, 3), Strand::Forward, start, end)
        })
        .collect();
    FeatureNormalizer::new(LEN).normalize(features)
}

fn overlaps(a: &Feature, b: &Feature) -> bool {
    a.start <= b.end && b.start <= a.end
}

#[quickcheck]
fn regular_rows_never_overlap(raw: Vec<(u8, u8)>, nrows: u8) -> bool {
    let nrows = (nrows % 6) as usize;
    let mut features = features_from(raw);
    RowAssigner::new(nrows).assign(&mut features);

    features.iter().enumerate().all(|(i, a)| {
        features[i + 1..]
            .iter()
            .all(|b| a.row >= nrows || a.row != b.row || !overlaps(a, b))
    })
}

#[quickcheck]
fn rows_stay_within_capacity(raw: Vec<(u8, u8)>, nrows: u8) -> bool {
    let nrows = (nrows % 6) as usize;
    let mut features = features_from(raw);
    let layout = RowAssigner::new(nrows).assign(&mut features);

    let overflow = features.iter().filter(|f| f.row == nrows).count();
    features.iter().all(|f| f.row <= nrows) && overflow == layout.overflow
}

#[quickcheck]
fn interval_rows_match_dense_rows(raw: Vec<(u8, u8)>) -> bool {
    let mut dense = features_from(raw);
    let mut interval = dense.clone();
    let assigner = RowAssigner::new(4);

    let a = assigner.assign_with::<DenseRow>(&mut dense);
    let b = assigner.assign_with::<IntervalRow>(&mut interval);
    a == b && dense == interval
}

#[test]
fn excess_overlapping_features_land_on_overflow_row() {
    let mut features: Vec<Feature> = (0..5)
        .map(|_| Feature::new("dup", "CDS", Rgb::new(0, 0, 0), Strand::Forward, 1, 10))
        .collect();
    let layout = RowAssigner::new(3).assign(&mut features);

    let rows: Vec<_> = features.iter().map(|f| f.row).collect();
    assert_eq!(rows, vec![0, 1, 2, 3, 3]);
    assert_eq!(layout.overflow, 2);
    assert_eq!(layout.rows_used, 3);
}

#[test]
fn touching_features_share_a_row() {
    let mut features = vec![
        Feature::new("a", "CDS", Rgb::new(0, 0, 0), Strand::Forward, 1, 10),
        Feature::new("b", "CDS", Rgb::new(0, 0, 0), Strand::Forward, 11, 20),
        Feature::new("c", "CDS", Rgb::new(0, 0, 0), Strand::Forward, 10, 12),
    ];
    RowAssigner::new(3).assign(&mut features);
    let rows: Vec<_> = features.iter().map(|f| f.row).collect();
    assert_eq!(rows, vec![0, 0, 1]);
}

#[test]
fn zero_rows_sends_everything_to_overflow() {
    let mut features = vec![Feature::new("a", "CDS", Rgb::new(0, 0, 0), Strand::Forward, 1, 10)];
    let layout = RowAssigner::new(0).assign(&mut features);
    assert_eq!(features[0].row, 0);
    assert_eq!(layout.overflow, 1);
}

#[test]
fn capacity_follows_container_height() {
    let config = DisplayConfig::default();
    // (100 - 2*5 - 20) / (13 + 8) = 3.33
    assert_eq!(row_capacity(&config, 100.0), 3);
    assert_eq!(row_capacity(&config, 51.0), 1);
    assert_eq!(row_capacity(&config, 50.0), 0);
    assert_eq!(row_capacity(&config, 0.0), 0);
    assert_eq!(row_capacity(&config, f64::NAN), 0);
}
