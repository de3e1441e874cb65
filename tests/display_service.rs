use seqdisplay_wasm::application::SeqDisplayService;
use seqdisplay_wasm::domain::config::DisplayConfig;
use seqdisplay_wasm::domain::errors::DisplayError;
use seqdisplay_wasm::domain::sequence::FeatureRecord;

const WIDTH: f64 = 210.0;
const HEIGHT: f64 = 100.0;

fn sequence() -> String {
    "ACGT".repeat(25)
}

fn records() -> Vec<FeatureRecord> {
    serde_json::from_str(
        r##"[
            {"name": "lacZ", "type": "CDS", "color": "#FFFFFF", "strand": 1, "start": 1, "end": 50},
            {"name": "ori", "type": "rep_origin", "color": "#000080", "strand": -1, "start": 95, "end": 5}
        ]"##,
    )
    .unwrap()
}

fn loaded() -> SeqDisplayService {
    let mut service = SeqDisplayService::new(DisplayConfig::default());
    service.init(WIDTH, HEIGHT).unwrap();
    service.load(Some(&sequence()), Some(&records())).unwrap();
    service
}

#[test]
fn load_normalizes_and_packs_rows() {
    let service = loaded();
    assert_eq!(service.nrows(), 3);

    let placed: Vec<_> = service.features().iter().map(|f| (f.name.as_str(), f.row)).collect();
    assert_eq!(placed, vec![("lacZ", 0), ("ori...", 0), ("...ori", 1)]);
}

#[test]
fn full_view_draws_bars_labels_and_axis() {
    let service = loaded();
    let scene = service.scene();

    assert_eq!(scene.bars.len(), 3);
    assert_eq!(scene.bars[0].tooltip, "CDS: lacZ\n---->\n[1 - 50]");
    assert_eq!(scene.labels.len(), 1);
    assert_eq!(scene.labels[0].text, "lacZ");
    assert_eq!(scene.labels[0].fill, "#000000");
    assert!(scene.letters.is_empty());

    let axis = scene.axis.as_ref().unwrap();
    assert_eq!(axis.y, 75.0);
    assert_eq!(axis.ticks.len(), 10);
    assert_eq!(axis.ticks[0].label, "10");
    assert_eq!(scene.shape_count(), 5);
}

#[test]
fn zooming_in_reveals_letters_and_hides_offscreen_features() {
    let mut service = loaded();
    let scene = service.zoom_to(10.0, 0.0);
    assert_eq!(scene.bars.len(), 2);
    assert_eq!(scene.letters.len(), 11);
    assert_eq!(scene.letters[0].text, "A");

    let scene = service.pan_by(-1e9);
    assert_eq!(scene.bars.len(), 1);
    assert_eq!(scene.bars[0].tooltip, "rep_origin: ori...\n<----\n[95 - 100]");
    assert_eq!(scene.letters.len(), 10);
    assert_eq!(service.view().pan_offset_px, -1800.0);
    assert_eq!(service.scale().domain(), (90.5, 100.5));
}

#[test]
fn cursor_zoom_keeps_position_under_pointer() {
    let mut service = loaded();
    service.zoom_at(2.0, 105.0);
    assert_eq!(service.view().zoom_scale, 2.0);
    assert_eq!(service.scale().domain(), (25.5, 75.5));
    assert_eq!(service.position_at(106.0), Some(51));
    assert_eq!(service.position_at(-1e6), None);
}

#[test]
fn crowded_features_overflow() {
    let mut service = SeqDisplayService::default();
    service.init(WIDTH, HEIGHT).unwrap();
    let crowd: Vec<_> = (0..4).map(|i| FeatureRecord::new(&format!("f{i}"), "CDS", "#336699", 1, 1, 10)).collect();
    service.load(Some(&sequence()), Some(&crowd)).unwrap();

    assert_eq!(service.layout().overflow, 1);
    let overflow: Vec<_> = service.scene().bars.iter().filter(|b| b.row == 3).collect();
    assert_eq!(overflow.len(), 1);
    let top = overflow[0].points[0].y;
    let bottom = overflow[0].points[4].y;
    assert!(bottom - top < 13);
}

#[test]
fn invalid_color_leaves_previous_state() {
    let mut service = loaded();
    let before = service.scene().clone();
    let bad = vec![FeatureRecord::new("x", "CDS", "#GGGGGG", 1, 1, 2)];

    let err = service.load(Some("ACGT"), Some(&bad)).unwrap_err();
    assert_eq!(err, DisplayError::InvalidColor("#GGGGGG".to_string()));
    assert_eq!(service.sequence().len(), 100);
    assert_eq!(service.features().len(), 3);
    assert_eq!(service.scene(), &before);
}

#[test]
fn shorter_sequence_must_still_hold_features() {
    let mut service = loaded();
    let err = service.load(Some("ACGT"), None).unwrap_err();
    assert!(matches!(err, DisplayError::Validation(_)));
    assert_eq!(service.sequence().len(), 100);
}

#[test]
fn omitted_arguments_keep_previous_values() {
    let mut service = loaded();
    service.load(None, None).unwrap();
    assert_eq!(service.features().len(), 3);

    let longer = "A".repeat(200);
    service.load(Some(&longer), None).unwrap();
    assert_eq!(service.sequence().len(), 200);
    assert_eq!(service.features().len(), 3);
}

#[test]
fn zero_sized_container_renders_nothing_until_resized() {
    let mut service = SeqDisplayService::default();
    service.init(0.0, 0.0).unwrap();
    assert_eq!(service.nrows(), 0);
    assert!(service.load(Some(&sequence()), Some(&records())).unwrap().is_empty());

    let scene = service.resize(WIDTH, HEIGHT).unwrap();
    assert_eq!(scene.bars.len(), 3);
}

#[test]
fn reset_clears_shapes_and_view_but_keeps_data() {
    let mut service = loaded();
    service.zoom_to(10.0, -500.0);
    service.reset(WIDTH, HEIGHT).unwrap();

    assert!(service.scene().is_empty());
    assert_eq!(service.view().zoom_scale, 1.0);
    assert_eq!(service.view().pan_offset_px, 0.0);
    assert_eq!(service.features().len(), 3);

    assert_eq!(service.load(None, None).unwrap().bars.len(), 3);
}

#[test]
fn load_requires_init() {
    let mut service = SeqDisplayService::default();
    let err = service.load(Some("ACGT"), None).unwrap_err();
    assert!(matches!(err, DisplayError::Container(_)));
}

#[test]
fn unmeasurable_container_is_rejected() {
    let mut service = SeqDisplayService::default();
    assert!(matches!(service.init(-1.0, 10.0), Err(DisplayError::Container(_))));
    assert!(matches!(service.init(f64::NAN, 10.0), Err(DisplayError::Container(_))));
}
