use seqdisplay_wasm::presentation::gestures::{DOM_DELTA_LINE, DragState, wheel_zoom_factor};

#[test]
fn wheel_up_zooms_in_and_down_zooms_out() {
    assert_eq!(wheel_zoom_factor(-500.0, 0), 2.0);
    assert_eq!(wheel_zoom_factor(500.0, 0), 0.5);
    assert_eq!(wheel_zoom_factor(0.0, 0), 1.0);
}

#[test]
fn line_mode_scales_delta() {
    let per_line = wheel_zoom_factor(-1.0, DOM_DELTA_LINE);
    let per_pixels = wheel_zoom_factor(-120.0, 0);
    assert!((per_line - per_pixels).abs() < 1e-12);
}

#[test]
fn non_finite_delta_keeps_zoom() {
    assert_eq!(wheel_zoom_factor(f64::NAN, 0), 1.0);
    assert_eq!(wheel_zoom_factor(f64::INFINITY, 0), 1.0);
}

#[test]
fn drag_reports_incremental_movement() {
    let mut drag = DragState::default();
    assert_eq!(drag.drag_to(50.0), None);

    drag.press(100.0);
    assert_eq!(drag.drag_to(90.0), Some(-10.0));
    assert_eq!(drag.drag_to(90.0), None);
    assert_eq!(drag.drag_to(120.0), Some(30.0));

    drag.release();
    assert_eq!(drag.drag_to(10.0), None);
    assert!(!drag.is_dragging);
}
