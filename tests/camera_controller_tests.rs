//! Camera controller tests - both zoom modes

use block_view_demo::model::{Point, Size};
use block_view_demo::state::{CameraController, CameraPhase, CameraSettings, Pinch, PinchPhase, ZoomMode};

const VIEWPORT: Size = Size::new(400.0, 300.0);
const DURATION: f64 = 0.25;

fn controller(mode: ZoomMode) -> CameraController {
    CameraController::new(CameraSettings {
        mode,
        zoom_factor: 0.25,
        animation_duration: DURATION,
        viewport: VIEWPORT,
    })
}

fn settle(c: &mut CameraController) {
    for _ in 0..30 {
        c.update(1.0 / 60.0);
    }
    assert!(!c.camera().is_animating());
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_double_tap_zooms_on_point() {
    let mut c = controller(ZoomMode::DoubleTapToggle);
    c.touch_began(Point::new(100.0, 50.0), 2);

    assert_eq!(c.phase(), CameraPhase::Zoomed);
    assert_eq!(c.camera().target_scale(), 0.25);
    assert_eq!(c.camera().target_position(), Point::new(100.0, 50.0));

    settle(&mut c);
    assert_eq!(c.camera().scale(), 0.25);
    assert_eq!(c.camera().position(), Point::new(100.0, 50.0));
}

#[test]
fn test_double_tap_twice_returns_to_rest() {
    let mut c = controller(ZoomMode::DoubleTapToggle);
    c.double_tap(Point::new(-80.0, 33.0));
    c.update(0.1);
    c.double_tap(Point::new(12.0, 12.0));
    settle(&mut c);

    assert_eq!(c.phase(), CameraPhase::Resting);
    assert_eq!(c.camera().scale(), 1.0);
    assert_eq!(c.camera().position(), Point::ORIGIN);
}

#[test]
fn test_drag_pans_opposite_to_finger() {
    let mut c = controller(ZoomMode::DoubleTapToggle);
    c.double_tap(Point::ORIGIN);
    settle(&mut c);

    c.drag(Point::new(10.0, 10.0), Point::new(4.0, 13.0));
    assert_eq!(c.camera().position(), Point::new(6.0, -3.0));
}

#[test]
fn test_drag_clamps_to_half_viewport() {
    let mut c = controller(ZoomMode::DoubleTapToggle);
    c.double_tap(Point::ORIGIN);
    settle(&mut c);

    let moves = [(500.0, -20.0), (-30.0, 900.0), (-2000.0, -2000.0), (75.0, 10.0)];
    for (dx, dy) in moves {
        c.drag(Point::new(dx, dy), Point::ORIGIN);
        let p = c.camera().position();
        assert!(p.x.abs() <= VIEWPORT.width / 2.0);
        assert!(p.y.abs() <= VIEWPORT.height / 2.0);
    }
    c.drag(Point::new(-1000.0, 1000.0), Point::ORIGIN);
    assert_eq!(c.camera().position(), Point::new(-200.0, 150.0));
}

#[test]
fn test_drag_interrupts_zoom_in_move() {
    let mut c = controller(ZoomMode::DoubleTapToggle);
    c.double_tap(Point::new(100.0, 0.0));
    c.update(0.125);
    c.drag(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    settle(&mut c);

    // position stays where the drag put it, scale still finishes
    assert!(approx(c.camera().position().x, 40.0));
    assert_eq!(c.camera().scale(), 0.25);
}

#[test]
fn test_pinch_accumulates_inverse_scale() {
    let mut c = controller(ZoomMode::DoubleTapToggle);
    let mut began = Pinch { scale: 1.0, phase: PinchPhase::Began };
    c.pinch(&mut began);

    let mut tick = Pinch { scale: 1.1, phase: PinchPhase::Changed };
    c.pinch(&mut tick);
    assert_eq!(tick.scale, 1.0);

    let mut tick = Pinch { scale: 1.2, phase: PinchPhase::Changed };
    c.pinch(&mut tick);
    assert_eq!(tick.scale, 1.0);

    assert!(approx(c.camera().scale(), 1.0 / (1.1 * 1.2)));
}

fn assert_scale_sane(c: &CameraController) {
    let scale = c.camera().scale();
    assert!(scale.is_finite() && scale > 0.0, "scale = {scale}");
}

#[test]
fn test_pinch_rejects_factors_that_collapse_or_overflow_scale() {
    let mut c = controller(ZoomMode::DoubleTapToggle);
    for _ in 0..3 {
        c.pinch(&mut Pinch { scale: 1e200, phase: PinchPhase::Changed });
        assert_scale_sane(&c);
    }
    c.pinch(&mut Pinch { scale: 1.0, phase: PinchPhase::Ended });
    assert_scale_sane(&c);
    let view = c.camera().scene_to_view(Point::new(10.0, 10.0), VIEWPORT);
    assert!(view.x.is_finite() && view.y.is_finite());

    let mut c = controller(ZoomMode::DoubleTapToggle);
    let mut tiny = Pinch { scale: 1e-320, phase: PinchPhase::Changed };
    c.pinch(&mut tiny);
    assert_eq!(tiny.scale, 1.0);
    assert_eq!(c.camera().scale(), 1.0);
    c.pinch(&mut Pinch { scale: 1.0, phase: PinchPhase::Ended });
    c.update(0.1);
    assert_scale_sane(&c);
    settle(&mut c);
    assert_eq!(c.camera().scale(), 1.0);
}

#[test]
fn test_scale_stays_positive_over_long_extreme_pinch_sequences() {
    let factors = [
        1e300,
        1e-300,
        f64::MAX,
        f64::MIN_POSITIVE,
        1e200,
        1e-320,
        1.0001,
        0.9999,
        f64::EPSILON,
        1.0 / f64::EPSILON,
        0.0,
        -2.0,
        f64::NAN,
        f64::INFINITY,
    ];
    let mut c = controller(ZoomMode::DoubleTapToggle);
    for round in 0..50 {
        c.pinch(&mut Pinch { scale: 1.0, phase: PinchPhase::Began });
        for i in 0..factors.len() {
            let factor = factors[(i * 5 + round) % factors.len()];
            c.pinch(&mut Pinch { scale: factor, phase: PinchPhase::Changed });
            assert_scale_sane(&c);
            c.update(1.0 / 60.0);
            assert_scale_sane(&c);
        }
        c.pinch(&mut Pinch { scale: 1.0, phase: PinchPhase::Ended });
        for _ in 0..20 {
            c.update(1.0 / 60.0);
            assert_scale_sane(&c);
        }
    }
}

#[test]
fn test_pinch_end_zoomed_in_keeps_scale() {
    let mut c = controller(ZoomMode::DoubleTapToggle);
    c.pinch(&mut Pinch { scale: 2.0, phase: PinchPhase::Changed });
    c.pinch(&mut Pinch { scale: 1.0, phase: PinchPhase::Ended });
    settle(&mut c);

    assert_eq!(c.phase(), CameraPhase::Zoomed);
    assert!(approx(c.camera().scale(), 0.5));
    assert_eq!(c.camera().position(), Point::ORIGIN);
}

#[test]
fn test_pinch_end_zoomed_out_snaps_back() {
    let mut c = controller(ZoomMode::DoubleTapToggle);
    c.double_tap(Point::new(50.0, 50.0));
    settle(&mut c);

    c.pinch(&mut Pinch { scale: 0.1, phase: PinchPhase::Changed });
    assert!(c.camera().scale() > 1.0);
    c.pinch(&mut Pinch { scale: 1.0, phase: PinchPhase::Ended });
    settle(&mut c);

    assert_eq!(c.phase(), CameraPhase::Resting);
    assert_eq!(c.camera().scale(), 1.0);
    assert_eq!(c.camera().position(), Point::ORIGIN);
}

#[test]
fn test_press_zooms_and_release_restores() {
    let mut c = controller(ZoomMode::PressToZoom);
    c.touch_began(Point::new(-60.0, 20.0), 1);
    assert_eq!(c.phase(), CameraPhase::Zoomed);
    settle(&mut c);
    assert_eq!(c.camera().scale(), 0.25);
    assert_eq!(c.camera().position(), Point::new(-60.0, 20.0));

    c.touch_ended();
    assert_eq!(c.phase(), CameraPhase::Resting);
    settle(&mut c);
    assert_eq!(c.camera().scale(), 1.0);
    assert_eq!(c.camera().position(), Point::ORIGIN);
}

#[test]
fn test_press_pan_is_unclamped() {
    let mut c = controller(ZoomMode::PressToZoom);
    c.touch_began(Point::ORIGIN, 1);
    settle(&mut c);
    c.touch_moved(Point::new(1000.0, 0.0), Point::ORIGIN);
    assert_eq!(c.camera().position(), Point::new(1000.0, 0.0));
}

#[test]
fn test_cancel_behaves_like_release_in_press_mode() {
    let mut c = controller(ZoomMode::PressToZoom);
    c.touch_began(Point::new(5.0, 5.0), 1);
    c.touch_cancelled();
    settle(&mut c);
    assert_eq!(c.phase(), CameraPhase::Resting);
    assert!(approx(c.camera().scale(), 1.0));
}

#[test]
fn test_second_press_while_zoomed_is_ignored() {
    let mut c = controller(ZoomMode::PressToZoom);
    c.touch_began(Point::ORIGIN, 1);
    c.touch_began(Point::new(30.0, 30.0), 1);
    settle(&mut c);
    assert_eq!(c.camera().scale(), 0.25);
    assert_eq!(c.camera().position(), Point::ORIGIN);
}

#[test]
fn test_touch_end_ignored_in_toggle_mode() {
    let mut c = controller(ZoomMode::DoubleTapToggle);
    c.double_tap(Point::new(10.0, 10.0));
    c.touch_ended();
    assert_eq!(c.phase(), CameraPhase::Zoomed);
}

#[test]
fn test_toggle_zoom_follows_press_mode() {
    let mut c = controller(ZoomMode::PressToZoom);
    c.toggle_zoom(Point::new(30.0, -20.0));
    assert_eq!(c.phase(), CameraPhase::Zoomed);
    assert_eq!(c.camera().target_scale(), 0.25);
    assert_eq!(c.camera().target_position(), Point::new(30.0, -20.0));

    c.toggle_zoom(Point::new(30.0, -20.0));
    assert_eq!(c.phase(), CameraPhase::Resting);
    settle(&mut c);
    assert!(approx(c.camera().scale(), 1.0));
    assert_eq!(c.camera().position(), Point::ORIGIN);
}

#[test]
fn test_toggle_zoom_is_double_tap_in_toggle_mode() {
    let mut c = controller(ZoomMode::DoubleTapToggle);
    c.toggle_zoom(Point::new(50.0, 40.0));
    assert_eq!(c.phase(), CameraPhase::Zoomed);
    assert_eq!(c.camera().target_scale(), 0.25);
    c.toggle_zoom(Point::new(50.0, 40.0));
    settle(&mut c);
    assert_eq!(c.camera().scale(), 1.0);
    assert_eq!(c.camera().position(), Point::ORIGIN);
}
