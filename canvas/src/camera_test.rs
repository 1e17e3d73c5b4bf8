#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn cam(zoom: f64, offset_x: f64, offset_y: f64) -> Camera {
    Camera { zoom, offset_x, offset_y }
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_offset_by_adds_components() {
    let p = Point::new(1.0, 2.0).offset_by(Point::new(10.0, -5.0));
    assert_eq!(p, Point::new(11.0, -3.0));
}

#[test]
fn point_is_finite_rejects_nan_and_inf() {
    assert!(Point::new(1.0, 2.0).is_finite());
    assert!(!Point::new(f64::NAN, 0.0).is_finite());
    assert!(!Point::new(0.0, f64::INFINITY).is_finite());
}

// --- Camera defaults ---

#[test]
fn camera_default_offset_is_zero() {
    let c = Camera::default();
    assert_eq!(c.offset_x, 0.0);
    assert_eq!(c.offset_y, 0.0);
}

#[test]
fn camera_default_zoom_is_one() {
    assert_eq!(Camera::default().zoom, 1.0);
}

// --- screen_to_world ---

#[test]
fn screen_to_world_identity() {
    let world = Camera::default().screen_to_world(Point::new(50.0, 75.0));
    assert!(point_approx_eq(world, Point::new(50.0, 75.0)));
}

#[test]
fn screen_to_world_with_zoom() {
    let world = cam(4.0, 0.0, 0.0).screen_to_world(Point::new(40.0, 80.0));
    assert!(point_approx_eq(world, Point::new(10.0, 20.0)));
}

#[test]
fn screen_to_world_with_offset() {
    let world = cam(1.0, 100.0, 50.0).screen_to_world(Point::new(100.0, 50.0));
    assert!(point_approx_eq(world, Point::new(0.0, 0.0)));
}

#[test]
fn screen_to_world_origin_with_offset_and_zoom() {
    let world = cam(2.0, 50.0, 30.0).screen_to_world(Point::new(0.0, 0.0));
    assert!(point_approx_eq(world, Point::new(-25.0, -15.0)));
}

// --- world_to_screen ---

#[test]
fn world_to_screen_with_offset_and_zoom() {
    let screen = cam(3.0, 20.0, 10.0).world_to_screen(Point::new(5.0, 5.0));
    // 5*3 + 20 = 35, 5*3 + 10 = 25
    assert!(point_approx_eq(screen, Point::new(35.0, 25.0)));
}

#[test]
fn world_to_screen_negative_world() {
    let screen = Camera::default().world_to_screen(Point::new(-10.0, -20.0));
    assert!(point_approx_eq(screen, Point::new(-10.0, -20.0)));
}

// --- Round trips ---

#[test]
fn round_trip_world_first_across_states() {
    let cams = [
        Camera::default(),
        cam(2.0, 50.0, -30.0),
        cam(0.75, 13.7, -42.3),
        cam(1.1_f64.powi(12), -400.0, 250.5),
        cam(1.0 / 1.1_f64.powi(9), 0.001, 9_999.0),
    ];
    let points = [Point::new(0.0, 0.0), Point::new(333.3, -999.9), Point::new(-1e4, 1e-3)];
    for c in cams {
        for p in points {
            let back = c.screen_to_world(c.world_to_screen(p));
            assert!(point_approx_eq(p, back), "{c:?} {p:?} -> {back:?}");
        }
    }
}

#[test]
fn round_trip_screen_first() {
    let c = cam(1.5, 10.0, 20.0);
    let screen = Point::new(400.0, 300.0);
    let back = c.world_to_screen(c.screen_to_world(screen));
    assert!(point_approx_eq(screen, back));
}

// --- screen_dist_to_world ---

#[test]
fn screen_dist_to_world_with_zoom() {
    assert!(approx_eq(cam(2.0, 0.0, 0.0).screen_dist_to_world(10.0), 5.0));
}

#[test]
fn screen_dist_to_world_ignores_offset() {
    assert!(approx_eq(cam(4.0, 999.0, -999.0).screen_dist_to_world(8.0), 2.0));
}

// --- pan_by / zoom_by ---

#[test]
fn pan_by_accumulates() {
    let mut c = Camera::default();
    c.pan_by(Delta::new(5.0, -3.0));
    c.pan_by(Delta::new(2.5, 1.0));
    assert_eq!(c.offset_x, 7.5);
    assert_eq!(c.offset_y, -2.0);
    assert_eq!(c.zoom, 1.0);
}

#[test]
fn zoom_by_multiplies() {
    let mut c = Camera::default();
    assert!(c.zoom_by(2.0));
    assert!(c.zoom_by(1.5));
    assert!(approx_eq(c.zoom, 3.0));
}

#[test]
fn zoom_by_leaves_offset_alone() {
    let mut c = cam(1.0, 12.0, 34.0);
    c.zoom_by(ZoomDirection::In.factor());
    assert_eq!(c.offset_x, 12.0);
    assert_eq!(c.offset_y, 34.0);
}

#[test]
fn zoom_in_then_out_returns_to_start() {
    let mut c = Camera::default();
    for _ in 0..25 {
        c.zoom_by(ZoomDirection::In.factor());
    }
    for _ in 0..25 {
        c.zoom_by(ZoomDirection::Out.factor());
    }
    assert!(approx_eq(c.zoom, 1.0), "zoom drifted to {}", c.zoom);
}

#[test]
fn zoom_by_rejects_zero_and_negative() {
    let mut c = Camera::default();
    assert!(!c.zoom_by(0.0));
    assert!(!c.zoom_by(-2.0));
    assert_eq!(c.zoom, 1.0);
}

#[test]
fn zoom_by_rejects_non_finite_results() {
    let mut c = cam(f64::MAX / 2.0, 0.0, 0.0);
    assert!(!c.zoom_by(4.0));
    assert_eq!(c.zoom, f64::MAX / 2.0);
    assert!(!c.zoom_by(f64::NAN));
}

#[test]
fn zoom_by_rejects_underflow_to_subnormal() {
    let mut c = cam(f64::MIN_POSITIVE, 0.0, 0.0);
    assert!(!c.zoom_by(0.5));
    assert_eq!(c.zoom, f64::MIN_POSITIVE);
}

#[test]
fn zoom_direction_factors_are_reciprocal() {
    assert!(approx_eq(ZoomDirection::In.factor() * ZoomDirection::Out.factor(), 1.0));
    assert!(ZoomDirection::In.factor() > 1.0);
    assert!(ZoomDirection::Out.factor() < 1.0);
}

// --- LayerTransform ---

#[test]
fn layer_transform_matches_world_to_screen() {
    let c = cam(2.5, 40.0, -12.0);
    let t = c.layer_transform();
    for p in [Point::new(0.0, 0.0), Point::new(100.0, 100.0), Point::new(-7.5, 3.25)] {
        assert!(point_approx_eq(t.apply(p), c.world_to_screen(p)));
    }
}

#[test]
fn layer_transform_translate_is_pre_scale() {
    let t = cam(2.0, 10.0, 20.0).layer_transform();
    assert_eq!(t.scale, 2.0);
    assert_eq!(t.translate_x, 5.0);
    assert_eq!(t.translate_y, 10.0);
}

#[test]
fn layer_transform_display_is_svg_attribute() {
    let t = cam(2.0, 10.0, 20.0).layer_transform();
    assert_eq!(t.to_string(), "scale(2) translate(5, 10)");
}

#[test]
fn layer_transform_identity_display() {
    assert_eq!(Camera::default().layer_transform().to_string(), "scale(1) translate(0, 0)");
}
