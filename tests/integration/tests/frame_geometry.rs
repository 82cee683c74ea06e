//! Integration tests for the manual resize chrome
//!
//! These drive full hover/press/move/release cycles through the
//! resize controller and check the geometry guarantees: anchoring of
//! the opposite corner or edge, the minimum-size floor, and the
//! persisted rectangle.

use sigview::frame::geometry::Rect;
use sigview::frame::{HitBorder, ResizeController};
use sigview::utils::Config;
use sigview_integration_tests::{controller_over, hover_point, metrics_for, run_drag};

const MIN: (i32, i32) = (800, 520);

fn start_rect() -> Rect {
    Rect::new(200, 200, 1400, 1100)
}

fn drag(region: HitBorder, pointers: &[(i32, i32)]) -> Rect {
    let start = start_rect();
    let metrics = metrics_for(start);
    let (x, y) = hover_point(region, &metrics);
    let mut ctl = controller_over(x, y, &metrics);
    assert_eq!(ctl.current_region(), Some(region));
    run_drag(&mut ctl, start, MIN, pointers)
}

#[test]
fn corner_drags_anchor_the_opposite_corner() {
    let start = start_rect();

    let out = drag(HitBorder::BottomRight, &[(1450, 1150), (1500, 1200)]);
    assert_eq!((out.left, out.top), (start.left, start.top));
    assert_eq!(out, Rect::new(200, 200, 1500, 1200));

    let out = drag(HitBorder::TopLeft, &[(150, 150), (100, 120)]);
    assert_eq!((out.right, out.bottom), (start.right, start.bottom));
    assert_eq!(out, Rect::new(100, 120, 1400, 1100));

    let out = drag(HitBorder::TopRight, &[(1450, 150), (1500, 100)]);
    assert_eq!((out.left, out.bottom), (start.left, start.bottom));
    assert_eq!(out, Rect::new(200, 100, 1500, 1100));

    let out = drag(HitBorder::BottomLeft, &[(150, 1150), (100, 1200)]);
    assert_eq!((out.right, out.top), (start.right, start.top));
    assert_eq!(out, Rect::new(100, 200, 1400, 1200));
}

#[test]
fn edge_drags_pin_the_opposite_edge() {
    let start = start_rect();

    let out = drag(HitBorder::Left, &[(150, 650)]);
    assert_eq!(out, Rect::new(150, start.top, start.right, start.bottom));

    let out = drag(HitBorder::Right, &[(1500, 650)]);
    assert_eq!(out, Rect::new(start.left, start.top, 1500, start.bottom));

    let out = drag(HitBorder::Top, &[(800, 150)]);
    assert_eq!(out, Rect::new(start.left, 150, start.right, start.bottom));

    let out = drag(HitBorder::Bottom, &[(800, 1200)]);
    assert_eq!(out, Rect::new(start.left, start.top, start.right, 1200));
}

#[test]
fn shrinking_clamps_at_the_minimum_size() {
    // Pointer dives deep into the window: both dimensions stop at the
    // floor instead of following it.
    let out = drag(HitBorder::BottomRight, &[(250, 250)]);
    assert_eq!(out.width(), MIN.0);
    assert_eq!(out.height(), MIN.1);
    assert_eq!((out.left, out.top), (200, 200));

    // Edge drags below the floor leave the geometry untouched.
    let out = drag(HitBorder::Right, &[(250, 650)]);
    assert_eq!(out, start_rect());
}

#[test]
fn bottom_right_drag_result_is_persisted() {
    let start = Rect::new(100, 100, 500, 400);
    let metrics = metrics_for(start);
    let (x, y) = hover_point(HitBorder::BottomRight, &metrics);
    let mut ctl = controller_over(x, y, &metrics);

    let out = run_drag(&mut ctl, start, (400, 300), &[(600, 500)]);
    assert_eq!(out, Rect::new(100, 100, 600, 500));
    assert_eq!(out.width(), 500);
    assert_eq!(out.height(), 400);

    let mut config = Config::default();
    config.frame.left = out.left;
    config.frame.top = out.top;
    config.frame.right = out.right;
    config.frame.bottom = out.bottom;

    assert_eq!(config.frame.left, 100);
    assert_eq!(config.frame.top, 100);
    assert_eq!(config.frame.right, 600);
    assert_eq!(config.frame.bottom, 500);
    assert!(config.frame.has_saved_geometry());
}

#[test]
fn maximized_frame_exposes_no_border_regions() {
    let metrics = metrics_for(start_rect());
    let mut ctl = ResizeController::new();

    ctl.set_enabled(false);
    for region in [
        HitBorder::Top,
        HitBorder::TopRight,
        HitBorder::Right,
        HitBorder::BottomRight,
        HitBorder::Bottom,
        HitBorder::BottomLeft,
        HitBorder::Left,
        HitBorder::TopLeft,
    ] {
        let (x, y) = hover_point(region, &metrics);
        ctl.hover(x, y, &metrics);
        assert_eq!(ctl.current_region(), None);
    }

    // Restoring re-enables all eight regions
    ctl.set_enabled(true);
    for region in [
        HitBorder::Top,
        HitBorder::TopRight,
        HitBorder::Right,
        HitBorder::BottomRight,
        HitBorder::Bottom,
        HitBorder::BottomLeft,
        HitBorder::Left,
        HitBorder::TopLeft,
    ] {
        let (x, y) = hover_point(region, &metrics);
        ctl.hover(x, y, &metrics);
        assert_eq!(ctl.current_region(), Some(region));
    }
}

#[test]
fn press_outside_any_region_never_resizes() {
    let start = start_rect();
    let metrics = metrics_for(start);
    let mut ctl = controller_over(600.0, 450.0, &metrics);

    assert_eq!(ctl.current_region(), None);
    let out = run_drag(&mut ctl, start, MIN, &[(1500, 1200)]);
    assert_eq!(out, start);
}
