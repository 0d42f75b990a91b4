//! Outline assembly tests.
//!
//! These tests drive the engine the way a host view does: fresh bounds and
//! style on every call, inspecting the returned outline.

use glam::Vec2;
use thumbrect_core::geometry::Size;
use thumbrect_core::math::approx_eq;
use thumbrect_geometry::{
    GeometryEngine, IntersectionResult, PathDescription, Segment, StyleParameters, find_intersection,
    flatten,
};
use thumbrect_geometry::flatten::DEFAULT_TOLERANCE;

fn build(width: f32, height: f32, style: &StyleParameters) -> PathDescription {
    GeometryEngine::new().build_path(Size::new(width, height), style)
}

fn styles() -> Vec<StyleParameters> {
    let base = StyleParameters::default();
    vec![
        base,
        base.with_thumb_circle_offset(-30.0),
        base.with_thumb_circle_offset(-12.0).with_corner_radius(10.0),
        base.with_thumb_radius(45.0)
            .with_thumb_circle_offset(-20.0)
            .with_y_offset(50.0)
            .with_corner_radius(4.0),
        base.with_circle_x_offset(-60.0)
            .with_thumb_circle_offset(-25.0)
            .with_insets(3.0, 3.0)
            .with_stroke(thumbrect_geometry::Color::BLACK, 6.0),
        base.with_thumb_radius(0.0).with_corner_radius(20.0),
    ]
}

// ====================
// Clamping
// ====================

#[test]
fn test_negative_radius_is_zero() {
    for radius in [-0.5, -30.0, -1000.0] {
        let style = StyleParameters::default().with_thumb_radius(radius);
        assert_eq!(style.clamped().thumb_radius, 0.0);
    }
}

#[test]
fn test_offset_below_negative_radius_is_raised() {
    let style = StyleParameters::default()
        .with_thumb_radius(15.0)
        .with_thumb_circle_offset(-40.0);
    assert_eq!(style.clamped().thumb_circle_offset, -15.0);

    // The clamped circle's lowest point sits exactly on the top edge
    let anchors = GeometryEngine::new().compute_anchors(Size::new(200.0, 100.0), &style);
    assert_eq!(anchors.thumb_center.y, anchors.top_left_arc_end.y);
}

// ====================
// Intersection
// ====================

#[test]
fn test_intersection_symmetric_about_center() {
    let start = Vec2::new(0.0, 0.0);
    let end = Vec2::new(100.0, 0.0);
    let hit = find_intersection(start, end, Vec2::new(50.0, 10.0), 15.0);

    assert!(hit.first.x < hit.second.x);
    assert!(((50.0 - hit.first.x) - (hit.second.x - 50.0)).abs() < 1e-4);
}

#[test]
fn test_intersection_sentinels() {
    let start = Vec2::new(0.0, 0.0);
    let end = Vec2::new(100.0, 0.0);

    let tangent = find_intersection(start, end, Vec2::new(50.0, 15.0), 15.0);
    assert_eq!(tangent, IntersectionResult::sentinel(start));

    let miss = find_intersection(start, end, Vec2::new(50.0, 20.0), 5.0);
    assert_eq!(miss, IntersectionResult::sentinel(start));
}

// ====================
// Outline shape
// ====================

#[test]
fn test_outline_is_closed() {
    for style in styles() {
        let outline = build(320.0, 200.0, &style);
        assert!(outline.is_closed(), "open outline for {style:?}");
        assert!(approx_eq(outline.end_point(), outline.start()));
    }
}

#[test]
fn test_outline_starts_at_top_left_arc_end() {
    let style = StyleParameters::default().with_corner_radius(12.0);
    let outline = build(200.0, 100.0, &style);
    assert_eq!(outline.start(), Vec2::new(13.0, 31.0));
}

#[test]
fn test_sharp_corners_have_no_arcs() {
    let style = StyleParameters::default().with_corner_radius(0.0);
    let outline = build(240.0, 160.0, &style);

    assert!(!outline.has_rounded_corners());
    assert_eq!(outline.path.arcs().count(), 0);

    let corners: Vec<Vec2> = outline.segments().iter().map(Segment::end_point).collect();
    assert_eq!(
        corners,
        vec![
            Vec2::new(239.0, 31.0),
            Vec2::new(239.0, 159.0),
            Vec2::new(1.0, 159.0),
            Vec2::new(1.0, 159.0),
            Vec2::new(1.0, 31.0),
        ]
    );
}

#[test]
fn test_sharp_corners_keep_extrusion_arc() {
    let style = StyleParameters::default().with_thumb_circle_offset(-10.0);
    let outline = build(240.0, 160.0, &style);
    assert_eq!(outline.path.arcs().count(), 1);
    assert!(outline.has_extrusion());
}

#[test]
fn test_suppressed_extrusion_is_straight_top_edge() {
    // Tangent (default offset) and far away (positive offset)
    for offset in [0.0, 25.0] {
        let style = StyleParameters::default().with_thumb_circle_offset(offset);
        let outline = build(300.0, 150.0, &style);

        assert!(!outline.has_extrusion());
        assert_eq!(
            outline.segments()[0],
            Segment::Line {
                to: Vec2::new(299.0, 31.0)
            }
        );
    }
}

#[test]
fn test_extrusion_rises_above_top_edge() {
    let style = StyleParameters::default().with_thumb_circle_offset(-30.0);
    let outline = build(300.0, 150.0, &style);
    let (min, _) = outline.path.bounds().unwrap();

    // Half the thumb circle sits above the edge at y = 31
    assert!((min.y - 1.0).abs() < 1e-3);
}

#[test]
fn test_build_is_idempotent() {
    let engine = GeometryEngine::new();
    for style in styles() {
        let bounds = Size::new(375.0, 120.0);
        let a = engine.build_path(bounds, &style);
        let b = engine.build_path(bounds, &style);
        assert_eq!(a, b);
        assert_eq!(a.path.to_svg_path_data(), b.path.to_svg_path_data());
    }
}

// ====================
// Flattened outline
// ====================

#[test]
fn test_flattened_outline_is_simple_and_clockwise() {
    for style in styles() {
        let outline = build(320.0, 200.0, &style);
        let polyline = flatten(&outline.path, 0.1);

        assert!(polyline.is_closed(), "{style:?}");
        assert!(polyline.is_simple(), "self-intersecting outline for {style:?}");
        assert!(polyline.signed_area() > 0.0);
    }
}

#[test]
fn test_extrusion_adds_area() {
    let plain = build(300.0, 150.0, &StyleParameters::default());
    let bumped = build(
        300.0,
        150.0,
        &StyleParameters::default().with_thumb_circle_offset(-30.0),
    );

    let plain_area = flatten(&plain.path, 0.05).signed_area();
    let bumped_area = flatten(&bumped.path, 0.05).signed_area();

    // 298 × 118 rectangle plus a half disc of radius 30
    assert!((plain_area - 298.0 * 118.0).abs() < 1e-1);
    let half_disc = std::f32::consts::PI * 30.0 * 30.0 / 2.0;
    assert!((bumped_area - plain_area - half_disc).abs() < half_disc * 0.01);
}

#[test]
fn test_degenerate_sizes_still_render() {
    let engine = GeometryEngine::new();
    for size in [Size::new(0.0, 0.0), Size::new(1.0, 1.0), Size::new(-20.0, 40.0)] {
        let outline = engine.build_path(size, &StyleParameters::default().with_corner_radius(5.0));
        assert!(outline.is_closed());
        assert!(!outline.segments().is_empty());
    }
}

#[test]
fn test_collapsed_top_edge_draws_no_extrusion() {
    // 10 wide with corner radius 4 and insets 1: both top arcs meet at x = 5
    let style = StyleParameters::default()
        .with_corner_radius(4.0)
        .with_thumb_circle_offset(-30.0);
    let outline = build(10.0, 100.0, &style);

    assert!(!outline.has_extrusion());
    assert!(outline.is_closed());

    let polyline = flatten(&outline.path, DEFAULT_TOLERANCE);
    assert!(polyline.is_closed());
    assert!(polyline.signed_area() > 0.0);
}
