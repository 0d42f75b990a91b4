//! Polyline approximation of an outline.
//!
//! For hosts whose drawing API has no arc primitive. Arcs are flattened with
//! Lyon within the given tolerance; the implicit line joining the current
//! point to an arc's start is kept.

use crate::{ArcSegment, Path, Segment};
use glam::Vec2;
use lyon::geom::{Arc, LineSegment};
use lyon::math::{Angle, point, vector};
use thumbrect_core::math::approx_eq;

/// Default flattening tolerance in logical pixels.
pub const DEFAULT_TOLERANCE: f32 = 0.25;

/// Sweeps below this are drawn as their joining line only.
const MIN_SWEEP: f32 = 1.0e-6;

/// A sequence of points joined by straight lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Vec2>,
}

impl Polyline {
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last point coincides with the first.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && approx_eq(*first, *last),
            _ => false,
        }
    }

    /// Shoelace area. Positive when the polyline runs clockwise on screen
    /// (y-down).
    pub fn signed_area(&self) -> f32 {
        let twice: f32 = self
            .points
            .windows(2)
            .map(|pair| pair[0].perp_dot(pair[1]))
            .sum();
        let closing = match (self.points.last(), self.points.first()) {
            (Some(last), Some(first)) => last.perp_dot(*first),
            _ => 0.0,
        };
        (twice + closing) * 0.5
    }

    /// No two non-adjacent edges properly cross each other.
    pub fn is_simple(&self) -> bool {
        let edges: Vec<(Vec2, Vec2)> = self
            .points
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .collect();
        let count = edges.len();

        for i in 0..count {
            for j in (i + 2)..count {
                // First and last edges share the closing point
                if i == 0 && j == count - 1 && self.is_closed() {
                    continue;
                }
                if edges_cross(edges[i], edges[j]) {
                    return false;
                }
            }
        }
        true
    }

    fn push(&mut self, p: Vec2) {
        if self.points.last().is_none_or(|last| !approx_eq(*last, p)) {
            self.points.push(p);
        }
    }
}

/// Proper crossing test: the segments intersect at a single interior point.
fn edges_cross((a, b): (Vec2, Vec2), (c, d): (Vec2, Vec2)) -> bool {
    let d1 = (b - a).perp_dot(c - a);
    let d2 = (b - a).perp_dot(d - a);
    let d3 = (d - c).perp_dot(a - c);
    let d4 = (d - c).perp_dot(b - c);
    (d1 * d2 < 0.0) && (d3 * d4 < 0.0)
}

fn to_lyon_arc(arc: &ArcSegment) -> Arc<f32> {
    Arc {
        center: point(arc.center.x, arc.center.y),
        radii: vector(arc.radius, arc.radius),
        start_angle: Angle::radians(arc.start_angle),
        sweep_angle: Angle::radians(arc.signed_sweep()),
        x_rotation: Angle::radians(0.0),
    }
}

/// Flatten a path into a polyline. Consecutive duplicate points are dropped.
pub fn flatten(path: &Path, tolerance: f32) -> Polyline {
    let tolerance = if tolerance > 0.0 {
        tolerance
    } else {
        DEFAULT_TOLERANCE
    };

    let mut polyline = Polyline::default();
    polyline.push(path.start());

    for segment in path.segments() {
        match segment {
            Segment::Line { to } => polyline.push(*to),
            Segment::Arc(arc) => {
                polyline.push(arc.start_point());
                if arc.radius <= 0.0 || arc.sweep() < MIN_SWEEP {
                    continue;
                }
                to_lyon_arc(arc).for_each_flattened(tolerance, &mut |line: &LineSegment<f32>| {
                    polyline.push(Vec2::new(line.to.x, line.to.y));
                });
            }
        }
    }

    tracing::trace!(points = polyline.len(), tolerance, "flattened outline");

    polyline
}
