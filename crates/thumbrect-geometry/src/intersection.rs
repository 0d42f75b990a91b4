//! Line–circle intersection and the extrusion arc angles.

use crate::error::{GeometryError, GeometryResult};
use glam::Vec2;
use std::f32::consts::PI;

/// The two points where a line crosses a circle.
///
/// When the line is tangent to the circle or misses it, both points equal
/// the line's start point. That sentinel means "draw a straight edge".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionResult {
    /// Intersection nearer to the line's start point.
    pub first: Vec2,
    /// Intersection farther along the line.
    pub second: Vec2,
}

impl IntersectionResult {
    /// The "no visible extrusion" result for a line starting at `start`.
    pub const fn sentinel(start: Vec2) -> Self {
        Self {
            first: start,
            second: start,
        }
    }

    /// Both points coincide.
    pub fn is_sentinel(&self) -> bool {
        self.first == self.second
    }

    /// The extrusion visibly cuts the edge. Only the x coordinates are
    /// compared, matching how the outline decides whether to draw the bump.
    pub fn has_extrusion(&self) -> bool {
        self.first.x != self.second.x
    }
}

/// Intersect the infinite line through `start` and `end` with a circle.
///
/// Returns [`GeometryError::ZeroLengthSegment`] when the two points coincide
/// (or are not finite), since no direction can be derived from them.
/// Tangency and misses are not errors and yield the sentinel.
///
/// The line is not clipped to `[start, end]`; intersections outside the
/// segment are returned as-is.
pub fn try_find_intersection(
    start: Vec2,
    end: Vec2,
    center: Vec2,
    radius: f32,
) -> GeometryResult<IntersectionResult> {
    let delta = end - start;
    let length = delta.length();
    if !(length > 0.0 && length.is_finite()) {
        return Err(GeometryError::ZeroLengthSegment);
    }

    let direction = delta / length;

    // Parameter of the point on the line closest to the circle center
    let t = direction.dot(center - start);
    let closest = start + direction * t;
    let distance = closest.distance(center);

    if distance < radius {
        let dt = (radius * radius - distance * distance).sqrt();
        let first = start + direction * (t - dt);
        let second = start + direction * (t + dt);

        tracing::trace!(?first, ?second, "extrusion intersects edge");

        Ok(IntersectionResult { first, second })
    } else {
        // Tangent (distance == radius) or no intersection at all
        Ok(IntersectionResult::sentinel(start))
    }
}

/// Infallible form of [`try_find_intersection`]: a degenerate segment
/// gives the sentinel.
pub fn find_intersection(start: Vec2, end: Vec2, center: Vec2, radius: f32) -> IntersectionResult {
    try_find_intersection(start, end, center, radius).unwrap_or_else(|err| {
        tracing::trace!(%err, "falling back to straight edge");
        IntersectionResult::sentinel(start)
    })
}

/// Angle of the vector `from -> to`, `atan2` convention, in `(-π, π]`.
#[inline]
pub fn segment_angle(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Map a raw `atan2` angle into the range used for the clockwise extrusion
/// arc in a y-down coordinate system: `(1 + |raw / π|) · π`.
#[inline]
pub fn normalize_extrusion_angle(raw: f32) -> f32 {
    (1.0 + (raw / PI).abs()) * PI
}

/// Start and end angles of the extrusion arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrusionAngles {
    /// Raw angle from the thumb center to the second intersection.
    pub raw_start: f32,
    /// Raw angle from the thumb center to the first intersection.
    pub raw_end: f32,
    /// Normalized arc start angle (second intersection).
    pub start: f32,
    /// Normalized arc end angle (first intersection).
    pub end: f32,
}

impl ExtrusionAngles {
    pub fn new(center: Vec2, intersection: &IntersectionResult) -> Self {
        let raw_start = segment_angle(center, intersection.second);
        let raw_end = segment_angle(center, intersection.first);
        Self {
            raw_start,
            raw_end,
            start: normalize_extrusion_angle(raw_start),
            end: normalize_extrusion_angle(raw_end),
        }
    }
}
