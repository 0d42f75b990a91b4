//! Path primitives for the outline.
//!
//! A path is a start point followed by line and arc segments. Arcs follow
//! canvas `arc()` semantics: if the current point is not the arc's start
//! point, a straight line joins them before the arc is swept.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, TAU};
use std::fmt::Write as _;
use thumbrect_core::math::approx_eq;

/// A circular arc given by center, radius and angles.
///
/// Angles are in radians in a y-down coordinate system, so a clockwise arc
/// sweeps towards increasing angles on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub center: Vec2,
    pub radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub clockwise: bool,
}

impl ArcSegment {
    pub fn new(center: Vec2, radius: f32, start_angle: f32, end_angle: f32, clockwise: bool) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
        }
    }

    /// Point on the arc's circle at `angle`.
    #[inline]
    pub fn point_at(&self, angle: f32) -> Vec2 {
        self.center + Vec2::from_angle(angle) * self.radius
    }

    pub fn start_point(&self) -> Vec2 {
        self.point_at(self.start_angle)
    }

    pub fn end_point(&self) -> Vec2 {
        self.point_at(self.end_angle)
    }

    /// Angular extent in the direction of travel, in `[0, 2π)`.
    pub fn sweep(&self) -> f32 {
        let delta = if self.clockwise {
            self.end_angle - self.start_angle
        } else {
            self.start_angle - self.end_angle
        };
        delta.rem_euclid(TAU)
    }

    /// Signed extent: positive for clockwise arcs.
    pub fn signed_sweep(&self) -> f32 {
        if self.clockwise {
            self.sweep()
        } else {
            -self.sweep()
        }
    }

    /// Whether `angle` lies on the swept part of the circle.
    pub fn contains_angle(&self, angle: f32) -> bool {
        let offset = if self.clockwise {
            angle - self.start_angle
        } else {
            self.start_angle - angle
        };
        offset.rem_euclid(TAU) <= self.sweep()
    }

    /// Tight bounding box of the swept arc.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let start = self.start_point();
        let end = self.end_point();
        let mut min = start.min(end);
        let mut max = start.max(end);

        for quadrant in 0..4 {
            let angle = quadrant as f32 * FRAC_PI_2;
            if self.contains_angle(angle) {
                let p = self.point_at(angle);
                min = min.min(p);
                max = max.max(p);
            }
        }

        (min, max)
    }
}

/// One piece of an outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Straight line from the current point.
    Line { to: Vec2 },
    /// Circular arc, joined to the current point by a line if needed.
    Arc(ArcSegment),
}

impl Segment {
    /// Where the current point is after this segment.
    pub fn end_point(&self) -> Vec2 {
        match self {
            Segment::Line { to } => *to,
            Segment::Arc(arc) => arc.end_point(),
        }
    }

    pub fn is_arc(&self) -> bool {
        matches!(self, Segment::Arc(_))
    }
}

/// A start point plus an ordered list of segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    start: Vec2,
    segments: Vec<Segment>,
}

impl Path {
    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterator over the arc segments.
    pub fn arcs(&self) -> impl Iterator<Item = &ArcSegment> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Arc(arc) => Some(arc),
            Segment::Line { .. } => None,
        })
    }

    /// Current point after the last segment.
    pub fn end_point(&self) -> Vec2 {
        self.segments
            .last()
            .map(Segment::end_point)
            .unwrap_or(self.start)
    }

    /// The last segment brings the current point back to the start.
    pub fn is_closed(&self) -> bool {
        !self.segments.is_empty() && approx_eq(self.end_point(), self.start)
    }

    /// Bounding box of everything the path draws, including the implicit
    /// joining lines before arcs.
    ///
    /// Returns (min, max) corners, or `None` if a coordinate is not finite.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut min = self.start;
        let mut max = self.start;

        for segment in &self.segments {
            match segment {
                Segment::Line { to } => {
                    min = min.min(*to);
                    max = max.max(*to);
                }
                Segment::Arc(arc) => {
                    let (arc_min, arc_max) = arc.bounds();
                    min = min.min(arc_min);
                    max = max.max(arc_max);
                }
            }
        }

        if min.is_finite() && max.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }

    /// SVG path data (`d` attribute) for this path, closed with `Z`.
    ///
    /// SVG shares the y-down convention, so clockwise arcs map to sweep
    /// flag 1.
    pub fn to_svg_path_data(&self) -> String {
        let mut data = String::new();
        let _ = write!(data, "M {} {}", self.start.x, self.start.y);
        let mut current = self.start;

        for segment in &self.segments {
            match segment {
                Segment::Line { to } => {
                    let _ = write!(data, " L {} {}", to.x, to.y);
                }
                Segment::Arc(arc) => {
                    let start = arc.start_point();
                    if !approx_eq(start, current) {
                        let _ = write!(data, " L {} {}", start.x, start.y);
                    }

                    let sweep = arc.sweep();
                    if sweep > 0.0 && arc.radius > 0.0 {
                        let end = arc.end_point();
                        let large_arc = u8::from(sweep > std::f32::consts::PI);
                        let sweep_flag = u8::from(arc.clockwise);
                        let _ = write!(
                            data,
                            " A {r} {r} 0 {large_arc} {sweep_flag} {} {}",
                            end.x,
                            end.y,
                            r = arc.radius
                        );
                    }
                }
            }
            current = segment.end_point();
        }

        data.push_str(" Z");
        data
    }
}

/// Builder for constructing paths.
#[derive(Debug)]
pub struct PathBuilder {
    start: Vec2,
    segments: Vec<Segment>,
}

impl PathBuilder {
    /// Start a new path at `start`.
    pub fn new(start: Vec2) -> Self {
        Self {
            start,
            segments: Vec::new(),
        }
    }

    /// Draw a line to a position.
    pub fn line_to(&mut self, to: Vec2) -> &mut Self {
        self.segments.push(Segment::Line { to });
        self
    }

    /// Draw an arc.
    pub fn arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        clockwise: bool,
    ) -> &mut Self {
        self.segments.push(Segment::Arc(ArcSegment::new(
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
        )));
        self
    }

    /// Close the path with a line back to the start point.
    pub fn close(&mut self) -> &mut Self {
        let start = self.start;
        self.line_to(start)
    }

    /// Get the current position.
    pub fn current_pos(&self) -> Vec2 {
        self.segments
            .last()
            .map(Segment::end_point)
            .unwrap_or(self.start)
    }

    /// Build the path.
    pub fn build(self) -> Path {
        Path {
            start: self.start,
            segments: self.segments,
        }
    }
}
