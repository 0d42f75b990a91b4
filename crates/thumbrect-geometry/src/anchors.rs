//! Anchor points of the outline.

use crate::StyleParameters;
use glam::Vec2;
use thumbrect_core::geometry::Size;

/// Centers of the four corner arcs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerCenters {
    pub top_right: Vec2,
    pub bottom_right: Vec2,
    pub bottom_left: Vec2,
    pub top_left: Vec2,
}

/// Every fixed point the outline is assembled from.
///
/// Corner points are named by where the outline reaches them while walking
/// clockwise from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    /// Center of the extrusion circle.
    pub thumb_center: Vec2,
    /// Where the top-left corner arc ends and the top edge begins. The
    /// outline starts and ends here.
    pub top_left_arc_end: Vec2,
    /// Where the top edge ends and the top-right corner arc begins.
    pub top_right_arc_start: Vec2,
    /// Bottom of the right edge, where the bottom-right arc begins.
    pub bottom_right_arc_start: Vec2,
    /// Left end of the bottom edge, where the bottom-left arc begins.
    pub bottom_left_arc_start: Vec2,
    /// Bottom of the left edge, where the outline turns back up.
    pub left_edge_return: Vec2,
    pub corner_centers: CornerCenters,
}

impl Anchors {
    /// Compute the anchors for `bounds`.
    ///
    /// `style` is used as given; callers that need the clamped geometry
    /// pass `style.clamped()`.
    pub fn compute(bounds: Size<f32>, style: &StyleParameters) -> Self {
        let width = bounds.width;
        let height = bounds.height;
        let r = style.corner_radius;
        let wi = style.width_inset;
        let hi = style.height_inset;
        let top = style.y_offset + hi;

        let thumb_center = Vec2::new(
            width / 2.0 + style.circle_x_offset,
            style.thumb_radius + style.thumb_circle_offset + hi + style.y_offset,
        );

        Self {
            thumb_center,
            top_left_arc_end: Vec2::new(r + wi, top),
            top_right_arc_start: Vec2::new(width - wi - r, top),
            bottom_right_arc_start: Vec2::new(width - wi, height - r - hi),
            bottom_left_arc_start: Vec2::new(r + wi, height - hi),
            left_edge_return: Vec2::new(wi, height - r - hi),
            corner_centers: CornerCenters {
                top_right: Vec2::new(width - r - wi, top + r),
                bottom_right: Vec2::new(width - r - wi, height - r - hi),
                bottom_left: Vec2::new(r + wi, height - r - hi),
                top_left: Vec2::new(r + wi, top + r),
            },
        }
    }
}
