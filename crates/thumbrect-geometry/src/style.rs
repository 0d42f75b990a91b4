//! Style parameters for the thumb outline.
//!
//! The host view owns these values and passes a snapshot on every redraw.

use crate::Color;
use crate::error::{GeometryResult, ensure_finite};

/// Every value that shapes and paints the outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleParameters {
    /// Radius of the circular extrusion.
    ///
    /// Large radii need more `y_offset` to keep the bump inside the view.
    pub thumb_radius: f32,
    /// Vertical offset of the extrusion center from the top edge.
    ///
    /// Zero or positive hides the bump (plain rectangle). `-thumb_radius`
    /// puts half the circle above the edge.
    pub thumb_circle_offset: f32,
    /// Radius of the four rectangle corners. Zero gives sharp corners.
    pub corner_radius: f32,
    /// How far the rectangle is pushed down to leave room for the bump.
    pub y_offset: f32,
    /// Horizontal padding so a wide stroke is not clipped.
    pub width_inset: f32,
    /// Vertical padding so a wide stroke is not clipped.
    pub height_inset: f32,
    /// Horizontal shift of the extrusion center from `width / 2`.
    pub circle_x_offset: f32,
    pub stroke_width: f32,
    pub fill_color: Color,
    pub stroke_color: Color,
}

impl Default for StyleParameters {
    fn default() -> Self {
        Self {
            thumb_radius: 30.0,
            thumb_circle_offset: 0.0,
            corner_radius: 0.0,
            y_offset: 30.0,
            width_inset: 1.0,
            height_inset: 1.0,
            circle_x_offset: 0.0,
            stroke_width: 1.0,
            fill_color: Color::WHITE,
            stroke_color: Color::DARK_GRAY,
        }
    }
}

impl StyleParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thumb_radius(mut self, radius: f32) -> Self {
        self.thumb_radius = radius;
        self
    }

    pub fn with_thumb_circle_offset(mut self, offset: f32) -> Self {
        self.thumb_circle_offset = offset;
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_y_offset(mut self, offset: f32) -> Self {
        self.y_offset = offset;
        self
    }

    /// Set both insets.
    pub fn with_insets(mut self, width_inset: f32, height_inset: f32) -> Self {
        self.width_inset = width_inset;
        self.height_inset = height_inset;
        self
    }

    pub fn with_circle_x_offset(mut self, offset: f32) -> Self {
        self.circle_x_offset = offset;
        self
    }

    pub fn with_stroke(mut self, color: Color, width: f32) -> Self {
        self.stroke_color = color;
        self.stroke_width = width;
        self
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    /// The parameters actually used for drawing.
    ///
    /// A negative thumb radius becomes 0, and the circle offset is raised to
    /// `-thumb_radius` when it would lift the circle's lowest point above the
    /// top edge.
    pub fn clamped(&self) -> Self {
        let mut style = *self;

        if style.thumb_radius < 0.0 {
            style.thumb_radius = 0.0;
        }

        if style.thumb_circle_offset + style.thumb_radius < 0.0 {
            style.thumb_circle_offset = -style.thumb_radius;
        }

        style
    }

    /// Reject NaN and infinite values.
    pub fn validate(&self) -> GeometryResult<()> {
        ensure_finite("thumb_radius", self.thumb_radius)?;
        ensure_finite("thumb_circle_offset", self.thumb_circle_offset)?;
        ensure_finite("corner_radius", self.corner_radius)?;
        ensure_finite("y_offset", self.y_offset)?;
        ensure_finite("width_inset", self.width_inset)?;
        ensure_finite("height_inset", self.height_inset)?;
        ensure_finite("circle_x_offset", self.circle_x_offset)?;
        ensure_finite("stroke_width", self.stroke_width)?;
        Ok(())
    }

    /// Bit patterns of every field, in declaration order.
    pub(crate) fn to_bits(&self) -> [u32; 16] {
        let mut bits = [0u32; 16];
        let scalars = [
            self.thumb_radius,
            self.thumb_circle_offset,
            self.corner_radius,
            self.y_offset,
            self.width_inset,
            self.height_inset,
            self.circle_x_offset,
            self.stroke_width,
        ];
        for (slot, value) in bits.iter_mut().zip(scalars) {
            *slot = value.to_bits();
        }
        bits[8..12].copy_from_slice(&self.fill_color.to_bits());
        bits[12..16].copy_from_slice(&self.stroke_color.to_bits());
        bits
    }
}
