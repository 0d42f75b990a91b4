//! The finished outline handed to the host renderer.

use crate::{Color, Path, Segment};
use glam::Vec2;

bitflags::bitflags! {
    /// Optional pieces that made it into an outline.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct OutlineFeatures: u8 {
        /// The thumb extrusion cuts the top edge and an arc was emitted for it.
        const EXTRUSION = 0b0000_0001;
        /// The four corners were rounded with arcs.
        const ROUNDED_CORNERS = 0b0000_0010;
    }
}

/// A closed outline plus how to paint it.
///
/// Hosts fill the region with `fill_color` first, then stroke the same
/// outline with `stroke_color` at `stroke_width`.
#[derive(Debug, Clone, PartialEq)]
pub struct PathDescription {
    pub path: Path,
    pub fill_color: Color,
    pub stroke_color: Color,
    pub stroke_width: f32,
    pub features: OutlineFeatures,
}

impl PathDescription {
    pub fn start(&self) -> Vec2 {
        self.path.start()
    }

    pub fn segments(&self) -> &[Segment] {
        self.path.segments()
    }

    pub fn end_point(&self) -> Vec2 {
        self.path.end_point()
    }

    pub fn is_closed(&self) -> bool {
        self.path.is_closed()
    }

    pub fn has_extrusion(&self) -> bool {
        self.features.contains(OutlineFeatures::EXTRUSION)
    }

    pub fn has_rounded_corners(&self) -> bool {
        self.features.contains(OutlineFeatures::ROUNDED_CORNERS)
    }

    /// Bounding box of the outline, grown by half the stroke width.
    pub fn stroked_bounds(&self) -> Option<(Vec2, Vec2)> {
        let half = Vec2::splat(self.stroke_width.max(0.0) * 0.5);
        self.path.bounds().map(|(min, max)| (min - half, max + half))
    }

    /// Standalone SVG element drawing the outline, for debugging.
    pub fn to_svg_element(&self) -> String {
        format!(
            r#"<path d="{}" fill="{}" fill-opacity="{}" stroke="{}" stroke-opacity="{}" stroke-width="{}"/>"#,
            self.path.to_svg_path_data(),
            self.fill_color.to_hex_string(),
            self.fill_color.a,
            self.stroke_color.to_hex_string(),
            self.stroke_color.a,
            self.stroke_width,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathBuilder;

    fn square() -> PathDescription {
        let mut builder = PathBuilder::new(Vec2::ZERO);
        builder
            .line_to(Vec2::new(10.0, 0.0))
            .line_to(Vec2::new(10.0, 10.0))
            .line_to(Vec2::new(0.0, 10.0))
            .close();
        PathDescription {
            path: builder.build(),
            fill_color: Color::WHITE,
            stroke_color: Color::BLACK,
            stroke_width: 2.0,
            features: OutlineFeatures::empty(),
        }
    }

    #[test]
    fn test_stroked_bounds() {
        let (min, max) = square().stroked_bounds().unwrap();
        assert_eq!(min, Vec2::new(-1.0, -1.0));
        assert_eq!(max, Vec2::new(11.0, 11.0));
    }

    #[test]
    fn test_features() {
        let mut outline = square();
        assert!(!outline.has_extrusion());
        outline.features |= OutlineFeatures::EXTRUSION;
        assert!(outline.has_extrusion());
        assert!(!outline.has_rounded_corners());
    }

    #[test]
    fn test_svg_element() {
        let svg = square().to_svg_element();
        assert!(svg.starts_with(r#"<path d="M 0 0 L 10 0"#));
        assert!(svg.contains(r##"fill="#ffffff""##));
        assert!(svg.contains(r#"stroke-width="2""#));
    }
}
