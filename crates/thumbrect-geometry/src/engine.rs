//! Outline assembly.
//!
//! The engine turns the current bounds and style into a single closed
//! outline. It keeps no state between calls.

use crate::{
    Anchors, ExtrusionAngles, OutlineFeatures, PathBuilder, PathDescription, StyleParameters,
    error::{GeometryResult, ensure_finite},
    find_intersection,
};
use std::f32::consts::{FRAC_PI_2, PI};
use thumbrect_core::config::Config;
use thumbrect_core::geometry::Size;

#[cfg(feature = "profiling")]
use thumbrect_core::{
    config::ProfilingMode,
    profiling::{self, profile_function},
};

const TOP_RIGHT_START: f32 = 3.0 * PI / 2.0;
const TOP_RIGHT_END: f32 = 0.0;
const BOTTOM_RIGHT_START: f32 = 0.0;
const BOTTOM_RIGHT_END: f32 = FRAC_PI_2;
const BOTTOM_LEFT_START: f32 = FRAC_PI_2;
const BOTTOM_LEFT_END: f32 = PI;
const TOP_LEFT_START: f32 = PI;
const TOP_LEFT_END: f32 = 3.0 * PI / 2.0;

/// Builds the thumb outline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeometryEngine {
    config: Config,
}

static_assertions::assert_impl_all!(GeometryEngine: Send, Sync);

impl GeometryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with an explicit configuration. Starts puffin when
    /// `config.profiling` asks for it and scopes are not already on.
    pub fn with_config(config: Config) -> Self {
        #[cfg(feature = "profiling")]
        if config.profiling != ProfilingMode::Off && !profiling::is_enabled() {
            profiling::init_for(config.profiling);
        }
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Anchor points for `bounds`, after clamping `style`.
    pub fn compute_anchors(&self, bounds: Size<f32>, style: &StyleParameters) -> Anchors {
        Anchors::compute(bounds, &style.clamped())
    }

    /// Build the closed outline for `bounds` and `style`.
    ///
    /// Never fails. Degenerate input produces straight edges and sharp
    /// corners instead of an error.
    pub fn build_path(&self, bounds: Size<f32>, style: &StyleParameters) -> PathDescription {
        #[cfg(feature = "profiling")]
        profile_function!();

        let style = style.clamped();
        let anchors = Anchors::compute(bounds, &style);
        if bounds.is_degenerate() {
            tracing::trace!(?bounds, "building outline for degenerate bounds");
        }
        let corners = &anchors.corner_centers;
        let corner_radius = style.corner_radius;
        let rounded = corner_radius > 0.0;

        let intersection = find_intersection(
            anchors.top_left_arc_end,
            anchors.top_right_arc_start,
            anchors.thumb_center,
            style.thumb_radius,
        );
        let angles = ExtrusionAngles::new(anchors.thumb_center, &intersection);

        if self.config.log_anchors {
            tracing::debug!(
                thumb_radius = style.thumb_radius,
                thumb_circle_offset = style.thumb_circle_offset,
                y_offset = style.y_offset,
                height_inset = style.height_inset,
                ?anchors,
                raw_start_angle = angles.raw_start,
                raw_end_angle = angles.raw_end,
                start_angle = angles.start,
                end_angle = angles.end,
                "outline anchors"
            );
        }

        let mut features = OutlineFeatures::empty();
        let mut builder = PathBuilder::new(anchors.top_left_arc_end);

        // Tangent or missing extrusion leaves the top edge straight
        if intersection.has_extrusion() {
            builder.line_to(intersection.first).arc(
                anchors.thumb_center,
                style.thumb_radius,
                angles.start,
                angles.end,
                true,
            );
            features |= OutlineFeatures::EXTRUSION;
        }

        builder.line_to(anchors.top_right_arc_start);
        if rounded {
            builder.arc(
                corners.top_right,
                corner_radius,
                TOP_RIGHT_START,
                TOP_RIGHT_END,
                true,
            );
        }

        builder.line_to(anchors.bottom_right_arc_start);
        if rounded {
            builder.arc(
                corners.bottom_right,
                corner_radius,
                BOTTOM_RIGHT_START,
                BOTTOM_RIGHT_END,
                true,
            );
        }

        builder.line_to(anchors.bottom_left_arc_start);
        if rounded {
            builder.arc(
                corners.bottom_left,
                corner_radius,
                BOTTOM_LEFT_START,
                BOTTOM_LEFT_END,
                true,
            );
        }

        builder.line_to(anchors.left_edge_return);
        if rounded {
            builder.arc(
                corners.top_left,
                corner_radius,
                TOP_LEFT_START,
                TOP_LEFT_END,
                true,
            );
            features |= OutlineFeatures::ROUNDED_CORNERS;
        }

        builder.close();

        PathDescription {
            path: builder.build(),
            fill_color: style.fill_color,
            stroke_color: style.stroke_color,
            stroke_width: style.stroke_width,
            features,
        }
    }

    /// [`build_path`](Self::build_path) that first rejects non-finite
    /// bounds or style values.
    pub fn try_build_path(
        &self,
        bounds: Size<f32>,
        style: &StyleParameters,
    ) -> GeometryResult<PathDescription> {
        validate_bounds(bounds)?;
        style.validate()?;
        Ok(self.build_path(bounds, style))
    }
}

/// Reject NaN or infinite bounds. Zero and negative sizes are accepted.
pub fn validate_bounds(bounds: Size<f32>) -> GeometryResult<()> {
    ensure_finite("width", bounds.width)?;
    ensure_finite("height", bounds.height)?;
    Ok(())
}
