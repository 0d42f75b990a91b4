//! Outline Example - print the thumb outline as SVG
//!
//! This example demonstrates:
//! - Building outlines for a few style variations
//! - Anchor logging through `tracing` (run with `RUST_LOG=debug`)
//! - Flattening an outline for hosts without an arc primitive
//!
//! Pipe the output into a `.svg` file to view it.

use thumbrect_core::config::{Config, ProfilingMode};
use thumbrect_core::geometry::Size;
use thumbrect_core::logging;
use thumbrect_core::profiling::new_frame;
use thumbrect_geometry::{Color, GeometryEngine, StyleParameters, flatten};

fn main() {
    logging::init();

    // Also switches puffin scopes on
    let engine = GeometryEngine::with_config(Config::debug().with_profiling(ProfilingMode::On));
    let bounds = Size::new(320.0, 160.0);

    let variants = [
        StyleParameters::default(),
        StyleParameters::default().with_thumb_circle_offset(-18.0),
        StyleParameters::default()
            .with_thumb_circle_offset(-24.0)
            .with_corner_radius(14.0)
            .with_fill_color(Color::from_hex(0xEEF4FF))
            .with_stroke(Color::from_hex(0x3355AA), 3.0)
            .with_insets(2.0, 2.0),
    ];

    println!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        bounds.width,
        bounds.height * variants.len() as f32
    );

    for (row, style) in variants.iter().enumerate() {
        new_frame();

        let outline = engine.build_path(bounds, style);
        let polyline = flatten(&outline.path, 0.25);
        tracing::info!(
            row,
            segments = outline.segments().len(),
            flattened_points = polyline.len(),
            area = polyline.signed_area(),
            features = ?outline.features,
            "built outline"
        );

        println!(
            r#"  <g transform="translate(0 {})">{}</g>"#,
            row as f32 * bounds.height,
            outline.to_svg_element()
        );
    }

    println!("</svg>");
}
