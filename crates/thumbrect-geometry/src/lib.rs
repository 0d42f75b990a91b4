//! Thumbrect Geometry - outline of a rounded rectangle with a thumb extrusion
//!
//! This crate provides:
//! - Style parameters and anchor computation for the outline
//! - Line–circle intersection for the extrusion on the top edge
//! - Path assembly into a single closed outline of lines and arcs
//! - Optional memoization and polyline flattening for hosts
//!
//! The host view calls the engine on every redraw, then fills and strokes
//! the returned outline with its own 2D API.
//!
//! # Example
//!
//! ```
//! use thumbrect_core::geometry::Size;
//! use thumbrect_geometry::{GeometryEngine, StyleParameters};
//!
//! let style = StyleParameters::default()
//!     .with_thumb_circle_offset(-20.0)
//!     .with_corner_radius(6.0);
//!
//! let outline = GeometryEngine::new().build_path(Size::new(320.0, 180.0), &style);
//!
//! assert!(outline.is_closed());
//! assert!(outline.has_extrusion());
//! ```

// Core primitives
mod anchors;
mod color;
mod intersection;
mod path;
mod style;

// Assembly
mod description;
mod engine;
mod error;

// Host helpers
pub mod cache;
pub mod flatten;

// Re-exports
pub use anchors::*;
pub use color::*;
pub use intersection::*;
pub use path::*;
pub use style::*;

pub use description::*;
pub use engine::*;
pub use error::{GeometryError, GeometryResult};

pub use cache::PathCache;
pub use flatten::{Polyline, flatten};
