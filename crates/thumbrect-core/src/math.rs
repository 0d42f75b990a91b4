//! Math types re-exported from [`glam`].
//!
//! Points and directions in the outline geometry are plain [`Vec2`]s
//! (`f32`, y grows downward).
//!
//! ```
//! use thumbrect_core::math::Vec2;
//!
//! let center = Vec2::new(50.0, 10.0);
//! assert_eq!(center.distance(Vec2::new(50.0, 0.0)), 10.0);
//! ```
//!
//! [`glam`]: https://docs.rs/glam
pub use glam::Vec2;

/// Absolute tolerance used when comparing computed coordinates.
pub const EPSILON: f32 = 1.0e-4;

/// Whether two points coincide within [`EPSILON`].
#[inline]
pub fn approx_eq(a: Vec2, b: Vec2) -> bool {
    (a - b).abs().max_element() <= EPSILON
}
