//! Thumbrect Core
//!
//! Shared utilities for the thumbrect outline geometry: logging setup,
//! profiling hooks, math re-exports, the bounds size type and
//! engine configuration.

pub mod alloc;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod math;
#[cfg(feature = "profiling")]
pub mod profiling;
