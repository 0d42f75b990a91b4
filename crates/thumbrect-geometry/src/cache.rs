//! Memoized outlines.
//!
//! An outline depends only on the bounds and the style, so hosts that redraw
//! often with unchanged input can reuse the previous result. Keys compare
//! the exact bit patterns of every input value.

use crate::{GeometryEngine, PathDescription, StyleParameters};
use thumbrect_core::alloc::HashMap;
use thumbrect_core::geometry::Size;

/// Default number of outlines kept before the cache is flushed.
pub const DEFAULT_CAPACITY: usize = 32;

/// Exact-equality key over `(bounds, style)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    bounds: [u32; 2],
    style: [u32; 16],
}

impl CacheKey {
    pub fn new(bounds: Size<f32>, style: &StyleParameters) -> Self {
        Self {
            bounds: [bounds.width.to_bits(), bounds.height.to_bits()],
            style: style.to_bits(),
        }
    }
}

/// Outline cache keyed on the exact input values.
#[derive(Debug)]
pub struct PathCache {
    entries: HashMap<CacheKey, PathDescription>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl Default for PathCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PathCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a cache holding at most `capacity` outlines (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    /// Return the cached outline for this input, building it on a miss.
    pub fn get_or_build(
        &mut self,
        engine: &GeometryEngine,
        bounds: Size<f32>,
        style: &StyleParameters,
    ) -> &PathDescription {
        let key = CacheKey::new(bounds, style);

        if self.entries.contains_key(&key) {
            self.hits += 1;
        } else {
            self.misses += 1;
            if self.entries.len() >= self.capacity {
                tracing::debug!(capacity = self.capacity, "outline cache full, flushing");
                self.entries.clear();
            }
        }

        self.entries
            .entry(key)
            .or_insert_with(|| engine.build_path(bounds, style))
    }

    /// Cached outline for this input, if any.
    pub fn get(&self, bounds: Size<f32>, style: &StyleParameters) -> Option<&PathDescription> {
        self.entries.get(&CacheKey::new(bounds, style))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_after_miss() {
        let engine = GeometryEngine::new();
        let mut cache = PathCache::new();
        let style = StyleParameters::default().with_thumb_circle_offset(-20.0);
        let bounds = Size::new(320.0, 180.0);

        let first = cache.get_or_build(&engine, bounds, &style).clone();
        let second = cache.get_or_build(&engine, bounds, &style).clone();

        assert_eq!(first, second);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);
        assert_eq!(first, engine.build_path(bounds, &style));
    }

    #[test]
    fn test_changed_input_misses() {
        let engine = GeometryEngine::new();
        let mut cache = PathCache::new();
        let style = StyleParameters::default();

        cache.get_or_build(&engine, Size::new(100.0, 100.0), &style);
        cache.get_or_build(&engine, Size::new(100.0, 101.0), &style);
        cache.get_or_build(&engine, Size::new(100.0, 101.0), &style.with_corner_radius(2.0));

        assert_eq!(cache.misses(), 3);
        assert_eq!(cache.len(), 3);
        assert!(cache.get(Size::new(100.0, 100.0), &style).is_some());
    }

    #[test]
    fn test_flush_when_full() {
        let engine = GeometryEngine::new();
        let mut cache = PathCache::with_capacity(2);
        let style = StyleParameters::default();

        for width in [100.0, 110.0, 120.0] {
            cache.get_or_build(&engine, Size::new(width, 50.0), &style);
        }

        assert_eq!(cache.len(), 1);
        assert!(cache.get(Size::new(120.0, 50.0), &style).is_some());
        assert!(cache.get(Size::new(100.0, 50.0), &style).is_none());
    }
}
