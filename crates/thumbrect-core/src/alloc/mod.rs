//! Hash map backed by AHash.

pub use ahash::AHashMap as HashMap;
