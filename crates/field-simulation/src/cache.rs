//! Bounded-staleness force cache
//!
//! Memoizes per-particle force vectors under a structured tuple key
//! (particle index, field kind, coarsened parameter hash). An entry is only
//! served while its age is inside the validity window, so disabling the
//! cache (window 0) changes nothing but work done. All introspection values
//! are real counters, never estimates pulled from thin air.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use field_physics::{FieldKind, FieldParams};
use glam::Vec3;

/// Parameter values are quantized to 1/1024 units before hashing, so
/// floating-point jitter below that resolution maps to the same key.
const QUANTIZATION: f32 = 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    index: u32,
    kind: FieldKind,
    params_hash: u64,
}

#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    force: Vec3,
    timestamp: f32,
}

/// Measured cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
    pub approx_bytes: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f32 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f32 / total as f32
        }
    }
}

#[derive(Debug)]
pub struct ForceCache {
    window: f32,
    entries: HashMap<CacheKey, CacheEntry>,
    hits: u64,
    misses: u64,
}

impl ForceCache {
    /// `window` is the validity window in simulation seconds; `0.0` disables
    /// caching entirely.
    pub fn new(window: f32) -> Self {
        Self {
            window,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn window(&self) -> f32 {
        self.window
    }

    fn key(index: u32, kind: FieldKind, params: &FieldParams) -> CacheKey {
        let mut hasher = DefaultHasher::new();
        for value in params.relevant(kind) {
            ((value * QUANTIZATION).round() as i64).hash(&mut hasher);
        }
        CacheKey {
            index,
            kind,
            params_hash: hasher.finish(),
        }
    }

    /// Look up a force computed for this particle under these parameters.
    /// Entries older than the window (in either time direction) are misses.
    pub fn get(
        &mut self,
        index: u32,
        kind: FieldKind,
        params: &FieldParams,
        now: f32,
    ) -> Option<Vec3> {
        if self.window <= 0.0 {
            self.misses += 1;
            return None;
        }
        match self.entries.get(&Self::key(index, kind, params)) {
            Some(entry) if (now - entry.timestamp).abs() < self.window => {
                self.hits += 1;
                Some(entry.force)
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store (or overwrite) the force computed at `now`.
    pub fn put(&mut self, index: u32, kind: FieldKind, params: &FieldParams, now: f32, force: Vec3) {
        if self.window <= 0.0 {
            return;
        }
        self.entries.insert(
            Self::key(index, kind, params),
            CacheEntry {
                force,
                timestamp: now,
            },
        );
    }

    /// Drop all entries; the hit/miss counters are kept.
    pub fn invalidate(&mut self) {
        self.entries.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
            approx_bytes: self.entries.len()
                * (std::mem::size_of::<CacheKey>() + std::mem::size_of::<CacheEntry>()),
        }
    }
}
