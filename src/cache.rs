use super::pattern::Pattern;
use ahash::AHashMap;
use compact_str::CompactString;
use crossbeam_utils::sync::ShardedLock;
use std::sync::{Arc, PoisonError};
use tracing::debug;

const DEFAULT_CAPACITY: usize = 256;

/// A thread-safe cache of compiled patterns, keyed by source text.
///
/// When the cache is full it is emptied before the next insertion; callers
/// typically use a small, fixed set of patterns.
///
/// # Examples
/// ```
/// use name_format::{Key, NameRecord, PatternCache, Settings};
///
/// let cache = PatternCache::new();
/// let record = NameRecord::new().with(Key::Given, "Ada");
///
/// let pattern = cache.get("g+if");
/// assert_eq!("Ada", pattern.render(&record, &Settings::default()));
/// assert_eq!(1, cache.len());
///
/// cache.get("g+if");
/// assert_eq!(1, cache.len());
/// ```
#[derive(Debug)]
pub struct PatternCache {
    capacity: usize,
    patterns: ShardedLock<AHashMap<CompactString, Arc<Pattern>>>,
}

impl Default for PatternCache {
    fn default() -> PatternCache {
        PatternCache::new()
    }
}

impl PatternCache {
    pub fn new() -> PatternCache {
        PatternCache::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> PatternCache {
        let capacity = capacity.max(1);
        PatternCache {
            capacity,
            patterns: ShardedLock::new(AHashMap::with_capacity(capacity)),
        }
    }

    /// The compiled form of `pattern`, compiling it on first use.
    pub fn get(&self, pattern: &str) -> Arc<Pattern> {
        {
            let patterns = self.patterns.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(compiled) = patterns.get(pattern) {
                return Arc::clone(compiled);
            }
        }

        let compiled = Arc::new(Pattern::compile(pattern));

        let mut patterns = self.patterns.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = patterns.get(pattern) {
            return Arc::clone(existing);
        }
        if patterns.len() >= self.capacity {
            debug!(capacity = self.capacity, "pattern cache full, clearing");
            patterns.clear();
        }
        patterns.insert(pattern.into(), Arc::clone(&compiled));
        compiled
    }

    pub fn len(&self) -> usize {
        self.patterns
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.patterns
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
