//! Memoized blog metadata.
//!
//! The aggregator itself never caches; this layer sits above it for callers
//! that render the same items repeatedly. Entries are keyed by item id, which
//! is safe because the content store never changes after load.
//!
//! # Thread Safety
//!
//! Uses `RwLock` to allow:
//! - Multiple concurrent reads of cached entries
//! - Exclusive writes when an entry is first computed

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::blog::{SeriesMetadata, aggregate_metadata};
use crate::content::ContentItem;

#[derive(Debug, Default)]
pub struct MetadataMemo {
    entries: RwLock<FxHashMap<String, SeriesMetadata>>,
}

impl MetadataMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached metadata for `item`, computing it on first request.
    pub fn get(&self, item: &ContentItem) -> SeriesMetadata {
        // Fast path: read lock only
        if let Some(meta) = self.entries.read().get(item.id()) {
            return meta.clone();
        }

        let mut entries = self.entries.write();
        // Double-check after acquiring write lock
        if let Some(meta) = entries.get(item.id()) {
            return meta.clone();
        }

        let meta = aggregate_metadata(item);
        entries.insert(item.id().to_string(), meta.clone());
        meta
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::test_fixtures::{post, series};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_same_result_as_aggregator() {
        let memo = MetadataMemo::new();
        let item = ContentItem::Series(series(
            "s",
            vec![post("a", "2024-03-01", 6), post("b", "2024-01-15", 9)],
        ));

        assert_eq!(memo.get(&item), aggregate_metadata(&item));
        assert_eq!(memo.get(&item), aggregate_metadata(&item));
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn test_entries_per_item() {
        let memo = MetadataMemo::new();
        let first = ContentItem::Solo(post("a", "2024-01-01", 1));
        let second = ContentItem::Solo(post("b", "2024-01-02", 2));

        assert_eq!(memo.get(&first).reading_time, 1);
        assert_eq!(memo.get(&second).reading_time, 2);
        assert_eq!(memo.len(), 2);
    }

    #[test]
    fn test_clear() {
        let memo = MetadataMemo::new();
        memo.get(&ContentItem::Solo(post("a", "2024-01-01", 1)));
        assert!(!memo.is_empty());
        memo.clear();
        assert!(memo.is_empty());
    }

    #[test]
    fn test_concurrent_readers() {
        let memo = Arc::new(MetadataMemo::new());
        let item = Arc::new(ContentItem::Series(series(
            "s",
            vec![post("a", "2024-01-01", 2), post("b", "2024-01-02", 3)],
        )));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let memo = Arc::clone(&memo);
                let item = Arc::clone(&item);
                thread::spawn(move || memo.get(&item).reading_time)
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 5);
        }
        assert_eq!(memo.len(), 1);
    }
}
