//! Memoization of loaded datasets.
//!
//! Each distinct [`SourceLocation`] is loaded at most once for the life of
//! the cache and then shared as `Arc<Dataset>`. Entries never expire and
//! are never evicted. A failed load stores nothing, so the next request for
//! that source tries again.

use crate::error::Result;
use crate::source::SourceLocation;
use crate::types::Dataset;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Table of loaded datasets keyed by where they came from
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<SourceLocation, Arc<Dataset>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the dataset for `source`, loading it on first use.
    pub fn get_or_load(&mut self, source: &SourceLocation) -> Result<Arc<Dataset>> {
        self.get_or_load_with(source, Dataset::load)
    }

    /// Like [`get_or_load`](Self::get_or_load) but with a custom loader.
    ///
    /// `load` runs only on a cache miss.
    pub fn get_or_load_with<F>(&mut self, source: &SourceLocation, load: F) -> Result<Arc<Dataset>>
    where
        F: FnOnce(&SourceLocation) -> Result<Dataset>,
    {
        if let Some(dataset) = self.entries.get(source) {
            debug!("Dataset cache hit for {}", source);
            return Ok(Arc::clone(dataset));
        }

        debug!("Dataset cache miss for {}", source);
        let dataset = Arc::new(load(source)?);
        self.entries.insert(source.clone(), Arc::clone(&dataset));
        Ok(dataset)
    }

    pub fn contains(&self, source: &SourceLocation) -> bool {
        self.entries.contains_key(source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataLoadError;
    use crate::types::RatingRecord;
    use std::cell::Cell;

    fn tiny_dataset() -> Dataset {
        Dataset::from_records(vec![RatingRecord {
            user_id: 1,
            movie_id: 1,
            rating: 4.0,
            genres: "Drama".to_string(),
            tag: None,
            timestamp: None,
            title: Some("Heat (1995)".to_string()),
        }])
    }

    #[test]
    fn test_loads_once_per_source() {
        let mut cache = DatasetCache::new();
        let source: SourceLocation = "ratings.csv".parse().unwrap();
        let loads = Cell::new(0);

        let loader = |_: &SourceLocation| {
            loads.set(loads.get() + 1);
            Ok(tiny_dataset())
        };

        let first = cache.get_or_load_with(&source, loader).unwrap();
        let second = cache.get_or_load_with(&source, loader).unwrap();

        assert_eq!(loads.get(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distinct_sources_get_distinct_entries() {
        let mut cache = DatasetCache::new();
        let a: SourceLocation = "a.csv".parse().unwrap();
        let b: SourceLocation = "https://example.com/b.csv".parse().unwrap();

        cache.get_or_load_with(&a, |_| Ok(tiny_dataset())).unwrap();
        cache.get_or_load_with(&b, |_| Ok(Dataset::default())).unwrap();

        assert_eq!(cache.len(), 2);
        assert!(cache.contains(&a));
        assert!(cache.contains(&b));
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let mut cache = DatasetCache::new();
        let source: SourceLocation = "broken.csv".parse().unwrap();

        let result = cache.get_or_load_with(&source, |s| {
            Err(DataLoadError::FileNotFound {
                path: s.to_string(),
            })
        });
        assert!(result.is_err());
        assert!(cache.is_empty());

        let dataset = cache.get_or_load_with(&source, |_| Ok(tiny_dataset())).unwrap();
        assert_eq!(dataset.len(), 1);
    }
}
