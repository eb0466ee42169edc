//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable row
//! predicates to be chained in a [`crate::FilterPipeline`].

use data_loader::RatingRecord;

/// Core trait for row filters.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across threads
/// - Filters only inspect rows; they never own or mutate the dataset
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `record` passes this filter
    fn matches(&self, record: &RatingRecord) -> bool;

    /// Whether this filter can reject anything at all.
    ///
    /// Inactive filters are skipped by the pipeline.
    fn is_active(&self) -> bool {
        true
    }
}
