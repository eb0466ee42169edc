//! The FilterPipeline narrows the dataset to the rows the user selected.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern, and the
//! [`FilteredView`] it produces.

use crate::filters::{GenreFilter, RatingRangeFilter, TagFilter};
use crate::selection::FilterSelection;
use crate::traits::Filter;
use data_loader::{Dataset, RatingRecord};

/// Rows of a dataset that passed the current filters.
///
/// The view borrows the rows; it is rebuilt from scratch for every
/// selection and keeps dataset order.
#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    rows: Vec<&'a RatingRecord>,
}

impl<'a> FilteredView<'a> {
    /// View over every row of the dataset
    pub fn all(dataset: &'a Dataset) -> Self {
        Self {
            rows: dataset.records().iter().collect(),
        }
    }

    pub fn rows(&self) -> &[&'a RatingRecord] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a RatingRecord> + '_ {
        self.rows.iter().copied()
    }

    /// First `n` rows, for previews
    pub fn head(&self, n: usize) -> &[&'a RatingRecord] {
        &self.rows[..n.min(self.rows.len())]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter::new(selected_genres))
///     .add_filter(RatingRangeFilter::new(RatingRange::new(3.0, 5.0)?))
///     .add_filter(TagFilter::new(selected_tags));
///
/// let view = pipeline.apply(&dataset);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The standard genre → rating → tag pipeline for a selection.
    pub fn from_selection(selection: &FilterSelection) -> Self {
        Self::new()
            .add_filter(GenreFilter::new(selection.genres.clone()))
            .add_filter(RatingRangeFilter::new(selection.rating))
            .add_filter(TagFilter::new(selection.tags.clone()))
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the dataset.
    ///
    /// ## Algorithm
    /// 1. Start with every row of the dataset
    /// 2. For each active filter in order:
    ///    a. Log filter name and input count
    ///    b. Retain matching rows
    ///    c. Log output count
    /// 3. Return the surviving rows as a view
    ///
    /// Running the same pipeline twice over the same dataset yields the same
    /// view; filters hold no state between calls.
    pub fn apply<'a>(&self, dataset: &'a Dataset) -> FilteredView<'a> {
        let mut view = FilteredView::all(dataset);
        for filter in self.filters.iter().filter(|f| f.is_active()) {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                view.rows.len()
            );
            view.rows.retain(|record| filter.matches(record));
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                view.rows.len()
            );
        }
        view
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
