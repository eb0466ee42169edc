//! Keep rows belonging to at least one selected genre.
//!
//! Matching is done per genre token: a row tagged `Action|Comedy` matches a
//! selection containing `Comedy`. The joined string itself is never
//! compared, so selecting `Action|Comedy` matches nothing.

use crate::traits::Filter;
use data_loader::RatingRecord;
use std::collections::BTreeSet;

/// Keeps rows with at least one genre in the selected set.
///
/// An empty selection keeps every row.
pub struct GenreFilter {
    selected: BTreeSet<String>,
}

impl GenreFilter {
    pub fn new(selected: BTreeSet<String>) -> Self {
        Self { selected }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn matches(&self, record: &RatingRecord) -> bool {
        self.selected.is_empty() || record.genres().any(|genre| self.selected.contains(genre))
    }

    fn is_active(&self) -> bool {
        !self.selected.is_empty()
    }
}
