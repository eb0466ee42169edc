//! Keep rows carrying one of the selected tags.

use crate::traits::Filter;
use data_loader::RatingRecord;
use std::collections::BTreeSet;

/// Keeps rows whose tag is in the selected set.
///
/// With an empty selection every row passes, including untagged ones. With
/// a non-empty selection untagged rows are always dropped.
pub struct TagFilter {
    selected: BTreeSet<String>,
}

impl TagFilter {
    pub fn new(selected: BTreeSet<String>) -> Self {
        Self { selected }
    }
}

impl Filter for TagFilter {
    fn name(&self) -> &str {
        "TagFilter"
    }

    fn matches(&self, record: &RatingRecord) -> bool {
        if self.selected.is_empty() {
            return true;
        }
        match &record.tag {
            Some(tag) => self.selected.contains(tag),
            None => false,
        }
    }

    fn is_active(&self) -> bool {
        !self.selected.is_empty()
    }
}
