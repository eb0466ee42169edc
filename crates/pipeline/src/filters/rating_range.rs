//! Keep rows whose rating lies in a closed interval.

use crate::selection::RatingRange;
use crate::traits::Filter;
use data_loader::RatingRecord;

/// Keeps rows with `low <= rating <= high`.
pub struct RatingRangeFilter {
    range: RatingRange,
}

impl RatingRangeFilter {
    pub fn new(range: RatingRange) -> Self {
        Self { range }
    }
}

impl Filter for RatingRangeFilter {
    fn name(&self) -> &str {
        "RatingRangeFilter"
    }

    fn matches(&self, record: &RatingRecord) -> bool {
        self.range.contains(record.rating)
    }
}
