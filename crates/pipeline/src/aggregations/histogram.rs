//! Rating histogram with fixed, dataset-wide buckets.
//!
//! Bucket edges come from the rating bounds of the *whole* dataset, not of
//! the filtered rows, so histograms for different selections line up.

use super::{Section, Unavailable};
use crate::filter_pipeline::FilteredView;
use serde::Serialize;

/// Number of buckets the dashboard uses
pub const HISTOGRAM_BUCKETS: usize = 20;

/// One bucket: `[start, end)`, except the last which also includes `end`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBucket {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub buckets: Vec<HistogramBucket>,
}

impl Histogram {
    /// Sum of all bucket counts
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }
}

/// Bucket the view's ratings into `buckets` equal-width bins.
///
/// `global_bounds` is the (min, max) rating of the full dataset. When the
/// bounds collapse to one value the bins span `[min, min + 1.0]`.
/// Ratings outside the bounds are clamped into the first or last bin.
pub fn rating_histogram(
    view: &FilteredView<'_>,
    global_bounds: Option<(f32, f32)>,
    buckets: usize,
) -> Section<Histogram> {
    let (lo, hi) = match global_bounds {
        Some(bounds) if !view.is_empty() => bounds,
        _ => return Unavailable::EmptyFilterResult.into(),
    };
    let buckets = buckets.max(1);

    let lo = f64::from(lo);
    let span = match f64::from(hi) - lo {
        span if span > 0.0 => span,
        _ => 1.0,
    };
    let width = span / buckets as f64;

    let mut histogram = Histogram {
        buckets: (0..buckets)
            .map(|i| HistogramBucket {
                start: lo + width * i as f64,
                end: if i + 1 == buckets {
                    lo + span
                } else {
                    lo + width * (i + 1) as f64
                },
                count: 0,
            })
            .collect(),
    };

    for record in view.iter() {
        let offset = ((f64::from(record.rating) - lo) / width).floor();
        let idx = if offset <= 0.0 {
            0
        } else {
            (offset as usize).min(buckets - 1)
        };
        histogram.buckets[idx].count += 1;
    }

    Section::Ready(histogram)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_pipeline::FilterPipeline;
    use crate::filters::test_support::record;
    use crate::filters::RatingRangeFilter;
    use crate::selection::RatingRange;
    use data_loader::Dataset;

    fn dataset(ratings: &[f32]) -> Dataset {
        Dataset::from_records(ratings.iter().map(|&r| record(r, "Drama", None)).collect())
    }

    #[test]
    fn test_twenty_buckets_over_half_point_scale() {
        let dataset = dataset(&[0.5, 1.0, 2.8, 5.0, 5.0]);
        let view = FilterPipeline::new().apply(&dataset);

        let histogram = rating_histogram(&view, dataset.rating_bounds(), HISTOGRAM_BUCKETS)
            .into_result()
            .unwrap();

        assert_eq!(histogram.buckets.len(), 20);
        assert_eq!(histogram.total(), 5);
        assert_eq!(histogram.buckets[0].start, 0.5);
        assert_eq!(histogram.buckets[19].end, 5.0);
        // width 0.225: 1.0 lands in bucket 2, 2.8 in bucket 10, 5.0 in the last
        assert_eq!(histogram.buckets[0].count, 1);
        assert_eq!(histogram.buckets[2].count, 1);
        assert_eq!(histogram.buckets[10].count, 1);
        assert_eq!(histogram.buckets[19].count, 2);
    }

    #[test]
    fn test_buckets_use_global_bounds() {
        let dataset = dataset(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let view = FilterPipeline::new()
            .add_filter(RatingRangeFilter::new(RatingRange::new(4.0, 5.0).unwrap()))
            .apply(&dataset);

        let histogram = rating_histogram(&view, dataset.rating_bounds(), 4)
            .into_result()
            .unwrap();

        let edges: Vec<(f64, f64)> = histogram.buckets.iter().map(|b| (b.start, b.end)).collect();
        assert_eq!(edges, [(1.0, 2.0), (2.0, 3.0), (3.0, 4.0), (4.0, 5.0)]);
        let counts: Vec<usize> = histogram.buckets.iter().map(|b| b.count).collect();
        assert_eq!(counts, [0, 0, 0, 2]);
    }

    #[test]
    fn test_single_valued_domain() {
        let dataset = dataset(&[3.0, 3.0]);
        let view = FilterPipeline::new().apply(&dataset);

        let histogram = rating_histogram(&view, dataset.rating_bounds(), 20)
            .into_result()
            .unwrap();
        assert_eq!(histogram.buckets[0].count, 2);
        assert_eq!(histogram.total(), 2);
    }

    #[test]
    fn test_empty_view() {
        let dataset = dataset(&[1.0, 2.0]);
        let view = FilterPipeline::new()
            .add_filter(RatingRangeFilter::new(RatingRange::new(4.0, 5.0).unwrap()))
            .apply(&dataset);

        assert_eq!(
            rating_histogram(&view, dataset.rating_bounds(), 20).unavailable(),
            Some(Unavailable::EmptyFilterResult)
        );
    }
}
