//! Pearson correlation between the numeric columns.

use super::{Section, Unavailable};
use crate::filter_pipeline::FilteredView;
use data_loader::RatingRecord;
use serde::Serialize;

/// Columns taking part in the matrix, in matrix order
pub const NUMERIC_COLUMNS: [&str; 3] = ["userId", "movieId", "rating"];

/// Symmetric correlation matrix over [`NUMERIC_COLUMNS`].
///
/// A cell is `None` when either column has zero variance, which also makes
/// that column's diagonal `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Correlation between two named columns
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        self.values[i][j]
    }
}

fn numeric_row(record: &RatingRecord) -> [f64; 3] {
    [
        f64::from(record.user_id),
        f64::from(record.movie_id),
        f64::from(record.rating),
    ]
}

/// Pairwise Pearson correlation of userId, movieId and rating.
///
/// Needs at least two rows; with fewer the section is unavailable instead
/// of producing a degenerate matrix.
pub fn correlation_matrix(view: &FilteredView<'_>) -> Section<CorrelationMatrix> {
    if view.is_empty() {
        return Unavailable::EmptyFilterResult.into();
    }
    if view.len() < 2 {
        return Unavailable::InsufficientNumericData { rows: view.len() }.into();
    }

    const K: usize = NUMERIC_COLUMNS.len();
    let n = view.len() as f64;

    let mut means = [0.0; K];
    for record in view.iter() {
        for (mean, value) in means.iter_mut().zip(numeric_row(record)) {
            *mean += value;
        }
    }
    for mean in &mut means {
        *mean /= n;
    }

    // Co-moment sums around the means
    let mut sums = [[0.0; K]; K];
    for record in view.iter() {
        let row = numeric_row(record);
        for i in 0..K {
            let di = row[i] - means[i];
            for j in i..K {
                sums[i][j] += di * (row[j] - means[j]);
            }
        }
    }

    let mut values = vec![vec![None; K]; K];
    for i in 0..K {
        for j in i..K {
            let denom = (sums[i][i] * sums[j][j]).sqrt();
            let r = if sums[i][i] > 0.0 && sums[j][j] > 0.0 && denom > 0.0 {
                Some(if i == j {
                    1.0
                } else {
                    (sums[i][j] / denom).clamp(-1.0, 1.0)
                })
            } else {
                None
            };
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Section::Ready(CorrelationMatrix {
        columns: NUMERIC_COLUMNS.iter().map(|c| c.to_string()).collect(),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_pipeline::FilterPipeline;
    use data_loader::Dataset;

    fn row(user_id: u32, movie_id: u32, rating: f32) -> RatingRecord {
        RatingRecord {
            user_id,
            movie_id,
            rating,
            genres: "Drama".to_string(),
            tag: None,
            timestamp: None,
            title: None,
        }
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("correlation should be defined");
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn test_perfect_correlations() {
        let dataset = Dataset::from_records(vec![
            row(1, 30, 1.0),
            row(2, 20, 2.0),
            row(3, 10, 3.0),
        ]);
        let view = FilterPipeline::new().apply(&dataset);

        let matrix = correlation_matrix(&view).into_result().unwrap();
        assert_eq!(matrix.columns, NUMERIC_COLUMNS);
        assert_close(matrix.get("userId", "rating"), 1.0);
        assert_close(matrix.get("userId", "movieId"), -1.0);
        assert_close(matrix.get("movieId", "rating"), -1.0);
        assert_close(matrix.get("rating", "rating"), 1.0);
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let dataset = Dataset::from_records(vec![
            row(1, 5, 4.0),
            row(7, 2, 3.5),
            row(3, 9, 1.0),
            row(4, 4, 5.0),
        ]);
        let view = FilterPipeline::new().apply(&dataset);

        let matrix = correlation_matrix(&view).into_result().unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(matrix.values[i][j], matrix.values[j][i]);
            }
        }
        let r = matrix.get("userId", "rating").unwrap();
        assert!((-1.0..=1.0).contains(&r));
    }

    #[test]
    fn test_constant_column_is_undefined() {
        let dataset = Dataset::from_records(vec![row(1, 1, 4.0), row(2, 1, 3.0)]);
        let view = FilterPipeline::new().apply(&dataset);

        let matrix = correlation_matrix(&view).into_result().unwrap();
        assert_eq!(matrix.get("movieId", "movieId"), None);
        assert_eq!(matrix.get("userId", "movieId"), None);
        assert_close(matrix.get("userId", "rating"), -1.0);
    }

    #[test]
    fn test_needs_two_rows() {
        let dataset = Dataset::from_records(vec![row(1, 1, 4.0)]);
        let view = FilterPipeline::new().apply(&dataset);
        assert_eq!(
            correlation_matrix(&view).unavailable(),
            Some(Unavailable::InsufficientNumericData { rows: 1 })
        );

        let empty = Dataset::default();
        let view = FilterPipeline::new().apply(&empty);
        assert_eq!(
            correlation_matrix(&view).unavailable(),
            Some(Unavailable::EmptyFilterResult)
        );
    }
}
