//! Dataset building and loading.
//!
//! Turns parsed rows into a [`Dataset`], deriving the vocabularies and the
//! global rating bounds in one pass per value, and wires the parser to a
//! [`SourceLocation`].

use crate::error::Result;
use crate::parser;
use crate::source::SourceLocation;
use crate::types::*;
use std::collections::BTreeSet;
use std::time::Instant;
use tracing::info;

impl Dataset {
    /// Load the ratings table from a local file or URL.
    ///
    /// This is the main entry point for loading data. It always reads the
    /// source; use [`crate::DatasetCache`] to load each source only once.
    pub fn load(source: &SourceLocation) -> Result<Self> {
        info!("Loading ratings table from {}", source);
        let start = Instant::now();

        let reader = source.open()?;
        let records = parser::parse_records(reader, &source.to_string())?;
        let dataset = Dataset::from_records(records);

        info!(
            "Loaded {} ratings ({} genres, {} tags) in {:.2?}",
            dataset.len(),
            dataset.genres.len(),
            dataset.tags.len(),
            start.elapsed()
        );
        Ok(dataset)
    }

    /// Build a Dataset from rows that were already parsed.
    ///
    /// The three derived values are independent read-only scans, so they
    /// run in parallel with nested `rayon::join`.
    pub fn from_records(records: Vec<RatingRecord>) -> Self {
        let ((genres, tags), rating_bounds) = rayon::join(
            || {
                rayon::join(
                    || collect_genres(&records),
                    || collect_tags(&records),
                )
            },
            || compute_rating_bounds(&records),
        );

        Self {
            records,
            genres,
            tags,
            rating_bounds,
        }
    }
}

fn collect_genres(records: &[RatingRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| record.genres())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn collect_tags(records: &[RatingRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| record.tag.as_deref())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn compute_rating_bounds(records: &[RatingRecord]) -> Option<(f32, f32)> {
    records.iter().map(|r| r.rating).fold(None, |bounds, rating| {
        Some(match bounds {
            None => (rating, rating),
            Some((lo, hi)) => (lo.min(rating), hi.max(rating)),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(rating: f32, genres: &str, tag: Option<&str>) -> RatingRecord {
        RatingRecord {
            user_id: 1,
            movie_id: 1,
            rating,
            genres: genres.to_string(),
            tag: tag.map(str::to_string),
            timestamp: None,
            title: None,
        }
    }

    #[test]
    fn test_vocabularies_are_sorted_and_unique() {
        let dataset = Dataset::from_records(vec![
            record(4.0, "Drama|Action", Some("funny")),
            record(3.0, "Action", None),
            record(2.5, "Comedy|Drama", Some("dark")),
            record(5.0, "Comedy", Some("funny")),
        ]);

        assert_eq!(dataset.all_genres(), ["Action", "Comedy", "Drama"]);
        assert_eq!(dataset.all_tags(), ["dark", "funny"]);
    }

    #[test]
    fn test_rating_bounds() {
        let dataset = Dataset::from_records(vec![
            record(4.0, "Drama", None),
            record(0.5, "Action", None),
            record(3.5, "Comedy", None),
        ]);
        assert_eq!(dataset.rating_bounds(), Some((0.5, 4.0)));
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.all_genres().is_empty());
        assert!(dataset.all_tags().is_empty());
        assert_eq!(dataset.rating_bounds(), None);
    }
}
