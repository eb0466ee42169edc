//! Core domain types for the movie ratings table.
//!
//! One CSV row becomes one [`RatingRecord`]; the whole table becomes a
//! [`Dataset`], which is immutable once built.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases & Constants
// =============================================================================

/// Unique identifier for a user
pub type UserId = u32;

/// Unique identifier for a movie
pub type MovieId = u32;

/// Separator between genres in the `genres` column ("Action|Comedy")
pub const GENRE_DELIMITER: char = '|';

/// Lowest rating accepted by the loader
pub const MIN_RATING: f32 = 0.0;

/// Highest rating accepted by the loader
pub const MAX_RATING: f32 = 5.0;

// =============================================================================
// Rating Record
// =============================================================================

/// A single row of the ratings table.
///
/// Rows are joined data: who rated what, how much, with the movie's genres,
/// an optional free-text tag and the movie title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub user_id: UserId,
    pub movie_id: MovieId,
    /// Rating value within `MIN_RATING..=MAX_RATING`
    pub rating: f32,
    /// Raw genre column, possibly several genres joined by `|`
    pub genres: String,
    pub tag: Option<String>,
    /// Unix timestamp of the tag/rating (`timestamp_x` column)
    pub timestamp: Option<i64>,
    pub title: Option<String>,
}

impl RatingRecord {
    /// Iterate over the individual genres of this row.
    ///
    /// Tokens are trimmed and empty tokens are skipped, so `"Action||Drama "`
    /// yields `Action` and `Drama`.
    pub fn genres(&self) -> impl Iterator<Item = &str> + '_ {
        self.genres
            .split(GENRE_DELIMITER)
            .map(str::trim)
            .filter(|genre| !genre.is_empty())
    }

    /// True if any of this row's genres equals `genre`
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres().any(|g| g == genre)
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// The full ratings table, loaded once and never mutated.
///
/// Besides the rows it keeps a few values derived at build time, all of
/// them computed over the *whole* table: the genre and tag vocabularies used
/// to populate selection controls, and the global rating bounds used for
/// histogram bucketing.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub(crate) records: Vec<RatingRecord>,
    /// Sorted, de-duplicated genre tokens
    pub(crate) genres: Vec<String>,
    /// Sorted, de-duplicated non-missing tags
    pub(crate) tags: Vec<String>,
    /// Observed (min, max) rating, `None` for an empty table
    pub(crate) rating_bounds: Option<(f32, f32)>,
}

impl Dataset {
    /// All rows in file order
    pub fn records(&self) -> &[RatingRecord] {
        &self.records
    }

    /// Every distinct genre appearing in the table, sorted
    pub fn all_genres(&self) -> &[String] {
        &self.genres
    }

    /// Every distinct tag appearing in the table, sorted
    pub fn all_tags(&self) -> &[String] {
        &self.tags
    }

    /// Lowest and highest rating in the whole table
    pub fn rating_bounds(&self) -> Option<(f32, f32)> {
        self.rating_bounds
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::from_records(Vec::new())
    }
}
