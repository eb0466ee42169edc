//! Read-only reductions over a filtered view.
//!
//! Every aggregation returns a [`Section`]: either its result or the reason
//! it has nothing to show. An empty view always yields
//! [`Unavailable::EmptyFilterResult`], so no aggregation divides by zero or
//! indexes into an empty slice. Sections are independent; one being
//! unavailable never affects another.

pub mod correlation;
pub mod genre_frequency;
pub mod genre_ratings;
pub mod histogram;
pub mod tag_words;
pub mod top_movies;

pub use correlation::{correlation_matrix, CorrelationMatrix};
pub use genre_frequency::{count_genres, genre_frequency, GenreCount};
pub use genre_ratings::{mean_rating_by_genre, GenreRating};
pub use histogram::{rating_histogram, Histogram, HistogramBucket};
pub use tag_words::{tag_word_frequency, TagCloud, WordCount};
pub use top_movies::{top_movies, TopMovie};

use serde::Serialize;
use thiserror::Error;

/// How many entries ranked sections keep
pub const TOP_N: usize = 10;

/// Why a section has no result
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Unavailable {
    #[error("no rows match the current filters")]
    EmptyFilterResult,

    #[error("not enough numeric data after filtering ({rows} rows, need at least 2)")]
    InsufficientNumericData { rows: usize },

    #[error("no tag data available for the selected filters")]
    NoTagData,

    #[error("no movie titles in the selected rows")]
    NoTitleData,
}

/// Outcome of one dashboard section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Section<T> {
    Ready(T),
    Unavailable(Unavailable),
}

impl<T> Section<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Section::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Section::Ready(value) => Some(value),
            Section::Unavailable(_) => None,
        }
    }

    pub fn unavailable(&self) -> Option<Unavailable> {
        match self {
            Section::Ready(_) => None,
            Section::Unavailable(reason) => Some(*reason),
        }
    }

    pub fn into_result(self) -> Result<T, Unavailable> {
        match self {
            Section::Ready(value) => Ok(value),
            Section::Unavailable(reason) => Err(reason),
        }
    }
}

impl<T> From<Unavailable> for Section<T> {
    fn from(reason: Unavailable) -> Self {
        Section::Unavailable(reason)
    }
}
