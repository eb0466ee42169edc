//! User selections that drive the filter stage.
//!
//! A [`FilterSelection`] is an immutable value built from the current
//! control state and handed to the pipeline; nothing here is global.

use data_loader::{MAX_RATING, MIN_RATING};
use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors raised while building a selection
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("Rating bounds must be finite numbers (got {low}..={high})")]
    NonFiniteBound { low: f32, high: f32 },

    #[error("Lower rating bound {low} is greater than upper bound {high}")]
    InvertedRange { low: f32, high: f32 },
}

/// Closed rating interval, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingRange {
    low: f32,
    high: f32,
}

impl RatingRange {
    pub fn new(low: f32, high: f32) -> Result<Self, FilterError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(FilterError::NonFiniteBound { low, high });
        }
        if low > high {
            return Err(FilterError::InvertedRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// The whole accepted rating domain
    pub fn full() -> Self {
        Self {
            low: MIN_RATING,
            high: MAX_RATING,
        }
    }

    pub fn low(&self) -> f32 {
        self.low
    }

    pub fn high(&self) -> f32 {
        self.high
    }

    pub fn contains(&self, rating: f32) -> bool {
        self.low <= rating && rating <= self.high
    }
}

impl Default for RatingRange {
    fn default() -> Self {
        Self::full()
    }
}

/// Everything the user picked: genres, rating interval and tags.
///
/// An empty genre or tag set means "no constraint" for that dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterSelection {
    pub genres: BTreeSet<String>,
    pub rating: RatingRange,
    pub tags: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new(rating: RatingRange) -> Self {
        Self {
            rating,
            ..Self::default()
        }
    }

    /// Builder: select these genres
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: select these tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}
