//! Mean rating per genre.
//!
//! Uses the same split-explode as the frequency count, so a rating on an
//! `Action|Comedy` row contributes to both genres' means. There is no
//! minimum support: a genre seen once still has a mean.

use super::{Section, Unavailable};
use crate::filter_pipeline::FilteredView;
use serde::Serialize;
use std::collections::HashMap;

/// Average rating of one genre
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreRating {
    pub genre: String,
    pub mean_rating: f64,
    /// Ratings that went into the mean
    pub count: usize,
}

/// Mean rating of every genre in the view, highest first.
///
/// Ties keep first-seen order.
pub fn mean_rating_by_genre(view: &FilteredView<'_>) -> Section<Vec<GenreRating>> {
    if view.is_empty() {
        return Unavailable::EmptyFilterResult.into();
    }

    // (genre, sum, count) in first-seen order
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(&str, f64, usize)> = Vec::new();

    for record in view.iter() {
        for genre in record.genres() {
            let idx = *positions.entry(genre).or_insert_with(|| {
                totals.push((genre, 0.0, 0));
                totals.len() - 1
            });
            let entry = &mut totals[idx];
            entry.1 += f64::from(record.rating);
            entry.2 += 1;
        }
    }

    let mut ratings: Vec<GenreRating> = totals
        .into_iter()
        .map(|(genre, sum, count)| GenreRating {
            genre: genre.to_string(),
            mean_rating: sum / count as f64,
            count,
        })
        .collect();

    ratings.sort_by(|a, b| b.mean_rating.total_cmp(&a.mean_rating));
    Section::Ready(ratings)
}
