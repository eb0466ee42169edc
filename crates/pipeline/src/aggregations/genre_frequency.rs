//! How often each genre occurs in the selected rows.
//!
//! Genres are split-exploded first: a row tagged `Action|Comedy` counts
//! once for Action and once for Comedy.

use super::{Section, Unavailable, TOP_N};
use crate::filter_pipeline::FilteredView;
use serde::Serialize;
use std::collections::HashMap;

/// Number of occurrences of one genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

/// Count every genre token, most frequent first.
///
/// Ties keep the order in which the genres were first seen. The result is
/// not truncated, so the counts add up to the number of genre tokens in the
/// view.
pub fn count_genres(view: &FilteredView<'_>) -> Vec<GenreCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<GenreCount> = Vec::new();

    for genre in view.iter().flat_map(|record| record.genres()) {
        let idx = *positions.entry(genre).or_insert_with(|| {
            counts.push(GenreCount {
                genre: genre.to_string(),
                count: 0,
            });
            counts.len() - 1
        });
        counts[idx].count += 1;
    }

    // Stable sort: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// The ten most frequent genres of the view.
pub fn genre_frequency(view: &FilteredView<'_>) -> Section<Vec<GenreCount>> {
    if view.is_empty() {
        return Unavailable::EmptyFilterResult.into();
    }
    let mut counts = count_genres(view);
    counts.truncate(TOP_N);
    Section::Ready(counts)
}
