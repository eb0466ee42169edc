//! # Dashboard rendering
//!
//! Runs the whole filter-and-aggregate pipeline for one interaction:
//! 1. Filter the dataset with the current selection
//! 2. Run every aggregation over the filtered view
//! 3. Collect the sections into a [`RenderResult`]
//!
//! `render` is a pure function of its inputs. Call it again on every input
//! change; nothing is carried over between calls.

use std::time::Instant;

use serde::Serialize;
use tracing::{info, warn};

use data_loader::Dataset;

use crate::aggregations::histogram::HISTOGRAM_BUCKETS;
use crate::aggregations::{
    correlation_matrix, genre_frequency, mean_rating_by_genre, rating_histogram,
    tag_word_frequency, top_movies, CorrelationMatrix, GenreCount, GenreRating, Histogram,
    Section, TagCloud, TopMovie,
};
use crate::filter_pipeline::{FilterPipeline, FilteredView};
use crate::selection::FilterSelection;

/// Default minimum number of ratings for the top movies table
pub const DEFAULT_MIN_VOTES: usize = 50;

/// Every section of the dashboard for one selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderResult {
    pub total_rows: usize,
    pub filtered_rows: usize,
    pub min_votes: usize,
    pub genre_frequency: Section<Vec<GenreCount>>,
    pub genre_ratings: Section<Vec<GenreRating>>,
    pub rating_histogram: Section<Histogram>,
    pub tag_cloud: Section<TagCloud>,
    pub correlation: Section<CorrelationMatrix>,
    pub top_movies: Section<Vec<TopMovie>>,
}

impl RenderResult {
    /// Names of the sections that have nothing to show
    pub fn unavailable_sections(&self) -> Vec<&'static str> {
        [
            ("genre_frequency", self.genre_frequency.is_ready()),
            ("genre_ratings", self.genre_ratings.is_ready()),
            ("rating_histogram", self.rating_histogram.is_ready()),
            ("tag_cloud", self.tag_cloud.is_ready()),
            ("correlation", self.correlation.is_ready()),
            ("top_movies", self.top_movies.is_ready()),
        ]
        .into_iter()
        .filter(|(_, ready)| !ready)
        .map(|(name, _)| name)
        .collect()
    }
}

/// Filter the dataset and compute every section.
pub fn render(dataset: &Dataset, selection: &FilterSelection, min_votes: usize) -> RenderResult {
    let view = FilterPipeline::from_selection(selection).apply(dataset);
    render_view(dataset, &view, min_votes)
}

/// Compute every section for a view that was already filtered.
///
/// `dataset` must be the dataset `view` was taken from; it supplies the
/// global rating bounds for the histogram.
pub fn render_view(dataset: &Dataset, view: &FilteredView<'_>, min_votes: usize) -> RenderResult {
    let start_time = Instant::now();

    let result = RenderResult {
        total_rows: dataset.len(),
        filtered_rows: view.len(),
        min_votes,
        genre_frequency: genre_frequency(view),
        genre_ratings: mean_rating_by_genre(view),
        rating_histogram: rating_histogram(view, dataset.rating_bounds(), HISTOGRAM_BUCKETS),
        tag_cloud: tag_word_frequency(view),
        correlation: correlation_matrix(view),
        top_movies: top_movies(view, min_votes),
    };

    for section in result.unavailable_sections() {
        warn!("Section {} has no data for the current filters", section);
    }

    info!(
        "Rendered dashboard: {} of {} rows selected in {:.2?}",
        result.filtered_rows,
        result.total_rows,
        start_time.elapsed()
    );
    result
}
