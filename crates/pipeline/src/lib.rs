//! Filter-and-aggregate pipeline for the movie ratings dashboard.
//!
//! This crate provides:
//! - FilterSelection, the immutable user selection
//! - Filter trait and implementations for genre, rating range and tag
//! - FilterPipeline for composing filters into a FilteredView
//! - Aggregations over the view, each returning a Section
//! - `render`, which runs all of the above for one interaction
//!
//! ## Architecture
//! Data flows one way:
//! 1. Filters narrow the dataset to the selected rows
//! 2. Aggregations summarise the selected rows independently
//! 3. The caller presents the RenderResult
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{render, FilterSelection, RatingRange};
//!
//! let selection = FilterSelection::new(RatingRange::new(3.0, 5.0)?)
//!     .with_genres(["Action", "Comedy"]);
//!
//! let result = render(&dataset, &selection, 50);
//! if let Some(top) = result.top_movies.ready() {
//!     for movie in top {
//!         println!("{} {:.2}", movie.title, movie.avg_rating);
//!     }
//! }
//! ```

pub mod traits;
pub mod selection;
pub mod filters;
pub mod filter_pipeline;
pub mod aggregations;
pub mod dashboard;

// Re-export main types
pub use traits::Filter;
pub use selection::{FilterError, FilterSelection, RatingRange};
pub use filter_pipeline::{FilterPipeline, FilteredView};
pub use aggregations::{Section, Unavailable};
pub use dashboard::{render, render_view, RenderResult, DEFAULT_MIN_VOTES};
