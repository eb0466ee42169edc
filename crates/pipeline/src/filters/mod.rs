//! Filter implementations for the filter stage.
//!
//! This module contains all the concrete filters that can be composed into
//! a FilterPipeline. A row survives the pipeline only if every active
//! filter matches it.

pub mod genre;
pub mod rating_range;
pub mod tag;

// Re-export for convenience
pub use genre::GenreFilter;
pub use rating_range::RatingRangeFilter;
pub use tag::TagFilter;
