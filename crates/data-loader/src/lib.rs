//! # Data Loader Crate
//!
//! This crate loads the joined movie-ratings table (one row per rating with
//! genres, tag and title) into an immutable in-memory [`Dataset`].
//!
//! ## Main Components
//!
//! - **types**: Core domain types (RatingRecord, Dataset)
//! - **source**: Local path or HTTP(S) URL the CSV is read from
//! - **parser**: Parse the CSV into Rust structs
//! - **index**: Build the Dataset and its derived vocabularies
//! - **cache**: Load each source once per process
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{DatasetCache, SourceLocation};
//!
//! let source: SourceLocation = "data/movie_dataset.csv".parse()?;
//! let mut cache = DatasetCache::new();
//!
//! // First call reads the file, later calls reuse it
//! let dataset = cache.get_or_load(&source)?;
//!
//! println!("{} ratings, genres: {:?}", dataset.len(), dataset.all_genres());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod source;
pub mod parser;
pub mod index;
pub mod cache;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use source::SourceLocation;
pub use cache::DatasetCache;
pub use types::{
    // Type aliases
    UserId,
    MovieId,
    // Core types
    RatingRecord,
    Dataset,
    // Constants
    GENRE_DELIMITER,
    MIN_RATING,
    MAX_RATING,
};
