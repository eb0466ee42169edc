//! Where the ratings table comes from.
//!
//! A source is either a local CSV file or an HTTP(S) URL serving CSV
//! content. Sources are also the cache key, so they are `Hash + Eq`.

use crate::error::{DataLoadError, Result};
use std::convert::Infallible;
use std::fmt;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Location of a CSV ratings table
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceLocation {
    Path(PathBuf),
    Url(String),
}

impl SourceLocation {
    /// Open the source for reading.
    ///
    /// URLs are fetched with a blocking GET; non-2xx responses are errors.
    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            SourceLocation::Path(path) => {
                debug!("Opening local file {}", path.display());
                let file = File::open(path).map_err(|err| match err.kind() {
                    ErrorKind::NotFound => DataLoadError::FileNotFound {
                        path: path.display().to_string(),
                    },
                    _ => DataLoadError::IoError(err),
                })?;
                Ok(Box::new(file))
            }
            SourceLocation::Url(url) => {
                debug!("Fetching {}", url);
                let response = ureq::get(url.as_str())
                    .call()
                    .map_err(|err| DataLoadError::FetchError {
                        url: url.clone(),
                        reason: err.to_string(),
                    })?;
                Ok(Box::new(response.into_body().into_reader()))
            }
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, SourceLocation::Url(_))
    }
}

impl FromStr for SourceLocation {
    type Err = Infallible;

    /// Anything starting with `http://` or `https://` is a URL, everything
    /// else is a path.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(SourceLocation::Url(trimmed.to_string()))
        } else {
            Ok(SourceLocation::Path(PathBuf::from(trimmed)))
        }
    }
}

impl From<PathBuf> for SourceLocation {
    fn from(path: PathBuf) -> Self {
        SourceLocation::Path(path)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocation::Path(path) => write!(f, "{}", path.display()),
            SourceLocation::Url(url) => f.write_str(url),
        }
    }
}
