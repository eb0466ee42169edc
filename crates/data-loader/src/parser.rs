//! Parser for the ratings CSV.
//!
//! The table has a header row. Required columns:
//! `userId, movieId, rating, genres`. Optional columns:
//! `tag, timestamp_x, title`. Any other column is ignored.
//!
//! Parsing is fail-fast: the first malformed row aborts the whole load,
//! there is no partial dataset.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::Deserialize;
use std::io::Read;

/// Columns every row needs
pub const REQUIRED_COLUMNS: [&str; 4] = ["userId", "movieId", "rating", "genres"];

/// Row exactly as it appears in the CSV.
///
/// Empty optional fields come back as `None` from the csv deserializer, and
/// an optional column that is absent from the header is `None` for every row.
/// `timestamp_x` is read as a float because a join that leaves gaps in an
/// integer column writes it back out as `1147880044.0`.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "userId")]
    user_id: UserId,
    #[serde(rename = "movieId")]
    movie_id: MovieId,
    rating: f32,
    genres: String,
    #[serde(default)]
    tag: Option<String>,
    #[serde(default)]
    timestamp_x: Option<f64>,
    #[serde(default)]
    title: Option<String>,
}

/// Parse every row of a ratings CSV.
///
/// `source_name` only feeds error messages.
pub fn parse_records<R: Read>(input: R, source_name: &str) -> Result<Vec<RatingRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|err| map_csv_error(err, source_name))?
        .clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataLoadError::MissingColumn {
                source_name: source_name.to_string(),
                column: column.to_string(),
            });
        }
    }

    let mut records = Vec::new();
    let mut row = csv::StringRecord::new();

    while reader
        .read_record(&mut row)
        .map_err(|err| map_csv_error(err, source_name))?
    {
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let raw: RawRow = row
            .deserialize(Some(&headers))
            .map_err(|err| DataLoadError::ParseError {
                source_name: source_name.to_string(),
                line,
                reason: err.to_string(),
            })?;

        records.push(into_record(raw, line)?);
    }

    Ok(records)
}

/// Validate a raw row and convert it to the domain type
fn into_record(raw: RawRow, line: u64) -> Result<RatingRecord> {
    if !raw.rating.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&raw.rating) {
        return Err(DataLoadError::InvalidValue {
            field: "rating".to_string(),
            value: raw.rating.to_string(),
            line,
        });
    }

    let timestamp = match raw.timestamp_x {
        Some(ts) if !ts.is_finite() || ts.fract() != 0.0 => {
            return Err(DataLoadError::InvalidValue {
                field: "timestamp_x".to_string(),
                value: ts.to_string(),
                line,
            });
        }
        Some(ts) => Some(ts as i64),
        None => None,
    };

    Ok(RatingRecord {
        user_id: raw.user_id,
        movie_id: raw.movie_id,
        rating: raw.rating,
        genres: raw.genres,
        tag: non_empty(raw.tag),
        timestamp,
        title: non_empty(raw.title),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn map_csv_error(err: csv::Error, source_name: &str) -> DataLoadError {
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => DataLoadError::IoError(io),
        _ => DataLoadError::CsvError {
            source_name: source_name.to_string(),
            reason,
        },
    }
}
