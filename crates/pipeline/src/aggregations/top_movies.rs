//! Best rated titles with a minimum number of votes.
//!
//! ## Algorithm
//! 1. Group the view's rows by title (untitled rows are skipped)
//! 2. Compute mean rating and rating count per title
//! 3. Keep titles with at least `min_votes` ratings
//! 4. Sort by mean rating, highest first, and keep the top ten

use super::{Section, Unavailable, TOP_N};
use crate::filter_pipeline::FilteredView;
use serde::Serialize;
use std::collections::HashMap;

/// One row of the top movies table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopMovie {
    pub title: String,
    pub avg_rating: f64,
    pub num_ratings: usize,
}

/// Top rated titles among those with at least `min_votes` ratings.
///
/// If no title reaches the threshold the table is empty, which is a normal
/// result. Raising `min_votes` can only shrink the table.
pub fn top_movies(view: &FilteredView<'_>, min_votes: usize) -> Section<Vec<TopMovie>> {
    if view.is_empty() {
        return Unavailable::EmptyFilterResult.into();
    }

    // (title, sum, count) in first-seen order
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, f64, usize)> = Vec::new();

    for record in view.iter() {
        let Some(title) = record.title.as_deref() else {
            continue;
        };
        let idx = *positions.entry(title).or_insert_with(|| {
            groups.push((title, 0.0, 0));
            groups.len() - 1
        });
        let group = &mut groups[idx];
        group.1 += f64::from(record.rating);
        group.2 += 1;
    }

    if groups.is_empty() {
        return Unavailable::NoTitleData.into();
    }

    let mut movies: Vec<TopMovie> = groups
        .into_iter()
        .filter(|&(_, _, count)| count >= min_votes)
        .map(|(title, sum, count)| TopMovie {
            title: title.to_string(),
            avg_rating: sum / count as f64,
            num_ratings: count,
        })
        .collect();

    if movies.is_empty() {
        tracing::debug!("No title has at least {} ratings", min_votes);
    }

    movies.sort_by(|a, b| b.avg_rating.total_cmp(&a.avg_rating));
    movies.truncate(TOP_N);
    Section::Ready(movies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_pipeline::FilterPipeline;
    use data_loader::{Dataset, RatingRecord};

    fn rating(title: Option<&str>, rating: f32) -> RatingRecord {
        RatingRecord {
            user_id: 1,
            movie_id: 1,
            rating,
            genres: "Drama".to_string(),
            tag: None,
            timestamp: None,
            title: title.map(str::to_string),
        }
    }

    #[test]
    fn test_only_title_meeting_threshold() {
        let dataset = Dataset::from_records(vec![
            rating(Some("Heat (1995)"), 4.0),
            rating(Some("Heat (1995)"), 5.0),
            rating(Some("Casino (1995)"), 5.0),
            rating(Some("Balto (1995)"), 3.0),
        ]);
        let view = FilterPipeline::new().apply(&dataset);

        let movies = top_movies(&view, 2).into_result().unwrap();
        assert_eq!(
            movies,
            vec![TopMovie {
                title: "Heat (1995)".into(),
                avg_rating: 4.5,
                num_ratings: 2,
            }]
        );
    }

    #[test]
    fn test_sorted_and_truncated() {
        let mut records = Vec::new();
        for i in 0..12 {
            let title = format!("Movie {i}");
            for _ in 0..3 {
                records.push(rating(Some(&title), (i % 6) as f32 * 0.5 + 2.0));
            }
        }
        let dataset = Dataset::from_records(records);
        let view = FilterPipeline::new().apply(&dataset);

        let movies = top_movies(&view, 3).into_result().unwrap();
        assert_eq!(movies.len(), TOP_N);
        assert!(movies.windows(2).all(|w| w[0].avg_rating >= w[1].avg_rating));
        // Movie 5 and Movie 11 tie at 4.5; first seen wins
        assert_eq!(movies[0].title, "Movie 5");
        assert_eq!(movies[1].title, "Movie 11");
    }

    #[test]
    fn test_threshold_is_monotonic() {
        let mut records = Vec::new();
        for (title, votes) in [("A", 5), ("B", 15), ("C", 40), ("D", 80)] {
            for _ in 0..votes {
                records.push(rating(Some(title), 4.0));
            }
        }
        let dataset = Dataset::from_records(records);
        let view = FilterPipeline::new().apply(&dataset);

        let mut previous = usize::MAX;
        for min_votes in 10..=100 {
            let size = top_movies(&view, min_votes).into_result().unwrap().len();
            assert!(size <= previous);
            previous = size;
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn test_no_title_meets_threshold_is_empty_table() {
        let dataset = Dataset::from_records(vec![rating(Some("Heat (1995)"), 4.0)]);
        let view = FilterPipeline::new().apply(&dataset);
        assert_eq!(top_movies(&view, 10), Section::Ready(vec![]));
    }

    #[test]
    fn test_untitled_rows() {
        let dataset = Dataset::from_records(vec![rating(None, 4.0), rating(None, 3.0)]);
        let view = FilterPipeline::new().apply(&dataset);
        assert_eq!(top_movies(&view, 1).unavailable(), Some(Unavailable::NoTitleData));
    }

    #[test]
    fn test_empty_view() {
        let dataset = Dataset::default();
        let view = FilterPipeline::new().apply(&dataset);
        assert_eq!(
            top_movies(&view, 10).unavailable(),
            Some(Unavailable::EmptyFilterResult)
        );
    }
}
