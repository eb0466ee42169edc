//! Benchmarks for the filter-and-aggregate pipeline
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic table shaped like the real dataset (half-point ratings,
//! multi-genre rows, sparse tags) so it runs without any download.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{Dataset, RatingRecord};
use pipeline::{render, FilterPipeline, FilterSelection, RatingRange};

const GENRES: [&str; 8] = [
    "Action", "Adventure", "Comedy", "Crime", "Drama", "Romance", "Sci-Fi", "Thriller",
];
const TAGS: [&str; 5] = ["atmospheric", "funny", "twist ending", "classic", "dark comedy"];

fn synthetic_dataset(rows: u32) -> Dataset {
    let records = (0..rows)
        .map(|i| {
            let movie_id = i % 2_000;
            let genres = [
                GENRES[(movie_id % 8) as usize],
                GENRES[(movie_id / 8 % 8) as usize],
            ]
            .join("|");
            RatingRecord {
                user_id: i % 600,
                movie_id,
                rating: (i % 10 + 1) as f32 * 0.5,
                genres,
                tag: (i % 7 == 0).then(|| TAGS[(i % 5) as usize].to_string()),
                timestamp: Some(1_100_000_000 + i64::from(i)),
                title: Some(format!("Movie {movie_id}")),
            }
        })
        .collect();
    Dataset::from_records(records)
}

fn selection() -> FilterSelection {
    FilterSelection::new(RatingRange::new(3.0, 5.0).expect("valid range"))
        .with_genres(["Action", "Comedy", "Drama"])
}

fn bench_filter(c: &mut Criterion) {
    let dataset = synthetic_dataset(100_000);
    let pipeline = FilterPipeline::from_selection(&selection());

    c.bench_function("filter_100k_rows", |b| {
        b.iter(|| {
            let view = pipeline.apply(black_box(&dataset));
            black_box(view.len())
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let dataset = synthetic_dataset(100_000);
    let selection = selection();

    c.bench_function("render_100k_rows", |b| {
        b.iter(|| {
            let result = render(black_box(&dataset), black_box(&selection), black_box(50));
            black_box(result)
        })
    });
}

criterion_group!(benches, bench_filter, bench_render);
criterion_main!(benches);
