use data_loader::{Dataset, SourceLocation};
use std::time::Instant;

fn main() {
    let source: SourceLocation = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/movie_dataset.csv".to_string())
        .parse()
        .expect("source locations always parse");

    println!("Loading ratings table from {}...\n", source);

    let start = Instant::now();
    let dataset = Dataset::load(&source).expect("Failed to load dataset");
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Ratings: {}", dataset.len());
    println!("Genres: {}", dataset.all_genres().len());
    println!("Tags: {}", dataset.all_tags().len());
    if let Some((lo, hi)) = dataset.rating_bounds() {
        println!("Rating range: {:.1} - {:.1}", lo, hi);
    }
    println!("\nPerformance: {:.0} ratings/second",
             dataset.len() as f64 / elapsed.as_secs_f64());
}
