use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use data_loader::{Dataset, DatasetCache, RatingRecord, SourceLocation, MAX_RATING, MIN_RATING};
use pipeline::aggregations::{
    CorrelationMatrix, GenreCount, GenreRating, Histogram, TagCloud, TopMovie,
};
use pipeline::{
    render_view, FilterPipeline, FilterSelection, RatingRange, RenderResult, Section,
    DEFAULT_MIN_VOTES,
};
use std::sync::Arc;
use std::time::Instant;

const DEFAULT_SOURCE: &str =
    "https://raw.githubusercontent.com/Varvinska/Movie_App/refs/heads/main/movie_dataset.csv";

/// Rows shown by `--show-raw`
const RAW_PREVIEW_ROWS: usize = 20;

/// Widest bar drawn in text charts
const BAR_WIDTH: usize = 40;

/// Movie Insights - explore a movie ratings table from the terminal
#[derive(Parser)]
#[command(name = "movie-insights")]
#[command(about = "Filterable summaries of a movie ratings dataset", long_about = None)]
struct Cli {
    /// CSV file path or http(s) URL of the ratings table
    #[arg(short, long, global = true, env = "MOVIE_INSIGHTS_SOURCE", default_value = DEFAULT_SOURCE)]
    source: SourceLocation,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter the table and show every dashboard section
    Dashboard {
        /// Genre to include (repeatable); none means all genres
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Lowest rating to include
        #[arg(long, default_value_t = 3.0, value_parser = parse_rating)]
        min_rating: f32,

        /// Highest rating to include
        #[arg(long, default_value_t = MAX_RATING, value_parser = parse_rating)]
        max_rating: f32,

        /// Tag to include (repeatable); none means any tag or no tag
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Minimum number of ratings for the top movies table
        #[arg(long, default_value_t = DEFAULT_MIN_VOTES as u64, value_parser = clap::value_parser!(u64).range(10..=100))]
        min_votes: u64,

        /// Print the first rows of the filtered table
        #[arg(long)]
        show_raw: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List every genre in the table
    Genres,

    /// List every tag in the table
    Tags,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_rating(s: &str) -> std::result::Result<f32, String> {
    let value: f32 = s
        .parse()
        .map_err(|e| format!("'{}' is not a number: {}", s, e))?;
    if !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(format!(
            "rating must be between {} and {}",
            MIN_RATING, MAX_RATING
        ));
    }
    Ok(value)
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load the ratings table once for this process
    let mut cache = DatasetCache::new();
    let start = Instant::now();
    let dataset = cache
        .get_or_load(&cli.source)
        .with_context(|| format!("Dataset unavailable: could not load {}", cli.source))?;
    tracing::info!("Dataset ready in {:.2?}", start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Dashboard {
            genres,
            min_rating,
            max_rating,
            tags,
            min_votes,
            show_raw,
            format,
        } => {
            let selection = FilterSelection::new(
                RatingRange::new(min_rating, max_rating).context("Invalid rating range")?,
            )
            .with_genres(genres)
            .with_tags(tags);
            handle_dashboard(dataset, &selection, min_votes as usize, show_raw, format)?
        }
        Commands::Genres => handle_list("Genres", dataset.all_genres()),
        Commands::Tags => handle_list("Tags", dataset.all_tags()),
    }

    Ok(())
}

/// Handle the 'dashboard' command
fn handle_dashboard(
    dataset: Arc<Dataset>,
    selection: &FilterSelection,
    min_votes: usize,
    show_raw: bool,
    format: OutputFormat,
) -> Result<()> {
    let view = FilterPipeline::from_selection(selection).apply(&dataset);
    let result = render_view(&dataset, &view, min_votes);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)
                .context("Failed to serialize dashboard")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            print_header(selection, &result);
            if show_raw {
                print_raw_rows(view.head(RAW_PREVIEW_ROWS));
            }
            print_dashboard(&result);
        }
    }
    Ok(())
}

/// Handle the 'genres' and 'tags' commands
fn handle_list(label: &str, values: &[String]) {
    println!("{}", format!("{} ({}):", label, values.len()).bold().blue());
    for value in values {
        println!("  {} {}", "•".green(), value);
    }
}

fn print_header(selection: &FilterSelection, result: &RenderResult) {
    println!("{}", "Movie Insight Dashboard".bold().blue());
    let genres = if selection.genres.is_empty() {
        "all".to_string()
    } else {
        selection.genres.iter().cloned().collect::<Vec<_>>().join(", ")
    };
    let tags = if selection.tags.is_empty() {
        "any".to_string()
    } else {
        selection.tags.iter().cloned().collect::<Vec<_>>().join(", ")
    };
    println!("{}Genres: {}", "• ".green(), genres);
    println!(
        "{}Rating: {:.1} - {:.1}",
        "• ".green(),
        selection.rating.low(),
        selection.rating.high()
    );
    println!("{}Tags: {}", "• ".green(), tags);
    println!(
        "{}Rows: {} of {}\n",
        "• ".cyan(),
        result.filtered_rows,
        result.total_rows
    );
}

fn print_raw_rows(rows: &[&RatingRecord]) {
    println!("{}", "Raw data".bold().blue());
    println!("  userId  movieId  rating  genres / tag / title");
    for record in rows {
        println!(
            "  {:>6}  {:>7}  {:>6.1}  {} / {} / {}",
            record.user_id,
            record.movie_id,
            record.rating,
            record.genres,
            record.tag.as_deref().unwrap_or("-"),
            record.title.as_deref().unwrap_or("-"),
        );
    }
    println!();
}

fn print_dashboard(result: &RenderResult) {
    print_section("Most Rated Genres", &result.genre_frequency, print_genre_counts);
    print_section("Average Rating by Genre", &result.genre_ratings, print_genre_ratings);
    print_section("Distribution of Ratings", &result.rating_histogram, print_histogram);
    print_section("Words from Tags", &result.tag_cloud, print_tag_cloud);
    print_section(
        "Correlation Between Numeric Features",
        &result.correlation,
        print_correlation,
    );
    print_section(
        &format!("Top Rated Movies (at least {} ratings)", result.min_votes),
        &result.top_movies,
        print_top_movies,
    );
    println!(
        "{}",
        format!(
            "Summary of {} ratings matching the current filters.",
            result.filtered_rows
        )
        .dimmed()
    );
}

/// Print a section title, then either its body or why it is empty
fn print_section<T>(title: &str, section: &Section<T>, body: impl Fn(&T)) {
    println!("{}", title.bold().blue());
    match section {
        Section::Ready(value) => body(value),
        Section::Unavailable(reason) => println!("  {} {}", "No data:".yellow(), reason),
    }
    println!();
}

fn bar(value: f64, max: f64) -> String {
    let len = if max > 0.0 {
        ((value / max) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    "█".repeat(len)
}

fn print_genre_counts(counts: &Vec<GenreCount>) {
    let max = counts.first().map(|c| c.count).unwrap_or(0) as f64;
    for count in counts {
        println!(
            "  {:<20} {:>7}  {}",
            count.genre,
            count.count,
            bar(count.count as f64, max).green()
        );
    }
}

fn print_genre_ratings(ratings: &Vec<GenreRating>) {
    for rating in ratings {
        println!(
            "  {:<20} {:>5.2}  {}",
            rating.genre,
            rating.mean_rating,
            bar(rating.mean_rating, f64::from(MAX_RATING)).cyan()
        );
    }
}

fn print_histogram(histogram: &Histogram) {
    let max = histogram.buckets.iter().map(|b| b.count).max().unwrap_or(0) as f64;
    for bucket in &histogram.buckets {
        println!(
            "  {:>5.2} - {:<5.2} {:>7}  {}",
            bucket.start,
            bucket.end,
            bucket.count,
            bar(bucket.count as f64, max).magenta()
        );
    }
}

fn print_tag_cloud(cloud: &TagCloud) {
    let line = cloud
        .words
        .iter()
        .map(|w| format!("{} ({})", w.word, w.count))
        .collect::<Vec<_>>()
        .join(", ");
    println!("  {}", line);
}

fn print_correlation(matrix: &CorrelationMatrix) {
    print!("  {:<9}", "");
    for column in &matrix.columns {
        print!("{:>9}", column);
    }
    println!();
    for (column, row) in matrix.columns.iter().zip(&matrix.values) {
        print!("  {:<9}", column);
        for value in row {
            match value {
                Some(r) => print!("{:>9.2}", r),
                None => print!("{:>9}", "n/a"),
            }
        }
        println!();
    }
}

fn print_top_movies(movies: &Vec<TopMovie>) {
    if movies.is_empty() {
        println!("  {}", "No movie has enough ratings for this threshold.".yellow());
        return;
    }
    for (rank, movie) in movies.iter().enumerate() {
        println!(
            "  {}. {} - {:.2} ({} ratings)",
            (rank + 1).to_string().green(),
            movie.title,
            movie.avg_rating,
            movie.num_ratings
        );
    }
}
