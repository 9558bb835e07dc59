mod display;
mod export;

use aggregator::Aggregator;
use anyhow::{bail, Context, Result};
use catalog::{CatalogConfig, CatalogService, InMemoryCatalog, MovieId, TmdbClient};
use clap::{Parser, Subcommand};
use colored::Colorize;
use export::ExportFormat;
use recommender::{RecommendationReport, Recommender, ReferenceMovie, DEFAULT_TOP_N};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Movie Insights - catalog analytics and similarity recommendations
#[derive(Parser)]
#[command(name = "movie-insights")]
#[command(about = "Analyze movies from the TMDB catalog and recommend similar ones", long_about = None)]
struct Cli {
    /// Answer from a JSON fixture instead of the TMDB API
    #[arg(long, global = true)]
    catalog_file: Option<PathBuf>,

    /// Catalog language (overrides TMDB_LANGUAGE)
    #[arg(long, global = true)]
    language: Option<String>,

    /// Directory report files are written to
    #[arg(long, global = true, default_value = ".")]
    output_dir: PathBuf,

    /// Do not write report files
    #[arg(long, global = true)]
    no_export: bool,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Actor participation, genre frequency and box office leaders for a set of movies
    Analyze {
        /// Movie IDs; anything that is not a number is ignored
        #[arg(required = true)]
        ids: Vec<String>,

        /// Report file format
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,
    },

    /// Movies similar to a reference movie
    Recommend {
        /// Reference movie ID
        id: String,

        /// Number of recommendations to return
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        limit: usize,

        /// Show the score breakdown of each recommendation
        #[arg(long)]
        explain: bool,
    },

    /// Search for movies by title
    Search {
        /// Title to search for
        #[arg(long)]
        query: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .init();

    match &cli.command {
        Commands::Analyze { ids, format } => handle_analyze(&cli, ids, *format).await?,
        Commands::Recommend { id, limit, explain } => {
            handle_recommend(&cli, id, *limit, *explain).await?
        }
        Commands::Search { query } => handle_search(&cli, query).await?,
    }

    Ok(())
}

/// `--verbose` forces debug; otherwise `RUST_LOG`, defaulting to info
fn log_filter(verbose: bool) -> tracing_subscriber::EnvFilter {
    if verbose {
        return tracing_subscriber::EnvFilter::new("debug");
    }
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}

/// Catalog selected by the global flags, plus the configuration in effect
fn open_catalog(cli: &Cli) -> Result<(Arc<dyn CatalogService>, CatalogConfig)> {
    if let Some(path) = &cli.catalog_file {
        // Offline runs need no API key; fall back to defaults for the rest.
        let config = CatalogConfig::from_env().unwrap_or_else(|e| {
            debug!(error = %e, "Using default catalog configuration");
            CatalogConfig::default()
        });
        let catalog: Arc<dyn CatalogService> = Arc::new(
            InMemoryCatalog::from_json_file(path)
                .with_context(|| format!("Failed to load catalog fixture {}", path.display()))?,
        );
        return Ok((catalog, config));
    }

    let mut config = CatalogConfig::from_env().context("Failed to load catalog configuration")?;
    if let Some(language) = &cli.language {
        config = config.with_language(language.clone());
    }
    let client: Arc<dyn CatalogService> =
        Arc::new(TmdbClient::new(&config).context("Failed to create TMDB client")?);
    Ok((client, config))
}

/// Numeric arguments in order; everything else is dropped
fn parse_movie_ids(args: &[String]) -> Vec<MovieId> {
    args.iter()
        .filter(|arg| !arg.is_empty() && arg.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|arg| arg.parse().ok())
        .collect()
}

/// Handle the 'analyze' command
async fn handle_analyze(cli: &Cli, args: &[String], format: ExportFormat) -> Result<()> {
    let movie_ids = parse_movie_ids(args);
    if movie_ids.is_empty() {
        bail!("No valid movie ID provided (example: movie-insights analyze 550 299536 24428)");
    }

    let (catalog, _) = open_catalog(cli)?;

    println!("Analyzing {} movies...", movie_ids.len());
    let start = Instant::now();
    let report = Aggregator::new(catalog).aggregate(&movie_ids).await;
    println!(
        "{} Analyzed {} of {} movies in {:?}",
        "✓".green(),
        report.analyzed_movies.len(),
        movie_ids.len(),
        start.elapsed()
    );

    display::print_analysis(&report);

    if !cli.no_export {
        let written = export::export_analysis(&report, &cli.output_dir, format)?;
        println!();
        for path in written {
            println!("{} Saved {}", "✓".green(), path.display());
        }
    }

    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(cli: &Cli, arg: &str, limit: usize, explain: bool) -> Result<()> {
    let Some(movie_id) = parse_movie_ids(&[arg.to_string()]).first().copied() else {
        println!("Usage: movie-insights recommend <MOVIE_ID>");
        println!("Example: movie-insights recommend 550");
        return Ok(());
    };

    let (catalog, config) = open_catalog(cli)?;
    let recommender = Recommender::new(catalog, movie_id)
        .await
        .with_image_base_url(config.image_base_url.clone());

    let Some(reference) = recommender.reference_details() else {
        println!("{}", format!("Movie {} not found.", movie_id).red());
        return Ok(());
    };
    display::print_reference(reference);

    println!("\nGenerating recommendations...");
    let recommendations = recommender.recommend_explained(limit).await;
    display::print_recommendations(&recommendations, explain);

    if !cli.no_export && !recommendations.is_empty() {
        let report = RecommendationReport {
            reference: ReferenceMovie::from_details(movie_id, reference),
            recommendations: recommendations
                .into_iter()
                .map(|explained| explained.record)
                .collect(),
        };
        let path = export::export_recommendations(&report, &cli.output_dir)?;
        println!("\n{} Saved {}", "✓".green(), path.display());
    }

    Ok(())
}

/// Handle the 'search' command
async fn handle_search(cli: &Cli, query: &str) -> Result<()> {
    let (catalog, _) = open_catalog(cli)?;
    let page = catalog
        .search_movies(query)
        .await
        .with_context(|| format!("Search for '{}' failed", query))?;

    display::print_search_results(query, &page.results);
    Ok(())
}
