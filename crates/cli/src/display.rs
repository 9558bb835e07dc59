//! Console rendering of reports.

use aggregator::AggregationReport;
use catalog::{MovieDetails, MovieListing};
use colored::Colorize;
use recommender::ExplainedRecommendation;
use scoring::ScoreBreakdown;

/// Actors listed in the participation section
pub const PARTICIPATION_DISPLAY_LIMIT: usize = 10;

/// Synopsis characters shown before truncating
pub const SYNOPSIS_DISPLAY_CHARS: usize = 150;

const BANNER_WIDTH: usize = 50;

fn print_banner(title: &str) {
    let rule = "=".repeat(BANNER_WIDTH);
    println!("\n{}", rule);
    println!("{}", format!("{:^width$}", title, width = BANNER_WIDTH).bold().blue());
    println!("{}", rule);
}

/// Revenue in millions of dollars with two decimals ("$100.85M")
pub fn format_revenue_millions(revenue: u64) -> String {
    format!("${:.2}M", revenue as f64 / 1_000_000.0)
}

/// First 150 characters followed by "..." when the synopsis is longer
pub fn truncate_synopsis(synopsis: &str) -> String {
    if synopsis.chars().count() > SYNOPSIS_DISPLAY_CHARS {
        let head: String = synopsis.chars().take(SYNOPSIS_DISPLAY_CHARS).collect();
        format!("{}...", head)
    } else {
        synopsis.to_string()
    }
}

pub fn print_analysis(report: &AggregationReport) {
    print_banner("MOVIE DATA ANALYSIS");

    println!("\n{}", "Analyzed movies:".bold());
    for movie in &report.analyzed_movies {
        println!("  - {} ({}) [ID: {}]", movie.title, movie.year, movie.id);
    }

    println!("\n{}", "Actor participation:".bold());
    for (actor, movies) in report.actor_participation.top(PARTICIPATION_DISPLAY_LIMIT) {
        println!("  - {}: {} movie(s)", actor, movies);
    }

    println!("\n{}", "Genre frequency:".bold());
    for (genre, movies) in report.genre_frequency.iter() {
        println!("  - {}: {} movie(s)", genre, movies);
    }

    println!("\n{}", "Top actors by box office:".bold());
    for (rank, entry) in report.top_actors_by_revenue.iter().enumerate() {
        println!(
            "  {}. {}: {}",
            (rank + 1).to_string().green(),
            entry.actor,
            format_revenue_millions(entry.total_revenue)
        );
    }
}

pub fn print_reference(details: &MovieDetails) {
    print_banner("MOVIE RECOMMENDATIONS");

    println!(
        "\nReference movie: {} ({})",
        details.title.as_deref().unwrap_or_default().bold(),
        details.year_label().unwrap_or_default()
    );
    println!("Genres: {}", details.genre_names().join(", "));
}

pub fn print_recommendations(recommendations: &[ExplainedRecommendation], explain: bool) {
    if recommendations.is_empty() {
        println!("\n{}", "Could not generate recommendations for this movie.".yellow());
        return;
    }

    println!("\n{}", "Recommended movies:".bold());
    for (rank, explained) in recommendations.iter().enumerate() {
        let movie = &explained.record;
        println!(
            "\n{}. {} ({})",
            (rank + 1).to_string().green(),
            movie.title.bold(),
            movie.year.as_deref().unwrap_or_default()
        );
        println!("   Genres: {}", movie.genres.join(", "));
        println!("   Rating: {}/10", movie.vote_average);
        if let Some(score) = movie.similarity_score {
            println!("   Similarity: {}/100", score.to_string().cyan());
        }
        println!("   Synopsis: {}", truncate_synopsis(&movie.overview));

        if explain {
            match &explained.breakdown {
                Some(breakdown) => print_breakdown(breakdown),
                None => println!(
                    "   {}",
                    "Not scored: the candidate pool fit in the limit".dimmed()
                ),
            }
        }
    }
}

fn print_breakdown(breakdown: &ScoreBreakdown) {
    println!(
        "   {} genre {:.2} | director {:.2} | cast {:.2} | popularity {:.2} | year {:.2}",
        "Breakdown:".dimmed(),
        breakdown.genre,
        breakdown.director,
        breakdown.cast,
        breakdown.popularity,
        breakdown.year
    );
}

pub fn print_search_results(query: &str, results: &[MovieListing]) {
    println!("{}", format!("Search results for '{}':", query).bold().blue());
    if results.is_empty() {
        println!("  No movies found");
        return;
    }
    for movie in results {
        println!(
            "  {}: {} ({})",
            movie.id.to_string().green(),
            movie.title,
            movie.year_label().unwrap_or_else(|| "?".to_string())
        );
    }
}
