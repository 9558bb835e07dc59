//! Writing reports to disk.

use aggregator::{AggregationReport, RankedCounts};
use anyhow::{Context, Result};
use clap::ValueEnum;
use recommender::RecommendationReport;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const ANALYSIS_JSON: &str = "analysis.json";
pub const ACTOR_PARTICIPATION_CSV: &str = "actor_participation.csv";
pub const GENRE_FREQUENCY_CSV: &str = "genre_frequency.csv";
pub const TOP_ACTORS_CSV: &str = "top_actors_by_revenue.csv";
pub const RECOMMENDATIONS_JSON: &str = "recommendations.json";

/// File format for the aggregation report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One pretty-printed JSON document
    Json,
    /// One CSV table per ranking
    Csv,
}

#[derive(Serialize)]
struct ActorRow<'a> {
    actor: &'a str,
    movies: u64,
}

#[derive(Serialize)]
struct GenreRow<'a> {
    genre: &'a str,
    movies: u64,
}

/// Write the aggregation report into `dir`, returning the files written
pub fn export_analysis(
    report: &AggregationReport,
    dir: &Path,
    format: ExportFormat,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    match format {
        ExportFormat::Json => {
            let path = dir.join(ANALYSIS_JSON);
            write_json(&path, report)?;
            Ok(vec![path])
        }
        ExportFormat::Csv => {
            let participation = dir.join(ACTOR_PARTICIPATION_CSV);
            write_counts(&participation, &report.actor_participation, |actor, movies| {
                ActorRow { actor, movies }
            })?;

            let genres = dir.join(GENRE_FREQUENCY_CSV);
            write_counts(&genres, &report.genre_frequency, |genre, movies| GenreRow {
                genre,
                movies,
            })?;

            let top_actors = dir.join(TOP_ACTORS_CSV);
            write_csv(&top_actors, &report.top_actors_by_revenue)?;

            Ok(vec![participation, genres, top_actors])
        }
    }
}

/// Write the recommendation report as `recommendations.json` in `dir`
pub fn export_recommendations(report: &RecommendationReport, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(RECOMMENDATIONS_JSON);
    write_json(&path, report)?;
    Ok(path)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize report")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

fn write_counts<'a, R, F>(path: &Path, counts: &'a RankedCounts, row: F) -> Result<()>
where
    R: Serialize,
    F: Fn(&'a str, u64) -> R,
{
    let rows: Vec<R> = counts.iter().map(|(name, count)| row(name, count)).collect();
    write_csv(path, &rows)
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("Failed to write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))
}
