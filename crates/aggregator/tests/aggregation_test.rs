//! Integration tests for the aggregator.
//!
//! These run full aggregations against an in-memory catalog, including
//! movies that are missing details or credits.

use aggregator::Aggregator;
use catalog::{CastMember, Genre, InMemoryCatalog, MovieCredits, MovieDetails, MovieId};
use std::sync::Arc;

fn movie(
    id: MovieId,
    title: &str,
    date: &str,
    revenue: u64,
    genres: &[(u32, &str)],
) -> MovieDetails {
    MovieDetails {
        id,
        title: Some(title.to_string()),
        release_date: Some(date.to_string()),
        revenue,
        genres: genres
            .iter()
            .map(|(gid, name)| Genre {
                id: *gid,
                name: name.to_string(),
            })
            .collect(),
        ..MovieDetails::default()
    }
}

fn cast(id: MovieId, names: &[&str]) -> MovieCredits {
    MovieCredits {
        id,
        cast: names
            .iter()
            .enumerate()
            .map(|(i, name)| CastMember {
                id: 1000 + i as u64,
                name: name.to_string(),
                character: None,
            })
            .collect(),
        crew: vec![],
    }
}

fn create_test_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new()
        .with_movie(
            movie(1, "Big Hit", "2010-05-01", 100_000_000, &[(28, "Action"), (12, "Adventure")]),
            cast(1, &["X", "Y", "Z"]),
        )
        .with_movie(
            movie(2, "Indie", "2012-01-20", 0, &[(18, "Drama")]),
            cast(2, &["X", "W"]),
        )
        .with_movie(
            movie(3, "Sequel", "2014-06-11", 250_000_000, &[(28, "Action")]),
            cast(3, &["Y", "V"]),
        )
        // Details only: credits are unavailable
        .with_details(movie(4, "No Credits", "2001-01-01", 999, &[(35, "Comedy")]))
}

#[tokio::test]
async fn test_every_movie_is_summarized() {
    let aggregator = Aggregator::new(Arc::new(create_test_catalog()));
    let report = aggregator.aggregate(&[1, 2, 3]).await;

    assert_eq!(report.analyzed_movies.len(), 3);
    let ids: Vec<MovieId> = report.analyzed_movies.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(report.analyzed_movies[1].year, "2012");
}

#[tokio::test]
async fn test_repeated_ids_are_not_deduplicated() {
    let aggregator = Aggregator::new(Arc::new(create_test_catalog()));
    let report = aggregator.aggregate(&[2, 2]).await;

    assert_eq!(report.analyzed_movies.len(), 2);
    assert_eq!(report.actor_participation.get("X"), Some(2));
    assert_eq!(report.genre_frequency.get("Drama"), Some(2));
}

#[tokio::test]
async fn test_unavailable_movies_are_skipped_entirely() {
    let catalog = Arc::new(create_test_catalog());
    let aggregator = Aggregator::new(catalog.clone());

    // 4 has no credits, 404 does not exist at all
    let report = aggregator.aggregate(&[404, 1, 4]).await;

    assert_eq!(report.analyzed_movies.len(), 1);
    assert_eq!(report.analyzed_movies[0].id, 1);
    // Nothing from movie 4 leaked into the genre counts
    assert_eq!(report.genre_frequency.get("Comedy"), None);

    // Credits are not requested when details already failed
    let counts = catalog.request_counts();
    assert_eq!(counts.details, 3);
    assert_eq!(counts.credits, 2);
}

#[tokio::test]
async fn test_rankings() {
    let aggregator = Aggregator::new(Arc::new(create_test_catalog()));
    let report = aggregator.aggregate(&[1, 2, 3]).await;

    // Participation: X=2, Y=2 (X seen first), then Z, W, V with 1
    let participation: Vec<(&str, u64)> = report.actor_participation.iter().collect();
    assert_eq!(
        participation,
        vec![("X", 2), ("Y", 2), ("Z", 1), ("W", 1), ("V", 1)]
    );

    let genres: Vec<(&str, u64)> = report.genre_frequency.iter().collect();
    assert_eq!(genres, vec![("Action", 2), ("Adventure", 1), ("Drama", 1)]);

    // Revenue: Y=350M, V=250M, X=100M, Z=100M, W=0
    let revenue: Vec<(&str, u64)> = report
        .top_actors_by_revenue
        .iter()
        .map(|a| (a.actor.as_str(), a.total_revenue))
        .collect();
    assert_eq!(
        revenue,
        vec![
            ("Y", 350_000_000),
            ("V", 250_000_000),
            ("X", 100_000_000),
            ("Z", 100_000_000),
            ("W", 0),
        ]
    );
}

#[tokio::test]
async fn test_empty_input_gives_empty_report() {
    let aggregator = Aggregator::new(Arc::new(create_test_catalog()));
    let report = aggregator.aggregate(&[]).await;

    assert!(report.analyzed_movies.is_empty());
    assert!(report.actor_participation.is_empty());
    assert!(report.top_actors_by_revenue.is_empty());
}

#[tokio::test]
async fn test_report_serializes_as_one_document() {
    let aggregator = Aggregator::new(Arc::new(create_test_catalog()));
    let report = aggregator.aggregate(&[1, 2]).await;

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["analyzed_movies"][0]["title"], "Big Hit");
    assert_eq!(json["actor_participation"]["X"], 2);
    assert_eq!(json["top_actors_by_revenue"][0]["actor"], "X");
}
