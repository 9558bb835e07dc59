//! In-memory catalog backed by a fixture.
//!
//! Used to run the analyses offline (`--catalog-file`) and as the catalog
//! double in tests. Anything not present answers with
//! [`CatalogError::NotFound`], which callers treat like any other
//! unavailable movie.

use crate::error::{CatalogError, Result};
use crate::service::CatalogService;
use crate::types::{MovieCredits, MovieDetails, MovieId, MovieListing, MoviePage};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

/// One movie entry of a fixture file
#[derive(Debug, Deserialize)]
pub struct FixtureMovie {
    pub details: MovieDetails,
    #[serde(default)]
    pub credits: Option<MovieCredits>,
    #[serde(default)]
    pub recommendations: Option<Vec<MovieListing>>,
}

/// Layout of a fixture file: `{ "movies": [ { "details": .., "credits": .., "recommendations": [..] } ] }`
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    pub movies: Vec<FixtureMovie>,
}

/// How many times each operation was called
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestCounts {
    pub details: usize,
    pub credits: usize,
    pub recommendations: usize,
    pub searches: usize,
}

#[derive(Debug, Default)]
struct Counters {
    details: AtomicUsize,
    credits: AtomicUsize,
    recommendations: AtomicUsize,
    searches: AtomicUsize,
}

/// A [`CatalogService`] answering from in-memory maps
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    details: HashMap<MovieId, MovieDetails>,
    credits: HashMap<MovieId, MovieCredits>,
    recommendations: HashMap<MovieId, Vec<MovieListing>>,
    counters: Counters,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON fixture file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            movies = catalog.details.len(),
            "Loaded catalog fixture"
        );
        Ok(catalog)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let fixture: CatalogFixture = serde_json::from_str(contents)?;
        Ok(Self::from_fixture(fixture))
    }

    pub fn from_fixture(fixture: CatalogFixture) -> Self {
        let mut catalog = Self::new();
        for movie in fixture.movies {
            let id = movie.details.id;
            if let Some(credits) = movie.credits {
                catalog.credits.insert(id, credits);
            }
            if let Some(listings) = movie.recommendations {
                catalog.recommendations.insert(id, listings);
            }
            catalog.details.insert(id, movie.details);
        }
        catalog
    }

    /// Add (or replace) a movie's details
    pub fn with_details(mut self, details: MovieDetails) -> Self {
        self.details.insert(details.id, details);
        self
    }

    /// Add (or replace) a movie's credits
    pub fn with_credits(mut self, credits: MovieCredits) -> Self {
        self.credits.insert(credits.id, credits);
        self
    }

    /// Add details and credits for the same movie
    pub fn with_movie(self, details: MovieDetails, credits: MovieCredits) -> Self {
        self.with_details(details).with_credits(credits)
    }

    /// Set the recommendation listing returned for `id`
    pub fn with_recommendations(mut self, id: MovieId, listings: Vec<MovieListing>) -> Self {
        self.recommendations.insert(id, listings);
        self
    }

    /// Snapshot of how many calls each operation has received
    pub fn request_counts(&self) -> RequestCounts {
        RequestCounts {
            details: self.counters.details.load(Ordering::Relaxed),
            credits: self.counters.credits.load(Ordering::Relaxed),
            recommendations: self.counters.recommendations.load(Ordering::Relaxed),
            searches: self.counters.searches.load(Ordering::Relaxed),
        }
    }
}

#[async_trait]
impl CatalogService for InMemoryCatalog {
    async fn movie_details(&self, id: MovieId) -> Result<MovieDetails> {
        self.counters.details.fetch_add(1, Ordering::Relaxed);
        self.details
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound {
                resource: "details",
                id,
            })
    }

    async fn movie_credits(&self, id: MovieId) -> Result<MovieCredits> {
        self.counters.credits.fetch_add(1, Ordering::Relaxed);
        self.credits
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound {
                resource: "credits",
                id,
            })
    }

    async fn movie_recommendations(&self, id: MovieId, page: u32) -> Result<MoviePage> {
        self.counters.recommendations.fetch_add(1, Ordering::Relaxed);
        // Fixtures hold a single page.
        if page != 1 {
            return Ok(MoviePage {
                page,
                results: Vec::new(),
                total_pages: 1,
                total_results: 0,
            });
        }
        self.recommendations
            .get(&id)
            .cloned()
            .map(MoviePage::single)
            .ok_or(CatalogError::NotFound {
                resource: "recommendations",
                id,
            })
    }

    async fn search_movies(&self, query: &str) -> Result<MoviePage> {
        self.counters.searches.fetch_add(1, Ordering::Relaxed);
        let needle = query.to_lowercase();
        let mut matches: Vec<MovieListing> = self
            .details
            .values()
            .filter(|details| {
                details
                    .title
                    .as_deref()
                    .is_some_and(|title| title.to_lowercase().contains(&needle))
            })
            .map(listing_from_details)
            .collect();
        matches.sort_by_key(|listing| listing.id);
        Ok(MoviePage::single(matches))
    }
}

fn listing_from_details(details: &MovieDetails) -> MovieListing {
    MovieListing {
        id: details.id,
        title: details.title.clone().unwrap_or_default(),
        original_title: details.original_title.clone(),
        release_date: details.release_date.clone(),
        overview: details.overview.clone(),
        popularity: details.popularity,
        vote_average: details.vote_average,
        poster_path: details.poster_path.clone(),
        genre_ids: details.genres.iter().map(|g| g.id).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FIXTURE: &str = r#"{
        "movies": [
            {
                "details": {"id": 550, "title": "Fight Club", "release_date": "1999-10-15",
                            "revenue": 100853753, "popularity": 61.4,
                            "genres": [{"id": 18, "name": "Drama"}]},
                "credits": {"id": 550, "cast": [{"id": 287, "name": "Brad Pitt"}], "crew": []},
                "recommendations": [{"id": 807, "title": "Se7en"}]
            },
            {
                "details": {"id": 807, "title": "Se7en", "release_date": "1995-09-22"}
            }
        ]
    }"#;

    #[tokio::test]
    async fn test_fixture_lookup() {
        let catalog = InMemoryCatalog::from_json_str(FIXTURE).unwrap();

        let details = catalog.movie_details(550).await.unwrap();
        assert_eq!(details.revenue, 100_853_753);

        let page = catalog.movie_recommendations(550, 1).await.unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].title, "Se7en");

        // Se7en has details but no credits in the fixture.
        let missing = catalog.movie_credits(807).await.unwrap_err();
        assert!(missing.is_not_found());

        let counts = catalog.request_counts();
        assert_eq!(counts.details, 1);
        assert_eq!(counts.credits, 1);
        assert_eq!(counts.recommendations, 1);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let catalog = InMemoryCatalog::from_json_str(FIXTURE).unwrap();
        let page = catalog.search_movies("fight").await.unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].id, 550);
        assert_eq!(page.results[0].genre_ids, vec![18]);
        assert_eq!(catalog.request_counts().searches, 1);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();

        let catalog = InMemoryCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.details.len(), 2);
    }

    #[test]
    fn test_bad_fixture() {
        let result = InMemoryCatalog::from_json_str("{\"films\": []}");
        assert!(matches!(result, Err(CatalogError::Fixture(_))));
    }
}
