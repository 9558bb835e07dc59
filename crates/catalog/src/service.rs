//! The read-only seam between the analysis code and the movie catalog.

use crate::error::Result;
use crate::types::{MovieCredits, MovieDetails, MovieId, MoviePage};
use async_trait::async_trait;

/// Read operations the analyses need from a movie catalog.
///
/// Implementations report every failure as a [`CatalogError`](crate::CatalogError);
/// callers decide whether to skip the movie or give up.
///
/// `Send + Sync` lets one catalog be shared behind an `Arc` by the
/// aggregator and the recommender.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Details of a single movie
    async fn movie_details(&self, id: MovieId) -> Result<MovieDetails>;

    /// Cast and crew of a single movie
    async fn movie_credits(&self, id: MovieId) -> Result<MovieCredits>;

    /// One page of the catalog's own recommendations for a movie
    async fn movie_recommendations(&self, id: MovieId, page: u32) -> Result<MoviePage>;

    /// Title search (first page only)
    async fn search_movies(&self, query: &str) -> Result<MoviePage>;
}
