//! # Catalog Crate
//!
//! Everything the analyses know about the remote movie catalog.
//!
//! ## Main Components
//!
//! - **types**: Catalog payloads (MovieDetails, MovieCredits, MovieListing, MoviePage)
//! - **service**: The `CatalogService` trait the analyses depend on
//! - **tmdb**: HTTP implementation against the TMDB API
//! - **memory**: Fixture-backed implementation for offline runs and tests
//! - **config**: `CatalogConfig` loaded from `TMDB_*` environment variables
//! - **error**: `CatalogError` and the crate `Result` alias
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{CatalogConfig, CatalogService, TmdbClient};
//!
//! let config = CatalogConfig::from_env()?;
//! let client = TmdbClient::new(&config)?;
//!
//! let details = client.movie_details(550).await?;
//! println!("{} ({:?})", details.title.unwrap_or_default(), details.year_label());
//! ```

pub mod config;
pub mod error;
pub mod memory;
pub mod service;
pub mod tmdb;
pub mod types;

// Re-export commonly used types for convenience
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use memory::{InMemoryCatalog, RequestCounts};
pub use service::CatalogService;
pub use tmdb::TmdbClient;
pub use types::{
    // Type aliases
    GenreId,
    MovieId,
    PersonId,
    // Payloads
    CastMember,
    CrewMember,
    Genre,
    MovieCredits,
    MovieDetails,
    MovieListing,
    MoviePage,
    // Helpers
    leading_year,
    parse_year,
    poster_url,
};
