//! Error types for the catalog crate.
//!
//! Every fetch against the catalog either yields a payload or one of these
//! errors. Callers treat all of them as "unavailable" and skip the affected
//! movie, but the variants are kept apart so logs say *why* a movie was skipped.

use crate::types::MovieId;
use thiserror::Error;

/// Errors that can occur while talking to the movie catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog has no such resource (HTTP 404 or missing fixture entry)
    #[error("{resource} not found for movie {id}")]
    NotFound { resource: &'static str, id: MovieId },

    /// Transport-level failure (connect, timeout, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status other than 404
    #[error("Catalog service returned status {status} for {resource}")]
    Status { status: u16, resource: String },

    /// The payload could not be decoded into our types
    #[error("Failed to decode {resource}: {reason}")]
    Decode { resource: String, reason: String },

    /// Configuration is missing or invalid
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// I/O error while reading a fixture file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A fixture file is not valid JSON for the catalog layout
    #[error("Fixture parse error: {0}")]
    Fixture(#[from] serde_json::Error),
}

impl CatalogError {
    /// True when the catalog positively reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
