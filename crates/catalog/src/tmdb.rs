//! HTTP client for the TMDB REST API.
//!
//! Wraps a `reqwest::Client` and exposes the catalog operations as a
//! [`CatalogService`]. The client holds configuration only; every call is an
//! independent GET with the API key and language as query parameters.

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::service::CatalogService;
use crate::types::{MovieCredits, MovieDetails, MovieId, MoviePage};
use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

/// Catalog client backed by the TMDB v3 API
#[derive(Clone)]
pub struct TmdbClient {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
    language: String,
}

impl TmdbClient {
    /// Create a client from configuration.
    ///
    /// Fails when no API key is configured or the HTTP client cannot be built.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| CatalogError::Config("TMDB_API_KEY is not set".to_string()))?;

        let http_client = HttpClient::builder().timeout(config.timeout()).build()?;

        info!(
            base_url = %config.base_url,
            language = %config.language,
            timeout_secs = config.timeout_secs,
            "Created catalog client"
        );

        Ok(Self {
            http_client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            language: config.language.clone(),
        })
    }

    /// Language sent with every request
    pub fn language(&self) -> &str {
        &self.language
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the JSON body.
    ///
    /// `movie_id` is used to turn a 404 into [`CatalogError::NotFound`].
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        extra_params: &[(&str, String)],
        resource: &'static str,
        movie_id: Option<MovieId>,
    ) -> Result<T> {
        let url = self.endpoint_url(path);
        let mut params: Vec<(&str, String)> = vec![
            ("api_key", self.api_key.clone()),
            ("language", self.language.clone()),
        ];
        params.extend(extra_params.iter().cloned());

        debug!(%url, resource, "Requesting catalog resource");
        let response = self.http_client.get(&url).query(&params).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            if let Some(id) = movie_id {
                return Err(CatalogError::NotFound { resource, id });
            }
        }
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                resource: describe(resource, movie_id),
            });
        }

        let body = response.text().await?;
        decode(&body, resource, movie_id)
    }
}

fn describe(resource: &str, movie_id: Option<MovieId>) -> String {
    match movie_id {
        Some(id) => format!("{} for movie {}", resource, id),
        None => resource.to_string(),
    }
}

/// Decode a response body, reporting serde failures as [`CatalogError::Decode`].
fn decode<T: DeserializeOwned>(body: &str, resource: &str, movie_id: Option<MovieId>) -> Result<T> {
    serde_json::from_str(body).map_err(|e| CatalogError::Decode {
        resource: describe(resource, movie_id),
        reason: e.to_string(),
    })
}

#[async_trait]
impl CatalogService for TmdbClient {
    #[instrument(skip(self))]
    async fn movie_details(&self, id: MovieId) -> Result<MovieDetails> {
        self.get_json(&format!("/movie/{}", id), &[], "details", Some(id))
            .await
    }

    #[instrument(skip(self))]
    async fn movie_credits(&self, id: MovieId) -> Result<MovieCredits> {
        self.get_json(&format!("/movie/{}/credits", id), &[], "credits", Some(id))
            .await
    }

    #[instrument(skip(self))]
    async fn movie_recommendations(&self, id: MovieId, page: u32) -> Result<MoviePage> {
        self.get_json(
            &format!("/movie/{}/recommendations", id),
            &[("page", page.to_string())],
            "recommendations",
            Some(id),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn search_movies(&self, query: &str) -> Result<MoviePage> {
        self.get_json(
            "/search/movie",
            &[
                ("query", query.to_string()),
                ("include_adult", "false".to_string()),
            ],
            "search results",
            None,
        )
        .await
    }
}
