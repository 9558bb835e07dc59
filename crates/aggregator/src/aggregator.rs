//! Best-effort aggregation over a batch of movie ids.
//!
//! ## Algorithm
//! 1. For each id, in input order, fetch details then credits
//! 2. If either fetch fails, log and skip the id (nothing is recorded for it)
//! 3. Otherwise fold the movie into the running `AggregationState`
//! 4. Rank the totals into an `AggregationReport`
//!
//! One unavailable movie never aborts the batch, and there are no retries.

use crate::report::AggregationReport;
use crate::state::AggregationState;
use catalog::{CatalogService, MovieId};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Runs aggregations against a catalog
#[derive(Clone)]
pub struct Aggregator {
    catalog: Arc<dyn CatalogService>,
}

impl Aggregator {
    pub fn new(catalog: Arc<dyn CatalogService>) -> Self {
        Self { catalog }
    }

    /// Aggregate cast, genre and revenue statistics over `movie_ids`.
    ///
    /// Repeated ids are analyzed (and counted) once per occurrence.
    #[instrument(skip(self, movie_ids), fields(requested = movie_ids.len()))]
    pub async fn aggregate(&self, movie_ids: &[MovieId]) -> AggregationReport {
        let start = Instant::now();
        let mut state = AggregationState::new();

        for &movie_id in movie_ids {
            let details = match self.catalog.movie_details(movie_id).await {
                Ok(details) => details,
                Err(e) => {
                    warn!(movie_id, error = %e, "Could not fetch movie details, skipping");
                    continue;
                }
            };

            let credits = match self.catalog.movie_credits(movie_id).await {
                Ok(credits) => credits,
                Err(e) => {
                    warn!(movie_id, error = %e, "Could not fetch movie credits, skipping");
                    continue;
                }
            };

            debug!(
                movie_id,
                cast = credits.cast.len(),
                genres = details.genres.len(),
                "Recording movie"
            );
            state.record(movie_id, &details, &credits);
        }

        let analyzed = state.movies_recorded();
        let report = state.into_report();

        info!(
            analyzed,
            skipped = movie_ids.len() - analyzed,
            actors = report.actor_participation.len(),
            genres = report.genre_frequency.len(),
            "Aggregation finished in {:.2?}",
            start.elapsed()
        );

        report
    }
}
