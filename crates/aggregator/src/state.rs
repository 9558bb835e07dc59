//! Running totals of an aggregation.
//!
//! Movies are recorded one at a time; the report is produced once at the end.
//! This demonstrates the "accumulate then rank" pattern:
//! - counters grow with every movie (no sorting while accumulating)
//! - ranking and truncation happen only in `into_report`

use crate::report::{ActorRevenue, AggregationReport, MovieSummary, RankedCounts, UNKNOWN};
use crate::tally::Tally;
use catalog::{MovieCredits, MovieDetails, MovieId};

/// Billed cast members counted per movie
pub const AGGREGATION_CAST_LIMIT: usize = 10;

/// Length of the revenue leaderboard
pub const TOP_REVENUE_LIMIT: usize = 5;

/// Blank names from the catalog are tallied as `UNKNOWN`
fn name_or_unknown(name: &str) -> &str {
    if name.trim().is_empty() {
        UNKNOWN
    } else {
        name
    }
}

#[derive(Debug, Clone, Default)]
pub struct AggregationState {
    participation: Tally,
    revenue: Tally,
    genres: Tally,
    movies: Vec<MovieSummary>,
}

impl AggregationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one fully fetched movie into the totals.
    ///
    /// `id` is the identifier the caller asked for; it is what the summary reports.
    pub fn record(&mut self, id: MovieId, details: &MovieDetails, credits: &MovieCredits) {
        let revenue = details.revenue;

        self.movies.push(MovieSummary {
            id,
            title: details
                .title
                .as_deref()
                .map(name_or_unknown)
                .unwrap_or(UNKNOWN)
                .to_string(),
            year: details.year_label().unwrap_or_else(|| UNKNOWN.to_string()),
            revenue,
        });

        for genre in &details.genres {
            self.genres.add(name_or_unknown(&genre.name), 1);
        }

        for actor in credits.top_cast(AGGREGATION_CAST_LIMIT) {
            let name = name_or_unknown(&actor.name);
            self.participation.add(name, 1);
            // Zero-revenue movies still register the actor on the leaderboard.
            self.revenue.add(name, revenue);
        }
    }

    pub fn movies_recorded(&self) -> usize {
        self.movies.len()
    }

    /// Rank the totals and build the final report
    pub fn into_report(self) -> AggregationReport {
        let top_actors_by_revenue = self
            .revenue
            .into_ranked()
            .into_iter()
            .take(TOP_REVENUE_LIMIT)
            .map(|(actor, total_revenue)| ActorRevenue {
                actor,
                total_revenue,
            })
            .collect();

        AggregationReport {
            analyzed_movies: self.movies,
            actor_participation: RankedCounts::new(self.participation.into_ranked()),
            genre_frequency: RankedCounts::new(self.genres.into_ranked()),
            top_actors_by_revenue,
        }
    }
}
