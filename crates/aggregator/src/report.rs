//! The aggregation report handed to the output sinks.

use catalog::MovieId;
use serde::ser::{Serialize, Serializer};

/// Placeholder for a missing title or release year
pub const UNKNOWN: &str = "unknown";

/// One analyzed movie
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    /// Leading four characters of the release date, or "unknown"
    pub year: String,
    pub revenue: u64,
}

/// Name → count pairs, highest count first.
///
/// Serializes as a JSON object whose keys keep the ranked order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedCounts(Vec<(String, u64)>);

impl RankedCounts {
    pub fn new(entries: Vec<(String, u64)>) -> Self {
        Self(entries)
    }

    /// The first `n` entries (fewer if shorter)
    pub fn top(&self, n: usize) -> &[(String, u64)] {
        &self.0[..self.0.len().min(n)]
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(key, count)| (key.as_str(), *count))
    }
}

impl Serialize for RankedCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(key, count)| (key, count)))
    }
}

/// An actor and the summed revenue of the analyzed movies they appear in
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ActorRevenue {
    pub actor: String,
    pub total_revenue: u64,
}

/// Final result of an aggregation run
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct AggregationReport {
    /// Successfully analyzed movies, in input order
    pub analyzed_movies: Vec<MovieSummary>,
    /// Films per actor, most frequent first
    pub actor_participation: RankedCounts,
    /// Films per genre, most frequent first
    pub genre_frequency: RankedCounts,
    /// At most five actors by cumulative revenue, highest first
    pub top_actors_by_revenue: Vec<ActorRevenue>,
}
