//! Output records of the recommender.

use catalog::{MovieDetails, MovieId};
use scoring::ScoreBreakdown;
use serde::Serialize;

/// A recommended movie, ready for display or export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationRecord {
    pub id: MovieId,
    pub title: String,
    pub original_title: String,
    /// Leading four characters of the release date
    pub year: Option<String>,
    /// Genre names (not ids); empty if the candidate's details were unavailable
    pub genres: Vec<String>,
    pub overview: String,
    pub popularity: f64,
    pub vote_average: f64,
    pub poster_url: Option<String>,
    /// Present only when the candidate was actually scored; 2 decimal places
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_score: Option<f64>,
}

/// A record plus the per-term breakdown of its score (when scored)
#[derive(Debug, Clone, PartialEq)]
pub struct ExplainedRecommendation {
    pub record: RecommendationRecord,
    pub breakdown: Option<ScoreBreakdown>,
}

/// Stub of the reference movie for reports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceMovie {
    pub id: MovieId,
    pub title: Option<String>,
    pub year: Option<String>,
}

impl ReferenceMovie {
    pub fn from_details(id: MovieId, details: &MovieDetails) -> Self {
        Self {
            id,
            title: details.title.clone(),
            year: details.year_label(),
        }
    }
}

/// Reference stub plus its ordered recommendations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationReport {
    pub reference: ReferenceMovie,
    pub recommendations: Vec<RecommendationRecord>,
}

/// Round a score to two decimal places, ties to even
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round_ties_even() / 100.0
}
