//! Feature extraction for similarity scoring.
//!
//! A [`FeatureSet`] is the comparable slice of a movie: which genres it has,
//! who directed it, who leads the cast, how popular it is and when it came
//! out. It is derived once from details + credits and only read afterwards.

use catalog::{GenreId, MovieCredits, MovieDetails, MovieId, PersonId};
use std::collections::HashSet;

/// Number of billed cast members that count as "lead cast" for scoring
pub const SCORING_CAST_LIMIT: usize = 5;

/// Features of one movie used by the similarity scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSet {
    pub movie_id: MovieId,
    pub title: String,
    pub genres: HashSet<GenreId>,
    /// Crew members whose job is "Director"
    pub directors: HashSet<PersonId>,
    /// First `SCORING_CAST_LIMIT` billed cast members
    pub top_cast: HashSet<PersonId>,
    pub popularity: f64,
    /// `None` when the release date is missing or malformed
    pub year: Option<i32>,
}

impl FeatureSet {
    /// Derive the features of a movie from its details and credits.
    pub fn from_movie(details: &MovieDetails, credits: &MovieCredits) -> Self {
        Self {
            movie_id: details.id,
            title: details.title.clone().unwrap_or_default(),
            genres: details.genres.iter().map(|g| g.id).collect(),
            directors: credits.directors().map(|d| d.id).collect(),
            top_cast: credits
                .top_cast(SCORING_CAST_LIMIT)
                .iter()
                .map(|c| c.id)
                .collect(),
            popularity: details.popularity,
            year: details.release_year(),
        }
    }
}
