//! Weighted similarity between a reference movie and a candidate.
//!
//! ## Algorithm
//! The score is the sum of five independent terms:
//! 1. Genre overlap, normalized by the reference's genre count (up to `genre`)
//! 2. Shared directors, `director` points each, not normalized
//! 3. Lead cast overlap, normalized by the reference's lead cast count (up to `cast`)
//! 4. Popularity proximity, decaying by 1 point per `popularity_scale` difference
//! 5. Release-year proximity, decaying by 1 point per year; 0 if either year is unknown
//!
//! Normalization always uses the reference's counts, so the score is not
//! symmetric: `score(a, b)` and `score(b, a)` usually differ.

use crate::features::FeatureSet;

/// Weights of the five similarity terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Points when every reference genre is matched
    pub genre: f64,
    /// Points per shared director
    pub director: f64,
    /// Points when every reference lead actor is matched
    pub cast: f64,
    /// Points for identical popularity
    pub popularity: f64,
    /// Popularity difference that costs one point
    pub popularity_scale: f64,
    /// Points for the same release year
    pub year: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            genre: 40.0,
            director: 20.0,
            cast: 20.0,
            popularity: 10.0,
            popularity_scale: 10.0,
            year: 10.0,
        }
    }
}

/// The five terms of a similarity score, kept apart for explanations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub genre: f64,
    pub director: f64,
    pub cast: f64,
    pub popularity: f64,
    pub year: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.genre + self.director + self.cast + self.popularity + self.year
    }
}

/// Scores candidates against a reference movie.
///
/// Pure: no state besides the weights, no I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityScorer {
    weights: ScoreWeights,
}

impl SimilarityScorer {
    /// Scorer with the default weights (40/20/20/10/10)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Total similarity of `candidate` to `reference`
    pub fn score(&self, reference: &FeatureSet, candidate: &FeatureSet) -> f64 {
        self.breakdown(reference, candidate).total()
    }

    /// Per-term similarity of `candidate` to `reference`
    pub fn breakdown(&self, reference: &FeatureSet, candidate: &FeatureSet) -> ScoreBreakdown {
        let w = &self.weights;

        let shared_genres = reference.genres.intersection(&candidate.genres).count() as f64;
        let genre = shared_genres * (w.genre / reference.genres.len().max(1) as f64);

        // Not normalized: two shared directors score twice the weight.
        let shared_directors = reference
            .directors
            .intersection(&candidate.directors)
            .count() as f64;
        let director = shared_directors * w.director;

        let shared_cast = reference.top_cast.intersection(&candidate.top_cast).count() as f64;
        let cast = shared_cast * (w.cast / reference.top_cast.len().max(1) as f64);

        let popularity_gap = (reference.popularity - candidate.popularity).abs();
        let popularity = (w.popularity - popularity_gap / w.popularity_scale).max(0.0);

        let year = match (reference.year, candidate.year) {
            (Some(ry), Some(cy)) => (w.year - (ry - cy).abs() as f64).max(0.0),
            _ => 0.0,
        };

        ScoreBreakdown {
            genre,
            director,
            cast,
            popularity,
            year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(
        genres: &[u32],
        directors: &[u64],
        cast: &[u64],
        popularity: f64,
        year: Option<i32>,
    ) -> FeatureSet {
        FeatureSet {
            movie_id: 0,
            title: String::new(),
            genres: genres.iter().copied().collect(),
            directors: directors.iter().copied().collect(),
            top_cast: cast.iter().copied().collect(),
            popularity,
            year,
        }
    }

    #[test]
    fn test_reference_example() {
        // genres {Action, Sci-Fi}, director D1, cast A1..A5, popularity 50, 1999
        let reference = features(&[28, 878], &[100], &[1, 2, 3, 4, 5], 50.0, Some(1999));
        // shares Action and A1, no director, popularity 55, 2000
        let candidate = features(&[28], &[], &[1], 55.0, Some(2000));

        let scorer = SimilarityScorer::new();
        let breakdown = scorer.breakdown(&reference, &candidate);

        assert_eq!(breakdown.genre, 20.0);
        assert_eq!(breakdown.director, 0.0);
        assert_eq!(breakdown.cast, 4.0);
        assert_eq!(breakdown.popularity, 9.5);
        assert_eq!(breakdown.year, 9.0);
        assert_eq!(scorer.score(&reference, &candidate), 42.5);
    }

    #[test]
    fn test_score_is_asymmetric() {
        let one_genre = features(&[28], &[], &[], 10.0, None);
        let five_genres = features(&[28, 12, 16, 35, 80], &[], &[], 10.0, None);

        let scorer = SimilarityScorer::new();
        let forward = scorer.score(&one_genre, &five_genres);
        let backward = scorer.score(&five_genres, &one_genre);

        // 1 shared genre: 40/1 vs 40/5
        assert_eq!(forward, 40.0 + 10.0);
        assert_eq!(backward, 8.0 + 10.0);
        assert_ne!(forward, backward);
    }

    #[test]
    fn test_year_term() {
        let scorer = SimilarityScorer::new();
        let reference = features(&[], &[], &[], 0.0, Some(2000));

        let same = features(&[], &[], &[], 0.0, Some(2000));
        assert_eq!(scorer.breakdown(&reference, &same).year, 10.0);

        let far = features(&[], &[], &[], 0.0, Some(1970));
        assert_eq!(scorer.breakdown(&reference, &far).year, 0.0);

        let unknown = features(&[], &[], &[], 0.0, None);
        assert_eq!(scorer.breakdown(&reference, &unknown).year, 0.0);
        assert_eq!(scorer.breakdown(&unknown, &same).year, 0.0);
    }

    #[test]
    fn test_popularity_never_negative() {
        let scorer = SimilarityScorer::new();
        let reference = features(&[], &[], &[], 5.0, None);
        let candidate = features(&[], &[], &[], 900.0, None);
        assert_eq!(scorer.breakdown(&reference, &candidate).popularity, 0.0);
    }

    #[test]
    fn test_empty_reference_sets_do_not_divide_by_zero() {
        let scorer = SimilarityScorer::new();
        let reference = features(&[], &[], &[], 0.0, None);
        let candidate = features(&[28, 12], &[1], &[2, 3], 0.0, None);

        let breakdown = scorer.breakdown(&reference, &candidate);
        assert_eq!(breakdown.genre, 0.0);
        assert_eq!(breakdown.cast, 0.0);
        assert!(breakdown.total().is_finite());
    }

    #[test]
    fn test_multiple_shared_directors_exceed_weight() {
        let scorer = SimilarityScorer::new();
        let reference = features(&[], &[1, 2], &[], 0.0, None);
        let candidate = features(&[], &[1, 2], &[], 0.0, None);

        assert_eq!(scorer.breakdown(&reference, &candidate).director, 40.0);
    }

    #[test]
    fn test_custom_weights() {
        let scorer = SimilarityScorer::with_weights(ScoreWeights {
            genre: 10.0,
            popularity: 0.0,
            ..ScoreWeights::default()
        });
        let reference = features(&[1, 2], &[], &[], 0.0, None);
        let candidate = features(&[1, 2], &[], &[], 0.0, None);

        assert_eq!(scorer.score(&reference, &candidate), 10.0);
        assert_eq!(scorer.weights().director, 20.0);
    }
}
