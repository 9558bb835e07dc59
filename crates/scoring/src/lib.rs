//! Similarity scoring between movies.
//!
//! This crate provides:
//! - FeatureSet, the comparable attributes of a movie
//! - SimilarityScorer and its ScoreWeights
//! - ScoreBreakdown for explaining a score term by term
//!
//! ## Example Usage
//! ```ignore
//! use scoring::{FeatureSet, SimilarityScorer};
//!
//! let reference = FeatureSet::from_movie(&details, &credits);
//! let candidate = FeatureSet::from_movie(&other_details, &other_credits);
//!
//! let score = SimilarityScorer::new().score(&reference, &candidate);
//! ```

pub mod features;
pub mod scorer;

// Re-export main types
pub use features::{FeatureSet, SCORING_CAST_LIMIT};
pub use scorer::{ScoreBreakdown, ScoreWeights, SimilarityScorer};
