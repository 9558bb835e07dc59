//! # Recommender Crate
//!
//! Re-ranks the catalog's recommendations for a reference movie by
//! similarity, using the scorer from the `scoring` crate.
//!
//! ## Example Usage
//!
//! ```ignore
//! use recommender::{Recommender, DEFAULT_TOP_N};
//!
//! let recommender = Recommender::new(catalog, 603).await;
//! for record in recommender.recommend(DEFAULT_TOP_N).await {
//!     println!("{} {:?}", record.title, record.similarity_score);
//! }
//! ```

pub mod record;
pub mod recommender;

pub use record::{
    ExplainedRecommendation, RecommendationRecord, RecommendationReport, ReferenceMovie,
    round_score,
};
pub use recommender::{DEFAULT_TOP_N, Recommender};
