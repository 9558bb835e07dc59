//! # Similarity Recommender
//!
//! Ranks the catalog's own recommendations for a reference movie by how
//! similar each candidate is to it:
//! 1. On construction, fetch reference details, credits and the first page
//!    of candidate recommendations
//! 2. Derive the reference `FeatureSet` once
//! 3. If the pool is no larger than `top_n`, return it as-is (unscored)
//! 4. Otherwise fetch each candidate's details and credits, score it, and
//!    skip candidates that cannot be fetched
//! 5. Sort by score (stable), keep the first `top_n`, round scores

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, instrument, warn};

use catalog::{
    CatalogConfig, CatalogService, MovieDetails, MovieId, MovieListing, poster_url,
};
use scoring::{FeatureSet, ScoreBreakdown, SimilarityScorer};

use crate::record::{
    ExplainedRecommendation, RecommendationRecord, RecommendationReport, ReferenceMovie,
    round_score,
};

/// Default number of recommendations
pub const DEFAULT_TOP_N: usize = 5;

/// Page of catalog recommendations used as the candidate pool
const CANDIDATE_PAGE: u32 = 1;

/// Everything needed to rank candidates; present only if all reference fetches succeeded
struct ReferenceData {
    features: FeatureSet,
    candidates: Vec<MovieListing>,
}

/// A candidate that was fetched and scored
struct ScoredCandidate {
    listing: MovieListing,
    details: MovieDetails,
    breakdown: ScoreBreakdown,
    score: f64,
}

/// Recommender bound to one reference movie
pub struct Recommender {
    catalog: Arc<dyn CatalogService>,
    scorer: SimilarityScorer,
    image_base_url: String,
    reference_id: MovieId,
    reference_details: Option<MovieDetails>,
    reference: Option<ReferenceData>,
}

impl Recommender {
    /// Fetch the reference movie and its candidate pool.
    ///
    /// Never fails: if any of the three fetches fails the recommender is
    /// left unusable and [`recommend`](Self::recommend) returns nothing.
    /// Reference details stay available whenever their own fetch succeeded.
    #[instrument(skip(catalog))]
    pub async fn new(catalog: Arc<dyn CatalogService>, reference_id: MovieId) -> Self {
        let mut recommender = Self {
            catalog,
            scorer: SimilarityScorer::new(),
            image_base_url: CatalogConfig::default().image_base_url,
            reference_id,
            reference_details: None,
            reference: None,
        };
        recommender.load_reference().await;
        recommender
    }

    /// Use a custom scorer (weights)
    pub fn with_scorer(mut self, scorer: SimilarityScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Base path prepended to poster paths in output records
    pub fn with_image_base_url(mut self, image_base_url: impl Into<String>) -> Self {
        self.image_base_url = image_base_url.into();
        self
    }

    async fn load_reference(&mut self) {
        let id = self.reference_id;

        let details = match self.catalog.movie_details(id).await {
            Ok(details) => details,
            Err(e) => {
                warn!(movie_id = id, error = %e, "Could not fetch reference movie details");
                return;
            }
        };
        self.reference_details = Some(details);

        let credits = match self.catalog.movie_credits(id).await {
            Ok(credits) => credits,
            Err(e) => {
                warn!(movie_id = id, error = %e, "Could not fetch reference movie credits");
                return;
            }
        };

        let page = match self.catalog.movie_recommendations(id, CANDIDATE_PAGE).await {
            Ok(page) => page,
            Err(e) => {
                warn!(
                    movie_id = id,
                    error = %e,
                    "Could not fetch recommendations for reference movie"
                );
                return;
            }
        };

        let Some(details) = &self.reference_details else {
            return;
        };
        let features = FeatureSet::from_movie(details, &credits);
        info!(
            movie_id = id,
            genres = features.genres.len(),
            directors = features.directors.len(),
            candidates = page.results.len(),
            "Loaded reference movie"
        );
        self.reference = Some(ReferenceData {
            features,
            candidates: page.results,
        });
    }

    pub fn reference_id(&self) -> MovieId {
        self.reference_id
    }

    /// Details of the reference movie, `None` only if they could not be fetched
    pub fn reference_details(&self) -> Option<&MovieDetails> {
        self.reference_details.as_ref()
    }

    /// True when details, credits and candidates were all fetched
    pub fn is_ready(&self) -> bool {
        self.reference.is_some()
    }

    /// Number of candidates offered by the catalog (0 when not ready)
    pub fn candidate_pool_len(&self) -> usize {
        self.reference
            .as_ref()
            .map(|reference| reference.candidates.len())
            .unwrap_or(0)
    }

    /// Up to `top_n` candidates, most similar first.
    ///
    /// Empty when the recommender is not ready.
    pub async fn recommend(&self, top_n: usize) -> Vec<RecommendationRecord> {
        self.recommend_explained(top_n)
            .await
            .into_iter()
            .map(|explained| explained.record)
            .collect()
    }

    /// Like [`recommend`](Self::recommend), keeping each score's breakdown
    #[instrument(skip(self), fields(reference_id = self.reference_id))]
    pub async fn recommend_explained(&self, top_n: usize) -> Vec<ExplainedRecommendation> {
        let Some(reference) = &self.reference else {
            warn!(
                reference_id = self.reference_id,
                "Insufficient data to generate recommendations"
            );
            return Vec::new();
        };

        // Nothing to rank: hand back the pool in the catalog's order.
        if reference.candidates.len() <= top_n {
            debug!(
                pool = reference.candidates.len(),
                top_n, "Candidate pool fits in top_n, skipping scoring"
            );
            let mut records = Vec::with_capacity(reference.candidates.len());
            for listing in &reference.candidates {
                let genres = self.genre_names(listing.id).await;
                records.push(ExplainedRecommendation {
                    record: self.format_record(listing, genres, None),
                    breakdown: None,
                });
            }
            return records;
        }

        let start = Instant::now();
        let scored = self.score_candidates(reference).await;
        let ranked = rank_and_select(scored, top_n);

        info!(
            pool = reference.candidates.len(),
            selected = ranked.len(),
            "Ranked candidates in {:.2?}",
            start.elapsed()
        );

        ranked
            .into_iter()
            .map(|candidate| ExplainedRecommendation {
                record: self.format_record(
                    &candidate.listing,
                    candidate.details.genre_names(),
                    Some(round_score(candidate.score)),
                ),
                breakdown: Some(candidate.breakdown),
            })
            .collect()
    }

    /// Recommendations wrapped with the reference stub.
    ///
    /// `None` without reference details; an empty list when the recommender is not ready.
    pub async fn report(&self, top_n: usize) -> Option<RecommendationReport> {
        let details = self.reference_details()?;
        Some(RecommendationReport {
            reference: ReferenceMovie::from_details(self.reference_id, details),
            recommendations: self.recommend(top_n).await,
        })
    }

    /// Fetch and score every candidate in pool order
    async fn score_candidates(&self, reference: &ReferenceData) -> Vec<ScoredCandidate> {
        let mut scored = Vec::with_capacity(reference.candidates.len());

        for listing in &reference.candidates {
            // Details and credits of one candidate are independent requests.
            let (details, credits) = tokio::join!(
                self.catalog.movie_details(listing.id),
                self.catalog.movie_credits(listing.id)
            );

            let (details, credits) = match (details, credits) {
                (Ok(details), Ok(credits)) => (details, credits),
                (Err(e), _) | (_, Err(e)) => {
                    warn!(movie_id = listing.id, error = %e, "Skipping candidate");
                    continue;
                }
            };

            let features = FeatureSet::from_movie(&details, &credits);
            let breakdown = self.scorer.breakdown(&reference.features, &features);
            let score = breakdown.total();
            debug!(movie_id = listing.id, score, "Scored candidate");

            scored.push(ScoredCandidate {
                listing: listing.clone(),
                details,
                breakdown,
                score,
            });
        }

        scored
    }

    /// Best-effort genre names for an unscored candidate
    async fn genre_names(&self, id: MovieId) -> Vec<String> {
        match self.catalog.movie_details(id).await {
            Ok(details) => details.genre_names(),
            Err(e) => {
                debug!(movie_id = id, error = %e, "No details for candidate, leaving genres empty");
                Vec::new()
            }
        }
    }

    fn format_record(
        &self,
        listing: &MovieListing,
        genres: Vec<String>,
        similarity_score: Option<f64>,
    ) -> RecommendationRecord {
        RecommendationRecord {
            id: listing.id,
            title: listing.title.clone(),
            original_title: listing.original_title.clone().unwrap_or_default(),
            year: listing.year_label(),
            genres,
            overview: listing.overview.clone().unwrap_or_default(),
            popularity: listing.popularity,
            vote_average: listing.vote_average,
            poster_url: poster_url(&self.image_base_url, listing.poster_path.as_deref()),
            similarity_score,
        }
    }
}

/// Sort by score DESC (stable on ties) and keep the first `top_n`
fn rank_and_select(mut scored: Vec<ScoredCandidate>, top_n: usize) -> Vec<ScoredCandidate> {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(top_n);
    scored
}
