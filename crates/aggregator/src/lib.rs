//! # Aggregator Crate
//!
//! Statistics over a batch of movies fetched from the catalog:
//! - how many of the movies each actor appears in (top 10 billed per movie)
//! - how often each genre occurs
//! - which five actors accumulate the most box office revenue
//!
//! ## Example Usage
//!
//! ```ignore
//! use aggregator::Aggregator;
//! use std::sync::Arc;
//!
//! let aggregator = Aggregator::new(Arc::new(client));
//! let report = aggregator.aggregate(&[550, 299536, 24428]).await;
//!
//! for (actor, films) in report.actor_participation.top(10) {
//!     println!("{}: {}", actor, films);
//! }
//! ```

pub mod aggregator;
pub mod report;
pub mod state;
pub mod tally;

// Re-export commonly used types
pub use aggregator::Aggregator;
pub use report::{ActorRevenue, AggregationReport, MovieSummary, RankedCounts, UNKNOWN};
pub use state::{AggregationState, AGGREGATION_CAST_LIMIT, TOP_REVENUE_LIMIT};
