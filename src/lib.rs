//! `termweight`: per-term weighting models for lexical retrieval.
//!
//! A weighting model turns a term's occurrence in one document into a score contribution,
//! given the statistics of the collection, the term, and the query. The ranking driver
//! configures a model once per query term and then calls [`WeightingModel::score`] for every
//! candidate document in that term's postings.
//!
//! Scope:
//! - Base-2 logarithm helper ([`idf`])
//! - Per-term statistical context ([`stats`])
//! - The [`WeightingModel`] trait and its variants ([`dhgb2`], [`ser_simple`])
//! - A name-based factory for drivers ([`registry`])
//!
//! Non-goals:
//! - Index structures and statistics bookkeeping
//! - Aggregating term scores into document scores / top-k selection
//! - Query parsing or expansion
//!
//! ```
//! use termweight::{Dhgb2, TermStatistics, WeightingModel};
//!
//! let stats = TermStatistics::new(1000, 10).with_key_frequency(1.0);
//! let model = Dhgb2::default().with_statistics(stats);
//! let score = model.score(4.0, 150.0).unwrap();
//! assert!((score - 13.316).abs() < 1e-3);
//! ```

pub mod dhgb2;
pub mod idf;
pub mod model;
pub mod registry;
pub mod ser_simple;
pub mod stats;

pub use dhgb2::Dhgb2;
pub use error::{Error, Result};
pub use model::{WeightingModel, DEFAULT_B};
pub use registry::{ModelConfig, ModelKind};
pub use ser_simple::SerSimple;
pub use stats::TermStatistics;

mod error {
    /// Errors for term weighting.
    #[derive(thiserror::Error, Debug, Clone, PartialEq)]
    pub enum Error {
        /// A collection, term, or query statistic cannot be scored against.
        #[error("invalid statistics: {0}")]
        InvalidStatistics(&'static str),
        /// A per-call input (term frequency, document length, log argument) is out of domain.
        #[error("invalid input: {0}")]
        InvalidInput(&'static str),
        /// Valid inputs combined into a score that does not fit in an `f64`.
        #[error("score overflowed: {0}")]
        NonFiniteScore(&'static str),
        /// The registry does not know this model name.
        #[error("unknown weighting model: {0}")]
        UnknownModel(String),
        /// A model config string could not be parsed.
        #[error("invalid model config: {0}")]
        InvalidConfig(String),
    }

    /// Result alias for term weighting.
    pub type Result<T> = std::result::Result<T, Error>;
}
