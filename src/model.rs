//! The weighting-model capability shared by every scoring formula.
//!
//! A model owns a [`TermStatistics`] for the query term being evaluated plus its own tunable
//! parameter. Mutators take `&mut self` and scoring takes `&self`, so a configured model can
//! be shared across threads for the document loop but cannot be reconfigured while anyone is
//! scoring with it. Drivers that fan out across workers give each one a [`clone_box`] copy.
//!
//! [`clone_box`]: WeightingModel::clone_box

use crate::stats::TermStatistics;
use crate::{Error, Result};
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Default value for a model's `b` parameter.
pub const DEFAULT_B: f64 = 0.75;

/// A per-term scoring function over collection, term, and query statistics.
pub trait WeightingModel: fmt::Debug + Send + Sync {
    /// Stable model name, used to record which formula produced a ranking.
    fn info(&self) -> &'static str;

    /// Statistics currently used by [`score`](Self::score).
    fn statistics(&self) -> &TermStatistics;

    /// Replace the statistics for the next query term.
    fn set_statistics(&mut self, stats: TermStatistics);

    /// Score one document: `tf` occurrences of the term in a document of length `doc_len`.
    ///
    /// Fails with [`InvalidStatistics`](crate::Error::InvalidStatistics) if the held
    /// statistics cannot be scored against and with [`InvalidInput`](crate::Error::InvalidInput)
    /// if `tf` or `doc_len` is out of the formula's domain. A weight that overflows `f64` is
    /// [`NonFiniteScore`](crate::Error::NonFiniteScore), never `Ok(inf)`.
    fn score(&self, tf: f64, doc_len: f64) -> Result<f64>;

    /// Score with explicit term statistics.
    ///
    /// The statistics are taken as reals, like the rest of the scoring inputs, so drivers
    /// holding normalized or fractional counts can call through unchanged.
    ///
    /// `document_frequency`, `term_frequency` and `key_frequency` are **ignored**: the result is
    /// always identical to `self.score(tf, doc_len)` with the held statistics. Callers that want
    /// different statistics must go through [`set_statistics`](Self::set_statistics). The first
    /// call per model name logs a warning.
    fn score_with(
        &self,
        tf: f64,
        doc_len: f64,
        document_frequency: f64,
        term_frequency: f64,
        key_frequency: f64,
    ) -> Result<f64> {
        let _ = (document_frequency, term_frequency, key_frequency);
        warn_ignored_arguments(self.info());
        self.score(tf, doc_len)
    }

    /// Score a run of `(tf, doc_len)` postings, stopping at the first invalid one.
    fn score_many(&self, postings: &[(f64, f64)]) -> Result<Vec<f64>> {
        postings
            .iter()
            .map(|&(tf, doc_len)| self.score(tf, doc_len))
            .collect()
    }

    /// The model's primary tunable (`b` for both current models).
    fn parameter(&self) -> f64;

    /// Set the primary tunable.
    ///
    /// Round-trips through [`parameter`](Self::parameter) whether or not the formula reads it.
    fn set_parameter(&mut self, value: f64);

    /// Boxed copy of this model, statistics included.
    fn clone_box(&self) -> Box<dyn WeightingModel>;
}

impl Clone for Box<dyn WeightingModel> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Reject a score that overflowed to `inf` (or `NaN`) despite finite inputs.
pub(crate) fn finite_score(score: f64) -> Result<f64> {
    if score.is_finite() {
        Ok(score)
    } else {
        Err(Error::NonFiniteScore("key frequency times weight is not finite"))
    }
}

static WARNED_IGNORED_ARGS: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());

/// Log once per model name that the explicit-statistics overload ignored its arguments.
fn warn_ignored_arguments(model: &'static str) {
    let mut warned = WARNED_IGNORED_ARGS
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if warned.contains(&model) {
        return;
    }
    warned.push(model);
    log::warn!(
        "{model}: score_with ignores its document_frequency, term_frequency and key_frequency \
         arguments; the held TermStatistics are used instead"
    );
}
