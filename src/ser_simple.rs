//! SERSIMPLE: BM25-style saturation and length normalization over a base-2 idf.
//!
//! \( w = kf \cdot \frac{(K_1 + 1)\, tf \cdot \log_2(N/df)}{K_1 (1 - b + b \cdot dl/avgdl) + tf} \)
//!
//! `K1` and `b` are fixed at [`SerSimple::K1`] and [`SerSimple::B`]. The model exposes a `b`
//! parameter like the rest of the family, and it round-trips through
//! [`WeightingModel::set_parameter`], but the formula does **not** read it: scores are the
//! same for every parameter value. Sweeping this model's parameter is a no-op.
//!
//! Sign: non-negative for valid statistics and `kf >= 0`; zero when the term occurs in every
//! document (`df == N`).

use crate::idf;
use crate::model::{finite_score, WeightingModel, DEFAULT_B};
use crate::stats::TermStatistics;
use crate::{Error, Result};

/// SERSIMPLE weighting model.
#[derive(Debug, Clone, PartialEq)]
pub struct SerSimple {
    stats: TermStatistics,
    b: f64,
}

impl Default for SerSimple {
    fn default() -> Self {
        Self::new(DEFAULT_B)
    }
}

impl SerSimple {
    /// Model name reported by [`WeightingModel::info`].
    pub const NAME: &'static str = "SERSIMPLE";

    /// Term-frequency saturation used by the formula.
    pub const K1: f64 = 2.0;

    /// Length normalization used by the formula, regardless of [`parameter`](WeightingModel::parameter).
    pub const B: f64 = 0.75;

    /// Create a model with parameter `b` and empty statistics.
    pub fn new(b: f64) -> Self {
        Self {
            stats: TermStatistics::default(),
            b,
        }
    }

    /// Attach statistics for the query term about to be scored.
    pub fn with_statistics(mut self, stats: TermStatistics) -> Self {
        self.stats = stats;
        self
    }
}

impl WeightingModel for SerSimple {
    fn info(&self) -> &'static str {
        Self::NAME
    }

    fn statistics(&self) -> &TermStatistics {
        &self.stats
    }

    fn set_statistics(&mut self, stats: TermStatistics) {
        self.stats = stats;
    }

    fn score(&self, tf: f64, doc_len: f64) -> Result<f64> {
        self.stats.validate_with_length()?;
        if !tf.is_finite() || tf <= 0.0 {
            return Err(Error::InvalidInput("term frequency must be positive"));
        }
        if !doc_len.is_finite() || doc_len < 0.0 {
            return Err(Error::InvalidInput("document length must be non-negative"));
        }

        let idf = idf::log2(self.stats.doc_ratio())?;
        let ndl = doc_len / self.stats.average_document_length;
        let (k1, b) = (Self::K1, Self::B);
        // tf / denom <= 1, so wt is bounded by (K1 + 1) * idf even for huge tf.
        let denom = k1 * (1.0 - b + b * ndl) + tf;
        let wt = (k1 + 1.0) * idf * (tf / denom);
        finite_score(self.stats.key_frequency * wt)
    }

    fn parameter(&self) -> f64 {
        self.b
    }

    fn set_parameter(&mut self, value: f64) {
        log::debug!(
            "{}: b={value} is stored but the formula uses b={}",
            Self::NAME,
            Self::B
        );
        self.b = value;
    }

    fn clone_box(&self) -> Box<dyn WeightingModel> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> TermStatistics {
        TermStatistics::new(1000, 10)
            .with_average_document_length(100.0)
            .with_key_frequency(1.0)
    }

    fn model() -> SerSimple {
        SerSimple::default().with_statistics(stats())
    }

    #[test]
    fn reference_scenario() {
        // idf = log2(100), ndl = 1.5: 3 * 4 * idf / (2 * 1.375 + 4)
        let s = model().score(4.0, 150.0).unwrap();
        assert!((s - 11.8114).abs() < 1e-3, "got {s}");
    }

    #[test]
    fn parameter_round_trips_but_is_shadowed() {
        let mut m = model();
        let before = m.score(4.0, 150.0).unwrap();
        for b in [0.0, 0.3, 1.0, 42.0] {
            m.set_parameter(b);
            assert_eq!(m.parameter(), b);
            assert_eq!(m.score(4.0, 150.0).unwrap(), before);
        }
        let constructed = SerSimple::new(0.1).with_statistics(stats());
        assert_eq!(constructed.score(4.0, 150.0).unwrap(), before);
    }

    #[test]
    fn longer_documents_score_lower() {
        let m = model();
        let short = m.score(3.0, 50.0).unwrap();
        let avg = m.score(3.0, 100.0).unwrap();
        let long = m.score(3.0, 400.0).unwrap();
        assert!(short > avg && avg > long);
    }

    #[test]
    fn saturates_towards_k1_plus_one_times_idf() {
        let m = model();
        let idf = idf::log2(100.0).unwrap();
        let big = m.score(1e9, 100.0).unwrap();
        assert!(big < (SerSimple::K1 + 1.0) * idf);
        assert!((big - (SerSimple::K1 + 1.0) * idf).abs() < 1e-6);
    }

    #[test]
    fn term_in_every_document_scores_zero() {
        let m = SerSimple::default()
            .with_statistics(TermStatistics::new(20, 20).with_average_document_length(10.0));
        assert_eq!(m.score(5.0, 10.0).unwrap(), 0.0);
    }

    #[test]
    fn empty_document_is_allowed() {
        assert!(model().score(1.0, 0.0).unwrap() > 0.0);
    }

    #[test]
    fn invalid_inputs_fail() {
        let m = model();
        assert!(matches!(m.score(0.0, 10.0), Err(Error::InvalidInput(_))));
        assert!(matches!(m.score(2.0, -1.0), Err(Error::InvalidInput(_))));
        assert!(matches!(m.score(2.0, f64::INFINITY), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn zero_average_length_fails() {
        let m = SerSimple::default().with_statistics(TermStatistics::new(1000, 10));
        assert!(matches!(m.score(4.0, 150.0), Err(Error::InvalidStatistics(_))));
    }

    #[test]
    fn zero_documents_fails() {
        let m = SerSimple::default()
            .with_statistics(TermStatistics::new(0, 0).with_average_document_length(1.0));
        assert!(matches!(m.score(4.0, 150.0), Err(Error::InvalidStatistics(_))));
    }

    #[test]
    fn huge_tf_is_bounded_by_saturation() {
        let s = model().score(1e308, 150.0).unwrap();
        let bound = (SerSimple::K1 + 1.0) * idf::log2(100.0).unwrap();
        assert!(s.is_finite());
        assert!(s <= bound && (bound - s).abs() < 1e-9);
    }

    #[test]
    fn overflowing_key_frequency_fails() {
        let m = SerSimple::default().with_statistics(stats().with_key_frequency(f64::MAX));
        assert!(matches!(m.score(4.0, 150.0), Err(Error::NonFiniteScore(_))));
    }

    #[test]
    fn info_is_stable() {
        assert_eq!(model().info(), "SERSIMPLE");
    }
}
