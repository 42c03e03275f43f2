//! DHGB2: log-scaled term frequency times a smoothed base-2 idf.
//!
//! \( w = kf \cdot \log_2(tf) \cdot \log_2(N / df + 1) \)
//!
//! Document length does not enter the formula. The model still carries a `b` parameter so it
//! can be swept like the other models, but the value has no effect on scores.
//!
//! Sign: non-negative for `tf >= 1` (with `kf >= 0`); negative for fractional `0 < tf < 1`.

use crate::idf;
use crate::model::{finite_score, WeightingModel, DEFAULT_B};
use crate::stats::TermStatistics;
use crate::{Error, Result};

/// DHGB2 weighting model.
#[derive(Debug, Clone, PartialEq)]
pub struct Dhgb2 {
    stats: TermStatistics,
    b: f64,
}

impl Default for Dhgb2 {
    fn default() -> Self {
        Self::new(DEFAULT_B)
    }
}

impl Dhgb2 {
    /// Model name reported by [`WeightingModel::info`].
    pub const NAME: &'static str = "DHGB2";

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

impl WeightingModel for Dhgb2 {
    fn info(&self) -> &'static str {
        Self::NAME
    }

    fn statistics(&self) -> &TermStatistics {
        &self.stats
    }

    fn set_statistics(&mut self, stats: TermStatistics) {
        self.stats = stats;
    }

    fn score(&self, tf: f64, _doc_len: f64) -> Result<f64> {
        self.stats.validate()?;
        if !tf.is_finite() || tf <= 0.0 {
            return Err(Error::InvalidInput("term frequency must be positive"));
        }
        let tf_part = idf::log2(tf)?;
        let idf_part = idf::log2(self.stats.doc_ratio() + 1.0)?;
        finite_score(self.stats.key_frequency * tf_part * idf_part)
    }

    fn parameter(&self) -> f64 {
        self.b
    }

    fn set_parameter(&mut self, value: f64) {
        log::debug!("{}: b={value} is stored but not used by the formula", Self::NAME);
        self.b = value;
    }

    fn clone_box(&self) -> Box<dyn WeightingModel> {
        Box::new(self.clone())
    }
}
