//! Statistical context for scoring one query term.
//!
//! The driver fills a [`TermStatistics`] once per query term (from its lexicon and collection
//! bookkeeping) and hands it to a model. Scoring never mutates it.

use crate::{Error, Result};

/// Collection, term, and query statistics for one query term.
///
/// Every field is independently writable. Nothing is checked on write; [`validate`] runs when
/// a model scores, so an inconsistent context surfaces at the `score` call that uses it.
///
/// [`validate`]: TermStatistics::validate
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TermStatistics {
    /// Number of documents in the collection (`N`).
    pub number_of_documents: u64,
    /// Number of documents containing the term (`df`).
    pub document_frequency: u64,
    /// Total occurrences of the term across the collection.
    ///
    /// Not read by the current models.
    pub term_frequency: u64,
    /// Mean document length over the collection.
    pub average_document_length: f64,
    /// Weight of the term in the query.
    pub key_frequency: f64,
}

impl Default for TermStatistics {
    fn default() -> Self {
        Self {
            number_of_documents: 0,
            document_frequency: 0,
            term_frequency: 0,
            average_document_length: 0.0,
            key_frequency: 1.0,
        }
    }
}

impl TermStatistics {
    /// Statistics for a term with `df` postings in a collection of `n_docs` documents.
    ///
    /// Key frequency defaults to 1; the remaining fields default to 0.
    pub fn new(n_docs: u64, df: u64) -> Self {
        Self {
            number_of_documents: n_docs,
            document_frequency: df,
            ..Self::default()
        }
    }

    /// Set the collection term frequency.
    pub fn with_term_frequency(mut self, term_frequency: u64) -> Self {
        self.term_frequency = term_frequency;
        self
    }

    /// Set the average document length.
    pub fn with_average_document_length(mut self, avg_doc_len: f64) -> Self {
        self.average_document_length = avg_doc_len;
        self
    }

    /// Set the query-side key frequency.
    pub fn with_key_frequency(mut self, key_frequency: f64) -> Self {
        self.key_frequency = key_frequency;
        self
    }

    /// Check the document counts and key frequency.
    ///
    /// Requires `number_of_documents >= document_frequency >= 1` and a finite key frequency.
    pub fn validate(&self) -> Result<()> {
        if self.number_of_documents == 0 {
            return Err(Error::InvalidStatistics("number of documents is zero"));
        }
        if self.document_frequency == 0 {
            return Err(Error::InvalidStatistics("document frequency is zero"));
        }
        if self.document_frequency > self.number_of_documents {
            return Err(Error::InvalidStatistics(
                "document frequency exceeds number of documents",
            ));
        }
        if !self.key_frequency.is_finite() {
            return Err(Error::InvalidStatistics("key frequency is not finite"));
        }
        Ok(())
    }

    /// [`validate`](Self::validate), plus a finite positive average document length.
    ///
    /// Only length-normalizing models call this.
    pub fn validate_with_length(&self) -> Result<()> {
        self.validate()?;
        if !self.average_document_length.is_finite() || self.average_document_length <= 0.0 {
            return Err(Error::InvalidStatistics(
                "average document length must be positive",
            ));
        }
        Ok(())
    }

    /// `N / df` as a real ratio.
    #[inline]
    pub(crate) fn doc_ratio(&self) -> f64 {
        self.number_of_documents as f64 / self.document_frequency as f64
    }
}
