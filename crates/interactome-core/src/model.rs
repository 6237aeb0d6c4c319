//! Core data model for interaction records.
//!
//! An [`Interaction`] is one row of the pairwise evidence table: two
//! endpoint labels and an optional confidence score. Labels are opaque,
//! case-sensitive strings; the pair is unordered — `(A, B)` and `(B, A)`
//! denote the same relationship, which is why equality and hashing go
//! through the canonical (sorted) form.

use serde::{Deserialize, Serialize};

/// One pairwise interaction record: two endpoints, optional evidence score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// First endpoint label as it appeared in the source table.
    pub a: String,
    /// Second endpoint label as it appeared in the source table.
    pub b: String,
    /// Evidence score, if the source table carries one.
    pub score: Option<f64>,
}

impl Interaction {
    /// Build an interaction from owned labels and an optional score.
    #[must_use]
    pub fn new(a: impl Into<String>, b: impl Into<String>, score: Option<f64>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            score,
        }
    }

    /// The unordered endpoint pair in canonical (lexicographic) order.
    ///
    /// `(A, B)` and `(B, A)` canonicalize to the same pair, so this is
    /// the identity used for deduplication and content hashing.
    #[must_use]
    pub fn canonical_pair(&self) -> (&str, &str) {
        if self.a.as_str() <= self.b.as_str() {
            (self.a.as_str(), self.b.as_str())
        } else {
            (self.b.as_str(), self.a.as_str())
        }
    }

    /// True if both endpoints are the same label.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }
}

/// Explicit column mapping handed to the pipeline by the loader.
///
/// Column identity is resolved *outside* the core (explicit flags or
/// header sniffing in the loader); the core only ever sees this already
/// resolved mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Header name of the first endpoint column.
    pub endpoint_a: String,
    /// Header name of the second endpoint column.
    pub endpoint_b: String,
    /// Header name of the score column, if one exists.
    pub score: Option<String>,
}

impl ColumnSchema {
    /// Schema for a table with no score column.
    #[must_use]
    pub fn unscored(endpoint_a: impl Into<String>, endpoint_b: impl Into<String>) -> Self {
        Self {
            endpoint_a: endpoint_a.into(),
            endpoint_b: endpoint_b.into(),
            score: None,
        }
    }

    /// Schema for a table with a score column.
    #[must_use]
    pub fn scored(
        endpoint_a: impl Into<String>,
        endpoint_b: impl Into<String>,
        score: impl Into<String>,
    ) -> Self {
        Self {
            endpoint_a: endpoint_a.into(),
            endpoint_b: endpoint_b.into(),
            score: Some(score.into()),
        }
    }
}

/// What to do with a malformed input row (missing endpoint, non-numeric
/// score). Applied uniformly to the whole input — never mixed per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordPolicy {
    /// Skip the row, count it, and report the count at the end.
    #[default]
    Skip,
    /// Abort on the first malformed row with its 1-based row number.
    Fail,
}
