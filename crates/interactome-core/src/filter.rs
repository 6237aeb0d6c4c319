//! Adaptive evidence-threshold filter.
//!
//! # Overview
//!
//! Interaction datasets vary wildly in evidence quality. Rather than
//! fixing one cutoff, the filter tries a descending list of candidate
//! thresholds (default `[700, 400, 0]`) and keeps the **strictest** one
//! that still leaves at least one interaction. The comparison is strict
//! (`score > t`): rows at exactly the threshold are excluded.
//!
//! Three outcomes are possible:
//!
//! - [`FilterOutcome::Filtered`]: a threshold was selected; the output
//!   is exactly the rows with `score > threshold`.
//! - [`FilterOutcome::Unscored`]: no row carries a score at all, so
//!   filtering is skipped and every row passes through unchanged.
//! - [`FilterOutcome::Empty`]: the input had no rows to begin with, or
//!   every candidate (including the lowest) left nothing. This is a
//!   valid terminal state, not an error — downstream stages render an
//!   explanatory empty-result report instead of empty tables.
//!
//! The filter is a pure function over `(rows, candidates)` so the
//! adaptive behavior is testable without the rest of the pipeline.

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::model::Interaction;

/// The default descending candidate thresholds.
pub const DEFAULT_THRESHOLDS: [f64; 3] = [700.0, 400.0, 0.0];

/// Result of adaptive threshold selection.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FilterOutcome {
    /// A threshold was selected and at least one row survived.
    Filtered {
        /// The candidate that was applied.
        threshold: f64,
        /// Rows with `score > threshold`, in input order.
        interactions: Vec<Interaction>,
    },
    /// No row carried a score; all rows pass through unfiltered.
    Unscored {
        /// All input rows, unchanged.
        interactions: Vec<Interaction>,
    },
    /// The input was empty, or every candidate threshold produced an
    /// empty set.
    Empty {
        /// The candidates that were tried, for the terminal report.
        thresholds_tried: Vec<f64>,
        /// How many rows the input had before filtering.
        input_rows: usize,
    },
}

impl FilterOutcome {
    /// The surviving interactions, or an empty slice for the terminal state.
    #[must_use]
    pub fn interactions(&self) -> &[Interaction] {
        match self {
            Self::Filtered { interactions, .. } | Self::Unscored { interactions } => interactions,
            Self::Empty { .. } => &[],
        }
    }

    /// The applied threshold, if one was selected.
    #[must_use]
    pub const fn threshold(&self) -> Option<f64> {
        match self {
            Self::Filtered { threshold, .. } => Some(*threshold),
            Self::Unscored { .. } | Self::Empty { .. } => None,
        }
    }

    /// True for the empty-after-filtering terminal state.
    #[must_use]
    pub const fn is_empty_terminal(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

/// Select the strictest usable threshold and apply it.
///
/// Candidates are tried in list order (strictest first); the first one
/// with at least one row satisfying `score > t` wins. Rows without a
/// score never satisfy any threshold. If *no* row in the input has a
/// score, filtering is skipped entirely and all rows pass through.
///
/// An input with zero rows goes straight to the terminal
/// [`FilterOutcome::Empty`] state so downstream stages render the
/// explanatory record rather than empty tables.
///
/// Re-applying the selected threshold to the filtered output is a no-op
/// (the filter is idempotent).
#[must_use]
#[instrument(skip(interactions, candidates), fields(rows = interactions.len()))]
pub fn select_threshold(interactions: Vec<Interaction>, candidates: &[f64]) -> FilterOutcome {
    let input_rows = interactions.len();

    if interactions.is_empty() {
        warn!("input has no rows; nothing to filter");
        return FilterOutcome::Empty {
            thresholds_tried: candidates.to_vec(),
            input_rows,
        };
    }

    if interactions.iter().all(|i| i.score.is_none()) {
        warn!("no score column values present; using all {input_rows} interactions");
        return FilterOutcome::Unscored { interactions };
    }

    for &t in candidates {
        let filtered: Vec<Interaction> = interactions
            .iter()
            .filter(|i| i.score.is_some_and(|s| s > t))
            .cloned()
            .collect();

        if !filtered.is_empty() {
            info!(
                threshold = t,
                kept = filtered.len(),
                from = input_rows,
                "selected evidence threshold"
            );
            return FilterOutcome::Filtered {
                threshold: t,
                interactions: filtered,
            };
        }
    }

    warn!("no interactions passed even the lowest threshold");
    FilterOutcome::Empty {
        thresholds_tried: candidates.to_vec(),
        input_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(pairs: &[(&str, &str, Option<f64>)]) -> Vec<Interaction> {
        pairs
            .iter()
            .map(|(a, b, s)| Interaction::new(*a, *b, *s))
            .collect()
    }

    #[test]
    fn strictest_nonempty_threshold_wins() {
        let input = rows(&[
            ("X", "Y", Some(800.0)),
            ("Y", "Z", Some(500.0)),
            ("X", "Z", Some(100.0)),
        ]);
        let outcome = select_threshold(input, &DEFAULT_THRESHOLDS);

        // 800 > 700, so the strictest candidate already yields output.
        assert_eq!(outcome.threshold(), Some(700.0));
        assert_eq!(outcome.interactions().len(), 1);
        assert_eq!(outcome.interactions()[0].a, "X");
    }

    #[test]
    fn falls_back_to_looser_threshold() {
        let input = rows(&[("X", "Y", Some(500.0)), ("Y", "Z", Some(450.0))]);
        let outcome = select_threshold(input, &DEFAULT_THRESHOLDS);

        assert_eq!(outcome.threshold(), Some(400.0));
        assert_eq!(outcome.interactions().len(), 2);
    }

    #[test]
    fn ties_at_threshold_are_excluded() {
        // Exactly 700 does not satisfy `> 700`; falls through to 400.
        let input = rows(&[("A", "B", Some(700.0))]);
        let outcome = select_threshold(input, &DEFAULT_THRESHOLDS);

        assert_eq!(outcome.threshold(), Some(400.0));
        assert_eq!(outcome.interactions().len(), 1);
    }

    #[test]
    fn unscored_input_passes_through() {
        let input = rows(&[("A", "B", None), ("B", "C", None)]);
        let outcome = select_threshold(input, &DEFAULT_THRESHOLDS);

        assert!(matches!(outcome, FilterOutcome::Unscored { .. }));
        assert_eq!(outcome.threshold(), None);
        assert_eq!(outcome.interactions().len(), 2);
    }

    #[test]
    fn all_below_lowest_is_terminal_not_error() {
        let input = rows(&[("A", "B", Some(0.0)), ("B", "C", Some(-5.0))]);
        let outcome = select_threshold(input, &DEFAULT_THRESHOLDS);

        assert!(outcome.is_empty_terminal());
        assert!(outcome.interactions().is_empty());
        match outcome {
            FilterOutcome::Empty {
                thresholds_tried,
                input_rows,
            } => {
                assert_eq!(thresholds_tried, DEFAULT_THRESHOLDS.to_vec());
                assert_eq!(input_rows, 2);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn rows_without_score_are_dropped_when_any_row_is_scored() {
        // Mixed input: the presence of one score activates filtering,
        // and unscored rows never satisfy a threshold.
        let input = rows(&[("A", "B", Some(800.0)), ("B", "C", None)]);
        let outcome = select_threshold(input, &DEFAULT_THRESHOLDS);

        assert_eq!(outcome.threshold(), Some(700.0));
        assert_eq!(outcome.interactions().len(), 1);
    }

    #[test]
    fn filtering_is_idempotent() {
        let input = rows(&[
            ("X", "Y", Some(800.0)),
            ("Y", "Z", Some(500.0)),
            ("X", "Z", Some(100.0)),
        ]);
        let first = select_threshold(input, &[400.0]);
        let threshold = first.threshold().expect("threshold selected");
        let survivors = first.interactions().to_vec();

        let second = select_threshold(survivors.clone(), &[threshold]);
        assert_eq!(second.threshold(), Some(threshold));
        assert_eq!(second.interactions().len(), survivors.len());
        for (x, y) in second.interactions().iter().zip(survivors.iter()) {
            assert_eq!(x.canonical_pair(), y.canonical_pair());
        }
    }

    #[test]
    fn empty_input_is_the_terminal_state() {
        // A header-only table, or one whose rows were all skipped as
        // malformed, must reach the explanatory record — not the
        // unscored pass-through, which `all()` on an empty iterator
        // would otherwise select.
        let outcome = select_threshold(Vec::new(), &DEFAULT_THRESHOLDS);
        assert!(outcome.is_empty_terminal());
        match outcome {
            FilterOutcome::Empty {
                thresholds_tried,
                input_rows,
            } => {
                assert_eq!(thresholds_tried, DEFAULT_THRESHOLDS.to_vec());
                assert_eq!(input_rows, 0);
            }
            _ => unreachable!(),
        }
    }
}
