//! Overfetch-then-filter ranking.
//!
//! Both indices answer "top k rows above a threshold" the same approximate way:
//! rank every row by score, look only at the first `overfetch_factor * k` rows,
//! and walk them in score order keeping those at or above the threshold until
//! `k` are kept. A qualifying row ranked outside the window is never seen.

use std::cmp::Ordering;

use rulemap_core::config::defaults::DEFAULT_OVERFETCH_FACTOR;

/// A row of a similarity matrix and its score against one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedRow {
    pub index: usize,
    pub score: f32,
}

/// Score descending, then row index ascending.
fn by_rank(a: &RankedRow, b: &RankedRow) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.index.cmp(&b.index))
}

#[derive(Debug, Clone, Copy)]
pub struct RankedFilter {
    overfetch_factor: usize,
}

impl Default for RankedFilter {
    fn default() -> Self {
        Self::new(DEFAULT_OVERFETCH_FACTOR)
    }
}

impl RankedFilter {
    /// A factor of 0 is treated as 1.
    pub fn new(overfetch_factor: usize) -> Self {
        Self {
            overfetch_factor: overfetch_factor.max(1),
        }
    }

    pub fn overfetch_factor(&self) -> usize {
        self.overfetch_factor
    }

    /// Rows examined when asking for `top_k`.
    pub fn window(&self, top_k: usize) -> usize {
        top_k.saturating_mul(self.overfetch_factor)
    }

    /// The `n` best rows, best first. Ties go to the lower row index.
    pub fn top_n(scores: &[f32], n: usize) -> Vec<RankedRow> {
        let mut rows: Vec<RankedRow> = scores
            .iter()
            .enumerate()
            .map(|(index, &score)| RankedRow { index, score })
            .collect();

        if n == 0 {
            return Vec::new();
        }
        if n < rows.len() {
            rows.select_nth_unstable_by(n - 1, by_rank);
            rows.truncate(n);
        }
        rows.sort_unstable_by(by_rank);
        rows
    }

    /// Best rows clearing `threshold`, at most `top_k`, from the overfetch window.
    pub fn select(&self, scores: &[f32], top_k: usize, threshold: f32) -> Vec<RankedRow> {
        self.select_with(scores, top_k, threshold, top_k, |_| true)
    }

    /// Like [`select`](Self::select), but keeps at most `limit` rows and only
    /// rows `accept` agrees to. `accept` is called in rank order and only for
    /// rows that already clear the threshold.
    pub fn select_with<F>(
        &self,
        scores: &[f32],
        top_k: usize,
        threshold: f32,
        limit: usize,
        mut accept: F,
    ) -> Vec<RankedRow>
    where
        F: FnMut(&RankedRow) -> bool,
    {
        let mut kept = Vec::new();
        if limit == 0 {
            return kept;
        }
        for row in Self::top_n(scores, self.window(top_k)) {
            if kept.len() >= limit {
                break;
            }
            if row.score >= threshold && accept(&row) {
                kept.push(row);
            }
        }
        kept
    }
}
