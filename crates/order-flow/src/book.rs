//! Depth-bounded view of a book snapshot
//!
//! Snapshots arrive unsorted and possibly with junk levels. This module
//! cleans them, orders each side best-first and truncates to the requested
//! depth before any aggregate is taken.

use overshoot_core::stats;
use overshoot_core::{BookLevel, OrderBook, Timestamp};
use serde::{Deserialize, Serialize};

/// Aggregates over the top `depth` levels of each side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthSummary {
    pub timestamp: Timestamp,
    /// Best bid (price, size)
    pub best_bid: Option<(f64, f64)>,
    /// Best ask (price, size)
    pub best_ask: Option<(f64, f64)>,
    /// Total bid size over the considered levels
    pub bid_depth: f64,
    /// Total ask size over the considered levels
    pub ask_depth: f64,
    /// Levels considered per side after truncation
    pub depth: usize,
}

impl DepthSummary {
    /// Summarize a snapshot over at most `depth` levels per side.
    ///
    /// Returns `None` when no usable level remains on either side.
    pub fn from_book(book: &OrderBook, depth: usize) -> Option<Self> {
        let depth = depth.max(1);
        let bids = top_levels(&book.bids, depth, Ordering::Descending);
        let asks = top_levels(&book.asks, depth, Ordering::Ascending);

        if bids.is_empty() && asks.is_empty() {
            return None;
        }

        Some(Self {
            timestamp: book.timestamp,
            best_bid: bids.first().map(|l| (l.price, l.size)),
            best_ask: asks.first().map(|l| (l.price, l.size)),
            bid_depth: bids.iter().map(|l| l.size).sum(),
            ask_depth: asks.iter().map(|l| l.size).sum(),
            depth,
        })
    }

    /// Imbalance ratio: (bid_depth - ask_depth) / (bid_depth + ask_depth)
    /// Returns value between -1 (all asks) and +1 (all bids)
    pub fn imbalance(&self) -> Option<f64> {
        stats::imbalance(self.bid_depth, self.ask_depth)
    }

    /// Get mid price (average of best bid and ask)
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid, self.best_ask) {
            (Some((bid, _)), Some((ask, _))) => Some((bid + ask) / 2.0),
            _ => None,
        }
    }

    /// Get spread (ask - bid)
    pub fn spread(&self) -> Option<f64> {
        match (self.best_bid, self.best_ask) {
            (Some((bid, _)), Some((ask, _))) => Some(ask - bid),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
enum Ordering {
    Ascending,
    Descending,
}

fn top_levels(levels: &[BookLevel], depth: usize, ordering: Ordering) -> Vec<BookLevel> {
    let mut usable: Vec<BookLevel> = levels
        .iter()
        .filter(|l| l.price.is_finite() && l.size.is_finite() && l.size > 0.0)
        .copied()
        .collect();

    match ordering {
        Ordering::Ascending => usable.sort_by(|a, b| a.price.total_cmp(&b.price)),
        Ordering::Descending => usable.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
    usable.truncate(depth);
    usable
}
