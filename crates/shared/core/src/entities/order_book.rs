use serde::{Deserialize, Serialize};

use super::level::{BookLevel, Level};
use super::side::BookSide;
use crate::values::Timestamp;

/// Full or partial book snapshot.
///
/// Levels keep the order they were received in; consumers that need sorted
/// sides sort them themselves.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderBook {
    pub timestamp: Timestamp,
    pub bids: Vec<BookLevel>,
    pub asks: Vec<BookLevel>,
}

impl OrderBook {
    pub fn new(timestamp: Timestamp, bids: Vec<BookLevel>, asks: Vec<BookLevel>) -> Self {
        Self {
            timestamp,
            bids,
            asks,
        }
    }

    /// Partition raw levels into bids and asks by their side tag
    pub fn from_levels<I, L>(timestamp: Timestamp, levels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Level,
    {
        let mut book = Self::new(timestamp, Vec::new(), Vec::new());
        for level in levels {
            let entry = BookLevel::from_level(&level);
            match level.side() {
                BookSide::Bid => book.bids.push(entry),
                BookSide::Ask => book.asks.push(entry),
            }
        }
        book
    }

    /// Check if both sides are empty
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Total number of levels across both sides
    pub fn level_count(&self) -> usize {
        self.bids.len() + self.asks.len()
    }
}
