//! Order-flow engine: trade and book imbalance smoothed into a confidence

use std::collections::VecDeque;

use log::{debug, warn};
use overshoot_core::stats::{self, Ema};
use overshoot_core::{OrderBook, Trade, TradeSide};
use overshoot_ports::OrderFlowPort;

use crate::book::DepthSummary;

/// Tracks aggressor flow and resting-book pressure for one instrument
///
/// Two independent imbalances are maintained, both in [-1, 1]:
/// - trade imbalance: smoothed buy vs sell aggressor volume
/// - book imbalance: smoothed bid vs ask depth over the top levels
///
/// [`OrderFlowEngine::confidence`] folds them into one conviction value.
/// When the two disagree they cancel out.
#[derive(Debug, Clone)]
pub struct OrderFlowEngine {
    alpha: f64,
    capacity: usize,
    /// Recent trades, oldest first
    trades: VecDeque<Trade>,
    buy_volume: Ema,
    sell_volume: Ema,
    book_imbalance: Ema,
    last_depth: Option<DepthSummary>,
    trades_processed: u64,
    books_processed: u64,
}

impl OrderFlowEngine {
    /// Create a new engine
    ///
    /// `capacity` bounds the retained trade history (minimum 1).
    pub fn new(alpha: f64, capacity: usize) -> Self {
        let sanitized = stats::sanitize_alpha(alpha);
        if sanitized != alpha {
            warn!("EMA alpha {} out of range, using {}", alpha, sanitized);
        }
        let capacity = capacity.max(1);
        Self {
            alpha: sanitized,
            capacity,
            trades: VecDeque::with_capacity(capacity.min(4096)),
            buy_volume: Ema::with_alpha(sanitized),
            sell_volume: Ema::with_alpha(sanitized),
            book_imbalance: Ema::with_alpha(sanitized),
            last_depth: None,
            trades_processed: 0,
            books_processed: 0,
        }
    }

    /// Process one executed trade
    pub fn on_trade(&mut self, trade: &Trade) {
        if !trade.volume.is_finite() || trade.volume <= 0.0 || !trade.price.is_finite() {
            warn!(
                "Dropping trade with invalid price/volume {}/{}",
                trade.price, trade.volume
            );
            return;
        }

        let (buy, sell) = match trade.side {
            TradeSide::Buy => (trade.volume, 0.0),
            TradeSide::Sell => (0.0, trade.volume),
        };
        self.buy_volume.update(buy);
        self.sell_volume.update(sell);

        if self.trades.len() >= self.capacity {
            self.trades.pop_front();
        }
        self.trades.push_back(*trade);
        self.trades_processed += 1;
    }

    /// Process one book snapshot over at most `depth` levels per side
    pub fn on_order_book(&mut self, book: &OrderBook, depth: usize) {
        let Some(summary) = DepthSummary::from_book(book, depth) else {
            debug!("Ignoring book at {} with no usable levels", book.timestamp);
            return;
        };

        if let Some(imbalance) = summary.imbalance() {
            self.book_imbalance.update(imbalance);
        }
        self.last_depth = Some(summary);
        self.books_processed += 1;
    }

    /// Smoothed aggressor imbalance, `None` before the first trade
    pub fn trade_imbalance(&self) -> Option<f64> {
        let buy = self.buy_volume.value()?;
        let sell = self.sell_volume.value()?;
        stats::imbalance(buy, sell)
    }

    /// Smoothed depth imbalance, `None` before the first usable book
    pub fn book_imbalance(&self) -> Option<f64> {
        self.book_imbalance.value()
    }

    /// Directional conviction of recent flow in [0, 1]
    ///
    /// - no data: 0
    /// - one signal: its magnitude
    /// - both signals: magnitude of their average
    pub fn confidence(&self) -> f64 {
        let conviction = match (self.trade_imbalance(), self.book_imbalance()) {
            (None, None) => 0.0,
            (Some(one), None) | (None, Some(one)) => one.abs(),
            (Some(trade), Some(book)) => ((trade + book) / 2.0).abs(),
        };
        conviction.clamp(0.0, 1.0)
    }

    /// Share of buy volume among the retained trades
    pub fn buy_ratio(&self) -> Option<f64> {
        let (buy, total) = self.trades.iter().fold((0.0, 0.0), |(b, t), trade| {
            let b = if trade.side == TradeSide::Buy {
                b + trade.volume
            } else {
                b
            };
            (b, t + trade.volume)
        });
        if total > 0.0 { Some(buy / total) } else { None }
    }

    /// Retained trades, oldest first
    pub fn recent_trades(&self) -> impl Iterator<Item = &Trade> {
        self.trades.iter()
    }

    /// Summary of the most recent usable book
    pub fn last_depth(&self) -> Option<&DepthSummary> {
        self.last_depth.as_ref()
    }

    /// Total trades accepted since creation or the last reset
    pub fn trade_count(&self) -> u64 {
        self.trades_processed
    }

    /// Total books accepted since creation or the last reset
    pub fn book_count(&self) -> u64 {
        self.books_processed
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all accumulated state
    pub fn reset(&mut self) {
        self.trades.clear();
        self.buy_volume.reset();
        self.sell_volume.reset();
        self.book_imbalance.reset();
        self.last_depth = None;
        self.trades_processed = 0;
        self.books_processed = 0;
    }
}

impl OrderFlowPort for OrderFlowEngine {
    fn update_trade(&mut self, trade: &Trade) {
        self.on_trade(trade);
    }

    fn update_order_book(&mut self, book: &OrderBook, depth: usize) {
        self.on_order_book(book, depth);
    }

    fn confidence(&self) -> f64 {
        OrderFlowEngine::confidence(self)
    }
}
