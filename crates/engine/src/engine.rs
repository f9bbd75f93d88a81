//! The overshoot engine: routes market events to its two collaborators and
//! fuses their readouts into one score.

use std::cell::Cell;

use log::{debug, info};
use overshoot_core::{Level, OrderBook, Span, Timestamp, Trade, TradeSide, WindowPoint};
use overshoot_flow::OrderFlowEngine;
use overshoot_ports::{OrderFlowPort, SlidingWindowPort};
use overshoot_window::SlidingWindow;

use crate::config::{
    ConfigError, DEFAULT_BOOK_DEPTH, DEFAULT_DIR_SCALE, DEFAULT_MOMENTUM_SCALE, OvershootConfig,
};
use crate::failures::ScoreFailureCounts;

/// Microstructure overshoot engine for one instrument
///
/// Owns exactly one sliding window and one order-flow engine. Ticks go to
/// the window; trades and book snapshots go to the flow engine. The engine
/// keeps no history of its own.
///
/// All methods are synchronous. Ingestion takes `&mut self`, so only one
/// caller feeds an engine at a time. Readouts, `score` included, take
/// `&self`; failure counters sit in a [`Cell`], so the engine is `Send` but
/// not `Sync`. Wrap it yourself if it must be shared across threads.
#[derive(Debug, Clone)]
pub struct OvershootEngine<W = SlidingWindow, F = OrderFlowEngine> {
    window: W,
    flow: F,
    dir_scale: f64,
    momentum_scale: f64,
    book_depth: usize,
    failures: Cell<ScoreFailureCounts>,
}

impl OvershootEngine {
    /// Create an engine backed by the reference collaborators
    ///
    /// `ema_alpha` is shared by both collaborators. `window_capacity` bounds
    /// the window's ticks and the flow engine's trade history. Arguments are
    /// handed over as-is; each collaborator sanitizes its own inputs.
    pub fn new(ema_alpha: f64, window_duration: Span, window_capacity: usize) -> Self {
        Self::with_collaborators(
            SlidingWindow::new(window_duration, window_capacity, ema_alpha),
            OrderFlowEngine::new(ema_alpha, window_capacity),
        )
    }

    /// Create an engine from a validated configuration
    pub fn from_config(config: &OvershootConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            "Creating overshoot engine: alpha={} window={}ms capacity={} depth={}",
            config.ema_alpha, config.window_duration_ms, config.window_capacity, config.book_depth
        );

        let mut engine = Self::new(
            config.ema_alpha,
            config.window_duration(),
            config.window_capacity,
        )
        .with_book_depth(config.book_depth);
        engine.set_scale(config.dir_scale, config.momentum_scale);
        Ok(engine)
    }
}

impl<W, F> OvershootEngine<W, F>
where
    W: SlidingWindowPort,
    F: OrderFlowPort,
{
    /// Create an engine around caller-supplied collaborators
    pub fn with_collaborators(window: W, flow: F) -> Self {
        Self {
            window,
            flow,
            dir_scale: DEFAULT_DIR_SCALE,
            momentum_scale: DEFAULT_MOMENTUM_SCALE,
            book_depth: DEFAULT_BOOK_DEPTH,
            failures: Cell::new(ScoreFailureCounts::default()),
        }
    }

    /// Override the per-side depth requested on each book update
    pub fn with_book_depth(mut self, depth: usize) -> Self {
        self.book_depth = depth;
        self
    }

    /// Overwrite both scales
    ///
    /// Any value is accepted, including negatives to flip a sign convention.
    pub fn set_scale(&mut self, dir_scale: f64, momentum_scale: f64) -> &mut Self {
        self.dir_scale = dir_scale;
        self.momentum_scale = momentum_scale;
        self
    }

    // === Ingestion ===

    pub fn add_trade(&mut self, is_buy: bool, price: f64, volume: f64, timestamp: Timestamp) {
        let trade = Trade::new(timestamp, price, volume, TradeSide::from_is_buy(is_buy));
        self.flow.update_trade(&trade);
    }

    pub fn add_tick(&mut self, price: f64, volume: f64, timestamp: Timestamp) {
        self.window.add(WindowPoint::new(timestamp, price, volume));
    }

    /// Feed a book snapshot made of raw levels
    ///
    /// Levels tagged `"bids"` in any case become bids; every other tag,
    /// empty included, becomes an ask. The configured depth is requested no
    /// matter how many levels arrive.
    pub fn add_order_book<I, L>(&mut self, timestamp: Timestamp, levels: I)
    where
        I: IntoIterator<Item = L>,
        L: Level,
    {
        let book = OrderBook::from_levels(timestamp, levels);
        self.flow.update_order_book(&book, self.book_depth);
    }

    // === Readouts ===

    #[inline]
    pub fn momentum(&self) -> Option<f64> {
        self.window.momentum()
    }

    #[inline]
    pub fn total_vol(&self) -> f64 {
        self.window.total_volume()
    }

    /// Median price of the window
    #[inline]
    pub fn mid_price(&self) -> Option<f64> {
        self.window.median_price()
    }

    /// Fuse `current_momentum` with the current flow confidence
    ///
    /// Returns `None` when the window cannot score. The reason is logged and
    /// counted in [`score_failures`](Self::score_failures) but not returned.
    pub fn score(&self, current_momentum: f64) -> Option<f64> {
        let confidence = self.flow.confidence();
        match self.window.score_with_momentum(
            current_momentum,
            self.dir_scale,
            self.momentum_scale,
            confidence,
        ) {
            Ok(score) => Some(score),
            Err(e) => {
                let kind = e.kind();
                debug!("Score unavailable ({}): {}", kind.as_str(), e);
                let mut failures = self.failures.get();
                failures.record(kind);
                self.failures.set(failures);
                None
            }
        }
    }

    /// [`score`](Self::score) as a `(value, ok)` pair, `(0.0, false)` on failure
    pub fn score_or_zero(&self, current_momentum: f64) -> (f64, bool) {
        match self.score(current_momentum) {
            Some(score) => (score, true),
            None => (0.0, false),
        }
    }

    // === Accessors ===

    /// Current `(dir_scale, momentum_scale)`
    #[inline]
    pub fn scales(&self) -> (f64, f64) {
        (self.dir_scale, self.momentum_scale)
    }

    #[inline]
    pub fn book_depth(&self) -> usize {
        self.book_depth
    }

    /// Snapshot of scoring failures by kind
    pub fn score_failures(&self) -> ScoreFailureCounts {
        self.failures.get()
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn flow(&self) -> &F {
        &self.flow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use overshoot_core::OrderBookLevel;
    use overshoot_ports::{ScoreError, ScoreResult};

    fn t(secs: i64) -> Timestamp {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    /// Window that records what it receives and returns a scripted score
    #[derive(Default, Clone)]
    struct ScriptedWindow {
        points: Vec<WindowPoint>,
        outcome: Option<ScoreResult<f64>>,
    }

    impl SlidingWindowPort for ScriptedWindow {
        fn add(&mut self, point: WindowPoint) {
            self.points.push(point);
        }

        fn momentum(&self) -> Option<f64> {
            None
        }

        fn total_volume(&self) -> f64 {
            self.points.iter().map(|p| p.volume).sum()
        }

        fn median_price(&self) -> Option<f64> {
            None
        }

        fn score_with_momentum(&self, _: f64, _: f64, _: f64, _: f64) -> ScoreResult<f64> {
            self.outcome.clone().unwrap_or(Err(ScoreError::ZeroScale))
        }
    }

    /// Window that echoes its arguments back as the score
    struct EchoWindow;

    impl SlidingWindowPort for EchoWindow {
        fn add(&mut self, _point: WindowPoint) {}

        fn momentum(&self) -> Option<f64> {
            None
        }

        fn total_volume(&self) -> f64 {
            0.0
        }

        fn median_price(&self) -> Option<f64> {
            None
        }

        fn score_with_momentum(
            &self,
            momentum: f64,
            dir_scale: f64,
            momentum_scale: f64,
            confidence: f64,
        ) -> ScoreResult<f64> {
            // Encode argument order into one number
            Ok(momentum * 1000.0 + dir_scale * 100.0 + momentum_scale * 10.0 + confidence)
        }
    }

    #[derive(Default, Clone)]
    struct RecordingFlow {
        trades: Vec<Trade>,
        books: Vec<(OrderBook, usize)>,
        confidence: f64,
    }

    impl OrderFlowPort for RecordingFlow {
        fn update_trade(&mut self, trade: &Trade) {
            self.trades.push(*trade);
        }

        fn update_order_book(&mut self, book: &OrderBook, depth: usize) {
            self.books.push((book.clone(), depth));
            self.confidence = 0.25;
        }

        fn confidence(&self) -> f64 {
            self.confidence
        }
    }

    #[test]
    fn test_defaults() {
        let engine = OvershootEngine::new(0.2, Span::seconds(60), 100);
        assert_eq!(engine.scales(), (0.00005920, 0.00033251));
        assert_eq!(engine.book_depth(), 5);
        assert_eq!(engine.total_vol(), 0.0);
        assert!(engine.momentum().is_none());
        assert!(engine.mid_price().is_none());
    }

    #[test]
    fn test_events_routed_to_one_collaborator() {
        let mut engine =
            OvershootEngine::with_collaborators(ScriptedWindow::default(), RecordingFlow::default());

        engine.add_tick(100.0, 2.0, t(0));
        engine.add_trade(true, 100.5, 1.0, t(1));
        engine.add_trade(false, 99.5, 3.0, t(2));
        engine.add_order_book(t(3), [OrderBookLevel::bid(99.0, 1.0, 1.0)]);

        assert_eq!(engine.window().points, vec![WindowPoint::new(t(0), 100.0, 2.0)]);
        assert_eq!(engine.total_vol(), 2.0);

        let trades = &engine.flow().trades;
        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].side, TradeSide::Buy);
        assert_eq!(trades[1].side, TradeSide::Sell);
        assert_eq!(trades[1].volume, 3.0);
        assert_eq!(engine.flow().books.len(), 1);
    }

    #[test]
    fn test_score_argument_order() {
        let mut engine = OvershootEngine::with_collaborators(EchoWindow, RecordingFlow::default());
        engine.set_scale(3.0, 2.0);
        engine.add_order_book(t(0), Vec::<OrderBookLevel>::new());

        // 4 * 1000 + 3 * 100 + 2 * 10 + 0.25
        assert_eq!(engine.score(4.0), Some(4320.25));
    }

    #[test]
    fn test_score_failure_collapses_and_counts() {
        let window = ScriptedWindow {
            outcome: Some(Err(ScoreError::DegenerateWindow("flat".to_string()))),
            ..Default::default()
        };
        let engine = OvershootEngine::with_collaborators(window, RecordingFlow::default());

        assert_eq!(engine.score(0.01), None);
        assert_eq!(engine.score_or_zero(0.01), (0.0, false));
        assert_eq!(engine.score_failures().degenerate_window, 2);
        assert_eq!(engine.score_failures().total(), 2);
    }

    #[test]
    fn test_score_through_shared_reference() {
        fn score_all<W: SlidingWindowPort, F: OrderFlowPort>(
            engine: &OvershootEngine<W, F>,
            momenta: &[f64],
        ) -> Vec<Option<f64>> {
            momenta.iter().map(|&m| engine.score(m)).collect()
        }

        let window = ScriptedWindow {
            outcome: Some(Err(ScoreError::InsufficientData { have: 1, need: 2 })),
            ..Default::default()
        };
        let engine = OvershootEngine::with_collaborators(window, RecordingFlow::default());
        let shared = &engine;

        assert_eq!(score_all(shared, &[0.1, 0.2, 0.3]), vec![None; 3]);
        assert_eq!(shared.score_failures().insufficient_data, 3);

        // Counters carry over into clones and stay independent afterwards
        let copy = engine.clone();
        copy.score(0.0);
        assert_eq!(copy.score_failures().insufficient_data, 4);
        assert_eq!(engine.score_failures().insufficient_data, 3);
    }

    #[test]
    fn test_score_success() {
        let window = ScriptedWindow {
            outcome: Some(Ok(-0.3)),
            ..Default::default()
        };
        let engine = OvershootEngine::with_collaborators(window, RecordingFlow::default());

        assert_eq!(engine.score_or_zero(0.0), (-0.3, true));
        assert_eq!(engine.score_failures().total(), 0);
    }

    #[test]
    fn test_book_depth_override() {
        let mut engine =
            OvershootEngine::with_collaborators(ScriptedWindow::default(), RecordingFlow::default())
                .with_book_depth(10);
        engine.add_order_book(t(0), [OrderBookLevel::ask(101.0, 1.0, 1.0)]);

        assert_eq!(engine.book_depth(), 10);
        assert_eq!(engine.flow().books[0].1, 10);
    }

    #[test]
    fn test_from_config() {
        let config = OvershootConfig {
            dir_scale: 0.5,
            momentum_scale: -0.25,
            book_depth: 3,
            ..Default::default()
        };
        let engine = OvershootEngine::from_config(&config).unwrap();
        assert_eq!(engine.scales(), (0.5, -0.25));
        assert_eq!(engine.book_depth(), 3);
        assert_eq!(engine.window().capacity(), 100);

        let bad = OvershootConfig {
            window_capacity: 0,
            ..Default::default()
        };
        assert!(matches!(
            OvershootEngine::from_config(&bad),
            Err(ConfigError::Invalid(_))
        ));
    }
}
