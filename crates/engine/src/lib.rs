//! Overshoot Engine
//!
//! Fuses short-term price momentum with order-flow conviction into a single
//! "overshoot" score: how far price has run ahead of what recent flow backs.
//!
//! ## Architecture
//!
//! ```text
//!  add_tick ─────────► SlidingWindow ──── momentum / total_vol / mid_price
//!                            ▲
//!                            │ score_with_momentum(m, dir, mom, confidence)
//!                            │
//!  score(m) ─────────► OvershootEngine
//!                            │
//!                            │ confidence()
//!                            ▼
//!  add_trade ────────► OrderFlowEngine
//!  add_order_book ───►   (depth-bounded)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chrono::{Duration, Utc};
//! use overshoot_engine::OvershootEngine;
//!
//! let mut engine = OvershootEngine::new(0.2, Duration::seconds(60), 100);
//! engine.add_tick(100.0, 10.0, Utc::now());
//! engine.add_tick(101.0, 5.0, Utc::now());
//!
//! if let Some(m) = engine.momentum() {
//!     let (score, ok) = engine.score_or_zero(m);
//! }
//! ```

pub mod config;
mod engine;
mod failures;

pub use config::{ConfigError, OvershootConfig};
pub use engine::OvershootEngine;
pub use failures::ScoreFailureCounts;

// Collaborator and value types callers need to drive the engine
pub use overshoot_core::{BookSide, Level, OrderBookLevel, Span, Timestamp};
pub use overshoot_flow::OrderFlowEngine;
pub use overshoot_ports::{OrderFlowPort, ScoreError, ScoreErrorKind, SlidingWindowPort};
pub use overshoot_window::SlidingWindow;
