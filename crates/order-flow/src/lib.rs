//! Overshoot Order Flow
//!
//! Reference implementation of [`OrderFlowPort`]. Trades are classified by
//! aggressor side, book snapshots are cut to the requested depth, and both
//! imbalances are exponentially smoothed into a confidence in [0, 1].
//!
//! ```text
//!   Trade ──► buy/sell volume EMAs ──► trade imbalance ─┐
//!                                                        ├─► confidence
//!   OrderBook ──► DepthSummary ──► book imbalance EMA ──┘
//! ```
//!
//! [`OrderFlowPort`]: overshoot_ports::OrderFlowPort

mod book;
mod engine;

pub use book::DepthSummary;
pub use engine::OrderFlowEngine;
