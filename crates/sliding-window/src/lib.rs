//! Overshoot Sliding Window
//!
//! Reference implementation of [`SlidingWindowPort`]: a time- and
//! capacity-bounded buffer of ticks with an exponentially smoothed price.
//!
//! # Readouts
//!
//! - `momentum`: `(ema - median) / median` once two ticks are retained
//! - `total_volume`: sum of retained tick volumes
//! - `median_price`: median of retained tick prices
//! - `score`: momentum and price drift against VWAP, squashed with `tanh`
//!   and discounted by order-flow confidence
//!
//! [`SlidingWindowPort`]: overshoot_ports::SlidingWindowPort

mod window;

pub use window::{MIN_POINTS, SlidingWindow};
