//! Floating-point statistics shared by the analytic collaborators
//!
//! - `Ema`: exponential moving average seeded by its first observation
//! - `median`, `vwap`, `simple_return`, `imbalance`: slice helpers

mod ema;
mod helpers;

pub use ema::{Ema, sanitize_alpha};
pub use helpers::{imbalance, median, simple_return, vwap};
