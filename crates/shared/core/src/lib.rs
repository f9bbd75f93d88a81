//! Overshoot Core Domain
//!
//! Pure value types shared by the overshoot engine and its collaborators.
//! This crate contains no I/O; the only mutable state is the `Ema` helper.

pub mod entities;
pub mod stats;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    BookLevel, BookSide, Level, OrderBook, OrderBookLevel, Trade, TradeSide, WindowPoint,
};
pub use stats::Ema;
pub use values::{Span, Timestamp};
