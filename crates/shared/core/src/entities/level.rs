use serde::{Deserialize, Serialize};

use super::side::BookSide;

/// Capability set of a raw order book level handed in by a caller.
///
/// Any value exposing these four accessors can be ingested, so venue adapters
/// can pass their own level types without converting to [`OrderBookLevel`].
pub trait Level {
    /// Level price
    fn price(&self) -> f64;

    /// Aggregate resting size at this price
    fn size(&self) -> f64;

    /// Size of the best/relevant single order at this price
    fn order_size(&self) -> f64;

    /// Side tag, `"bids"` for bids (any case), anything else for asks
    fn kind(&self) -> &str;

    /// Side derived from [`Level::kind`]
    fn side(&self) -> BookSide {
        BookSide::from_tag(self.kind())
    }
}

impl<L: Level + ?Sized> Level for &L {
    fn price(&self) -> f64 {
        (**self).price()
    }

    fn size(&self) -> f64 {
        (**self).size()
    }

    fn order_size(&self) -> f64 {
        (**self).order_size()
    }

    fn kind(&self) -> &str {
        (**self).kind()
    }
}

impl<L: Level + ?Sized> Level for Box<L> {
    fn price(&self) -> f64 {
        (**self).price()
    }

    fn size(&self) -> f64 {
        (**self).size()
    }

    fn order_size(&self) -> f64 {
        (**self).order_size()
    }

    fn kind(&self) -> &str {
        (**self).kind()
    }
}

/// Immutable order book level with a fixed side tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookLevel {
    price: f64,
    size: f64,
    order_size: f64,
    kind: String,
}

impl OrderBookLevel {
    /// Create a level tagged `"bids"` or `"asks"`
    pub fn new(price: f64, size: f64, order_size: f64, is_bid: bool) -> Self {
        let side = if is_bid { BookSide::Bid } else { BookSide::Ask };
        Self::with_tag(price, size, order_size, side.tag())
    }

    /// Create a bid level
    pub fn bid(price: f64, size: f64, order_size: f64) -> Self {
        Self::new(price, size, order_size, true)
    }

    /// Create an ask level
    pub fn ask(price: f64, size: f64, order_size: f64) -> Self {
        Self::new(price, size, order_size, false)
    }

    /// Create a level carrying a raw venue tag, classified on ingestion
    pub fn with_tag(price: f64, size: f64, order_size: f64, tag: impl Into<String>) -> Self {
        Self {
            price,
            size,
            order_size,
            kind: tag.into(),
        }
    }
}

impl Level for OrderBookLevel {
    fn price(&self) -> f64 {
        self.price
    }

    fn size(&self) -> f64 {
        self.size
    }

    fn order_size(&self) -> f64 {
        self.order_size
    }

    fn kind(&self) -> &str {
        &self.kind
    }
}

/// One side-less price level inside an [`OrderBook`](super::OrderBook)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BookLevel {
    pub price: f64,
    pub size: f64,
    pub order_size: f64,
}

impl BookLevel {
    pub fn new(price: f64, size: f64, order_size: f64) -> Self {
        Self {
            price,
            size,
            order_size,
        }
    }

    /// Copy the numeric fields of any [`Level`]
    pub fn from_level<L: Level + ?Sized>(level: &L) -> Self {
        Self::new(level.price(), level.size(), level.order_size())
    }
}
