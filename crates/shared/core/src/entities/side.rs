use serde::{Deserialize, Serialize};

/// Aggressor side of an executed trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    /// Map the `is_buy` flag callers hand in
    pub fn from_is_buy(is_buy: bool) -> Self {
        if is_buy { TradeSide::Buy } else { TradeSide::Sell }
    }
}

/// Side of the book a level rests on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookSide {
    Bid,
    Ask,
}

impl BookSide {
    /// Tag carried by bid levels
    pub const BID_TAG: &'static str = "bids";
    /// Tag carried by ask levels
    pub const ASK_TAG: &'static str = "asks";

    /// Classify a raw level tag.
    ///
    /// Only a case-insensitive `"bids"` is a bid. Every other tag, including
    /// the empty string and unknown venue tags, is treated as an ask.
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case(Self::BID_TAG) {
            BookSide::Bid
        } else {
            BookSide::Ask
        }
    }

    /// Canonical tag for this side
    pub fn tag(&self) -> &'static str {
        match self {
            BookSide::Bid => Self::BID_TAG,
            BookSide::Ask => Self::ASK_TAG,
        }
    }
}
