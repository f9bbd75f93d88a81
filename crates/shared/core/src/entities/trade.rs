use serde::{Deserialize, Serialize};

use super::side::TradeSide;
use crate::values::Timestamp;

/// One executed transaction, side is the aggressor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub timestamp: Timestamp,
    pub price: f64,
    pub volume: f64,
    pub side: TradeSide,
}

impl Trade {
    pub fn new(timestamp: Timestamp, price: f64, volume: f64, side: TradeSide) -> Self {
        Self {
            timestamp,
            price,
            volume,
            side,
        }
    }

    /// Create a buyer-initiated trade
    pub fn buy(timestamp: Timestamp, price: f64, volume: f64) -> Self {
        Self::new(timestamp, price, volume, TradeSide::Buy)
    }

    /// Create a seller-initiated trade
    pub fn sell(timestamp: Timestamp, price: f64, volume: f64) -> Self {
        Self::new(timestamp, price, volume, TradeSide::Sell)
    }
}

/// One market tick fed into a sliding window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowPoint {
    pub timestamp: Timestamp,
    pub price: f64,
    pub volume: f64,
}

impl WindowPoint {
    pub fn new(timestamp: Timestamp, price: f64, volume: f64) -> Self {
        Self {
            timestamp,
            price,
            volume,
        }
    }
}
