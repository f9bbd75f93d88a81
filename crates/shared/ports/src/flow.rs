use overshoot_core::{OrderBook, Trade};

/// Port for the order-flow analysis engine
///
/// Implementations classify trades, accumulate book imbalance and turn both
/// into a directional confidence.
pub trait OrderFlowPort {
    /// Feed one executed trade
    fn update_trade(&mut self, trade: &Trade);

    /// Feed one book snapshot, considering at most `depth` levels per side
    fn update_order_book(&mut self, book: &OrderBook, depth: usize);

    /// Directional conviction of recent flow, in `[0, 1]`
    fn confidence(&self) -> f64;
}
