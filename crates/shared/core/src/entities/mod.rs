mod level;
mod order_book;
mod side;
mod trade;

pub use level::{BookLevel, Level, OrderBookLevel};
pub use order_book::OrderBook;
pub use side::{BookSide, TradeSide};
pub use trade::{Trade, WindowPoint};
