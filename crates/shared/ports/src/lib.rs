//! Overshoot Ports
//!
//! Port definitions (traits) for the overshoot engine's collaborators.
//! These define the boundary between the scoring core and the analytic
//! subsystems it depends on.

mod error;
mod flow;
mod window;

pub use error::{ScoreError, ScoreErrorKind, ScoreResult};
pub use flow::OrderFlowPort;
pub use window::SlidingWindowPort;
