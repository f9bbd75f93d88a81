use overshoot_core::WindowPoint;

use crate::error::ScoreResult;

/// Port for the time-decayed sliding window of ticks
///
/// Implementations own eviction (by age and by capacity), exponential
/// smoothing and the scoring formula. The engine only routes ticks in and
/// reads values out.
pub trait SlidingWindowPort {
    /// Add one market tick
    fn add(&mut self, point: WindowPoint);

    /// Current momentum estimate, `None` while there is not enough data
    fn momentum(&self) -> Option<f64>;

    /// Aggregate volume of the retained ticks (0 when empty)
    fn total_volume(&self) -> f64;

    /// Median price of the retained ticks, `None` when empty
    fn median_price(&self) -> Option<f64>;

    /// Fuse a momentum value with flow confidence into an overshoot score
    ///
    /// Arguments are passed in this exact order by the engine.
    fn score_with_momentum(
        &self,
        momentum: f64,
        dir_scale: f64,
        momentum_scale: f64,
        confidence: f64,
    ) -> ScoreResult<f64>;
}
