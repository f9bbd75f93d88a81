//! Sliding window of ticks bounded by age and by count

use std::collections::VecDeque;

use log::{debug, warn};
use overshoot_core::stats::{self, Ema};
use overshoot_core::{Span, Timestamp, WindowPoint};
use overshoot_ports::{ScoreError, ScoreResult, SlidingWindowPort};

/// Minimum number of retained points for momentum and scoring
pub const MIN_POINTS: usize = 2;

/// Time- and capacity-bounded window of price/volume ticks
///
/// Points are kept sorted by timestamp. A point older than
/// `newest - duration` is evicted; a point exactly `duration` old stays.
/// After age eviction the oldest points are dropped until at most
/// `capacity` remain.
///
/// The price EMA follows arrival order, not timestamp order, so a late tick
/// still nudges the smoothed price.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    points: VecDeque<WindowPoint>,
    duration: Span,
    capacity: usize,
    ema: Ema,
    /// Sum of retained volumes, rebuilt from `points` after every push
    volume_sum: f64,
}

impl SlidingWindow {
    /// Create a new window
    pub fn new(duration: Span, capacity: usize, alpha: f64) -> Self {
        let duration = if duration < Span::zero() {
            warn!("Negative window duration {}, using zero", duration);
            Span::zero()
        } else {
            duration
        };
        let capacity = capacity.max(1);
        let sanitized = stats::sanitize_alpha(alpha);
        if sanitized != alpha {
            warn!("EMA alpha {} out of range, using {}", alpha, sanitized);
        }
        Self {
            points: VecDeque::with_capacity(capacity.min(4096)),
            duration,
            capacity,
            ema: Ema::with_alpha(alpha),
            volume_sum: 0.0,
        }
    }

    /// Add a tick, dropping malformed or stale ones
    pub fn push(&mut self, point: WindowPoint) {
        if !point.price.is_finite() || point.price <= 0.0 {
            warn!("Dropping tick with invalid price {}", point.price);
            return;
        }
        if !point.volume.is_finite() || point.volume < 0.0 {
            warn!("Dropping tick with invalid volume {}", point.volume);
            return;
        }
        if let Some(cutoff) = self.cutoff()
            && point.timestamp < cutoff
        {
            debug!(
                "Dropping stale tick at {} (cutoff {}, window {})",
                point.timestamp, cutoff, self.duration
            );
            return;
        }

        self.ema.update(point.price);

        // Insert after any existing point with an equal timestamp
        let idx = self
            .points
            .partition_point(|p| p.timestamp <= point.timestamp);
        self.points.insert(idx, point);

        self.evict();
        self.volume_sum = self.points.iter().map(|p| p.volume).sum();
    }

    /// Oldest timestamp still inside the window, `None` when nothing can age out
    fn cutoff(&self) -> Option<Timestamp> {
        self.newest_timestamp()?.checked_sub_signed(self.duration)
    }

    fn evict(&mut self) {
        let cutoff = self.cutoff();

        while let Some(front) = self.points.front() {
            let fresh = cutoff.is_none_or(|c| front.timestamp >= c);
            if fresh && self.points.len() <= self.capacity {
                break;
            }
            self.points.pop_front();
        }
    }

    // === Readouts ===

    /// Momentum: relative displacement of the smoothed price from the median
    ///
    /// `(ema - median) / median`, `None` with fewer than [`MIN_POINTS`] points.
    pub fn momentum(&self) -> Option<f64> {
        if self.points.len() < MIN_POINTS {
            return None;
        }
        let median = self.median_price()?;
        let ema = self.ema.value()?;
        stats::simple_return(median, ema)
    }

    /// Sum of retained volumes
    #[inline]
    pub fn total_volume(&self) -> f64 {
        self.volume_sum
    }

    /// Median of retained prices
    pub fn median_price(&self) -> Option<f64> {
        stats::median(self.points.iter().map(|p| p.price))
    }

    /// Volume-weighted average price of retained ticks
    pub fn vwap(&self) -> Option<f64> {
        stats::vwap(self.points.iter().map(|p| (p.price, p.volume)))
    }

    /// Smoothed price
    #[inline]
    pub fn ema_price(&self) -> Option<f64> {
        self.ema.value()
    }

    /// Most recent tick by timestamp
    #[inline]
    pub fn last(&self) -> Option<&WindowPoint> {
        self.points.back()
    }

    /// Oldest retained tick
    #[inline]
    pub fn first(&self) -> Option<&WindowPoint> {
        self.points.front()
    }

    #[inline]
    pub fn newest_timestamp(&self) -> Option<Timestamp> {
        self.points.back().map(|p| p.timestamp)
    }

    /// Retained ticks, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &WindowPoint> {
        self.points.iter()
    }

    /// Score a momentum value against the window's directional drift
    ///
    /// ```text
    /// drift    = (last_price - vwap) / vwap
    /// pressure = (tanh(momentum / momentum_scale) + tanh(drift / dir_scale)) / 2
    /// score    = pressure * (1 - clamp(confidence, 0, 1))
    /// ```
    ///
    /// The score lies in [-1, 1]; its sign is the direction of the move and
    /// its magnitude the part of the move that flow conviction does not back.
    pub fn score(
        &self,
        momentum: f64,
        dir_scale: f64,
        momentum_scale: f64,
        confidence: f64,
    ) -> ScoreResult<f64> {
        if self.points.len() < MIN_POINTS {
            return Err(ScoreError::InsufficientData {
                have: self.points.len(),
                need: MIN_POINTS,
            });
        }
        for (name, value) in [
            ("momentum", momentum),
            ("dir_scale", dir_scale),
            ("momentum_scale", momentum_scale),
            ("confidence", confidence),
        ] {
            if !value.is_finite() {
                return Err(ScoreError::NonFinite(name));
            }
        }
        if dir_scale == 0.0 || momentum_scale == 0.0 {
            return Err(ScoreError::ZeroScale);
        }

        let vwap = self
            .vwap()
            .ok_or_else(|| ScoreError::DegenerateWindow("no traded volume".to_string()))?;
        let last = self
            .last()
            .map(|p| p.price)
            .ok_or_else(|| ScoreError::DegenerateWindow("empty window".to_string()))?;
        let drift = stats::simple_return(vwap, last)
            .ok_or_else(|| ScoreError::DegenerateWindow("zero vwap".to_string()))?;

        let pressure = 0.5 * ((momentum / momentum_scale).tanh() + (drift / dir_scale).tanh());
        Ok(pressure * (1.0 - confidence.clamp(0.0, 1.0)))
    }

    // === Bookkeeping ===

    /// Get number of retained ticks
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check if the count bound is reached
    #[inline]
    pub fn is_full(&self) -> bool {
        self.points.len() >= self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn duration(&self) -> Span {
        self.duration
    }

    #[inline]
    pub fn alpha(&self) -> f64 {
        self.ema.alpha()
    }

    /// Clear all ticks and the smoothed price
    pub fn clear(&mut self) {
        self.points.clear();
        self.ema.reset();
        self.volume_sum = 0.0;
    }
}

impl SlidingWindowPort for SlidingWindow {
    fn add(&mut self, point: WindowPoint) {
        self.push(point);
    }

    fn momentum(&self) -> Option<f64> {
        SlidingWindow::momentum(self)
    }

    fn total_volume(&self) -> f64 {
        SlidingWindow::total_volume(self)
    }

    fn median_price(&self) -> Option<f64> {
        SlidingWindow::median_price(self)
    }

    fn score_with_momentum(
        &self,
        momentum: f64,
        dir_scale: f64,
        momentum_scale: f64,
        confidence: f64,
    ) -> ScoreResult<f64> {
        self.score(momentum, dir_scale, momentum_scale, confidence)
    }
}
