//! Exponential Moving Average over floating-point observations

/// EMA (Exponential Moving Average) calculator
///
/// EMA formula: new_ema = alpha * value + (1 - alpha) * old_ema
///
/// The first observation seeds the average directly.
#[derive(Debug, Clone)]
pub struct Ema {
    /// Current EMA value
    value: f64,
    /// Smoothing factor in (0, 1]
    alpha: f64,
    /// Whether the EMA has been initialized with at least one value
    initialized: bool,
}

impl Ema {
    /// Create EMA with a smoothing factor.
    ///
    /// Non-finite or out-of-range alphas are clamped into (0, 1].
    pub fn with_alpha(alpha: f64) -> Self {
        Self {
            value: 0.0,
            alpha: sanitize_alpha(alpha),
            initialized: false,
        }
    }

    /// Update EMA with new value and return the new average
    #[inline]
    pub fn update(&mut self, value: f64) -> f64 {
        if !self.initialized {
            self.value = value;
            self.initialized = true;
        } else {
            self.value = self.alpha * value + (1.0 - self.alpha) * self.value;
        }
        self.value
    }

    /// Get current EMA value
    #[inline]
    pub fn value(&self) -> Option<f64> {
        if self.initialized {
            Some(self.value)
        } else {
            None
        }
    }

    /// Check if initialized
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Get the smoothing factor
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Reset the EMA
    pub fn reset(&mut self) {
        self.value = 0.0;
        self.initialized = false;
    }
}

/// Clamp a smoothing factor into (0, 1]
///
/// NaN and values above one map to 1.0, non-positive values to `f64::EPSILON`.
pub fn sanitize_alpha(alpha: f64) -> f64 {
    if alpha > 0.0 && alpha <= 1.0 {
        alpha
    } else if alpha.is_nan() || alpha > 1.0 {
        1.0
    } else {
        f64::EPSILON
    }
}
