//! Engine configuration
//!
//! Loaded from JSON. Every field is optional and falls back to the defaults
//! below, so `{}` is a valid configuration.

use overshoot_core::Span;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default normalizer for directional drift
pub const DEFAULT_DIR_SCALE: f64 = 0.000_059_20;

/// Default normalizer for momentum
pub const DEFAULT_MOMENTUM_SCALE: f64 = 0.000_332_51;

/// Book levels per side handed to the order-flow engine
pub const DEFAULT_BOOK_DEPTH: usize = 5;

pub const DEFAULT_EMA_ALPHA: f64 = 0.2;
pub const DEFAULT_WINDOW_DURATION_MS: u64 = 60_000;
pub const DEFAULT_WINDOW_CAPACITY: usize = 100;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Configuration for one [`OvershootEngine`](crate::OvershootEngine)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvershootConfig {
    /// Smoothing factor shared by both collaborators, in (0, 1]
    pub ema_alpha: f64,
    /// Maximum tick age in the sliding window
    pub window_duration_ms: u64,
    /// Maximum ticks in the window and trades in the flow history
    pub window_capacity: usize,
    pub dir_scale: f64,
    pub momentum_scale: f64,
    /// Levels per side considered on each book update
    pub book_depth: usize,
}

impl Default for OvershootConfig {
    fn default() -> Self {
        Self {
            ema_alpha: DEFAULT_EMA_ALPHA,
            window_duration_ms: DEFAULT_WINDOW_DURATION_MS,
            window_capacity: DEFAULT_WINDOW_CAPACITY,
            dir_scale: DEFAULT_DIR_SCALE,
            momentum_scale: DEFAULT_MOMENTUM_SCALE,
            book_depth: DEFAULT_BOOK_DEPTH,
        }
    }
}

impl OvershootConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Window duration as a time span
    ///
    /// Saturates at the largest representable span.
    pub fn window_duration(&self) -> Span {
        i64::try_from(self.window_duration_ms)
            .ok()
            .and_then(Span::try_milliseconds)
            .unwrap_or(Span::MAX)
    }

    /// Validate the configuration
    ///
    /// Scales only need to be finite; negative values flip sign conventions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.ema_alpha > 0.0 && self.ema_alpha <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "ema_alpha must be in (0, 1], got {}",
                self.ema_alpha
            )));
        }
        if self.window_duration_ms == 0 {
            return Err(ConfigError::Invalid(
                "window_duration_ms must be positive".to_string(),
            ));
        }
        if self.window_capacity == 0 {
            return Err(ConfigError::Invalid(
                "window_capacity must be positive".to_string(),
            ));
        }
        if !self.dir_scale.is_finite() || !self.momentum_scale.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "scales must be finite, got dir_scale={} momentum_scale={}",
                self.dir_scale, self.momentum_scale
            )));
        }
        if self.book_depth == 0 {
            return Err(ConfigError::Invalid("book_depth must be positive".to_string()));
        }
        Ok(())
    }
}
