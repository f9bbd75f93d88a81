use thiserror::Error;

/// Reasons a sliding window can refuse to produce a score
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("Insufficient data: have {have} points, need {need}")]
    InsufficientData { have: usize, need: usize },

    #[error("Degenerate window: {0}")]
    DegenerateWindow(String),

    #[error("Scale must be non-zero")]
    ZeroScale,

    #[error("Non-finite input: {0}")]
    NonFinite(&'static str),
}

impl ScoreError {
    /// Short stable label, used for logging and failure counters
    pub fn kind(&self) -> ScoreErrorKind {
        match self {
            ScoreError::InsufficientData { .. } => ScoreErrorKind::InsufficientData,
            ScoreError::DegenerateWindow(_) => ScoreErrorKind::DegenerateWindow,
            ScoreError::ZeroScale => ScoreErrorKind::ZeroScale,
            ScoreError::NonFinite(_) => ScoreErrorKind::NonFinite,
        }
    }
}

/// Field-less discriminant of [`ScoreError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreErrorKind {
    InsufficientData,
    DegenerateWindow,
    ZeroScale,
    NonFinite,
}

impl ScoreErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreErrorKind::InsufficientData => "insufficient_data",
            ScoreErrorKind::DegenerateWindow => "degenerate_window",
            ScoreErrorKind::ZeroScale => "zero_scale",
            ScoreErrorKind::NonFinite => "non_finite",
        }
    }
}

pub type ScoreResult<T> = std::result::Result<T, ScoreError>;
