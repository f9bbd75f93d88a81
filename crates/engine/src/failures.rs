use overshoot_ports::ScoreErrorKind;
use serde::Serialize;

/// Per-kind tally of scoring attempts that produced no value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreFailureCounts {
    pub insufficient_data: u64,
    pub degenerate_window: u64,
    pub zero_scale: u64,
    pub non_finite: u64,
}

impl ScoreFailureCounts {
    pub fn record(&mut self, kind: ScoreErrorKind) {
        let slot = match kind {
            ScoreErrorKind::InsufficientData => &mut self.insufficient_data,
            ScoreErrorKind::DegenerateWindow => &mut self.degenerate_window,
            ScoreErrorKind::ZeroScale => &mut self.zero_scale,
            ScoreErrorKind::NonFinite => &mut self.non_finite,
        };
        *slot = slot.saturating_add(1);
    }

    /// Failures of any kind
    pub fn total(&self) -> u64 {
        self.insufficient_data
            .saturating_add(self.degenerate_window)
            .saturating_add(self.zero_scale)
            .saturating_add(self.non_finite)
    }
}
