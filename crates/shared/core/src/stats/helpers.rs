//! Small statistics helpers over price/volume slices

/// Median of a set of values, `None` when empty.
///
/// Even counts average the two middle values.
pub fn median(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut sorted: Vec<f64> = values.into_iter().collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Volume-weighted average price of (price, volume) pairs.
///
/// Returns `None` if there is no volume to weight by.
pub fn vwap(pairs: impl IntoIterator<Item = (f64, f64)>) -> Option<f64> {
    let (notional, volume) = pairs
        .into_iter()
        .fold((0.0, 0.0), |(n, v), (price, vol)| (n + price * vol, v + vol));
    if volume <= 0.0 {
        None
    } else {
        Some(notional / volume)
    }
}

/// Simple return calculation: (new - old) / old
#[inline]
pub fn simple_return(old: f64, new: f64) -> Option<f64> {
    if old == 0.0 {
        return None;
    }
    Some((new - old) / old)
}

/// Normalized imbalance: (a - b) / (a + b)
///
/// Lies in [-1, 1] for non-negative inputs. `None` when there is nothing on
/// either side.
#[inline]
pub fn imbalance(a: f64, b: f64) -> Option<f64> {
    let total = a + b;
    if total <= 0.0 {
        None
    } else {
        Some((a - b) / total)
    }
}
