//! Relative Strength Index over simple trailing means.
//!
//! Both forms use plain rolling means of gains and losses (not Wilder's
//! smoothing) but encode missing results differently, and that difference is
//! intentional, observable behavior:
//!
//! - [`last`] returns `None` for an incomplete window or an undefined 0/0
//!   relative strength (the snapshot's Absent policy).
//! - [`series`] substitutes [`NEUTRAL_RSI`] at those positions so chart
//!   consumers always receive one finite value per input bar.

/// Neutral substitution used by the chart-oriented [`series`] form wherever
/// the rolling window is incomplete or the relative strength is undefined.
pub const NEUTRAL_RSI: f64 = 50.0;

/// Period-over-period gains and losses, index-aligned with the input.
///
/// The first position carries no delta and counts as a zero move, matching
/// the rolling-mean alignment of the formula.
fn gains_losses(closes: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let mut gains = vec![0.0; closes.len().min(1)];
    let mut losses = vec![0.0; closes.len().min(1)];
    for pair in closes.windows(2) {
        let delta = pair[1] - pair[0];
        gains.push(delta.max(0.0));
        losses.push((-delta).max(0.0));
    }
    (gains, losses)
}

/// RSI from average gain/loss. `None` when both averages are zero (0/0);
/// exactly 100 when only the loss average is zero (RS → ∞).
fn from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            return None;
        }
        return Some(100.0);
    }
    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}

/// Final RSI value over the trailing `period` window, or `None` when the
/// series is too short or the relative strength is undefined.
pub fn last(closes: &[f64], period: usize) -> Option<f64> {
    let n = closes.len();
    if period == 0 || n < period {
        return None;
    }
    let (gains, losses) = gains_losses(closes);
    let avg_gain = gains[n - period..].iter().sum::<f64>() / period as f64;
    let avg_loss = losses[n - period..].iter().sum::<f64>() / period as f64;
    from_averages(avg_gain, avg_loss)
}

/// Positional RSI series, one finite value per input close.
pub fn series(closes: &[f64], period: usize) -> Vec<f64> {
    let (gains, losses) = gains_losses(closes);
    closes
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if period == 0 || i + 1 < period {
                return NEUTRAL_RSI;
            }
            let avg_gain = gains[i + 1 - period..=i].iter().sum::<f64>() / period as f64;
            let avg_loss = losses[i + 1 - period..=i].iter().sum::<f64>() / period as f64;
            from_averages(avg_gain, avg_loss)
                .filter(|v| v.is_finite())
                .unwrap_or(NEUTRAL_RSI)
        })
        .collect()
}
