//! Moving Average Convergence Divergence.

/// Exponential moving average with smoothing factor `α = 2 / (span + 1)`,
/// seeded by the first observation (no bias-adjustment warm-up). Output is
/// index-aligned with the input.
pub fn ema(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    for &value in values {
        let next = match out.last() {
            None => value,
            Some(prev) => alpha * value + (1.0 - alpha) * prev,
        };
        out.push(next);
    }
    out
}

/// Last values of the MACD line, signal line, and histogram.
///
/// All three are `None` only for zero-length input; a single bar already
/// yields a (zero-valued) reading, matching the seeded EMA recurrence.
pub fn last(
    values: &[f64],
    fast_span: usize,
    slow_span: usize,
    signal_span: usize,
) -> (Option<f64>, Option<f64>, Option<f64>) {
    if values.is_empty() {
        return (None, None, None);
    }

    let fast = ema(values, fast_span);
    let slow = ema(values, slow_span);
    let macd_line: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal_line = ema(&macd_line, signal_span);

    let macd = macd_line[macd_line.len() - 1];
    let signal = signal_line[signal_line.len() - 1];
    (Some(macd), Some(signal), Some(macd - signal))
}
