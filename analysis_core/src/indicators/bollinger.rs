//! Bollinger Bands: a rolling mean flanked by ±k sample standard deviations.

use crate::indicators::{BollingerBands, sma};

/// Rolling sample standard deviation (ddof = 1) over a trailing window,
/// `None` while the window is incomplete.
fn rolling_std(values: &[f64], window: usize) -> Vec<Option<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if window < 2 || i + 1 < window {
                return None;
            }
            let slice = &values[i + 1 - window..=i];
            let mean = slice.iter().sum::<f64>() / window as f64;
            let variance = slice.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
                / (window - 1) as f64;
            Some(variance.sqrt())
        })
        .collect()
}

/// Trailing `tail_len` positions of the upper/middle/lower bands.
///
/// Positions whose rolling window is incomplete stay absent. The tail covers
/// the last `min(len, tail_len)` input positions so the band series stays
/// index-aligned with the chart's most recent bars.
pub fn tail(values: &[f64], window: usize, width: f64, tail_len: usize) -> BollingerBands {
    let middle = sma::rolling_mean(values, window);
    let std = rolling_std(values, window);

    let offset = values.len().saturating_sub(tail_len);
    let mut bands = BollingerBands {
        upper: Vec::new(),
        middle: Vec::new(),
        lower: Vec::new(),
    };
    for i in offset..values.len() {
        let (upper, lower) = match (middle[i], std[i]) {
            (Some(m), Some(s)) => (Some(m + width * s), Some(m - width * s)),
            _ => (None, None),
        };
        bands.upper.push(upper);
        bands.middle.push(middle[i]);
        bands.lower.push(lower);
    }
    bands
}
