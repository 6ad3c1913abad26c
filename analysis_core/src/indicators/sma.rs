//! Simple moving average over a trailing window.

/// Mean of the last `window` values, or `None` when fewer values exist.
pub fn last(values: &[f64], window: usize) -> Option<f64> {
    if window == 0 || values.len() < window {
        return None;
    }
    let tail = &values[values.len() - window..];
    Some(tail.iter().sum::<f64>() / window as f64)
}

/// Positional rolling mean: `out[i]` covers `values[i + 1 - window ..= i]`
/// and is `None` while the window is incomplete.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if window == 0 || i + 1 < window {
                None
            } else {
                let slice = &values[i + 1 - window..=i];
                Some(slice.iter().sum::<f64>() / window as f64)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_has_no_mean() {
        assert_eq!(last(&[1.0, 2.0], 3), None);
        assert_eq!(last(&[], 1), None);
    }

    #[test]
    fn mean_covers_exactly_the_trailing_window() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(last(&values, 2), Some(3.5));
        assert_eq!(last(&values, 4), Some(2.5));
    }

    #[test]
    fn rolling_mean_is_absent_until_the_window_fills() {
        let values = [2.0, 4.0, 6.0, 8.0];
        assert_eq!(
            rolling_mean(&values, 2),
            vec![None, Some(3.0), Some(5.0), Some(7.0)]
        );
    }
}
