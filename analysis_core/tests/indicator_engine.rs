mod common;

use analysis_core::{compute_indicators, compute_rsi_series};
use common::daily_series;

#[test]
fn sma_fields_gate_on_history_length() {
    let short: Vec<f64> = (0..49).map(f64::from).collect();
    let snapshot = compute_indicators(&daily_series(&short)).unwrap();
    assert_eq!(snapshot.sma_50, None);
    assert_eq!(snapshot.sma_200, None);

    let medium: Vec<f64> = (0..50).map(f64::from).collect();
    let snapshot = compute_indicators(&daily_series(&medium)).unwrap();
    assert!(snapshot.sma_50.is_some());
    assert_eq!(snapshot.sma_200, None);

    let long: Vec<f64> = (0..250).map(f64::from).collect();
    let snapshot = compute_indicators(&daily_series(&long)).unwrap();
    let expected = long[50..].iter().sum::<f64>() / 200.0;
    assert_eq!(snapshot.sma_200, Some(expected));
}

#[test]
fn constant_rise_pins_rsi_while_flat_is_absent() {
    let rising: Vec<f64> = (1..=40).map(f64::from).collect();
    let snapshot = compute_indicators(&daily_series(&rising)).unwrap();
    assert_eq!(snapshot.rsi, Some(100.0));

    let flat = vec![75.0; 40];
    let snapshot = compute_indicators(&daily_series(&flat)).unwrap();
    assert_eq!(snapshot.rsi, None);
}

#[test]
fn rsi_series_is_aligned_and_finite() {
    for closes in [
        vec![],
        vec![10.0],
        vec![75.0; 40],
        (1..=40).map(f64::from).collect::<Vec<_>>(),
    ] {
        let series = daily_series(&closes);
        let rsi = compute_rsi_series(&series);
        assert_eq!(rsi.len(), closes.len());
        assert!(rsi.iter().all(|v| v.is_finite()));
    }

    let rising: Vec<f64> = (1..=40).map(f64::from).collect();
    let rsi = compute_rsi_series(&daily_series(&rising));
    assert!(rsi[..13].iter().all(|v| *v == 50.0));
    assert!(rsi[13..].iter().all(|v| *v == 100.0));
}

#[test]
fn bollinger_tail_is_symmetric_and_window_gated() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + (i % 7) as f64).collect();
    let snapshot = compute_indicators(&daily_series(&closes)).unwrap();
    let bands = &snapshot.bollinger_bands;

    assert_eq!(bands.upper.len(), 20);
    assert_eq!(bands.middle.len(), 20);
    assert_eq!(bands.lower.len(), 20);

    // Tail covers input positions 10..30; windows complete from 19, i.e.
    // tail index 9.
    for i in 0..9 {
        assert_eq!(bands.middle[i], None);
    }
    for i in 9..20 {
        let (u, m, l) = (
            bands.upper[i].unwrap(),
            bands.middle[i].unwrap(),
            bands.lower[i].unwrap(),
        );
        assert!(((u - m) - (m - l)).abs() < 1e-9);
    }
}

#[test]
fn macd_is_present_for_any_non_empty_series() {
    let snapshot = compute_indicators(&daily_series(&[42.0])).unwrap();
    assert_eq!(snapshot.macd.macd, Some(0.0));
    assert_eq!(snapshot.macd.signal, Some(0.0));
    assert_eq!(snapshot.macd.histogram, Some(0.0));

    let snapshot = compute_indicators(&daily_series(&[])).unwrap();
    assert_eq!(snapshot.macd.macd, None);
}
