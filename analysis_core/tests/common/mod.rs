#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};
use market_data::models::{bar::Bar, bar_series::BarSeries, timeframe::Timeframe};

/// Builds a daily series starting Monday 2023-01-02, one bar per calendar
/// day, with flat OHLC at the given closes and slowly growing volume.
pub fn daily_series(closes: &[f64]) -> BarSeries {
    let start = Utc.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap();
    BarSeries {
        symbol: "TEST".to_string(),
        timeframe: Timeframe::daily(),
        bars: closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Bar {
                timestamp: start + Duration::days(i as i64),
                open: close,
                high: close,
                low: close,
                close,
                volume: 1000.0 + 10.0 * i as f64,
            })
            .collect(),
    }
}

/// A long flat base followed by a decelerating monotonic ramp from 50 to 150
/// over the last 50 bars: deep in overbought territory while momentum fades.
pub fn overbought_uptrend() -> BarSeries {
    let mut closes = vec![50.0; 250];
    for i in 0..50 {
        closes.push(50.0 + 100.0 * (((i + 1) as f64) / 50.0).sqrt());
    }
    daily_series(&closes)
}
