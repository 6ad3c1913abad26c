//! A collection of time-series bars for a specific symbol and timeframe.

use crate::models::{bar::Bar, timeframe::Timeframe};
use serde::{Deserialize, Serialize};

/// Represents a complete set of time-series data for a single symbol.
///
/// This struct groups a vector of [`Bar`]s with their corresponding symbol
/// and [`Timeframe`], making the data set self-describing. Bars are ordered
/// by strictly increasing timestamp; consumers treat the series as read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    /// The symbol this data represents (e.g., "AAPL", "005930").
    pub symbol: String,
    /// The time interval for each bar in the series.
    pub timeframe: Timeframe,
    /// The collection of OHLCV bars.
    pub bars: Vec<Bar>,
}

impl BarSeries {
    /// Number of bars in the series.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// True when the series holds no bars.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The close column, in bar order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Checks the ordering invariant: timestamps strictly increase, so there
    /// are no duplicate or out-of-order bars.
    pub fn is_strictly_ordered(&self) -> bool {
        self.bars.windows(2).all(|w| w[0].timestamp < w[1].timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn bar(day: u32, close: f64) -> Bar {
        let ts = Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap();
        Bar {
            timestamp: ts,
            open: close,
            high: close,
            low: close,
            close,
            volume: 1000.0,
        }
    }

    #[test]
    fn closes_follow_bar_order() {
        let series = BarSeries {
            symbol: "AAPL".to_string(),
            timeframe: Timeframe::daily(),
            bars: vec![bar(1, 10.0), bar(2, 11.0), bar(3, 9.5)],
        };
        assert_eq!(series.closes(), vec![10.0, 11.0, 9.5]);
        assert_eq!(series.len(), 3);
        assert!(series.is_strictly_ordered());
    }

    #[test]
    fn duplicate_timestamps_break_ordering() {
        let series = BarSeries {
            symbol: "AAPL".to_string(),
            timeframe: Timeframe::daily(),
            bars: vec![bar(1, 10.0), bar(1, 11.0)],
        };
        assert!(!series.is_strictly_ordered());
    }
}
