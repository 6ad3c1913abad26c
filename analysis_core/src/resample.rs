//! Calendar-bucket resampling of OHLCV series.
//!
//! - Fine bars (daily or intraday) aggregate into week or month buckets.
//! - Week buckets are Monday 00:00:00Z-aligned, using a week epoch of
//!   1969-12-29 (Unix epoch shifted back three days).
//! - Month buckets use a linear (year, month) index relative to 1970-01.
//!
//! All bucket math assumes UTC timestamps. Aggregation is first/max/min/last
//! for open/high/low/close and sum for volume; buckets with no contributing
//! bars never appear in the output.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use market_data::models::{
    bar::Bar,
    bar_series::BarSeries,
    timeframe::{Timeframe, TimeframeUnit},
};
use tracing::debug;

use crate::errors::AnalysisError;

/// Number of seconds in a day.
const SECS_PER_DAY: i64 = 24 * 60 * 60;
/// Number of seconds in a week.
const SECS_PER_WEEK: i64 = 7 * SECS_PER_DAY;

/// shift so Monday 1969-12-29 00:00Z becomes index 0
const WEEK_MONDAY_ANCHOR_OFFSET_SECS: i64 = 3 * SECS_PER_DAY;

/// Resamples `series` to the `target` timeframe.
///
/// - A target equal to the series' own granularity (or a daily target) is a
///   passthrough: the input comes back unchanged.
/// - Weekly and monthly targets aggregate into calendar buckets; an empty
///   input yields an empty output.
/// - Any other intraday target cannot be produced from the supplied series
///   and fails with [`AnalysisError::UnsupportedTimeframe`] — never a silent
///   fallback to the native granularity.
pub fn resample(series: &BarSeries, target: Timeframe) -> Result<BarSeries, AnalysisError> {
    if series.timeframe == target {
        return Ok(series.clone());
    }

    match target.unit() {
        TimeframeUnit::Day => Ok(series.clone()),
        TimeframeUnit::Week => Ok(aggregate(series, target, week_id, week_start)),
        TimeframeUnit::Month => Ok(aggregate(series, target, month_id, month_start)),
        TimeframeUnit::Minute => Err(AnalysisError::UnsupportedTimeframe {
            from: series.timeframe,
            to: target,
        }),
    }
}

/// Folds consecutive bars into calendar buckets.
///
/// Relies on the series ordering invariant: bars arrive in strictly
/// increasing timestamp order, so equal bucket ids are always adjacent.
fn aggregate(
    series: &BarSeries,
    target: Timeframe,
    id_of: fn(DateTime<Utc>) -> i64,
    start_of: fn(i64) -> DateTime<Utc>,
) -> BarSeries {
    let mut bars: Vec<Bar> = Vec::new();
    let mut current: Option<(i64, Bar)> = None;

    for bar in &series.bars {
        let id = id_of(bar.timestamp);
        match &mut current {
            Some((open_id, acc)) if *open_id == id => {
                acc.high = acc.high.max(bar.high);
                acc.low = acc.low.min(bar.low);
                acc.close = bar.close;
                acc.volume += bar.volume;
            }
            _ => {
                if let Some((_, finished)) = current.take() {
                    bars.push(finished);
                }
                current = Some((
                    id,
                    Bar {
                        timestamp: start_of(id),
                        open: bar.open,
                        high: bar.high,
                        low: bar.low,
                        close: bar.close,
                        volume: bar.volume,
                    },
                ));
            }
        }
    }
    if let Some((_, finished)) = current {
        bars.push(finished);
    }

    debug!(
        from = %series.timeframe,
        to = %target,
        input_bars = series.len(),
        output_bars = bars.len(),
        "aggregated series"
    );

    BarSeries {
        symbol: series.symbol.clone(),
        timeframe: target,
        bars,
    }
}

// ----- week internals (Monday-aligned) -----

fn week_id(ts_utc: DateTime<Utc>) -> i64 {
    (ts_utc.timestamp() + WEEK_MONDAY_ANCHOR_OFFSET_SECS).div_euclid(SECS_PER_WEEK)
}

fn week_start(id: i64) -> DateTime<Utc> {
    let unix_secs = id * SECS_PER_WEEK - WEEK_MONDAY_ANCHOR_OFFSET_SECS;
    Utc.timestamp_opt(unix_secs, 0)
        .single()
        .expect("getting start timestamp from week id")
}

// ----- month internals (calendar-aware) -----

fn month_id(ts_utc: DateTime<Utc>) -> i64 {
    // Linear month index relative to 1970-01 (index 0).
    let y = ts_utc.year() as i64;
    let m = ts_utc.month() as i64; // 1..=12
    (y - 1970) * 12 + (m - 1)
}

fn month_start(id: i64) -> DateTime<Utc> {
    let y = 1970 + id.div_euclid(12);
    let month = (id.rem_euclid(12) + 1) as u32; // 1..12
    Utc.with_ymd_and_hms(y as i32, month, 1, 0, 0, 0)
        .single()
        .expect("getting start timestamp from month id")
}
