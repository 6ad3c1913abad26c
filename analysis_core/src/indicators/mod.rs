//! The indicator engine: batch computation of the standard snapshot over a
//! bar series' close column.
//!
//! Every snapshot field is optional: `None` is the defined-missing value for
//! insufficient history or mathematically undefined results, and it is what
//! serializes to `null` on the wire — never zero, never NaN. The chart RSI
//! series is the one deliberate exception (see [`rsi::NEUTRAL_RSI`]).

pub mod bollinger;
pub mod macd;
pub mod rsi;
pub mod sma;

use market_data::models::bar_series::BarSeries;
use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;

/// Short simple-moving-average window (bars).
pub const SMA_SHORT_WINDOW: usize = 50;
/// Long simple-moving-average window (bars).
pub const SMA_LONG_WINDOW: usize = 200;
/// RSI rolling-mean period (bars).
pub const RSI_PERIOD: usize = 14;
/// MACD fast EMA span.
pub const MACD_FAST_SPAN: usize = 12;
/// MACD slow EMA span.
pub const MACD_SLOW_SPAN: usize = 26;
/// MACD signal EMA span.
pub const MACD_SIGNAL_SPAN: usize = 9;
/// Bollinger rolling window (bars).
pub const BOLLINGER_WINDOW: usize = 20;
/// Bollinger band width in standard deviations.
pub const BOLLINGER_WIDTH: f64 = 2.0;
/// Number of trailing band positions exposed for charting.
pub const BOLLINGER_TAIL: usize = 20;

/// Last values of the MACD line, signal line, and histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Macd {
    pub macd: Option<f64>,
    pub signal: Option<f64>,
    pub histogram: Option<f64>,
}

/// Trailing band positions for charting, index-aligned with the most recent
/// bars; incomplete windows stay absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub upper: Vec<Option<f64>>,
    pub middle: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// The standard indicator snapshot derived from one bar series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalIndicators {
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Macd,
    pub bollinger_bands: BollingerBands,
}

/// Boundary sanitization: NaN and infinite results become absent, whichever
/// formula produced them.
fn sanitize(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Computes the full indicator snapshot for a series.
///
/// Insufficient history is not an error at this level: it yields absent
/// fields (an empty series yields an all-absent snapshot). The report
/// assembler decides whether that is fatal.
pub fn compute_indicators(series: &BarSeries) -> Result<TechnicalIndicators, AnalysisError> {
    let closes = series.closes();

    let (macd_last, signal_last, histogram_last) = macd::last(
        &closes,
        MACD_FAST_SPAN,
        MACD_SLOW_SPAN,
        MACD_SIGNAL_SPAN,
    );
    let bands = bollinger::tail(&closes, BOLLINGER_WINDOW, BOLLINGER_WIDTH, BOLLINGER_TAIL);

    Ok(TechnicalIndicators {
        sma_50: sanitize(sma::last(&closes, SMA_SHORT_WINDOW)),
        sma_200: sanitize(sma::last(&closes, SMA_LONG_WINDOW)),
        rsi: sanitize(rsi::last(&closes, RSI_PERIOD)),
        macd: Macd {
            macd: sanitize(macd_last),
            signal: sanitize(signal_last),
            histogram: sanitize(histogram_last),
        },
        bollinger_bands: BollingerBands {
            upper: bands.upper.into_iter().map(sanitize).collect(),
            middle: bands.middle.into_iter().map(sanitize).collect(),
            lower: bands.lower.into_iter().map(sanitize).collect(),
        },
    })
}

/// Chart-oriented RSI series: one finite value per input bar, neutral (50.0)
/// wherever the rolling window is incomplete or the result is undefined.
pub fn compute_rsi_series(series: &BarSeries) -> Vec<f64> {
    rsi::series(&series.closes(), RSI_PERIOD)
}
