//! Report assembly: price statistics, indicators, recommendation, narrative
//! summary, and chart-ready series, packaged per request.

use chrono::{DateTime, Utc};
use market_data::models::{bar_series::BarSeries, market::Market, timeframe::Timeframe};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    errors::AnalysisError,
    indicators::{self, TechnicalIndicators},
    resample::resample,
    signal::{Recommendation, recommend},
};

/// Fixed fallback sentence for a summary that could not be generated. Never
/// used to mask an indicator-engine fault: summaries are only built after
/// indicator computation has succeeded.
pub const SUMMARY_UNAVAILABLE: &str = "A technical analysis summary could not be generated.";

/// Chart-ready series aligned index-for-index with the (resampled) bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Bar dates, `%Y-%m-%d`.
    pub dates: Vec<String>,
    /// Close prices.
    pub prices: Vec<f64>,
    /// Bar volumes.
    pub volumes: Vec<u64>,
    /// RSI series with the neutral 50.0 substitution policy.
    pub rsi: Vec<f64>,
    /// The granularity the chart was built at.
    pub timeframe: Timeframe,
}

/// The complete analysis report for one ticker. Immutable after assembly and
/// never stored; the timestamp is supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAnalysis {
    pub ticker: String,
    pub market: Market,
    pub current_price: f64,
    pub change_percent: f64,
    pub volume: u64,
    pub indicators: TechnicalIndicators,
    pub recommendation: Recommendation,
    pub analysis_summary: String,
    pub timestamp: DateTime<Utc>,
    pub chart_data: ChartData,
}

/// Builds the narrative summary from fixed sentence templates.
///
/// Generation is total: sentences whose inputs are absent are skipped, and a
/// non-finite percent change falls back to [`SUMMARY_UNAVAILABLE`] instead of
/// failing.
pub fn analysis_summary(indicators: &TechnicalIndicators, change_percent: f64) -> String {
    if !change_percent.is_finite() {
        warn!(change_percent, "cannot describe price move, using fallback summary");
        return SUMMARY_UNAVAILABLE.to_string();
    }

    let mut parts: Vec<String> = Vec::new();

    if change_percent > 0.0 {
        parts.push(format!(
            "The price is trending up, gaining {:.2}% over the previous close.",
            change_percent.abs()
        ));
    } else {
        parts.push(format!(
            "The price is trending down, losing {:.2}% against the previous close.",
            change_percent.abs()
        ));
    }

    if let Some(rsi) = indicators.rsi {
        if rsi < 30.0 {
            parts.push(
                "The RSI is in oversold territory, leaving room for a rebound.".to_string(),
            );
        } else if rsi > 70.0 {
            parts.push(
                "The RSI is in overbought territory, suggesting a possible pullback.".to_string(),
            );
        } else {
            parts.push("The RSI sits in a neutral range.".to_string());
        }
    }

    if let (Some(sma_50), Some(sma_200)) = (indicators.sma_50, indicators.sma_200) {
        if sma_50 > sma_200 {
            parts.push(
                "The 50-day moving average is above the 200-day moving average, pointing to a longer-term uptrend."
                    .to_string(),
            );
        } else {
            parts.push(
                "The 50-day moving average is below the 200-day moving average, pointing to a longer-term downtrend."
                    .to_string(),
            );
        }
    }

    parts.join(" ")
}

/// Assembles the full analysis report for one ticker.
///
/// The series is resampled to the requested timeframe first; structural
/// failures (unsupported timeframe, empty series, missing previous close,
/// zero-division in the percent change) abort with a fault, while
/// indicator-level insufficiency only produces absent snapshot fields.
pub fn build_report(
    ticker: &str,
    market: Market,
    series: &BarSeries,
    timeframe: Timeframe,
    as_of: DateTime<Utc>,
) -> Result<StockAnalysis, AnalysisError> {
    let resampled = resample(series, timeframe)?;

    let n = resampled.len();
    if n == 0 {
        return Err(AnalysisError::EmptySeries);
    }
    if n < 2 {
        return Err(AnalysisError::InsufficientData { needed: 2, got: n });
    }

    let current_price = resampled.bars[n - 1].close;
    let previous_close = resampled.bars[n - 2].close;
    if previous_close == 0.0 {
        return Err(AnalysisError::UndefinedArithmetic(
            "previous close is zero, percent change is undefined",
        ));
    }
    let change_percent = (current_price - previous_close) / previous_close * 100.0;
    if !change_percent.is_finite() {
        return Err(AnalysisError::UndefinedArithmetic(
            "percent change is not finite",
        ));
    }

    let snapshot = indicators::compute_indicators(&resampled)?;
    let recommendation = recommend(&snapshot);
    let summary = analysis_summary(&snapshot, change_percent);

    debug!(
        ticker,
        %timeframe,
        bars = n,
        %recommendation,
        "assembled analysis report"
    );

    let chart_data = ChartData {
        dates: resampled
            .bars
            .iter()
            .map(|b| b.timestamp.format("%Y-%m-%d").to_string())
            .collect(),
        prices: resampled.closes(),
        volumes: resampled.bars.iter().map(|b| b.volume as u64).collect(),
        rsi: indicators::compute_rsi_series(&resampled),
        timeframe,
    };

    Ok(StockAnalysis {
        ticker: ticker.to_string(),
        market,
        current_price,
        change_percent,
        volume: resampled.bars[n - 1].volume as u64,
        indicators: snapshot,
        recommendation,
        analysis_summary: summary,
        timestamp: as_of,
        chart_data,
    })
}
