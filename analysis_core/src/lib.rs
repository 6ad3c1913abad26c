//! Technical-analysis core: indicator computation and multi-timeframe
//! normalization over already-materialized OHLCV series.
//!
//! The crate is a pure, synchronous computation layer: it receives a
//! [`BarSeries`](market_data::models::bar_series::BarSeries) from a
//! data-retrieval collaborator, optionally resamples it to a requested
//! calendar timeframe, derives the standard indicator snapshot, tallies a
//! three-way recommendation, and assembles the chart-ready analysis report.
//! There is no shared mutable state and no I/O; concurrent use over
//! independent series is safe by construction.

pub mod errors;
pub mod indicators;
pub mod report;
pub mod resample;
pub mod signal;

pub use errors::AnalysisError;
pub use indicators::{
    BollingerBands, Macd, TechnicalIndicators, compute_indicators, compute_rsi_series,
};
pub use report::{ChartData, StockAnalysis, build_report};
pub use resample::resample;
pub use signal::{Recommendation, recommend};
