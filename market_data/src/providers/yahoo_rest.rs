//! Yahoo Finance chart-endpoint provider.
//!
//! Fetches OHLCV bars from the public `v8/finance/chart` endpoint and
//! normalizes the vendor's nullable column arrays into [`Bar`] rows. KR
//! tickers are addressed through the vendor's `.KS` suffix convention, so one
//! provider covers both supported markets.

use chrono::{DateTime, Utc};
use reqwest::{Client, header};
use serde::Deserialize;
use shared_utils::env::get_env_var_or;
use snafu::ResultExt;
use tracing::debug;

use crate::{
    models::{
        bar::Bar, bar_series::BarSeries, market::Market, request_params::BarsRequestParams,
        timeframe::{Timeframe, TimeframeUnit},
    },
    providers::{
        ApiSnafu, ClientBuildSnafu, DataProvider, NoDataSnafu, ProviderError, ProviderInitError,
        ReqwestSnafu, ValidationSnafu,
    },
};

use async_trait::async_trait;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Environment variable overriding the chart endpoint base URL (useful for
/// pointing tests or mirrors at a different host).
const BASE_URL_ENV: &str = "STOCK_CHART_BASE_URL";

pub struct YahooProvider {
    client: Client,
    base_url: String,
}

impl YahooProvider {
    /// Creates a new Yahoo chart provider.
    ///
    /// The endpoint requires no credentials; only a browser-like user agent.
    pub fn new() -> Result<Self, ProviderInitError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static("Mozilla/5.0"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self {
            client,
            base_url: get_env_var_or(BASE_URL_ENV, DEFAULT_BASE_URL),
        })
    }
}

/// Maps a [`Timeframe`] onto the vendor's interval spelling.
///
/// The chart endpoint only serves a subset of the minute granularities the
/// rest of the system can represent; unsupported combinations are rejected
/// here rather than silently downgraded.
fn vendor_interval(timeframe: &Timeframe) -> Result<&'static str, ProviderError> {
    match (timeframe.unit(), timeframe.amount().get()) {
        (TimeframeUnit::Minute, 1) => Ok("1m"),
        (TimeframeUnit::Minute, 5) => Ok("5m"),
        (TimeframeUnit::Minute, 15) => Ok("15m"),
        (TimeframeUnit::Minute, 30) => Ok("30m"),
        (TimeframeUnit::Minute, 60) => Ok("60m"),
        (TimeframeUnit::Minute, m) => ValidationSnafu {
            message: format!("interval {m}m is not served by the chart endpoint"),
        }
        .fail(),
        (TimeframeUnit::Day, _) => Ok("1d"),
        (TimeframeUnit::Week, _) => Ok("1wk"),
        (TimeframeUnit::Month, _) => Ok("1mo"),
    }
}

/// The exchange-qualified symbol the vendor expects.
fn remote_symbol(symbol: &str, market: Market) -> String {
    match market {
        Market::Kr => format!("{symbol}.KS"),
        Market::Us => symbol.to_string(),
    }
}

#[derive(Deserialize, Debug)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Deserialize, Debug)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartApiError>,
}

#[derive(Deserialize, Debug)]
struct ChartApiError {
    code: String,
    description: String,
}

#[derive(Deserialize, Debug)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: ChartIndicators,
}

#[derive(Deserialize, Debug)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

/// Column arrays as delivered by the vendor: one entry per timestamp, with
/// `null` holes for halted or unreported intervals.
#[derive(Deserialize, Debug, Default)]
struct ChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

/// Normalizes one chart result into bar rows.
///
/// Rows with any missing OHLCV field are dropped, never zero-filled, and the
/// output is sorted and de-duplicated so the series ordering invariant holds
/// regardless of what the vendor returned.
fn bars_from_result(result: ChartResult) -> Vec<Bar> {
    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();

    let mut bars: Vec<Bar> = result
        .timestamp
        .iter()
        .enumerate()
        .filter_map(|(i, &secs)| {
            let timestamp = DateTime::<Utc>::from_timestamp(secs, 0)?;
            Some(Bar {
                timestamp,
                open: (*quote.open.get(i)?)?,
                high: (*quote.high.get(i)?)?,
                low: (*quote.low.get(i)?)?,
                close: (*quote.close.get(i)?)?,
                volume: (*quote.volume.get(i)?)?,
            })
        })
        .filter(|bar| {
            [bar.open, bar.high, bar.low, bar.close, bar.volume]
                .iter()
                .all(|v| v.is_finite())
        })
        .collect();

    bars.sort_by_key(|b| b.timestamp);
    bars.dedup_by_key(|b| b.timestamp);
    bars
}

#[async_trait]
impl DataProvider for YahooProvider {
    async fn fetch_bars(&self, params: BarsRequestParams) -> Result<BarSeries, ProviderError> {
        let interval = vendor_interval(&params.timeframe)?;
        let symbol = remote_symbol(&params.symbol, params.market);
        let url = format!("{}/v8/finance/chart/{symbol}", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("interval", interval.to_string()),
                ("period1", params.start.timestamp().to_string()),
                ("period2", params.end.timestamp().to_string()),
            ])
            .send()
            .await
            .context(ReqwestSnafu)?;

        if !response.status().is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return ApiSnafu { message }.fail();
        }

        let envelope = response.json::<ChartEnvelope>().await.context(ReqwestSnafu)?;

        if let Some(err) = envelope.chart.error {
            return ApiSnafu {
                message: format!("{}: {}", err.code, err.description),
            }
            .fail();
        }

        let result = envelope
            .chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) });
        let Some(result) = result else {
            return NoDataSnafu {
                symbol: params.symbol,
            }
            .fail();
        };

        let bars = bars_from_result(result);
        if bars.is_empty() {
            return NoDataSnafu {
                symbol: params.symbol,
            }
            .fail();
        }
        debug!(symbol = %params.symbol, bars = bars.len(), %interval, "fetched chart data");

        Ok(BarSeries {
            symbol: params.symbol,
            timeframe: params.timeframe,
            bars,
        })
    }
}
