//! Provider abstraction for market data sources.
//!
//! This module defines the [`DataProvider`] trait, the unified interface for
//! fetching time-series bar data from a market data vendor. Each concrete
//! implementation (such as [`yahoo_rest::YahooProvider`]) handles
//! vendor-specific API logic and validation.
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`dyn DataProvider`) for runtime selection of providers.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use market_data::models::{bar_series::BarSeries, request_params::BarsRequestParams};
//! use market_data::providers::{DataProvider, ProviderError};
//!
//! struct MyProvider;
//!
//! #[async_trait]
//! impl DataProvider for MyProvider {
//!     async fn fetch_bars(
//!         &self,
//!         params: BarsRequestParams,
//!     ) -> Result<BarSeries, ProviderError> {
//!         Ok(BarSeries {
//!             symbol: params.symbol,
//!             timeframe: params.timeframe,
//!             bars: vec![],
//!         })
//!     }
//! }
//! ```

pub mod yahoo_rest;

use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use crate::models::{bar_series::BarSeries, request_params::BarsRequestParams};

/// Trait for fetching time-series bar data from a market data provider.
///
/// Implement this trait for each concrete data vendor. A provider must return
/// the series already normalized: bars ordered by strictly increasing
/// timestamp with finite OHLCV fields. An empty or rejected upstream result
/// is a fetch failure ([`ProviderError::NoData`]), never an empty success —
/// callers need to tell "no data" apart from "broken data".
#[async_trait]
pub trait DataProvider {
    /// Fetches time-series bar data for the given request parameters.
    async fn fetch_bars(&self, params: BarsRequestParams) -> Result<BarSeries, ProviderError>;
}

/// Errors that can occur during the creation of a provider instance.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },
}

/// Errors that can occur within a `DataProvider` implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[snafu(display("API request failed: {source}"))]
    Reqwest {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The provider's API returned a specific error message.
    #[snafu(display("API error: {message}"))]
    Api {
        message: String,
        backtrace: Backtrace,
    },

    /// The upstream returned no usable bars for the symbol. Distinct from
    /// transport errors so callers never mistake an empty feed for success.
    #[snafu(display("No data returned for symbol {symbol}"))]
    NoData {
        symbol: String,
        backtrace: Backtrace,
    },

    /// The request parameters were invalid for this specific provider.
    #[snafu(display("Invalid parameters for provider: {message}"))]
    Validation {
        message: String,
        backtrace: Backtrace,
    },

    /// An error during provider configuration or initialization.
    #[snafu(display("Provider initialization error: {source}"))]
    Init {
        #[snafu(backtrace)]
        source: ProviderInitError,
    },
}
