//! Universal parameters for requesting time-series bar data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{market::Market, timeframe::Timeframe};

/// Vendor-agnostic parameters for a bars request.
///
/// This is the standard input for every
/// [`DataProvider`](crate::providers::DataProvider) implementation. Validation
/// of allowed timeframe/period combinations is performed by each provider
/// according to its own API rules; some vendors reject combinations (e.g.
/// long-range minute bars) that are representable here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BarsRequestParams {
    /// Ticker to request (e.g., `"AAPL"`, `"005930"`).
    pub symbol: String,

    /// The market the ticker is listed on.
    pub market: Market,

    /// The time interval for each bar.
    pub timeframe: Timeframe,

    /// Start of the requested time range (inclusive, UTC).
    pub start: DateTime<Utc>,

    /// End of the requested time range (exclusive, UTC).
    pub end: DateTime<Utc>,
}

impl BarsRequestParams {
    /// Builds a request ending at `end` whose range covers the default
    /// lookback span for `timeframe` (see [`Timeframe::lookback`]).
    pub fn with_lookback(
        symbol: impl Into<String>,
        market: Market,
        timeframe: Timeframe,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            market,
            timeframe,
            start: end - timeframe.lookback(),
            end,
        }
    }
}
