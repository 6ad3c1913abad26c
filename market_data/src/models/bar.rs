//! Canonical in-memory representation of a time-series bar (OHLCV).
//!
//! This struct is the standard output of every
//! [`DataProvider`](crate::providers::DataProvider) implementation, regardless
//! of the upstream vendor or market. Rows with missing price fields are dropped
//! at the retrieval boundary; a constructed `Bar` always carries finite values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single time-series bar (OHLCV) for a given timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// The timestamp for this bar (UTC, start of the bar interval).
    pub timestamp: DateTime<Utc>,

    /// Opening price.
    pub open: f64,

    /// Highest price during the bar interval.
    pub high: f64,

    /// Lowest price during the bar interval.
    pub low: f64,

    /// Closing price.
    pub close: f64,

    /// Volume traded during the bar interval.
    pub volume: f64,
}
