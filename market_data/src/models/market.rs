//! Market tag carried alongside a ticker.
//!
//! Detection heuristics (is this ticker Korean or US?) belong to the request
//! layer; the data and analysis crates only carry the tag through.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Market {
    /// Korea Exchange listings (numeric six-digit tickers).
    Kr,
    /// US exchange listings.
    Us,
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Market::Kr => write!(f, "KR"),
            Market::Us => write!(f, "US"),
        }
    }
}
